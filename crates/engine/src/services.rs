//! Dice roll resolution service.
//!
//! Rolls pools through the injected [`RandomPort`] and scores them with
//! the domain's edition rules. Scoring a pre-rolled pool (a player typed
//! in physical dice) goes through [`DiceRollService::score`] and consumes
//! no entropy.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use corsairs_domain::{
    calculate_raises, calculate_roll_and_keep, DicePool, DomainError, RuleEdition, MAX_DIE_VALUE,
    MIN_DIE_VALUE,
};

use crate::dto::{RollOutcome, RollRequest, RollResolution};
use crate::ports::RandomPort;

/// Errors from the dice roll service.
#[derive(Debug, Error)]
pub enum DiceServiceError {
    /// A negative dice count indicates a caller bug; it is rejected,
    /// never silently clamped to zero.
    #[error("Dice count must be non-negative, got {0}")]
    InvalidDiceCount(i32),

    /// A domain invariant was violated (e.g. a die value outside 1-10)
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Resolves roll requests against the edition rules.
pub struct DiceRollService {
    /// Random number generator for dice rolls (required for testability)
    rng: Arc<dyn RandomPort>,
}

impl DiceRollService {
    /// Create a new dice roll service.
    ///
    /// # Arguments
    /// * `rng` - Random number generator. Use `ThreadRngAdapter` in
    ///   production, `FixedRandomPort` or `MockRandomPort` in tests for
    ///   deterministic behavior.
    pub fn new(rng: Arc<dyn RandomPort>) -> Self {
        Self { rng }
    }

    /// Roll `count` ten-sided dice.
    ///
    /// Any count of zero or more is accepted; UI-level bounds are the
    /// caller's concern.
    pub fn roll(&self, count: i32) -> Result<DicePool, DiceServiceError> {
        if count < 0 {
            return Err(DiceServiceError::InvalidDiceCount(count));
        }

        let mut values = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let raw = self
                .rng
                .random_range(i32::from(MIN_DIE_VALUE), i32::from(MAX_DIE_VALUE));
            let value = u8::try_from(raw).map_err(|_| {
                DomainError::validation(format!("Random port produced die value {}", raw))
            })?;
            values.push(value);
        }

        let pool = DicePool::new(values)?;
        debug!(count, pool = %pool, "rolled dice pool");
        Ok(pool)
    }

    /// Roll a fresh pool for the request and score it.
    pub fn resolve(&self, request: &RollRequest) -> Result<RollResolution, DiceServiceError> {
        let pool = self.roll(request.dice)?;
        let outcome = self.score(request.edition, &pool, request.keep);
        info!(
            edition = request.edition.display_name(),
            dice = request.dice,
            outcome = %outcome.breakdown(),
            "resolved roll"
        );
        Ok(RollResolution { pool, outcome })
    }

    /// Score a pre-rolled pool under the given edition.
    ///
    /// `keep` only applies to the 1st edition; when absent the whole pool
    /// is kept.
    pub fn score(&self, edition: RuleEdition, pool: &DicePool, keep: Option<i32>) -> RollOutcome {
        match edition {
            RuleEdition::SecondEdition => RollOutcome::Raises(calculate_raises(pool)),
            RuleEdition::FirstEdition => {
                let keep = keep.unwrap_or_else(|| i32::try_from(pool.len()).unwrap_or(i32::MAX));
                RollOutcome::RollAndKeep(calculate_roll_and_keep(pool, keep))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{FixedRandomPort, MockRandomPort};

    fn service_with(values: Vec<i32>) -> DiceRollService {
        DiceRollService::new(Arc::new(FixedRandomPort::new(values)))
    }

    #[test]
    fn test_roll_zero_dice_is_empty() {
        let service = service_with(vec![5]);
        let pool = service.roll(0).unwrap();
        assert!(pool.is_empty());
    }

    #[test]
    fn test_roll_negative_is_rejected() {
        let service = service_with(vec![5]);
        let err = service.roll(-1).unwrap_err();
        assert!(matches!(err, DiceServiceError::InvalidDiceCount(-1)));
    }

    #[test]
    fn test_roll_uses_port_values_in_order() {
        let service = service_with(vec![10, 10, 5, 5]);
        let pool = service.roll(4).unwrap();
        assert_eq!(pool.values(), &[10, 10, 5, 5]);
    }

    #[test]
    fn test_roll_with_mock_port() {
        let mut mock = MockRandomPort::new();
        mock.expect_random_range()
            .withf(|min, max| *min == 1 && *max == 10)
            .times(3)
            .returning(|_, _| 7);
        let service = DiceRollService::new(Arc::new(mock));

        let pool = service.roll(3).unwrap();
        assert_eq!(pool.values(), &[7, 7, 7]);
    }

    #[test]
    fn test_resolve_second_edition() {
        let service = service_with(vec![10, 10, 5, 5]);
        let resolution = service.resolve(&RollRequest::raises(4)).unwrap();
        assert_eq!(resolution.pool.values(), &[10, 10, 5, 5]);
        match resolution.outcome {
            RollOutcome::Raises(result) => {
                assert_eq!(result.raises, 3);
                assert_eq!(result.partition, vec![vec![10], vec![10], vec![5, 5]]);
            }
            RollOutcome::RollAndKeep(_) => panic!("expected raises outcome"),
        }
    }

    #[test]
    fn test_resolve_first_edition() {
        let service = service_with(vec![8, 3, 10, 1, 6]);
        let resolution = service
            .resolve(&RollRequest::roll_and_keep(5, 3))
            .unwrap();
        match resolution.outcome {
            RollOutcome::RollAndKeep(result) => {
                assert_eq!(result.kept, vec![10, 8, 6]);
                assert_eq!(result.total, 24);
            }
            RollOutcome::Raises(_) => panic!("expected roll-and-keep outcome"),
        }
    }

    #[test]
    fn test_first_edition_without_keep_keeps_everything() {
        let service = service_with(vec![4, 4]);
        let pool = service.roll(2).unwrap();
        let outcome = service.score(RuleEdition::FirstEdition, &pool, None);
        match outcome {
            RollOutcome::RollAndKeep(result) => {
                assert_eq!(result.kept, vec![4, 4]);
                assert_eq!(result.total, 8);
            }
            RollOutcome::Raises(_) => panic!("expected roll-and-keep outcome"),
        }
    }

    #[test]
    fn test_score_consumes_no_entropy() {
        // MockRandomPort panics on any unexpected call
        let service = DiceRollService::new(Arc::new(MockRandomPort::new()));
        let pool = DicePool::new(vec![9, 9, 9]).unwrap();
        let outcome = service.score(RuleEdition::SecondEdition, &pool, None);
        match outcome {
            RollOutcome::Raises(result) => assert_eq!(result.raises, 1),
            RollOutcome::RollAndKeep(_) => panic!("expected raises outcome"),
        }
    }

    #[test]
    fn test_roll_range_with_production_adapter() {
        let service = DiceRollService::new(Arc::new(crate::adapters::ThreadRngAdapter::new()));
        for _ in 0..50 {
            let pool = service.roll(20).unwrap();
            assert_eq!(pool.len(), 20);
            assert!(pool.values().iter().all(|&v| (1..=10).contains(&v)));
        }
    }
}
