//! Dice pool value objects.
//!
//! A pool is the ordered list of d10 results from a single roll request.
//! Order carries no scoring meaning but is preserved for display and for
//! deterministic tie-breaking when pools are sorted.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Smallest value a die can show.
pub const MIN_DIE_VALUE: u8 = 1;
/// Largest value a die can show.
pub const MAX_DIE_VALUE: u8 = 10;

/// An ordered pool of ten-sided die results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DicePool {
    /// Individual die results in roll order
    values: Vec<u8>,
}

impl DicePool {
    /// Create a pool from raw die values.
    ///
    /// Every value must be in 1-10. Pools may be empty.
    pub fn new(values: Vec<u8>) -> Result<Self, DomainError> {
        if let Some(&bad) = values
            .iter()
            .find(|&&v| !(MIN_DIE_VALUE..=MAX_DIE_VALUE).contains(&v))
        {
            return Err(DomainError::validation(format!(
                "Die value {} outside {}-{}",
                bad, MIN_DIE_VALUE, MAX_DIE_VALUE
            )));
        }
        Ok(Self { values })
    }

    /// Create an empty pool.
    pub fn empty() -> Self {
        Self { values: Vec::new() }
    }

    /// The die values in original roll order.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Number of dice in the pool.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the pool holds no dice.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all die values.
    pub fn sum(&self) -> u32 {
        self.values.iter().map(|&v| u32::from(v)).sum()
    }
}

impl fmt::Display for DicePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_dice(&self.values))
    }
}

/// Result of scoring a pool under 2nd-edition rules.
///
/// `partition` lists the completed raise groups in the order they were
/// claimed; dice never appear in more than one group. Unused dice are not
/// reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaiseResult {
    /// Number of completed raises
    pub raises: usize,
    /// The dice consumed by each raise, for display/highlighting
    pub partition: Vec<Vec<u8>>,
}

impl RaiseResult {
    /// Format as a breakdown string (e.g., "3 raises: [10] [10] [5, 5]")
    pub fn breakdown(&self) -> String {
        if self.raises == 0 {
            return "no raises".to_string();
        }
        let groups: Vec<String> = self.partition.iter().map(|g| format_dice(g)).collect();
        format!(
            "{} raise{}: {}",
            self.raises,
            if self.raises == 1 { "" } else { "s" },
            groups.join(" ")
        )
    }
}

/// Result of scoring a pool under 1st-edition roll-and-keep rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollAndKeepResult {
    /// The kept dice, highest first
    pub kept: Vec<u8>,
    /// Sum of the kept dice
    pub total: i32,
}

impl RollAndKeepResult {
    /// Format as a breakdown string (e.g., "kept [10, 8, 6] = 24")
    pub fn breakdown(&self) -> String {
        format!("kept {} = {}", format_dice(&self.kept), self.total)
    }
}

fn format_dice(values: &[u8]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_valid_values() {
        let pool = DicePool::new(vec![1, 5, 10]).unwrap();
        assert_eq!(pool.values(), &[1, 5, 10]);
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.sum(), 16);
        assert!(!pool.is_empty());
    }

    #[test]
    fn test_new_accepts_empty() {
        let pool = DicePool::new(vec![]).unwrap();
        assert!(pool.is_empty());
        assert_eq!(pool.sum(), 0);
    }

    #[test]
    fn test_new_rejects_zero() {
        let err = DicePool::new(vec![5, 0, 3]).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(err.to_string().contains("0"));
    }

    #[test]
    fn test_new_rejects_eleven() {
        let err = DicePool::new(vec![11]).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_display() {
        let pool = DicePool::new(vec![8, 3, 10]).unwrap();
        assert_eq!(pool.to_string(), "[8, 3, 10]");
        assert_eq!(DicePool::empty().to_string(), "[]");
    }

    #[test]
    fn test_raise_breakdown() {
        let result = RaiseResult {
            raises: 3,
            partition: vec![vec![10], vec![10], vec![5, 5]],
        };
        assert_eq!(result.breakdown(), "3 raises: [10] [10] [5, 5]");
    }

    #[test]
    fn test_raise_breakdown_singular() {
        let result = RaiseResult {
            raises: 1,
            partition: vec![vec![9, 9]],
        };
        assert_eq!(result.breakdown(), "1 raise: [9, 9]");
    }

    #[test]
    fn test_raise_breakdown_none() {
        let result = RaiseResult {
            raises: 0,
            partition: vec![],
        };
        assert_eq!(result.breakdown(), "no raises");
    }

    #[test]
    fn test_roll_and_keep_breakdown() {
        let result = RollAndKeepResult {
            kept: vec![10, 8, 6],
            total: 24,
        };
        assert_eq!(result.breakdown(), "kept [10, 8, 6] = 24");
    }

    #[test]
    fn test_serde_round_trip() {
        let pool = DicePool::new(vec![7, 2]).unwrap();
        let json = serde_json::to_string(&pool).unwrap();
        assert_eq!(json, r#"{"values":[7,2]}"#);
        let back: DicePool = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pool);
    }
}
