//! 1st-edition roll-and-keep scoring.

use crate::value_objects::{DicePool, RollAndKeepResult};

/// Keep the `keep` highest dice of the pool and sum them.
///
/// `keep` is clamped, never rejected: zero or negative keeps nothing,
/// anything at or above the pool size keeps the whole pool. Ties among
/// equal values resolve by original roll position (stable sort), so the
/// result is deterministic for a fixed input sequence.
pub fn calculate_roll_and_keep(pool: &DicePool, keep: i32) -> RollAndKeepResult {
    let mut sorted = pool.values().to_vec();
    sorted.sort_by(|a, b| b.cmp(a));

    let take = usize::try_from(keep).unwrap_or(0);
    let kept: Vec<u8> = sorted.into_iter().take(take).collect();
    let total: i32 = kept.iter().map(|&v| i32::from(v)).sum();

    RollAndKeepResult { kept, total }
}
