//! 2nd-edition raise scoring.
//!
//! A raise is any group of dice summing to at least 10; the score of a
//! pool is the number of disjoint raises extracted from it. Finding the
//! true maximum is a bin-covering problem, so the default scoring path is
//! a deterministic greedy heuristic whose output the UI highlights
//! directly. The heuristic can miss the optimum on adversarial pools
//! (e.g. `[8, 8, 2, 2]` scores 1 greedy, 2 optimal); that behavior is
//! intentional and pinned by tests. [`calculate_raises_optimal`] exists
//! for the true count on small pools.

use std::collections::HashMap;

use crate::value_objects::{DicePool, RaiseResult, MAX_DIE_VALUE};

/// Largest pool size the exhaustive search will accept.
///
/// Above this, [`calculate_raises_optimal`] silently falls back to the
/// greedy count; subset enumeration is combinatorially infeasible there.
pub const EXACT_SEARCH_LIMIT: usize = 10;

/// Every raise group must reach this sum.
const RAISE_TARGET: u32 = 10;

/// Score a pool with the greedy heuristic.
///
/// The pool is stable-sorted descending, every 10 is claimed as its own
/// raise, then a single forward scan accumulates the remaining dice into
/// groups, closing each group as soon as its running sum reaches 10. A
/// partial group left at the end of the scan is abandoned.
///
/// For a fixed input sequence the returned partition is exactly
/// reproducible: the sort is stable and the scan order fixed.
pub fn calculate_raises(pool: &DicePool) -> RaiseResult {
    let mut sorted = pool.values().to_vec();
    // Stable sort keeps original roll order among equal values
    sorted.sort_by(|a, b| b.cmp(a));

    let mut partition: Vec<Vec<u8>> = Vec::new();
    let mut rest: Vec<u8> = Vec::with_capacity(sorted.len());
    for value in sorted {
        if value == MAX_DIE_VALUE {
            partition.push(vec![value]);
        } else {
            rest.push(value);
        }
    }

    let mut group: Vec<u8> = Vec::new();
    let mut running = 0u32;
    for value in rest {
        group.push(value);
        running += u32::from(value);
        if running >= RAISE_TARGET {
            partition.push(std::mem::take(&mut group));
            running = 0;
        }
    }
    // Any dice still in `group` never reached 10 and count for nothing

    RaiseResult {
        raises: partition.len(),
        partition,
    }
}

/// True maximum raise count for pools of up to [`EXACT_SEARCH_LIMIT`] dice.
///
/// Exhaustively tries every non-empty subset of the remaining dice as a
/// candidate raise and recurses on the rest, memoized on the set of dice
/// still unclaimed. Only the count is returned; callers that need the
/// display partition use [`calculate_raises`].
///
/// Pools larger than the limit fall back to the greedy count without any
/// signal that the answer may be below the optimum.
pub fn calculate_raises_optimal(pool: &DicePool) -> usize {
    let n = pool.len();
    if n > EXACT_SEARCH_LIMIT {
        return calculate_raises(pool).raises;
    }
    if n == 0 {
        return 0;
    }
    let full: u16 = (1u16 << n) - 1;
    let mut memo: HashMap<u16, usize> = HashMap::new();
    best_raises(pool.values(), full, &mut memo)
}

/// Max raises extractable from the dice flagged in `remaining`.
fn best_raises(values: &[u8], remaining: u16, memo: &mut HashMap<u16, usize>) -> usize {
    if remaining == 0 {
        return 0;
    }
    if let Some(&cached) = memo.get(&remaining) {
        return cached;
    }

    // Stopping here (claiming no further raises) is always a valid outcome
    let mut best = 0;
    let mut subset = remaining;
    while subset != 0 {
        if subset_sum(values, subset) >= RAISE_TARGET {
            let candidate = 1 + best_raises(values, remaining & !subset, memo);
            if candidate > best {
                best = candidate;
            }
        }
        subset = (subset - 1) & remaining;
    }

    memo.insert(remaining, best);
    best
}

fn subset_sum(values: &[u8], mask: u16) -> u32 {
    values
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1u16 << i) != 0)
        .map(|(_, &v)| u32::from(v))
        .sum()
}
