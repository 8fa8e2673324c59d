//! Random number generation port.
//!
//! This port abstracts random number generation, enabling:
//! - Deterministic testing with mock RNG
//! - Reproducible roll scenarios
//! - Clean hexagonal architecture (no I/O in the domain layer)

/// Random number generation abstraction for the dice service.
///
/// # Implementations
///
/// - [`ThreadRngAdapter`](crate::adapters::ThreadRngAdapter) (production,
///   uses `rand::thread_rng()`)
/// - `MockRandomPort` via mockall (testing)
/// - [`FixedRandomPort`] for deterministic testing (returns fixed values)
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Generate a random i32 in range [min, max] (inclusive on both ends)
    fn random_range(&self, min: i32, max: i32) -> i32;
}

/// Fixed random port for deterministic testing.
///
/// Returns values from a provided sequence, cycling if needed.
/// Thread-safe via atomic operations.
#[derive(Debug)]
pub struct FixedRandomPort {
    values: Vec<i32>,
    index: std::sync::atomic::AtomicUsize,
}

impl Clone for FixedRandomPort {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            index: std::sync::atomic::AtomicUsize::new(
                self.index.load(std::sync::atomic::Ordering::SeqCst),
            ),
        }
    }
}

impl FixedRandomPort {
    /// Create a new FixedRandomPort with the given sequence of values.
    pub fn new(values: Vec<i32>) -> Self {
        Self {
            values,
            index: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Create a FixedRandomPort that always returns the same value.
    pub fn constant(value: i32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomPort for FixedRandomPort {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        let idx = self
            .index
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        let value = self.values[idx % self.values.len()];
        // Clamp to the requested range
        value.clamp(min, max)
    }
}
