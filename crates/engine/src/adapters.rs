//! Production adapters for the engine ports.

use rand::Rng;

use crate::ports::RandomPort;

/// Adapter backing [`RandomPort`] with `rand::thread_rng()`,
/// enabling clean hexagonal architecture where the domain layer doesn't
/// directly depend on `rand`.
#[derive(Debug, Clone, Default)]
pub struct ThreadRngAdapter;

impl ThreadRngAdapter {
    /// Create a new ThreadRngAdapter.
    pub fn new() -> Self {
        Self
    }
}

impl RandomPort for ThreadRngAdapter {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        rand::thread_rng().gen_range(min..=max)
    }
}
