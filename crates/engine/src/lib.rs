//! Corsairs Engine - dice rolling service and the entropy port.
//!
//! The domain crate scores pools but never produces them; everything
//! random flows through [`RandomPort`]. Hosts construct a
//! [`DiceRollService`] with the production [`ThreadRngAdapter`] (or a
//! deterministic port in tests) and drive it with [`RollRequest`]s.

pub mod adapters;
pub mod dto;
pub mod ports;
pub mod services;

pub use adapters::ThreadRngAdapter;
pub use dto::{RollOutcome, RollRequest, RollResolution};
pub use ports::{FixedRandomPort, RandomPort};
pub use services::{DiceRollService, DiceServiceError};

#[cfg(any(test, feature = "testing"))]
pub use ports::MockRandomPort;
