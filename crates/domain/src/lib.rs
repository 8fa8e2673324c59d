pub mod error;
pub mod game_systems;
pub mod value_objects;

pub use error::DomainError;

// Re-export rule editions and scoring entry points
pub use game_systems::{
    calculate_raises, calculate_raises_optimal, calculate_roll_and_keep, RuleEdition,
    EXACT_SEARCH_LIMIT,
};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{DicePool, RaiseResult, RollAndKeepResult, MAX_DIE_VALUE, MIN_DIE_VALUE};
