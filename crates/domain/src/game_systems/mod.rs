//! Rule edition implementations.
//!
//! The game shipped two resolution schemes and sheets can be played under
//! either one:
//!
//! - 2nd edition (`second_edition`): partition the pool into disjoint
//!   groups summing to at least 10; each group is one raise.
//! - 1st edition (`first_edition`): keep the highest K dice and sum them.
//!
//! Both scoring paths are pure functions over a [`DicePool`]; nothing in
//! this module touches a random source.
//!
//! [`DicePool`]: crate::value_objects::DicePool

mod first_edition;
mod second_edition;

pub use first_edition::calculate_roll_and_keep;
pub use second_edition::{calculate_raises, calculate_raises_optimal, EXACT_SEARCH_LIMIT};

use serde::{Deserialize, Serialize};

/// The rule edition a roll is resolved under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum RuleEdition {
    /// 2nd edition - raises from groups summing to 10+
    #[default]
    SecondEdition,
    /// 1st edition - roll N, keep the K highest
    FirstEdition,
}

impl RuleEdition {
    /// Get the display name for this edition
    pub fn display_name(&self) -> &str {
        match self {
            Self::SecondEdition => "2nd Edition",
            Self::FirstEdition => "1st Edition",
        }
    }
}
