//! Roll request and resolution contracts.
//!
//! These are the serialized shapes exchanged with the UI layer: a request
//! names an edition and a dice count, a resolution carries the rolled pool
//! and its edition-specific score.

use serde::{Deserialize, Serialize};

use corsairs_domain::{DicePool, RaiseResult, RollAndKeepResult, RuleEdition};

/// A request to roll and score a pool of dice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollRequest {
    /// Edition to resolve under
    #[serde(default)]
    pub edition: RuleEdition,
    /// Number of dice to roll
    pub dice: i32,
    /// Dice to keep (1st edition only); absent keeps the whole pool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep: Option<i32>,
}

impl RollRequest {
    /// A 2nd-edition raise roll.
    pub fn raises(dice: i32) -> Self {
        Self {
            edition: RuleEdition::SecondEdition,
            dice,
            keep: None,
        }
    }

    /// A 1st-edition roll-and-keep roll ("Xk Y").
    pub fn roll_and_keep(dice: i32, keep: i32) -> Self {
        Self {
            edition: RuleEdition::FirstEdition,
            dice,
            keep: Some(keep),
        }
    }
}

/// Edition-specific score of a rolled pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RollOutcome {
    /// 2nd-edition raise partition
    Raises(RaiseResult),
    /// 1st-edition kept dice and total
    RollAndKeep(RollAndKeepResult),
}

impl RollOutcome {
    /// Format the outcome as a display string.
    pub fn breakdown(&self) -> String {
        match self {
            Self::Raises(result) => result.breakdown(),
            Self::RollAndKeep(result) => result.breakdown(),
        }
    }
}

/// A rolled pool together with its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollResolution {
    /// The rolled pool, in roll order
    pub pool: DicePool,
    /// The edition-specific score
    pub outcome: RollOutcome,
}
