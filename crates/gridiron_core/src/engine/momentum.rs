//! Game Momentum
//!
//! A single scalar in [-100, 100], positive toward Home. It moves only on
//! notable play outcomes; there is no decay between plays.

use crate::models::{PlayOutcome, PlayResult, TeamSide};

/// Momentum swing constants, signed later toward the side that benefited.
pub mod swings {
    pub const TOUCHDOWN: i32 = 15;
    pub const SAFETY: i32 = 20;
    pub const TURNOVER: i32 = 10;
    pub const MISSED_FIELD_GOAL: i32 = 10;
    pub const FIELD_GOAL: i32 = 5;
    pub const FIRST_DOWN: i32 = 2;
    /// Gain of 10+ yards from scrimmage
    pub const BIG_PLAY: i32 = 5;
    /// Gain of 20+ yards from scrimmage
    pub const HUGE_PLAY: i32 = 10;

    pub const BIG_PLAY_YARDS: i32 = 10;
    pub const HUGE_PLAY_YARDS: i32 = 20;
}

/// Signed momentum change for a play run by `offense`.
pub fn momentum_delta(result: &PlayResult, offense: TeamSide) -> i32 {
    let defense = offense.opponent();
    let (magnitude, beneficiary) = match result.outcome {
        PlayOutcome::Touchdown => (swings::TOUCHDOWN, offense),
        PlayOutcome::Safety => (swings::SAFETY, defense),
        PlayOutcome::Turnover | PlayOutcome::TurnoverOnDowns => (swings::TURNOVER, defense),
        PlayOutcome::FieldGoalMiss => (swings::MISSED_FIELD_GOAL, defense),
        PlayOutcome::FieldGoal => (swings::FIELD_GOAL, offense),
        PlayOutcome::Gain | PlayOutcome::FirstDown => {
            let from_scrimmage = result.play.is_from_scrimmage();
            let magnitude = if from_scrimmage && result.yards >= swings::HUGE_PLAY_YARDS {
                swings::HUGE_PLAY
            } else if from_scrimmage && result.yards >= swings::BIG_PLAY_YARDS {
                swings::BIG_PLAY
            } else if result.outcome == PlayOutcome::FirstDown {
                swings::FIRST_DOWN
            } else {
                0
            };
            (magnitude, offense)
        }
        PlayOutcome::Incomplete | PlayOutcome::Sack | PlayOutcome::Punt => (0, offense),
    };
    magnitude * beneficiary.momentum_sign()
}
