//! Possession & Clock Manager
//!
//! Applies a resolved play to the game state: field position, downs,
//! scoring, possession changes, game clock and momentum. Out-of-range
//! field positions and fifth downs are mapped to their terminal outcome
//! before anything is stored.

use rand::Rng;
use std::ops::RangeInclusive;

use super::config::{QUARTERS, QUARTER_SECONDS};
use super::game_state::{GameState, FIRST_DOWN_DISTANCE};
use super::momentum::momentum_delta;
use super::outcome::yardage_phrase;
use crate::models::{DriveSummary, PlayOutcome, PlayResult};

pub const TOUCHDOWN_POINTS: u32 = 7;
pub const FIELD_GOAL_POINTS: u32 = 3;
pub const SAFETY_POINTS: u32 = 2;

/// What the clock did after the play's runoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockTransition {
    Running,
    /// Carries the quarter that just finished.
    QuarterEnded(u8),
    GameEnded,
}

/// Side effects of one applied play, for the driver to turn into events.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub possession_changed: bool,
    pub first_down: bool,
    pub drive: Option<DriveSummary>,
    pub clock: ClockTransition,
    pub runoff: u32,
}

/// Commit `result` to `state`. The result's `outcome` is rewritten to the
/// final outcome (touchdown, safety, first down, turnover on downs) and
/// scoring yardage is capped at the goal line.
pub fn apply_result<R: Rng + ?Sized>(
    state: &mut GameState,
    result: &mut PlayResult,
    runoff: RangeInclusive<u32>,
    rng: &mut R,
) -> Application {
    let offense = state.possession;
    let defense = offense.opponent();
    let mut possession_changed = false;
    let mut first_down = false;

    state.plays_run += 1;
    state.drive.play_count += 1;

    if result.snap_outcome.ends_possession_at_snap() {
        if result.snap_outcome == PlayOutcome::FieldGoal {
            state.add_score(offense, FIELD_GOAL_POINTS);
        }
        possession_changed = true;
    } else {
        let team = state.offense_mut();
        let spot = team.field_position + result.yards;
        if spot >= 100 {
            respot(result, team.yards_to_goal(), "TOUCHDOWN");
            result.outcome = PlayOutcome::Touchdown;
            state.add_score(offense, TOUCHDOWN_POINTS);
            possession_changed = true;
        } else if spot <= 0 {
            respot(result, -team.field_position, "SAFETY");
            result.outcome = PlayOutcome::Safety;
            state.add_score(defense, SAFETY_POINTS);
            possession_changed = true;
        } else {
            team.field_position = spot;
            team.distance -= result.yards;
            if team.distance <= 0 {
                team.down = 1;
                team.distance = FIRST_DOWN_DISTANCE;
                result.outcome = PlayOutcome::FirstDown;
                first_down = true;
            } else {
                team.down += 1;
                if team.down > 4 {
                    // Fourth down failed; the series is over before the state is seen.
                    team.down = 4;
                    result.outcome = PlayOutcome::TurnoverOnDowns;
                    result.message.push_str(", turnover on downs");
                    possession_changed = true;
                }
            }
        }
        state.drive.yards_gained += result.yards;
    }

    let runoff = rng.gen_range(runoff);
    state.clock_seconds = state.clock_seconds.saturating_sub(runoff);

    let drive = possession_changed.then(|| DriveSummary {
        team: offense,
        plays: state.drive.play_count,
        net_yards: state.drive.yards_gained,
        elapsed_seconds: state.drive.elapsed_seconds(state.quarter, state.clock_seconds),
        start_field_position: state.drive.start_field_position,
        result: result.outcome,
    });
    if possession_changed {
        state.switch_possession();
    }

    let clock = advance_clock(state);
    if possession_changed && !state.complete {
        state.start_drive();
    }

    state.adjust_momentum(momentum_delta(result, offense));

    Application { possession_changed, first_down, drive, clock, runoff }
}

/// Cap yardage at the goal line and keep the play text in step with it.
fn respot(result: &mut PlayResult, yards: i32, call: &str) {
    if yards != result.yards {
        result.message =
            result.message.replacen(&yardage_phrase(result.yards), &yardage_phrase(yards), 1);
        result.yards = yards;
    }
    result.message.push_str(", ");
    result.message.push_str(call);
}

fn advance_clock(state: &mut GameState) -> ClockTransition {
    if state.clock_seconds > 0 {
        return ClockTransition::Running;
    }
    if state.quarter < QUARTERS {
        let finished = state.quarter;
        state.quarter += 1;
        state.clock_seconds = QUARTER_SECONDS;
        if state.quarter == 3 {
            state.restore_timeouts();
        }
        ClockTransition::QuarterEnded(finished)
    } else {
        state.complete = true;
        ClockTransition::GameEnded
    }
}
