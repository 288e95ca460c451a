//! Stat Accumulator
//!
//! Credits players and the team box score for a play that has already been
//! applied. Player entries are created on first involvement; a play with no
//! matching participant (empty position group) records team totals only.

use super::game_state::GameState;
use crate::models::{PlayOutcome, PlayResult, PlayType, TeamSide};

/// Record `result`, run by `offense`, after `apply_result` set its final outcome.
pub fn record_play(state: &mut GameState, result: &PlayResult, offense: TeamSide) {
    record_team(state, result, offense);

    let touchdown = result.outcome == PlayOutcome::Touchdown;
    let p = result.participants;
    match result.play {
        PlayType::Run(_) => {
            if let Some(carrier) = p.ball_carrier {
                let stats = state.stats_for(carrier);
                stats.rush_attempts += 1;
                stats.rush_yards += result.yards;
                if touchdown {
                    stats.rush_touchdowns += 1;
                }
            }
        }
        PlayType::Pass(_) => match result.snap_outcome {
            PlayOutcome::Sack => {
                if let Some(qb) = p.passer {
                    let stats = state.stats_for(qb);
                    stats.rush_attempts += 1;
                    stats.rush_yards += result.yards;
                }
            }
            PlayOutcome::Incomplete | PlayOutcome::Turnover => {
                let intercepted = result.snap_outcome == PlayOutcome::Turnover;
                if let Some(qb) = p.passer {
                    let stats = state.stats_for(qb);
                    stats.pass_attempts += 1;
                    if intercepted {
                        stats.interceptions += 1;
                    }
                }
                if let Some(target) = p.target {
                    state.stats_for(target).targets += 1;
                }
            }
            _ => {
                if let Some(qb) = p.passer {
                    let stats = state.stats_for(qb);
                    stats.pass_attempts += 1;
                    stats.pass_completions += 1;
                    stats.pass_yards += result.yards;
                    if touchdown {
                        stats.pass_touchdowns += 1;
                    }
                }
                if let Some(target) = p.target {
                    let stats = state.stats_for(target);
                    stats.targets += 1;
                    stats.receptions += 1;
                    stats.receiving_yards += result.yards;
                    if touchdown {
                        stats.receiving_touchdowns += 1;
                    }
                }
            }
        },
        PlayType::FieldGoal | PlayType::Punt => {}
    }
}

fn record_team(state: &mut GameState, result: &PlayResult, offense: TeamSide) {
    let team = state.team_stats_mut(offense);
    team.plays += 1;
    match result.play {
        PlayType::Run(_) => {
            team.total_yards += result.yards;
            team.rushing_yards += result.yards;
        }
        PlayType::Pass(_) => {
            team.total_yards += result.yards;
            team.passing_yards += result.yards;
        }
        PlayType::FieldGoal | PlayType::Punt => {}
    }
    match result.snap_outcome {
        PlayOutcome::Sack => team.sacks_taken += 1,
        PlayOutcome::Turnover => team.turnovers += 1,
        _ => {}
    }
    if result.outcome == PlayOutcome::FirstDown {
        team.first_downs += 1;
    }
}
