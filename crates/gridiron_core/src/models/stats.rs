use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::team::{PlayerId, TeamSide};

/// Per-player counters for one game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerGameStats {
    pub pass_attempts: u32,
    pub pass_completions: u32,
    pub pass_yards: i32,
    pub pass_touchdowns: u32,
    pub interceptions: u32,
    pub rush_attempts: u32,
    pub rush_yards: i32,
    pub rush_touchdowns: u32,
    pub targets: u32,
    pub receptions: u32,
    pub receiving_yards: i32,
    pub receiving_touchdowns: u32,
}

impl PlayerGameStats {
    pub fn completion_pct(&self) -> f32 {
        if self.pass_attempts == 0 {
            0.0
        } else {
            self.pass_completions as f32 / self.pass_attempts as f32 * 100.0
        }
    }

    pub fn yards_per_carry(&self) -> f32 {
        if self.rush_attempts == 0 {
            0.0
        } else {
            self.rush_yards as f32 / self.rush_attempts as f32
        }
    }
}

/// Team box score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamGameStats {
    pub plays: u32,
    pub total_yards: i32,
    pub rushing_yards: i32,
    pub passing_yards: i32,
    pub first_downs: u32,
    pub turnovers: u32,
    pub sacks_taken: u32,
    pub drives: u32,
}

/// Final whistle payload for the season and persistence layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub home_score: u32,
    pub away_score: u32,
    pub quarter_scores: [[u32; 4]; 2],
    pub player_stats: BTreeMap<PlayerId, PlayerGameStats>,
    pub team_stats: [TeamGameStats; 2],
    /// True when a fast-forward ceiling ended the game early.
    #[serde(default)]
    pub forced_end: bool,
}

impl GameResult {
    /// `None` on a tie.
    pub fn winner(&self) -> Option<TeamSide> {
        match self.home_score.cmp(&self.away_score) {
            std::cmp::Ordering::Greater => Some(TeamSide::Home),
            std::cmp::Ordering::Less => Some(TeamSide::Away),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn margin(&self) -> u32 {
        self.home_score.abs_diff(self.away_score)
    }

    pub fn team_stats(&self, side: TeamSide) -> &TeamGameStats {
        &self.team_stats[side.index()]
    }
}
