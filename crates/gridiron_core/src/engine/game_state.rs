//! Game State
//!
//! Single mutable aggregate for one game. Every helper that touches score,
//! possession or momentum keeps the field/clock invariants intact, so the
//! possession manager never has to patch state after the fact.

use serde::Serialize;
use std::collections::BTreeMap;

use super::config::{EngineConfig, QUARTER_SECONDS};
use crate::models::{
    DepthChart, GameResult, PlayerGameStats, PlayerId, Team, TeamGameStats, TeamSide, TeamStrength,
};

pub const KICKOFF_FIELD_POSITION: i32 = 25;
pub const FIRST_DOWN_DISTANCE: i32 = 10;
pub const MOMENTUM_LIMIT: i32 = 100;

#[derive(Debug, Clone, Serialize)]
pub struct TeamState {
    pub team: Team,
    pub strength: TeamStrength,
    pub depth: DepthChart,
    pub score: u32,
    pub down: u8,
    pub distance: i32,
    /// Yards from own goal line (0) toward the opponent's (100).
    pub field_position: i32,
    pub timeouts: u8,
}

impl TeamState {
    pub fn new(team: Team, config: &EngineConfig) -> Self {
        let strength = TeamStrength::from_team(&team, config.default_strength);
        let depth = DepthChart::from_team(&team);
        Self {
            team,
            strength,
            depth,
            score: 0,
            down: 1,
            distance: FIRST_DOWN_DISTANCE,
            field_position: KICKOFF_FIELD_POSITION,
            timeouts: config.timeouts_per_half,
        }
    }

    /// Fresh set of downs at the kickoff spot.
    pub fn reset_series(&mut self) {
        self.down = 1;
        self.distance = FIRST_DOWN_DISTANCE;
        self.field_position = KICKOFF_FIELD_POSITION;
    }

    pub fn yards_to_goal(&self) -> i32 {
        100 - self.field_position
    }
}

/// Running totals for the current possession.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DriveState {
    pub play_count: u32,
    pub yards_gained: i32,
    pub start_quarter: u8,
    pub start_clock_seconds: u32,
    pub start_field_position: i32,
}

impl DriveState {
    pub fn start(quarter: u8, clock_seconds: u32, field_position: i32) -> Self {
        Self {
            play_count: 0,
            yards_gained: 0,
            start_quarter: quarter,
            start_clock_seconds: clock_seconds,
            start_field_position: field_position,
        }
    }

    /// Game seconds elapsed since the drive started.
    pub fn elapsed_seconds(&self, quarter: u8, clock_seconds: u32) -> u32 {
        let start = self.start_quarter as u32 * QUARTER_SECONDS - self.start_clock_seconds;
        let now = quarter as u32 * QUARTER_SECONDS - clock_seconds;
        now.saturating_sub(start)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub home: TeamState,
    pub away: TeamState,
    pub quarter: u8,
    pub clock_seconds: u32,
    pub possession: TeamSide,
    /// Positive favors Home; always within [-100, 100].
    pub momentum: i32,
    /// Points per quarter, indexed by `TeamSide::index()`.
    pub quarter_scores: [[u32; 4]; 2],
    pub drive: DriveState,
    pub player_stats: BTreeMap<PlayerId, PlayerGameStats>,
    pub team_stats: [TeamGameStats; 2],
    pub complete: bool,
    pub plays_run: u32,
    pub forced_end: bool,
    /// Timeouts each team gets back at the start of the second half.
    pub timeouts_per_half: u8,
}

impl GameState {
    pub fn new(home: Team, away: Team) -> Self {
        Self::with_config(home, away, &EngineConfig::default())
    }

    /// Kickoff state: both teams at their 25, Home receives.
    pub fn with_config(home: Team, away: Team, config: &EngineConfig) -> Self {
        Self {
            home: TeamState::new(home, config),
            away: TeamState::new(away, config),
            quarter: 1,
            clock_seconds: QUARTER_SECONDS,
            possession: TeamSide::Home,
            momentum: 0,
            quarter_scores: [[0; 4]; 2],
            drive: DriveState::start(1, QUARTER_SECONDS, KICKOFF_FIELD_POSITION),
            player_stats: BTreeMap::new(),
            team_stats: Default::default(),
            complete: false,
            plays_run: 0,
            forced_end: false,
            timeouts_per_half: config.timeouts_per_half,
        }
    }

    pub fn team(&self, side: TeamSide) -> &TeamState {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    pub fn team_mut(&mut self, side: TeamSide) -> &mut TeamState {
        match side {
            TeamSide::Home => &mut self.home,
            TeamSide::Away => &mut self.away,
        }
    }

    pub fn offense(&self) -> &TeamState {
        self.team(self.possession)
    }

    pub fn offense_mut(&mut self) -> &mut TeamState {
        self.team_mut(self.possession)
    }

    pub fn defense(&self) -> &TeamState {
        self.team(self.possession.opponent())
    }

    pub fn team_stats_mut(&mut self, side: TeamSide) -> &mut TeamGameStats {
        &mut self.team_stats[side.index()]
    }

    /// Award points and record them against the current quarter in one step.
    pub fn add_score(&mut self, side: TeamSide, points: u32) {
        let quarter_idx = (self.quarter.clamp(1, 4) - 1) as usize;
        self.team_mut(side).score += points;
        self.quarter_scores[side.index()][quarter_idx] += points;
    }

    /// Hand the ball to the other team at a fresh series.
    pub fn switch_possession(&mut self) {
        self.possession = self.possession.opponent();
        self.offense_mut().reset_series();
    }

    pub fn restore_timeouts(&mut self) {
        self.home.timeouts = self.timeouts_per_half;
        self.away.timeouts = self.timeouts_per_half;
    }

    pub fn adjust_momentum(&mut self, delta: i32) {
        self.momentum = (self.momentum + delta).clamp(-MOMENTUM_LIMIT, MOMENTUM_LIMIT);
    }

    pub fn start_drive(&mut self) {
        let field_position = self.offense().field_position;
        self.drive = DriveState::start(self.quarter, self.clock_seconds, field_position);
        self.team_stats_mut(self.possession).drives += 1;
    }

    pub fn stats_for(&mut self, player: PlayerId) -> &mut PlayerGameStats {
        self.player_stats.entry(player).or_default()
    }

    pub fn score(&self) -> (u32, u32) {
        (self.home.score, self.away.score)
    }

    pub fn result(&self) -> GameResult {
        GameResult {
            home_score: self.home.score,
            away_score: self.away.score,
            quarter_scores: self.quarter_scores,
            player_stats: self.player_stats.clone(),
            team_stats: self.team_stats.clone(),
            forced_end: self.forced_end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> GameState {
        GameState::new(Team::new(1, "Home", vec![]), Team::new(2, "Away", vec![]))
    }

    #[test]
    fn test_initial_state() {
        let state = game();
        assert_eq!(state.quarter, 1);
        assert_eq!(state.clock_seconds, 900);
        assert_eq!(state.possession, TeamSide::Home);
        assert_eq!(state.momentum, 0);
        for side in [TeamSide::Home, TeamSide::Away] {
            let team = state.team(side);
            assert_eq!(team.field_position, 25);
            assert_eq!(team.down, 1);
            assert_eq!(team.distance, 10);
            assert_eq!(team.score, 0);
            assert_eq!(team.timeouts, 3);
        }
        assert!(!state.complete);
    }

    #[test]
    fn test_add_score_pairs_with_quarter_scores() {
        let mut state = game();
        state.quarter = 3;
        state.add_score(TeamSide::Away, 7);
        assert_eq!(state.away.score, 7);
        assert_eq!(state.quarter_scores[1], [0, 0, 7, 0]);
        assert_eq!(state.quarter_scores[0], [0; 4]);
    }

    #[test]
    fn test_switch_possession_resets_series() {
        let mut state = game();
        state.away.down = 3;
        state.away.distance = 4;
        state.away.field_position = 60;
        state.switch_possession();
        assert_eq!(state.possession, TeamSide::Away);
        assert_eq!((state.away.down, state.away.distance, state.away.field_position), (1, 10, 25));
    }

    #[test]
    fn test_momentum_clamped() {
        let mut state = game();
        for _ in 0..20 {
            state.adjust_momentum(15);
        }
        assert_eq!(state.momentum, 100);
        for _ in 0..40 {
            state.adjust_momentum(-20);
        }
        assert_eq!(state.momentum, -100);
    }

    #[test]
    fn test_drive_elapsed_across_quarters() {
        let drive = DriveState::start(1, 120, 25);
        assert_eq!(drive.elapsed_seconds(1, 60), 60);
        assert_eq!(drive.elapsed_seconds(2, 840), 180);
    }
}
