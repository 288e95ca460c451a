//! Game Session (Playback Driver)
//!
//! Owns one game: state, random source, queued human calls and the event
//! log. `advance` resolves a single snap and is the primitive both driving
//! modes share; live playback calls it once per external tick, fast-forward
//! calls it in a bounded loop.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::{EngineConfig, Tempo};
use super::game_state::GameState;
use super::outcome::resolve;
use super::play_call::{CallQueue, PendingCall};
use super::play_selector::{select_defensive_call, select_offensive_play};
use super::possession::{apply_result, ClockTransition};
use super::stats::record_play;
use crate::error::{GameError, Result};
use crate::models::{GameEvent, GameResult, Highlight, PlayCall, PlayEvent, Team, TeamSide};

/// Result of a single `advance` call.
#[derive(Debug, Clone, PartialEq)]
pub enum StepResult {
    /// Human side must submit a call; nothing was mutated.
    AwaitingCall(PendingCall),

    /// One snap resolved. Always starts with the play event, followed by any
    /// drive summary, quarter end and game end it triggered.
    Played(Vec<GameEvent>),

    /// Game already over; the final event was emitted earlier.
    Finished(GameResult),
}

/// Outcome of one resolved snap.
struct Snap {
    events: Vec<GameEvent>,
    possession_changed: bool,
}

pub struct GameSession<R: Rng = ChaCha8Rng> {
    state: GameState,
    config: EngineConfig,
    tempo: Tempo,
    human: Option<TeamSide>,
    calls: CallQueue,
    /// Set by a timeout; the next snap uses the hurry-up runoff.
    clock_stopped: bool,
    events: Vec<GameEvent>,
    rng: R,
}

impl GameSession<ChaCha8Rng> {
    /// Default config, seeded ChaCha8 source.
    pub fn with_seed(home: Team, away: Team, seed: u64) -> Self {
        let config = EngineConfig::default();
        let state = GameState::with_config(home, away, &config);
        Self::from_parts(state, config, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn new(home: Team, away: Team, config: EngineConfig, seed: u64) -> Result<Self> {
        Self::with_rng(home, away, config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    /// Session over any random source; the config is validated first.
    pub fn with_rng(home: Team, away: Team, config: EngineConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let state = GameState::with_config(home, away, &config);
        Ok(Self::from_parts(state, config, rng))
    }

    fn from_parts(mut state: GameState, config: EngineConfig, rng: R) -> Self {
        state.start_drive();
        Self {
            state,
            tempo: config.tempo,
            config,
            human: None,
            calls: CallQueue::new(),
            clock_stopped: false,
            events: Vec::new(),
            rng,
        }
    }

    /// Hand control of `side` to a human caller.
    pub fn with_human(mut self, side: TeamSide) -> Self {
        self.human = Some(side);
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn is_complete(&self) -> bool {
        self.state.complete
    }

    /// Every event emitted so far, in order.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn result(&self) -> GameResult {
        self.state.result()
    }

    pub fn tempo(&self) -> Tempo {
        self.tempo
    }

    pub fn set_tempo(&mut self, tempo: Tempo) {
        if tempo != self.tempo {
            log::debug!("Tempo {} -> {}", self.tempo, tempo);
        }
        self.tempo = tempo;
    }

    /// The call the next `advance` is waiting on, if any.
    pub fn pending_call(&self) -> Option<PendingCall> {
        if self.state.complete || !self.config.require_human_calls {
            return None;
        }
        let side = self.human?;
        if self.calls.has_call(side) {
            None
        } else {
            Some(PendingCall::for_side(side, &self.state))
        }
    }

    pub fn submit_call(&mut self, side: TeamSide, call: PlayCall) -> Result<()> {
        if self.state.complete {
            return Err(GameError::GameComplete);
        }
        if self.human != Some(side) {
            return Err(GameError::NotHumanControlled { side });
        }
        self.calls.submit(side, call, &self.state)
    }

    /// Parse a wire-format call and queue it.
    pub fn submit_call_str(&mut self, side: TeamSide, call: &str) -> Result<()> {
        let call: PlayCall = call.parse()?;
        self.submit_call(side, call)
    }

    /// Spend a timeout; the next snap runs off hurry-up clock.
    pub fn call_timeout(&mut self, side: TeamSide) -> Result<u8> {
        if self.state.complete {
            return Err(GameError::GameComplete);
        }
        let team = self.state.team_mut(side);
        if team.timeouts == 0 {
            return Err(GameError::NoTimeoutsRemaining { side });
        }
        team.timeouts -= 1;
        let remaining = team.timeouts;
        self.clock_stopped = true;
        log::info!("Timeout {:?}, {} remaining", side, remaining);
        Ok(remaining)
    }

    /// Resolve the next snap, or report why it cannot run.
    pub fn advance(&mut self) -> StepResult {
        if self.state.complete {
            return StepResult::Finished(self.state.result());
        }
        if let Some(pending) = self.pending_call() {
            return StepResult::AwaitingCall(pending);
        }
        StepResult::Played(self.snap().events)
    }

    /// Fast-forward to the final whistle. Human calls are not waited on;
    /// a call already queued is still used. Returns the events produced.
    pub fn skip_to_end(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for _ in 0..self.config.skip_to_end_ceiling {
            if self.state.complete {
                return events;
            }
            events.extend(self.snap().events);
        }
        if !self.state.complete {
            events.extend(self.force_end("skip_to_end"));
        }
        events
    }

    /// Fast-forward until the ball changes hands or the game ends.
    pub fn skip_to_drive(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for _ in 0..self.config.skip_to_drive_ceiling {
            if self.state.complete {
                return events;
            }
            let snap = self.snap();
            events.extend(snap.events);
            if snap.possession_changed {
                return events;
            }
        }
        if !self.state.complete {
            events.extend(self.force_end("skip_to_drive"));
        }
        events
    }

    fn snap(&mut self) -> Snap {
        let offense = self.state.possession;
        let defense = offense.opponent();

        let play = match self.calls.take_offense(offense) {
            Some(play) => play,
            None => select_offensive_play(self.state.offense(), &self.state, &mut self.rng),
        };
        let call = match self.calls.take_defense(defense) {
            Some(call) => call,
            None => select_defensive_call(self.state.defense(), &self.state),
        };

        let quarter = self.state.quarter;
        let clock_seconds = self.state.clock_seconds;
        let (down, distance, field_position) = {
            let team = self.state.offense();
            (team.down, team.distance, team.field_position)
        };

        let mut result = resolve(&self.state, play, call, &mut self.rng);
        let runoff = if std::mem::take(&mut self.clock_stopped) {
            Tempo::HurryUp.runoff_range()
        } else {
            self.tempo.runoff_range()
        };
        let applied = apply_result(&mut self.state, &mut result, runoff, &mut self.rng);
        record_play(&mut self.state, &result, offense);
        if applied.possession_changed {
            self.calls.clear();
        }

        log::debug!(
            "Q{} {:>3}s {:?} {}&{} at {}: {} ({:?})",
            quarter,
            clock_seconds,
            offense,
            down,
            distance,
            field_position,
            result.message,
            result.outcome
        );

        let (home_score, away_score) = self.state.score();
        let mut events = vec![GameEvent::Play(PlayEvent {
            sequence: self.state.plays_run,
            quarter,
            clock_seconds,
            offense,
            down,
            distance,
            field_position,
            highlights: Highlight::collect(&result),
            result,
            home_score,
            away_score,
            momentum: self.state.momentum,
        })];

        if let Some(drive) = applied.drive {
            log::info!(
                "Drive over: {:?} {} plays, {} yards, {}s, {:?}",
                drive.team,
                drive.plays,
                drive.net_yards,
                drive.elapsed_seconds,
                drive.result
            );
            events.push(GameEvent::DriveSummary(drive));
        }

        match applied.clock {
            ClockTransition::Running => {}
            ClockTransition::QuarterEnded(quarter) => {
                log::info!("End of Q{}: {}-{}", quarter, home_score, away_score);
                events.push(GameEvent::QuarterEnd { quarter, home_score, away_score });
            }
            ClockTransition::GameEnded => {
                log::info!("Final: {}-{} after {} plays", home_score, away_score, self.state.plays_run);
                events.push(GameEvent::QuarterEnd { quarter, home_score, away_score });
                events.push(GameEvent::GameEnd(self.state.result()));
            }
        }

        self.events.extend(events.iter().cloned());
        Snap { events, possession_changed: applied.possession_changed }
    }

    /// End the game where it stands after a fast-forward ceiling ran out.
    fn force_end(&mut self, mode: &str) -> Vec<GameEvent> {
        log::warn!(
            "{} ceiling exhausted at Q{} {}s; ending game at {}-{}",
            mode,
            self.state.quarter,
            self.state.clock_seconds,
            self.state.home.score,
            self.state.away.score
        );
        self.state.complete = true;
        self.state.forced_end = true;
        let event = GameEvent::GameEnd(self.state.result());
        self.events.push(event.clone());
        vec![event]
    }
}
