//! Human Play Calls
//!
//! One queued call per side, consumed by the next snap. A call only applies
//! to the role the side currently plays: offensive calls for the team in
//! possession, defensive calls for the other.

use serde::{Deserialize, Serialize};

use super::game_state::GameState;
use crate::error::{GameError, Result};
use crate::models::{DefenseCall, PlayCall, PlayType, TeamSide};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallRole {
    Offense,
    Defense,
}

impl CallRole {
    pub fn of(side: TeamSide, state: &GameState) -> Self {
        if side == state.possession {
            CallRole::Offense
        } else {
            CallRole::Defense
        }
    }

    pub fn accepts(self, call: PlayCall) -> bool {
        match self {
            CallRole::Offense => call.play_type().is_some(),
            CallRole::Defense => call.is_defensive(),
        }
    }
}

/// What the caller must supply before the next snap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCall {
    pub side: TeamSide,
    pub role: CallRole,
    pub quarter: u8,
    pub clock_seconds: u32,
    pub down: u8,
    pub distance: i32,
    pub field_position: i32,
}

impl PendingCall {
    pub fn for_side(side: TeamSide, state: &GameState) -> Self {
        let offense = state.offense();
        Self {
            side,
            role: CallRole::of(side, state),
            quarter: state.quarter,
            clock_seconds: state.clock_seconds,
            down: offense.down,
            distance: offense.distance,
            field_position: offense.field_position,
        }
    }
}

/// Queued calls, indexed by `TeamSide::index()`.
#[derive(Debug, Clone, Default)]
pub struct CallQueue {
    slots: [Option<PlayCall>; 2],
}

impl CallQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `call` for `side`, replacing any earlier call for the same snap.
    pub fn submit(&mut self, side: TeamSide, call: PlayCall, state: &GameState) -> Result<()> {
        if !CallRole::of(side, state).accepts(call) {
            return Err(GameError::CallNotApplicable { side, call });
        }
        self.slots[side.index()] = Some(call);
        Ok(())
    }

    pub fn has_call(&self, side: TeamSide) -> bool {
        self.slots[side.index()].is_some()
    }

    pub fn take_offense(&mut self, side: TeamSide) -> Option<PlayType> {
        self.slots[side.index()].take().and_then(|call| call.play_type())
    }

    pub fn take_defense(&mut self, side: TeamSide) -> Option<DefenseCall> {
        self.slots[side.index()].take().and_then(|call| call.defense_call())
    }

    pub fn clear(&mut self) {
        self.slots = [None, None];
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PassDepth, Team};
    use strum::IntoEnumIterator;

    fn game() -> GameState {
        GameState::new(Team::new(1, "Home", vec![]), Team::new(2, "Away", vec![]))
    }

    #[test]
    fn test_role_follows_possession() {
        let mut state = game();
        assert_eq!(CallRole::of(TeamSide::Home, &state), CallRole::Offense);
        assert_eq!(CallRole::of(TeamSide::Away, &state), CallRole::Defense);
        state.switch_possession();
        assert_eq!(CallRole::of(TeamSide::Home, &state), CallRole::Defense);
    }

    #[test]
    fn test_every_call_fits_exactly_one_role() {
        for call in PlayCall::iter() {
            assert!(CallRole::Offense.accepts(call) ^ CallRole::Defense.accepts(call), "{call}");
        }
    }

    #[test]
    fn test_submit_rejects_wrong_role() {
        let state = game();
        let mut queue = CallQueue::new();
        let err = queue.submit(TeamSide::Home, PlayCall::DefenseBlitz, &state).unwrap_err();
        assert_eq!(err, GameError::CallNotApplicable { side: TeamSide::Home, call: PlayCall::DefenseBlitz });
        assert!(queue.submit(TeamSide::Away, PlayCall::Punt, &state).is_err());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_calls_consumed_once() {
        let state = game();
        let mut queue = CallQueue::new();
        queue.submit(TeamSide::Home, PlayCall::PassLong, &state).unwrap();
        queue.submit(TeamSide::Away, PlayCall::DefenseZone, &state).unwrap();
        assert!(queue.has_call(TeamSide::Home));

        assert_eq!(queue.take_offense(TeamSide::Home), Some(PlayType::Pass(PassDepth::Long)));
        assert_eq!(queue.take_defense(TeamSide::Away), Some(DefenseCall::Zone));
        assert_eq!(queue.take_offense(TeamSide::Home), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_resubmit_replaces() {
        let state = game();
        let mut queue = CallQueue::new();
        queue.submit(TeamSide::Home, PlayCall::RunInside, &state).unwrap();
        queue.submit(TeamSide::Home, PlayCall::Punt, &state).unwrap();
        assert_eq!(queue.take_offense(TeamSide::Home), Some(PlayType::Punt));
        assert!(!queue.has_call(TeamSide::Home));
    }

    #[test]
    fn test_pending_call_snapshot() {
        let mut state = game();
        state.home.down = 3;
        state.home.distance = 7;
        state.clock_seconds = 410;
        let pending = PendingCall::for_side(TeamSide::Away, &state);
        assert_eq!(pending.role, CallRole::Defense);
        assert_eq!((pending.down, pending.distance, pending.field_position), (3, 7, 25));
        assert_eq!(pending.clock_seconds, 410);
    }
}
