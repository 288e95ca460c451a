use serde::{Deserialize, Serialize};

use super::play::{PlayOutcome, PlayResult};
use super::stats::GameResult;
use super::team::TeamSide;

/// Gain from scrimmage that earns a big-play cue.
pub const HIGHLIGHT_BIG_PLAY_YARDS: i32 = 20;

/// Presentation cues derived from a resolved play (sound, particles, banners).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    Touchdown,
    Sack,
    BigPlay,
    Interception,
    Safety,
    FieldGoal,
}

impl Highlight {
    pub fn collect(result: &PlayResult) -> Vec<Highlight> {
        let mut out = Vec::new();
        // The final outcome may have been rewritten (safety, turnover on downs).
        if result.snap_outcome == PlayOutcome::Sack {
            out.push(Highlight::Sack);
        }
        match result.outcome {
            PlayOutcome::Touchdown => out.push(Highlight::Touchdown),
            PlayOutcome::Safety => out.push(Highlight::Safety),
            PlayOutcome::FieldGoal => out.push(Highlight::FieldGoal),
            _ => {}
        }
        if result.is_interception() {
            out.push(Highlight::Interception);
        }
        if result.play.is_from_scrimmage() && result.yards >= HIGHLIGHT_BIG_PLAY_YARDS {
            out.push(Highlight::BigPlay);
        }
        out
    }
}

/// Pre-snap situation plus everything the play produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayEvent {
    /// 1-based play number within the game.
    pub sequence: u32,
    pub quarter: u8,
    pub clock_seconds: u32,
    pub offense: TeamSide,
    pub down: u8,
    pub distance: i32,
    pub field_position: i32,
    pub result: PlayResult,
    pub highlights: Vec<Highlight>,
    pub home_score: u32,
    pub away_score: u32,
    pub momentum: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriveSummary {
    pub team: TeamSide,
    pub plays: u32,
    pub net_yards: i32,
    pub elapsed_seconds: u32,
    pub start_field_position: i32,
    pub result: PlayOutcome,
}

/// Event stream consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    Play(PlayEvent),
    DriveSummary(DriveSummary),
    QuarterEnd { quarter: u8, home_score: u32, away_score: u32 },
    GameEnd(GameResult),
}

impl GameEvent {
    pub fn as_play(&self) -> Option<&PlayEvent> {
        match self {
            GameEvent::Play(play) => Some(play),
            _ => None,
        }
    }

    pub fn is_game_end(&self) -> bool {
        matches!(self, GameEvent::GameEnd(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DefenseCall, PassDepth, PlayParticipants, PlayType, RunKind};

    fn result(play: PlayType, outcome: PlayOutcome, yards: i32) -> PlayResult {
        PlayResult {
            play,
            defense: DefenseCall::Man,
            outcome,
            snap_outcome: outcome,
            yards,
            message: String::new(),
            participants: PlayParticipants::default(),
            explosive: false,
        }
    }

    #[test]
    fn test_interception_highlight() {
        let r = result(PlayType::Pass(PassDepth::Long), PlayOutcome::Turnover, 0);
        assert_eq!(Highlight::collect(&r), vec![Highlight::Interception]);
    }

    #[test]
    fn test_big_play_touchdown() {
        let r = result(PlayType::Run(RunKind::Outside), PlayOutcome::Touchdown, 45);
        assert_eq!(Highlight::collect(&r), vec![Highlight::Touchdown, Highlight::BigPlay]);
    }

    #[test]
    fn test_sack_cue_survives_rewritten_outcome() {
        let mut r = result(PlayType::Pass(PassDepth::Medium), PlayOutcome::Safety, -7);
        r.snap_outcome = PlayOutcome::Sack;
        assert_eq!(Highlight::collect(&r), vec![Highlight::Sack, Highlight::Safety]);

        r.outcome = PlayOutcome::TurnoverOnDowns;
        assert_eq!(Highlight::collect(&r), vec![Highlight::Sack]);

        let plain = result(PlayType::Pass(PassDepth::Short), PlayOutcome::Sack, -6);
        assert_eq!(Highlight::collect(&plain), vec![Highlight::Sack]);
    }

    #[test]
    fn test_punt_is_never_big_play() {
        let r = result(PlayType::Punt, PlayOutcome::Punt, 48);
        assert!(Highlight::collect(&r).is_empty());
    }

    #[test]
    fn test_event_tagging() {
        let event = GameEvent::QuarterEnd { quarter: 1, home_score: 7, away_score: 3 };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "quarter_end");
        assert_eq!(json["home_score"], 7);
    }
}
