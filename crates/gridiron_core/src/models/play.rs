use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::team::PlayerId;
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunKind {
    Inside,
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassDepth {
    Short,
    Medium,
    Long,
}

/// Offensive play, with the subtype only where the category has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "category", content = "subtype", rename_all = "snake_case")]
pub enum PlayType {
    Run(RunKind),
    Pass(PassDepth),
    FieldGoal,
    Punt,
}

impl PlayType {
    /// Run or pass; kicks never count toward gains.
    pub fn is_from_scrimmage(&self) -> bool {
        matches!(self, PlayType::Run(_) | PlayType::Pass(_))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefenseCall {
    #[default]
    Man,
    Zone,
    Blitz,
}

/// Human play-call vocabulary, one per snap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum PlayCall {
    RunInside,
    RunOutside,
    PassShort,
    PassMedium,
    PassLong,
    FieldGoal,
    Punt,
    DefenseMan,
    DefenseZone,
    DefenseBlitz,
}

impl PlayCall {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayCall::RunInside => "run_inside",
            PlayCall::RunOutside => "run_outside",
            PlayCall::PassShort => "pass_short",
            PlayCall::PassMedium => "pass_medium",
            PlayCall::PassLong => "pass_long",
            PlayCall::FieldGoal => "field_goal",
            PlayCall::Punt => "punt",
            PlayCall::DefenseMan => "defense_man",
            PlayCall::DefenseZone => "defense_zone",
            PlayCall::DefenseBlitz => "defense_blitz",
        }
    }

    pub fn is_defensive(&self) -> bool {
        self.defense_call().is_some()
    }

    pub fn play_type(&self) -> Option<PlayType> {
        match self {
            PlayCall::RunInside => Some(PlayType::Run(RunKind::Inside)),
            PlayCall::RunOutside => Some(PlayType::Run(RunKind::Outside)),
            PlayCall::PassShort => Some(PlayType::Pass(PassDepth::Short)),
            PlayCall::PassMedium => Some(PlayType::Pass(PassDepth::Medium)),
            PlayCall::PassLong => Some(PlayType::Pass(PassDepth::Long)),
            PlayCall::FieldGoal => Some(PlayType::FieldGoal),
            PlayCall::Punt => Some(PlayType::Punt),
            _ => None,
        }
    }

    pub fn defense_call(&self) -> Option<DefenseCall> {
        match self {
            PlayCall::DefenseMan => Some(DefenseCall::Man),
            PlayCall::DefenseZone => Some(DefenseCall::Zone),
            PlayCall::DefenseBlitz => Some(DefenseCall::Blitz),
            _ => None,
        }
    }
}

impl fmt::Display for PlayCall {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayCall {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "run_inside" => Ok(PlayCall::RunInside),
            "run_outside" => Ok(PlayCall::RunOutside),
            "pass_short" => Ok(PlayCall::PassShort),
            "pass_medium" => Ok(PlayCall::PassMedium),
            "pass_long" => Ok(PlayCall::PassLong),
            "field_goal" => Ok(PlayCall::FieldGoal),
            "punt" => Ok(PlayCall::Punt),
            "defense_man" => Ok(PlayCall::DefenseMan),
            "defense_zone" => Ok(PlayCall::DefenseZone),
            "defense_blitz" => Ok(PlayCall::DefenseBlitz),
            other => Err(GameError::UnknownPlayCall(other.to_string())),
        }
    }
}

/// Resolved outcome tag of a single play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayOutcome {
    Gain,
    Incomplete,
    Sack,
    Touchdown,
    Safety,
    Turnover,
    TurnoverOnDowns,
    FieldGoal,
    FieldGoalMiss,
    FirstDown,
    Punt,
}

impl PlayOutcome {
    /// Outcomes that hand the ball to the other team.
    pub fn changes_possession(&self) -> bool {
        matches!(
            self,
            PlayOutcome::Touchdown
                | PlayOutcome::Safety
                | PlayOutcome::Turnover
                | PlayOutcome::TurnoverOnDowns
                | PlayOutcome::FieldGoal
                | PlayOutcome::FieldGoalMiss
                | PlayOutcome::Punt
        )
    }

    /// Outcomes decided by the play itself, before any yardage is applied.
    pub fn ends_possession_at_snap(&self) -> bool {
        matches!(
            self,
            PlayOutcome::Turnover
                | PlayOutcome::FieldGoal
                | PlayOutcome::FieldGoalMiss
                | PlayOutcome::Punt
        )
    }
}

/// Players involved in a play, by role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayParticipants {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passer: Option<PlayerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ball_carrier: Option<PlayerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<PlayerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kicker: Option<PlayerId>,
}

/// Transient result of one snap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayResult {
    pub play: PlayType,
    pub defense: DefenseCall,
    /// Final outcome after field position, downs and scoring were applied.
    pub outcome: PlayOutcome,
    /// Outcome as the resolver produced it, before any override.
    pub snap_outcome: PlayOutcome,
    pub yards: i32,
    pub message: String,
    pub participants: PlayParticipants,
    /// Set by the resolver when the gain came from an explosive roll.
    #[serde(default)]
    pub explosive: bool,
}

impl PlayResult {
    pub fn is_interception(&self) -> bool {
        matches!(self.play, PlayType::Pass(_)) && self.outcome == PlayOutcome::Turnover
    }
}
