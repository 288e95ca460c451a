use thiserror::Error;

use crate::models::{PlayCall, TeamSide};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("Game is already complete")]
    GameComplete,

    #[error("Play call {call} does not apply to {side:?} on this snap")]
    CallNotApplicable { side: TeamSide, call: PlayCall },

    #[error("{side:?} is not human-controlled")]
    NotHumanControlled { side: TeamSide },

    #[error("{side:?} has no timeouts remaining")]
    NoTimeoutsRemaining { side: TeamSide },

    #[error("Unknown play call: {0}")]
    UnknownPlayCall(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl GameError {
    /// Whether the session can keep going after this error.
    pub fn is_recoverable(&self) -> bool {
        match self {
            GameError::GameComplete => false,
            GameError::CallNotApplicable { .. } => true,
            GameError::NotHumanControlled { .. } => true,
            GameError::NoTimeoutsRemaining { .. } => true,
            GameError::UnknownPlayCall(_) => true,
            _ => false,
        }
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            GameError::Deserialization(err.to_string())
        } else {
            GameError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_maps_to_deserialization() {
        let err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let mapped: GameError = err.into();
        assert!(matches!(mapped, GameError::Deserialization(_)));
    }

    #[test]
    fn test_recoverability() {
        assert!(!GameError::GameComplete.is_recoverable());
        assert!(GameError::NoTimeoutsRemaining { side: TeamSide::Home }.is_recoverable());
        assert!(!GameError::InvalidConfig("x".into()).is_recoverable());
    }

    #[test]
    fn test_display_messages() {
        let err = GameError::CallNotApplicable { side: TeamSide::Away, call: PlayCall::DefenseBlitz };
        assert_eq!(err.to_string(), "Play call defense_blitz does not apply to Away on this snap");
    }
}
