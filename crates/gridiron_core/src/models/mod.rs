pub mod events;
pub mod play;
pub mod stats;
pub mod team;

pub use events::{DriveSummary, GameEvent, Highlight, PlayEvent, HIGHLIGHT_BIG_PLAY_YARDS};
pub use play::{
    DefenseCall, PassDepth, PlayCall, PlayOutcome, PlayParticipants, PlayResult,
    PlayType, RunKind,
};
pub use stats::{GameResult, PlayerGameStats, TeamGameStats};
pub use team::{DepthChart, Player, PlayerId, Position, Team, TeamSide, TeamStrength};
