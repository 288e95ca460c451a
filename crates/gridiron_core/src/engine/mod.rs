pub mod config;
pub mod game_state;
pub mod momentum;
pub mod outcome;
pub mod play_call; // human call queue + pending-input descriptor
pub mod play_selector;
pub mod possession; // downs, scoring, clock
pub mod probability;
pub mod session;
pub mod stats;

pub use config::{EngineConfig, Tempo, QUARTERS, QUARTER_SECONDS};
pub use game_state::{DriveState, GameState, TeamState};
pub use momentum::momentum_delta;
pub use outcome::{resolve, resolve_for};
pub use play_call::{CallQueue, CallRole, PendingCall};
pub use play_selector::{select_defensive_call, select_offensive_play};
pub use possession::{apply_result, Application, ClockTransition};
pub use session::{GameSession, StepResult};
pub use stats::record_play;
