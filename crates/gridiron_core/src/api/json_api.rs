//! JSON entry point for hosts that drive the engine over strings.

use serde::{Deserialize, Serialize};

use super::config_env::config_from_env;
use crate::engine::{EngineConfig, GameSession, Tempo};
use crate::error::{GameError, Result};
use crate::models::{GameEvent, GameResult, Team};

pub const SCHEMA_VERSION: u8 = 1;

fn default_schema_version() -> u8 {
    SCHEMA_VERSION
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    pub seed: u64,
    pub home_team: Team,
    pub away_team: Team,
    /// Overrides the config's tempo.
    #[serde(default)]
    pub tempo: Option<Tempo>,
    /// Falls back to `GRIDIRON_CONFIG_PATH`, then to the default config.
    #[serde(default)]
    pub config: Option<EngineConfig>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResponse {
    pub schema_version: u8,
    pub seed: u64,
    pub result: GameResult,
    pub events: Vec<GameEvent>,
}

/// Simulate a whole game in fast-forward mode.
pub fn simulate_game(request: GameRequest) -> Result<GameResponse> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(GameError::Deserialization(format!(
            "Unsupported schema version: {}",
            request.schema_version
        )));
    }

    let mut config = match request.config {
        Some(config) => config,
        None => config_from_env()?.unwrap_or_default(),
    };
    if let Some(tempo) = request.tempo {
        config.tempo = tempo;
    }

    let mut session = GameSession::new(request.home_team, request.away_team, config, request.seed)?;
    let events = session.skip_to_end();
    Ok(GameResponse {
        schema_version: SCHEMA_VERSION,
        seed: request.seed,
        result: session.result(),
        events,
    })
}

/// String-in, string-out wrapper around [`simulate_game`].
pub fn simulate_game_json(request_json: &str) -> Result<String> {
    let request: GameRequest = serde_json::from_str(request_json)?;
    let response = simulate_game(request)?;
    serde_json::to_string(&response).map_err(|e| GameError::Serialization(e.to_string()))
}
