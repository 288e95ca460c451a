pub mod json_api;

mod config_env;

pub use json_api::{simulate_game, simulate_game_json, GameRequest, GameResponse, SCHEMA_VERSION};
