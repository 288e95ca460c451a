use std::{env, fs};

use crate::engine::EngineConfig;
use crate::error::{GameError, Result};

pub(crate) const CONFIG_PATH_ENV: &str = "GRIDIRON_CONFIG_PATH";

/// Engine config named by `GRIDIRON_CONFIG_PATH`, if the variable is set.
pub(crate) fn config_from_env() -> Result<Option<EngineConfig>> {
    let Ok(path) = env::var(CONFIG_PATH_ENV) else {
        return Ok(None);
    };

    let path = path.trim();
    if path.is_empty() {
        return Ok(None);
    }

    load_config_file(path).map(Some)
}

pub(crate) fn load_config_file(path: &str) -> Result<EngineConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        GameError::InvalidConfig(format!("Failed to read config file from {CONFIG_PATH_ENV}='{path}': {e}"))
    })?;

    let config = EngineConfig::from_json(&content).map_err(|e| {
        GameError::InvalidConfig(format!("Failed to parse config JSON from {CONFIG_PATH_ENV}='{path}': {e}"))
    })?;

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Tempo;
    use std::io::Write;

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"tempo":"hurry-up","skip_to_end_ceiling":300}}"#).unwrap();
        let config = load_config_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.tempo, Tempo::HurryUp);
        assert_eq!(config.skip_to_end_ceiling, 300);
        assert_eq!(config.skip_to_drive_ceiling, 50);
    }

    #[test]
    fn test_invalid_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"skip_to_end_ceiling":0}}"#).unwrap();
        let err = load_config_file(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn test_missing_file_names_variable() {
        let err = load_config_file("/nonexistent/gridiron.json").unwrap_err();
        assert!(err.to_string().contains(CONFIG_PATH_ENV));
    }
}
