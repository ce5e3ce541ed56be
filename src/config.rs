//! Application-level configuration loading.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "GAMEGAUGE_BACK_CONFIG_PATH";
/// Capacity of the SSE broadcast channel when no config is supplied.
const DEFAULT_SSE_CAPACITY: usize = 16;
/// Roster cap per board when no config is supplied.
const DEFAULT_MAX_PARTICIPANTS: usize = 32;

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    sse_capacity: usize,
    max_participants: usize,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to baked-in
    /// defaults when the file is absent or unreadable.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let config: Self = raw.into();
                    info!(path = %path.display(), "loaded configuration");
                    config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Capacity of the SSE broadcast channel.
    pub fn sse_capacity(&self) -> usize {
        self.sse_capacity
    }

    /// Maximum number of participants a single board accepts.
    pub fn max_participants(&self) -> usize {
        self.max_participants
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sse_capacity: DEFAULT_SSE_CAPACITY,
            max_participants: DEFAULT_MAX_PARTICIPANTS,
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    sse_capacity: Option<usize>,
    max_participants: Option<usize>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        Self {
            sse_capacity: value.sse_capacity.unwrap_or(DEFAULT_SSE_CAPACITY),
            max_participants: value.max_participants.unwrap_or(DEFAULT_MAX_PARTICIPANTS),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_used_for_missing_fields() {
        let raw: RawConfig = serde_json::from_str("{}").unwrap();
        let config: AppConfig = raw.into();
        assert_eq!(config.sse_capacity(), DEFAULT_SSE_CAPACITY);
        assert_eq!(config.max_participants(), DEFAULT_MAX_PARTICIPANTS);
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let raw: RawConfig =
            serde_json::from_str(r#"{"sse_capacity": 64, "max_participants": 8}"#).unwrap();
        let config: AppConfig = raw.into();
        assert_eq!(config.sse_capacity(), 64);
        assert_eq!(config.max_participants(), 8);
    }
}
