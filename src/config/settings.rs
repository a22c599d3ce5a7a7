//! Process settings read from the environment.

use crate::error::ConfigError;

/// Database URL. Relative file paths are resolved against the working directory.
pub const DB_URI_VAR: &str = "DB_URI";
pub const DB_MAX_CONNECTIONS_VAR: &str = "DB_MAX_CONNECTIONS";

pub const DEFAULT_DB_URI: &str = "sqlite://app.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// The server always binds here.
pub const LISTEN_ADDR: &str = "127.0.0.1:5555";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub max_connections: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DB_URI.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build settings from an arbitrary variable source. Blank values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get(DB_URI_VAR).unwrap_or_else(|| DEFAULT_DB_URI.into());
        let max_connections = match get(DB_MAX_CONNECTIONS_VAR) {
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidVar {
                        var: DB_MAX_CONNECTIONS_VAR,
                        value: raw,
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            max_connections,
        })
    }

    /// In-memory settings for tests and throwaway runs.
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".into(),
            max_connections: 1,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}
