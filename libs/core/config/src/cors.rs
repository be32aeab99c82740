use crate::{env_or_default, ConfigError, FromEnv};

/// Default browser client origin (Angular dev server).
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:4200";

/// Origins allowed to call the API from a browser
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins }
    }

    /// Parses a comma-separated origin list, dropping empty entries.
    pub fn parse(origins: &str) -> Result<Self, ConfigError> {
        let allowed_origins: Vec<String> = origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        if allowed_origins.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: "at least one origin is required".to_string(),
            });
        }

        Ok(Self { allowed_origins })
    }
}

impl FromEnv for CorsConfig {
    /// Reads `CORS_ALLOWED_ORIGIN` (comma-separated), defaulting to the local client origin.
    fn from_env() -> Result<Self, ConfigError> {
        Self::parse(&env_or_default("CORS_ALLOWED_ORIGIN", DEFAULT_ALLOWED_ORIGIN))
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
        }
    }
}
