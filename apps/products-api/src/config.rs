//! Configuration for Products API

use core_config::{env_or_default, server::ServerConfig, ConfigError, FromEnv};

pub use core_config::Environment;

/// Token accepted by the bearer guard when `AUTH_TOKEN` is unset
pub const DEFAULT_AUTH_TOKEN: &str = "letmein";

/// Bearer-token settings
#[derive(Clone)]
pub struct AuthConfig {
    pub token: String,
}

impl FromEnv for AuthConfig {
    /// Reads `AUTH_TOKEN`, defaulting to [`DEFAULT_AUTH_TOKEN`]
    fn from_env() -> Result<Self, ConfigError> {
        let token = env_or_default("AUTH_TOKEN", DEFAULT_AUTH_TOKEN);
        if token.trim().is_empty() {
            return Err(ConfigError::ParseError {
                key: "AUTH_TOKEN".to_string(),
                details: "token must not be empty".to_string(),
            });
        }

        Ok(Self { token })
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token: DEFAULT_AUTH_TOKEN.to_string(),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Application configuration
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            environment: Environment::from_env(),
        })
    }
}
