//! Build-time Configuration
//!
//! Values come from environment variables captured when the bundle is built
//! (`TODOS_API_URL`, `TODOS_USER_ID`, `TODOS_LOG_LEVEL`).

use tracing::level_filters::LevelFilter;

use crate::models::UserId;

pub const DEFAULT_API_URL: &str = "https://mate.academy/students-api";

/// How long an error banner stays up before clearing itself
pub const ERROR_TIMEOUT_MS: u32 = 3000;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid user id: {0}")]
    InvalidUserId(String),
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
    #[error("api url must not be empty")]
    EmptyApiUrl,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// 0 means "not configured"; the app shows a warning instead of the list
    pub user_id: UserId,
    pub log_level: LevelFilter,
    pub error_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            user_id: 0,
            log_level: LevelFilter::INFO,
            error_timeout_ms: ERROR_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    /// Build from optional raw values; unset values keep their defaults
    pub fn from_vars(
        api_url: Option<&str>,
        user_id: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = api_url {
            let url = url.trim();
            if url.is_empty() {
                return Err(ConfigError::EmptyApiUrl);
            }
            config.api_base_url = url.to_string();
        }
        if let Some(raw) = user_id {
            config.user_id = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidUserId(raw.to_string()))?;
        }
        if let Some(raw) = log_level {
            config.log_level = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidLogLevel(raw.to_string()))?;
        }

        Ok(config)
    }

    /// Configuration baked in at build time
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            option_env!("TODOS_API_URL"),
            option_env!("TODOS_USER_ID"),
            option_env!("TODOS_LOG_LEVEL"),
        )
    }

    pub fn has_user(&self) -> bool {
        self.user_id != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_vars(None, None, None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.error_timeout_ms, 3000);
        assert!(!config.has_user());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_vars(Some("http://localhost:3000"), Some(" 1234 "), Some("debug")).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.user_id, 1234);
        assert_eq!(config.log_level, LevelFilter::DEBUG);
        assert!(config.has_user());
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            AppConfig::from_vars(None, Some("abc"), None),
            Err(ConfigError::InvalidUserId("abc".to_string()))
        );
        assert_eq!(
            AppConfig::from_vars(None, None, Some("loud")),
            Err(ConfigError::InvalidLogLevel("loud".to_string()))
        );
        assert_eq!(AppConfig::from_vars(Some("  "), None, None), Err(ConfigError::EmptyApiUrl));
    }
}
