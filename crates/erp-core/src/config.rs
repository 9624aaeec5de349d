//! Client Configuration

use serde::Deserialize;

use crate::domain::{DomainError, DomainResult};
use crate::view::PageSize;

/// Configuration for the admin UI's backend access and ambient services
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Absolute base URL of the REST API (e.g. "https://erp.example.com/api")
    pub base_url: String,
    /// Rows per table page on first render
    pub default_page_size: PageSize,
    /// Minimum log level ("error", "warn", "info", "debug", "trace")
    pub log_level: String,
    /// Number of log records kept in memory
    pub log_capacity: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000/api".to_string(),
            default_page_size: PageSize::Rows(10),
            log_level: "info".to_string(),
            log_capacity: 500,
        }
    }
}

impl ApiConfig {
    /// Parse a JSON configuration document; missing keys keep their defaults
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        let config: ApiConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Level filter for the logger, falling back to `Info` on unknown names
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    fn validate(&self) -> DomainResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(DomainError::InvalidInput(format!(
                "base_url must be an absolute http(s) URL, got {:?}",
                self.base_url
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ApiConfig::from_json(r#"{"base_url": "https://erp.example.com/api", "log_level": "debug"}"#).unwrap();
        assert_eq!(config.base_url, "https://erp.example.com/api");
        assert_eq!(config.default_page_size, PageSize::Rows(10));
        assert_eq!(config.log_level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_page_size_all_from_minus_one() {
        let config = ApiConfig::from_json(r#"{"base_url": "http://x/api", "default_page_size": -1}"#).unwrap();
        assert_eq!(config.default_page_size, PageSize::All);
    }

    #[test]
    fn test_relative_base_url_rejected() {
        assert!(ApiConfig::from_json(r#"{"base_url": "/api"}"#).is_err());
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = ApiConfig { log_level: "loud".into(), ..Default::default() };
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
    }
}
