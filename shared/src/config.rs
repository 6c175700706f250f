use crate::error::ConfigError;
use std::str::FromStr;

pub const API_URL_VAR: &str = "BILLING_API_URL";
pub const LOG_LEVEL_VAR: &str = "BILLING_LOG_LEVEL";
pub const DIRECTORY_TTL_VAR: &str = "BILLING_DIRECTORY_TTL_SECS";

/// Minimum severity written to the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::Invalid {
                name: LOG_LEVEL_VAR,
                value: s.to_string(),
            }),
        }
    }
}

/// Settings the front end needs before it can render anything
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the billing API, without a trailing slash
    pub api_base_url: String,
    pub log_level: LogLevel,
    pub directory_ttl_secs: u32,
}

impl AppConfig {
    pub const DEFAULT_DIRECTORY_TTL_SECS: u32 = 300;

    /// Build the config from raw environment values. The API URL is mandatory.
    pub fn from_values(
        api_url: Option<&str>,
        log_level: Option<&str>,
        directory_ttl_secs: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_base_url = parse_base_url(api_url.ok_or(ConfigError::Missing(API_URL_VAR))?)?;

        let log_level = match log_level.filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw.parse()?,
            None => LogLevel::Info,
        };

        let directory_ttl_secs = match directory_ttl_secs.filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| ConfigError::Invalid {
                name: DIRECTORY_TTL_VAR,
                value: raw.to_string(),
            })?,
            None => Self::DEFAULT_DIRECTORY_TTL_SECS,
        };

        Ok(Self {
            api_base_url,
            log_level,
            directory_ttl_secs,
        })
    }
}

/// Accept an absolute http(s) URL and strip trailing slashes
pub fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::Missing(API_URL_VAR));
    }

    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));

    match host {
        Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(trimmed.to_string()),
        _ => Err(ConfigError::Invalid {
            name: API_URL_VAR,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_url() {
        assert_eq!(parse_base_url("http://localhost:3001/").unwrap(), "http://localhost:3001");
        assert_eq!(parse_base_url(" https://api.example.com/v1// ").unwrap(), "https://api.example.com/v1");

        assert_eq!(parse_base_url(""), Err(ConfigError::Missing(API_URL_VAR)));
        assert!(matches!(parse_base_url("localhost:3001"), Err(ConfigError::Invalid { .. })));
        assert!(matches!(parse_base_url("http://"), Err(ConfigError::Invalid { .. })));
        assert!(matches!(parse_base_url("ftp://files"), Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_config_requires_api_url() {
        assert_eq!(
            AppConfig::from_values(None, Some("debug"), None),
            Err(ConfigError::Missing(API_URL_VAR))
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::from_values(Some("http://localhost:3001"), None, Some("")).unwrap();

        assert_eq!(config.api_base_url, "http://localhost:3001");
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.directory_ttl_secs, 300);
    }

    #[test]
    fn test_config_overrides() {
        let config = AppConfig::from_values(Some("http://api"), Some("WARN"), Some("60")).unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.directory_ttl_secs, 60);

        assert!(matches!(
            AppConfig::from_values(Some("http://api"), Some("verbose"), None),
            Err(ConfigError::Invalid { name: LOG_LEVEL_VAR, .. })
        ));
        assert!(matches!(
            AppConfig::from_values(Some("http://api"), None, Some("-5")),
            Err(ConfigError::Invalid { name: DIRECTORY_TTL_VAR, .. })
        ));
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
    }
}
