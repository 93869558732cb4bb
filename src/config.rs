//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::inquiry::transport::DEFAULT_DELAY;

/// Environment variable overriding the configured transport
const TRANSPORT_ENV: &str = "DESIGNPLUS_TRANSPORT";

/// Default upper bound on one submission
const DEFAULT_SUBMIT_TIMEOUT_SECS: u64 = 30;

/// Default toast display time
const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

/// Where inquiries are delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// Log the inquiry and report success after a short pause
    #[default]
    Stub,
    /// Append the inquiry to a local JSON-lines outbox
    Outbox,
}

impl TransportKind {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "stub" => Some(Self::Stub),
            "outbox" => Some(Self::Outbox),
            _ => None,
        }
    }
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Submission transport
    pub transport: Option<TransportKind>,
    /// Outbox file for the outbox transport
    pub outbox_path: Option<PathBuf>,
    /// Pause used by the stub transport
    pub submit_delay_ms: Option<u64>,
    /// Upper bound on one submission; 0 disables it
    pub submit_timeout_secs: Option<u64>,
    /// How long notifications stay on screen
    pub toast_duration_ms: Option<u64>,
    /// Alternate portfolio data file
    pub portfolio_path: Option<PathBuf>,
}

impl AppConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "designplus", "designplus-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: AppConfig = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), "Loaded configuration");
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Configured transport, with the environment taking precedence
    pub fn transport_kind(&self) -> TransportKind {
        let from_env = std::env::var(TRANSPORT_ENV).ok();
        resolve_transport(from_env.as_deref(), self.transport)
    }

    /// Platform data directory, or the working directory when there is none
    fn data_dir() -> PathBuf {
        Self::project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Where log files are written; the terminal belongs to the UI
    pub fn log_dir() -> PathBuf {
        Self::data_dir().join("logs")
    }

    pub fn outbox_path(&self) -> PathBuf {
        self.outbox_path
            .clone()
            .unwrap_or_else(|| Self::data_dir().join("outbox.jsonl"))
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DELAY)
    }

    /// `None` when the limit is disabled
    pub fn submit_timeout(&self) -> Option<Duration> {
        match self.submit_timeout_secs.unwrap_or(DEFAULT_SUBMIT_TIMEOUT_SECS) {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS))
    }
}

/// A recognised environment value wins over the configured one
fn resolve_transport(env: Option<&str>, configured: Option<TransportKind>) -> TransportKind {
    let from_env = env.and_then(|value| {
        let kind = TransportKind::parse(value);
        if kind.is_none() {
            tracing::warn!("Ignoring unknown {TRANSPORT_ENV} value: {value}");
        }
        kind
    });

    from_env.or(configured).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.transport.is_none());
        assert!(config.outbox_path.is_none());
        assert!(config.submit_delay_ms.is_none());
        assert!(config.submit_timeout_secs.is_none());
        assert!(config.toast_duration_ms.is_none());
        assert!(config.portfolio_path.is_none());
    }

    #[test]
    fn test_default_durations() {
        let config = AppConfig::default();
        assert_eq!(config.submit_delay(), Duration::from_secs(2));
        assert_eq!(config.submit_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.toast_duration(), Duration::from_secs(5));
    }

    #[test]
    fn test_zero_timeout_disables_limit() {
        let config = AppConfig {
            submit_timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(config.submit_timeout().is_none());
    }

    #[test]
    fn test_serialization() {
        let config = AppConfig {
            transport: Some(TransportKind::Outbox),
            outbox_path: Some(PathBuf::from("/tmp/outbox.jsonl")),
            submit_delay_ms: Some(250),
            submit_timeout_secs: Some(10),
            toast_duration_ms: Some(3000),
            portfolio_path: Some(PathBuf::from("/tmp/projects.json")),
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""transport":"outbox""#));

        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.transport, Some(TransportKind::Outbox));
        assert_eq!(parsed.outbox_path, Some(PathBuf::from("/tmp/outbox.jsonl")));
        assert_eq!(parsed.submit_delay_ms, Some(250));
        assert_eq!(parsed.submit_timeout_secs, Some(10));
        assert_eq!(parsed.toast_duration_ms, Some(3000));
        assert_eq!(parsed.portfolio_path, Some(PathBuf::from("/tmp/projects.json")));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: AppConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.transport.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"transport": "stub", "unknown_field": "value"}"#;
        let parsed: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.transport, Some(TransportKind::Stub));
    }

    #[test]
    fn test_unknown_transport_is_rejected() {
        let json = r#"{"transport": "carrier-pigeon"}"#;
        let result: Result<AppConfig, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_env_transport_beats_config() {
        assert_eq!(
            resolve_transport(Some("outbox"), Some(TransportKind::Stub)),
            TransportKind::Outbox
        );
    }

    #[test]
    fn test_unknown_env_transport_falls_back_to_config() {
        assert_eq!(
            resolve_transport(Some("smtp"), Some(TransportKind::Outbox)),
            TransportKind::Outbox
        );
    }

    #[test]
    fn test_transport_defaults_to_stub() {
        assert_eq!(resolve_transport(None, None), TransportKind::Stub);
        assert_eq!(resolve_transport(Some("smtp"), None), TransportKind::Stub);
    }

    #[test]
    fn test_transport_kind_parse() {
        assert_eq!(TransportKind::parse("Outbox"), Some(TransportKind::Outbox));
        assert_eq!(TransportKind::parse(" stub "), Some(TransportKind::Stub));
        assert_eq!(TransportKind::parse("smtp"), None);
    }

    #[test]
    fn test_explicit_outbox_path_wins() {
        let config = AppConfig {
            outbox_path: Some(PathBuf::from("/srv/inquiries.jsonl")),
            ..Default::default()
        };
        assert_eq!(config.outbox_path(), PathBuf::from("/srv/inquiries.jsonl"));
    }

    #[test]
    fn test_default_outbox_path_is_jsonl() {
        let path = AppConfig::default().outbox_path();
        assert_eq!(path.file_name().unwrap(), "outbox.jsonl");
    }

    #[test]
    fn test_log_dir_is_beside_outbox() {
        let outbox = AppConfig::default().outbox_path();
        let logs = AppConfig::log_dir();
        assert_eq!(logs.parent(), outbox.parent());
        assert!(logs.ends_with("logs"));
    }

    #[test]
    fn test_load_returns_ok() {
        // Returns defaults when no config file exists
        let result = AppConfig::load();
        assert!(result.is_ok());
    }
}
