//! Portal configuration
//!
//! Read from a JSON file; every field is optional and falls back to the
//! values the website has always used.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::InMemoryVerifier;
use crate::content::{load_content, ContentError, SiteContent};
use crate::member::{NegativeDepositPolicy, DEFAULT_DEPOSITS, DEFAULT_MONTHLY_CONTRIBUTION};
use crate::view::{ViewEvent, ViewState, DEFAULT_SCROLL_THRESHOLD};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to open config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to load site content {}: {source}", path.display())]
    Content {
        path: PathBuf,
        source: ContentError,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Site content JSON; the built-in published content is used when absent
    #[serde(default)]
    pub content_path: Option<PathBuf>,

    /// Deposits pre-filled on the calculator form
    #[serde(default = "default_deposits")]
    pub default_deposits: f64,

    #[serde(default = "default_monthly_contribution")]
    pub default_monthly_contribution: f64,

    /// Scroll offset past which the navigation bar compacts
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: f64,

    #[serde(default)]
    pub negative_deposit_policy: NegativeDepositPolicy,

    /// Consecutive failed logins before an account locks (0 disables)
    #[serde(default = "default_max_failed_logins")]
    pub max_failed_logins: u32,
}

fn default_deposits() -> f64 { DEFAULT_DEPOSITS }
fn default_monthly_contribution() -> f64 { DEFAULT_MONTHLY_CONTRIBUTION }
fn default_scroll_threshold() -> f64 { DEFAULT_SCROLL_THRESHOLD }
fn default_max_failed_logins() -> u32 { 5 }

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            content_path: None,
            default_deposits: DEFAULT_DEPOSITS,
            default_monthly_contribution: DEFAULT_MONTHLY_CONTRIBUTION,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            negative_deposit_policy: NegativeDepositPolicy::Reject,
            max_failed_logins: 5,
        }
    }
}

impl PortalConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: PortalConfig = serde_json::from_reader(BufReader::new(file)).map_err(
            |source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            },
        )?;
        info!("Loaded portal config from {}", path.display());
        Ok(config)
    }

    /// Config file if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    /// Site content named by `content_path`, or the built-in set
    pub fn site_content(&self) -> Result<SiteContent, ConfigError> {
        match &self.content_path {
            Some(path) => load_content(path).map_err(|source| ConfigError::Content {
                path: path.clone(),
                source,
            }),
            None => Ok(SiteContent::alupe_default()),
        }
    }

    /// Empty member directory with the configured lockout limit
    pub fn verifier(&self) -> InMemoryVerifier {
        InMemoryVerifier::new(self.max_failed_logins)
    }

    /// Apply a view event using the configured scroll threshold
    pub fn apply_view(&self, state: &ViewState, event: &ViewEvent) -> ViewState {
        state.apply_with(event, self.scroll_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthError, CredentialVerifier, Credentials};

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: PortalConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PortalConfig::default());
        assert_eq!(config.default_deposits, 100_000.0);
        assert_eq!(config.default_monthly_contribution, 5_000.0);
        assert_eq!(config.scroll_threshold, 20.0);
        assert_eq!(config.negative_deposit_policy, NegativeDepositPolicy::Reject);
    }

    #[test]
    fn test_partial_override() {
        let config: PortalConfig = serde_json::from_str(
            r#"{"negative_deposit_policy": "clamp-to-zero", "max_failed_logins": 3}"#,
        )
        .unwrap();
        assert_eq!(config.negative_deposit_policy, NegativeDepositPolicy::ClampToZero);
        assert_eq!(config.max_failed_logins, 3);
        assert_eq!(config.default_deposits, 100_000.0);
    }

    #[test]
    fn test_builtin_content_without_path() {
        let content = PortalConfig::default().site_content().unwrap();
        assert_eq!(content, SiteContent::alupe_default());
    }

    #[test]
    fn test_missing_config_file() {
        let err = PortalConfig::from_file("/nonexistent/portal.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("failed to open config"));
    }

    #[test]
    fn test_bad_config_json() {
        let path = std::env::temp_dir().join(format!("portal_bad_{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        let err = PortalConfig::from_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Json { .. }));
    }

    #[test]
    fn test_missing_content_file() {
        let config = PortalConfig {
            content_path: Some(PathBuf::from("/nonexistent/content.json")),
            ..PortalConfig::default()
        };
        match config.site_content() {
            Err(ConfigError::Content { path, source }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/content.json"));
                assert!(matches!(source, ContentError::Io(_)));
            }
            other => panic!("expected content error, got {:?}", other),
        }
    }

    #[test]
    fn test_verifier_uses_lockout_limit() {
        let config: PortalConfig = serde_json::from_str(r#"{"max_failed_logins": 2}"#).unwrap();
        let verifier = config.verifier();
        verifier.register("AUS0003", "Grace Nekesa", "pw").unwrap();

        let wrong = Credentials::new("AUS0003", "nope");
        assert_eq!(verifier.verify(&wrong), Err(AuthError::InvalidCredentials));
        assert!(matches!(verifier.verify(&wrong), Err(AuthError::AccountLocked { .. })));
    }

    #[test]
    fn test_apply_view_uses_scroll_threshold() {
        let config: PortalConfig = serde_json::from_str(r#"{"scroll_threshold": 80.0}"#).unwrap();
        let state = ViewState::default();

        // Past the built-in 20px but not the configured 80px
        assert!(!config.apply_view(&state, &ViewEvent::Scrolled(50.0)).scrolled);
        assert!(config.apply_view(&state, &ViewEvent::Scrolled(81.0)).scrolled);
        assert!(PortalConfig::default().apply_view(&state, &ViewEvent::Scrolled(50.0)).scrolled);
    }
}
