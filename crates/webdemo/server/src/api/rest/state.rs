//! Application state for API handlers

use crate::build_info::BuildProperties;
use crate::config::AppConfig;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Identity of this service instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentity {
    pub id: String,
    pub name: String,
    pub version: String,
}

impl AppIdentity {
    /// Build from configuration, generating a random id when none is set
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            id: config
                .id
                .clone()
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            name: config.name.clone(),
            version: config.version.clone(),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Instance identity
    pub identity: Arc<AppIdentity>,

    /// Build metadata, absent when not exposed
    pub build: Option<Arc<BuildProperties>>,

    /// Service start time
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(identity: AppIdentity, build: Option<BuildProperties>) -> Self {
        Self {
            identity: Arc::new(identity),
            build: build.map(Arc::new),
            started_at: Utc::now(),
        }
    }

    /// Milliseconds since the service started
    pub fn uptime_millis(&self) -> i64 {
        (Utc::now() - self.started_at).num_milliseconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_uses_configured_id() {
        let config = AppConfig {
            id: Some("node-1".to_string()),
            ..Default::default()
        };
        assert_eq!(AppIdentity::from_config(&config).id, "node-1");
    }

    #[test]
    fn test_identity_generates_uuid() {
        let first = AppIdentity::from_config(&AppConfig::default());
        let second = AppIdentity::from_config(&AppConfig::default());

        assert!(uuid::Uuid::parse_str(&first.id).is_ok());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_uptime_is_non_negative() {
        let state = AppState::new(AppIdentity::from_config(&AppConfig::default()), None);
        assert!(state.uptime_millis() >= 0);
    }
}
