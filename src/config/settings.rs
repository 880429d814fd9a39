use serde::Deserialize;

/// Top-level configuration settings for the application.
///
/// Includes settings for the hub and for logging.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub hub: HubSettings,
    pub log: LogSettings,
}

/// Configuration settings for the notification hub.
///
/// `max_connections` is a soft cap: registrations past it are logged as a
/// warning but never refused.
#[derive(Debug, Deserialize, Clone)]
pub struct HubSettings {
    pub max_connections: usize,
}

/// Configuration settings for logging.
///
/// `level` is the default env-filter directive used when `RUST_LOG` is not
/// set.
#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled using defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub hub: Option<PartialHubSettings>,
    pub log: Option<PartialLogSettings>,
}

/// Partial hub settings.
///
/// Used when loading hub configuration from external sources with optional values.
#[derive(Debug, Deserialize)]
pub struct PartialHubSettings {
    pub max_connections: Option<usize>,
}

/// Partial log settings.
#[derive(Debug, Deserialize)]
pub struct PartialLogSettings {
    pub level: Option<String>,
}

/// Provides default values for `Settings`.
///
/// Ensures the application has sensible defaults if no configuration is provided.
impl Default for Settings {
    fn default() -> Self {
        Self {
            hub: HubSettings {
                max_connections: 1000,
            },
            log: LogSettings {
                level: "info".to_string(),
            },
        }
    }
}
