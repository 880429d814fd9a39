mod settings;

use crate::config::settings::PartialSettings;
use crate::utils::error::Error;
use config::{Config, Environment, File};

pub use settings::{HubSettings, LogSettings, Settings};

/// Loads the configuration from the default file and environment variables
/// Merges the configuration with default values
/// Returns a `Settings` struct containing the hub and log configurations
pub fn load_config() -> Result<Settings, Error> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::default().separator("_"));

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    // Merge with defaults
    let default = Settings::default();

    Ok(Settings {
        hub: HubSettings {
            max_connections: partial
                .hub
                .as_ref()
                .and_then(|h| h.max_connections)
                .unwrap_or(default.hub.max_connections),
        },
        log: LogSettings {
            level: partial
                .log
                .as_ref()
                .and_then(|l| l.level.clone())
                .unwrap_or(default.log.level),
        },
    })
}
