//! The app-wide configuration handed over by the host page.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

static CONFIG: OnceLock<Config> = OnceLock::new();

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base path of the club's JSON endpoints. The host page decides
    /// between the local and the deployed backend.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Id of the element the app mounts at.
    #[serde(default = "default_mountpoint")]
    pub mountpoint: String,
}

fn default_api_base() -> String {
    String::from("./api")
}

fn default_mountpoint() -> String {
    String::from("app")
}

/// Stores the config for the lifetime of the program. Returns `Err` with
/// the rejected value if a config is already stored.
pub fn set(config: Config) -> Result<(), Config> {
    CONFIG.set(config)
}

/// Returns the stored config.
///
/// # Panics
///
/// Panics if [`set`] has not been called yet.
pub fn get() -> &'static Config {
    CONFIG.get().expect("config is not set")
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn test_config_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.api_base, "./api");
        assert_eq!(config.mountpoint, "app");
    }
}
