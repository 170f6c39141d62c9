use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::recon::ReconConfig;
use super::spoof::SpoofConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-recon.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-recon/config.toml";

/// Main configuration structure for Ferrous Recon
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Network discovery (interface, refresh interval, gateway)
    #[serde(default)]
    pub recon: ReconConfig,

    /// Spoof rules source
    #[serde(default)]
    pub spoof: SpoofConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-recon.toml in current directory
    /// 3. /etc/ferrous-recon/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(interface) = overrides.interface {
            self.recon.interface = interface;
        }
        if let Some(secs) = overrides.interval_secs {
            self.recon.interval_secs = secs;
        }
        if let Some(hosts_file) = overrides.hosts_file {
            self.spoof.hosts_file = Some(hosts_file);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recon.interface.trim().is_empty() {
            return Err(ConfigError::Validation(
                "recon.interface cannot be empty".to_string(),
            ));
        }

        if self.recon.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "recon.interval_secs must be greater than 0".to_string(),
            ));
        }

        if self.recon.gateway_mac.is_some() && self.recon.gateway_ip.is_none() {
            return Err(ConfigError::Validation(
                "recon.gateway_mac requires recon.gateway_ip".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| std::path::Path::new(path).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub interface: Option<String>,
    pub interval_secs: Option<u64>,
    pub hosts_file: Option<String>,
    pub log_level: Option<String>,
}
