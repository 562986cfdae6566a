use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing_subscriber::filter;

use transit_ui::provider::{ProviderMeta, ProviderRegistry, WalletProvider};

pub const DEFAULT_FILE_NAME: &str = "gui.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProviderConfig {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The provider asks for a PIN before connecting.
    #[serde(default)]
    pub requires_pin: bool,
    /// Account returned by the simulated transit layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// Make every simulated connection to this provider fail.
    #[serde(default)]
    pub fail: bool,
}

impl ProviderConfig {
    fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            requires_pin: false,
            account: None,
            fail: false,
        }
    }

    pub fn wallet_provider(&self) -> WalletProvider {
        WalletProvider {
            id: self.id.clone(),
            meta: self.name.as_ref().map(|name| ProviderMeta {
                name: name.clone(),
                description: self.description.clone(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// log level, can be "info", "debug", "trace".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    /// Use debug log level if true and no log level is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    /// Show the logout and dismiss controls.
    #[serde(default = "default_dismissable")]
    pub dismissable: bool,
    #[serde(default)]
    pub large: bool,
    #[serde(default)]
    pub providers: Vec<ProviderConfig>,
}

fn default_dismissable() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: None,
            debug: None,
            dismissable: true,
            large: false,
            providers: vec![
                ProviderConfig {
                    account: Some("alice".to_string()),
                    ..ProviderConfig::new("scatter", "Scatter", "Scatter desktop")
                },
                ProviderConfig {
                    requires_pin: true,
                    account: Some("bob".to_string()),
                    ..ProviderConfig::new("ledger", "Ledger", "Ledger hardware wallet")
                },
                ProviderConfig {
                    fail: true,
                    ..ProviderConfig::new("lynx", "Lynx", "Lynx mobile wallet")
                },
            ],
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConfigError::NotFound,
                _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
            })
            .and_then(|file_content| {
                toml::from_slice::<Config>(&file_content).map_err(|e| {
                    ConfigError::ReadingFile(format!("Parsing configuration file: {}", e))
                })
            })?;

        // check if log_level field is valid
        config.log_level()?;
        config.check_providers()?;
        Ok(config)
    }

    pub fn to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string(&self)
            .map_err(|e| ConfigError::WritingFile(format!("Failed to serialize config: {}", e)))?;

        let mut config_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| ConfigError::WritingFile(e.to_string()))?;

        config_file.write_all(content.as_bytes()).map_err(|e| {
            tracing::warn!("failed to write to file: {:?}", e);
            ConfigError::WritingFile(e.to_string())
        })?;

        tracing::info!("Done writing gui configuration file");
        Ok(())
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        if let Some(level) = &self.log_level {
            match level.as_ref() {
                "info" => Ok(filter::LevelFilter::INFO),
                "debug" => Ok(filter::LevelFilter::DEBUG),
                "trace" => Ok(filter::LevelFilter::TRACE),
                _ => Err(ConfigError::InvalidField(
                    "log_level",
                    format!("Unknown value '{}'", level),
                )),
            }
        } else if let Some(true) = self.debug {
            Ok(filter::LevelFilter::DEBUG)
        } else {
            Ok(filter::LevelFilter::INFO)
        }
    }

    fn check_providers(&self) -> Result<(), ConfigError> {
        let mut ids = HashSet::new();
        for provider in &self.providers {
            if provider.id.is_empty() {
                return Err(ConfigError::InvalidField(
                    "providers",
                    "Provider id cannot be empty".to_string(),
                ));
            }
            if !ids.insert(provider.id.as_str()) {
                return Err(ConfigError::InvalidField(
                    "providers",
                    format!("Duplicate provider id '{}'", provider.id),
                ));
            }
        }
        Ok(())
    }

    pub fn registry(&self) -> ProviderRegistry {
        let mut registry = ProviderRegistry::new();
        for provider in &self.providers {
            registry.insert(provider.id.clone(), provider.requires_pin);
        }
        registry
    }

    pub fn wallet_providers(&self) -> Vec<WalletProvider> {
        self.providers
            .iter()
            .map(ProviderConfig::wallet_provider)
            .collect()
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ConfigError {
    InvalidField(&'static str, String),
    NotFound,
    ReadingFile(String),
    WritingFile(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Config file not found"),
            Self::InvalidField(field, message) => {
                write!(f, "Config field {} is invalid: {}", field, message)
            }
            Self::ReadingFile(e) => write!(f, "Error while reading file: {}", e),
            Self::WritingFile(e) => write!(f, "Error while writing file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
