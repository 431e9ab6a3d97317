use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::constants::{defaults, envvars, topics};

#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub broker: BrokerSettings,
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub producer: ProducerSettings,
}

#[derive(Clone, Debug, Deserialize)]
pub struct BrokerSettings {
    #[serde(default = "default_broker_host")]
    pub host: String,
    #[serde(
        default = "default_broker_port",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub port: u16,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_token_file")]
    pub token_file: PathBuf,
    #[serde(
        default = "default_timeout_secs",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub timeout_secs: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProducerSettings {
    #[serde(default = "default_cities")]
    pub cities: Vec<String>,
    #[serde(default = "default_topic_root")]
    pub topic_root: String,
    #[serde(
        default = "default_refresh_interval_secs",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub refresh_interval_secs: u64,
}

impl Settings {
    /// Load settings from the given file (format by extension), with
    /// `AQP`-prefixed environment variables taking precedence.
    pub fn load(path: &Path) -> Result<Settings, config::ConfigError> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(true))
            .add_source(
                config::Environment::with_prefix(envvars::SETTINGS_PREFIX)
                    .try_parsing(true)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

impl Default for BrokerSettings {
    fn default() -> Self {
        Self {
            host: default_broker_host(),
            port: default_broker_port(),
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_file: default_token_file(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ProducerSettings {
    fn default() -> Self {
        Self {
            cities: default_cities(),
            topic_root: default_topic_root(),
            refresh_interval_secs: default_refresh_interval_secs(),
        }
    }
}

fn default_broker_host() -> String {
    defaults::BROKER_HOST.to_string()
}

fn default_broker_port() -> u16 {
    defaults::BROKER_PORT
}

fn default_base_url() -> String {
    defaults::FEED_BASE_URL.to_string()
}

fn default_token_file() -> PathBuf {
    PathBuf::from(defaults::TOKEN_FILE)
}

fn default_timeout_secs() -> u64 {
    defaults::FEED_TIMEOUT_SECS
}

fn default_cities() -> Vec<String> {
    defaults::CITIES.iter().map(|c| c.to_string()).collect()
}

fn default_topic_root() -> String {
    topics::AQI_DATA.to_string()
}

fn default_refresh_interval_secs() -> u64 {
    defaults::REFRESH_INTERVAL_SECS
}
