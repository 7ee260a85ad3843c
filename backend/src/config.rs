//! Server settings, read from `IMMOCONNECT_*` environment variables.

use common::config::ClientConfig;
use common::compose::DEFAULT_COUNTRY_ID;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },

    #[error("{var} must be an integer, got {value:?}")]
    InvalidInteger { var: &'static str, value: String },

    #[error("{var} must be true or false, got {value:?}")]
    InvalidBool { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_base_url: String,
    pub country_id: i64,
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            api_base_url: "/api".to_string(),
            country_id: DEFAULT_COUNTRY_ID,
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or blank keys keep their
    /// default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(host) = get("IMMOCONNECT_HOST") {
            config.host = host;
        }
        if let Some(value) = get("IMMOCONNECT_PORT") {
            config.port = value.parse().map_err(|_| ConfigError::InvalidPort {
                var: "IMMOCONNECT_PORT",
                value,
            })?;
        }
        if let Some(url) = get("IMMOCONNECT_API_BASE_URL") {
            config.api_base_url = url;
        }
        if let Some(value) = get("IMMOCONNECT_COUNTRY_ID") {
            config.country_id = value.parse().map_err(|_| ConfigError::InvalidInteger {
                var: "IMMOCONNECT_COUNTRY_ID",
                value,
            })?;
        }
        if let Some(value) = get("IMMOCONNECT_OPEN_BROWSER") {
            config.open_browser = match value.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::InvalidBool {
                        var: "IMMOCONNECT_OPEN_BROWSER",
                        value,
                    })
                }
            };
        }
        Ok(config)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// The part of the configuration exposed to the browser.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_base_url: self.api_base_url.clone(),
            country_id: self.country_id,
        }
    }
}
