//! Client configuration
//!
//! Loaded from TOML. Every field has a default, so an empty file yields a
//! client for the public service that scopes to the caller's own tree.

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_API_URL: &str = "https://pixeldrain.com/api";
pub const DEFAULT_USER_ENDPOINT: &str = "/user";
pub const DEFAULT_ROOT_FOLDER_ID: &str = "me";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the API, filesystem requests go to `{api_url}/filesystem/`
    pub api_url: String,
    /// Appended to `api_url` to reach the account endpoint
    pub user_endpoint: String,
    /// Remote folder every scope is rooted under
    pub root_folder_id: String,
    /// Sent as the basic auth password with an empty user name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_endpoint: DEFAULT_USER_ENDPOINT.to_string(),
            root_folder_id: DEFAULT_ROOT_FOLDER_ID.to_string(),
            api_key: None,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.api_url()?;
        Ok(config)
    }

    /// Parsed and validated API base URL
    pub fn api_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.api_url).map_err(|source| ConfigError::InvalidApiUrl {
            url: self.api_url.clone(),
            source,
        })?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::CannotBeABase(self.api_url.clone()));
        }
        Ok(url)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid api url {url}: {source}")]
    InvalidApiUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("api url cannot be a base: {0}")]
    CannotBeABase(String),
}
