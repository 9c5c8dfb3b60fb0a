/*
[INPUT]:  YAML configuration file, LISTMONK_* environment
[OUTPUT]: Parsed CLI configuration and adapter ClientConfig
[POS]:    Configuration layer - connection setup
[UPDATE]: When adding new configuration options
*/

use std::time::Duration;

use anyhow::Context;
use listmonk_adapter::http::DEFAULT_BASE_URL;
use listmonk_adapter::{ClientConfig, Credentials};
use serde::{Deserialize, Serialize};

/// Connection settings for one Listmonk server
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CliConfig {
    /// Server root, without the `/api` suffix
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API user name
    #[serde(default = "default_username")]
    pub username: String,
    /// API user token or password
    #[serde(default = "default_password")]
    pub password: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            username: default_username(),
            password: default_password(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_password() -> String {
    "admin".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Adapter configuration with file values first, then `LISTMONK_*`
    /// environment variables on top
    pub fn client_config(&self) -> anyhow::Result<ClientConfig> {
        let config = ClientConfig::new(
            self.base_url.as_str(),
            Credentials::new(self.username.as_str(), self.password.as_str()),
        )
        .with_timeout(Duration::from_secs(self.timeout_secs));
        config.merge_env().context("read LISTMONK_* environment")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: CliConfig = serde_yaml::from_str("base_url: https://mail.example.com\n").unwrap();
        assert_eq!(config.base_url, "https://mail.example.com");
        assert_eq!(config.username, "admin");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_yaml_roundtrip_of_defaults() {
        let yaml = serde_yaml::to_string(&CliConfig::default()).unwrap();
        assert!(yaml.contains("base_url: http://localhost:9000"));
        let parsed: CliConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, CliConfig::default());
    }
}
