//! Configuration loading for NN Investigator.
//! Reads nninv.toml from the current directory or the path in NNINV_CONFIG.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::retry::RetryConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub services: ServicesConfig,
    #[serde(default)]
    pub normalization: NormalizationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16    { 5000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

fn default_db_path() -> PathBuf { PathBuf::from("nn_investigator.db") }

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: default_db_path() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    #[serde(default = "default_nodenorm_url")]
    pub nodenorm_url: String,
    #[serde(default = "default_nameres_url")]
    pub nameres_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Largest number of CURIEs sent in one normalization request.
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
    #[serde(default)]
    pub retry: RetryConfig,
}

fn default_nodenorm_url()   -> String { "https://nodenormalization-sri.renci.org".to_string() }
fn default_nameres_url()    -> String { "https://name-resolution-sri.renci.org".to_string() }
fn default_timeout_secs()   -> u64    { 30 }
fn default_max_batch_size() -> usize  { 1000 }

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            nodenorm_url: default_nodenorm_url(),
            nameres_url: default_nameres_url(),
            timeout_secs: default_timeout_secs(),
            max_batch_size: default_max_batch_size(),
            retry: RetryConfig::default(),
        }
    }
}

/// Flags sent with every normalization request made by the review pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizationConfig {
    #[serde(default = "bool_true")]
    pub conflate: bool,
    #[serde(default = "bool_true")]
    pub drug_chemical_conflate: bool,
    #[serde(default)]
    pub description: bool,
}

fn bool_true() -> bool { true }

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self { conflate: true, drug_chemical_conflate: true, description: false }
    }
}

impl Config {
    /// Load configuration from nninv.toml.
    /// Checks NNINV_CONFIG env var first, then current directory; a missing
    /// file means defaults. NNINV_DATABASE_PATH overrides `database.path`.
    pub fn load() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();

        let path = std::env::var("NNINV_CONFIG")
            .unwrap_or_else(|_| "nninv.toml".to_string());

        let mut config = if Path::new(&path).exists() {
            Self::from_file(&path)?
        } else {
            tracing::warn!(
                "Config file not found: {} (copy nninv.example.toml to customise); using defaults",
                path
            );
            Self::default()
        };

        if let Ok(db_path) = std::env::var("NNINV_DATABASE_PATH") {
            config.database.path = PathBuf::from(db_path);
        }
        Ok(config)
    }

    /// Parse a configuration file; absent keys take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// `host:port` the web server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.path, PathBuf::from("nn_investigator.db"));
        assert_eq!(config.services.max_batch_size, 1000);
        assert!(config.normalization.conflate);
        assert!(config.normalization.drug_chemical_conflate);
        assert!(!config.normalization.description);
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = Config::from_toml(
            r#"
            [database]
            path = "/tmp/pairs.db"

            [services]
            timeout_secs = 5

            [services.retry]
            max_attempts = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.database.path, PathBuf::from("/tmp/pairs.db"));
        assert_eq!(config.services.timeout_secs, 5);
        assert_eq!(config.services.retry.max_attempts, 3);
        assert_eq!(config.services.retry.base_delay_ms, 250);
        assert_eq!(config.services.nodenorm_url, "https://nodenormalization-sri.renci.org");
    }

    #[test]
    fn test_from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nninv.toml");
        std::fs::write(&path, "[server]\nhost = \"0.0.0.0\"\nport = 8080\n").unwrap();
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(Config::from_toml("[server\nport = ").is_err());
    }
}
