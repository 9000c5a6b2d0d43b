use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Server configuration, read from a YAML file at startup.
///
/// Every field has a default, so an empty or missing file yields a
/// working configuration serving `./www` on localhost.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the listener binds to
    pub listen_addr: String,
    /// Per-connection serving settings, handed to each worker
    pub serve: ServeConfig,
}

/// Settings each connection worker needs to answer a request.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Directory that requested paths are resolved under
    pub web_root: PathBuf,
    /// Value of the Server header and the server-name template token
    pub server_name: String,
    /// How long a worker waits for a complete request head
    pub read_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            serve: ServeConfig::default(),
        }
    }
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            web_root: PathBuf::from("www"),
            server_name: "Skiff web server".to_string(),
            read_timeout_secs: 10,
        }
    }
}

impl Config {
    /// Loads configuration from the file named by `SKIFF_CONFIG`
    /// (default `skiff.yaml`). A missing file is not an error; a
    /// malformed one is.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("SKIFF_CONFIG").unwrap_or_else(|_| "skiff.yaml".to_string());

        if !Path::new(&path).exists() {
            return Ok(Self::default());
        }

        Self::from_file(&path)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

impl ServeConfig {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}
