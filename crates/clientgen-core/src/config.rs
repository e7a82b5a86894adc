//! Configuration management for client generation.
//!
//! This module defines the `Config` struct describing one generation run:
//! where the OpenAPI document comes from, where the client goes, and which
//! host the generated requests target. The configuration can be loaded from a
//! YAML file or created programmatically.
//!
//! # Examples
//!
//! ```no_run
//! use clientgen_core::config::Config;
//!
//! # #[tokio::main]
//! # async fn main() -> clientgen_core::Result<()> {
//! // Create a new config programmatically
//! let mut config = Config::new("openapi.json", "src/api/client.ts");
//! config.host_from_servers = true;
//!
//! // Or load from a config file
//! let config = Config::from_file("clientgen.yaml").await?;
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::path::Path;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;
use url::Url;

/// Configuration for one client generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path or URL of the OpenAPI document
    pub schema_path: String,

    /// File the generated client is written to
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Host prefixed to every request URL
    #[serde(default)]
    pub base_url: Option<Url>,

    /// Use the document's first server URL when no base URL is set
    #[serde(default)]
    pub host_from_servers: bool,
}

impl Config {
    /// Create a new Config with default values
    pub fn new(schema_path: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            schema_path: schema_path.into(),
            output_path: output_path.into(),
            base_url: None,
            host_from_servers: false,
        }
    }

    /// Load configuration from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await.map_err(|e| {
            crate::Error::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content).await?;
        Ok(())
    }
}

/// Default file name for the generated client
pub fn default_output_path() -> String {
    "client.ts".to_string()
}
