//! OpenAPI document loading and the typed document model.
//!
//! [`OpenApiContext`] loads a document from a file or URL, accepting JSON or
//! YAML, and keeps the raw value around for metadata lookups. The typed model
//! that drives code generation is obtained with [`OpenApiContext::document`].
//!
//! # Examples
//!
//! ```no_run
//! use clientgen_core::openapi::OpenApiContext;
//! use clientgen_core::error::Result;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let spec = OpenApiContext::from_file("openapi.json").await?;
//!
//! if let Some(title) = spec.title() {
//!     println!("API Title: {}", title);
//! }
//! let document = spec.document();
//! println!("{} paths", document.paths.len());
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod schema;

// Internal imports (std, crate)
use std::path::Path;

// External imports (alphabetized)
use log::debug;
use serde_json::Value as JsonValue;
use tokio::fs;

pub use self::document::{
    Document, HttpMethod, Operation, Parameter, ParameterEntry, ParameterLocation, PathItem,
};
pub use self::schema::{ObjectSchema, PrimitiveType, SchemaNode};

/// A loaded OpenAPI document
#[derive(Debug, serde::Serialize)]
#[serde(transparent)]
pub struct OpenApiContext {
    /// The raw JSON value of the document
    pub json: JsonValue,
}

impl OpenApiContext {
    /// Load from a file path or an HTTP(S) URL (supports both YAML and JSON)
    pub async fn from_file_or_url<P: AsRef<str>>(location: P) -> crate::Result<Self> {
        let location = location.as_ref();

        if location.starts_with("http://") || location.starts_with("https://") {
            return Self::from_url(location).await;
        }

        Self::from_file(location).await
    }

    /// Load from a file (supports both YAML and JSON)
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        debug!("Reading OpenAPI document from {}", path.display());
        let content = fs::read_to_string(path).await.map_err(|e| {
            crate::Error::openapi(format!(
                "Failed to read OpenAPI spec at {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::parse_content(&content).map_err(|e| {
            crate::Error::openapi(format!(
                "Failed to parse OpenAPI spec at {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Load from a URL (supports both YAML and JSON)
    pub async fn from_url(url: &str) -> crate::Result<Self> {
        debug!("Fetching OpenAPI document from {}", url);
        let response = reqwest::get(url).await.map_err(|e| {
            crate::Error::openapi(format!("Failed to fetch OpenAPI spec from {}: {}", url, e))
        })?;

        if !response.status().is_success() {
            return Err(crate::Error::openapi(format!(
                "Failed to fetch OpenAPI spec from {}: HTTP {}",
                url,
                response.status()
            )));
        }

        let content = response.text().await.map_err(|e| {
            crate::Error::openapi(format!("Failed to read response from {}: {}", url, e))
        })?;

        Self::parse_content(&content).map_err(|e| {
            crate::Error::openapi(format!("Failed to parse OpenAPI spec from {}: {}", url, e))
        })
    }

    /// Parse content as either JSON or YAML
    pub fn parse_content(content: &str) -> Result<Self, String> {
        if let Ok(json) = serde_json::from_str(content) {
            return Ok(Self { json });
        }

        if let Ok(json) = serde_yaml::from_str::<JsonValue>(content) {
            // Plain scalars are valid YAML but never a document
            if json.is_object() {
                return Ok(Self { json });
            }
        }

        Err("content is neither valid JSON nor YAML".to_string())
    }

    /// Map the raw value onto the typed document model
    pub fn document(&self) -> Document {
        Document::from(self.json.clone())
    }

    /// Get the title of the API
    pub fn title(&self) -> Option<&str> {
        self.json.get("info")?.get("title")?.as_str()
    }

    /// Get the version of the API
    pub fn version(&self) -> Option<&str> {
        self.json.get("info")?.get("version")?.as_str()
    }

    /// Get the base URL of the API
    pub fn base_path(&self) -> Option<String> {
        // OpenAPI 3.0+ servers
        if let Some(url) = self
            .json
            .get("servers")
            .and_then(JsonValue::as_array)
            .and_then(|servers| servers.first())
            .and_then(|server| server.get("url"))
            .and_then(JsonValue::as_str)
        {
            return Some(url.to_string());
        }

        // Swagger 2.0 host + basePath
        let host = self.json.get("host").and_then(JsonValue::as_str)?;
        let base_path = self
            .json
            .get("basePath")
            .and_then(JsonValue::as_str)
            .unwrap_or("");
        let scheme = match self.json.get("schemes").and_then(JsonValue::as_array) {
            Some(schemes) if schemes.iter().any(|s| s.as_str() == Some("https")) => "https",
            Some(schemes) => schemes.first().and_then(JsonValue::as_str).unwrap_or("https"),
            None => "https",
        };

        Some(format!("{}://{}{}", scheme, host, base_path))
    }
}
