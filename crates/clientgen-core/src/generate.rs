//! Load, render and write a client for a [`Config`].

use std::path::Path;

use log::{debug, info};
use tokio::fs;

use crate::{
    codegen::{generate_client_code_with, ClientOptions},
    config::Config,
    error::Result,
    openapi::OpenApiContext,
};

/// Load the configured document and render its client.
pub async fn generate(config: &Config) -> Result<String> {
    // 1. Load the OpenAPI document
    let spec = OpenApiContext::from_file_or_url(&config.schema_path).await?;
    let document = spec.document();
    info!(
        "Loaded {} {} ({} paths, {} schemas)",
        spec.title().unwrap_or("untitled API"),
        spec.version().unwrap_or("unversioned"),
        document.paths.len(),
        document.schemas().len()
    );

    // 2. Work out the host
    let options = client_options(config, &spec);
    debug!("Using host {:?}", options.host);

    // 3. Render
    Ok(generate_client_code_with(&document, &options))
}

/// Host precedence: configured base URL, then the document's first server
/// (when enabled), then empty.
pub fn client_options(config: &Config, spec: &OpenApiContext) -> ClientOptions {
    let host = match &config.base_url {
        Some(url) => url.as_str().trim_end_matches('/').to_string(),
        None if config.host_from_servers => spec
            .base_path()
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_default(),
        None => String::new(),
    };
    ClientOptions::with_host(host)
}

/// Write generated code, creating parent directories as needed.
pub async fn write_client<P: AsRef<Path>>(path: P, code: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating directory: {}", parent.display());
            fs::create_dir_all(parent).await?;
        }
    }
    fs::write(path, code).await?;
    info!("Wrote client to {}", path.display());
    Ok(())
}
