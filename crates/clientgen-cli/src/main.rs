//! clientgen CLI entrypoint
//! Parses command-line arguments and dispatches to the core generator.

// Internal imports (std, crate)
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use clientgen_core::Config;
use tracing::info;
use url::Url;

#[derive(Parser)]
#[command(name = "clientgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate a TypeScript client from an OpenAPI document
    Generate {
        /// Path or URL to the OpenAPI document (YAML or JSON)
        ///
        /// Example: --schema-path path/to/openapi.yaml
        /// Example: --schema-path https://example.com/openapi.json
        #[arg(long)]
        schema_path: Option<String>,
        /// Configuration file; flags given on the command line take precedence
        #[arg(long)]
        config: Option<PathBuf>,
        /// File to write the client to (default: client.ts)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Host prefixed to every request URL
        #[arg(long)]
        base_url: Option<Url>,
        /// Use the document's first server URL as the host
        #[arg(long)]
        host_from_servers: bool,
        /// Print the client instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// Write a starter configuration file
    Init {
        /// Where to write the configuration
        #[arg(long, default_value = "clientgen.yaml")]
        path: PathBuf,
        /// Path or URL to the OpenAPI document
        #[arg(long)]
        schema_path: String,
        /// File the client should be written to
        #[arg(long, default_value = "client.ts")]
        output: String,
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            schema_path,
            config,
            output,
            base_url,
            host_from_servers,
            stdout,
        } => {
            let config =
                resolve_config(schema_path, config, output, base_url, host_from_servers).await?;

            info!("Generating client from: {}", config.schema_path);
            let code = clientgen_core::generate(&config)
                .await
                .with_context(|| format!("Failed to generate client from {}", config.schema_path))?;

            if stdout {
                print!("{code}");
            } else {
                clientgen_core::write_client(&config.output_path, &code)
                    .await
                    .with_context(|| format!("Failed to write {}", config.output_path))?;
                println!("Generated client in: {}", config.output_path);
            }
        }
        Commands::Init {
            path,
            schema_path,
            output,
            force,
        } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            Config::new(schema_path, output)
                .save(&path)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote configuration to: {}", path.display());
        }
    }
    Ok(())
}

/// Merge the optional config file with command-line flags.
async fn resolve_config(
    schema_path: Option<String>,
    config_path: Option<PathBuf>,
    output: Option<PathBuf>,
    base_url: Option<Url>,
    host_from_servers: bool,
) -> anyhow::Result<Config> {
    let mut config = match config_path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            let mut config = Config::from_file(&path)
                .await
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            if let Some(schema_path) = schema_path {
                config.schema_path = schema_path;
            }
            config
        }
        None => {
            let schema_path =
                schema_path.context("--schema-path is required when no --config is given")?;
            Config::new(schema_path, clientgen_core::config::default_output_path())
        }
    };

    if let Some(output) = output {
        config.output_path = output.to_string_lossy().to_string();
    }
    if base_url.is_some() {
        config.base_url = base_url;
    }
    config.host_from_servers |= host_from_servers;

    Ok(config)
}
