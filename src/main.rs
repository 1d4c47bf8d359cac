//! Informe CLI
//!
//! Command-line interface for the dashboard:
//! - Serve the dashboard
//! - List the route table
//! - Resolve a path to its page
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use informe::config::{generate_default_config, Config, ConfigSource, LoggingConfig};
use informe::{serve, AppState, Catalog, RouteTable};

#[derive(Parser)]
#[command(name = "informe")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Informe Económico de Chile dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List every page path with its subtitle
    Routes,

    /// Show which page a path resolves to
    Resolve {
        /// Request path
        path: String,
    },

    /// Generate a default config file
    Config {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, source) = match &cli.config {
        Some(path) => (
            Config::load_with_env(path)?,
            ConfigSource::File(path.clone()),
        ),
        None => Config::discover(),
    };

    match cli.command {
        Commands::Serve { host, port } => {
            init_tracing(&config.logging, config.server.debug);
            source.log();

            let mut server = config.server.clone();
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }

            tracing::info!("Informe v{}", env!("CARGO_PKG_VERSION"));

            let catalog = Catalog::builtin().context("Failed to build the dataset catalog")?;
            let state = AppState::new(catalog, server.api_config())?;
            serve(state).await?;
        }

        Commands::Routes => {
            warn_on_fallback(&source);
            let routes = RouteTable::new(config.server.base_path.clone());
            println!("{:<45} {:<15} SUBTITLE", "PATH", "PAGE");
            for entry in routes.entries() {
                println!("{:<45} {:<15} {}", entry.path, entry.page.slug(), entry.subtitle);
            }
        }

        Commands::Resolve { path } => {
            warn_on_fallback(&source);
            let routes = RouteTable::new(config.server.base_path.clone());
            let resolved = routes.resolve(&path);
            let note = if resolved.matched { "" } else { " (default)" };
            println!("{}{}: {}", resolved.page, note, resolved.subtitle);
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Commands without a subscriber report a rejected config file on stderr
fn warn_on_fallback(source: &ConfigSource) {
    if let ConfigSource::Fallback { path, error } = source {
        eprintln!("warning: ignoring {}: {}", path.display(), error);
    }
}

/// Initialize logging from the config; `RUST_LOG` takes precedence
fn init_tracing(logging: &LoggingConfig, debug: bool) {
    let default_filter = if debug {
        format!("informe={},tower_http=debug", logging.level)
    } else {
        format!("informe={}", logging.level)
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
