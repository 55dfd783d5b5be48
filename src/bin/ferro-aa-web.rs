// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-aa web service
//!
//! REST API for protein variant notation conversion, with a passthrough
//! route to the Mutalyzer normalizer.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::util::SubscriberInitExt;

use ferro_aa::service::{create_app, ServiceConfig};

#[derive(Parser)]
#[command(name = "ferro-aa-web")]
#[command(about = "Protein variant notation conversion web service")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web service
    Serve {
        /// Configuration file path
        #[arg(short, long, default_value = "config/ferro-aa-web.toml")]
        config: PathBuf,

        /// Override host address
        #[arg(long)]
        host: Option<String>,

        /// Override port
        #[arg(short, long)]
        port: Option<u16>,

        /// Log level (trace, debug, info, warn, error)
        #[arg(long, default_value = "info")]
        log_level: String,
    },

    /// Generate a sample configuration file
    Config {
        /// Output path for configuration file
        #[arg(short, long, default_value = "config/ferro-aa-web.toml")]
        output: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },

    /// Check configuration and upstream availability
    Check {
        /// Configuration file path
        #[arg(short, long, default_value = "config/ferro-aa-web.toml")]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            host,
            port,
            log_level,
        } => serve_command(config, host, port, log_level).await,
        Commands::Config { output, force } => config_command(output, force),
        Commands::Check { config } => check_command(config).await,
    }
}

async fn serve_command(
    config_path: PathBuf,
    host_override: Option<String>,
    port_override: Option<u16>,
    log_level: String,
) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(&log_level)?;

    info!("Starting ferro-aa web service");

    let mut config = load_or_default_config(&config_path)?;

    if let Some(host) = host_override {
        config.server.host = host;
    }
    if let Some(port) = port_override {
        config.server.port = port;
    }

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        return Err(e.into());
    }

    info!(
        "Line limit: {}, mutalyzer proxy: {}",
        config.convert.max_lines,
        if config.mutalyzer.enabled {
            config.mutalyzer.api_url.as_str()
        } else {
            "disabled"
        }
    );

    let (app, _state) = create_app(config.clone())?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let browser_host = if config.server.host == "0.0.0.0" {
        "localhost"
    } else {
        &config.server.host
    };
    let url = format!("http://{}:{}", browser_host, config.server.port);
    info!("ferro-aa web service running on {}", url);
    info!("API information available at {}/api/v1/info", url);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn config_command(output_path: PathBuf, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    if output_path.exists() && !force {
        eprintln!(
            "Configuration file already exists: {}",
            output_path.display()
        );
        eprintln!("Use --force to overwrite");
        std::process::exit(1);
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    ServiceConfig::default().to_file(&output_path)?;

    println!(
        "Sample configuration file created: {}",
        output_path.display()
    );
    Ok(())
}

async fn check_command(config_path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    println!("Checking configuration...");

    let config = load_or_default_config(&config_path)?;

    match config.validate() {
        Ok(()) => println!("Configuration is valid"),
        Err(e) => {
            println!("Configuration validation failed: {}", e);
            return Err(e.into());
        }
    }

    let (_, state) = create_app(config)?;
    println!("Application created successfully");

    match &state.mutalyzer {
        None => println!("  mutalyzer: disabled"),
        Some(proxy) => match proxy.probe().await {
            Ok(status) => println!("  OK mutalyzer: {} (HTTP {})", proxy.base_url(), status),
            Err(e) => println!("  ERROR mutalyzer: {} - {}", proxy.base_url(), e),
        },
    }

    Ok(())
}

fn load_or_default_config(config_path: &Path) -> Result<ServiceConfig, Box<dyn std::error::Error>> {
    if config_path.exists() {
        info!("Loading configuration from {}", config_path.display());
        ServiceConfig::from_file(config_path)
    } else {
        println!(
            "WARNING: Configuration file not found: {}",
            config_path.display()
        );
        println!("TIP: Run 'ferro-aa-web config' to generate a sample configuration file");
        Ok(ServiceConfig::default())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

fn init_tracing(level: &str) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

    let filter =
        EnvFilter::try_new(level).map_err(|e| format!("Invalid log level '{}': {}", level, e))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    info!("Tracing initialized with level: {}", level);

    Ok(())
}
