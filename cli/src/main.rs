//! Mflix API — CLI Server
//!
//! ```sh
//! # Run with default config (~/.config/mflix-api/config.toml)
//! mflix-api
//!
//! # Custom config path
//! mflix-api --config /etc/mflix-api/config.toml
//!
//! # Override the port
//! mflix-api --port 8080
//!
//! # Validate config without starting
//! mflix-api --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use mflix_api::config::AppConfig;
use mflix_api::server::{init_tracing, ServerHandle, ServerOptions};

/// Mflix API — CRUD REST server for the mflix sample collections.
#[derive(Parser, Debug)]
#[command(
    name = "mflix-api",
    version,
    about = "CRUD REST API for users, movies, theaters, comments and embedded movies",
    long_about = "Mflix API — paginated CRUD REST server backed by SQLite.\n\n\
                  Default config: ~/.config/mflix-api/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "MFLIX_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .unwrap_or_else(mflix_api::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    config.apply_env_overrides();
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        if let Some(e) = load_error {
            eprintln!("Configuration is invalid: {}", e);
            eprintln!("   Config file : {}", config_path.display());
            std::process::exit(1);
        }
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.server.address());
        println!("   Database    : {}", config.database.url);
        println!("   Log level   : {}", config.logging.level);
        println!("   Log format  : {}", config.logging.format);
        return Ok(());
    }

    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();

    info!("Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
