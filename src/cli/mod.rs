//! CLI module for the relay gateway
//!
//! # Commands
//!
//! - `serve` - Start the relay server
//! - `config` - Configuration utilities (init)
//!
//! # Example
//!
//! ```bash
//! # Start the server with default config
//! relay serve
//!
//! # Point at a different backend without editing the config file
//! relay serve --backend-url http://10.0.0.5:9000/generate
//!
//! # Write a starter config file
//! relay config init
//! ```

pub mod config;
pub mod serve;

pub use config::handle_config_init;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Relay - stateless chat relay gateway
#[derive(Parser, Debug)]
#[command(name = "relay", version, about = "Stateless chat relay gateway")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the relay server
    Serve(ServeArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "relay.toml")]
    pub config: PathBuf,

    /// Override server port
    #[arg(short, long, env = "RELAY_PORT")]
    pub port: Option<u16>,

    /// Override server host
    #[arg(short = 'H', long, env = "RELAY_HOST")]
    pub host: Option<String>,

    /// Override the backend endpoint URL
    #[arg(short, long, env = "RELAY_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RELAY_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write an example configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = "relay.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}
