//! CLI argument definitions for the notehub binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// notehub REST server
#[derive(Parser, Debug)]
#[command(name = "notehub")]
#[command(about = "notehub: user and note management REST backend")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the notehub server
    Serve(ServeArgs),
    /// Check health of a running notehub server
    Health(HealthArgs),
}

/// Arguments for the serve command
#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value_t = 3500, env = "NOTEHUB_PORT")]
    pub port: u16,

    /// Bind address
    #[arg(long, default_value = "0.0.0.0", env = "NOTEHUB_HOST")]
    pub host: String,

    /// Data directory for the JSON persistence file.
    /// When omitted the store is purely in-memory and state is lost on exit.
    #[arg(short = 'D', long, env = "NOTEHUB_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Allowed CORS origin (repeatable; comma-separated in the env var)
    #[arg(
        long = "allowed-origin",
        env = "NOTEHUB_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

/// Arguments for the health command
#[derive(clap::Args, Debug)]
pub struct HealthArgs {
    /// Base URL of the server to check
    #[arg(long, default_value = "http://127.0.0.1:3500", env = "NOTEHUB_URL")]
    pub url: String,

    /// Timeout in seconds
    #[arg(short, long, default_value_t = 5)]
    pub timeout: u64,
}
