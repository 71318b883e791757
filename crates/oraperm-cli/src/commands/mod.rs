//! CLI command definitions.

pub mod decode;
pub mod encode;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

/// Encode and decode Oracle permission generator web-service payloads.
#[derive(Debug, Parser)]
#[command(name = "oraperm", version, about)]
pub struct Cli {
    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Client settings file (JSON).
    #[arg(long, global = true, env = "ORAPERM_SETTINGS")]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode a service payload and print the resulting containers.
    Decode(decode::DecodeArgs),

    /// Encode a request payload.
    #[command(subcommand)]
    Encode(encode::EncodeCommands),
}

/// Read the whole payload from a file, or from stdin when no file is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
