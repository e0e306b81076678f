//! CLI for the pmkit web client helpers.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use pmkit_core::config::{self, AppEnv};
use std::path::PathBuf;

use commands::{run_compare_perms, run_filename, run_group_perms, run_save, run_urls};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "pmkit")]
#[command(about = "pmkit: helpers for the document-management web client", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/pmkit/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Values that take precedence over the `[app]` table of the config file.
#[derive(Debug, Default, Args)]
pub struct AppOverrides {
    /// REST API host (HOST).
    #[arg(long)]
    pub host: Option<String>,
    /// REST API namespace (NAMESPACE).
    #[arg(long)]
    pub namespace: Option<String>,
    /// Websocket host (WS_HOST).
    #[arg(long)]
    pub ws_host: Option<String>,
    /// Websocket namespace (WS_NAMESPACE).
    #[arg(long)]
    pub ws_namespace: Option<String>,
}

impl AppOverrides {
    fn to_env(&self) -> AppEnv {
        AppEnv {
            host: self.host.clone(),
            namespace: self.namespace.clone(),
            ws_host: self.ws_host.clone(),
            ws_namespace: self.ws_namespace.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the REST and websocket base URLs for a page origin.
    Urls {
        /// Origin the web client is served from.
        #[arg(long, default_value = "http://localhost")]
        origin: String,

        #[command(flatten)]
        overrides: AppOverrides,
    },

    /// Group a JSON array of permissions by model.
    GroupPerms {
        /// Path to the JSON file.
        path: PathBuf,
    },

    /// Check whether two JSON permission arrays select the same permissions.
    ComparePerms {
        a: PathBuf,
        b: PathBuf,
    },

    /// Extract the download file name from response headers.
    Filename {
        /// Response header as "Name: value" (repeatable).
        #[arg(long = "header", value_name = "HEADER")]
        headers: Vec<String>,

        /// Name to use when Content-Disposition carries none.
        #[arg(long, default_value = "download.bin")]
        fallback: String,

        /// Strip quotes and decode filename*= instead of returning the raw value.
        #[arg(long)]
        decode: bool,
    },

    /// Save a file through the download flow into a directory.
    Save {
        /// File whose contents become the blob.
        path: PathBuf,

        /// Suggested download name (default: the file's own name).
        #[arg(long)]
        name: Option<String>,

        /// Target directory (default: current directory).
        #[arg(long)]
        dir: Option<PathBuf>,

        /// MIME type attached to the blob.
        #[arg(long)]
        mime: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Urls { origin, overrides } => {
                let cfg = match &cli.config {
                    Some(path) => config::load_from(path)?,
                    None => config::load_or_init()?,
                };
                tracing::debug!("loaded config: {:?}", cfg);
                let app = cfg.app.with_overrides(&overrides.to_env());
                run_urls(&app, &origin)?;
            }
            CliCommand::GroupPerms { path } => run_group_perms(&path)?,
            CliCommand::ComparePerms { a, b } => run_compare_perms(&a, &b)?,
            CliCommand::Filename {
                headers,
                fallback,
                decode,
            } => run_filename(&headers, &fallback, decode),
            CliCommand::Save {
                path,
                name,
                dir,
                mime,
            } => {
                let dir = match dir {
                    Some(d) => d,
                    None => std::env::current_dir()?,
                };
                run_save(&path, name.as_deref(), &dir, mime)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
