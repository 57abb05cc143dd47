//! CLI for building and decoding image proxy URLs.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use picproxy_core::config::{self, PicproxyConfig};
use picproxy_core::EncodingScheme;

use commands::{run_build, run_config, run_decode, run_schemes};

/// Top-level CLI for picproxy.
#[derive(Debug, Parser)]
#[command(name = "picproxy")]
#[command(about = "Build and decode /api/proxy/img.png image proxy URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Build the proxy URL for an image URL.
    Build {
        /// Target image URL (not validated).
        url: String,
        /// Encoding scheme tag: encodeURIComponent or encodeBase64URL (default from config).
        #[arg(long, value_name = "TAG")]
        scheme: Option<EncodingScheme>,
        /// Origin to prefix, e.g. http://localhost:3000 (default from config).
        #[arg(long, value_name = "ORIGIN")]
        base: Option<String>,
    },

    /// Decode a proxy URL back to its target image URL.
    Decode {
        /// Relative or absolute proxy URL.
        proxy_url: String,
        /// Print target and scheme as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List supported encoding scheme tags (default first).
    Schemes,

    /// Show config file path and effective configuration.
    Config,
}

impl CliCommand {
    /// Whether the command reads the config file (and creates it on first run).
    pub fn needs_config(&self) -> bool {
        matches!(self, CliCommand::Build { .. } | CliCommand::Config)
    }

    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.command.dispatch(load_config)
    }

    fn dispatch(self, load: impl FnOnce() -> Result<PicproxyConfig>) -> Result<()> {
        let cfg = if self.needs_config() {
            load()?
        } else {
            PicproxyConfig::default()
        };

        match self {
            CliCommand::Build { url, scheme, base } => {
                println!("{}", run_build(&cfg, &url, scheme, base.as_deref()));
            }
            CliCommand::Decode { proxy_url, json } => println!("{}", run_decode(&proxy_url, json)?),
            CliCommand::Schemes => println!("{}", run_schemes()),
            CliCommand::Config => println!("{}", run_config(&cfg)?),
        }

        Ok(())
    }
}

fn load_config() -> Result<PicproxyConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
