use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "helios", version, about = "Host status server and animated terminal panel")]
pub struct Cli {
    /// Path to the config file (defaults to the user config dir).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Serve the host snapshot over HTTP.
    Serve {
        /// Bind address, e.g. 0.0.0.0:7889.
        #[arg(long)]
        bind: Option<String>,
    },
    /// Poll a status server and show the panel in the terminal (default).
    Watch {
        /// Base URL of the status server.
        #[arg(long)]
        url: Option<String>,
        /// Poll period in milliseconds.
        #[arg(long)]
        interval_ms: Option<u64>,
    },
    /// Probe this machine once and print the panel.
    Show,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Watch {
            url: None,
            interval_ms: None,
        })
    }

    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }
}

impl Command {
    /// Folds command-line overrides into the loaded config.
    pub fn apply(&self, config: &mut Config) {
        match self {
            Command::Serve { bind: Some(bind) } => config.server.bind_addr = bind.clone(),
            Command::Watch { url, interval_ms } => {
                if let Some(url) = url {
                    config.poll.base_url = url.clone();
                }
                if let Some(interval_ms) = interval_ms {
                    config.poll.interval_ms = *interval_ms;
                }
            }
            Command::Serve { bind: None } | Command::Show => {}
        }
    }
}
