use clap::{Parser, Subcommand};

use crate::{chat, configure};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherbot", version, about = "Conversational weather CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start an interactive weather conversation (the default).
    Chat,

    /// Look up one city and print its current weather report.
    Show {
        /// City name to resolve.
        city: String,
    },

    /// Adjust stored settings interactively.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Chat) {
            Command::Chat => chat::run().await,
            Command::Show { city } => chat::run_once(&city).await,
            Command::Configure => configure::run(),
        }
    }
}
