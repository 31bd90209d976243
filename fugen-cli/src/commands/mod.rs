//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use fugen_core::ConnectorSet;

pub mod process;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decompound tokens from text files or stdin
    Process(process::ProcessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List the built-in German connector candidates
    Connectors,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Formats => {
                println!("text - one token per line, subwords indented");
                println!("json - JSON array of tokens with kind and position data");
            }
            ListCommands::Connectors => {
                for connector in ConnectorSet::german().candidates() {
                    if connector.is_empty() {
                        println!("(none)");
                    } else {
                        println!("-{connector}-");
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_commands_execute() {
        assert!(ListCommands::Formats.execute().is_ok());
        assert!(ListCommands::Connectors.execute().is_ok());
    }

    #[test]
    fn commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Formats,
        };
        let debug_str = format!("{list_cmd:?}");
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Formats"));
    }
}
