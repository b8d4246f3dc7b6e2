use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "swreg", about = "Service worker registration harness (CLI)")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Attempt to register the worker script with the host
    Register,
    /// Report whether the host advertises the service worker capability
    Probe,
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Register)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn defaults_to_register_when_command_is_missing() {
        let cli = Cli::parse_from(["swreg"]);

        assert!(matches!(cli.command_or_default(), Command::Register));
    }

    #[test]
    fn parses_explicit_register_command() {
        let cli = Cli::parse_from(["swreg", "register", "--config", "custom.toml"]);

        assert!(matches!(cli.command_or_default(), Command::Register));
        assert_eq!(
            cli.config
                .as_deref()
                .map(|p| p.to_string_lossy().to_string()),
            Some("custom.toml".to_owned())
        );
    }

    #[test]
    fn parses_probe_command() {
        let cli = Cli::parse_from(["swreg", "probe"]);

        assert!(matches!(cli.command_or_default(), Command::Probe));
    }
}
