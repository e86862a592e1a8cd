use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "classdash", about = "Student class dashboard in the terminal")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for card header images; overrides the config file
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start the dashboard TUI
    Run,
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn defaults_to_run_when_command_is_missing() {
        let cli = Cli::parse_from(["classdash"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn parses_explicit_run_command() {
        let cli = Cli::parse_from(["classdash", "run", "--config", "custom.toml", "--seed", "7"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
        assert_eq!(
            cli.config
                .as_deref()
                .map(|p| p.to_string_lossy().to_string()),
            Some("custom.toml".to_owned())
        );
        assert_eq!(cli.seed, Some(7));
    }

    #[test]
    fn rejects_non_numeric_seed() {
        assert!(Cli::try_parse_from(["classdash", "--seed", "abc"]).is_err());
    }
}
