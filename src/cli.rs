use clap::{Parser, Subcommand};

use crate::config::DEFAULT_ENDPOINT;

/// CLI arguments parser using `clap`
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Subcommand chosen to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Endpoint returning one generated profile
    #[arg(long, global = true, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Enables debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// Subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Fetches a profile and prints it as a card
    Show,
    /// Fetches a profile and prints the first record as JSON
    Raw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_public_endpoint_without_subcommand() {
        let cli = Cli::try_parse_from(["profile-card"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.endpoint, DEFAULT_ENDPOINT);
        assert!(!cli.verbose);
    }

    #[test]
    fn accepts_endpoint_after_subcommand() {
        let cli = Cli::try_parse_from([
            "profile-card",
            "raw",
            "--endpoint",
            "http://localhost:8080/api",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.command, Some(Commands::Raw));
        assert_eq!(cli.endpoint, "http://localhost:8080/api");
        assert!(cli.verbose);
    }
}
