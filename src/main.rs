use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod card;
mod cli;
mod config;
mod display;
mod error;
mod loader;
mod profile;
mod renderer;

use crate::{
    card::ProfileCard,
    cli::{Cli, Commands},
    config::LoaderConfig,
    error::AppError,
    loader::ProfileLoader,
    renderer::ProfileRenderer,
};

// Main
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli, &mut io::stdout().lock()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            ExitCode::FAILURE
        }
    }
}

/// Runs the selected subcommand, `show` when none is given
async fn run(cli: Cli, out: &mut impl Write) -> Result<(), AppError> {
    let loader = ProfileLoader::new(LoaderConfig::with_endpoint(cli.endpoint))?;

    match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => show_profile(&loader, out).await,
        Commands::Raw => show_raw_profile(&loader, out).await,
    }
}

/// Fetches a profile, renders it into a card and prints the card
async fn show_profile(loader: &ProfileLoader, out: &mut impl Write) -> Result<(), AppError> {
    let mut renderer = ProfileRenderer::bind(ProfileCard::new())?;
    loader.load(&mut renderer).await?;
    renderer.into_surface().print(out)
}

/// Prints the first fetched record as JSON
async fn show_raw_profile(loader: &ProfileLoader, out: &mut impl Write) -> Result<(), AppError> {
    let record = loader.fetch_first().await?;
    writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?;
    Ok(())
}

/// Log directive used when `RUST_LOG` is unset; only this crate's events
fn default_log_directive(verbose: bool) -> &'static str {
    if verbose { "profile_card=debug" } else { "profile_card=warn" }
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the default level
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
