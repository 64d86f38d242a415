// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! dwkit - DWKit event and command catalog CLI

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod completions;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{catalog, emit};
use completions::CompletionsArgs;
use dwkit_catalog::Config;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::error::CliError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "dwkit",
    version,
    about = "DWKit - Event and command catalogs with an in-process event bus"
)]
struct Cli {
    /// Config file (default: ./dwkit.toml, then the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the event registry
    Events(catalog::CatalogArgs),
    /// Inspect the command registry
    Commands(catalog::CatalogArgs),
    /// Emit an event through a fresh bus
    Emit(emit::EmitArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

fn main() -> ExitCode {
    setup_logging();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            match e.downcast_ref::<CliError>() {
                Some(cli_error) => eprint!("{}", cli_error),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    // Completions need no registries
    if let Commands::Completions(args) = cli.command {
        completions::generate_completions::<Cli>(args.shell);
        return Ok(ExitCode::SUCCESS);
    }

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::discover()?,
    };
    let (events, commands) = config.build_registries()?;

    match cli.command {
        Commands::Events(args) => catalog::handle(&events, "events", args.command, cli.format),
        Commands::Commands(args) => {
            catalog::handle(&commands, "commands", args.command, cli.format)
        }
        Commands::Emit(args) => emit::handle(args, events, cli.format),
        Commands::Completions(_) => unreachable!(),
    }
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
