//! SmartMed Control - CLI for medicine substitution recommendations
//!
//! Loads the reference tables, runs one command, records the invocation.

mod cli;
mod commands;
mod display;
mod errors;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use commands::{Outcome, RunContext};
use errors::{error_code_for, exit_code_for, EXIT_SUCCESS};
use logging::{ErrorDetails, LogEntry};
use smartmed_common::config::config_path;
use smartmed_common::SmartMedConfig;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() {
    let Cli {
        data_dir,
        config,
        command,
    } = Cli::parse();
    let start = Instant::now();
    let name = command.name();

    let result = load_context(data_dir, config).and_then(|(ctx, config_warning)| {
        init_tracing(&ctx.config.log.level);
        if let Some(message) = config_warning {
            display::display_warning(&message);
        }
        display::set_color(
            ctx.config.output.color
                && std::io::stdout().is_terminal()
                && std::env::var_os("NO_COLOR").is_none(),
        );
        run(&ctx, command)
    });

    let exit_code = match &result {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => exit_code_for(e),
    };

    let mut entry = LogEntry::new(name, exit_code, start.elapsed().as_millis() as u64);
    match result {
        Ok(outcome) => entry.fallback = outcome.fallback,
        Err(e) => {
            let message = format!("{:#}", e);
            display::display_error(&message);
            entry.error = Some(ErrorDetails {
                code: error_code_for(&e).to_string(),
                message,
            });
        }
    }
    entry.write();

    std::process::exit(exit_code);
}

/// Config from `--config` or the user config directory; `--data-dir` wins over `[data] dir`.
///
/// A broken `--config` file is an error. A broken file in the user config
/// directory falls back to defaults and comes back as a warning to report
/// once tracing is up.
fn load_context(
    data_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
) -> Result<(RunContext, Option<String>)> {
    let mut warning = None;
    let config = match &config_file {
        Some(path) => SmartMedConfig::load_from(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => SmartMedConfig::load().unwrap_or_else(|e| {
            let path = config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            warning = Some(format!("Ignoring config at {}: {}; using defaults", path, e));
            SmartMedConfig::default()
        }),
    };
    let data_dir = data_dir.unwrap_or_else(|| config.data.dir.clone());

    let ctx = RunContext {
        config,
        config_file,
        data_dir,
    };
    Ok((ctx, warning))
}

/// Log to stderr, level from RUST_LOG or config
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(ctx: &RunContext, command: Commands) -> Result<Outcome> {
    match command {
        Commands::Recommend {
            intake,
            profile,
            json,
        } => {
            let patient = match profile {
                Some(path) => commands::load_profile(&path)?,
                None => intake.into_profile(),
            };
            commands::recommend(ctx, patient, json)
        }
        Commands::Match { symptoms, json } => commands::match_symptoms(ctx, &symptoms, json),
        Commands::Symptoms { filter, limit } => commands::symptoms(ctx, filter.as_deref(), limit),
        Commands::Diseases => commands::diseases(ctx),
        Commands::Disease { name } => commands::disease(ctx, &name),
        Commands::Config => commands::config(ctx),
    }
}
