//! `figma-theme` command-line tool.
//!
//! Reads a Figma file export (from disk, stdin, or the Figma API), builds
//! the nested color theme and writes it as JSON to stdout or a file.

mod cli;
mod error;
mod output;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use figma_theme::{transform, FigmaDocument};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use crate::cli::Cli;
use crate::output::OutputDestination;

fn main() -> ExitCode {
    // A missing .env is fine; FIGMA_TOKEN may come from the environment.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    let _ = TermLogger::init(
        cli.log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{:?}", err);
            eprintln!("{}", error::report(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let source = cli.source()?;
    log::info!("reading document from {}", source.name());
    let input = source.read()?;

    let document = FigmaDocument::from_json(&input)?;
    let theme = transform(&document, &cli.theme_options())?;
    log::info!("built theme with {} top-level groups", theme.len());

    let json = if cli.pretty {
        theme.to_json_pretty()?
    } else {
        theme.to_json()?
    };

    OutputDestination::from_arg(cli.out.clone())
        .write_text(&json)
        .context("could not write theme")?;
    Ok(())
}
