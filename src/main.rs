//! Umbra - a dark-mode rewriter for rendered pages.

#![allow(dead_code)]

mod classify;
mod cli;
mod color;
mod config;
mod dom;
mod engine;
mod html;
mod logger;
mod profile;
mod transform;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::UmbraConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = UmbraConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Apply { args } => cli::apply::run(args, &config),
        Commands::Inspect { args } => cli::inspect::run(args, &config),
    }
}
