//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Umbra dark-mode rewriter CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: umbra.toml)
    #[arg(short = 'C', long, global = true, default_value = "umbra.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Show per-element debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Darken a rendered HTML snapshot
    #[command(visible_alias = "a")]
    Apply {
        #[command(flatten)]
        args: ApplyArgs,
    },

    /// Report per-element decisions without writing output
    #[command(visible_alias = "i")]
    Inspect {
        #[command(flatten)]
        args: InspectArgs,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct ApplyArgs {
    /// Input snapshot (rendered HTML with inline styles)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output path (stdout when omitted)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Hostname used to look up a site profile stylesheet
    #[arg(short = 'n', long)]
    pub hostname: Option<String>,

    /// Enable, then disable, and verify the document restores exactly
    #[arg(long)]
    pub roundtrip: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct InspectArgs {
    /// Input snapshot
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Hostname used to look up a site profile stylesheet
    #[arg(short = 'n', long)]
    pub hostname: Option<String>,
}
