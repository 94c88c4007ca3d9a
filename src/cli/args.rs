//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Code generators for the markdown + Elm site build
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the working directory
    #[arg(short = 'C', long, global = true, default_value = "sitegen.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate the Elm routing module from `path=file` mappings
    #[command(visible_alias = "r")]
    Routes {
        #[command(flatten)]
        args: RoutesArgs,
    },

    /// Generate Makefile rules for markdown sources
    #[command(visible_alias = "m")]
    Makefile {
        /// Markdown source files (e.g. content/post.md)
        #[arg(required = true, value_name = "SOURCE", value_hint = clap::ValueHint::FilePath)]
        sources: Vec<String>,
    },

    /// Echo stdin to stdout up to and including the first marker line
    #[command(visible_alias = "s")]
    Split {
        /// Marker substring (default: `<!--more-->`, or `split.marker` in config)
        marker: Option<String>,
    },
}

/// Route generator arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RoutesArgs {
    /// Route mappings, `path=file` (e.g. `/docs=docs/index.md`)
    #[arg(required = true, value_name = "MAPPING")]
    pub mapping: Vec<String>,

    /// Name of the generated Elm module (default: `Routes`)
    #[arg(short, long)]
    pub module_name: Option<String>,
}
