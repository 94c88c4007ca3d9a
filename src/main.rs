//! sitegen - code generators for a markdown + Elm static site build.

mod cli;
mod config;
mod generator;
mod logger;
mod split;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Routes { args } => cli::routes::generate_routes(args, &config),
        Commands::Makefile { sources } => cli::makefile::generate_makefile(sources, &config),
        Commands::Split { .. } => cli::split::split_stdin(&config),
    }
}
