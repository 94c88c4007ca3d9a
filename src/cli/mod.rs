//! Command-line interface module.
//!
//! Each subcommand runner resolves its inputs from
//! [`SiteConfig`](crate::config::SiteConfig) (already merged with CLI
//! options), calls a pure generator and writes the result to standard output.

mod args;
pub mod makefile;
pub mod routes;
pub mod split;

pub use args::{Cli, Commands, RoutesArgs};
