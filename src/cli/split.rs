//! `sitegen split`: echo stdin up to the marker line.

use crate::{config::SiteConfig, debug, split::split_after, utils::text::plural_count};
use anyhow::{Context, Result};
use std::io;

pub fn split_stdin(config: &SiteConfig) -> Result<()> {
    let marker = &config.split.marker;
    let outcome = split_after(io::stdin().lock(), io::stdout().lock(), marker)
        .context("Failed to copy stdin to stdout")?;

    if outcome.found {
        debug!("split"; "stopped at `{}` after {}", marker, plural_count(outcome.lines, "line"));
    } else {
        debug!("split"; "`{}` not found, echoed {}", marker, plural_count(outcome.lines, "line"));
    }
    Ok(())
}
