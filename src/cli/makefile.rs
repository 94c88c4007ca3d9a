//! `sitegen makefile`: write build rules to stdout.

use crate::{
    config::SiteConfig, debug, generator::makefile::MakefileGenerator, utils::text::plural_count,
};
use anyhow::{Context, Result};
use std::io::{self, Write};

pub fn generate_makefile(sources: &[String], config: &SiteConfig) -> Result<()> {
    let rules = MakefileGenerator::new(config).generate(sources);

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rules.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write makefile rules")?;

    debug!("makefile"; "rules for {}", plural_count(sources.len(), "source"));
    Ok(())
}
