//! `sitegen routes`: write the Elm route module to stdout.

use crate::{
    cli::RoutesArgs,
    config::SiteConfig,
    debug,
    generator::routes::RouteTable,
    log,
    utils::text::plural_count,
};
use anyhow::{Context, Result};
use std::io::{self, Write};

pub fn generate_routes(args: &RoutesArgs, config: &SiteConfig) -> Result<()> {
    let table = RouteTable::from_mappings(&config.routes.module_name, &args.mapping)?;

    for (ident, paths) in table.constructor_collisions() {
        log!("warning"; "constructor `{}` generated for {}", ident, paths.join(", "));
    }

    let module = table.render();
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(module.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write route module")?;

    debug!("routes"; "module {} with {}", table.module_name(), plural_count(table.len(), "route"));
    Ok(())
}
