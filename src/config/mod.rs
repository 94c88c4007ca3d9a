//! Generator configuration from `sitegen.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [paths] [render] [routes] [split]
//! ├── types/         # ConfigError
//! ├── util.rs        # config file lookup
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The file is optional: without one every section takes its defaults,
//! which match the layout of the site repository (`content/`, `public/`,
//! `src/Routes.elm`). CLI options override file values.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{DEFAULT_MARKER, PathsConfig, RenderConfig, RoutesConfig, SplitConfig};
pub use types::ConfigError;

use crate::{
    cli::{Cli, Commands},
    debug,
    generator::routes::is_valid_module_name,
    log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sitegen.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Path of the loaded config file, `None` when running on defaults
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub routes: RoutesConfig,

    #[serde(default)]
    pub split: SplitConfig,
}

impl SiteConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file, falls back to defaults
    /// when none exists, then applies command options and validates.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config, &cwd) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = Some(path);
                config
            }
            None => Self::default(),
        };

        match &config.config_path {
            Some(path) => debug!("config"; "using {}", path.display()),
            None => debug!("config"; "no {} found, using defaults", cli.config.display()),
        }

        config.apply_command_options(&cli.command);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        log!("warning"; "unknown fields in {}, ignoring:", path.display());
        for field in fields {
            eprintln!("- {field}");
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, command: &Commands) {
        match command {
            Commands::Routes { args } => {
                Self::update_option(&mut self.routes.module_name, args.module_name.as_ref());
            }
            Commands::Split { marker } => {
                Self::update_option(&mut self.split.marker, marker.as_ref());
            }
            Commands::Makefile { .. } => {}
        }
    }

    /// Overwrite `target` when the CLI supplied a value.
    fn update_option<T: Clone>(target: &mut T, value: Option<&T>) {
        if let Some(value) = value {
            *target = value.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate field values that would otherwise produce broken output.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_module_name(&self.routes.module_name) {
            return Err(ConfigError::validation(
                "routes.module_name",
                format!(
                    "`{}` is not an Elm module name (expected e.g. `Routes` or `Site.Routes`)",
                    self.routes.module_name
                ),
            ));
        }
        if self.routes.output.trim().is_empty() {
            return Err(ConfigError::validation("routes.output", "must not be empty"));
        }
        if self.routes.generator.trim().is_empty() {
            return Err(ConfigError::validation("routes.generator", "must not be empty"));
        }
        if self.paths.public.trim_matches('/').is_empty() {
            return Err(ConfigError::validation("paths.public", "must not be empty"));
        }
        if self.render.helper.trim().is_empty() {
            return Err(ConfigError::validation("render.helper", "must not be empty"));
        }
        if self.split.marker.is_empty() {
            return Err(ConfigError::validation("split.marker", "must not be empty"));
        }
        Ok(())
    }
}

// ============================================================================
// tests
// ============================================================================
