//! Route table generation.
//!
//! Turns `path=file` mappings into an Elm module with:
//!
//! - a `Route` type, one constructor per distinct URL path,
//! - `markdown : Route -> String` (published markdown of each route),
//! - `path : Route -> List QueryParameter -> String`,
//! - `parser : Parser (Route -> a) a` with specific routes tried first,
//! - `fromUrl : Url -> Maybe Route`.
//!
//! # Example
//!
//! ```ignore
//! let table = RouteTable::from_mappings("Routes", ["/docs=docs/index.md", "/=index.md"])?;
//! print!("{}", table.render());
//! ```

mod emit;
mod ident;

pub use ident::{Constructor, is_valid_module_name, to_constructor};

use crate::utils::path::path_segments;
use std::{
    cmp::Reverse,
    collections::{BTreeMap, btree_map::Entry},
    fmt,
    str::FromStr,
};
use thiserror::Error;

/// Route generation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("mapping `{0}` has no `=` separator (expected `path=file`)")]
    MissingSeparator(String),

    #[error("no route mappings given")]
    NoRoutes,
}

// ============================================================================
// RouteEntry
// ============================================================================

/// One `path=file` mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// URL path the route answers to (`/docs`).
    pub url_path: String,
    /// Markdown file published for the route (`docs/index.md`).
    pub source_file: String,
}

impl RouteEntry {
    pub fn new(url_path: impl Into<String>, source_file: impl Into<String>) -> Self {
        Self {
            url_path: url_path.into(),
            source_file: source_file.into(),
        }
    }

    pub fn constructor(&self) -> Constructor {
        to_constructor(&self.url_path)
    }

    /// Non-empty segments of the URL path.
    pub fn url_segments(&self) -> impl Iterator<Item = &str> {
        path_segments(&self.url_path)
    }

    /// Non-empty segments of the source file path.
    pub fn file_segments(&self) -> impl Iterator<Item = &str> {
        path_segments(&self.source_file)
    }

    /// Sort key placing more specific routes first: more segments, then
    /// longer path text, then lexicographic.
    fn specificity(&self) -> (Reverse<usize>, Reverse<usize>, &str) {
        (
            Reverse(self.url_segments().count()),
            Reverse(self.url_path.len()),
            &self.url_path,
        )
    }
}

impl FromStr for RouteEntry {
    type Err = RouteError;

    /// Parse `path=file`, splitting on the first `=`.
    fn from_str(mapping: &str) -> Result<Self, Self::Err> {
        let (url_path, source_file) = mapping
            .split_once('=')
            .ok_or_else(|| RouteError::MissingSeparator(mapping.to_string()))?;
        Ok(Self::new(url_path, source_file))
    }
}

impl fmt::Display for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.url_path, self.source_file)
    }
}

// ============================================================================
// RouteTable
// ============================================================================

/// Routes keyed by URL path, ready to render as an Elm module.
#[derive(Debug, Clone)]
pub struct RouteTable {
    module_name: String,
    entries: BTreeMap<String, RouteEntry>,
}

impl RouteTable {
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Build a table from raw `path=file` strings.
    ///
    /// Fails on the first entry without `=`, or when no entry is given.
    pub fn from_mappings<I, S>(
        module_name: impl Into<String>,
        mappings: I,
    ) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new(module_name);
        for mapping in mappings {
            let entry: RouteEntry = mapping.as_ref().parse()?;
            if let Some(previous) = table.insert(entry) {
                crate::debug!("routes"; "`{}` given twice, dropping `{}`",
                    previous.url_path, previous.source_file);
            }
        }

        if table.is_empty() {
            return Err(RouteError::NoRoutes);
        }
        Ok(table)
    }

    /// Insert an entry, returning the one it replaced for the same path.
    pub fn insert(&mut self, entry: RouteEntry) -> Option<RouteEntry> {
        match self.entries.entry(entry.url_path.clone()) {
            Entry::Occupied(mut slot) => Some(slot.insert(entry)),
            Entry::Vacant(slot) => {
                slot.insert(entry);
                None
            }
        }
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Routes ordered by constructor (ties broken by URL path).
    pub fn by_constructor(&self) -> Vec<(Constructor, &RouteEntry)> {
        let mut routes: Vec<_> = self
            .entries
            .values()
            .map(|entry| (entry.constructor(), entry))
            .collect();
        routes.sort_by(|(a, a_entry), (b, b_entry)| {
            a.cmp(b).then_with(|| a_entry.url_path.cmp(&b_entry.url_path))
        });
        routes
    }

    /// Routes ordered most specific first, the order parser alternatives
    /// must be tried in.
    pub fn by_specificity(&self) -> Vec<(Constructor, &RouteEntry)> {
        let mut routes: Vec<_> = self.entries.values().collect();
        routes.sort_by(|a, b| a.specificity().cmp(&b.specificity()));
        routes
            .into_iter()
            .map(|entry| (entry.constructor(), entry))
            .collect()
    }

    /// Constructors shared by more than one URL path, with those paths.
    ///
    /// The generated module does not compile when this is non-empty.
    pub fn constructor_collisions(&self) -> Vec<(Constructor, Vec<&str>)> {
        let mut by_ident: BTreeMap<Constructor, Vec<&str>> = BTreeMap::new();
        for entry in self.entries.values() {
            by_ident
                .entry(entry.constructor())
                .or_default()
                .push(&entry.url_path);
        }
        by_ident
            .into_iter()
            .filter(|(_, paths)| paths.len() > 1)
            .collect()
    }

    /// Render the Elm module source.
    pub fn render(&self) -> String {
        emit::render_module(self)
    }
}
