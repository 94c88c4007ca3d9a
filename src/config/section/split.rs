//! `[split]` section configuration.

use serde::{Deserialize, Serialize};

/// Marker separating a post excerpt from the rest of the post.
pub const DEFAULT_MARKER: &str = "<!--more-->";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    pub marker: String,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.into(),
        }
    }
}
