//! `[paths]` section configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding markdown sources.
    pub content: String,
    /// Directory the build publishes to; also the aggregate make target.
    pub public: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            public: "public".into(),
        }
    }
}
