//! `[render]` section configuration.

use serde::{Deserialize, Serialize};

/// External helper turning one markdown file into HTML on stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub helper: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            helper: "script/make-html-wrapper.sh".into(),
        }
    }
}
