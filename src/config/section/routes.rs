//! `[routes]` section configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Elm module name of the generated route table.
    pub module_name: String,
    /// Where the Makefile writes the generated module.
    pub output: String,
    /// Command the Makefile runs to generate the module.
    pub generator: String,
    /// File listed first among the module's prerequisites, typically the
    /// generator script, so editing it rebuilds the module. Empty lists
    /// only the markdown sources.
    pub generator_dep: String,
    /// Formatter run on the generated module. Empty disables the step.
    pub formatter: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            module_name: "Routes".into(),
            output: "src/Routes.elm".into(),
            generator: "sitegen routes".into(),
            generator_dep: String::new(),
            formatter: "elm-format --yes".into(),
        }
    }
}
