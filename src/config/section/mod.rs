//! Configuration section definitions.
//!
//! Each module corresponds to a section in `sitegen.toml`:
//!
//! | Module   | TOML Section | Purpose                                  |
//! |----------|--------------|------------------------------------------|
//! | `paths`  | `[paths]`    | Content and public directories           |
//! | `render` | `[render]`   | External markdown to HTML helper         |
//! | `routes` | `[routes]`   | Route module name, output and tooling    |
//! | `split`  | `[split]`    | Excerpt marker                           |

mod paths;
mod render;
mod routes;
mod split;

pub use paths::PathsConfig;
pub use render::RenderConfig;
pub use routes::RoutesConfig;
pub use split::{DEFAULT_MARKER, SplitConfig};
