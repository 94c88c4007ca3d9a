//! Code generators for the site build.
//!
//! - **Routes**: Elm route table from `path=file` mappings ([`routes`])
//! - **Makefile**: copy/render rules per markdown source plus the rule that
//!   regenerates the route table ([`makefile`])
//!
//! Both are pure: they take configuration and inputs and return text.

pub mod makefile;
pub mod routes;
