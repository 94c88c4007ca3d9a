//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`route`]: content path to URL mapping (`nice_url`, `with_extension`, `strip_dir_prefix`)

pub mod route;

pub use route::{join, nice_url, parent_dir, path_segments, strip_dir_prefix, with_extension};
