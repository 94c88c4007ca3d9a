//! Elm identifiers derived from URL paths.

use std::fmt;

/// Constructor reserved for the site root.
pub const INDEX_CONSTRUCTOR: &str = "Index";

/// Prefix for constructors that would otherwise not start with an
/// uppercase letter (`/2020` or a segment in a caseless script).
const ROUTE_PREFIX: &str = "Route";

/// A route constructor of the generated `Route` type.
///
/// Always a non-empty run of alphanumerics starting with an uppercase
/// letter. Non-ASCII letters are kept; Elm accepts them in identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Constructor(String);

impl Constructor {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derive the constructor for a URL path.
///
/// Splits on `/` and `-` (and any other non-alphanumeric character),
/// drops empty segments, uppercases the first letter of each segment and
/// concatenates. The rest of each segment keeps its case. Letters outside
/// ASCII are letters too, so `/über` becomes `Über`.
///
/// # Examples
/// ```ignore
/// assert_eq!(to_constructor("/").as_str(), "Index");
/// assert_eq!(to_constructor("/blog/hello-world").as_str(), "BlogHelloWorld");
/// assert_eq!(to_constructor("/2020").as_str(), "Route2020");
/// ```
pub fn to_constructor(url_path: &str) -> Constructor {
    let mut ident = String::with_capacity(url_path.len());

    let segments = url_path
        .split(|c: char| !c.is_alphanumeric())
        .filter(|segment| !segment.is_empty());
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            ident.extend(first.to_uppercase());
            ident.push_str(chars.as_str());
        }
    }

    if ident.is_empty() {
        return Constructor(INDEX_CONSTRUCTOR.to_string());
    }
    if !ident.starts_with(char::is_uppercase) {
        ident.insert_str(0, ROUTE_PREFIX);
    }
    Constructor(ident)
}

/// Check an Elm module name: dot-separated capitalized identifiers.
pub fn is_valid_module_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|part| {
            part.starts_with(|c: char| c.is_ascii_uppercase())
                && part.chars().all(|c| c.is_ascii_alphanumeric())
        })
}
