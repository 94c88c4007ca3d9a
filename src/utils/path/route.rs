//! Content path to URL utilities.
//!
//! Pure string functions over `/`-separated paths. Paths here are Makefile
//! text, not filesystem handles, so they are never canonicalized.

use std::borrow::Cow;

/// File name every page is published under.
pub const INDEX_FILE: &str = "index.md";

/// Canonical directory/index form of a content path.
///
/// `post.md` becomes `post/index.md`; a path already naming an index file is
/// returned unchanged, which makes the function idempotent.
///
/// A path names an index file only when its final segment is exactly
/// `index.md`. Containing the text is not enough: `reindex.md` and
/// `index.md.bak` are plain files and get rewritten like any other.
///
/// # Examples
/// ```ignore
/// assert_eq!(nice_url("content/post.md"), "content/post/index.md");
/// assert_eq!(nice_url("content/index.md"), "content/index.md");
/// assert_eq!(nice_url("notes"), "notes/index.md");
/// ```
pub fn nice_url(path: &str) -> Cow<'_, str> {
    let (dir, name) = split_file_name(path);

    if name == INDEX_FILE {
        return Cow::Borrowed(path);
    }

    let stem = file_stem(name);
    Cow::Owned(match (dir, stem.is_empty()) {
        (Some(dir), true) => format!("{dir}/{INDEX_FILE}"),
        (None, true) => INDEX_FILE.to_string(),
        (Some(dir), false) => format!("{dir}/{stem}/{INDEX_FILE}"),
        (None, false) => format!("{stem}/{INDEX_FILE}"),
    })
}

/// Replace the extension of the final path segment.
///
/// A segment without extension gets one appended.
pub fn with_extension(path: &str, ext: &str) -> String {
    let (dir, name) = split_file_name(path);
    let stem = file_stem(name);
    match dir {
        Some(dir) => format!("{dir}/{stem}.{ext}"),
        None => format!("{stem}.{ext}"),
    }
}

/// Strip a leading directory component (`content/a.md` -> `a.md`).
///
/// Paths outside `dir` are returned unchanged.
pub fn strip_dir_prefix<'a>(path: &'a str, dir: &str) -> &'a str {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() {
        return path;
    }
    path.strip_prefix(dir)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(path)
}

/// Directory part of a path, empty for a bare file name.
pub fn parent_dir(path: &str) -> &str {
    split_file_name(path).0.unwrap_or("")
}

/// Non-empty `/`-separated segments of a path.
pub fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Join a directory and a relative path with exactly one `/`.
pub fn join(dir: &str, rest: &str) -> String {
    let dir = dir.trim_end_matches('/');
    let rest = rest.trim_start_matches('/');
    match (dir.is_empty(), rest.is_empty()) {
        (true, _) => rest.to_string(),
        (false, true) => dir.to_string(),
        (false, false) => format!("{dir}/{rest}"),
    }
}

fn split_file_name(path: &str) -> (Option<&str>, &str) {
    match path.rsplit_once('/') {
        Some((dir, name)) => (Some(dir), name),
        None => (None, path),
    }
}

fn file_stem(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_url_rewrites_plain_files() {
        assert_eq!(nice_url("content/post.md"), "content/post/index.md");
        assert_eq!(nice_url("post.md"), "post/index.md");
        assert_eq!(
            nice_url("content/blog/hello-world.md"),
            "content/blog/hello-world/index.md"
        );
    }

    #[test]
    fn test_nice_url_keeps_index_files() {
        assert_eq!(nice_url("content/index.md"), "content/index.md");
        assert_eq!(nice_url("index.md"), "index.md");
        assert!(matches!(nice_url("content/blog/index.md"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_nice_url_idempotent() {
        for path in [
            "content/post.md",
            "content/index.md",
            "a/b/c.markdown",
            "notes",
            "content/dir/",
        ] {
            let once = nice_url(path).into_owned();
            assert_eq!(nice_url(&once), once, "not idempotent for {path}");
        }
    }

    #[test]
    fn test_nice_url_edge_shapes() {
        assert_eq!(nice_url("notes"), "notes/index.md");
        assert_eq!(nice_url("content/dir/"), "content/dir/index.md");
        assert_eq!(nice_url("content/v1.2.md"), "content/v1.2/index.md");
    }

    #[test]
    fn test_nice_url_only_matches_whole_file_name() {
        assert_eq!(nice_url("content/reindex.md"), "content/reindex/index.md");
        assert_eq!(nice_url("content/index.md.bak"), "content/index.md/index.md");
        assert_eq!(nice_url("content/index.md/notes.md"), "content/index.md/notes/index.md");
    }

    #[test]
    fn test_with_extension() {
        assert_eq!(with_extension("public/post/index.md", "html"), "public/post/index.html");
        assert_eq!(with_extension("index.md", "html"), "index.html");
        assert_eq!(with_extension("public/readme", "html"), "public/readme.html");
    }

    #[test]
    fn test_strip_dir_prefix() {
        assert_eq!(strip_dir_prefix("content/post.md", "content"), "post.md");
        assert_eq!(strip_dir_prefix("content/post.md", "content/"), "post.md");
        assert_eq!(strip_dir_prefix("contented/post.md", "content"), "contented/post.md");
        assert_eq!(strip_dir_prefix("other/post.md", "content"), "other/post.md");
        assert_eq!(strip_dir_prefix("post.md", ""), "post.md");
    }

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir("post/index.md"), "post");
        assert_eq!(parent_dir("a/b/index.md"), "a/b");
        assert_eq!(parent_dir("index.md"), "");
    }

    #[test]
    fn test_path_segments_skip_empty() {
        let segments: Vec<_> = path_segments("/docs//intro/").collect();
        assert_eq!(segments, ["docs", "intro"]);
        assert_eq!(path_segments("/").count(), 0);
    }

    #[test]
    fn test_join() {
        assert_eq!(join("public", "post/index.md"), "public/post/index.md");
        assert_eq!(join("public/", "/post"), "public/post");
        assert_eq!(join("", "post"), "post");
        assert_eq!(join("public", ""), "public");
    }
}
