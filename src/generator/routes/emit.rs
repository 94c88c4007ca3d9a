//! Elm source emission for a [`RouteTable`].
//!
//! Output follows `elm-format` layout so a formatter pass is a no-op.

use super::{Constructor, RouteEntry, RouteTable};
use crate::utils::text::Lines;
use std::borrow::Cow;

const IMPORTS: [&str; 3] = [
    "import Url exposing (Url)",
    "import Url.Builder exposing (QueryParameter, absolute)",
    "import Url.Parser exposing ((</>), Parser, map, oneOf, s, top)",
];

/// Render the whole module.
pub(super) fn render_module(table: &RouteTable) -> String {
    let by_constructor = table.by_constructor();

    let mut out = Lines::new();
    out.line(format!("module {} exposing (..)", table.module_name()));
    out.blank();
    for import in IMPORTS {
        out.line(import);
    }

    declaration_gap(&mut out);
    route_type(&mut out, &by_constructor);

    declaration_gap(&mut out);
    case_function(
        &mut out,
        "markdown : Route -> String",
        "markdown route =",
        &by_constructor,
        |entry| format!("absolute {} []", elm_list(entry.file_segments())),
    );

    declaration_gap(&mut out);
    case_function(
        &mut out,
        "path : Route -> List QueryParameter -> String",
        "path route params =",
        &by_constructor,
        |entry| format!("absolute {} params", elm_list(entry.url_segments())),
    );

    declaration_gap(&mut out);
    parser(&mut out, &table.by_specificity());

    declaration_gap(&mut out);
    out.line("fromUrl : Url -> Maybe Route");
    out.line("fromUrl =");
    out.indented(|out| {
        out.line("Url.Parser.parse parser");
    });

    out.finish()
}

/// Two blank lines between top-level declarations.
fn declaration_gap(out: &mut Lines) {
    out.blank().blank();
}

/// `type Route` with one variant per distinct constructor.
fn route_type(out: &mut Lines, routes: &[(Constructor, &RouteEntry)]) {
    let mut variants: Vec<&Constructor> = routes.iter().map(|(ident, _)| ident).collect();
    variants.dedup();

    out.line("type Route");
    out.indented(|out| {
        for (i, ident) in variants.iter().enumerate() {
            let sep = if i == 0 { '=' } else { '|' };
            out.line(format!("{sep} {ident}"));
        }
    });
}

/// A total `case route of` function with one branch per route.
fn case_function(
    out: &mut Lines,
    signature: &str,
    head: &str,
    routes: &[(Constructor, &RouteEntry)],
    body: impl Fn(&RouteEntry) -> String,
) {
    out.line(signature);
    out.line(head);
    out.indented(|out| {
        out.line("case route of");
        out.indented(|out| {
            for (i, (ident, entry)) in routes.iter().enumerate() {
                if i > 0 {
                    out.blank();
                }
                out.line(format!("{ident} ->"));
                out.indented(|out| {
                    out.line(body(entry));
                });
            }
        });
    });
}

/// `oneOf` over the routes in the order given.
fn parser(out: &mut Lines, routes: &[(Constructor, &RouteEntry)]) {
    out.line("parser : Parser (Route -> a) a");
    out.line("parser =");
    out.indented(|out| {
        out.line("oneOf");
        out.indented(|out| {
            for (i, (ident, entry)) in routes.iter().enumerate() {
                let lead = if i == 0 { '[' } else { ',' };
                out.line(format!("{lead} map {ident} {}", parser_expr(entry)));
            }
            out.line("]");
        });
    });
}

/// `top` for the root, `(top </> s "a" </> s "b")` otherwise.
fn parser_expr(entry: &RouteEntry) -> String {
    let mut expr = String::from("top");
    let mut nested = false;
    for segment in entry.url_segments() {
        expr.push_str(" </> s ");
        expr.push_str(&elm_string(segment));
        nested = true;
    }
    if nested { format!("({expr})") } else { expr }
}

/// Elm list of string literals: `[ "a", "b" ]`, or `[]`.
fn elm_list<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let items: Vec<_> = items.map(elm_string).collect();
    if items.is_empty() {
        "[]".to_string()
    } else {
        format!("[ {} ]", items.join(", "))
    }
}

/// Quote a string as an Elm literal.
fn elm_string(s: &str) -> String {
    format!("\"{}\"", escape_elm(s))
}

fn escape_elm(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['\\', '"']) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(mappings: &[&str]) -> String {
        RouteTable::from_mappings("Routes", mappings).unwrap().render()
    }

    #[test]
    fn test_full_module() {
        let elm = render(&["/docs=content/docs.md", "/=content/index.md"]);
        let expected = r#"module Routes exposing (..)

import Url exposing (Url)
import Url.Builder exposing (QueryParameter, absolute)
import Url.Parser exposing ((</>), Parser, map, oneOf, s, top)


type Route
    = Docs
    | Index


markdown : Route -> String
markdown route =
    case route of
        Docs ->
            absolute [ "content", "docs.md" ] []

        Index ->
            absolute [ "content", "index.md" ] []


path : Route -> List QueryParameter -> String
path route params =
    case route of
        Docs ->
            absolute [ "docs" ] params

        Index ->
            absolute [] params


parser : Parser (Route -> a) a
parser =
    oneOf
        [ map Docs (top </> s "docs")
        , map Index top
        ]


fromUrl : Url -> Maybe Route
fromUrl =
    Url.Parser.parse parser
"#;
        assert_eq!(elm, expected);
    }

    #[test]
    fn test_branch_counts() {
        let elm = render(&["/docs=content/docs.md", "/=content/index.md"]);

        let variants = elm
            .lines()
            .filter(|l| l.starts_with("    = ") || l.starts_with("    | "))
            .count();
        let markdown_branches = elm.lines().filter(|l| l.ends_with("] []")).count();
        let path_branches = elm.lines().filter(|l| l.ends_with(" params")).count();
        let alternatives = elm.lines().filter(|l| l.contains(" map ")).count();

        assert_eq!(variants, 2);
        assert_eq!(markdown_branches, 2);
        assert_eq!(path_branches, 2);
        assert_eq!(alternatives, 2);

        let docs = elm.find("map Docs").unwrap();
        let index = elm.find("map Index").unwrap();
        assert!(docs < index);
    }

    #[test]
    fn test_nested_route_parser_precedes_prefix() {
        let elm = render(&["/a=a.md", "/a/b=a/b.md"]);
        let nested = elm.find(r#"map AB (top </> s "a" </> s "b")"#).unwrap();
        let prefix = elm.find(r#"map A (top </> s "a")"#).unwrap();
        assert!(nested < prefix);
    }

    #[test]
    fn test_module_name_is_used() {
        let elm = RouteTable::from_mappings("Site.Routes", ["/=index.md"])
            .unwrap()
            .render();
        assert!(elm.starts_with("module Site.Routes exposing (..)\n"));
    }

    #[test]
    fn test_collision_renders_single_variant() {
        let elm = render(&["/a-b=x.md", "/a/b=y.md"]);
        assert_eq!(elm.matches("    = AB").count(), 1);
        assert!(!elm.contains("    | AB"));
    }

    #[test]
    fn test_non_ascii_route_gets_own_variant() {
        let elm = render(&["/=index.md", "/é=e.md"]);
        assert!(elm.contains("    = Index\n    | É\n"));
        assert!(elm.contains(r#"[ map É (top </> s "é")"#));
        assert_eq!(elm.matches("Index ->").count(), 2);
    }

    #[test]
    fn test_parser_expr() {
        assert_eq!(parser_expr(&RouteEntry::new("/", "index.md")), "top");
        assert_eq!(
            parser_expr(&RouteEntry::new("/blog/hello-world", "x.md")),
            r#"(top </> s "blog" </> s "hello-world")"#
        );
    }

    #[test]
    fn test_elm_list() {
        assert_eq!(elm_list(std::iter::empty()), "[]");
        assert_eq!(elm_list(["a"].into_iter()), r#"[ "a" ]"#);
        assert_eq!(elm_list(["a", "b"].into_iter()), r#"[ "a", "b" ]"#);
    }

    #[test]
    fn test_escape_elm() {
        assert_eq!(escape_elm("plain"), "plain");
        assert_eq!(escape_elm(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_elm(r"a\b"), r"a\\b");
    }
}
