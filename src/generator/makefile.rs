//! Makefile rule generation.
//!
//! For every markdown source the site needs two published files: the
//! markdown itself (fetched by the Elm app at runtime) and a pre-rendered
//! HTML page. Both live under the public directory at the source's
//! [`nice_url`] so that `content/post.md` is served from `/post/`.
//!
//! # Rule Format
//!
//! ```make
//! public: public/post/index.md
//! public/post/index.md: content/post.md
//! 	@mkdir -p $(@D)
//! 	cp $< $@
//!
//! public: public/post/index.html
//! public/post/index.html: content/post.md script/make-html-wrapper.sh
//! 	@mkdir -p $(@D)
//! 	script/make-html-wrapper.sh $< > $@
//!
//! src/Routes.elm: content/post.md
//! 	sitegen routes --module-name Routes /post=post/index.md > $@
//! 	elm-format --yes $@
//! ```
//!
//! Paths are written through [`make_path`] and recipe arguments through
//! [`recipe_arg`], so a `$` or a space in a file name reaches the shell
//! intact.

use crate::{
    config::SiteConfig,
    generator::routes::RouteEntry,
    log,
    utils::{
        path::{join, nice_url, parent_dir, strip_dir_prefix, with_extension},
        text::Lines,
    },
};
use std::{
    borrow::Cow,
    collections::{BTreeMap, HashSet},
};

/// Targets derived from one markdown source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Source path as given (`content/post.md`).
    pub source: String,
    /// Content-relative nice URL (`post/index.md`).
    pub published: String,
    /// Copied markdown (`public/post/index.md`).
    pub markdown_target: String,
    /// Rendered page (`public/post/index.html`).
    pub html_target: String,
}

impl Page {
    /// Route mapping for this page (`/post=post/index.md`).
    pub fn route(&self) -> RouteEntry {
        let dir = parent_dir(&self.published);
        RouteEntry::new(format!("/{dir}"), self.published.clone())
    }
}

/// Generates the Makefile fragment for a set of markdown sources.
pub struct MakefileGenerator<'a> {
    config: &'a SiteConfig,
}

impl<'a> MakefileGenerator<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Compute the targets of one source.
    ///
    /// All three target paths go through [`nice_url`] exactly once, on the
    /// content-relative path, so they always agree.
    pub fn page(&self, source: &str) -> Page {
        let relative = strip_dir_prefix(source, &self.config.paths.content);
        let published = nice_url(relative).into_owned();
        let markdown_target = join(&self.config.paths.public, &published);
        let html_target = with_extension(&markdown_target, "html");

        Page {
            source: source.to_string(),
            published,
            markdown_target,
            html_target,
        }
    }

    /// Rule copying the markdown source to its published location.
    pub fn copy_rule(&self, page: &Page) -> Lines {
        let mut out = Lines::new();
        self.aggregate(&mut out, &page.markdown_target);
        out.line(format!(
            "{}: {}",
            make_path(&page.markdown_target),
            make_path(&page.source)
        ));
        out.recipe("@mkdir -p $(@D)");
        out.recipe("cp $< $@");
        out
    }

    /// Rule rendering the markdown source to HTML with the external helper.
    pub fn render_rule(&self, page: &Page) -> Lines {
        let helper = &self.config.render.helper;
        let mut out = Lines::new();
        self.aggregate(&mut out, &page.html_target);
        out.line(format!(
            "{}: {} {helper}",
            make_path(&page.html_target),
            make_path(&page.source)
        ));
        out.recipe("@mkdir -p $(@D)");
        out.recipe(format!("{helper} $< > $@"));
        out
    }

    /// Rule regenerating the route module from every page.
    pub fn routes_rule(&self, pages: &[Page]) -> Lines {
        let routes = &self.config.routes;

        let dep = routes.generator_dep.trim();
        let sources: Vec<Cow<'_, str>> = (!dep.is_empty())
            .then_some(dep)
            .into_iter()
            .chain(pages.iter().map(|page| page.source.as_str()))
            .map(make_path)
            .collect();
        let mappings: Vec<String> = pages
            .iter()
            .map(|page| recipe_arg(&page.route().to_string()).into_owned())
            .collect();

        let mut out = Lines::new();
        out.line(format!("{}: {}", make_path(&routes.output), sources.join(" ")));
        out.recipe(format!(
            "{} --module-name {} {} > $@",
            routes.generator,
            routes.module_name,
            mappings.join(" ")
        ));
        if !routes.formatter.trim().is_empty() {
            out.recipe(format!("{} $@", routes.formatter));
        }
        out
    }

    /// Generate the complete rule text.
    ///
    /// Repeated sources are emitted once, in first-seen order.
    pub fn generate<S: AsRef<str>>(&self, sources: &[S]) -> String {
        let mut seen: HashSet<&str> = HashSet::new();
        let pages: Vec<Page> = sources
            .iter()
            .map(|source| source.as_ref())
            .filter(|source| seen.insert(source))
            .map(|source| self.page(source))
            .collect();

        self.warn_conflicts(&pages);

        let mut rules = Vec::with_capacity(pages.len() * 2 + 1);
        for page in &pages {
            rules.push(self.copy_rule(page));
            rules.push(self.render_rule(page));
        }
        rules.push(self.routes_rule(&pages));

        let mut out = Lines::new();
        for rule in rules {
            if !out.is_empty() {
                out.blank();
            }
            out.append(rule);
        }
        out.finish()
    }

    /// `public: <target>` so `make public` builds every page.
    fn aggregate(&self, out: &mut Lines, target: &str) {
        out.line(format!(
            "{}: {}",
            make_path(self.config.paths.public.trim_end_matches('/')),
            make_path(target)
        ));
    }

    /// Warn when two sources publish to the same location.
    fn warn_conflicts(&self, pages: &[Page]) {
        let mut by_target: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for page in pages {
            by_target
                .entry(page.markdown_target.as_str())
                .or_default()
                .push(page.source.as_str());
        }
        for (target, sources) in by_target.iter().filter(|(_, s)| s.len() > 1) {
            log!("warning"; "{} all publish to {}", sources.join(", "), target);
        }
    }
}

/// Escape a path for a target or prerequisite list.
///
/// `$` is doubled; spaces and `#` get a backslash.
fn make_path(path: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !path.contains(['$', ' ', '#']) {
        return Cow::Borrowed(path);
    }
    let mut escaped = String::with_capacity(path.len() + 4);
    for c in path.chars() {
        match c {
            '$' => escaped.push_str("$$"),
            ' ' | '#' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Single-quote a recipe argument for the shell when it holds anything
/// beyond plain path characters, then double `$` for make.
fn recipe_arg(arg: &str) -> Cow<'_, str> {
    let is_plain = |c: char| c.is_alphanumeric() || "/._-=+:,@%".contains(c);
    if !arg.is_empty() && arg.chars().all(is_plain) {
        return Cow::Borrowed(arg);
    }
    let quoted = format!("'{}'", arg.replace('\'', r"'\''"));
    Cow::Owned(quoted.replace('$', "$$"))
}
