//! Route table for the console.
//!
//! DESIGN
//! ======
//! Routes are an ordered list of `(pattern, exact, view)` entries evaluated
//! first-match-wins. Exactness is explicit so `/uploads` does not shadow
//! `/uploads/files` or `/uploads/upload/:id`. Matching mirrors browser-router
//! conventions: case-insensitive static segments, `:name` captures one
//! non-empty segment, and non-exact patterns match whole-segment prefixes.
//! The shell resolves against this table instead of `leptos_router`'s
//! `<Routes>` because that matcher ranks routes by specificity, not declared
//! order, and has no per-entry prefix/exact flag.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Sub-views the shell can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Help,
    Tokens,
    Files,
    Upload,
    Uploads,
    User,
    Users,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A parsed path pattern such as `/users/:id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    #[must_use]
    pub fn parse(pattern: &str) -> Self {
        let segments = split_path(pattern)
            .map(|seg| match seg.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_owned()),
                None => Segment::Static(seg.to_owned()),
            })
            .collect();
        Self {
            raw: pattern.to_owned(),
            segments,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Match `path` and return captured parameters.
    #[must_use]
    pub fn matches(&self, path: &str, exact: bool) -> Option<RouteParams> {
        let parts: Vec<&str> = split_path(path).collect();
        if parts.len() < self.segments.len() || (exact && parts.len() != self.segments.len()) {
            return None;
        }
        let mut params = RouteParams::default();
        for (segment, part) in self.segments.iter().zip(&parts) {
            match segment {
                Segment::Static(expected) => {
                    if !expected.eq_ignore_ascii_case(part) {
                        return None;
                    }
                }
                Segment::Param(name) => params.0.push((name.clone(), (*part).to_owned())),
            }
        }
        Some(params)
    }
}

/// Captured `:name` values, in pattern order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams(Vec<(String, String)>);

impl RouteParams {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: RoutePattern,
    pub exact: bool,
    pub view: ViewKind,
}

/// Result of resolving a path against a [`RouteTable`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub view: ViewKind,
    pub params: RouteParams,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    #[must_use]
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    #[must_use]
    pub fn route(mut self, pattern: &str, exact: bool, view: ViewKind) -> Self {
        self.entries.push(RouteEntry {
            pattern: RoutePattern::parse(pattern),
            exact,
            view,
        });
        self
    }

    /// The console's routes, in evaluation order.
    #[must_use]
    pub fn console() -> Self {
        Self::new()
            .route("/", true, ViewKind::Home)
            .route("/help", false, ViewKind::Help)
            .route("/tokens", false, ViewKind::Tokens)
            .route("/uploads/files", true, ViewKind::Files)
            .route("/uploads/upload/:id", false, ViewKind::Upload)
            .route("/uploads", true, ViewKind::Uploads)
            .route("/users/:id", false, ViewKind::User)
            .route("/users", true, ViewKind::Users)
    }

    #[must_use]
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// First entry matching `path`, or `None` for not-found.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let path = strip_query(path);
        self.entries.iter().find_map(|entry| {
            entry.pattern.matches(path, entry.exact).map(|params| RouteMatch {
                view: entry.view,
                params,
            })
        })
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::console()
    }
}

/// Whether a nav link to `target` should be highlighted at `current`.
#[must_use]
pub fn is_link_active(current: &str, target: &str, exact: bool) -> bool {
    RoutePattern::parse(target).matches(strip_query(current), exact).is_some()
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|seg| !seg.is_empty())
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}
