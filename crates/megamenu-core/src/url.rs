//! Outbound link construction.
//!
//! Upstream slugs are free-form and sometimes already carry a full
//! `https://` URL, occasionally more than once. Every link the presenters
//! emit goes through [`resolve`] so that a malformed slug still produces a
//! single well-formed absolute URL.

use megamenu_model::MenuNode;

const HTTPS: &str = "https://";

/// Join `origin` and `slug` into one absolute URL.
///
/// The naive `origin/slug` join is split on `https://`. With no embedded
/// protocol the join is returned as is. Otherwise the segment after the last
/// protocol marker is kept, every `//` inside it is collapsed to `/`, and a
/// single `https://` is put back in front.
pub fn resolve(origin: &str, slug: &str) -> String {
    let naive = format!("{origin}/{slug}");
    let parts: Vec<&str> = naive.split(HTTPS).collect();

    match parts.as_slice() {
        [_] => naive,
        [.., last] => format!("{HTTPS}{}", collapse_double_slashes(last)),
        [] => naive,
    }
}

fn collapse_double_slashes(segment: &str) -> String {
    let mut out = segment.to_string();
    while out.contains("//") {
        out = out.replace("//", "/");
    }
    out
}

/// Resolves node slugs against a fixed page origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkResolver {
    origin: String,
}

impl LinkResolver {
    /// Trailing slashes on the origin are dropped.
    pub fn new(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        let origin = origin.trim_end_matches('/').to_string();
        Self { origin }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Resolve a slug unconditionally.
    pub fn resolve(&self, slug: &str) -> String {
        resolve(&self.origin, slug)
    }

    /// Resolve a node's link; placeholder slugs (empty or `#`) give `None`.
    pub fn link(&self, node: &MenuNode) -> Option<String> {
        node.link_target().map(|slug| self.resolve(slug))
    }
}
