//! Cosmetic inline styles attached to menu nodes.
//!
//! Upstream content stores styles as a JSON object with CSS property names
//! (`{"font-weight": "700"}`). Parsing yields a [`StyleMap`] keyed by the
//! camelCase property name. Styles are purely cosmetic, so callers that
//! render nodes go through [`StyleMap::parse_or_empty`] and never see the
//! parse failure.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::{MenuError, Result};

/// Parsed inline style properties, ordered by property name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StyleMap {
    properties: BTreeMap<String, String>,
}

impl StyleMap {
    /// An empty style set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a JSON object of CSS properties.
    ///
    /// String values are kept verbatim, numbers and booleans are rendered with
    /// their JSON text, and `null` entries are dropped.
    pub fn parse(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw).map_err(MenuError::style)?;
        let Value::Object(object) = value else {
            return Err(MenuError::style("expected a JSON object"));
        };

        let properties = object
            .into_iter()
            .filter_map(|(key, value)| {
                let value = match value {
                    Value::Null => return None,
                    Value::String(text) => text,
                    other => other.to_string(),
                };
                Some((kebab_to_camel(&key), value))
            })
            .collect();

        Ok(Self { properties })
    }

    /// Parse, collapsing any failure to an empty style.
    pub fn parse_or_empty(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|error| {
            tracing::debug!(%error, "ignoring malformed inline style");
            Self::empty()
        })
    }

    /// Look up a property by its camelCase name.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Iterate properties in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// Convert `font-weight` into `fontWeight`.
///
/// Only a dash followed by a lowercase ASCII letter is folded; any other dash
/// is kept as written.
pub fn kebab_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '-'
            && let Some(next) = chars.peek().copied()
            && next.is_ascii_lowercase()
        {
            out.push(next.to_ascii_uppercase());
            chars.next();
            continue;
        }
        out.push(ch);
    }
    out
}
