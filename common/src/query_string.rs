//! Flat `key=value` query strings.
//!
//! Multi-valued fields are written as repeated keys (`skillIds=a&skillIds=b`),
//! never with bracket or index notation.

use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;

use url::form_urlencoded;

use crate::search_query::NumericRange;

/// Ordered list of decoded query pairs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a query string, with or without the leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self(form_urlencoded::parse(query.as_bytes()).into_owned().collect())
    }

    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        self.0.push((key.to_string(), value.into()));
    }

    pub fn push_opt(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    pub fn push_all<'a>(&mut self, key: &str, values: impl IntoIterator<Item = &'a String>) {
        for value in values {
            self.push(key, value.as_str());
        }
    }

    pub fn push_range(&mut self, min_key: &str, max_key: &str, range: &NumericRange) {
        if let Some(min) = range.min {
            self.push(min_key, min.to_string());
        }
        if let Some(max) = range.max {
            self.push(max_key, max.to_string());
        }
    }

    /// First value for `key`, as written.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// First non-blank value for `key`, trimmed.
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .find(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// Every non-blank value for a repeated key.
    pub fn get_all(&self, key: &str) -> BTreeSet<String> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Parses the value for `key`; malformed input is logged and treated as absent.
    pub fn get_parsed<T>(&self, key: &str) -> Option<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.get_string(key)?;
        match raw.parse::<T>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("ignoring query parameter {key}={raw:?}: {e}");
                None
            }
        }
    }

    /// Reads a `min`/`max` pair. An inverted pair is dropped entirely.
    pub fn get_range(&self, min_key: &str, max_key: &str) -> NumericRange {
        let range = NumericRange {
            min: self.get_parsed(min_key),
            max: self.get_parsed(max_key),
        };
        match (range.min, range.max) {
            (Some(min), Some(max)) if min > max => {
                tracing::warn!("ignoring inverted range {min_key}={min} {max_key}={max}");
                NumericRange::default()
            }
            _ => range,
        }
    }

    pub fn as_slice(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter())
            .finish()
    }
}

impl Display for QueryPairs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_query_string())
    }
}
