//! `%key%` placeholder substitution.
//!
//! Placeholders are replaced in the raw chapter text before Markdown
//! conversion, so replacement values may contain Markdown or HTML.
//!
//! Substitution is a single left-to-right pass: a replacement value that
//! itself contains `%other%` is emitted verbatim and never expanded.

use std::collections::BTreeMap;

/// Placeholder values keyed by name (without the surrounding `%`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Placeholders {
    values: BTreeMap<String, String>,
}

impl Placeholders {
    /// Create an empty set of placeholder values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Layer `other` on top of these values; `other` wins on shared keys.
    #[must_use]
    pub fn overlaid_with(&self, other: &Placeholders) -> Placeholders {
        let mut merged = self.clone();
        merged
            .values
            .extend(other.values.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }

    /// Value for `key`, if set.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Check if no values are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of values set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Placeholders {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Placeholders {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.values
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

/// Replace every `%key%` token in `raw` that has a value in `values`.
///
/// Tokens without a value are left untouched.
///
/// # Examples
///
/// ```
/// use quire_renderer::{Placeholders, substitute};
///
/// let values: Placeholders = [("name", "Foo")].into_iter().collect();
/// assert_eq!(substitute("Use %name% here", &values), "Use Foo here");
/// assert_eq!(substitute("Use %other% here", &values), "Use %other% here");
/// ```
pub fn substitute(raw: &str, values: &Placeholders) -> String {
    if values.is_empty() || !raw.contains('%') {
        return raw.to_owned();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let Some(end) = after.find('%') else {
            out.push_str(&rest[start..]);
            return out;
        };

        if let Some(value) = values.get(&after[..end]) {
            out.push_str(value);
            rest = &after[end + 1..];
        } else {
            // The closing `%` may open the next token.
            out.push('%');
            rest = after;
        }
    }
    out.push_str(rest);
    out
}
