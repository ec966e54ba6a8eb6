use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::models::Preamble;

/// Preamble tags that define a macro of the same (lowercased) name.
const PREAMBLE_MACRO_TAGS: [&str; 7] = [
    "name", "version", "release", "epoch", "summary", "license", "url",
];

/// Macro name to replacement text.
///
/// Expansion is literal substitution of `%{key}` for keys in the table. Nothing
/// is evaluated and nothing is built in: `%{name}` only expands if `name` was
/// inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MacroTable(BTreeMap<String, String>);

impl MacroTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a table from the main package preamble (`Name:`, `Version:`, ...).
    ///
    /// Tag values are stored as written; a value referring to another macro is
    /// expanded against the entries seeded before it.
    pub fn from_preamble(preamble: &Preamble) -> Self {
        let mut table = Self::new();
        for tag in PREAMBLE_MACRO_TAGS {
            if let Some(value) = preamble.tag(tag) {
                let value = table.expand(value);
                table.insert(tag, value);
            }
        }
        table
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replaces every `%{key}` whose key is in the table. Unknown references
    /// stay as written and replacement text is not scanned again.
    pub fn expand(&self, text: &str) -> String {
        static MACRO_REGEX: OnceLock<Regex> = OnceLock::new();
        let macro_regex =
            MACRO_REGEX.get_or_init(|| Regex::new(r"%\{([^{}]+)\}").expect("Invalid macro regex"));

        if self.is_empty() {
            return text.to_string();
        }
        macro_regex
            .replace_all(text, |caps: &Captures| match self.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for MacroTable {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MacroTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}
