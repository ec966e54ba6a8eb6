use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::parsing::sections::SectionBlock;

/// A `Tag: value` line from a `%package` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreambleTag {
    pub name: String,
    pub value: String,
    pub line: usize,
}

/// The tags of a package preamble, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Preamble {
    tags: Vec<PreambleTag>,
}

impl Preamble {
    /// Collects the tag lines of a block's body; other lines are skipped.
    pub fn from_block(block: &SectionBlock) -> Self {
        static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
        let tag_regex = TAG_REGEX.get_or_init(|| {
            Regex::new(r"^([A-Za-z][A-Za-z0-9()_]*)\s*:\s*(.*)$").expect("Invalid tag regex")
        });

        let tags = block
            .body
            .iter()
            .filter_map(|line| {
                let caps = tag_regex.captures(&line.text)?;
                Some(PreambleTag {
                    name: caps[1].to_string(),
                    value: caps[2].trim().to_string(),
                    line: line.number,
                })
            })
            .collect();

        Self { tags }
    }

    /// First value of `name`, compared case-insensitively.
    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .map(|t| t.value.as_str())
    }

    pub fn tags(&self) -> &[PreambleTag] {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
