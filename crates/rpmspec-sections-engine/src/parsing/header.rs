use std::sync::OnceLock;

use regex::Regex;

use super::sections::SectionKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    #[error("`{0}` is not a `%name [args]` section header")]
    Malformed(String),
    #[error("`{0}` is not a known section")]
    UnknownSection(String),
}

/// A section header split into its name and argument text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeader {
    pub kind: SectionKind,
    pub args: Option<String>,
}

impl SectionHeader {
    pub fn section_name(&self) -> &'static str {
        self.kind.as_str()
    }
}

/// Parses header text such as `%files -n foo-doc` on explicit request.
///
/// Unlike line classification, which degrades anything odd to an ordinary
/// line, this fails on text that is not a header of a known section.
pub fn parse_header(text: &str) -> Result<SectionHeader, HeaderError> {
    static HEADER_REGEX: OnceLock<Regex> = OnceLock::new();
    let header_regex = HEADER_REGEX
        .get_or_init(|| Regex::new(r"^(%\w+)(?:\s+(.*))?$").expect("Invalid header regex"));

    let text = text.trim();
    let caps = header_regex
        .captures(text)
        .ok_or_else(|| HeaderError::Malformed(text.to_string()))?;

    let name = &caps[1];
    let kind =
        SectionKind::from_name(name).ok_or_else(|| HeaderError::UnknownSection(name.to_string()))?;
    let args = caps
        .get(2)
        .map(|m| m.as_str().trim())
        .filter(|a| !a.is_empty())
        .map(str::to_string);

    Ok(SectionHeader { kind, args })
}
