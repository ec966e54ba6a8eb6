use serde::Serialize;

use crate::parsing::args::{
    ArgsError, OptionGrammar, ParsedSectionArgs, UnknownFlags, parse_section_args,
};

use super::kinds::SectionKind;

/// A line inside a section body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BodyLine {
    /// 1-based physical line number in the source.
    pub number: usize,
    /// Stripped line text.
    pub text: String,
}

/// One section of a spec file: its opening line and the lines that follow it
/// up to the next section header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionBlock {
    /// Which section this block opens.
    pub kind: SectionKind,
    /// The literal (stripped) header line, e.g. `%files -n foo-doc`.
    pub header_line: String,
    /// Physical line of the header. `None` for the implicit preamble block.
    pub line_number: Option<usize>,
    /// Text following the section name, if any.
    pub raw_args: Option<String>,
    /// Body lines in source order. Empty, never absent, when the section has no content.
    pub body: Vec<BodyLine>,
}

impl SectionBlock {
    /// The implicit `%package` block holding the main package preamble.
    pub fn preamble() -> Self {
        Self {
            kind: SectionKind::Package,
            header_line: SectionKind::Package.as_str().to_string(),
            line_number: None,
            raw_args: None,
            body: Vec::new(),
        }
    }

    pub fn open(
        kind: SectionKind,
        header_line: String,
        line_number: usize,
        raw_args: Option<String>,
    ) -> Self {
        Self {
            kind,
            header_line,
            line_number: Some(line_number),
            raw_args,
            body: Vec::new(),
        }
    }

    /// Whether this is the implicit preamble block rather than one opened by a header.
    pub fn is_synthetic(&self) -> bool {
        self.line_number.is_none()
    }

    /// The section name, e.g. `%files`.
    pub fn section_name(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn raw_args(&self) -> Option<&str> {
        self.raw_args.as_deref()
    }

    pub fn body_lines(&self) -> impl Iterator<Item = &str> {
        self.body.iter().map(|l| l.text.as_str())
    }

    /// Source lines covered by this block: the header (unless synthetic)
    /// followed by the body.
    pub fn source_lines(&self) -> impl Iterator<Item = &str> {
        let header = (!self.is_synthetic()).then_some(self.header_line.as_str());
        header.into_iter().chain(self.body_lines())
    }

    /// Parses the header arguments against `grammar`.
    pub fn parse_args(
        &self,
        grammar: &OptionGrammar,
        policy: UnknownFlags,
    ) -> Result<ParsedSectionArgs, ArgsError> {
        parse_section_args(self.section_name(), self.raw_args(), grammar, policy)
    }
}
