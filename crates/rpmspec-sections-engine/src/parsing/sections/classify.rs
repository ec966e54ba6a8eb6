use crate::parsing::lines::LineRef;

use super::kinds::SectionKind;

/// Directive prefixes of conditional macros. Matching is by prefix so the
/// architecture and OS variants (`%ifarch`, `%ifnos`, ...) are covered too.
pub const CONDITIONAL_PREFIXES: [&str; 4] = ["%if", "%elif", "%else", "%endif"];

/// What a single line means to the partitioner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A conditional macro line, kept verbatim in the current body.
    Conditional,
    /// A line opening a new section.
    SectionHeader {
        kind: SectionKind,
        /// Text after the section name, absent when there is none.
        args: Option<String>,
    },
    /// Anything else, including unrecognized `%` directives.
    Ordinary,
}

/// Classification of a single line containing only local facts.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// 1-based physical line number.
    pub number: usize,
    /// The stripped line text.
    pub text: String,
    pub kind: LineKind,
}

/// Classifies individual lines for the partitioning phase.
pub struct SpecLineClassifier;

impl SpecLineClassifier {
    /// Classifies a line into a [`LineClass`].
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        LineClass {
            number: lr.number,
            text: lr.text.clone(),
            kind: Self::kind_of(&lr.text),
        }
    }

    /// Classifies already-stripped line text. Total over all strings.
    pub fn kind_of(line: &str) -> LineKind {
        let Some((name, rest)) = split_directive(line) else {
            return LineKind::Ordinary;
        };

        if CONDITIONAL_PREFIXES
            .iter()
            .any(|prefix| name.starts_with(prefix))
        {
            return LineKind::Conditional;
        }

        match SectionKind::from_name(name) {
            // `%files(doc)` is not a header: the name must end at whitespace or EOL.
            Some(kind) if rest.is_empty() || rest.starts_with(char::is_whitespace) => {
                let args = rest.trim();
                LineKind::SectionHeader {
                    kind,
                    args: (!args.is_empty()).then(|| args.to_string()),
                }
            }
            _ => LineKind::Ordinary,
        }
    }
}

/// Splits a `%name...` line into the directive name (including `%`) and the
/// text following it. Returns `None` for lines not starting with `%`.
pub(crate) fn split_directive(line: &str) -> Option<(&str, &str)> {
    let body = line.strip_prefix('%')?;
    let name_len = body
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(body.len());
    Some(line.split_at(1 + name_len))
}
