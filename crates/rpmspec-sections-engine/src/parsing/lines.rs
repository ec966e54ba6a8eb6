/// A single significant line of a spec file with its physical position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRef {
    /// 1-based physical line number in the source.
    pub number: usize,
    /// The line text with surrounding whitespace stripped.
    pub text: String,
}

/// Returns an iterator over the lines that take part in partitioning.
///
/// Each line is trimmed; blank lines and `#` comments are dropped here, before
/// classification, but still count towards the physical line numbers.
pub fn significant_lines<I, S>(lines: I) -> impl Iterator<Item = LineRef>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().enumerate().filter_map(|(idx, line)| {
        let text = line.as_ref().trim();
        if text.is_empty() || text.starts_with('#') {
            return None;
        }
        Some(LineRef {
            number: idx + 1,
            text: text.to_string(),
        })
    })
}
