use crate::parsing::{
    header::parse_header,
    lines::significant_lines,
    sections::{SectionBlock, SectionKind},
};

/// Validates partitioner output invariants against the input it came from.
///
/// Asserts that:
/// - There is at least one block and the first is the synthetic `%package` block
/// - Only the first block is synthetic
/// - Every other header parses as a `%name [args]` header of its own kind
/// - Header and body lines of all blocks, in order, are the significant input lines
/// - Line numbers increase strictly through the output
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check<I, S>(input: I, blocks: &[SectionBlock])
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let first = blocks.first().expect("partition produced no blocks");
    assert!(
        first.is_synthetic() && first.kind == SectionKind::Package,
        "first block is not the synthetic preamble: {first:?}"
    );

    for b in &blocks[1..] {
        assert!(!b.is_synthetic(), "synthetic block after the first: {b:?}");
        let header = parse_header(&b.header_line)
            .unwrap_or_else(|e| panic!("header {:?} does not parse: {e}", b.header_line));
        assert_eq!(header.kind, b.kind, "header kind mismatch for {:?}", b.header_line);
        assert_eq!(header.args, b.raw_args, "header args mismatch for {:?}", b.header_line);
    }

    let expected: Vec<String> = significant_lines(input).map(|l| l.text).collect();
    let actual: Vec<&str> = blocks.iter().flat_map(|b| b.source_lines()).collect();
    assert_eq!(actual, expected, "blocks do not reproduce the input lines");

    let numbers: Vec<usize> = blocks
        .iter()
        .flat_map(|b| b.line_number.into_iter().chain(b.body.iter().map(|l| l.number)))
        .collect();
    assert!(
        numbers.windows(2).all(|w| w[0] < w[1]),
        "line numbers out of order: {numbers:?}"
    );
}
