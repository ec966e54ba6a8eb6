pub mod args;
pub mod header;
pub mod lines;
pub mod sections;
pub mod snapshot;

#[cfg(test)]
mod tests;

use lines::significant_lines;
use sections::{SectionBlock, SectionBuilder, SpecLineClassifier};

/// Splits spec file lines into ordered section blocks.
///
/// Never fails and never returns an empty list: the first block is always the
/// implicit `%package` preamble.
pub fn partition<I, S>(lines: I) -> Vec<SectionBlock>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let classifier = SpecLineClassifier;
    let mut builder = SectionBuilder::new();

    for lr in significant_lines(lines) {
        builder.push(classifier.classify(&lr));
    }

    let blocks = builder.finish();
    log::debug!("partitioned spec into {} section blocks", blocks.len());
    blocks
}

/// Convenience: [`partition`] over a whole file's text.
pub fn partition_str(text: &str) -> Vec<SectionBlock> {
    partition(text.lines())
}
