use super::{
    classify::{LineClass, LineKind},
    types::{BodyLine, SectionBlock},
};

/// Groups classified lines into section blocks.
///
/// Starts with the implicit preamble block open; every section header closes
/// the current block and opens a new one.
pub struct SectionBuilder {
    current: SectionBlock,
    out: Vec<SectionBlock>,
}

impl SectionBuilder {
    pub fn new() -> Self {
        Self {
            current: SectionBlock::preamble(),
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass) {
        match c.kind {
            LineKind::SectionHeader { kind, args } => {
                log::trace!("line {}: opening {kind} block", c.number);
                let next = SectionBlock::open(kind, c.text, c.number, args);
                let done = std::mem::replace(&mut self.current, next);
                self.out.push(done);
            }
            LineKind::Conditional | LineKind::Ordinary => {
                self.current.body.push(BodyLine {
                    number: c.number,
                    text: c.text,
                });
            }
        }
    }

    pub fn finish(mut self) -> Vec<SectionBlock> {
        // EOF flush
        self.out.push(self.current);
        self.out
    }
}

impl Default for SectionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
