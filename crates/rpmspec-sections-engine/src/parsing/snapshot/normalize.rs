use serde::Serialize;

use crate::parsing::{
    args::{OptionGrammar, UnknownFlags},
    sections::SectionBlock,
};

#[derive(Debug, Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

#[derive(Debug, Serialize)]
pub struct BlockSnap {
    pub header: String,
    pub line: Option<usize>,
    pub args: String,
    pub body: Vec<String>,
}

/// Builds a compact view of `blocks`. Header arguments are rendered with the
/// rpm grammar as `positional [flag=value...]`, or `error: ...` when they
/// do not parse.
pub fn normalize(blocks: &[SectionBlock]) -> Snap {
    let blocks = blocks
        .iter()
        .map(|b| {
            let args = match b.parse_args(OptionGrammar::rpm(), UnknownFlags::Ignore) {
                Ok(parsed) => {
                    let mut parts = parsed.positional.clone();
                    for flag in parsed.options.keys() {
                        let values = parsed.values(flag);
                        if values.is_empty() {
                            parts.push(flag.clone());
                        } else {
                            parts.extend(values.iter().map(|v| format!("{flag}={v}")));
                        }
                    }
                    parts.join(" ")
                }
                Err(e) => format!("error: {e}"),
            };

            BlockSnap {
                header: b.header_line.clone(),
                line: b.line_number,
                args,
                body: b.body_lines().map(str::to_string).collect(),
            }
        })
        .collect();

    Snap { blocks }
}
