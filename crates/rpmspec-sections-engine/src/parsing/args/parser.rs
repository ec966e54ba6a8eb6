use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::macros::MacroTable;

use super::grammar::{Arity, OptionGrammar, Positional};

/// What to do with a dash-prefixed token a section's grammar does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownFlags {
    /// Drop the token silently.
    #[default]
    Ignore,
    /// Fail with [`ArgsError::UnknownFlag`]. Also rejects a second positional
    /// for sections that take a single name.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("option {flag} requires a value")]
    MissingValue { flag: String },
    #[error("unknown option {flag}")]
    UnknownFlag { flag: String },
    #[error("unexpected argument {token}")]
    TooManyPositionals { token: String },
}

/// The value recorded for an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Present,
    Single(String),
    Multiple(Vec<String>),
}

impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OptionValue::Present => serializer.serialize_bool(true),
            OptionValue::Single(value) => serializer.serialize_str(value),
            OptionValue::Multiple(values) => values.serialize(serializer),
        }
    }
}

/// Structured view of a section header's arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedSectionArgs {
    /// Non-option tokens in order. Macro references are left unexpanded.
    pub positional: Vec<String>,
    /// Option flag (e.g. `-f`) to its value.
    pub options: BTreeMap<String, OptionValue>,
}

impl ParsedSectionArgs {
    /// Whether `flag` was given, with or without a value.
    pub fn flag(&self, flag: &str) -> bool {
        self.options.contains_key(flag)
    }

    /// The value of a single-value option. For a repeatable option this is
    /// the last occurrence.
    pub fn value(&self, flag: &str) -> Option<&str> {
        match self.options.get(flag)? {
            OptionValue::Present => None,
            OptionValue::Single(value) => Some(value),
            OptionValue::Multiple(values) => values.last().map(String::as_str),
        }
    }

    /// All values given for `flag`, in order.
    pub fn values(&self, flag: &str) -> &[String] {
        match self.options.get(flag) {
            Some(OptionValue::Single(value)) => std::slice::from_ref(value),
            Some(OptionValue::Multiple(values)) => values,
            Some(OptionValue::Present) | None => &[],
        }
    }

    /// The first positional argument, which names the subpackage.
    pub fn subpackage(&self) -> Option<&str> {
        self.positional.first().map(String::as_str)
    }

    /// Returns a copy with positionals and option values macro-expanded.
    pub fn expand(&self, macros: &MacroTable) -> Self {
        let positional = self.positional.iter().map(|p| macros.expand(p)).collect();
        let options = self
            .options
            .iter()
            .map(|(flag, value)| {
                let value = match value {
                    OptionValue::Present => OptionValue::Present,
                    OptionValue::Single(v) => OptionValue::Single(macros.expand(v)),
                    OptionValue::Multiple(vs) => {
                        OptionValue::Multiple(vs.iter().map(|v| macros.expand(v)).collect())
                    }
                };
                (flag.clone(), value)
            })
            .collect();
        Self {
            positional,
            options,
        }
    }

    fn record(&mut self, flag: &str, value: &str, arity: Arity) {
        match arity {
            Arity::NoValue => {
                self.options.insert(flag.to_string(), OptionValue::Present);
            }
            Arity::SingleValue => {
                self.options
                    .insert(flag.to_string(), OptionValue::Single(value.to_string()));
            }
            Arity::RepeatableValue => {
                let entry = self
                    .options
                    .entry(flag.to_string())
                    .or_insert_with(|| OptionValue::Multiple(Vec::new()));
                if let OptionValue::Multiple(values) = entry {
                    values.push(value.to_string());
                }
            }
        }
    }
}

/// Parses the argument text of a section header.
///
/// Tokens are split on whitespace runs with no quoting. Value-taking options
/// consume the next token whatever it looks like.
pub fn parse_section_args(
    section: &str,
    args: Option<&str>,
    grammar: &OptionGrammar,
    policy: UnknownFlags,
) -> Result<ParsedSectionArgs, ArgsError> {
    let mut parsed = ParsedSectionArgs::default();
    let Some(args) = args else {
        return Ok(parsed);
    };
    let mut tokens = args.split_whitespace();

    let Some(rules) = grammar.lookup(section) else {
        parsed.positional = tokens.map(str::to_string).collect();
        return Ok(parsed);
    };

    while let Some(token) = tokens.next() {
        match rules.option(token).map(|o| o.arity) {
            Some(Arity::NoValue) => parsed.record(token, "", Arity::NoValue),
            Some(arity) => {
                let value = tokens.next().ok_or_else(|| ArgsError::MissingValue {
                    flag: token.to_string(),
                })?;
                parsed.record(token, value, arity);
            }
            None if token.starts_with('-') => match policy {
                UnknownFlags::Ignore => log::debug!("{section}: ignoring unknown option {token}"),
                UnknownFlags::Reject => {
                    return Err(ArgsError::UnknownFlag {
                        flag: token.to_string(),
                    });
                }
            },
            None => {
                if policy == UnknownFlags::Reject
                    && rules.positional == Positional::Bare
                    && !parsed.positional.is_empty()
                {
                    return Err(ArgsError::TooManyPositionals {
                        token: token.to_string(),
                    });
                }
                parsed.positional.push(token.to_string());
            }
        }
    }

    Ok(parsed)
}
