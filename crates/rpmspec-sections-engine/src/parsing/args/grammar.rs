/// How many values an option takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// A switch; its presence is the value.
    NoValue,
    /// Consumes the following token. A later occurrence replaces an earlier one.
    SingleValue,
    /// Consumes the following token. Occurrences accumulate in order.
    RepeatableValue,
}

/// How many positional arguments a section takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Positional {
    /// At most one, the subpackage name.
    Bare,
    /// Any number.
    Repeatable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub flag: &'static str,
    pub arity: Arity,
}

impl OptionSpec {
    pub const fn new(flag: &'static str, arity: Arity) -> Self {
        Self { flag, arity }
    }
}

/// The options recognized by one or more sections.
#[derive(Debug, Clone, Copy)]
pub struct SectionGrammar {
    pub sections: &'static [&'static str],
    pub options: &'static [OptionSpec],
    pub positional: Positional,
}

impl SectionGrammar {
    pub fn option(&self, token: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.flag == token)
    }
}

/// A static table from section name to the options it accepts.
///
/// Sections missing from the table accept no options; all their argument
/// tokens are positional.
#[derive(Debug, Clone, Copy)]
pub struct OptionGrammar {
    entries: &'static [SectionGrammar],
}

const NAME_ONLY: &[OptionSpec] = &[OptionSpec::new("-n", Arity::NoValue)];

const FILES: &[OptionSpec] = &[
    OptionSpec::new("-f", Arity::RepeatableValue),
    OptionSpec::new("-n", Arity::NoValue),
];

const SCRIPTLET: &[OptionSpec] = &[
    OptionSpec::new("-p", Arity::SingleValue),
    OptionSpec::new("-n", Arity::NoValue),
];

/// The option letters rpm spec sections understand.
pub static RPM_GRAMMAR: OptionGrammar = OptionGrammar::new(&[
    SectionGrammar {
        sections: &["%description", "%changelog"],
        options: NAME_ONLY,
        positional: Positional::Bare,
    },
    SectionGrammar {
        sections: &["%files"],
        options: FILES,
        positional: Positional::Bare,
    },
    SectionGrammar {
        sections: &["%pre", "%post", "%preun", "%postun"],
        options: SCRIPTLET,
        positional: Positional::Bare,
    },
]);

impl OptionGrammar {
    pub const fn new(entries: &'static [SectionGrammar]) -> Self {
        Self { entries }
    }

    pub fn rpm() -> &'static Self {
        &RPM_GRAMMAR
    }

    pub fn lookup(&self, section: &str) -> Option<&SectionGrammar> {
        self.entries.iter().find(|e| e.sections.contains(&section))
    }
}

impl Default for OptionGrammar {
    fn default() -> Self {
        RPM_GRAMMAR
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::parsing::args::{ArgsError, UnknownFlags, parse_section_args};

    #[rstest]
    #[case("%build")]
    #[case("%install")]
    #[case("%prep")]
    #[case("%clean")]
    #[case("%check")]
    #[case("%package")]
    #[case("%verifyscript")]
    fn sections_without_options(#[case] section: &str) {
        assert!(OptionGrammar::rpm().lookup(section).is_none());
    }

    #[test]
    fn files_options() {
        let files = OptionGrammar::rpm().lookup("%files").unwrap();
        assert_eq!(files.option("-f").unwrap().arity, Arity::RepeatableValue);
        assert_eq!(files.option("-n").unwrap().arity, Arity::NoValue);
        assert!(files.option("-p").is_none());
    }

    #[rstest]
    #[case("%pre")]
    #[case("%post")]
    #[case("%preun")]
    #[case("%postun")]
    fn scriptlet_options(#[case] section: &str) {
        let grammar = OptionGrammar::rpm().lookup(section).unwrap();
        assert_eq!(grammar.option("-p").unwrap().arity, Arity::SingleValue);
        assert_eq!(grammar.option("-n").unwrap().arity, Arity::NoValue);
        assert_eq!(grammar.positional, Positional::Bare);
    }

    static LISTS: OptionGrammar = OptionGrammar::new(&[
        SectionGrammar {
            sections: &["%files"],
            options: FILES,
            positional: Positional::Repeatable,
        },
        SectionGrammar {
            sections: &["%description"],
            options: NAME_ONLY,
            positional: Positional::Bare,
        },
    ]);

    #[test]
    fn repeatable_positionals_survive_strict_parsing() {
        let parsed =
            parse_section_args("%files", Some("a -f x.list b c"), &LISTS, UnknownFlags::Reject)
                .unwrap();
        assert_eq!(parsed.positional, vec!["a", "b", "c"]);
        assert_eq!(parsed.values("-f"), ["x.list"]);

        let err = parse_section_args("%description", Some("a b"), &LISTS, UnknownFlags::Reject)
            .unwrap_err();
        assert_eq!(err, ArgsError::TooManyPositionals { token: "b".into() });
    }

    #[test]
    fn custom_grammar_replaces_the_rpm_table() {
        assert_eq!(LISTS.lookup("%files").unwrap().positional, Positional::Repeatable);
        assert!(LISTS.lookup("%post").is_none());

        // Without an entry every token is positional.
        let parsed =
            parse_section_args("%post", Some("-p /bin/sh"), &LISTS, UnknownFlags::Reject).unwrap();
        assert_eq!(parsed.positional, vec!["-p", "/bin/sh"]);
        assert!(parsed.options.is_empty());
    }

    #[test]
    fn description_and_changelog_take_name_switch() {
        for section in ["%description", "%changelog"] {
            let grammar = OptionGrammar::rpm().lookup(section).unwrap();
            assert_eq!(grammar.options, NAME_ONLY);
        }
    }
}
