//! Partitioning tests over whole inputs.
//!
//! Fixtures (.spec) live in `fixtures/`; expected layouts are inline `insta`
//! snapshots of the normalized `Snap` form.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    args::{ArgsError, OptionGrammar, UnknownFlags},
    partition, partition_str,
    sections::{SectionBlock, SectionKind, SpecLineClassifier},
    snapshot,
};

fn read_fixture(name: &str) -> String {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(format!("{fixtures_dir}/{name}.spec")).unwrap()
}

fn layout(blocks: &[SectionBlock]) -> Vec<(String, Vec<String>)> {
    blocks
        .iter()
        .map(|b| {
            (
                b.header_line.clone(),
                b.body_lines().map(str::to_string).collect(),
            )
        })
        .collect()
}

#[test]
fn fixture_edge_cases() {
    let text = read_fixture("edge_cases");
    let blocks = partition_str(&text);
    snapshot::invariants(text.lines(), &blocks);

    insta::assert_debug_snapshot!(snapshot::normalize(&blocks), @r#"
    Snap {
        blocks: [
            BlockSnap {
                header: "%package",
                line: None,
                args: "",
                body: [],
            },
            BlockSnap {
                header: "%build",
                line: Some(
                    1,
                ),
                args: "",
                body: [],
            },
            BlockSnap {
                header: "%install",
                line: Some(
                    2,
                ),
                args: "",
                body: [
                    "%files(doc)",
                    "%filesystem",
                ],
            },
            BlockSnap {
                header: "%pre -p",
                line: Some(
                    5,
                ),
                args: "error: option -p requires a value",
                body: [],
            },
            BlockSnap {
                header: "%post   -n   foo   -x   bar",
                line: Some(
                    6,
                ),
                args: "foo bar -n",
                body: [],
            },
            BlockSnap {
                header: "%verifyscript",
                line: Some(
                    9,
                ),
                args: "",
                body: [
                    "%endif",
                ],
            },
        ],
    }
    "#);
}

#[rstest]
#[case("")]
#[case("\n\n\n")]
#[case("# only a comment\n")]
#[case("Name: foo\nVersion: 1\n")]
#[case("%build\nmake\n%install")]
#[case("%files\n%files\n%files doc\n")]
#[case("  %description -n foo  \n  text  \r\n%changelog\n* entry\n")]
#[case("%if 1\n%build\n%else\n%install\n%endif\n")]
#[case("%{?foo}\n%%\n%\n%files(x)\n%pre -p\n")]
fn invariants_hold(#[case] text: &str) {
    let blocks = partition_str(text);
    snapshot::invariants(text.lines(), &blocks);
}

/// Test empty input produces only the preamble block.
#[test]
fn empty_input() {
    let blocks = partition_str("");
    assert_eq!(blocks, vec![SectionBlock::preamble()]);
}

/// Test input without any header keeps everything in the preamble.
#[test]
fn no_headers_single_block() {
    let blocks = partition_str("Name: foo\n%setup -q\nmake\n");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].section_name(), "%package");
    assert_eq!(
        blocks[0].body_lines().collect::<Vec<_>>(),
        vec!["Name: foo", "%setup -q", "make"]
    );
}

#[test]
fn unrecognized_directives_stay_in_body() {
    let blocks = partition_str("%build\nmake\n%install");

    assert_eq!(
        layout(&blocks),
        vec![
            ("%package".to_string(), vec![]),
            ("%build".to_string(), vec!["make".to_string()]),
            ("%install".to_string(), vec![]),
        ]
    );
}

#[test]
fn consecutive_headers_give_empty_body() {
    let blocks = partition_str("%check\n%clean\n");
    assert_eq!(blocks[1].kind, SectionKind::Check);
    assert!(blocks[1].body.is_empty());
    assert_eq!(blocks[2].kind, SectionKind::Clean);
}

#[test]
fn header_keeps_original_text() {
    let blocks = partition_str("   %files   -n   foo-doc   ");
    assert_eq!(blocks[1].header_line, "%files   -n   foo-doc");
    assert_eq!(blocks[1].raw_args(), Some("-n   foo-doc"));
}

#[test]
fn stripping_does_not_change_layout() {
    let stripped = "Name: foo\n%build\nmake\n%if 0\n%files doc\n%endif\n%post -p /bin/sh\n";
    let padded: String = stripped
        .lines()
        .map(|l| format!("\n \t{l}  \r\n   \n# noise\n"))
        .collect();

    assert_eq!(
        layout(&partition_str(&padded)),
        layout(&partition_str(stripped))
    );
}

#[test]
fn partition_accepts_owned_and_borrowed_lines() {
    let owned: Vec<String> = vec!["%build".into(), "make".into()];
    let borrowed = ["%build", "make"];
    assert_eq!(partition(&owned), partition(borrowed));
}

#[test]
fn classifier_is_total() {
    let inputs = [
        "", " ", "%", "%%", "%%build", "%if", "%iffy", "%élan", "%build\u{a0}x", "%files\t",
        "%{", "%(echo)", "%_", "\u{0}", "%post-p", "ünïcödé",
    ];
    for input in inputs {
        // Every string classifies without panicking.
        let _ = SpecLineClassifier::kind_of(input);
    }
}

#[test]
fn missing_value_surfaces_from_block() {
    let blocks = partition_str("%pre -p");
    let err = blocks[1]
        .parse_args(OptionGrammar::rpm(), UnknownFlags::Ignore)
        .unwrap_err();
    assert_eq!(err, ArgsError::MissingValue { flag: "-p".into() });
}
