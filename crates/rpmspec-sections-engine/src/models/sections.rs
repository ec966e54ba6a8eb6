use std::path::{Path, PathBuf};

use crate::error::SpecError;
use crate::macros::MacroTable;
use crate::parsing::{
    args::{OptionGrammar, ParsedSectionArgs, UnknownFlags, parse_section_args},
    header::{SectionHeader, parse_header},
    sections::{SectionBlock, SectionKind},
};

use super::preamble::Preamble;

/// Which package a section header refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageRef {
    /// No name given: the main package.
    Main,
    /// `%files doc`: appended to the main package name.
    Suffix(String),
    /// `%files -n doc`: the full package name.
    Full(String),
}

impl PackageRef {
    fn from_args(args: &ParsedSectionArgs) -> Self {
        match args.positional.as_slice() {
            [] => PackageRef::Main,
            // Sections outside the grammar (%package) keep `-n` as a positional.
            [flag, name, ..] if flag == "-n" => PackageRef::Full(name.clone()),
            [name, ..] if args.flag("-n") => PackageRef::Full(name.clone()),
            [name, ..] => PackageRef::Suffix(name.clone()),
        }
    }

    /// The resolved package name given the main package's name.
    pub fn resolve(&self, main: Option<&str>) -> Option<String> {
        match self {
            PackageRef::Main => main.map(str::to_string),
            PackageRef::Suffix(suffix) => main.map(|m| format!("{m}-{suffix}")),
            PackageRef::Full(name) => Some(name.clone()),
        }
    }
}

/// The section blocks of one spec file with the settings used to read their headers.
#[derive(Debug, Clone)]
pub struct SpecSections {
    path: PathBuf,
    blocks: Vec<SectionBlock>,
    grammar: OptionGrammar,
    policy: UnknownFlags,
}

impl SpecSections {
    pub fn new(path: impl Into<PathBuf>, blocks: Vec<SectionBlock>) -> Self {
        Self {
            path: path.into(),
            blocks,
            grammar: OptionGrammar::default(),
            policy: UnknownFlags::default(),
        }
    }

    pub fn with_policy(mut self, policy: UnknownFlags) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_grammar(mut self, grammar: OptionGrammar) -> Self {
        self.grammar = grammar;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn blocks(&self) -> &[SectionBlock] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<SectionBlock> {
        self.blocks
    }

    /// Tags of the main package, taken from the leading preamble block.
    pub fn preamble(&self) -> Preamble {
        self.blocks
            .first()
            .map(Preamble::from_block)
            .unwrap_or_default()
    }

    /// Macros defined by the main preamble (`%{name}`, `%{version}`, ...).
    pub fn macros(&self) -> MacroTable {
        MacroTable::from_preamble(&self.preamble())
    }

    pub fn main_package_name(&self) -> Option<String> {
        self.macros().get("name").map(str::to_string)
    }

    /// Re-parses a block's header line into name and arguments.
    pub fn header(&self, block: &SectionBlock) -> Result<SectionHeader, SpecError> {
        if block.is_synthetic() {
            return Ok(SectionHeader {
                kind: block.kind,
                args: None,
            });
        }
        parse_header(&block.header_line).map_err(|source| SpecError::InvalidSpec {
            path: self.path.clone(),
            line: block.line_number,
            text: block.header_line.clone(),
            source,
        })
    }

    /// Parses a block's header arguments with this file's grammar and policy.
    pub fn args(&self, block: &SectionBlock) -> Result<ParsedSectionArgs, SpecError> {
        block
            .parse_args(&self.grammar, self.policy)
            .map_err(|source| SpecError::InvalidArguments {
                path: self.path.clone(),
                section: block.section_name().to_string(),
                line: block.line_number,
                source,
            })
    }

    pub fn package_ref(
        &self,
        block: &SectionBlock,
        macros: &MacroTable,
    ) -> Result<PackageRef, SpecError> {
        Ok(PackageRef::from_args(&self.args(block)?.expand(macros)))
    }

    /// The package a block belongs to, or `None` when the main package has no `Name:`.
    pub fn package_name(
        &self,
        block: &SectionBlock,
        macros: &MacroTable,
    ) -> Result<Option<String>, SpecError> {
        let main = macros.get("name");
        Ok(self.package_ref(block, macros)?.resolve(main))
    }

    /// Blocks of `kind` with their package refs, in file order.
    ///
    /// A block whose header arguments don't parse is left out; the first such
    /// error is returned alongside so a lookup that finds nothing can report it.
    fn package_refs(
        &self,
        kind: SectionKind,
        macros: &MacroTable,
    ) -> (Vec<(&SectionBlock, PackageRef)>, Option<SpecError>) {
        let mut refs = Vec::new();
        let mut failed = None;
        for block in self.blocks.iter().filter(|b| b.kind == kind) {
            match self.package_ref(block, macros) {
                Ok(package) => refs.push((block, package)),
                Err(e) => {
                    failed.get_or_insert(e);
                }
            }
        }
        (refs, failed)
    }

    fn first_match<'a>(
        (refs, failed): (Vec<(&'a SectionBlock, PackageRef)>, Option<SpecError>),
        pick: impl Fn(&[(&'a SectionBlock, PackageRef)]) -> Option<&'a SectionBlock>,
    ) -> Result<Option<&'a SectionBlock>, SpecError> {
        match (pick(&refs), failed) {
            (Some(block), _) => Ok(Some(block)),
            (None, Some(e)) => Err(e),
            (None, None) => Ok(None),
        }
    }

    /// First block of `kind` for `package`.
    ///
    /// `None` selects the main package. A subpackage is named by its full
    /// name (`foo-doc`); a bare suffix (`doc`) selects a suffix-named section
    /// only when no package has that full name.
    pub fn find(
        &self,
        kind: SectionKind,
        package: Option<&str>,
        macros: &MacroTable,
    ) -> Result<Option<&SectionBlock>, SpecError> {
        let main = macros.get("name");
        Self::first_match(self.package_refs(kind, macros), |refs| {
            let hit = match package {
                None => refs.iter().find(|(_, r)| *r == PackageRef::Main),
                Some(wanted) => refs
                    .iter()
                    .find(|(_, r)| r.resolve(main).as_deref() == Some(wanted))
                    .or_else(|| {
                        refs.iter()
                            .find(|(_, r)| matches!(r, PackageRef::Suffix(s) if s == wanted))
                    }),
            };
            hit.map(|(block, _)| *block)
        })
    }

    /// Finds the block a header such as `%files -n foo-doc` refers to.
    ///
    /// `%files -n doc` and `%files doc` name different packages; a header
    /// only matches blocks that resolve to the same package.
    pub fn find_header(
        &self,
        text: &str,
        macros: &MacroTable,
    ) -> Result<Option<&SectionBlock>, SpecError> {
        let header = parse_header(text).map_err(|source| SpecError::InvalidSpec {
            path: self.path.clone(),
            line: None,
            text: text.trim().to_string(),
            source,
        })?;
        let args = parse_section_args(
            header.section_name(),
            header.args.as_deref(),
            &self.grammar,
            self.policy,
        )
        .map_err(|source| SpecError::InvalidArguments {
            path: self.path.clone(),
            section: header.section_name().to_string(),
            line: None,
            source,
        })?;

        let wanted = PackageRef::from_args(&args.expand(macros));
        let main = macros.get("name");
        let wanted_name = wanted.resolve(main);
        Self::first_match(self.package_refs(header.kind, macros), |refs| {
            refs.iter()
                .find(|(_, r)| *r == wanted)
                .or_else(|| {
                    let name = wanted_name.as_deref()?;
                    refs.iter()
                        .find(|(_, r)| r.resolve(main).as_deref() == Some(name))
                })
                .map(|(block, _)| *block)
        })
    }

    /// The macro-expanded `%files` body for `package`.
    pub fn files(
        &self,
        package: Option<&str>,
        macros: &MacroTable,
    ) -> Result<Option<Vec<String>>, SpecError> {
        let Some(block) = self.find(SectionKind::Files, package, macros)? else {
            return Ok(None);
        };
        Ok(Some(block.body_lines().map(|l| macros.expand(l)).collect()))
    }

    /// The `-f` file lists named by the `%files` header for `package`.
    pub fn file_lists(
        &self,
        package: Option<&str>,
        macros: &MacroTable,
    ) -> Result<Vec<String>, SpecError> {
        let Some(block) = self.find(SectionKind::Files, package, macros)? else {
            return Ok(Vec::new());
        };
        Ok(self.args(block)?.expand(macros).values("-f").to_vec())
    }

    /// The interpreter a scriptlet runs under, as given by `-p`.
    ///
    /// `None` when the scriptlet is missing, has no `-p`, or `kind` is not a scriptlet.
    pub fn script_program(
        &self,
        kind: SectionKind,
        package: Option<&str>,
        macros: &MacroTable,
    ) -> Result<Option<String>, SpecError> {
        if !kind.is_scriptlet() {
            return Ok(None);
        }
        let Some(block) = self.find(kind, package, macros)? else {
            return Ok(None);
        };
        Ok(self
            .args(block)?
            .expand(macros)
            .value("-p")
            .map(str::to_string))
    }
}
