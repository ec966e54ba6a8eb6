use std::fmt;

use serde::{Serialize, Serializer};

/// A section name that opens a new block when it starts a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKind {
    Package,
    Description,
    Prep,
    Build,
    Install,
    Check,
    Clean,
    Files,
    Changelog,
    Pre,
    Post,
    Preun,
    Postun,
    Verifyscript,
}

impl SectionKind {
    pub const ALL: [SectionKind; 14] = [
        SectionKind::Package,
        SectionKind::Description,
        SectionKind::Prep,
        SectionKind::Build,
        SectionKind::Install,
        SectionKind::Check,
        SectionKind::Clean,
        SectionKind::Files,
        SectionKind::Changelog,
        SectionKind::Pre,
        SectionKind::Post,
        SectionKind::Preun,
        SectionKind::Postun,
        SectionKind::Verifyscript,
    ];

    /// Looks up a section by its exact directive name, including the `%`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Package => "%package",
            SectionKind::Description => "%description",
            SectionKind::Prep => "%prep",
            SectionKind::Build => "%build",
            SectionKind::Install => "%install",
            SectionKind::Check => "%check",
            SectionKind::Clean => "%clean",
            SectionKind::Files => "%files",
            SectionKind::Changelog => "%changelog",
            SectionKind::Pre => "%pre",
            SectionKind::Post => "%post",
            SectionKind::Preun => "%preun",
            SectionKind::Postun => "%postun",
            SectionKind::Verifyscript => "%verifyscript",
        }
    }

    /// Install-time scriptlets, which may name their interpreter with `-p`.
    pub fn is_scriptlet(self) -> bool {
        matches!(
            self,
            SectionKind::Pre | SectionKind::Post | SectionKind::Preun | SectionKind::Postun
        )
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SectionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in SectionKind::ALL {
            assert_eq!(SectionKind::from_name(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(SectionKind::from_name("%setup"), None);
        assert_eq!(SectionKind::from_name("files"), None);
        assert_eq!(SectionKind::from_name("%FILES"), None);
        assert_eq!(SectionKind::from_name("%filesystem"), None);
    }

    #[test]
    fn scriptlets() {
        assert!(SectionKind::Post.is_scriptlet());
        assert!(SectionKind::Preun.is_scriptlet());
        assert!(!SectionKind::Verifyscript.is_scriptlet());
        assert!(!SectionKind::Files.is_scriptlet());
    }
}
