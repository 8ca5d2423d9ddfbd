// anutags - a symbol indexer for Anubis source files.
// Copyright (C) 2025 Free Software Foundation, Inc.
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later
// version.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// this program.  If not, see <http://www.gnu.org/licenses/>.

//! How the Anubis scanner presents itself to an indexing host.

use std::path::Path;

use crate::{
    message::Diagnostic,
    scan::scan,
    source::CharSource,
    tag::{SymbolKind, Tag},
};

/// Receives the output of a scan.
pub trait TagSink {
    /// Records `tag`.  Tags arrive in the order in which their names appear in
    /// the source.
    fn tag(&mut self, tag: Tag);

    /// Reports an advisory `diagnostic`.  The default implementation logs it.
    fn diagnostic(&mut self, diagnostic: Diagnostic) {
        log::log!(diagnostic.severity.log_level(), "{diagnostic}");
    }
}

impl TagSink for Vec<Tag> {
    fn tag(&mut self, tag: Tag) {
        self.push(tag);
    }
}

/// A [TagSink] that keeps everything it receives.
#[derive(Debug, Default)]
pub struct Collected {
    pub tags: Vec<Tag>,
    pub diagnostics: Vec<Diagnostic>,
}

impl TagSink for Collected {
    fn tag(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    fn diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// A kind of symbol that a parser can report.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KindDefinition {
    pub kind: SymbolKind,

    /// Whether tags of this kind are written by default.
    pub enabled: bool,
}

impl KindDefinition {
    pub fn letter(&self) -> char {
        self.kind.letter()
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn description(&self) -> &'static str {
        self.kind.description()
    }
}

/// Everything a host needs to know to run a parser.
pub struct ParserDefinition {
    /// The language name.
    pub name: &'static str,

    /// The kinds of tags the parser emits.
    pub kinds: &'static [KindDefinition],

    /// File name extensions, without the leading dot, of files in the
    /// parser's language.
    pub extensions: &'static [&'static str],

    /// Scans one file from beginning to end.
    pub parser: fn(&mut dyn CharSource, &mut dyn TagSink),
}

impl ParserDefinition {
    /// Returns true if `path` has one of this parser's extensions.
    pub fn claims(&self, path: &Path) -> bool {
        has_extension(path, self.extensions)
    }

    pub fn parse(&self, source: &mut dyn CharSource, sink: &mut dyn TagSink) {
        (self.parser)(source, sink)
    }
}

/// Returns true if the extension of `path` is exactly one of `extensions`.
pub fn has_extension<S>(path: &Path, extensions: &[S]) -> bool
where
    S: AsRef<str>,
{
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            extensions
                .iter()
                .any(|candidate| candidate.as_ref() == extension)
        })
}

pub static ANUBIS_KINDS: [KindDefinition; 3] = [
    KindDefinition {
        kind: SymbolKind::Function,
        enabled: true,
    },
    KindDefinition {
        kind: SymbolKind::TypeDefinition,
        enabled: true,
    },
    KindDefinition {
        kind: SymbolKind::TypeAlternative,
        enabled: true,
    },
];

pub static ANUBIS: ParserDefinition = ParserDefinition {
    name: "Anubis",
    kinds: &ANUBIS_KINDS,
    extensions: &["anubis"],
    parser: scan,
};

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::{source::StringSource, tag::Tag};

    use super::{ANUBIS, Collected, has_extension};

    #[test]
    fn claims() {
        assert!(ANUBIS.claims(Path::new("library/tools/basis.anubis")));
        assert!(!ANUBIS.claims(Path::new("basis.ANUBIS")));
        assert!(!ANUBIS.claims(Path::new("basis.anubis.bak")));
        assert!(!ANUBIS.claims(Path::new("anubis")));
        assert!(has_extension(Path::new("x.anb"), &["anubis", "anb"]));
    }

    #[test]
    fn kinds() {
        let letters = ANUBIS
            .kinds
            .iter()
            .map(|kind| kind.letter())
            .collect::<String>();
        assert_eq!(letters, "fta");
        assert!(ANUBIS.kinds.iter().all(|kind| kind.enabled));
    }

    #[test]
    fn parse() {
        let mut collected = Collected::default();
        ANUBIS.parse(
            &mut StringSource::new("define type Unit: unit.\n"),
            &mut collected,
        );
        assert_eq!(
            collected.tags,
            vec![
                Tag::new("Unit", crate::tag::SymbolKind::TypeDefinition, 1),
                Tag::new("unit", crate::tag::SymbolKind::TypeAlternative, 1),
            ]
        );
    }
}
