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

//! Symbols discovered in Anubis source.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use enum_iterator::Sequence;
use enum_map::Enum;
use serde::Serialize;
use thiserror::Error as ThisError;

/// The kind of a symbol definition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Enum, Sequence, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    /// `define Type name(...)`.
    Function,

    /// `define type Name ...`.
    TypeDefinition,

    /// A named alternative listed after the `:` of a type definition.
    TypeAlternative,
}

impl SymbolKind {
    /// Returns the single-letter code that identifies this kind in tag files.
    pub fn letter(self) -> char {
        match self {
            SymbolKind::Function => 'f',
            SymbolKind::TypeDefinition => 't',
            SymbolKind::TypeAlternative => 'a',
        }
    }

    /// Returns the short name of this kind, as used in extended tag fields.
    pub fn name(self) -> &'static str {
        match self {
            SymbolKind::Function => "function",
            SymbolKind::TypeDefinition => "typedef",
            SymbolKind::TypeAlternative => "alternative",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SymbolKind::Function => "function definitions",
            SymbolKind::TypeDefinition => "type definitions",
            SymbolKind::TypeAlternative => "type alternatives",
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        enum_iterator::all::<Self>().find(|kind| kind.letter() == letter)
    }
}

impl Display for SymbolKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.name())
    }
}

#[derive(Clone, Debug, ThisError, PartialEq, Eq)]
#[error("{0:?} is not a symbol kind (expected one of `f`, `t`, `a` or a kind name).")]
pub struct UnknownKindError(pub String);

impl FromStr for SymbolKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(kind) = Self::from_letter(c) {
                return Ok(kind);
            }
        }
        enum_iterator::all::<Self>()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownKindError(s.into()))
    }
}

/// A discovered symbol definition.
///
/// Tags are emitted once, in the order their names appear in the source, and
/// never revised afterward.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Tag {
    pub name: String,
    pub kind: SymbolKind,

    /// 1-based line number on which `name` appears.
    pub line: u32,
}

impl Tag {
    pub fn new(name: impl Into<String>, kind: SymbolKind, line: u32) -> Self {
        Self {
            name: name.into(),
            kind,
            line,
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {} {}", self.kind.letter(), self.line, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::{SymbolKind, UnknownKindError};

    #[test]
    fn letters_round_trip() {
        for kind in enum_iterator::all::<SymbolKind>() {
            assert_eq!(SymbolKind::from_letter(kind.letter()), Some(kind));
        }
        assert_eq!(SymbolKind::from_letter('x'), None);
    }

    #[test]
    fn parse_kind() {
        assert_eq!("f".parse(), Ok(SymbolKind::Function));
        assert_eq!("typedef".parse(), Ok(SymbolKind::TypeDefinition));
        assert_eq!("Alternative".parse(), Ok(SymbolKind::TypeAlternative));
        assert_eq!(
            "macro".parse::<SymbolKind>(),
            Err(UnknownKindError(String::from("macro")))
        );
    }
}
