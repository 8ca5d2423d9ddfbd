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

//! Recognizing declarations.
//!
//! The classifier looks at the first word of each line.  If it is `global`,
//! `public`, or `define` (in any case), the line is a declaration, which takes
//! one of these shapes:
//!
//! - `define Type name(...)`: a function `name`.  `Type` may be several words,
//!   with parenthesized groups, as in `define (Int, Int) swap(...)` or
//!   `define List(Maybe($T)) f(...)`.
//!
//! - `define macro Type name` or `define inline Type name`: also a function.
//!
//! - `define type Name`, `define type Name($T)`, or
//!   `define type Name: alt1, alt2(...), alt3.`: a type and its alternatives.
//!
//! - `public define ...`: the same shapes again after the second keyword.

use log::debug;
use unicase::UniCase;

use super::{LineState, ScanError, Scanner, class::AnubisChar};
use crate::tag::SymbolKind;

/// Returns true if `word` opens a declaration.
fn is_declaration_keyword(word: &str) -> bool {
    ["global", "public", "define"]
        .into_iter()
        .any(|keyword| UniCase::new(word) == UniCase::new(keyword))
}

/// The word after a declaration keyword.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Modifier {
    Macro,
    Inline,
    Define,
    Type,
    Other,
}

impl From<&str> for Modifier {
    fn from(word: &str) -> Self {
        match word {
            "macro" => Self::Macro,
            "inline" => Self::Inline,
            "define" => Self::Define,
            "type" => Self::Type,
            _ => Self::Other,
        }
    }
}

/// The outcome of looking for a type name after `type`.
enum TypeScan {
    /// A type definition was found and fully consumed.
    Defined,

    /// There was no type name.  The first significant character after `type`
    /// is included.
    NotType(Option<char>),
}

impl Scanner<'_> {
    /// Scans the whole source.
    pub fn run(mut self) {
        while let Some(c) = self.next() {
            if self.state == LineState::AtLineStart {
                if c.is_ascii_lowercase() {
                    self.read_while(c, char::is_keyword_char);
                    if is_declaration_keyword(&self.name) {
                        self.state = LineState::InLine;
                        self.declaration();
                        continue;
                    }
                }
                self.state = LineState::InLine;
            }
            if c == '\n' {
                self.state = LineState::AtLineStart;
            }
        }
    }

    /// Scans a declaration whose keyword has just been read.
    ///
    /// The rest of the declaration's last line is not examined for keywords.
    fn declaration(&mut self) {
        let keyword = self.name.clone();
        let mut c = self.skip_to_significant();
        let Some(first) = c else {
            debug!("{}: {}", self.file_label(), ScanError::PrematureEndOfInput);
            return;
        };
        self.read_while(first, char::is_keyword_char);
        match Modifier::from(self.name.as_str()) {
            Modifier::Macro | Modifier::Inline => c = self.skip_known_identifier(c),
            Modifier::Define => {
                c = self.skip_known_identifier(c);
                let Some(first) = c else {
                    debug!("{}: {}", self.file_label(), ScanError::PrematureEndOfInput);
                    return;
                };
                self.read_while(first, char::is_keyword_char);
                match Modifier::from(self.name.as_str()) {
                    Modifier::Macro | Modifier::Inline => c = self.skip_known_identifier(c),
                    Modifier::Type => match self.type_definition(c) {
                        TypeScan::Defined => return,
                        TypeScan::NotType(next) => c = next,
                    },
                    _ => (),
                }
            }
            Modifier::Type => match self.type_definition(c) {
                TypeScan::Defined => return,
                TypeScan::NotType(next) => c = next,
            },
            Modifier::Other => (),
        }
        if !self.function_definition(c) {
            debug!(
                "{}:{}: {}",
                self.file_label(),
                self.line(),
                ScanError::UnrecognizedDeclarationShape { keyword }
            );
        }
    }

    /// Returns `c`, the character after a declaration, to the source.  It is
    /// examined for a keyword only if it begins a line.
    fn resume_at(&mut self, c: char, line_start: bool) {
        self.push_back(c);
        if line_start {
            self.state = LineState::AtLineStart;
        }
    }

    /// Skips a return type that begins with `c` and emits a function tag for
    /// the name that follows it.  Returns true if a tag was emitted.
    fn function_definition(&mut self, mut c: Option<char>) -> bool {
        loop {
            if c == Some('(') && !self.skip_balanced('(', ')') {
                return false;
            }

            // Skip the rest of this word, including any groups within it.
            while c.is_some_and(|c| !c.is_space()) {
                c = self.next();
                if self.spliced() {
                    break;
                }
                if c == Some('(') && !self.skip_balanced('(', ')') {
                    return false;
                }
            }

            if c.is_some_and(char::is_blank) {
                c = self.skip_blanks();
            }
            if c != Some('(') {
                break;
            }
        }

        match self.fold_at_line_start(c) {
            (Some(first), _) if first.may_start_name() => {
                let line = self.read_while(first, char::may_continue_name);
                self.emit(SymbolKind::Function, line);
                true
            }
            (Some(other), line_start) => {
                self.resume_at(other, line_start);
                false
            }
            (None, _) => false,
        }
    }

    /// Scans a type definition, given the first character `c` of the word
    /// `type`.
    fn type_definition(&mut self, c: Option<char>) -> TypeScan {
        let c = self.skip_token(c);
        let first = match self.fold(c) {
            Some(first) if first.is_ascii_uppercase() => first,
            other => return TypeScan::NotType(other),
        };
        let line = self.read_while(first, char::may_continue_name);
        self.emit(SymbolKind::TypeDefinition, line);

        let next = self.next();
        let (mut c, mut line_start) = self.fold_at_line_start(next);
        if c == Some('(') {
            if !self.skip_balanced('(', ')') {
                return TypeScan::Defined;
            }
            let next = self.next();
            (c, line_start) = self.fold_at_line_start(next);
        }
        match c {
            Some(':') => self.alternatives(),
            Some(other) => self.resume_at(other, line_start),
            None => (),
        }
        TypeScan::Defined
    }

    /// Scans the alternatives of a type definition, which follow its `:`.
    fn alternatives(&mut self) {
        loop {
            let next = self.next();
            let first = match self.fold_at_line_start(next) {
                (Some(first), _) if first.is_ascii_lowercase() => first,
                (Some(other), line_start) => {
                    self.resume_at(other, line_start);
                    return;
                }
                (None, _) => return,
            };
            let line = self.read_while(first, char::may_continue_name);
            self.emit(SymbolKind::TypeAlternative, line);

            // Find the comma or period that ends this alternative.
            loop {
                match self.next() {
                    Some(',') => break,
                    Some('.') => return,
                    Some('(') => {
                        self.skip_balanced('(', ')');
                    }
                    Some(_) => (),
                    None => {
                        debug!("{}: {}", self.file_label(), ScanError::PrematureEndOfInput);
                        return;
                    }
                }
            }
        }
    }
}
