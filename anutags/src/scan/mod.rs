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

//! Anubis declaration scanning.
//!
//! The scanner makes a single pass over a source file, one character at a
//! time, and emits a [Tag] for each function definition, type definition, and
//! type alternative that it recognizes.  It does not parse Anubis: it only
//! looks at lines that begin with `global`, `public`, or `define` and picks
//! names out of them.
//!
//! The work is divided among a few layers, from the bottom up:
//!
//! 1. [EscapedReader] reads characters from a [CharSource], swallowing each
//!    backslash that ends a line along with the line end, so that everything
//!    above it sees one long logical line.
//!
//! 2. The folding routines in [fold](self::fold) skip blanks, blank lines, and
//!    `//` comments to reach the next significant character.
//!
//! 3. The bracket skipper and token reader consume balanced groups and runs of
//!    characters in a given [class](self::class).
//!
//! 4. The declaration classifier in [declaration](self::declaration) ties
//!    these together into a line-oriented state machine.
//!
//! Nothing that the scanner encounters stops it.  Unbalanced brackets produce
//! an advisory [Diagnostic](crate::message::Diagnostic) through
//! [TagSink::diagnostic]; every other surprise just means that a line yields
//! fewer tags.

use std::sync::Arc;

use thiserror::Error as ThisError;

use crate::{
    message::{Diagnostic, Location, Severity},
    parser::TagSink,
    source::CharSource,
    tag::{SymbolKind, Tag},
};

mod bracket;
pub mod class;
mod declaration;
mod escape;
mod fold;
mod token;

pub use escape::EscapedReader;


/// A problem encountered while scanning.
///
/// None of these is fatal.  Only [ScanError::UnmatchedDelimiter] is reported
/// to the user; the others are logged at debug level.
#[derive(Clone, Debug, ThisError, PartialEq, Eq)]
pub enum ScanError {
    #[error("failed to find match for '{open}'")]
    UnmatchedDelimiter { open: char, close: char },

    #[error("{keyword:?} is not followed by a recognized declaration")]
    UnrecognizedDeclarationShape { keyword: String },

    #[error("input ended inside a declaration")]
    PrematureEndOfInput,
}

/// Where the scanner is within a line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum LineState {
    /// Nothing but line ends have been seen since the previous line end.  A
    /// declaration keyword here begins a declaration.
    AtLineStart,

    /// Some other character has been seen on this line.
    InLine,
}

/// The state of one scan of one source.
///
/// A `Scanner` owns everything it mutates apart from the source and the sink,
/// so independent scans never affect one another.
pub struct Scanner<'a> {
    reader: EscapedReader<'a>,
    sink: &'a mut dyn TagSink,
    state: LineState,

    /// The most recently read token.  Reused from one read to the next.
    name: String,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a mut dyn CharSource, sink: &'a mut dyn TagSink) -> Self {
        Self {
            reader: EscapedReader::new(source),
            sink,
            state: LineState::AtLineStart,
            name: String::new(),
        }
    }

    fn next(&mut self) -> Option<char> {
        self.reader.next()
    }

    fn push_back(&mut self, c: char) {
        self.reader.push_back(c)
    }

    /// Returns true if the most recently read character directly followed an
    /// escaped line end.
    fn spliced(&self) -> bool {
        self.reader.spliced()
    }

    fn line(&self) -> u32 {
        self.reader.line()
    }

    /// Emits a tag of the given `kind` for the most recently read token, which
    /// began on `line`.
    fn emit(&mut self, kind: SymbolKind, line: u32) {
        log::debug!("{}:{line}: {kind} {}", self.file_label(), self.name);
        self.sink.tag(Tag::new(self.name.as_str(), kind, line));
    }

    fn report(&mut self, error: ScanError, line: u32) {
        let file_name: Option<Arc<String>> = self.reader.file_name().cloned();
        let mut diagnostic = Diagnostic::new(
            Severity::Warning,
            Location::new(file_name, line),
            error.to_string(),
        );
        if let Some(text) = self.reader.source_line(line) {
            diagnostic = diagnostic.with_source(text);
        }
        self.sink.diagnostic(diagnostic);
    }

    fn file_label(&self) -> &str {
        self.reader
            .file_name()
            .map_or("<input>", |file_name| file_name.as_str())
    }
}

/// Scans all of `source`, passing every tag and diagnostic to `sink`.
pub fn scan(source: &mut dyn CharSource, sink: &mut dyn TagSink) {
    Scanner::new(source, sink).run()
}
