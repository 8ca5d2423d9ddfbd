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

//! Skipping white space and comments.
//!
//! A declaration may be spread over several lines, with blank lines and `//`
//! comments anywhere between its words.  These routines fold all of that away
//! so that the classifier sees only the next significant character.

use super::{Scanner, class::AnubisChar};

impl Scanner<'_> {
    /// Reads characters until one that is not a blank.  The result may be a
    /// line end or `None` at end of input.
    pub(super) fn skip_blanks(&mut self) -> Option<char> {
        loop {
            match self.next() {
                Some(c) if c.is_blank() => (),
                other => return other,
            }
        }
    }

    /// Starting from `c`, which has already been read, skips blanks, line
    /// ends, and `//` comments, and returns the first character that is none
    /// of those, or `None` at end of input.
    ///
    /// A `/` that does not begin a comment is significant; the character after
    /// it is returned to the source.
    pub(super) fn fold(&mut self, c: Option<char>) -> Option<char> {
        self.fold_at_line_start(c).0
    }

    /// Folds like [Self::fold].  Also returns true if the result directly
    /// follows a line end, that is, if it is the first character of a line.
    pub(super) fn fold_at_line_start(&mut self, mut c: Option<char>) -> (Option<char>, bool) {
        let mut line_start = false;
        loop {
            match c {
                Some(ch) if ch.is_blank() => {
                    line_start = false;
                    c = self.skip_blanks();
                }
                Some('\n') => {
                    line_start = true;
                    c = self.next();
                }
                Some('/') => match self.next() {
                    Some('/') => c = self.skip_line_comment(),
                    Some(other) => {
                        self.push_back(other);
                        return (Some('/'), line_start);
                    }
                    None => return (Some('/'), line_start),
                },
                _ => return (c, line_start),
            }
        }
    }

    /// Reads and folds starting with the next character.
    pub(super) fn skip_to_significant(&mut self) -> Option<char> {
        let c = self.next();
        self.fold(c)
    }

    /// Skips the rest of a `//` comment.  Returns the line end that ends it,
    /// or `None` at end of input.
    fn skip_line_comment(&mut self) -> Option<char> {
        loop {
            match self.next() {
                Some('\n') => return Some('\n'),
                Some(_) => (),
                None => return None,
            }
        }
    }

    /// Skips the rest of the token that begins with `c` (already read), up to
    /// white space.  Returns the character that ended the token, which is
    /// white space, the first character after an escaped line end, or `None`.
    pub(super) fn skip_token(&mut self, mut c: Option<char>) -> Option<char> {
        while c.is_some_and(|c| !c.is_space()) {
            c = self.next();
            if self.spliced() {
                break;
            }
        }
        c
    }

    /// Skips the rest of the token that begins with `c`, then folds to the
    /// next significant character.
    pub(super) fn skip_known_identifier(&mut self, c: Option<char>) -> Option<char> {
        let c = self.skip_token(c);
        self.fold(c)
    }
}
