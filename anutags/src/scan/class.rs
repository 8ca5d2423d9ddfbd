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

//! Character classes used by the scanner.

pub trait AnubisChar {
    /// Returns true if `self` is white space other than a line end.
    fn is_blank(self) -> bool;

    /// Returns true if `self` is white space, including a line end.
    fn is_space(self) -> bool;

    /// Returns true if `self` may appear in a keyword such as `define`.
    fn is_keyword_char(self) -> bool;

    /// Returns true if `self` may begin the name of a function, type, or
    /// alternative.
    fn may_start_name(self) -> bool;

    /// Returns true if `self` may be a second or subsequent character in the
    /// name of a function, type, or alternative.
    fn may_continue_name(self) -> bool;
}

impl AnubisChar for char {
    fn is_blank(self) -> bool {
        matches!(self, ' ' | '\t' | '\r' | '\u{000b}' | '\u{000c}')
    }

    fn is_space(self) -> bool {
        self == '\n' || self.is_blank()
    }

    fn is_keyword_char(self) -> bool {
        self.is_ascii_alphabetic()
    }

    fn may_start_name(self) -> bool {
        matches!(self, 'a'..='z' | 'A'..='Z' | '_')
    }

    fn may_continue_name(self) -> bool {
        matches!(self, 'a'..='z' | 'A'..='Z' | '0'..='9' | '_')
    }
}

#[cfg(test)]
mod tests {
    use super::AnubisChar;

    #[test]
    fn classes() {
        for c in ['a', 'Z'] {
            assert!(c.is_keyword_char());
            assert!(c.may_start_name());
            assert!(c.may_continue_name());
        }
        for c in ['_', '7'] {
            assert!(!c.is_keyword_char());
            assert!(c.may_continue_name());
        }
        assert!('_'.may_start_name());
        assert!(!'7'.may_start_name());
        for c in ['$', '(', '.', 'é', ' ', '\n'] {
            assert!(!c.is_keyword_char());
            assert!(!c.may_start_name());
            assert!(!c.may_continue_name());
        }
    }

    #[test]
    fn spaces() {
        assert!(' '.is_blank());
        assert!('\t'.is_blank());
        assert!(!'\n'.is_blank());
        assert!('\n'.is_space());
        assert!(!'x'.is_space());
    }
}
