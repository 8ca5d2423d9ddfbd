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

use super::Scanner;

impl Scanner<'_> {
    /// Reads a token into `self.name`: `first`, which has already been read,
    /// followed by every subsequent character for which `predicate` is true.
    /// The first character that fails `predicate` is returned to the source.
    ///
    /// If `first` itself fails `predicate`, the token is empty.  A character
    /// that follows an escaped line end always ends the token.
    ///
    /// Returns the line number of `first`.
    pub(super) fn read_while(&mut self, first: char, predicate: fn(char) -> bool) -> u32 {
        let line = self.line();
        self.name.clear();
        if !predicate(first) {
            return line;
        }
        self.name.push(first);
        while let Some(c) = self.next() {
            if self.spliced() || !predicate(c) {
                self.push_back(c);
                break;
            }
            self.name.push(c);
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        scan::{Scanner, class::AnubisChar},
        source::StringSource,
        tag::Tag,
    };

    fn read(first: char, input: &str, predicate: fn(char) -> bool) -> (String, String) {
        let mut source = StringSource::new(input);
        let mut tags: Vec<Tag> = Vec::new();
        let mut scanner = Scanner::new(&mut source, &mut tags);
        scanner.read_while(first, predicate);
        let name = scanner.name.clone();
        let rest = std::iter::from_fn(|| scanner.next()).collect();
        (name, rest)
    }

    #[test]
    fn keyword() {
        assert_eq!(
            read('d', "efine Int", char::is_keyword_char),
            (String::from("define"), String::from(" Int"))
        );
        assert_eq!(
            read('d', "efine_x", char::is_keyword_char),
            (String::from("define"), String::from("_x"))
        );
    }

    #[test]
    fn name() {
        assert_eq!(
            read('m', "ax_2(Int x)", char::may_continue_name),
            (String::from("max_2"), String::from("(Int x)"))
        );
        assert_eq!(
            read('F', "oo", char::may_continue_name),
            (String::from("Foo"), String::new())
        );
    }

    #[test]
    fn first_fails() {
        assert_eq!(
            read('(', "Int)", char::is_keyword_char),
            (String::new(), String::from("Int)"))
        );
    }

    #[test]
    fn splice_ends_token() {
        assert_eq!(
            read('d', "efine\\\nInt", char::is_keyword_char),
            (String::from("define"), String::from("Int"))
        );
    }

    #[test]
    fn line_of_first() {
        let mut source = StringSource::new("\nfoo\\\nbar");
        let mut tags: Vec<Tag> = Vec::new();
        let mut scanner = Scanner::new(&mut source, &mut tags);
        assert_eq!(scanner.next(), Some('\n'));
        assert_eq!(scanner.next(), Some('f'));
        assert_eq!(scanner.read_while('f', char::may_continue_name), 2);
        assert_eq!(scanner.name, "foo");
    }
}
