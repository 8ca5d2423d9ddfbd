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

use super::{ScanError, Scanner};

impl Scanner<'_> {
    /// Skips to the `close` that matches an `open` that has already been read,
    /// counting nested `open`/`close` pairs along the way.
    ///
    /// Brackets do not span lines, so an unescaped line end before the match
    /// abandons the skip, as does end of input.  Either way, this reports an
    /// [ScanError::UnmatchedDelimiter] and returns false.  A line end that
    /// stops the skip is returned to the source.
    pub(super) fn skip_balanced(&mut self, open: char, close: char) -> bool {
        let start = self.line();
        let mut level = 1usize;
        loop {
            match self.next() {
                Some(c) if c == close => {
                    level -= 1;
                    if level == 0 {
                        return true;
                    }
                }
                Some(c) if c == open => level += 1,
                Some('\n') => {
                    self.push_back('\n');
                    break;
                }
                Some(_) => (),
                None => break,
            }
        }
        self.report(ScanError::UnmatchedDelimiter { open, close }, start);
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        parser::Collected,
        scan::Scanner,
        source::{SourceFile, StringSource},
    };

    fn skip(input: &str) -> (bool, String, Vec<String>) {
        let mut source = StringSource::new(input);
        let mut collected = Collected::default();
        let mut scanner = Scanner::new(&mut source, &mut collected);
        let matched = scanner.skip_balanced('(', ')');
        let rest = std::iter::from_fn(|| scanner.next()).collect();
        let diagnostics = collected
            .diagnostics
            .iter()
            .map(|diagnostic| diagnostic.to_string())
            .collect();
        (matched, rest, diagnostics)
    }

    #[test]
    fn balanced() {
        assert_eq!(
            skip("Int x) = x"),
            (true, String::from(" = x"), vec![])
        );
        assert_eq!(
            skip("List(Int) x, (Int, Int) y) rest"),
            (true, String::from(" rest"), vec![])
        );
    }

    #[test]
    fn escaped_line_end() {
        assert_eq!(skip("Int x,\\\n Int y) z"), (true, String::from(" z"), vec![]));
    }

    #[test]
    fn line_end() {
        assert_eq!(
            skip("Int x,\n Int y) z"),
            (
                false,
                String::from("\n Int y) z"),
                vec![String::from("1: warning: failed to find match for '('")]
            )
        );
    }

    #[test]
    fn end_of_input() {
        assert_eq!(
            skip("Int (x"),
            (
                false,
                String::new(),
                vec![String::from("1: warning: failed to find match for '('")]
            )
        );
    }

    #[test]
    fn diagnostic_names_file() {
        let file = SourceFile::new(
            String::from("define Int f(Int x,\n"),
            Some(String::from("f.anubis")),
            encoding_rs::UTF_8,
        );
        let mut collected = Collected::default();
        crate::scan::scan(&mut file.source(), &mut collected);
        assert_eq!(
            collected
                .diagnostics
                .iter()
                .map(|diagnostic| diagnostic.to_string())
                .collect::<Vec<_>>(),
            Vec::<String>::new()
        );

        let file = SourceFile::new(
            String::from("define (Int f(Int x)\n"),
            Some(String::from("f.anubis")),
            encoding_rs::UTF_8,
        );
        let mut collected = Collected::default();
        crate::scan::scan(&mut file.source(), &mut collected);
        assert_eq!(
            collected
                .diagnostics
                .iter()
                .map(|diagnostic| diagnostic.to_string())
                .collect::<Vec<_>>(),
            vec![String::from(
                "f.anubis:1: warning: failed to find match for '('\n    1 | define (Int f(Int x)"
            )]
        );
        assert!(collected.tags.is_empty());
    }
}
