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

use std::sync::Arc;

use smallvec::SmallVec;

use crate::source::CharSource;

/// Reads characters from a [CharSource], joining lines that end in a
/// backslash.
///
/// A backslash immediately followed by a line end is dropped along with the
/// line end, and reading continues with the next character.  Any other
/// backslash is returned as itself.  Everything else in the scanner reads
/// through this type, so none of it ever sees an escaped line end.
pub struct EscapedReader<'a> {
    source: &'a mut dyn CharSource,
    spliced: bool,

    /// For each character pushed back into `source` and not yet reread, most
    /// recent last, whether it followed an escaped line end.  Pushed-back
    /// characters have already been unescaped, so they are returned as-is.
    pending: SmallVec<[bool; 4]>,
}

impl<'a> EscapedReader<'a> {
    pub fn new(source: &'a mut dyn CharSource) -> Self {
        Self {
            source,
            spliced: false,
            pending: SmallVec::new(),
        }
    }

    /// Returns `c` to the source, to be read again ahead of anything pushed
    /// back earlier.  When it is reread, [Self::spliced] reports the value it
    /// had when `c` was pushed back.
    pub fn push_back(&mut self, c: char) {
        self.source.push_back(c);
        self.pending.push(self.spliced);
    }

    /// Returns true if one or more escaped line ends were dropped just before
    /// the most recently returned character.
    ///
    /// Token readers treat such a character as the start of a new token, so
    /// that `define\` at the end of a line followed by `Int` on the next reads
    /// as two words.
    pub fn spliced(&self) -> bool {
        self.spliced
    }

    pub fn line(&self) -> u32 {
        self.source.line()
    }

    pub fn file_name(&self) -> Option<&Arc<String>> {
        self.source.file_name()
    }

    pub fn source_line(&self, line: u32) -> Option<&str> {
        self.source.source_line(line)
    }
}

impl Iterator for EscapedReader<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if let Some(spliced) = self.pending.pop() {
            self.spliced = spliced;
            return self.source.next_raw();
        }

        self.spliced = false;
        loop {
            let c = self.source.next_raw()?;
            if c != '\\' {
                return Some(c);
            }
            match self.source.next_raw() {
                Some('\n') => self.spliced = true,
                Some(other) => {
                    self.source.push_back(other);
                    self.pending.push(false);
                    return Some('\\');
                }
                None => return Some('\\'),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::source::StringSource;

    use super::EscapedReader;

    fn read(input: &str) -> (String, Vec<usize>) {
        let mut source = StringSource::new(input);
        let mut reader = EscapedReader::new(&mut source);
        let mut output = String::new();
        let mut splices = Vec::new();
        while let Some(c) = reader.next() {
            if reader.spliced() {
                splices.push(output.chars().count());
            }
            output.push(c);
        }
        (output, splices)
    }

    #[test]
    fn plain() {
        assert_eq!(read("abc\ndef"), (String::from("abc\ndef"), vec![]));
    }

    #[test]
    fn continuation() {
        assert_eq!(read("ab\\\ncd"), (String::from("abcd"), vec![2]));
        assert_eq!(read("ab\\\r\ncd"), (String::from("abcd"), vec![2]));
        assert_eq!(read("a\\\n\\\nb"), (String::from("ab"), vec![1]));
    }

    #[test]
    fn other_escapes() {
        assert_eq!(read(r"a\b"), (String::from(r"a\b"), vec![]));
        assert_eq!(read(r"a\\b"), (String::from(r"a\\b"), vec![]));
        assert_eq!(read("a\\"), (String::from("a\\"), vec![]));
    }

    #[test]
    fn continuation_at_end() {
        assert_eq!(read("a\\\n"), (String::from("a"), vec![]));
    }

    #[test]
    fn push_back() {
        let mut source = StringSource::new("a\\\nb\\c");
        let mut reader = EscapedReader::new(&mut source);
        assert_eq!(reader.next(), Some('a'));
        assert!(!reader.spliced());
        assert_eq!(reader.next(), Some('b'));
        assert!(reader.spliced());
        reader.push_back('b');
        assert_eq!(reader.next(), Some('b'));
        assert!(reader.spliced());
        assert_eq!(reader.next(), Some('\\'));
        assert!(!reader.spliced());
        reader.push_back('\\');
        assert_eq!(reader.next(), Some('\\'));
        assert_eq!(reader.next(), Some('c'));
        assert_eq!(reader.next(), None);
    }

    #[test]
    fn line_numbers() {
        let mut source = StringSource::new("a\\\nb\nc");
        let mut reader = EscapedReader::new(&mut source);
        let mut lines = Vec::new();
        while let Some(c) = reader.next() {
            lines.push((c, reader.line()));
        }
        assert_eq!(lines, vec![('a', 1), ('b', 2), ('\n', 2), ('c', 3)]);
    }
}
