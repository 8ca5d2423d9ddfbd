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

//! Character sources for the scanner.
//!
//! The scanner pulls one character at a time through [CharSource].  This
//! module provides [SourceFile], which holds the decoded contents of a file,
//! and [StringSource], a cursor over such contents.

use std::{fs, io::Result as IoResult, iter::once, path::Path, sync::Arc};

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use smallvec::SmallVec;

/// A source of characters for the scanner.
pub trait CharSource {
    /// Returns the next character, or `None` at end of input.
    ///
    /// Line ends are always returned as `'\n'`.
    fn next_raw(&mut self) -> Option<char>;

    /// Returns `c` to the source so that the next call to [Self::next_raw]
    /// returns it again.
    fn push_back(&mut self, c: char);

    /// Returns the 1-based line number of the most recently read character.
    fn line(&self) -> u32;

    /// Returns the name of the file being read, if any.  This is used only in
    /// diagnostics.
    fn file_name(&self) -> Option<&Arc<String>>;

    /// Returns the text of 1-based line `line`, if the source keeps it.
    fn source_line(&self, line: u32) -> Option<&str> {
        let _ = line;
        None
    }
}

/// A source file and its contents.
///
/// This holds the entire contents of a source file, which are always read
/// into memory in their entirety, recoded into UTF-8 if necessary.  It
/// includes the file name (if any), and an index to make finding lines by line
/// number more efficient.
pub struct SourceFile {
    /// `None` if this source is not associated with a file.
    file_name: Option<Arc<String>>,

    /// Original encoding.
    encoding: &'static Encoding,

    /// Source file contents.
    contents: String,

    /// Byte offsets into `contents` of starts of lines.  The first element is
    /// 0.
    lines: Vec<usize>,
}

impl SourceFile {
    /// Returns a `SourceFile` by reading `path` and recoding it from
    /// `encoding`.  If `encoding` is `None`, it is guessed from the contents.
    pub fn for_file<P>(path: P, encoding: Option<&'static Encoding>) -> IoResult<Self>
    where
        P: AsRef<Path>,
    {
        let bytes = fs::read(path.as_ref())?;
        let encoding = encoding.unwrap_or_else(|| {
            let mut encoding_detector = EncodingDetector::new();
            encoding_detector.feed(&bytes, true);
            encoding_detector.guess(None, true)
        });
        let (contents, _malformed) = encoding.decode_with_bom_removal(&bytes);
        Ok(Self::new(
            contents.to_string(),
            Some(path.as_ref().to_string_lossy().to_string()),
            encoding,
        ))
    }

    /// Creates a new `SourceFile` for `contents`, recording that `contents`
    /// was originally encoded in `encoding` and that it was read from
    /// `file_name`.
    pub fn new(contents: String, file_name: Option<String>, encoding: &'static Encoding) -> Self {
        let mut chars = contents.char_indices().peekable();
        let mut ends = Vec::new();
        while let Some((index, c)) = chars.next() {
            match c {
                '\n' => ends.push(index + 1),
                '\r' if chars.peek().is_none_or(|&(_, next)| next != '\n') => ends.push(index + 1),
                _ => (),
            }
        }
        let lines = once(0)
            .chain(ends)
            .filter(|index| *index < contents.len())
            .collect::<Vec<_>>();
        Self {
            file_name: file_name.map(Arc::new),
            encoding,
            contents,
            lines,
        }
    }

    /// Returns a `SourceFile` for `contents`.
    pub fn for_string(contents: String) -> Self {
        Self::new(contents, None, UTF_8)
    }

    pub fn file_name(&self) -> Option<&Arc<String>> {
        self.file_name.as_ref()
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Returns the text of 1-based line `line_number`, without its line end.
    pub fn get_line(&self, line_number: u32) -> Option<&str> {
        let index = (line_number as usize).checked_sub(1)?;
        let start = *self.lines.get(index)?;
        let end = self
            .lines
            .get(index + 1)
            .copied()
            .unwrap_or(self.contents.len());
        Some(self.contents[start..end].strip_newline())
    }

    /// Returns a [CharSource] positioned at the beginning of this file.
    pub fn source(&self) -> StringSource<'_> {
        StringSource {
            file: Some(self),
            ..StringSource::new(&self.contents)
        }
    }
}

impl Default for SourceFile {
    fn default() -> Self {
        Self::for_string(String::new())
    }
}

trait StripNewline {
    fn strip_newline(&self) -> &str;
}

impl StripNewline for str {
    fn strip_newline(&self) -> &str {
        self.strip_suffix("\r\n")
            .or_else(|| self.strip_suffix('\n'))
            .or_else(|| self.strip_suffix('\r'))
            .unwrap_or(self)
    }
}

/// A [CharSource] over a string.
///
/// `"\r\n"` and a lone `'\r'` are both read as `'\n'`.  A line end belongs to
/// the line that it ends.
pub struct StringSource<'a> {
    file: Option<&'a SourceFile>,
    rest: &'a str,

    /// Characters returned via [CharSource::push_back], each with its line
    /// number, most recent last.
    pending: SmallVec<[(char, u32); 4]>,

    /// Line number of the most recently read character.
    line: u32,

    /// Line number of the next character not yet read from `rest`.
    next_line: u32,
}

impl<'a> StringSource<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            file: None,
            rest: input,
            pending: SmallVec::new(),
            line: 1,
            next_line: 1,
        }
    }
}

impl CharSource for StringSource<'_> {
    fn next_raw(&mut self) -> Option<char> {
        if let Some((c, line)) = self.pending.pop() {
            self.line = line;
            return Some(c);
        }

        let mut iter = self.rest.chars();
        let c = iter.next()?;
        self.rest = iter.as_str();
        let c = match c {
            '\r' => {
                self.rest = self.rest.strip_prefix('\n').unwrap_or(self.rest);
                '\n'
            }
            c => c,
        };
        self.line = self.next_line;
        if c == '\n' {
            self.next_line += 1;
        }
        Some(c)
    }

    fn push_back(&mut self, c: char) {
        self.pending.push((c, self.line));
    }

    fn line(&self) -> u32 {
        self.line
    }

    fn file_name(&self) -> Option<&Arc<String>> {
        self.file.and_then(|file| file.file_name.as_ref())
    }

    fn source_line(&self, line: u32) -> Option<&str> {
        self.file.and_then(|file| file.get_line(line))
    }
}
