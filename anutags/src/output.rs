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

//! Writing tags in the formats that editors and other tools read.

use std::{
    io::{Result as IoResult, Write},
    path::Path,
    sync::Arc,
};

use clap::ValueEnum;
use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};

use crate::{
    message::{Diagnostic, Location, Severity},
    parser::ANUBIS,
    settings::Settings,
    source::SourceFile,
    tag::Tag,
};

/// Output format for tags.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// A `tags` file in the extended format read by vi and Emacs.
    #[default]
    Ctags,

    /// A human-readable cross reference, one tag per line.
    Xref,

    /// One JSON object per tag, one per line.
    Json,
}

/// A source file together with the tags found in it.
pub struct TaggedFile {
    pub source: SourceFile,
    pub tags: Vec<Tag>,
}

impl TaggedFile {
    /// Scans `source` for tags.  Diagnostics go to the log.
    pub fn scan(source: SourceFile) -> Self {
        let mut tags = Vec::new();
        ANUBIS.parse(&mut source.source(), &mut tags);
        Self { source, tags }
    }

    /// Reads the file at `path`, decoding it from `encoding` or, if that is
    /// `None`, from a guessed encoding, and scans it.  If the file cannot be
    /// read, returns an error diagnostic instead.
    pub fn read(path: &Path, encoding: Option<&'static Encoding>) -> Result<Self, Diagnostic> {
        match SourceFile::for_file(path, encoding) {
            Ok(source) => Ok(Self::scan(source)),
            Err(error) => Err(Diagnostic::new(
                Severity::Error,
                Location::for_file(Arc::new(path.display().to_string())),
                error.to_string(),
            )),
        }
    }

    /// The name to write for this file in tag output.
    pub fn path(&self) -> &str {
        self.source.file_name().map_or("-", |name| name.as_str())
    }
}

/// One tag selected for output, with the file it came from.
struct Entry<'a> {
    file: &'a TaggedFile,
    tag: &'a Tag,
}

#[derive(Serialize)]
struct JsonTag<'a> {
    #[serde(rename = "_type")]
    type_: &'static str,
    name: &'a str,
    path: &'a str,
    line: u32,
    kind: &'static str,
}

/// Writes tags for a batch of files according to [Settings].
pub struct TagWriter<'a> {
    settings: &'a Settings,
}

impl<'a> TagWriter<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Returns the tags to write, in output order.
    fn entries<'b>(&self, files: &'b [TaggedFile]) -> Vec<Entry<'b>> {
        let mut entries = files
            .iter()
            .flat_map(|file| file.tags.iter().map(move |tag| Entry { file, tag }))
            .filter(|entry| self.settings.kinds[entry.tag.kind])
            .collect::<Vec<_>>();
        if self.settings.sort {
            entries.sort_by(|a, b| {
                (a.tag.name.as_str(), a.file.path(), a.tag.line).cmp(&(
                    b.tag.name.as_str(),
                    b.file.path(),
                    b.tag.line,
                ))
            });
        }
        entries
    }

    pub fn write<W>(&self, files: &[TaggedFile], writer: &mut W) -> IoResult<()>
    where
        W: Write,
    {
        let entries = self.entries(files);
        match self.settings.format {
            Format::Ctags => self.write_ctags(&entries, writer),
            Format::Xref => write_xref(&entries, writer),
            Format::Json => write_json(&entries, writer),
        }
    }

    fn write_ctags<W>(&self, entries: &[Entry], writer: &mut W) -> IoResult<()>
    where
        W: Write,
    {
        writeln!(
            writer,
            "!_TAG_FILE_FORMAT\t2\t/extended format; --format=1 will not append ;\" to lines/"
        )?;
        writeln!(
            writer,
            "!_TAG_FILE_SORTED\t{}\t/0=unsorted, 1=sorted, 2=foldcase/",
            self.settings.sort as u8
        )?;
        writeln!(writer, "!_TAG_PROGRAM_NAME\tanutags\t//")?;
        writeln!(
            writer,
            "!_TAG_PROGRAM_VERSION\t{}\t//",
            env!("CARGO_PKG_VERSION")
        )?;
        for Entry { file, tag } in entries {
            writeln!(
                writer,
                "{}\t{}\t{};\"\t{}",
                tag.name,
                file.path(),
                tag.line,
                tag.kind.letter()
            )?;
        }
        Ok(())
    }
}

fn write_xref<W>(entries: &[Entry], writer: &mut W) -> IoResult<()>
where
    W: Write,
{
    for Entry { file, tag } in entries {
        let text = file.source.get_line(tag.line).unwrap_or_default();
        writeln!(
            writer,
            "{:<16} {:<11} {:>4} {:<16} {}",
            tag.name,
            tag.kind.name(),
            tag.line,
            file.path(),
            text.trim_end()
        )?;
    }
    Ok(())
}

fn write_json<W>(entries: &[Entry], writer: &mut W) -> IoResult<()>
where
    W: Write,
{
    for Entry { file, tag } in entries {
        let json = JsonTag {
            type_: "tag",
            name: &tag.name,
            path: file.path(),
            line: tag.line,
            kind: tag.kind.name(),
        };
        serde_json::to_writer(&mut *writer, &json)?;
        writeln!(writer)?;
    }
    Ok(())
}
