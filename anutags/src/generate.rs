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

use std::{
    fs::File,
    io::{BufWriter, Write, stdout},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use anutags::{
    output::{Format, TagWriter, TaggedFile},
    parser::has_extension,
    settings::{Settings, parse_kinds},
};
use clap::Args;
use encoding_rs::Encoding;
use log::{info, log};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::parse_encoding;

/// Write tags for Anubis source files.
#[derive(Args, Clone, Debug)]
pub struct Generate {
    /// Files to scan.  With `-R`, directories are searched for Anubis files.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Search directories recursively.
    #[arg(short = 'R', long)]
    recursive: bool,

    /// Output file name.  If omitted, output is written to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Settings file.  Options given on the command line override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// The encoding to use for reading input files.  If omitted, the encoding
    /// of each file is guessed from its contents.
    #[arg(long, value_parser = parse_encoding, help_heading = "Input file options")]
    encoding: Option<&'static Encoding>,

    /// Additional file name extension to search for with `-R`.
    #[arg(long = "extension", help_heading = "Input file options")]
    extensions: Vec<String>,

    /// Output format.
    #[arg(long, short = 'f', help_heading = "Output options")]
    format: Option<Format>,

    /// Sort tags by name.
    #[arg(long, help_heading = "Output options")]
    sort: bool,

    /// Letters of the kinds of tags to write, e.g. `ft` to omit alternatives.
    #[arg(long, help_heading = "Output options")]
    kinds: Option<String>,
}

impl Generate {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if let Some(format) = self.format {
            settings.format = format;
        }
        if self.sort {
            settings.sort = true;
        }
        if let Some(kinds) = &self.kinds {
            settings.kinds = parse_kinds(kinds)?;
        }
        settings.extensions.extend(self.extensions.iter().cloned());
        Ok(settings)
    }

    /// Returns the files named on the command line, with directories replaced
    /// by the Anubis files they contain.
    fn files(&self, settings: &Settings) -> Result<Vec<PathBuf>> {
        let extensions = settings.all_extensions().collect::<Vec<_>>();
        let mut files = Vec::new();
        for input in &self.inputs {
            if !input.is_dir() {
                files.push(input.clone());
            } else if self.recursive {
                for entry in WalkDir::new(input)
                    .follow_links(true)
                    .sort_by_file_name()
                {
                    let entry = entry?;
                    if entry.file_type().is_file() && has_extension(entry.path(), &extensions) {
                        files.push(entry.into_path());
                    }
                }
            } else {
                bail!("{}: is a directory (use -R to search it)", input.display());
            }
        }
        Ok(files)
    }

    pub fn run(self) -> Result<()> {
        let settings = self.settings()?;
        let files = self.files(&settings)?;
        info!("scanning {} files", files.len());

        let tagged = files
            .par_iter()
            .filter_map(|path| scan_file(path, self.encoding))
            .collect::<Vec<_>>();

        let mut writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path).with_context(|| format!("{}", path.display()))?,
            )),
            None => Box::new(stdout().lock()),
        };
        TagWriter::new(&settings).write(&tagged, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Reads and scans `path`.  A file that cannot be read is reported and
/// skipped.
fn scan_file(path: &Path, encoding: Option<&'static Encoding>) -> Option<TaggedFile> {
    match TaggedFile::read(path, encoding) {
        Ok(file) => {
            info!(
                "{}: {} tags ({})",
                file.path(),
                file.tags.len(),
                file.source.encoding().name()
            );
            Some(file)
        }
        Err(diagnostic) => {
            log!(diagnostic.severity.log_level(), "{diagnostic}");
            None
        }
    }
}
