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

use std::path::{Path, PathBuf};

use anutags::{
    output::{Format, TagWriter, TaggedFile},
    parser::{ANUBIS, Collected},
    settings::Settings,
    source::SourceFile,
    tag::{SymbolKind, Tag},
};
use encoding_rs::WINDOWS_1252;

fn data_file(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn scan_file(name: &str) -> Collected {
    let source = SourceFile::for_file(data_file(name), None).unwrap();
    let mut collected = Collected::default();
    ANUBIS.parse(&mut source.source(), &mut collected);
    collected
}

fn tags(expected: &[(SymbolKind, &str, u32)]) -> Vec<Tag> {
    expected
        .iter()
        .map(|(kind, name, line)| Tag::new(*name, *kind, *line))
        .collect()
}

#[test]
fn list() {
    use SymbolKind::*;
    let collected = scan_file("list.anubis");
    assert_eq!(
        collected.tags,
        tags(&[
            (TypeDefinition, "List", 5),
            (Function, "length", 11),
            (Function, "reverse", 22),
            (Function, "is_empty", 25),
            (Function, "split", 28),
        ])
    );
    assert_eq!(collected.diagnostics, Vec::new());
}

#[test]
fn maybe() {
    use SymbolKind::*;
    let collected = scan_file("maybe.anubis");
    assert_eq!(
        collected.tags,
        tags(&[
            (TypeDefinition, "Maybe", 3),
            (TypeAlternative, "failure", 4),
            (TypeAlternative, "success", 5),
            (TypeDefinition, "Result", 7),
            (TypeAlternative, "error", 7),
            (TypeAlternative, "ok", 7),
            (Function, "first", 10),
            (TypeDefinition, "Opaque", 19),
            (Function, "continued", 22),
        ])
    );
}

#[test]
fn latin1() {
    let source = SourceFile::for_file(data_file("latin1.anubis"), Some(WINDOWS_1252)).unwrap();
    assert_eq!(source.encoding(), WINDOWS_1252);
    assert_eq!(source.get_line(1), Some("// Café accounts."));
    let file = TaggedFile::scan(source);
    assert_eq!(file.tags, vec![Tag::new("balance", SymbolKind::Function, 3)]);
}

#[test]
fn claimed() {
    assert!(ANUBIS.claims(&data_file("list.anubis")));
    assert!(!ANUBIS.claims(&data_file("README")));
}

#[test]
fn sorted_ctags() {
    let files = ["maybe.anubis", "list.anubis"]
        .into_iter()
        .map(|name| TaggedFile::scan(SourceFile::for_file(data_file(name), None).unwrap()))
        .collect::<Vec<_>>();
    let settings = Settings {
        format: Format::Ctags,
        sort: true,
        ..Settings::default()
    };
    let mut output = Vec::new();
    TagWriter::new(&settings).write(&files, &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();
    let names = output
        .lines()
        .filter(|line| !line.starts_with("!_"))
        .map(|line| line.split('\t').next().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec![
            "List",
            "Maybe",
            "Opaque",
            "Result",
            "continued",
            "error",
            "failure",
            "first",
            "is_empty",
            "length",
            "ok",
            "reverse",
            "split",
            "success",
        ]
    );
    let length = output
        .lines()
        .find(|line| line.starts_with("length\t"))
        .unwrap();
    assert!(length.ends_with("list.anubis\t11;\"\tf"));
}
