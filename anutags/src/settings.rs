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
    fs,
    path::{Path, PathBuf},
};

use enum_map::EnumMap;
use serde::Deserialize;
use thiserror::Error as ThisError;

use crate::{
    output::Format,
    tag::{SymbolKind, UnknownKindError},
};

/// Settings that control which tags are written and how.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Output format.
    pub format: Format,

    /// Whether to sort tags by name.  Otherwise, tags are written in file
    /// order and, within a file, in the order they were found.
    pub sort: bool,

    /// Which kinds of tags to write.
    pub kinds: EnumMap<SymbolKind, bool>,

    /// File name extensions, beyond `anubis`, to scan when searching
    /// directories.
    pub extensions: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: Format::default(),
            sort: false,
            kinds: EnumMap::from_fn(|_| true),
            extensions: Vec::new(),
        }
    }
}

#[derive(ThisError, Debug)]
pub enum SettingsError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    UnknownKind(#[from] UnknownKindError),
}

/// The contents of a settings file.  Every setting is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    format: Option<Format>,
    sort: Option<bool>,

    /// Letters of the kinds to write, e.g. `"ft"`.
    kinds: Option<String>,
    extensions: Option<Vec<String>>,
}

impl Settings {
    /// Parses settings from the contents of a TOML settings file.  Settings
    /// that the file omits take their default values.
    pub fn from_toml_str(s: &str) -> Result<Self, SettingsError> {
        let file: SettingsFile = toml::from_str(s)?;
        let mut settings = Self::default();
        if let Some(format) = file.format {
            settings.format = format;
        }
        if let Some(sort) = file.sort {
            settings.sort = sort;
        }
        if let Some(kinds) = file.kinds {
            settings.kinds = parse_kinds(&kinds)?;
        }
        if let Some(extensions) = file.extensions {
            settings.extensions = extensions;
        }
        Ok(settings)
    }

    /// Reads settings from the TOML file at `path`.
    pub fn load<P>(path: P) -> Result<Self, SettingsError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&s).map_err(|error| match error {
            SettingsError::Parse(source) => SettingsError::Toml {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Returns the extensions of files to scan in directories.
    pub fn all_extensions(&self) -> impl Iterator<Item = &str> {
        ["anubis"]
            .into_iter()
            .chain(self.extensions.iter().map(String::as_str))
    }
}

/// Parses a string of kind letters, such as `"ft"`, into the set of kinds it
/// enables.  Kinds whose letters are absent are disabled.
pub fn parse_kinds(s: &str) -> Result<EnumMap<SymbolKind, bool>, UnknownKindError> {
    let mut kinds = EnumMap::default();
    for c in s.chars() {
        let kind =
            SymbolKind::from_letter(c).ok_or_else(|| UnknownKindError(String::from(c)))?;
        kinds[kind] = true;
    }
    Ok(kinds)
}

#[cfg(test)]
mod tests {
    use enum_map::enum_map;

    use crate::{
        output::Format,
        settings::{Settings, SettingsError, parse_kinds},
        tag::{SymbolKind, UnknownKindError},
    };

    #[test]
    fn defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.kinds.values().all(|enabled| *enabled));
        assert_eq!(settings.all_extensions().collect::<Vec<_>>(), vec!["anubis"]);
    }

    #[test]
    fn file() {
        let settings = Settings::from_toml_str(
            r#"
format = "xref"
sort = true
kinds = "ta"
extensions = ["anb"]
"#,
        )
        .unwrap();
        assert_eq!(settings.format, Format::Xref);
        assert!(settings.sort);
        assert_eq!(
            settings.kinds,
            enum_map! {
                SymbolKind::Function => false,
                SymbolKind::TypeDefinition => true,
                SymbolKind::TypeAlternative => true,
            }
        );
        assert_eq!(
            settings.all_extensions().collect::<Vec<_>>(),
            vec!["anubis", "anb"]
        );
    }

    #[test]
    fn kinds() {
        assert_eq!(parse_kinds("").unwrap().values().filter(|k| **k).count(), 0);
        assert_eq!(parse_kinds("x"), Err(UnknownKindError(String::from("x"))));
        assert!(matches!(
            Settings::from_toml_str(r#"kinds = "fz""#),
            Err(SettingsError::UnknownKind(_))
        ));
    }

    #[test]
    fn errors() {
        assert!(matches!(
            Settings::from_toml_str("format = \"etags\""),
            Err(SettingsError::Parse(_))
        ));
        assert!(matches!(
            Settings::from_toml_str("colour = true"),
            Err(SettingsError::Parse(_))
        ));
        let error = Settings::load("/nonexistent/anutags.toml").unwrap_err();
        assert!(matches!(error, SettingsError::Io { .. }));
        assert!(error.to_string().starts_with("/nonexistent/anutags.toml: "));
    }
}
