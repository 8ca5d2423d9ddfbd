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
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    sync::Arc,
};

/// Location relevant to a diagnostic message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    /// File name, if any.
    pub file_name: Option<Arc<String>>,

    /// 1-based line number, if any.
    pub line: Option<u32>,
}

impl Location {
    pub fn new(file_name: Option<Arc<String>>, line: u32) -> Self {
        Self {
            file_name,
            line: Some(line),
        }
    }

    /// Returns a location for the whole of `file_name`.
    pub fn for_file(file_name: Arc<String>) -> Self {
        Self {
            file_name: Some(file_name),
            line: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.file_name.is_none() && self.line.is_none()
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if let Some(file_name) = &self.file_name {
            write!(f, "{}", file_name)?;
        }

        if let Some(line) = self.line {
            if self.file_name.is_some() {
                write!(f, ":")?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    /// A problem that prevented some input from being scanned at all.
    Error,

    /// A problem that the scanner recovered from.
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }

    /// Returns the [log::Level] at which a diagnostic of this severity is
    /// logged when nothing else takes care of it.
    pub fn log_level(&self) -> log::Level {
        match self {
            Severity::Error => log::Level::Error,
            Severity::Warning => log::Level::Warn,
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// An advisory message about the input.
///
/// Diagnostics report problems that the scanner recovered from.  They never
/// change which tags get emitted.
#[derive(Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub location: Location,

    /// The line of source that [Self::location] refers to, if available.
    pub source: Option<String>,
    pub text: String,
}

impl Diagnostic {
    pub fn new(severity: Severity, location: Location, text: impl Into<String>) -> Self {
        Self {
            severity,
            location,
            source: None,
            text: text.into(),
        }
    }

    pub fn with_source(self, source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            ..self
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if !self.location.is_empty() {
            write!(f, "{}: ", self.location)?;
        }
        write!(f, "{}: {}", self.severity, self.text)?;
        if let (Some(line_number), Some(line)) = (self.location.line, &self.source) {
            write!(f, "\n{line_number:5} | {line}")?;
        }
        Ok(())
    }
}

impl Debug for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self, f)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{Diagnostic, Location, Severity};

    #[test]
    fn display() {
        let location = Location::new(Some(Arc::new(String::from("list.anubis"))), 12);
        let diagnostic = Diagnostic::new(Severity::Warning, location, "oops");
        assert_eq!(diagnostic.to_string(), "list.anubis:12: warning: oops");
        assert_eq!(
            diagnostic.with_source("define (Int").to_string(),
            "list.anubis:12: warning: oops\n   12 | define (Int"
        );
    }

    #[test]
    fn display_without_location() {
        let diagnostic = Diagnostic::new(Severity::Error, Location::default(), "hello");
        assert_eq!(diagnostic.to_string(), "error: hello");
    }

    #[test]
    fn display_file_only() {
        let location = Location::for_file(Arc::new(String::from("list.anubis")));
        let diagnostic = Diagnostic::new(Severity::Error, location, "unreadable");
        assert_eq!(diagnostic.to_string(), "list.anubis: error: unreadable");
    }
}
