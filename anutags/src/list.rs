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

use std::path::PathBuf;

use anyhow::Result;
use anutags::{parser::ANUBIS, settings::Settings};
use clap::Args;

/// List the kinds of tags that `generate` can write.
#[derive(Args, Clone, Debug)]
pub struct ListKinds {}

impl ListKinds {
    pub fn run(self) -> Result<()> {
        println!("{}", ANUBIS.name);
        for kind in ANUBIS.kinds {
            println!(
                "    {}  {:<12} {}{}",
                kind.letter(),
                kind.name(),
                kind.description(),
                if kind.enabled { "" } else { " [off]" }
            );
        }
        Ok(())
    }
}

/// List the file name patterns that `generate -R` searches for.
#[derive(Args, Clone, Debug)]
pub struct ListMaps {
    /// Settings file that adds extensions.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ListMaps {
    pub fn run(self) -> Result<()> {
        let settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        let patterns = settings
            .all_extensions()
            .map(|extension| format!("*.{extension}"))
            .collect::<Vec<_>>();
        println!("{:<8} {}", ANUBIS.name, patterns.join(" "));
        Ok(())
    }
}
