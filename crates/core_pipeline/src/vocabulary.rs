//! Canonical drug-name vocabulary
//!
//! A fixed, lowercase list of drug names loaded once at process start and
//! shared read-only for the process lifetime.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Immutable list of canonical drug names.
///
/// Entries are lowercase; matching lowercases tokens before comparing, so
/// dedup across cases falls out for free.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    entries: Vec<String>,
}

impl Vocabulary {
    /// Load from a newline-delimited file.
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    /// Load from any reader. Entries are trimmed and lowercased; blank
    /// lines are dropped.
    pub fn from_reader(reader: impl Read) -> io::Result<Self> {
        let mut entries = Vec::new();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            let entry = line.trim().to_lowercase();
            if !entry.is_empty() {
                entries.push(entry);
            }
        }
        Ok(Self { entries })
    }

    /// Build from in-memory names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect();
        Self { entries }
    }

    /// Canonical names in file order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
