// SPDX-License-Identifier: PMPL-1.0-or-later

//! Bidirectional code <-> display-name books for countries and languages.
//!
//! Both reference tables share one shape: tab-delimited text, one header
//! line, then `Name<TAB>Code` records (further columns are ignored). Codes
//! are normalised to lower case on the way in, so [`CodeBook::from_code`] is
//! case-insensitive; names keep their original casing and
//! [`CodeBook::from_name`] matches it exactly.
//!
//! Duplicate codes or names keep the last occurrence. The source tables are
//! curated to be one-to-one, so in practice this never fires, but it is the
//! documented policy rather than an error.

use crate::error::DataLoadError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Alpha-3 country codes with English country names.
const COUNTRY_CODES: &str = include_str!("../../data/country-codes.txt");

/// ISO 639-1 language codes with English language names.
const LANGUAGE_CODES: &str = include_str!("../../data/language-codes.txt");

/// A code/name conversion table, built once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct CodeBook {
    code_to_name: HashMap<String, String>,
    name_to_code: HashMap<String, String>,
}

impl CodeBook {
    /// Parse a reference table from tab-delimited text.
    ///
    /// The first line is treated as a header and discarded. Records with
    /// fewer than two fields are skipped silently.
    pub fn parse(source: &str) -> Self {
        let mut book = CodeBook::default();
        for line in source.lines().skip(1) {
            let mut fields = line.split('\t');
            let (Some(name), Some(code)) = (fields.next(), fields.next()) else {
                continue;
            };
            let name = name.trim().to_string();
            let code = code.trim().to_lowercase();
            book.code_to_name.insert(code.clone(), name.clone());
            book.name_to_code.insert(name, code);
        }
        book
    }

    /// Load a reference table from a file on disk.
    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        let source = fs::read_to_string(path).map_err(|source| DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&source))
    }

    /// The country table bundled with the binary.
    pub fn bundled_countries() -> Self {
        Self::parse(COUNTRY_CODES)
    }

    /// The language table bundled with the binary.
    pub fn bundled_languages() -> Self {
        Self::parse(LANGUAGE_CODES)
    }

    /// Display name for a code. Case-insensitive on the code.
    pub fn from_code(&self, code: &str) -> Option<&str> {
        self.code_to_name
            .get(&code.to_lowercase())
            .map(String::as_str)
    }

    /// Code for a display name. Exact match against the stored casing.
    pub fn from_name(&self, name: &str) -> Option<&str> {
        self.name_to_code.get(name).map(String::as_str)
    }

    /// Resolve user input that may be either a display name or a code.
    ///
    /// Names are tried first (exact match), then codes (case-insensitive).
    /// Returns the stored `(code, name)` pair.
    pub fn resolve(&self, input: &str) -> Option<(&str, &str)> {
        if let Some(code) = self.name_to_code.get(input) {
            let name = self.code_to_name.get(code)?;
            return Some((code.as_str(), name.as_str()));
        }
        let (code, name) = self.code_to_name.get_key_value(&input.to_lowercase())?;
        Some((code.as_str(), name.as_str()))
    }

    /// All stored codes (lower case), in no particular order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.code_to_name.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.code_to_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code_to_name.is_empty()
    }
}
