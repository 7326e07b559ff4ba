// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation store: country code -> language code -> translated name.
//!
//! The data file is a JSON array of flat string-to-string objects. One key
//! identifies the country (`"cca3"`, with `"countryCode"` accepted as a
//! fallback for older exports); every other key is a language code whose
//! value is the country's name in that language. Records with neither
//! identifier key are skipped silently; anything that is not an array of
//! string maps is a fatal [`DataLoadError`].
//!
//! Lookups ignore the case of both codes. Country codes are reported back
//! exactly as they appear in the data file.

use crate::error::DataLoadError;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Bundled snapshot of the translation data set.
const TRANSLATIONS: &str = include_str!("../../data/countries.json");

/// Primary country identifier key in the data file.
const KEY_CCA3: &str = "cca3";

/// Identifier key used by older exports of the data set.
const KEY_COUNTRY_CODE: &str = "countryCode";

/// Read-only source of country name translations.
///
/// The prompt loop needs exactly these lookups, so any backing source (a
/// data file, the bundled snapshot, an in-memory fixture in tests) can
/// stand in for the real one.
pub trait Translator {
    /// All country codes with at least one translation, as loaded.
    fn countries(&self) -> Vec<String>;

    /// Language codes available for a country; empty for unknown countries.
    fn country_languages(&self, country: &str) -> Vec<String>;

    /// The translated country name, or `None` when either code is unknown.
    /// A miss is a normal outcome, not a failure.
    fn translate(&self, country: &str, language: &str) -> Option<&str>;
}

#[derive(Debug)]
struct CountryRecord {
    /// Code exactly as it appears in the data file, e.g. `CAN`.
    code: String,
    /// Language code (lower case) -> translated country name.
    names: BTreeMap<String, String>,
}

/// [`Translator`] backed by the JSON data file.
#[derive(Debug)]
pub struct JsonTranslator {
    /// Keyed by lower-cased country code so lookups ignore case.
    records: BTreeMap<String, CountryRecord>,
}

impl JsonTranslator {
    /// Parse translation data from a JSON string.
    pub fn parse(source: &str) -> Result<Self, DataLoadError> {
        let raw: Vec<BTreeMap<String, String>> = serde_json::from_str(source)?;
        let mut records = BTreeMap::new();
        for mut entry in raw {
            // Both identifier keys are stripped before the rest of the
            // record is read as language entries.
            let primary = entry.remove(KEY_CCA3);
            let fallback = entry.remove(KEY_COUNTRY_CODE);
            let Some(code) = primary.or(fallback) else {
                continue;
            };
            let names: BTreeMap<String, String> = entry
                .into_iter()
                .map(|(lang, text)| (lang.to_lowercase(), text))
                .collect();
            if names.is_empty() {
                continue;
            }
            records.insert(code.to_lowercase(), CountryRecord { code, names });
        }
        Ok(Self { records })
    }

    /// Load translation data from a file on disk.
    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        let source = fs::read_to_string(path).map_err(|source| DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }

    /// Translator over the data set bundled with the binary.
    pub fn bundled() -> Result<Self, DataLoadError> {
        Self::parse(TRANSLATIONS)
    }
}

impl Translator for JsonTranslator {
    fn countries(&self) -> Vec<String> {
        self.records.values().map(|r| r.code.clone()).collect()
    }

    fn country_languages(&self, country: &str) -> Vec<String> {
        match self.records.get(&country.to_lowercase()) {
            Some(record) => record.names.keys().cloned().collect(),
            None => Vec::new(),
        }
    }

    fn translate(&self, country: &str, language: &str) -> Option<&str> {
        self.records
            .get(&country.to_lowercase())?
            .names
            .get(&language.to_lowercase())
            .map(String::as_str)
    }
}
