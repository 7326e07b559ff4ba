// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for the code <-> name reference books

use polyglot::codes::CodeBook;
use polyglot::error::DataLoadError;
use std::fs;
use tempfile::TempDir;

const COUNTRIES: &str = "Country\tAlpha-3 code\n\
    Canada\tCAN\n\
    Germany\tDEU\n\
    United States\tUSA\n";

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("country-codes.txt");
    fs::write(&path, COUNTRIES).unwrap();

    let book = CodeBook::load(&path).expect("load should succeed");
    assert_eq!(book.len(), 3);
    assert_eq!(book.from_code("usa"), Some("United States"));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let result = CodeBook::load(&dir.path().join("absent.txt"));
    assert!(matches!(result, Err(DataLoadError::Io { .. })));
}

#[test]
fn test_round_trip_code_name_code() {
    let book = CodeBook::parse(COUNTRIES);
    for code in ["can", "deu", "usa"] {
        let name = book.from_code(code).expect("code should have a name");
        assert_eq!(book.from_name(name), Some(code));
    }
}

#[test]
fn test_round_trip_name_code_name() {
    let book = CodeBook::parse(COUNTRIES);
    for name in ["Canada", "Germany", "United States"] {
        let code = book.from_name(name).expect("name should have a code");
        assert_eq!(book.from_code(code), Some(name));
    }
}

#[test]
fn test_code_lookup_ignores_case_both_ways() {
    let book = CodeBook::parse(COUNTRIES);
    assert_eq!(book.from_code("US"), book.from_code("us"));
    assert_eq!(book.from_code("CAN"), Some("Canada"));
    assert_eq!(book.from_code("can"), Some("Canada"));
}

#[test]
fn test_unknown_entries_are_absent_not_errors() {
    let book = CodeBook::parse(COUNTRIES);
    assert_eq!(book.from_code("zzz"), None);
    assert_eq!(book.from_name("Atlantis"), None);
}
