// SPDX-License-Identifier: PMPL-1.0-or-later

//! Consistency checks across the bundled data set and reference tables

use polyglot::codes::CodeBook;
use polyglot::store::{JsonTranslator, Translator};

#[test]
fn test_bundled_tables_are_not_empty() {
    let store = JsonTranslator::bundled().expect("bundled data should parse");
    assert!(!store.countries().is_empty());
    assert!(!CodeBook::bundled_countries().is_empty());
    assert!(!CodeBook::bundled_languages().is_empty());
}

#[test]
fn test_every_bundled_country_has_a_display_name() {
    let store = JsonTranslator::bundled().expect("bundled data should parse");
    let countries = CodeBook::bundled_countries();
    for code in store.countries() {
        assert!(
            countries.from_code(&code).is_some(),
            "country {} should be in the reference table",
            code
        );
    }
}

#[test]
fn test_every_bundled_language_has_a_display_name() {
    let store = JsonTranslator::bundled().expect("bundled data should parse");
    let languages = CodeBook::bundled_languages();
    for country in store.countries() {
        for language in store.country_languages(&country) {
            assert!(
                languages.from_code(&language).is_some(),
                "language {} of {} should be in the reference table",
                language,
                country
            );
        }
    }
}

#[test]
fn test_bundled_data_translates_everything_it_lists() {
    let store = JsonTranslator::bundled().expect("bundled data should parse");
    for country in store.countries() {
        for language in store.country_languages(&country) {
            assert!(store.translate(&country, &language).is_some());
        }
    }
}

#[test]
fn test_bundled_reference_tables_round_trip() {
    for book in [CodeBook::bundled_countries(), CodeBook::bundled_languages()] {
        assert!(book.len() > 0);
        for code in book.codes() {
            let name = book.from_code(code).expect("every code should have a name");
            assert_eq!(book.from_name(name), Some(code));
        }
    }
}
