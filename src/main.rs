// SPDX-License-Identifier: PMPL-1.0-or-later

//! polyglot: translate country names between languages
//!
//! Loads the country translation data set plus the country and language
//! code reference tables, then either drives the interactive prompt loop
//! (the default) or answers a one-shot query via a subcommand.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use polyglot::codes::CodeBook;
use polyglot::repl::Session;
use polyglot::store::{JsonTranslator, Translator};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "polyglot")]
#[command(version = "1.0.0")]
#[command(about = "Translate country names between languages")]
#[command(long_about = None)]
struct Cli {
    /// Translation data file (JSON array of per-country records)
    #[arg(long, value_name = "FILE", global = true)]
    data: Option<PathBuf>,

    /// Country code reference table (tab-delimited, Name<TAB>Code)
    #[arg(long, value_name = "FILE", global = true)]
    country_codes: Option<PathBuf>,

    /// Language code reference table (tab-delimited, Name<TAB>Code)
    #[arg(long, value_name = "FILE", global = true)]
    language_codes: Option<PathBuf>,

    /// With no subcommand, the interactive prompt loop starts
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate one country name and exit
    Lookup {
        /// Country, as an alpha-3 code or an English display name
        #[arg(value_name = "COUNTRY")]
        country: String,

        /// Target language, as an ISO 639-1 code or an English display name
        #[arg(value_name = "LANGUAGE")]
        language: String,
    },

    /// List every country the data set can translate
    Countries,

    /// List the languages available for one country
    Languages {
        /// Country, as an alpha-3 code or an English display name
        #[arg(value_name = "COUNTRY")]
        country: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let translator = match &cli.data {
        Some(path) => JsonTranslator::load(path)
            .with_context(|| format!("loading translation data from {}", path.display()))?,
        None => JsonTranslator::bundled().context("loading bundled translation data")?,
    };
    let countries = match &cli.country_codes {
        Some(path) => CodeBook::load(path)
            .with_context(|| format!("loading country codes from {}", path.display()))?,
        None => CodeBook::bundled_countries(),
    };
    let languages = match &cli.language_codes {
        Some(path) => CodeBook::load(path)
            .with_context(|| format!("loading language codes from {}", path.display()))?,
        None => CodeBook::bundled_languages(),
    };

    match cli.command {
        None => {
            let session = Session {
                translator: &translator,
                countries: &countries,
                languages: &languages,
            };
            let stdin = io::stdin();
            session.run(&mut stdin.lock(), &mut io::stdout())?;
        }

        Some(Commands::Lookup { country, language }) => {
            lookup(&translator, &countries, &languages, &country, &language);
        }

        Some(Commands::Countries) => {
            let mut rows: Vec<(&str, String)> = Vec::new();
            for code in translator.countries() {
                if let Some(name) = countries.from_code(&code) {
                    rows.push((name, code));
                }
            }
            rows.sort_unstable();

            println!("{}", "Available countries:".bold());
            for (name, code) in &rows {
                println!("  {}  {}", code, name);
            }
        }

        Some(Commands::Languages { country }) => {
            let Some((code, name)) = countries.resolve(&country) else {
                println!("{}", "Invalid country selected.".red());
                return Ok(());
            };
            let mut names: Vec<&str> = translator
                .country_languages(code)
                .iter()
                .filter_map(|lang| languages.from_code(lang))
                .collect();
            names.sort_unstable();

            println!("{} {}", "Available languages for".bold(), name.bold());
            for lang in &names {
                println!("  {}", lang);
            }
        }
    }

    Ok(())
}

/// One-shot translation. Unknown inputs and missing pairs print the same
/// messages the interactive loop uses and exit cleanly.
fn lookup(
    translator: &dyn Translator,
    countries: &CodeBook,
    languages: &CodeBook,
    country: &str,
    language: &str,
) {
    let Some((country_code, country_name)) = countries.resolve(country) else {
        println!("{}", "Invalid country selected.".red());
        return;
    };
    let Some((language_code, language_name)) = languages.resolve(language) else {
        println!("{}", "Invalid language selected.".red());
        return;
    };

    match translator.translate(country_code, language_code) {
        Some(text) => println!("{} in {} is {}", country_name, language_name, text.bold()),
        None => println!("{}", "Translation not found.".red()),
    }
}
