// SPDX-License-Identifier: PMPL-1.0-or-later

//! Interactive prompt loop.
//!
//! Select a country, select a language, show the translation, ask whether to
//! continue, back to the top. Typing `quit` (any casing) at any prompt ends
//! the session cleanly; so does end-of-input. Selections are typed as
//! display names and resolved back to codes through the code books; input
//! that resolves to nothing prints a short notice and restarts the loop at
//! country selection.
//!
//! The loop is generic over its reader and writer so tests can drive it
//! with a scripted `Cursor` and inspect the transcript.

use crate::codes::CodeBook;
use crate::store::Translator;
use anyhow::Result;
use colored::*;
use std::io::{BufRead, Write};

/// Ends the session at any prompt, matched case-insensitively.
pub const QUIT: &str = "quit";

/// One interactive session over the three startup tables.
pub struct Session<'a> {
    pub translator: &'a dyn Translator,
    pub countries: &'a CodeBook,
    pub languages: &'a CodeBook,
}

impl Session<'_> {
    /// Run the prompt loop until the user quits or input ends.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<()> {
        loop {
            let Some(country_name) = self.prompt_for_country(input, out)? else {
                break;
            };
            if country_name.eq_ignore_ascii_case(QUIT) {
                break;
            }
            let Some(country_code) = self.countries.from_name(&country_name) else {
                writeln!(out, "{}", "Invalid country selected.".red())?;
                continue;
            };
            let country_code = country_code.to_string();

            let Some(language_name) = self.prompt_for_language(&country_code, input, out)? else {
                break;
            };
            if language_name.eq_ignore_ascii_case(QUIT) {
                break;
            }
            // Resolution failure restarts at country selection, same as an
            // invalid country. See DESIGN.md for the retry policy.
            let Some(language_code) = self.languages.from_name(&language_name) else {
                writeln!(out, "{}", "Invalid language selected.".red())?;
                continue;
            };

            match self.translator.translate(&country_code, language_code) {
                Some(text) => {
                    writeln!(out, "{} in {} is {}", country_name, language_name, text.bold())?;
                }
                None => writeln!(out, "{}", "Translation not found.".red())?,
            }

            writeln!(out, "Press enter to continue or quit to exit.")?;
            let Some(line) = read_line(input)? else {
                break;
            };
            if line.eq_ignore_ascii_case(QUIT) {
                break;
            }
        }
        Ok(())
    }

    /// List the translatable countries by display name and read a selection.
    ///
    /// Codes the country book cannot name are dropped from the list; they
    /// could not be typed back in anyway.
    fn prompt_for_country<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
    ) -> Result<Option<String>> {
        let mut names: Vec<&str> = self
            .translator
            .countries()
            .iter()
            .filter_map(|code| self.countries.from_code(code))
            .collect();
        names.sort_unstable();

        writeln!(out, "{}", "Available countries:".bold())?;
        for name in &names {
            writeln!(out, "{}", name)?;
        }
        writeln!(out, "Select a country from above:")?;
        read_line(input)
    }

    fn prompt_for_language<R: BufRead, W: Write>(
        &self,
        country_code: &str,
        input: &mut R,
        out: &mut W,
    ) -> Result<Option<String>> {
        let mut names: Vec<&str> = self
            .translator
            .country_languages(country_code)
            .iter()
            .filter_map(|code| self.languages.from_code(code))
            .collect();
        names.sort_unstable();

        writeln!(out, "{}", "Available languages:".bold())?;
        for name in &names {
            writeln!(out, "{}", name)?;
        }
        writeln!(out, "Select a language from above:")?;
        read_line(input)
    }
}

/// Read one trimmed line; `None` means end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
