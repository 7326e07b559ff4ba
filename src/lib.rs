// SPDX-License-Identifier: PMPL-1.0-or-later

//! Polyglot: translation of country names across languages.
//!
//! The tool is three read-only tables and a prompt loop over them:
//!
//! 1. **store**: country code -> language code -> translated name, loaded
//!    from a JSON data file (or the bundled snapshot).
//! 2. **codes**: bidirectional code <-> display-name books for countries
//!    and for languages, loaded from tab-delimited reference tables.
//! 3. **repl**: the interactive select-country / select-language /
//!    show-translation loop tying the tables together.
//!
//! All tables are built once at startup and never mutated afterwards, so the
//! loop holds plain shared references for its whole lifetime.

pub mod codes;
pub mod error;
pub mod repl;
pub mod store;
