// SPDX-License-Identifier: PMPL-1.0-or-later

//! Load-time error taxonomy.
//!
//! `DataLoadError` covers the only failures this tool treats as fatal: a
//! reference file that cannot be read, or translation data that does not
//! parse as the expected structure. Both happen during startup and abort the
//! process. Everything after startup is a lookup miss, reported as `None` by
//! the table types and handled locally by the prompt loop.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed translation data: {0}")]
    Parse(#[from] serde_json::Error),
}
