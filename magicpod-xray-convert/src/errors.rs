// Copyright (c) The magicpod-xray Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::Utf8PathBuf;
use thiserror::Error;

/// An error that occurs while loading a MagicPod batch-run report.
///
/// Returned by [`BatchRunReport::from_path`](crate::BatchRunReport::from_path)
/// and [`convert_file`](crate::convert_file). Either the whole report loads or
/// none of it does; there is no partial state to clean up.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report file could not be read.
    #[error("error reading MagicPod report at `{path}`")]
    Read {
        /// The path to the report file.
        path: Utf8PathBuf,
        /// The underlying error.
        #[source]
        error: std::io::Error,
    },

    /// The report file was read but is not valid MagicPod result JSON.
    #[error("error parsing MagicPod report at `{path}`")]
    Parse {
        /// The path to the report file.
        path: Utf8PathBuf,
        /// The underlying error.
        #[source]
        error: serde_json::Error,
    },
}
