// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

/// Errors raised while loading configuration or memorial records.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        /// The file involved.
        path: PathBuf,

        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The memorial store is not valid JSON of a known shape.
    #[error("Invalid memorial store: {0}")]
    Json(#[from] serde_json::Error),

    /// The memorial store was written by a newer version.
    #[error("Unsupported memorial store version: {0}")]
    UnsupportedStoreVersion(u32),

    /// A path could not be resolved.
    #[error("{0}")]
    Path(String),
}
