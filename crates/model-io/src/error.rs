// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for blob I/O and batch transcoding.

use std::path::PathBuf;

/// Errors that can occur reading, writing or batch-transcoding blobs.
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    /// A source blob could not be opened or read.
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A destination blob could not be written.
    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A blob's byte length is not a whole number of elements.
    #[error("blob length {len} is not a multiple of the {width}-byte element width")]
    RaggedBlob { len: usize, width: usize },

    /// The hex-dump element width is unsupported.
    #[error("unsupported dump element width {0}: expected 1, 2, 4 or 8")]
    BadDumpWidth(usize),

    /// The manifest is malformed or internally inconsistent.
    #[error("manifest error: {0}")]
    Manifest(String),

    /// A manifest entry names an unrecognised layout kind.
    #[error("unknown layout kind '{0}'")]
    UnknownKind(String),

    /// Geometry derivation failed for a manifest entry's parameters.
    #[error(transparent)]
    Geometry(#[from] layout_core::GeometryError),

    /// A transcode rejected its source.
    #[error(transparent)]
    Format(#[from] layout_fmt::FormatError),
}

impl From<serde_json::Error> for BlobError {
    fn from(e: serde_json::Error) -> Self {
        BlobError::Manifest(e.to_string())
    }
}
