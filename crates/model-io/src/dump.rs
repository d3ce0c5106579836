// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Little-endian hex dumping of element blobs.
//!
//! Rows of `stride` elements mirror the accelerator's addressable rows,
//! so a dump of a formatted blob reads like the memory bank itself.

use crate::BlobError;
use std::fmt::Write as _;
use std::path::Path;

/// Options controlling a hex dump.
#[derive(Debug, Clone)]
pub struct DumpOptions {
    /// First element to print.
    pub offset: usize,
    /// Elements to print; 0 means "to the end of the blob".
    pub count: usize,
    /// Bytes per element (1, 2, 4 or 8).
    pub bytes: usize,
    /// Elements per output row.
    pub stride: usize,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            offset: 0,
            count: 0,
            bytes: 4,
            stride: layout_core::STRIDE,
        }
    }
}

/// Renders a window of `data` as little-endian hex elements.
pub fn dump(data: &[u8], opts: &DumpOptions) -> Result<String, BlobError> {
    if !matches!(opts.bytes, 1 | 2 | 4 | 8) {
        return Err(BlobError::BadDumpWidth(opts.bytes));
    }

    let total = data.len() / opts.bytes;
    let start = opts.offset.min(total);
    let end = if opts.count == 0 {
        total
    } else {
        (start + opts.count).min(total)
    };

    let mut out = String::new();
    for (printed, index) in (start..end).enumerate() {
        let element = &data[index * opts.bytes..(index + 1) * opts.bytes];
        for byte in element.iter().rev() {
            let _ = write!(out, "{byte:02x}");
        }
        out.push(' ');
        if (printed + 1) % opts.stride == 0 {
            out.push('\n');
        }
    }
    if (end - start) % opts.stride != 0 {
        out.push('\n');
    }
    Ok(out)
}

/// Dumps a window of the blob at `path`.
pub fn dump_file(path: &Path, opts: &DumpOptions) -> Result<String, BlobError> {
    let data = std::fs::read(path).map_err(|e| BlobError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    dump(&data, opts)
}
