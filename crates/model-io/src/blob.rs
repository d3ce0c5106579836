// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Whole-blob element I/O.
//!
//! Blobs are dense little-endian arrays of 4-byte elements with no
//! header. Reads memory-map the file and reinterpret the bytes in one
//! step; writes go through `std::fs`. The transcoders validate element
//! counts — this module only guarantees "whole file in, whole buffer
//! out" and rejects ragged byte lengths.

use crate::BlobError;
use layout_core::Element;
use std::path::Path;

/// Reads an entire blob as a vector of elements.
pub fn read_elements<E: Element>(path: &Path) -> Result<Vec<E>, BlobError> {
    let file = std::fs::File::open(path).map_err(|e| BlobError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let len = file
        .metadata()
        .map_err(|e| BlobError::Read {
            path: path.to_path_buf(),
            source: e,
        })?
        .len();
    if len == 0 {
        return Ok(Vec::new());
    }

    // Zero-copy view of the file; the pod collect below is the single
    // copy into an owned, aligned buffer.
    let mmap = unsafe { memmap2::Mmap::map(&file) }.map_err(|e| BlobError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let elements = elements_from_bytes(&mmap)?;
    tracing::debug!(
        path = %path.display(),
        elements = elements.len(),
        element = E::type_name(),
        "blob read",
    );
    Ok(elements)
}

/// Reinterprets raw bytes as a vector of elements.
pub fn elements_from_bytes<E: Element>(bytes: &[u8]) -> Result<Vec<E>, BlobError> {
    let width = std::mem::size_of::<E>();
    if bytes.len() % width != 0 {
        return Err(BlobError::RaggedBlob { len: bytes.len(), width });
    }
    Ok(bytemuck::pod_collect_to_vec(bytes))
}

/// Writes a vector of elements as a dense little-endian blob.
pub fn write_elements<E: Element>(path: &Path, data: &[E]) -> Result<(), BlobError> {
    std::fs::write(path, bytemuck::cast_slice::<E, u8>(data)).map_err(|e| BlobError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(
        path = %path.display(),
        elements = data.len(),
        element = E::type_name(),
        "blob written",
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join("stride_fmt_blob_tests");
        std::fs::create_dir_all(&dir).ok();
        dir.join(name)
    }

    #[test]
    fn test_roundtrip_u32() {
        let path = temp_path("roundtrip_u32.bin");
        let data: Vec<u32> = (0..100).collect();
        write_elements(&path, &data).unwrap();
        let back: Vec<u32> = read_elements(&path).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_roundtrip_f32() {
        let path = temp_path("roundtrip_f32.bin");
        let data: Vec<f32> = (0..100).map(|v| v as f32 * 0.5).collect();
        write_elements(&path, &data).unwrap();
        let back: Vec<f32> = read_elements(&path).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_empty_blob() {
        let path = temp_path("empty.bin");
        std::fs::write(&path, b"").unwrap();
        let back: Vec<u32> = read_elements(&path).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_ragged_blob_rejected() {
        let path = temp_path("ragged.bin");
        std::fs::write(&path, [0u8; 7]).unwrap();
        assert!(matches!(
            read_elements::<u32>(&path),
            Err(BlobError::RaggedBlob { len: 7, width: 4 }),
        ));
    }

    #[test]
    fn test_missing_file() {
        let path = temp_path("does_not_exist.bin");
        std::fs::remove_file(&path).ok();
        assert!(matches!(
            read_elements::<u32>(&path),
            Err(BlobError::Read { .. }),
        ));
    }

    #[test]
    fn test_bytes_are_little_endian() {
        let path = temp_path("le.bin");
        write_elements(&path, &[0x0403_0201u32]).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), vec![1, 2, 3, 4]);
    }
}
