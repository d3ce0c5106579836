// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `stride-fmt batch` command: transcode every tensor in a manifest.

use model_io::{run_manifest, FormatManifest};
use std::path::Path;

pub fn execute(manifest_path: &Path) -> anyhow::Result<()> {
    let manifest = FormatManifest::from_file(manifest_path)?;
    let base_dir = manifest_path.parent().unwrap_or_else(|| Path::new("."));

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║            stride-fmt · Batch Transcoder            ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
    println!("  Model: {} ({} tensors)", manifest.name, manifest.tensors.len());
    println!();

    let outcomes = run_manifest(&manifest, base_dir)?;

    println!(
        "  {:<24} {:<14} {:>10} {:>10}",
        "Tensor", "Kind", "Src", "Dest",
    );
    println!("  {}", "-".repeat(62));
    for outcome in &outcomes {
        println!(
            "  {:<24} {:<14} {:>10} {:>10}",
            outcome.name,
            outcome.kind.as_str(),
            outcome.src_len,
            outcome.dest_len,
        );
    }
    println!();
    println!("  {} tensors transcoded.", outcomes.len());

    Ok(())
}
