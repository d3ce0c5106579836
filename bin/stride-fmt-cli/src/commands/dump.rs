// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `stride-fmt dump` command: little-endian hex dump of a blob.

use crate::config::CliConfig;
use model_io::{dump_file, DumpOptions};
use std::path::Path;

pub fn execute(
    config: &CliConfig,
    input: &Path,
    offset: usize,
    count: usize,
    stride: Option<usize>,
    bytes: Option<usize>,
) -> anyhow::Result<()> {
    let opts = DumpOptions {
        offset,
        count,
        bytes: bytes.unwrap_or(config.dump_bytes),
        stride: stride.unwrap_or(config.dump_stride),
    };
    let text = dump_file(input, &opts)?;
    print!("{text}");
    Ok(())
}
