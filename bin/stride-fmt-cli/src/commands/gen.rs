// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `stride-fmt gen` command: generate a synthetic input blob.

use crate::config::CliConfig;
use model_io::{fill_u32, FillPattern};
use std::path::Path;

pub fn execute(
    config: &CliConfig,
    output: &Path,
    count: usize,
    pattern: &str,
    seed: u64,
    value: u32,
) -> anyhow::Result<()> {
    let pattern = match pattern {
        "counting" => FillPattern::Counting,
        "constant" => FillPattern::Constant(value),
        "random" => FillPattern::Random { seed },
        other => anyhow::bail!(
            "unknown pattern '{other}'; expected 'counting', 'constant' or 'random'"
        ),
    };

    let data = fill_u32(count, pattern);
    super::format::write_blob(config, output, &data, "gen")
}
