// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # stride-fmt
//!
//! Command-line interface for the STRIDE layout transcoders.
//!
//! ## Usage
//! ```bash
//! # Transcode a 3x3 conv layer's kernels
//! stride-fmt format-weight --input conv1.bin --output conv1.fpga \
//!     --dim 3 --inputs 64 --outputs 3
//!
//! # Transcode a batch of activations with same-conv padding
//! stride-fmt format-img --input maps.bin --output maps.fpga \
//!     --dim 3 --img-h 28 --img-count 50 --same-conv
//!
//! # Transcode a whole model from a manifest
//! stride-fmt batch --manifest model.json
//!
//! # Inspect derived geometry, dump a formatted blob
//! stride-fmt inspect --dim 3 --inputs 64 --outputs 3
//! stride-fmt dump --input conv1.fpga --offset 1920 -n 64
//! ```

mod commands;
mod config;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "stride-fmt",
    about = "Tensor layout transcoder for the STRIDE FPGA inference engine",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file with defaults for dump and
    /// output options.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transcode convolution kernel weights.
    FormatWeight {
        /// Source blob to read.
        #[arg(long)]
        input: PathBuf,

        /// Destination blob to write.
        #[arg(long)]
        output: PathBuf,

        /// Kernel dimension (1, 3, 5 or 7).
        #[arg(long)]
        dim: usize,

        /// Input channel count.
        #[arg(long)]
        inputs: usize,

        /// Output channel count.
        #[arg(long)]
        outputs: usize,
    },

    /// Transcode conv-pipeline fully-connected weights.
    FormatConvFcw {
        /// Source blob to read.
        #[arg(long)]
        input: PathBuf,

        /// Destination blob to write.
        #[arg(long)]
        output: PathBuf,

        /// Input weight count per output channel.
        #[arg(long)]
        inputs: usize,

        /// Output channel count.
        #[arg(long)]
        outputs: usize,
    },

    /// Transcode fully-connected weights.
    FormatFcFcw {
        /// Source blob to read.
        #[arg(long)]
        input: PathBuf,

        /// Destination blob to write.
        #[arg(long)]
        output: PathBuf,

        /// Input weight count per output channel.
        #[arg(long)]
        inputs: usize,

        /// Output channel count.
        #[arg(long)]
        outputs: usize,
    },

    /// Transcode convolution bias vectors.
    FormatBias {
        /// Source blob to read.
        #[arg(long)]
        input: PathBuf,

        /// Destination blob to write.
        #[arg(long)]
        output: PathBuf,

        /// Channel count.
        #[arg(long)]
        inputs: usize,
    },

    /// Transcode fully-connected bias vectors.
    FormatFcBias {
        /// Source blob to read.
        #[arg(long)]
        input: PathBuf,

        /// Destination blob to write.
        #[arg(long)]
        output: PathBuf,

        /// Channel count.
        #[arg(long)]
        inputs: usize,
    },

    /// Transcode batch-norm scale/shift pairs.
    FormatBn {
        /// Scale blob to read.
        #[arg(long)]
        weights: PathBuf,

        /// Shift blob to read.
        #[arg(long)]
        biases: PathBuf,

        /// Destination blob to write.
        #[arg(long)]
        output: PathBuf,

        /// Channel count.
        #[arg(long)]
        inputs: usize,

        /// Use the fully-connected slot order (one row per channel).
        #[arg(long)]
        fc: bool,
    },

    /// Transcode a batch of square feature maps.
    FormatImg {
        /// Source blob to read.
        #[arg(long)]
        input: PathBuf,

        /// Destination blob to write.
        #[arg(long)]
        output: PathBuf,

        /// Kernel dimension the maps feed (1, 3, 5 or 7).
        #[arg(long)]
        dim: usize,

        /// Map height in pixels.
        #[arg(long)]
        img_h: usize,

        /// Number of maps.
        #[arg(long)]
        img_count: usize,

        /// Channel planes per map.
        #[arg(long, default_value_t = 1)]
        channels: usize,

        /// Add same-convolution border padding.
        #[arg(long)]
        same_conv: bool,
    },

    /// Paint convs of a kernel-weight buffer with a tag pattern.
    FillConv {
        /// Existing formatted blob to start from; a zeroed buffer is
        /// used when absent or of the wrong size.
        #[arg(long)]
        input: Option<PathBuf>,

        /// Destination blob to write.
        #[arg(long)]
        output: PathBuf,

        /// Kernel dimension (1, 3, 5 or 7).
        #[arg(long)]
        dim: usize,

        /// Input channel count.
        #[arg(long)]
        inputs: usize,

        /// Output channel count.
        #[arg(long)]
        outputs: usize,

        /// Cell to fill; with --conv, paints just that conv.
        #[arg(long)]
        cell: Option<usize>,

        /// Conv to fill within --cell.
        #[arg(long)]
        conv: Option<usize>,

        /// Low tag byte (the element index when zero).
        #[arg(long, default_value_t = 0)]
        value: u32,
    },

    /// Generate a synthetic input blob.
    Gen {
        /// Destination blob to write.
        #[arg(long)]
        output: PathBuf,

        /// Element count.
        #[arg(long)]
        count: usize,

        /// Fill pattern: counting, constant or random.
        #[arg(long, default_value = "counting")]
        pattern: String,

        /// Seed for the random pattern.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Value for the constant pattern.
        #[arg(long, default_value_t = 0)]
        value: u32,
    },

    /// Hex-dump a blob as little-endian elements.
    Dump {
        /// Blob to dump.
        #[arg(long)]
        input: PathBuf,

        /// First element to print.
        #[arg(short, long, default_value_t = 0)]
        offset: usize,

        /// Elements to print (0 = to the end).
        #[arg(short = 'n', long, default_value_t = 0)]
        count: usize,

        /// Elements per row.
        #[arg(short, long)]
        stride: Option<usize>,

        /// Bytes per element (1, 2, 4 or 8).
        #[arg(short, long)]
        bytes: Option<usize>,
    },

    /// Transcode every tensor listed in a JSON manifest.
    Batch {
        /// Manifest path; blob paths resolve against its directory.
        #[arg(short, long)]
        manifest: PathBuf,
    },

    /// Print the derived layout geometry for a set of shape parameters.
    Inspect {
        /// Kernel dimension (1, 3, 5 or 7).
        #[arg(long)]
        dim: usize,

        /// Input channel count (kernel weight geometry).
        #[arg(long, default_value_t = 0)]
        inputs: usize,

        /// Output channel count (kernel weight geometry).
        #[arg(long, default_value_t = 0)]
        outputs: usize,

        /// Map height (feature-map geometry).
        #[arg(long)]
        img_h: Option<usize>,

        /// Map count (feature-map geometry).
        #[arg(long)]
        img_count: Option<usize>,

        /// Assume same-convolution border padding.
        #[arg(long)]
        same_conv: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    commands::init_tracing(cli.verbose);

    let config = config::CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::FormatWeight { input, output, dim, inputs, outputs } => {
            commands::format::weight(&config, &input, &output, dim, inputs, outputs)
        }
        Commands::FormatConvFcw { input, output, inputs, outputs } => {
            commands::format::conv_fcw(&config, &input, &output, inputs, outputs)
        }
        Commands::FormatFcFcw { input, output, inputs, outputs } => {
            commands::format::fc_fcw(&config, &input, &output, inputs, outputs)
        }
        Commands::FormatBias { input, output, inputs } => {
            commands::format::bias(&config, &input, &output, inputs)
        }
        Commands::FormatFcBias { input, output, inputs } => {
            commands::format::fc_bias(&config, &input, &output, inputs)
        }
        Commands::FormatBn { weights, biases, output, inputs, fc } => {
            commands::format::batch_norm(&config, &weights, &biases, &output, inputs, fc)
        }
        Commands::FormatImg {
            input,
            output,
            dim,
            img_h,
            img_count,
            channels,
            same_conv,
        } => commands::format::feature_maps(
            &config, &input, &output, dim, img_h, img_count, channels, same_conv,
        ),
        Commands::FillConv {
            input,
            output,
            dim,
            inputs,
            outputs,
            cell,
            conv,
            value,
        } => commands::fill::execute(
            &config,
            input.as_deref(),
            &output,
            dim,
            inputs,
            outputs,
            cell,
            conv,
            value,
        ),
        Commands::Gen { output, count, pattern, seed, value } => {
            commands::gen::execute(&config, &output, count, &pattern, seed, value)
        }
        Commands::Dump { input, offset, count, stride, bytes } => {
            commands::dump::execute(&config, &input, offset, count, stride, bytes)
        }
        Commands::Batch { manifest } => commands::batch::execute(&manifest),
        Commands::Inspect { dim, inputs, outputs, img_h, img_count, same_conv } => {
            commands::inspect::execute(dim, inputs, outputs, img_h, img_count, same_conv)
        }
    }
}
