// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! JSON format manifest parsing.
//!
//! The manifest describes a model's tensors and how each one maps onto
//! the accelerator: the layout kind, the shape parameters, and the
//! source/destination blob paths.
//!
//! # Format
//! ```json
//! {
//!   "name": "lenet-fpga",
//!   "tensors": [
//!     {
//!       "name": "conv1.weight",
//!       "kind": "weight",
//!       "dim": 3, "inputs": 1, "outputs": 6,
//!       "input": "conv1_weight.bin",
//!       "output": "conv1_weight.fpga"
//!     },
//!     {
//!       "name": "bn1",
//!       "kind": "bn_conv",
//!       "inputs": 6,
//!       "input": "bn1_scale.bin",
//!       "bias_input": "bn1_shift.bin",
//!       "output": "bn1.fpga"
//!     },
//!     ...
//!   ]
//! }
//! ```

use crate::BlobError;
use std::path::{Path, PathBuf};

/// The layout families a manifest entry can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    Weight,
    ConvFcw,
    FcFcw,
    Bias,
    FcBias,
    BnConv,
    BnFc,
    FeatureMaps,
}

impl LayoutKind {
    /// Parses a kind string, accepting `_` and `-` interchangeably.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "weight" => Some(LayoutKind::Weight),
            "conv_fcw" => Some(LayoutKind::ConvFcw),
            "fc_fcw" => Some(LayoutKind::FcFcw),
            "bias" => Some(LayoutKind::Bias),
            "fc_bias" => Some(LayoutKind::FcBias),
            "bn_conv" => Some(LayoutKind::BnConv),
            "bn_fc" => Some(LayoutKind::BnFc),
            "feature_maps" | "img" => Some(LayoutKind::FeatureMaps),
            _ => None,
        }
    }

    /// Canonical kind string.
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutKind::Weight => "weight",
            LayoutKind::ConvFcw => "conv_fcw",
            LayoutKind::FcFcw => "fc_fcw",
            LayoutKind::Bias => "bias",
            LayoutKind::FcBias => "fc_bias",
            LayoutKind::BnConv => "bn_conv",
            LayoutKind::BnFc => "bn_fc",
            LayoutKind::FeatureMaps => "feature_maps",
        }
    }

    /// `true` for the pair layouts that take a second source blob.
    pub fn takes_pair(self) -> bool {
        matches!(self, LayoutKind::BnConv | LayoutKind::BnFc)
    }
}

/// Top-level format manifest.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FormatManifest {
    /// Human-readable model name.
    pub name: String,
    /// Tensor entries to transcode, in order.
    pub tensors: Vec<TensorEntry>,
}

/// A single tensor entry in the manifest.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TensorEntry {
    /// Tensor name (e.g., `"conv1.weight"`).
    pub name: String,
    /// Layout kind string (see [`LayoutKind`]).
    pub kind: String,
    /// Kernel dimension, for `weight` and `feature_maps`.
    #[serde(default)]
    pub dim: usize,
    /// Input channel / weight count.
    #[serde(default)]
    pub inputs: usize,
    /// Output channel count, for the weight layouts.
    #[serde(default)]
    pub outputs: usize,
    /// Map height, for `feature_maps`.
    #[serde(default)]
    pub img_h: usize,
    /// Map count, for `feature_maps`.
    #[serde(default)]
    pub img_count: usize,
    /// Channel planes per map, for `feature_maps`.
    #[serde(default = "default_channels")]
    pub channels: usize,
    /// Add same-convolution border padding, for `feature_maps`.
    #[serde(default)]
    pub same_conv: bool,
    /// Source blob path (the scale blob for the `bn_*` kinds).
    pub input: PathBuf,
    /// Second source blob for the `bn_*` kinds (the shift blob).
    #[serde(default)]
    pub bias_input: Option<PathBuf>,
    /// Destination blob path.
    pub output: PathBuf,
}

fn default_channels() -> usize {
    1
}

impl FormatManifest {
    /// Loads a manifest from a JSON file path.
    pub fn from_file(path: &Path) -> Result<Self, BlobError> {
        let content = std::fs::read_to_string(path).map_err(|e| BlobError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// Parses a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, BlobError> {
        let manifest: Self = serde_json::from_str(json)?;
        Ok(manifest)
    }

    /// Validates that the manifest is internally consistent.
    ///
    /// Checks:
    /// - At least one tensor is listed.
    /// - No duplicate tensor names.
    /// - Every kind string is recognised.
    /// - Each entry carries the shape parameters its kind needs.
    /// - The `bn_*` kinds carry a `bias_input`.
    pub fn validate(&self) -> Result<(), BlobError> {
        if self.tensors.is_empty() {
            return Err(BlobError::Manifest("manifest lists no tensors".into()));
        }

        let mut seen = std::collections::HashSet::new();
        for entry in &self.tensors {
            if !seen.insert(&entry.name) {
                return Err(BlobError::Manifest(format!(
                    "duplicate tensor name '{}'",
                    entry.name,
                )));
            }
            entry.validate()?;
        }
        Ok(())
    }
}

impl TensorEntry {
    /// Parses this entry's layout kind.
    pub fn layout_kind(&self) -> Result<LayoutKind, BlobError> {
        LayoutKind::from_str_loose(&self.kind)
            .ok_or_else(|| BlobError::UnknownKind(self.kind.clone()))
    }

    fn validate(&self) -> Result<(), BlobError> {
        let kind = self.layout_kind()?;
        let missing = |what: &str| {
            Err(BlobError::Manifest(format!(
                "tensor '{}' ({}) needs {what}",
                self.name,
                kind.as_str(),
            )))
        };

        match kind {
            LayoutKind::Weight => {
                if self.dim == 0 {
                    return missing("a kernel dim");
                }
                if self.inputs == 0 || self.outputs == 0 {
                    return missing("input and output channel counts");
                }
            }
            LayoutKind::ConvFcw | LayoutKind::FcFcw => {
                if self.inputs == 0 || self.outputs == 0 {
                    return missing("input and output counts");
                }
            }
            LayoutKind::Bias | LayoutKind::FcBias | LayoutKind::BnConv | LayoutKind::BnFc => {
                if self.inputs == 0 {
                    return missing("a channel count");
                }
            }
            LayoutKind::FeatureMaps => {
                if self.dim == 0 {
                    return missing("a kernel dim");
                }
                if self.img_h == 0 || self.img_count == 0 {
                    return missing("a map height and count");
                }
            }
        }

        if kind.takes_pair() && self.bias_input.is_none() {
            return missing("a bias_input blob");
        }
        Ok(())
    }
}
