// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! CLI configuration loaded from TOML files or constructed with defaults.
//!
//! # TOML Format
//! ```toml
//! output_dir = "./out"
//! dump_stride = 32
//! dump_bytes = 4
//! ```

use std::path::{Path, PathBuf};

/// Defaults for the optional CLI flags.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CliConfig {
    /// Directory prepended to relative destination paths.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Default hex-dump row width in elements.
    #[serde(default = "default_dump_stride")]
    pub dump_stride: usize,

    /// Default hex-dump element width in bytes.
    #[serde(default = "default_dump_bytes")]
    pub dump_bytes: usize,
}

fn default_dump_stride() -> usize {
    layout_core::STRIDE
}

fn default_dump_bytes() -> usize {
    4
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            dump_stride: default_dump_stride(),
            dump_bytes: default_dump_bytes(),
        }
    }
}

impl CliConfig {
    /// Loads the configuration file when one is given; defaults otherwise.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read config '{}': {e}", path.display()))?;
        toml::from_str(&content).map_err(|e| anyhow::anyhow!("config parse error: {e}"))
    }

    /// Resolves a destination path against the configured output
    /// directory. Absolute paths pass through unchanged.
    pub fn resolve_output(&self, path: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = CliConfig::default();
        assert_eq!(c.dump_stride, 32);
        assert_eq!(c.dump_bytes, 4);
        assert!(c.output_dir.is_none());
    }

    #[test]
    fn test_from_toml() {
        let c: CliConfig = toml::from_str(
            r#"
output_dir = "/tmp/out"
dump_stride = 16
"#,
        )
        .unwrap();
        assert_eq!(c.output_dir, Some(PathBuf::from("/tmp/out")));
        assert_eq!(c.dump_stride, 16);
        assert_eq!(c.dump_bytes, 4);
    }

    #[test]
    fn test_resolve_output() {
        let c = CliConfig {
            output_dir: Some(PathBuf::from("/tmp/out")),
            ..Default::default()
        };
        assert_eq!(
            c.resolve_output(Path::new("w.fpga")),
            PathBuf::from("/tmp/out/w.fpga"),
        );
        assert_eq!(
            c.resolve_output(Path::new("/abs/w.fpga")),
            PathBuf::from("/abs/w.fpga"),
        );
    }
}
