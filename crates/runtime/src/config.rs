// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Runtime configuration.
//!
//! Loaded from a TOML file or constructed programmatically.

use crate::RuntimeError;
use model_ir::{model::Validated, Model, ModelLoader};
use std::path::{Path, PathBuf};

/// How results are rendered by front ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `name [rows, cols]` header per variable followed by its values.
    #[default]
    Table,
    /// A single JSON object keyed by variable name.
    Json,
}

/// Top-level runtime configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RuntimeConfig {
    /// Path to the model XML document.
    pub model_path: PathBuf,
    /// Whether to record per-step timings during `apply`.
    #[serde(default = "default_true")]
    pub enable_profiling: bool,
    /// Result names to report. Empty means every workspace variable.
    #[serde(default)]
    pub outputs: Vec<String>,
    /// Result rendering.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_true() -> bool {
    true
}

impl RuntimeConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, RuntimeError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RuntimeError::ConfigError(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, RuntimeError> {
        toml::from_str(toml_str)
            .map_err(|e| RuntimeError::ConfigError(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, RuntimeError> {
        toml::to_string_pretty(self)
            .map_err(|e| RuntimeError::ConfigError(format!("TOML serialise error: {e}")))
    }

    /// Loads and validates the model at `model_path`.
    pub fn load_model(&self) -> Result<Model<Validated>, RuntimeError> {
        Ok(ModelLoader::load(&self.model_path)?)
    }

    /// Whether `name` should be reported, compared case-insensitively.
    pub fn wants_output(&self, name: &str) -> bool {
        self.outputs.is_empty() || self.outputs.iter().any(|o| o.eq_ignore_ascii_case(name))
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("./demos/pca_demo.xml"),
            enable_profiling: true,
            outputs: Vec::new(),
            format: OutputFormat::Table,
        }
    }
}
