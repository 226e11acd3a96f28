// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared CLI plumbing.

pub mod inspect;
pub mod run;

use anyhow::Context;
use runtime::RuntimeConfig;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows the `-v` count.
/// Logs go to stderr so that `--json` output stays machine-readable.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the effective configuration from an optional TOML file and an
/// optional `--model` override.
pub fn resolve_config(
    config_path: Option<&Path>,
    model: Option<PathBuf>,
) -> anyhow::Result<RuntimeConfig> {
    let mut config = match config_path {
        Some(path) => RuntimeConfig::from_file(path)
            .with_context(|| format!("loading config '{}'", path.display()))?,
        None => {
            let Some(model) = model.as_ref() else {
                anyhow::bail!("no model given: pass --model or a --config naming model_path");
            };
            RuntimeConfig {
                model_path: model.clone(),
                ..Default::default()
            }
        }
    };
    if let Some(model) = model {
        config.model_path = model;
    }
    tracing::debug!("effective config: {config:?}");
    Ok(config)
}
