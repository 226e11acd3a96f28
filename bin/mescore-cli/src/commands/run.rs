// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `mescore run`: load a model, score input rows, print results.

use anyhow::Context;
use matrix_core::Matrix;
use runtime::{ApplyMetrics, OutputFormat, RuntimeConfig, ScoringEngine};
use std::path::{Path, PathBuf};

/// Where input rows come from.
#[derive(Debug, Clone)]
pub enum InputSource {
    /// One comma-separated row given on the command line.
    Row(String),
    /// A CSV file, one row per line.
    File(PathBuf),
    /// The row `1, 2, ..., n`, with `n` taken from the model.
    Ramp,
}

/// Results for one scored row.
#[derive(Debug, serde::Serialize)]
struct ScoredRow {
    input: Vec<f64>,
    results: Vec<NamedResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metrics: Option<ApplyMetrics>,
}

#[derive(Debug, serde::Serialize)]
struct NamedResult {
    name: String,
    #[serde(flatten)]
    value: Matrix,
}

pub async fn execute(config: RuntimeConfig, source: InputSource) -> anyhow::Result<()> {
    let format = config.format;
    let model_path = config.model_path.clone();

    // Loading and scoring are synchronous; keep them off the async workers.
    let scored = tokio::task::spawn_blocking(move || score(&config, source))
        .await
        .context("scoring task failed")??;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&scored)?);
        }
        OutputFormat::Table => print_table(&model_path, &scored),
    }
    Ok(())
}

fn score(config: &RuntimeConfig, source: InputSource) -> anyhow::Result<Vec<ScoredRow>> {
    let mut engine = ScoringEngine::from_config(config).with_context(|| {
        format!("failed to load model from '{}'", config.model_path.display())
    })?;
    let width = engine.model().input_data_size();

    let rows = match source {
        InputSource::Row(text) => vec![parse_row(&text)?],
        InputSource::File(path) => read_rows(&path)?,
        InputSource::Ramp => vec![ramp(width)],
    };
    tracing::info!("scoring {} row(s) against a width-{width} model", rows.len());

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| -> anyhow::Result<ScoredRow> {
            engine
                .set_input_row(&row)
                .with_context(|| format!("row {}", i + 1))?;
            engine.apply().with_context(|| format!("applying model to row {}", i + 1))?;

            let results = engine
                .results()?
                .into_iter()
                .filter(|(name, _)| config.wants_output(name))
                .map(|(name, value)| NamedResult {
                    name: name.to_string(),
                    value: value.clone(),
                })
                .collect::<Vec<_>>();

            // Requested names that the model never produced are an error.
            for wanted in &config.outputs {
                engine.get_var(wanted)?;
            }

            Ok(ScoredRow {
                input: row,
                results,
                metrics: engine.metrics().cloned(),
            })
        })
        .collect()
}

/// Parses `"v1, v2, ..."` into a row of values.
pub fn parse_row(text: &str) -> anyhow::Result<Vec<f64>> {
    text.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| {
            v.parse::<f64>()
                .with_context(|| format!("invalid input value '{v}'"))
        })
        .collect()
}

/// Reads one row per non-empty, non-`#` line.
fn read_rows(path: &Path) -> anyhow::Result<Vec<Vec<f64>>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read input file '{}'", path.display()))?;
    let rows = content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(n, line)| {
            parse_row(line).with_context(|| format!("{}:{}", path.display(), n + 1))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    if rows.is_empty() {
        anyhow::bail!("input file '{}' contains no rows", path.display());
    }
    Ok(rows)
}

/// The row `1, 2, ..., width`.
pub fn ramp(width: usize) -> Vec<f64> {
    (1..=width).map(|i| i as f64).collect()
}

fn print_table(model_path: &Path, scored: &[ScoredRow]) {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║               mescore · Model Scoring               ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
    println!("  Model: {}", model_path.display());
    println!();

    for (i, row) in scored.iter().enumerate() {
        println!("  ── Row {} ─ {}", i + 1, format_row(&row.input));
        for result in &row.results {
            println!("   {} {}", result.name, result.value.shape());
            for line in result.value.to_string().lines() {
                println!("      {line}");
            }
        }
        if let Some(metrics) = &row.metrics {
            println!("   {}", metrics.summary());
        }
        println!();
    }
}

fn format_row(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}
