// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Timing collected while applying a model.

use std::time::Duration;

/// Timing for a single step.
#[derive(Debug, Clone, serde::Serialize)]
pub struct StepMetrics {
    /// Step sequence number.
    pub sequence: usize,
    /// Step description.
    pub description: String,
    /// Number of instructions executed.
    pub instructions: usize,
    /// Wall-clock time spent in the step, constants merge included.
    pub duration: Duration,
}

/// Timing for a complete `apply` run.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ApplyMetrics {
    /// Total wall-clock time, workspace setup included.
    pub total_duration: Duration,
    /// Per-step metrics in execution order.
    pub step_metrics: Vec<StepMetrics>,
    /// Number of variables in the workspace once the run finished.
    pub variables_produced: usize,
}

impl ApplyMetrics {
    /// Creates an empty metrics container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records metrics for a single step.
    pub fn record_step(
        &mut self,
        sequence: usize,
        description: String,
        instructions: usize,
        duration: Duration,
    ) {
        self.step_metrics.push(StepMetrics {
            sequence,
            description,
            instructions,
            duration,
        });
    }

    /// Finalises metrics with the total wall-clock time and result count.
    pub fn finalise(&mut self, total: Duration, variables: usize) {
        self.total_duration = total;
        self.variables_produced = variables;
    }

    /// Sum of the per-step durations.
    pub fn total_step_duration(&self) -> Duration {
        self.step_metrics.iter().map(|s| s.duration).sum()
    }

    /// Total number of instructions executed.
    pub fn total_instructions(&self) -> usize {
        self.step_metrics.iter().map(|s| s.instructions).sum()
    }

    /// The step that took longest, if any ran.
    pub fn slowest_step(&self) -> Option<&StepMetrics> {
        self.step_metrics.iter().max_by_key(|s| s.duration)
    }

    /// Returns a human-readable summary suitable for CLI output.
    pub fn summary(&self) -> String {
        let slowest = self
            .slowest_step()
            .map(|s| {
                format!(
                    ", slowest step {} '{}' {:.3}ms",
                    s.sequence,
                    s.description,
                    s.duration.as_secs_f64() * 1000.0
                )
            })
            .unwrap_or_default();

        format!(
            "Apply: {:.3}ms total, {} steps, {} instructions, {} variables{}",
            self.total_duration.as_secs_f64() * 1000.0,
            self.step_metrics.len(),
            self.total_instructions(),
            self.variables_produced,
            slowest,
        )
    }
}
