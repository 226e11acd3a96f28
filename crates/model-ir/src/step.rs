// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Scoring steps.

use crate::Instruction;
use matrix_core::Workspace;

/// One phase of scoring: a bundle of constants plus an ordered script.
///
/// Steps are immutable once loaded and are shared read-only by every
/// engine that scores against the owning model.
#[derive(Debug, Clone)]
pub struct Step {
    /// 1-based position of the step within the model.
    pub sequence: usize,
    /// Human-readable description (`"unknown"` when the document has none).
    pub description: String,
    /// Constants made visible to the run workspace when the step starts.
    pub constants: Workspace,
    /// Instructions in execution order.
    pub script: Vec<Instruction>,
}

impl Step {
    /// Description used when a step carries no `description` element.
    pub const UNKNOWN_DESCRIPTION: &'static str = "unknown";

    /// Number of instructions in the script.
    pub fn num_instructions(&self) -> usize {
        self.script.len()
    }

    /// Returns a one-line summary.
    pub fn summary(&self) -> String {
        format!(
            "[{}] {}: {} constants, {} instructions",
            self.sequence,
            self.description,
            self.constants.len(),
            self.script.len(),
        )
    }
}
