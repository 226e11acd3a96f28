// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The scoring engine.
//!
//! ```text
//!            set_input                apply
//!   ┌──────┐ ─────────▶ ┌──────┐ ──────────────▶ ┌─────────┐
//!   │ Idle │            │ Idle │                 │ Applied │ ◀─┐ apply (no-op)
//!   └──────┘            └──────┘ ◀────────────── └─────────┘ ──┘
//!                                   set_input
//! ```
//!
//! Unlike the model, the engine tracks its state at run time: whether
//! results may be read depends on the order of calls made by the caller,
//! so misuse surfaces as [`RuntimeError::ModelNotApplied`] rather than as
//! a compile error.

use crate::{execute_step, ApplyMetrics, RuntimeConfig, RuntimeError};
use matrix_core::{Matrix, Workspace};
use model_ir::{model::Validated, Model};
use std::sync::Arc;
use std::time::Instant;

/// Workspace name the input row is bound to.
pub const INPUT_VAR: &str = "x";

/// Whether the current input has been scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No input yet, or input assigned but not applied.
    Idle,
    /// Results for the current input are available.
    Applied,
}

/// Applies one model to one input row at a time.
///
/// An engine is not meant to be shared between threads; create one per
/// thread from a shared `Arc<Model<Validated>>` instead.
#[derive(Debug)]
pub struct ScoringEngine {
    model: Arc<Model<Validated>>,
    input: Matrix,
    workspace: Workspace,
    state: EngineState,
    profiling: bool,
    metrics: Option<ApplyMetrics>,
}

impl ScoringEngine {
    /// Creates an engine for `model` with profiling enabled.
    pub fn new(model: Arc<Model<Validated>>) -> Self {
        tracing::debug!("engine created for model '{}'", model.model_type());
        Self {
            model,
            input: Matrix::empty(),
            workspace: Workspace::new(),
            state: EngineState::Idle,
            profiling: true,
            metrics: None,
        }
    }

    /// Loads the configured model and creates an engine for it.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self, RuntimeError> {
        let model = Arc::new(config.load_model()?);
        Ok(Self::new(model).with_profiling(config.enable_profiling))
    }

    /// Enables or disables per-step timing.
    pub fn with_profiling(mut self, enabled: bool) -> Self {
        self.profiling = enabled;
        self
    }

    /// The model this engine scores.
    pub fn model(&self) -> &Arc<Model<Validated>> {
        &self.model
    }

    /// Current state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Whether results for the current input are available.
    pub fn is_applied(&self) -> bool {
        self.state == EngineState::Applied
    }

    /// Assigns a new input row and discards any previous results.
    ///
    /// # Errors
    /// - [`RuntimeError::InputDataTooManyRows`] if `input` has more than one row.
    /// - [`RuntimeError::InputDataColumnMismatch`] if its width differs from
    ///   the model's input width.
    ///
    /// On error the engine is left unchanged.
    pub fn set_input(&mut self, input: Matrix) -> Result<(), RuntimeError> {
        if input.rows() > 1 {
            return Err(RuntimeError::InputDataTooManyRows { rows: input.rows() });
        }
        let expected = self.model.input_data_size();
        if input.cols() != expected {
            return Err(RuntimeError::InputDataColumnMismatch {
                expected,
                actual: input.cols(),
            });
        }

        tracing::debug!("input assigned: {}", input.shape());
        self.input = input;
        self.workspace.clear_all();
        self.metrics = None;
        self.state = EngineState::Idle;
        Ok(())
    }

    /// Assigns `values` as a single input row.
    pub fn set_input_row(&mut self, values: &[f64]) -> Result<(), RuntimeError> {
        self.set_input(Matrix::row(values))
    }

    /// The currently assigned input (empty until one is set).
    pub fn input(&self) -> &Matrix {
        &self.input
    }

    /// Scores the current input.
    ///
    /// Does nothing if the current input has already been applied. If a
    /// step fails the engine stays idle and the workspace keeps whatever
    /// was computed before the failure.
    ///
    /// # Errors
    /// - [`RuntimeError::InputDataMissing`] if no input row is assigned.
    /// - [`RuntimeError::Workspace`] or [`RuntimeError::ExecutionError`] if
    ///   an instruction fails.
    pub fn apply(&mut self) -> Result<(), RuntimeError> {
        if self.state == EngineState::Applied {
            tracing::trace!("apply skipped, current input already applied");
            return Ok(());
        }
        if self.input.rows() == 0 {
            return Err(RuntimeError::InputDataMissing);
        }

        let run_start = Instant::now();
        let mut metrics = ApplyMetrics::new();

        self.workspace.clear_all();
        self.workspace.set_var(INPUT_VAR, self.input.clone());

        for step in self.model.iter_steps() {
            tracing::debug!(
                "executing step {} '{}' ({} constants, {} instructions)",
                step.sequence,
                step.description,
                step.constants.len(),
                step.num_instructions(),
            );
            let step_start = Instant::now();
            execute_step(step, &mut self.workspace)?;

            if self.profiling {
                metrics.record_step(
                    step.sequence,
                    step.description.clone(),
                    step.num_instructions(),
                    step_start.elapsed(),
                );
            }
        }

        self.state = EngineState::Applied;
        if self.profiling {
            metrics.finalise(run_start.elapsed(), self.workspace.len());
            tracing::info!("{}", metrics.summary());
            self.metrics = Some(metrics);
        } else {
            tracing::info!(
                "model '{}' applied, {} variables",
                self.model.model_type(),
                self.workspace.len()
            );
        }
        Ok(())
    }

    /// All results, sorted case-insensitively by name.
    ///
    /// # Errors
    /// [`RuntimeError::ModelNotApplied`] if the current input has not been applied.
    pub fn results(&self) -> Result<Vec<(&str, &Matrix)>, RuntimeError> {
        Ok(self.result_workspace()?.iter().collect())
    }

    /// The result workspace, for serialisation or bulk inspection.
    pub fn result_workspace(&self) -> Result<&Workspace, RuntimeError> {
        if !self.is_applied() {
            return Err(RuntimeError::ModelNotApplied);
        }
        Ok(&self.workspace)
    }

    /// Looks up one result by name, case-insensitively.
    pub fn get_var(&self, name: &str) -> Result<&Matrix, RuntimeError> {
        Ok(self.result_workspace()?.get_var(name)?)
    }

    /// The run workspace in whatever state it is in, applied or not.
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Metrics from the last successful `apply`, if profiling was enabled.
    pub fn metrics(&self) -> Option<&ApplyMetrics> {
        self.metrics.as_ref()
    }
}
