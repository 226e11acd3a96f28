// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The exported model: declared input width, metadata, and ordered steps.
//!
//! # Type-State Pattern
//!
//! ```text
//! Model<Loaded>    : parsed from the document, steps in document order.
//!       │  .validate()
//!       ▼
//! Model<Validated> : steps ordered by sequence, ready for scoring.
//! ```
//!
//! Engines only accept `Model<Validated>`, so a document that fails any
//! structural check can never reach the interpreter.

use crate::{Information, ModelError, Step};
use std::fmt;

// ── Type-state markers ─────────────────────────────────────────────

/// Marker: model has been parsed but not validated.
#[derive(Debug, Clone)]
pub struct Loaded;

/// Marker: model has been validated and is ready for scoring.
#[derive(Debug, Clone)]
pub struct Validated;

/// Sealed trait for model states.
pub trait ModelState: fmt::Debug + Clone {}
impl ModelState for Loaded {}
impl ModelState for Validated {}

// ── Model ──────────────────────────────────────────────────────────

/// A complete scoring model.
#[derive(Debug, Clone)]
pub struct Model<S: ModelState = Loaded> {
    input_data_size: usize,
    information: Information,
    steps: Vec<Step>,
    _state: std::marker::PhantomData<S>,
}

// ── Loaded state ───────────────────────────────────────────────────

impl Model<Loaded> {
    /// Creates a new model in the `Loaded` state.
    pub fn new(input_data_size: usize, information: Information, steps: Vec<Step>) -> Self {
        Self {
            input_data_size,
            information,
            steps,
            _state: std::marker::PhantomData,
        }
    }

    /// Validates the model and transitions to the `Validated` state.
    ///
    /// # Checks
    /// - The declared input width is non-zero.
    /// - The model type is non-empty.
    /// - There is at least one step.
    /// - Step sequences are exactly `1..=N`; steps are reordered by sequence.
    pub fn validate(mut self) -> Result<Model<Validated>, ModelError> {
        if self.input_data_size == 0 {
            return Err(ModelError::InputdataSizeNotFound);
        }
        if self.information.model_type.trim().is_empty() {
            return Err(ModelError::ModelTypeNotFound);
        }
        if self.steps.is_empty() {
            return Err(ModelError::NoStepsFound);
        }

        self.steps.sort_by_key(|s| s.sequence);
        for (i, step) in self.steps.iter().enumerate() {
            if step.sequence != i + 1 {
                return Err(ModelError::InvalidStepSequence {
                    detail: format!(
                        "step \"{}\" has sequence {}, expected {} (sequences must be 1..={} without gaps or duplicates)",
                        step.description,
                        step.sequence,
                        i + 1,
                        self.steps.len(),
                    ),
                });
            }
            if step.script.is_empty() {
                tracing::warn!("step {} '{}' has an empty script", step.sequence, step.description);
            }
        }

        Ok(Model {
            input_data_size: self.input_data_size,
            information: self.information,
            steps: self.steps,
            _state: std::marker::PhantomData,
        })
    }
}

// ── Validated state ────────────────────────────────────────────────

impl Model<Validated> {
    /// Returns the number of steps.
    pub fn num_steps(&self) -> usize {
        self.steps.len()
    }

    /// Returns a step by 0-based position.
    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Returns an iterator over the steps in execution order.
    pub fn iter_steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }

    /// Total number of instructions across all steps.
    pub fn total_instructions(&self) -> usize {
        self.steps.iter().map(Step::num_instructions).sum()
    }

    /// Returns a summary string describing the model.
    pub fn summary(&self) -> String {
        format!(
            "Model '{}': input width {}, {} steps, {} instructions",
            self.model_type(),
            self.input_data_size,
            self.num_steps(),
            self.total_instructions(),
        )
    }
}

// ── Shared implementations ─────────────────────────────────────────

impl<S: ModelState> Model<S> {
    /// Number of columns an input row must have.
    pub fn input_data_size(&self) -> usize {
        self.input_data_size
    }

    /// The model's classifier tag.
    pub fn model_type(&self) -> &str {
        &self.information.model_type
    }

    /// The pass-through metadata block.
    pub fn information(&self) -> &Information {
        &self.information
    }

    /// All steps. Ordered by sequence once validated.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

impl<S: ModelState> fmt::Display for Model<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Model '{}' (input width {}, {} steps):",
            self.model_type(),
            self.input_data_size,
            self.steps.len()
        )?;
        for step in &self.steps {
            writeln!(f, "  {}", step.summary())?;
        }
        Ok(())
    }
}
