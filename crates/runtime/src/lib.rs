// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Scoring runtime.
//!
//! Applies a validated [`model_ir::Model`] to a single input row:
//!
//! 1. The input is bound to `x` in a fresh [`matrix_core::Workspace`].
//! 2. For every step, in sequence order, the step's constants are merged
//!    into the workspace and its instructions are executed.
//! 3. Every name ever assigned stays in the workspace as the result set.
//!
//! The model is shared through an `Arc`; each [`ScoringEngine`] owns its
//! own input, workspace and applied flag, so one model can be scored from
//! many threads as long as every thread has its own engine.

mod config;
mod engine;
mod error;
mod interpreter;
mod metrics;

pub use config::{OutputFormat, RuntimeConfig};
pub use engine::{EngineState, ScoringEngine, INPUT_VAR};
pub use error::RuntimeError;
pub use interpreter::{execute_instruction, execute_step};
pub use metrics::{ApplyMetrics, StepMetrics};
