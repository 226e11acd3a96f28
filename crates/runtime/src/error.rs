// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the runtime crate.

use matrix_core::{MatrixError, WorkspaceError};

/// Errors raised while assigning input, applying a model or reading results.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// The assigned input has more than one row.
    #[error("input data has {rows} rows, only a single row can be scored")]
    InputDataTooManyRows { rows: usize },

    /// The assigned input row has the wrong width.
    #[error("input data has {actual} columns, model expects {expected}")]
    InputDataColumnMismatch { expected: usize, actual: usize },

    /// `apply` was called before any input row was assigned.
    #[error("input data missing, assign an input row before applying the model")]
    InputDataMissing,

    /// Results were read before the current input was applied.
    #[error("model has not been applied to the current input")]
    ModelNotApplied,

    /// A workspace lookup failed.
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),

    /// A matrix operation failed while executing an instruction.
    #[error("execution error in step '{step}' at '{instruction}': {source}")]
    ExecutionError {
        step: String,
        instruction: String,
        #[source]
        source: MatrixError,
    },

    /// A two-operand instruction was built without its second operand.
    #[error("instruction '{instruction}' is missing its second operand")]
    MissingOperand { instruction: String },

    /// Model loading failed.
    #[error("model error: {0}")]
    ModelError(#[from] model_ir::ModelError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}
