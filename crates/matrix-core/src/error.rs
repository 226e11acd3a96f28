// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for matrix operations and workspace lookups.

use crate::Shape;

/// Errors that can occur during matrix construction and arithmetic.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    /// An element access fell outside the matrix bounds.
    #[error("index ({row}, {col}) out of range for {shape} matrix")]
    IndexOutOfRange { row: usize, col: usize, shape: Shape },

    /// Two matrices have shapes that are not valid for the requested operation.
    #[error("dimensions of {lhs} and {rhs} are not suitable for {op}")]
    IncompatibleDimensions {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },

    /// The number of supplied values does not fill the requested shape.
    #[error("{shape} matrix needs {expected} values, got {actual}")]
    BufferSizeMismatch {
        shape: Shape,
        expected: usize,
        actual: usize,
    },

    /// The element count `rows * cols` does not fit in a `usize`.
    #[error("{shape} matrix has too many elements")]
    ShapeTooLarge { shape: Shape },

    /// A gather index does not address an existing row or column.
    #[error("invalid {op} index {value}: expected 1..={bound}")]
    InvalidIndex {
        op: &'static str,
        value: f64,
        bound: usize,
    },
}

/// Errors raised by [`crate::Workspace`] lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkspaceError {
    /// No variable with this name (compared case-insensitively) is set.
    #[error("value for workspace variable \"{name}\" has not been set")]
    ValueNotSet { name: String },
}
