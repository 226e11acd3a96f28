// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # matrix-core
//!
//! Dense two-dimensional `f64` matrices and the named matrix store used by
//! the scoring interpreter.
//!
//! This crate provides:
//! - [`Matrix`]: a row-major `R×C` matrix with bounds-checked access.
//! - [`Shape`]: the `(rows, cols)` descriptor, including the `0×0`
//!   "unset" sentinel and the `1×1` scalar case.
//! - Element-wise arithmetic with scalar broadcasting, matrix product,
//!   transpose, and 1-based row/column gathers.
//! - [`Workspace`]: a case-insensitive `name → Matrix` store with sorted
//!   enumeration.
//!
//! # Broadcasting
//! Wherever an operation accepts two operands, a `1×1` operand is applied
//! to every element of the other one. Two non-scalar operands must have
//! identical shapes. NaN and infinities propagate with IEEE semantics.

mod error;
mod matrix;
mod ops;
mod shape;
mod workspace;

pub use error::{MatrixError, WorkspaceError};
pub use matrix::Matrix;
pub use ops::{
    broadcast, elementwise, gather_cols, gather_rows, matmul, mtimes, unary, BinaryOp, UnaryOp,
};
pub use shape::Shape;
pub use workspace::Workspace;
