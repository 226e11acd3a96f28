// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Element-wise unary operations.

use crate::Matrix;

/// A function applied to each element independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Absolute value.
    Abs,
    /// Base-10 logarithm. Non-positive inputs yield `NaN` or `-inf`.
    Log10,
}

impl UnaryOp {
    /// Applies the function to one value.
    #[inline]
    pub fn apply(&self, v: f64) -> f64 {
        match self {
            Self::Abs => v.abs(),
            Self::Log10 => v.log10(),
        }
    }
}

/// Applies `op` to every element of `input`.
pub fn unary(op: UnaryOp, input: &Matrix) -> Matrix {
    input.map(|v| op.apply(v))
}
