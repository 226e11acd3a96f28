// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Element-wise binary operations with scalar broadcasting.

use crate::{Matrix, MatrixError};

/// A binary operation applied pair-wise to matrix elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `a + b`
    Plus,
    /// `a - b`
    Minus,
    /// `a * b`
    Times,
    /// `a / b`
    RDivide,
    /// `a ^ b` (base first, exponent second).
    Power,
}

impl BinaryOp {
    /// Returns the operation name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::Times => "times",
            Self::RDivide => "rdivide",
            Self::Power => "power",
        }
    }

    /// Applies the operation to a single pair of values.
    #[inline]
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::Plus => a + b,
            Self::Minus => a - b,
            Self::Times => a * b,
            Self::RDivide => a / b,
            Self::Power => a.powf(b),
        }
    }
}

/// Applies `op` pair-wise to two matrices of identical shape.
///
/// # Errors
/// Returns [`MatrixError::IncompatibleDimensions`] if the shapes differ.
pub fn elementwise(op: BinaryOp, lhs: &Matrix, rhs: &Matrix) -> Result<Matrix, MatrixError> {
    if lhs.shape() != rhs.shape() {
        return Err(MatrixError::IncompatibleDimensions {
            op: op.name(),
            lhs: lhs.shape(),
            rhs: rhs.shape(),
        });
    }
    let data = lhs
        .as_slice()
        .iter()
        .zip(rhs.as_slice())
        .map(|(&a, &b)| op.apply(a, b))
        .collect();
    Matrix::from_vec(lhs.rows(), lhs.cols(), data)
}

/// Applies `op` with scalar broadcasting.
///
/// - Neither operand `1×1`: shapes must match, see [`elementwise`].
/// - Exactly one operand `1×1`: its value is combined with every element
///   of the other operand, and the result takes the other operand's shape.
///   Operand order is preserved, so `minus(s, A)` computes `s - a_ij`.
/// - Both `1×1`: the result is `1×1`.
///
/// # Examples
/// ```
/// use matrix_core::{broadcast, BinaryOp, Matrix};
/// let a = Matrix::row(&[1.0, 2.0, 3.0]);
/// let r = broadcast(BinaryOp::Minus, &Matrix::scalar(10.0), &a).unwrap();
/// assert_eq!(r.as_slice(), &[9.0, 8.0, 7.0]);
/// ```
pub fn broadcast(op: BinaryOp, lhs: &Matrix, rhs: &Matrix) -> Result<Matrix, MatrixError> {
    match (lhs.scalar_value(), rhs.scalar_value()) {
        (Some(a), Some(b)) => Ok(Matrix::scalar(op.apply(a, b))),
        (None, Some(b)) => Ok(lhs.map(|a| op.apply(a, b))),
        (Some(a), None) => Ok(rhs.map(|b| op.apply(a, b))),
        (None, None) => elementwise(op, lhs, rhs),
    }
}
