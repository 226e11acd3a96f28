// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrix multiplication operations.

use super::{broadcast, BinaryOp};
use crate::{Matrix, MatrixError};

/// Performs matrix multiplication: `lhs @ rhs`.
///
/// `lhs` is `[M, K]`, `rhs` is `[K, N]` and the result is `[M, N]`.
///
/// # Errors
/// Returns [`MatrixError::IncompatibleDimensions`] if the inner dimensions differ.
pub fn matmul(lhs: &Matrix, rhs: &Matrix) -> Result<Matrix, MatrixError> {
    if !lhs.shape().is_matmul_compatible(&rhs.shape()) {
        return Err(MatrixError::IncompatibleDimensions {
            op: "mtimes",
            lhs: lhs.shape(),
            rhs: rhs.shape(),
        });
    }

    let (m, k, n) = (lhs.rows(), lhs.cols(), rhs.cols());
    let mut c = vec![0.0; m * n];
    matmul_f64_generic(lhs.as_slice(), rhs.as_slice(), &mut c, m, k, n);
    Matrix::from_vec(m, n, c)
}

/// Matrix product where a `1×1` operand acts as a scalar multiplier.
///
/// With a scalar on either side this is identical to broadcast `times`;
/// otherwise it is [`matmul`].
pub fn mtimes(lhs: &Matrix, rhs: &Matrix) -> Result<Matrix, MatrixError> {
    if lhs.is_scalar() || rhs.is_scalar() {
        broadcast(BinaryOp::Times, lhs, rhs)
    } else {
        matmul(lhs, rhs)
    }
}

/// Portable f64 matrix multiplication.
///
/// ikj loop order keeps the inner loop a saxpy over a contiguous row of `c`.
fn matmul_f64_generic(a: &[f64], b: &[f64], c: &mut [f64], m: usize, k: usize, n: usize) {
    for i in 0..m {
        let c_row = &mut c[i * n..(i + 1) * n];
        for p in 0..k {
            let a_ip = a[i * k + p];
            let b_row = &b[p * n..(p + 1) * n];
            for (c_ij, &b_pj) in c_row.iter_mut().zip(b_row) {
                *c_ij += a_ip * b_pj;
            }
        }
    }
}
