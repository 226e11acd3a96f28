// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Row and column selection by 1-based index vectors.
//!
//! `gather_cols(A, idx)` is `A(:, idx)` and `gather_rows(A, idx)` is
//! `A(idx, :)`. Indices may repeat, which replicates the selected slice.

use crate::{Matrix, MatrixError};

/// Selects columns of `source` listed in the `1×n` row `indices`.
///
/// The result is `source.rows() × indices.cols()`.
///
/// # Errors
/// - [`MatrixError::IncompatibleDimensions`] if `indices` is not a single row.
/// - [`MatrixError::InvalidIndex`] if an index is outside `1..=source.cols()`.
pub fn gather_cols(source: &Matrix, indices: &Matrix) -> Result<Matrix, MatrixError> {
    let picks = resolve_indices("cols", source, indices, source.cols())?;
    let rows = source.rows();
    let mut data = Vec::with_capacity(rows * picks.len());
    for r in 0..rows {
        let src_row = &source.as_slice()[r * source.cols()..(r + 1) * source.cols()];
        data.extend(picks.iter().map(|&c| src_row[c]));
    }
    Matrix::from_vec(rows, picks.len(), data)
}

/// Selects rows of `source` listed in the `1×n` row `indices`.
///
/// The result is `indices.cols() × source.cols()`.
///
/// # Errors
/// - [`MatrixError::IncompatibleDimensions`] if `indices` is not a single row.
/// - [`MatrixError::InvalidIndex`] if an index is outside `1..=source.rows()`.
pub fn gather_rows(source: &Matrix, indices: &Matrix) -> Result<Matrix, MatrixError> {
    let picks = resolve_indices("rows", source, indices, source.rows())?;
    let cols = source.cols();
    let mut data = Vec::with_capacity(picks.len() * cols);
    for &r in &picks {
        data.extend_from_slice(&source.as_slice()[r * cols..(r + 1) * cols]);
    }
    Matrix::from_vec(picks.len(), cols, data)
}

/// Converts 1-based (rounded) index values to 0-based offsets.
fn resolve_indices(
    op: &'static str,
    source: &Matrix,
    indices: &Matrix,
    bound: usize,
) -> Result<Vec<usize>, MatrixError> {
    if indices.rows() != 1 {
        return Err(MatrixError::IncompatibleDimensions {
            op,
            lhs: source.shape(),
            rhs: indices.shape(),
        });
    }
    indices
        .as_slice()
        .iter()
        .map(|&value| {
            let rounded = value.round();
            if rounded.is_finite() && rounded >= 1.0 && rounded <= bound as f64 {
                Ok(rounded as usize - 1)
            } else {
                Err(MatrixError::InvalidIndex { op, value, bound })
            }
        })
        .collect()
}
