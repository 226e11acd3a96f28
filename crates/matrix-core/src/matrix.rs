// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Core matrix type.

use crate::ops::{self, BinaryOp};
use crate::{MatrixError, Shape};
use std::fmt;

/// An owned, dense `R×C` matrix of `f64` values.
///
/// `Matrix` is a value type: every operation returns a new matrix and never
/// mutates its operands.
///
/// # Memory Layout
/// Elements are stored in row-major order, so element `(r, c)` lives at
/// `r * cols + c` in the flat buffer.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Matrix {
    #[serde(flatten)]
    shape: Shape,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a `rows × cols` matrix filled with zeros.
    ///
    /// Returns [`MatrixError::ShapeTooLarge`] if `rows * cols` overflows.
    ///
    /// # Examples
    /// ```
    /// use matrix_core::Matrix;
    /// let m = Matrix::zeros(2, 3).unwrap();
    /// assert_eq!(m.len(), 6);
    /// assert_eq!(m.get(1, 2).unwrap(), 0.0);
    /// ```
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let shape = Shape::new(rows, cols);
        let len = shape
            .checked_num_elements()
            .ok_or(MatrixError::ShapeTooLarge { shape })?;
        Ok(Self {
            shape,
            data: vec![0.0; len],
        })
    }

    /// The `0×0` matrix used as the "unset" sentinel.
    pub fn empty() -> Self {
        Self {
            shape: Shape::empty(),
            data: Vec::new(),
        }
    }

    /// Creates a `1×1` matrix.
    pub fn scalar(value: f64) -> Self {
        Self {
            shape: Shape::scalar(),
            data: vec![value],
        }
    }

    /// Creates a `1×n` row vector.
    pub fn row(values: &[f64]) -> Self {
        Self {
            shape: Shape::new(1, values.len()),
            data: values.to_vec(),
        }
    }

    /// Creates a matrix from a row-major value buffer.
    ///
    /// Returns an error unless `values.len() == rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self, MatrixError> {
        let shape = Shape::new(rows, cols);
        let expected = shape
            .checked_num_elements()
            .ok_or(MatrixError::ShapeTooLarge { shape })?;
        if values.len() != expected {
            return Err(MatrixError::BufferSizeMismatch {
                shape,
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            shape,
            data: values,
        })
    }

    /// Creates a matrix from a slice of equally long rows.
    ///
    /// # Examples
    /// ```
    /// use matrix_core::Matrix;
    /// let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m.get(1, 0).unwrap(), 3.0);
    /// ```
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, Vec::len);
        let data: Vec<f64> = rows.iter().flatten().copied().collect();
        Self::from_vec(rows.len(), cols, data).and_then(|m| {
            // A ragged input can still total rows * cols values.
            match rows.iter().find(|r| r.len() != cols) {
                Some(bad) => Err(MatrixError::BufferSizeMismatch {
                    shape: m.shape,
                    expected: cols,
                    actual: bad.len(),
                }),
                None => Ok(m),
            }
        })
    }

    /// Returns the matrix shape.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.shape.cols()
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the matrix holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` for a `1×1` matrix.
    pub fn is_scalar(&self) -> bool {
        self.shape.is_scalar()
    }

    /// Returns the single value of a `1×1` matrix.
    pub fn scalar_value(&self) -> Option<f64> {
        if self.is_scalar() {
            Some(self.data[0])
        } else {
            None
        }
    }

    /// Returns the row-major element buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns the element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        self.offset(row, col).map(|i| self.data[i])
    }

    /// Overwrites the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), MatrixError> {
        let i = self.offset(row, col)?;
        self.data[i] = value;
        Ok(())
    }

    /// Applies `f` to every element, producing a matrix of the same shape.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            shape: self.shape,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Returns the `C×R` transpose.
    pub fn transpose(&self) -> Self {
        let (rows, cols) = (self.rows(), self.cols());
        let mut data = Vec::with_capacity(self.len());
        for c in 0..cols {
            for r in 0..rows {
                data.push(self.data[r * cols + c]);
            }
        }
        Self {
            shape: self.shape.transposed(),
            data,
        }
    }

    /// Element-wise sum; shapes must match exactly.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        ops::elementwise(BinaryOp::Plus, self, other)
    }

    /// Element-wise difference; shapes must match exactly.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        ops::elementwise(BinaryOp::Minus, self, other)
    }

    /// Element-wise product; shapes must match exactly.
    pub fn multiply_elementwise(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        ops::elementwise(BinaryOp::Times, self, other)
    }

    /// Element-wise quotient; shapes must match exactly.
    pub fn divide_elementwise(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        ops::elementwise(BinaryOp::RDivide, self, other)
    }

    /// Standard matrix product; requires `self.cols() == other.rows()`.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        ops::matmul(self, other)
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        if row >= self.rows() || col >= self.cols() {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                shape: self.shape,
            });
        }
        Ok(row * self.cols() + col)
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::empty()
    }
}

/// One row per line, values separated by two spaces.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "[]");
        }
        for (r, row) in self.data.chunks(self.cols()).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, v) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{v:.6}")?;
            }
        }
        Ok(())
    }
}
