// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrix shape descriptors.

use std::fmt;

/// Describes the dimensions of a [`crate::Matrix`].
///
/// A `0×0` shape is the "empty / unset" sentinel and a `1×1` shape marks a
/// scalar operand for broadcasting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl Shape {
    /// Creates a new `rows × cols` shape.
    ///
    /// # Examples
    /// ```
    /// use matrix_core::Shape;
    /// let s = Shape::new(2, 3);
    /// assert_eq!(s.num_elements(), 6);
    /// assert!(!s.is_scalar());
    /// ```
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// The `1×1` scalar shape.
    pub fn scalar() -> Self {
        Self::new(1, 1)
    }

    /// The `0×0` empty shape.
    pub fn empty() -> Self {
        Self::new(0, 0)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the total number of elements, saturating at `usize::MAX`.
    ///
    /// Exact for the shape of any [`crate::Matrix`], whose constructors
    /// reject shapes that overflow.
    pub fn num_elements(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Returns the total number of elements, or `None` if `rows * cols`
    /// does not fit in a `usize`.
    pub fn checked_num_elements(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// Returns `true` for a `1×1` shape.
    pub fn is_scalar(&self) -> bool {
        self.rows == 1 && self.cols == 1
    }

    /// Returns `true` if the shape holds no elements.
    pub fn is_empty(&self) -> bool {
        self.num_elements() == 0
    }

    /// Returns the `cols × rows` shape.
    pub fn transposed(&self) -> Self {
        Self::new(self.cols, self.rows)
    }

    /// Returns `true` if `self × other` is a valid matrix product.
    pub fn is_matmul_compatible(&self, other: &Shape) -> bool {
        self.cols == other.rows
    }

    /// Parses a dimension pair written as `"r,c"` or `"[r,c]"`.
    ///
    /// Whitespace around either component is ignored. Brackets, if present,
    /// must enclose the whole pair. Returns `None` unless there are exactly
    /// two non-negative integer components whose product fits in a `usize`.
    ///
    /// # Examples
    /// ```
    /// use matrix_core::Shape;
    /// assert_eq!(Shape::parse("[2, 3]"), Some(Shape::new(2, 3)));
    /// assert_eq!(Shape::parse("1,4"), Some(Shape::new(1, 4)));
    /// assert_eq!(Shape::parse("[1,2,3]"), None);
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let inner = match text.strip_prefix('[') {
            Some(rest) => rest.strip_suffix(']')?,
            None if text.ends_with(']') => return None,
            None => text,
        };
        let mut parts = inner.split(',');
        let rows = parts.next()?.trim().parse().ok()?;
        let cols = parts.next()?.trim().parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        let shape = Self::new(rows, cols);
        shape.checked_num_elements()?;
        Some(shape)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.rows, self.cols)
    }
}

/// Convenience: `Shape::from((2, 3))`.
impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}
