// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrix operations.
//!
//! Every operation allocates and returns a fresh [`crate::Matrix`]; operands
//! are only borrowed. Binary element-wise operations come in two flavours:
//! [`elementwise`] (shapes must match) and [`broadcast`] (a `1×1` operand is
//! applied against every element of the other).

mod elementwise_op;
mod gather_op;
mod matmul_op;
mod unary_op;

pub use elementwise_op::{broadcast, elementwise, BinaryOp};
pub use gather_op::{gather_cols, gather_rows};
pub use matmul_op::{matmul, mtimes};
pub use unary_op::{unary, UnaryOp};
