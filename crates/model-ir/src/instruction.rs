// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Script instructions.
//!
//! Each script line has the shape `dest = op(arg1)` or
//! `dest = op(arg1, arg2)`. Lines are parsed once, when the model is
//! loaded, into an [`Instruction`] carrying a resolved [`OpKind`].

use crate::ScriptError;
use std::fmt;

/// The operations a script may invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    /// Element-wise absolute value.
    Abs,
    /// Element-wise base-10 logarithm.
    Log10,
    /// Matrix transpose.
    Transpose,
    /// Element-wise addition with scalar broadcast.
    Plus,
    /// Element-wise subtraction with scalar broadcast.
    Minus,
    /// Element-wise multiplication with scalar broadcast.
    Times,
    /// Element-wise right division with scalar broadcast.
    RDivide,
    /// Element-wise power with scalar broadcast.
    Power,
    /// Matrix product; a `1×1` operand acts as a scalar.
    MTimes,
    /// Column gather by 1-based indices, `A(:, idx)`.
    Cols,
    /// Row gather by 1-based indices, `A(idx, :)`.
    Rows,
}

impl OpKind {
    /// Every operation, in declaration order.
    pub const ALL: [OpKind; 11] = [
        Self::Abs,
        Self::Log10,
        Self::Transpose,
        Self::Plus,
        Self::Minus,
        Self::Times,
        Self::RDivide,
        Self::Power,
        Self::MTimes,
        Self::Cols,
        Self::Rows,
    ];

    /// Looks up an operation by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(name))
    }

    /// Returns the canonical (lower-case) script name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abs => "abs",
            Self::Log10 => "log10",
            Self::Transpose => "transpose",
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::Times => "times",
            Self::RDivide => "rdivide",
            Self::Power => "power",
            Self::MTimes => "mtimes",
            Self::Cols => "cols",
            Self::Rows => "rows",
        }
    }

    /// Number of operands the operation takes.
    pub fn arity(&self) -> usize {
        match self {
            Self::Abs | Self::Log10 | Self::Transpose => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed script line.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Instruction {
    /// Workspace name the result is stored under.
    pub dest: String,
    /// Operation to perform.
    pub op: OpKind,
    /// First operand name.
    pub arg1: String,
    /// Second operand name, present exactly when `op.arity() == 2`.
    pub arg2: Option<String>,
}

impl Instruction {
    /// Parses a single script line (without its trailing `;`).
    ///
    /// # Examples
    /// ```
    /// use model_ir::{Instruction, OpKind};
    /// let i = Instruction::parse("T2 = mtimes(t, tsq)").unwrap();
    /// assert_eq!(i.dest, "T2");
    /// assert_eq!(i.op, OpKind::MTimes);
    /// assert_eq!(i.operands(), vec!["t", "tsq"]);
    /// ```
    ///
    /// # Errors
    /// - [`ScriptError::BadScriptCommand`] if the line is not of the form
    ///   `dest = op(arg1[, arg2])`, or the operand count does not match the
    ///   operation's arity.
    /// - [`ScriptError::UnrecognizedScriptCommand`] if `op` is unknown.
    pub fn parse(line: &str) -> Result<Self, ScriptError> {
        let bad = || ScriptError::BadScriptCommand(line.to_string());

        let (dest, call) = line.split_once('=').ok_or_else(bad)?;
        let (name, rest) = call.split_once('(').ok_or_else(bad)?;
        let (arg_list, trailing) = rest.split_once(')').ok_or_else(bad)?;

        let dest = dest.trim();
        let name = name.trim();
        if dest.is_empty() || name.is_empty() || !trailing.trim().is_empty() {
            return Err(bad());
        }

        let args: Vec<&str> = arg_list.split(',').map(str::trim).collect();
        if args.iter().any(|a| a.is_empty()) {
            return Err(bad());
        }

        let op = OpKind::from_name(name)
            .ok_or_else(|| ScriptError::UnrecognizedScriptCommand(name.to_string()))?;

        match (op.arity(), args.as_slice()) {
            (1, [a]) => Ok(Self {
                dest: dest.to_string(),
                op,
                arg1: a.to_string(),
                arg2: None,
            }),
            (2, [a, b]) => Ok(Self {
                dest: dest.to_string(),
                op,
                arg1: a.to_string(),
                arg2: Some(b.to_string()),
            }),
            _ => Err(bad()),
        }
    }

    /// Operand names in order.
    pub fn operands(&self) -> Vec<&str> {
        std::iter::once(self.arg1.as_str())
            .chain(self.arg2.as_deref())
            .collect()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}({})", self.dest, self.op, self.operands().join(", "))
    }
}
