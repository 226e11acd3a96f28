// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Instruction execution against a run workspace.

use crate::RuntimeError;
use matrix_core::{
    broadcast, gather_cols, gather_rows, mtimes, unary, BinaryOp, Matrix, UnaryOp, Workspace,
};
use model_ir::{Instruction, OpKind, Step};

/// Runs one step: merges its constants into `workspace`, then executes its
/// script in order, storing each result under the instruction's destination.
///
/// Constants stay in the workspace after the step finishes, so later steps
/// see them too.
pub fn execute_step(step: &Step, workspace: &mut Workspace) -> Result<(), RuntimeError> {
    workspace.merge_from(&step.constants);

    for instruction in &step.script {
        let value = execute_instruction(step, instruction, workspace)?;
        tracing::trace!("{instruction} -> {}", value.shape());
        workspace.set_var(instruction.dest.as_str(), value);
    }
    Ok(())
}

/// Evaluates a single instruction and returns its result without storing it.
///
/// # Errors
/// - [`RuntimeError::Workspace`] if an operand is not set.
/// - [`RuntimeError::ExecutionError`] if the operands' shapes are not
///   valid for the operation.
pub fn execute_instruction(
    step: &Step,
    instruction: &Instruction,
    workspace: &Workspace,
) -> Result<Matrix, RuntimeError> {
    let lhs = workspace.get_var(&instruction.arg1)?;
    let rhs = match instruction.arg2.as_deref() {
        Some(name) => Some(workspace.get_var(name)?),
        None => None,
    };
    let second = || {
        rhs.ok_or_else(|| RuntimeError::MissingOperand {
            instruction: instruction.to_string(),
        })
    };

    let result = match instruction.op {
        OpKind::Abs => Ok(unary(UnaryOp::Abs, lhs)),
        OpKind::Log10 => Ok(unary(UnaryOp::Log10, lhs)),
        OpKind::Transpose => Ok(lhs.transpose()),
        OpKind::Plus => broadcast(BinaryOp::Plus, lhs, second()?),
        OpKind::Minus => broadcast(BinaryOp::Minus, lhs, second()?),
        OpKind::Times => broadcast(BinaryOp::Times, lhs, second()?),
        OpKind::RDivide => broadcast(BinaryOp::RDivide, lhs, second()?),
        OpKind::Power => broadcast(BinaryOp::Power, lhs, second()?),
        OpKind::MTimes => mtimes(lhs, second()?),
        OpKind::Cols => gather_cols(lhs, second()?),
        OpKind::Rows => gather_rows(lhs, second()?),
    };

    result.map_err(|source| RuntimeError::ExecutionError {
        step: step.description.clone(),
        instruction: instruction.to_string(),
        source,
    })
}
