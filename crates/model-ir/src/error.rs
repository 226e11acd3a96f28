// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for model loading and script parsing.

/// Errors that can occur while loading a model document.
///
/// Every structural problem maps to its own variant so callers can branch
/// on the kind of failure rather than on message text.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The model document could not be read.
    #[error("failed to read model document: {0}")]
    ReadError(#[from] std::io::Error),

    /// The document is not well-formed XML.
    #[error("failed to parse model document: {0}")]
    XmlError(#[from] roxmltree::Error),

    /// Zero or several `inputdata` elements.
    #[error("could not locate inputdata information in exported model")]
    InputdataInfoNotFound,

    /// `inputdata` has no `size` child, or declares zero columns.
    #[error("could not locate inputdata size information in exported model")]
    InputdataSizeNotFound,

    /// `inputdata/size` is not a `rows,cols` pair.
    #[error("inputdata size \"{value}\" is not a \"rows,cols\" pair")]
    InputdataSizeInvalid { value: String },

    /// Zero or several `information` elements.
    #[error("model information element not found in exported model")]
    InformationNotFound,

    /// `information` has no non-empty `modeltype` child.
    #[error("model type not found in exported model")]
    ModelTypeNotFound,

    /// The document contains no `step` elements.
    #[error("no application steps could be found in model")]
    NoStepsFound,

    /// Step `sequence` values are missing, malformed, or not exactly `1..=N`.
    #[error("invalid step sequence: {detail}")]
    InvalidStepSequence { detail: String },

    /// A constant's `size` attribute or one of its values cannot be parsed.
    #[error("unable to parse size or content for constant \"{name}\" in step \"{step}\"")]
    UnparsableConstant { name: String, step: String },

    /// A constant's value list does not fill its declared size exactly.
    #[error("value parses to incorrect size for constant \"{name}\" in step \"{step}\"")]
    WrongSizeConstant { name: String, step: String },

    /// A step does not have exactly one `script` child.
    #[error("missing script for step \"{step}\"")]
    ScriptMissing { step: String },

    /// A script line does not match `dest = op(arg1[, arg2])`.
    #[error("poorly formatted script command \"{line}\" in step \"{step}\"")]
    BadScriptCommand { line: String, step: String },

    /// A script line names an operation outside the instruction set.
    #[error("unrecognized script command \"{name}\" in step \"{step}\"")]
    UnrecognizedScriptCommand { name: String, step: String },
}

/// Errors from parsing a single script line, before the owning step is known.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    /// The line does not match `dest = op(arg1[, arg2])`.
    #[error("poorly formatted script command \"{0}\"")]
    BadScriptCommand(String),

    /// The operation name is not part of the instruction set.
    #[error("unrecognized script command \"{0}\"")]
    UnrecognizedScriptCommand(String),
}

impl ScriptError {
    /// Attaches the owning step's description.
    pub(crate) fn in_step(self, step: &str) -> ModelError {
        match self {
            Self::BadScriptCommand(line) => ModelError::BadScriptCommand {
                line,
                step: step.to_string(),
            },
            Self::UnrecognizedScriptCommand(name) => ModelError::UnrecognizedScriptCommand {
                name,
                step: step.to_string(),
            },
        }
    }
}
