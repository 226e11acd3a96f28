// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The model's `information` block.
//!
//! The interpreter never evaluates this metadata; it is carried through so
//! the surrounding application can display it.

/// One `<tag>text</tag>` child of the `information` element.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct InfoEntry {
    pub name: String,
    pub value: String,
}

/// Metadata describing an exported model.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Information {
    /// Free-form classifier tag such as `"PLS"` or `"PCA"`.
    pub model_type: String,
    /// Direct element children, in document order (including `modeltype`).
    pub entries: Vec<InfoEntry>,
    /// The `information` element exactly as it appeared in the document.
    pub raw_xml: String,
}

impl Information {
    /// Returns the text of the first entry named `name` (case-sensitive,
    /// as XML tag names are).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.value.as_str())
    }
}
