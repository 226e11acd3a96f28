// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Named matrix storage.
//!
//! A [`Workspace`] maps variable names to matrices. Names compare ASCII
//! case-insensitively (`"T2"` and `"t2"` are the same variable), but the
//! spelling used when a variable was first set is the one reported back.
//! Enumeration is always in case-insensitive ascending order, independent
//! of insertion order.

use crate::{Matrix, WorkspaceError};
use serde::ser::SerializeMap;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    name: String,
    value: Matrix,
}

/// A case-insensitive `name → Matrix` store.
///
/// # Example
/// ```
/// use matrix_core::{Matrix, Workspace};
///
/// let mut ws = Workspace::new();
/// ws.set_var("B", Matrix::scalar(1.0));
/// ws.set_var("a", Matrix::scalar(2.0));
/// ws.set_var("C", Matrix::scalar(3.0));
/// assert_eq!(ws.var_list(), vec!["a", "B", "C"]);
/// assert_eq!(ws.get_var("b").unwrap(), &Matrix::scalar(1.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workspace {
    // Keyed by the folded name so iteration is already sorted.
    vars: BTreeMap<String, Entry>,
}

impl Workspace {
    /// Creates an empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`.
    ///
    /// If the name is already present its value is replaced in place and the
    /// original spelling is kept; otherwise a new variable is added.
    pub fn set_var(&mut self, name: impl Into<String>, value: Matrix) {
        let name = name.into();
        match self.vars.entry(fold(&name)) {
            std::collections::btree_map::Entry::Occupied(mut slot) => {
                slot.get_mut().value = value;
            }
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(Entry { name, value });
            }
        }
    }

    /// Copies every variable of `other` into this workspace.
    ///
    /// On a name collision the incoming value wins.
    pub fn merge_from(&mut self, other: &Workspace) {
        for (name, value) in other.iter() {
            self.set_var(name, value.clone());
        }
    }

    /// Returns the value of `name`.
    ///
    /// # Errors
    /// Returns [`WorkspaceError::ValueNotSet`] if no such variable exists.
    pub fn get_var(&self, name: &str) -> Result<&Matrix, WorkspaceError> {
        self.vars
            .get(&fold(name))
            .map(|e| &e.value)
            .ok_or_else(|| WorkspaceError::ValueNotSet {
                name: name.to_string(),
            })
    }

    /// Returns `true` if `name` is set.
    pub fn is_set(&self, name: &str) -> bool {
        self.vars.contains_key(&fold(name))
    }

    /// Returns all variable names in case-insensitive ascending order.
    pub fn var_list(&self) -> Vec<String> {
        self.vars.values().map(|e| e.name.clone()).collect()
    }

    /// Iterates over `(name, value)` pairs in [`var_list`](Self::var_list) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Matrix)> {
        self.vars.values().map(|e| (e.name.as_str(), &e.value))
    }

    /// Removes every variable.
    pub fn clear_all(&mut self) {
        self.vars.clear();
    }

    /// Number of variables set.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns `true` if no variable is set.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// ASCII case folding, matching how operation names are compared.
fn fold(name: &str) -> String {
    name.to_ascii_lowercase()
}

/// Serialises as a map from variable name to matrix, in sorted order.
impl serde::Serialize for Workspace {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_list_sorted_case_insensitive() {
        let mut ws = Workspace::new();
        ws.set_var("B", Matrix::empty());
        ws.set_var("a", Matrix::empty());
        ws.set_var("C", Matrix::empty());
        assert_eq!(ws.var_list(), vec!["a", "B", "C"]);
    }

    #[test]
    fn test_only_ascii_case_is_folded() {
        let mut ws = Workspace::new();
        ws.set_var("Ä", Matrix::scalar(1.0));
        ws.set_var("ä", Matrix::scalar(2.0));
        assert_eq!(ws.len(), 2);
        assert!(ws.is_set("Ä"));
        assert_eq!(ws.get_var("Ä").unwrap(), &Matrix::scalar(1.0));
        assert_eq!(ws.get_var("ä").unwrap(), &Matrix::scalar(2.0));
    }

    #[test]
    fn test_replace_keeps_single_entry() {
        let mut ws = Workspace::new();
        ws.set_var("Yhat", Matrix::scalar(1.0));
        ws.set_var("YHAT", Matrix::scalar(2.0));
        assert_eq!(ws.len(), 1);
        assert_eq!(ws.var_list(), vec!["Yhat"]);
        assert_eq!(ws.get_var("yhat").unwrap(), &Matrix::scalar(2.0));
    }

    #[test]
    fn test_get_missing() {
        let ws = Workspace::new();
        assert_eq!(
            ws.get_var("nope").unwrap_err(),
            WorkspaceError::ValueNotSet {
                name: "nope".into()
            }
        );
    }

    #[test]
    fn test_is_set_case_insensitive() {
        let mut ws = Workspace::new();
        ws.set_var("T2", Matrix::scalar(0.0));
        assert!(ws.is_set("t2"));
        assert!(ws.is_set("T2"));
        assert!(!ws.is_set("Q"));
    }

    #[test]
    fn test_merge_incoming_wins() {
        let mut base = Workspace::new();
        base.set_var("k", Matrix::scalar(1.0));
        base.set_var("keep", Matrix::scalar(9.0));

        let mut incoming = Workspace::new();
        incoming.set_var("K", Matrix::scalar(5.0));
        incoming.set_var("new", Matrix::scalar(7.0));

        base.merge_from(&incoming);
        assert_eq!(base.len(), 3);
        assert_eq!(base.get_var("k").unwrap(), &Matrix::scalar(5.0));
        assert_eq!(base.get_var("keep").unwrap(), &Matrix::scalar(9.0));
        assert_eq!(base.get_var("new").unwrap(), &Matrix::scalar(7.0));
    }

    #[test]
    fn test_clear_all() {
        let mut ws = Workspace::new();
        ws.set_var("x", Matrix::row(&[1.0, 2.0]));
        ws.set_var("y", Matrix::scalar(3.0));
        ws.clear_all();
        assert!(ws.is_empty());
        assert!(ws.var_list().is_empty());
        assert!(!ws.is_set("x"));
        assert!(!ws.is_set("y"));
    }

    #[test]
    fn test_serialize_sorted_map() {
        let mut ws = Workspace::new();
        ws.set_var("z", Matrix::scalar(1.0));
        ws.set_var("A", Matrix::scalar(2.0));
        let json = serde_json::to_string(&ws).unwrap();
        assert!(json.find("\"A\"").unwrap() < json.find("\"z\"").unwrap());
    }
}
