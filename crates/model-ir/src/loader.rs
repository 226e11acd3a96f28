// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Model loading from the exported XML document.
//!
//! All structural validation happens here, once, so that a malformed
//! document is rejected before any scoring is attempted. Element lookups
//! for `inputdata`, `information` and `step` search the whole document;
//! everything below those elements is read from direct children.

use crate::model::{Loaded, Validated};
use crate::{InfoEntry, Information, Instruction, Model, ModelError, Step};
use matrix_core::{Matrix, Shape, Workspace};
use roxmltree::{Document, Node};
use std::path::Path;

/// Loads a model document into a validated [`Model`].
///
/// # Example
/// ```no_run
/// use model_ir::ModelLoader;
/// use std::path::Path;
///
/// let model = ModelLoader::load(Path::new("./demos/pca_demo.xml")).unwrap();
/// println!("expects {} input columns", model.input_data_size());
/// ```
pub struct ModelLoader;

impl ModelLoader {
    /// Reads, parses and validates the model document at `path`.
    pub fn load(path: &Path) -> Result<Model<Validated>, ModelError> {
        let xml = std::fs::read_to_string(path)?;
        let model = Self::from_xml(&xml)?;
        tracing::info!("loaded '{}': {}", path.display(), model.summary());
        Ok(model)
    }

    /// Parses and validates a model document held in memory.
    pub fn from_xml(xml: &str) -> Result<Model<Validated>, ModelError> {
        Self::parse(xml)?.validate()
    }

    /// Parses a model document without validating step order.
    ///
    /// Steps are returned in document order.
    pub fn parse(xml: &str) -> Result<Model<Loaded>, ModelError> {
        let doc = Document::parse(xml)?;

        let input_data_size = read_input_data_size(&doc)?;
        let information = read_information(&doc, xml)?;

        let step_nodes: Vec<Node> = doc
            .descendants()
            .filter(|n| n.has_tag_name("step"))
            .collect();
        if step_nodes.is_empty() {
            return Err(ModelError::NoStepsFound);
        }

        let steps = step_nodes
            .into_iter()
            .map(read_step)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Model::new(input_data_size, information, steps))
    }
}

/// Reads `inputdata/size` and returns its column component.
fn read_input_data_size(doc: &Document) -> Result<usize, ModelError> {
    let inputdata = single_element(doc, "inputdata").ok_or(ModelError::InputdataInfoNotFound)?;
    let size = child_element(inputdata, "size").ok_or(ModelError::InputdataSizeNotFound)?;

    let text = inner_text(size);
    let shape = Shape::parse(&text).ok_or_else(|| ModelError::InputdataSizeInvalid {
        value: text.trim().to_string(),
    })?;
    if shape.cols() == 0 {
        return Err(ModelError::InputdataSizeNotFound);
    }
    Ok(shape.cols())
}

/// Reads the `information` block and its `modeltype` entry.
fn read_information(doc: &Document, xml: &str) -> Result<Information, ModelError> {
    let node = single_element(doc, "information").ok_or(ModelError::InformationNotFound)?;

    let entries: Vec<InfoEntry> = node
        .children()
        .filter(Node::is_element)
        .map(|child| InfoEntry {
            name: child.tag_name().name().to_string(),
            value: inner_text(child).trim().to_string(),
        })
        .collect();

    let model_type = entries
        .iter()
        .find(|e| e.name == "modeltype")
        .map(|e| e.value.clone())
        .filter(|v| !v.is_empty())
        .ok_or(ModelError::ModelTypeNotFound)?;

    Ok(Information {
        model_type,
        entries,
        raw_xml: xml[node.range()].to_string(),
    })
}

/// Builds a [`Step`] from one `step` element.
fn read_step(node: Node) -> Result<Step, ModelError> {
    let description = child_element(node, "description")
        .map(|d| inner_text(d).trim().to_string())
        .unwrap_or_else(|| Step::UNKNOWN_DESCRIPTION.to_string());

    let sequence = read_sequence(node, &description)?;

    let constants = match child_element(node, "constants") {
        Some(block) => read_constants(block, &description)?,
        None => Workspace::new(),
    };

    let scripts: Vec<Node> = node
        .children()
        .filter(|n| n.has_tag_name("script"))
        .collect();
    let [script] = scripts.as_slice() else {
        return Err(ModelError::ScriptMissing { step: description });
    };

    let mut instructions = Vec::new();
    for text in script.descendants().filter(Node::is_text).filter_map(|n| n.text()) {
        for line in text.split(';').map(str::trim).filter(|l| !l.is_empty()) {
            let instruction = Instruction::parse(line).map_err(|e| e.in_step(&description))?;
            instructions.push(instruction);
        }
    }

    tracing::debug!(
        "parsed step {sequence} '{description}': {} constants, {} instructions",
        constants.len(),
        instructions.len(),
    );

    Ok(Step {
        sequence,
        description,
        constants,
        script: instructions,
    })
}

fn read_sequence(node: Node, description: &str) -> Result<usize, ModelError> {
    let text = child_element(node, "sequence")
        .map(inner_text)
        .ok_or_else(|| ModelError::InvalidStepSequence {
            detail: format!("step \"{description}\" has no sequence"),
        })?;
    match text.trim().parse::<usize>() {
        Ok(seq) if seq >= 1 => Ok(seq),
        _ => Err(ModelError::InvalidStepSequence {
            detail: format!(
                "step \"{description}\" has sequence \"{}\", expected a positive integer",
                text.trim()
            ),
        }),
    }
}

/// Parses every element child of a `constants` block into a matrix.
///
/// Values are a `,`/`;` separated row-major list that must exactly fill
/// the `size="[rows,cols]"` attribute.
fn read_constants(block: Node, step: &str) -> Result<Workspace, ModelError> {
    let mut constants = Workspace::new();

    for constant in block.children().filter(Node::is_element) {
        let name = constant.tag_name().name();
        let unparsable = || ModelError::UnparsableConstant {
            name: name.to_string(),
            step: step.to_string(),
        };
        let wrong_size = || ModelError::WrongSizeConstant {
            name: name.to_string(),
            step: step.to_string(),
        };

        let shape = constant
            .attribute("size")
            .and_then(Shape::parse)
            .ok_or_else(unparsable)?;

        let values = inner_text(constant)
            .split([',', ';'])
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| v.parse::<f64>().map_err(|_| unparsable()))
            .collect::<Result<Vec<_>, _>>()?;

        if shape.checked_num_elements() != Some(values.len()) {
            return Err(wrong_size());
        }
        let value = Matrix::from_vec(shape.rows(), shape.cols(), values).map_err(|_| wrong_size())?;
        constants.set_var(name, value);
    }

    Ok(constants)
}

/// Returns the only element named `name`, or `None` if there are zero or several.
fn single_element<'a, 'input>(doc: &'a Document<'input>, name: &str) -> Option<Node<'a, 'input>> {
    let mut matches = doc.descendants().filter(|n| n.has_tag_name(name));
    let first = matches.next()?;
    match matches.next() {
        Some(_) => None,
        None => Some(first),
    }
}

fn child_element<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(name))
}

/// Concatenated text of all descendant text nodes.
fn inner_text(node: Node) -> String {
    node.descendants()
        .filter(Node::is_text)
        .filter_map(|n| n.text())
        .collect()
}
