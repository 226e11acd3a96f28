// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # model-ir
//!
//! In-memory representation of an exported scoring model, and the loader
//! that builds it from its XML document.
//!
//! - [`OpKind`]: the closed set of script operations.
//! - [`Instruction`]: one pre-parsed script line, `dest = op(a[, b])`.
//! - [`Step`]: a scoring phase of constants plus an ordered script.
//! - [`Information`]: the pass-through metadata block (model type etc).
//! - [`Model`]: the complete model, with a **type-state pattern**
//!   (`Loaded` → `Validated`).
//! - [`ModelLoader`]: parses and validates the XML document.
//!
//! # Document Format
//! ```xml
//! <model>
//!   <inputdata><size>1,3</size></inputdata>
//!   <information><modeltype>PCA</modeltype></information>
//!   <step>
//!     <sequence>1</sequence>
//!     <description>preprocess</description>
//!     <constants><mx size="[1,3]">0.5,1.0,1.5</mx></constants>
//!     <script><line>xc = minus(x, mx);</line></script>
//!   </step>
//! </model>
//! ```
//!
//! # Example
//! ```no_run
//! use model_ir::ModelLoader;
//! use std::path::Path;
//!
//! let model = ModelLoader::load(Path::new("./demos/pca_demo.xml")).unwrap();
//! println!("{}", model.summary());
//! for step in model.iter_steps() {
//!     println!("  {}", step.summary());
//! }
//! ```

mod error;
mod information;
mod instruction;
mod loader;
pub mod model;
mod step;

pub use error::{ModelError, ScriptError};
pub use information::{InfoEntry, Information};
pub use instruction::{Instruction, OpKind};
pub use loader::ModelLoader;
pub use model::Model;
pub use step::Step;
