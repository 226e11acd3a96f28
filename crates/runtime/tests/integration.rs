// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: end-to-end scoring pipeline.
//!
//! These tests go from an XML document through the loader and the engine
//! to the result workspace, checking that the three crates compose
//! correctly and that the engine's state transitions hold end-to-end.

use matrix_core::{Matrix, MatrixError, WorkspaceError};
use model_ir::{model::Validated, Model, ModelError, ModelLoader};
use runtime::{EngineState, RuntimeConfig, RuntimeError, ScoringEngine};
use std::path::PathBuf;
use std::sync::Arc;

// ── Helpers ────────────────────────────────────────────────────

const PCA_DEMO: &str = include_str!("../../../demos/pca_demo.xml");

/// The two-step abs / plus model.
const ABS_PLUS: &str = r#"<?xml version="1.0"?>
<model>
  <inputdata><size>1,2</size></inputdata>
  <information><modeltype>TEST</modeltype></information>
  <step>
    <sequence>1</sequence>
    <description>magnitude</description>
    <script><line>y = abs(x);</line></script>
  </step>
  <step>
    <sequence>2</sequence>
    <description>offset</description>
    <constants><k size="[1,1]">5.0</k></constants>
    <script><line>z = plus(y, k);</line></script>
  </step>
</model>"#;

/// Builds a single-step model over a `1×width` input.
fn model_with(width: usize, constants: &str, script: &str) -> Arc<Model<Validated>> {
    let xml = format!(
        "<model><inputdata><size>1,{width}</size></inputdata>\
         <information><modeltype>TEST</modeltype></information>\
         <step><sequence>1</sequence><description>only</description>\
         <constants>{constants}</constants><script>{script}</script></step></model>"
    );
    Arc::new(ModelLoader::from_xml(&xml).unwrap())
}

fn applied(model: Arc<Model<Validated>>, input: &[f64]) -> ScoringEngine {
    let mut engine = ScoringEngine::new(model);
    engine.set_input_row(input).unwrap();
    engine.apply().unwrap();
    engine
}

fn assert_close(actual: &Matrix, expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?}");
    for (a, e) in actual.as_slice().iter().zip(expected) {
        assert!((a - e).abs() < 1e-12, "{a} != {e}");
    }
}

// ── End-to-end ─────────────────────────────────────────────────

#[test]
fn test_two_step_abs_plus() {
    let model = Arc::new(ModelLoader::from_xml(ABS_PLUS).unwrap());
    let engine = applied(model, &[-3.0, 4.0]);

    assert_eq!(engine.get_var("y").unwrap(), &Matrix::row(&[3.0, 4.0]));
    assert_eq!(engine.get_var("z").unwrap(), &Matrix::row(&[8.0, 9.0]));

    let names: Vec<&str> = engine.results().unwrap().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["k", "x", "y", "z"]);
}

#[test]
fn test_pca_demo_ramp() {
    let model = Arc::new(ModelLoader::from_xml(PCA_DEMO).unwrap());
    assert_eq!(model.model_type(), "PCA");
    assert_eq!(model.input_data_size(), 4);
    assert_eq!(model.information().get("ncomp"), Some("2"));

    let engine = applied(model, &[1.0, 2.0, 3.0, 4.0]);
    assert_close(engine.get_var("xs").unwrap(), &[1.0, 1.0, 1.0, 1.0]);
    assert_close(engine.get_var("t").unwrap(), &[2.0, 0.0]);
    assert_close(engine.get_var("Q").unwrap(), &[0.0]);
    assert_close(engine.get_var("T2").unwrap(), &[1.0]);
    assert_close(engine.get_var("logT2").unwrap(), &[0.0]);
    assert_close(engine.get_var("t1").unwrap(), &[2.0]);
}

#[test]
fn test_pca_demo_off_model_point() {
    let model = Arc::new(ModelLoader::from_xml(PCA_DEMO).unwrap());
    let engine = applied(model, &[1.5, 1.0, 1.5, 2.0]);

    assert_close(engine.get_var("t").unwrap(), &[1.0, 1.0]);
    assert_close(engine.get_var("resid").unwrap(), &[1.0, -1.0, 0.0, 0.0]);
    assert_close(engine.get_var("Q").unwrap(), &[2.0]);
    assert_close(engine.get_var("T2").unwrap(), &[1.25]);
    assert_close(engine.get_var("logT2").unwrap(), &[1.25f64.log10()]);
}

#[test]
fn test_pca_demo_from_config() {
    let config = RuntimeConfig {
        model_path: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../demos/pca_demo.xml")),
        ..Default::default()
    };
    let mut engine = ScoringEngine::from_config(&config).unwrap();
    engine.set_input_row(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    engine.apply().unwrap();

    let metrics = engine.metrics().unwrap();
    assert_eq!(metrics.step_metrics.len(), 3);
    assert_eq!(metrics.variables_produced, engine.workspace().len());
}

// ── Input validation ───────────────────────────────────────────

#[test]
fn test_input_width_must_match() {
    let model = Arc::new(ModelLoader::from_xml(PCA_DEMO).unwrap());
    let mut engine = ScoringEngine::new(model);

    for width in [0, 1, 3, 5, 10] {
        let err = engine.set_input_row(&vec![1.0; width]).unwrap_err();
        match err {
            RuntimeError::InputDataColumnMismatch { expected, actual } => {
                assert_eq!(expected, 4);
                assert_eq!(actual, width);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    let err = engine.set_input(Matrix::zeros(3, 4).unwrap()).unwrap_err();
    assert!(matches!(err, RuntimeError::InputDataTooManyRows { rows: 3 }));
}

#[test]
fn test_apply_before_input() {
    let model = Arc::new(ModelLoader::from_xml(ABS_PLUS).unwrap());
    let mut engine = ScoringEngine::new(model);
    assert!(matches!(engine.apply(), Err(RuntimeError::InputDataMissing)));
}

#[test]
fn test_results_before_apply() {
    let model = Arc::new(ModelLoader::from_xml(ABS_PLUS).unwrap());
    let mut engine = ScoringEngine::new(model);
    assert!(matches!(engine.results(), Err(RuntimeError::ModelNotApplied)));

    engine.set_input_row(&[1.0, 2.0]).unwrap();
    assert!(matches!(engine.results(), Err(RuntimeError::ModelNotApplied)));
    assert!(matches!(engine.get_var("x"), Err(RuntimeError::ModelNotApplied)));
}

#[test]
fn test_apply_is_idempotent() {
    let model = Arc::new(ModelLoader::from_xml(PCA_DEMO).unwrap());
    let mut engine = applied(model, &[1.5, 1.0, 1.5, 2.0]);

    let first_results = engine.result_workspace().unwrap().clone();
    let first_metrics = engine.metrics().unwrap().total_duration;

    engine.apply().unwrap();
    assert_eq!(engine.state(), EngineState::Applied);
    assert_eq!(engine.result_workspace().unwrap(), &first_results);
    // No recomputation, so the recorded run is the same one.
    assert_eq!(engine.metrics().unwrap().total_duration, first_metrics);
}

// ── Operations ─────────────────────────────────────────────────

#[test]
fn test_broadcast_shapes() {
    let model = model_with(
        3,
        r#"<s size="[1,1]">2</s><m size="[2,3]">1,2,3,4,5,6</m>"#,
        "a = plus(m, s); b = minus(s, m); c = times(m, s); d = rdivide(m, s); e = power(m, s); \
         f = plus(s, s)",
    );
    let engine = applied(model, &[0.0, 0.0, 0.0]);

    for name in ["a", "b", "c", "d", "e"] {
        assert_eq!(engine.get_var(name).unwrap().shape(), (2, 3).into(), "{name}");
    }
    assert_eq!(engine.get_var("f").unwrap(), &Matrix::scalar(4.0));
    assert_close(engine.get_var("b").unwrap(), &[1.0, 0.0, -1.0, -2.0, -3.0, -4.0]);
    assert_close(engine.get_var("e").unwrap(), &[1.0, 4.0, 9.0, 16.0, 25.0, 36.0]);
}

#[test]
fn test_mismatched_shapes_fail() {
    for op in ["plus", "minus", "times", "rdivide", "power"] {
        let model = model_with(
            3,
            r#"<m size="[2,3]">1,2,3,4,5,6</m>"#,
            &format!("y = {op}(x, m)"),
        );
        let mut engine = ScoringEngine::new(model);
        engine.set_input_row(&[1.0, 2.0, 3.0]).unwrap();
        match engine.apply().unwrap_err() {
            RuntimeError::ExecutionError { step, source, .. } => {
                assert_eq!(step, "only");
                assert!(
                    matches!(source, MatrixError::IncompatibleDimensions { .. }),
                    "{op}"
                );
            }
            other => panic!("unexpected for {op}: {other:?}"),
        }
        assert_eq!(engine.state(), EngineState::Idle);
    }
}

#[test]
fn test_mtimes_scalar_matches_times() {
    let model = model_with(
        3,
        r#"<s size="[1,1]">-1.5</s>"#,
        "a = mtimes(x, s); b = times(x, s); c = mtimes(s, x); d = times(s, x)",
    );
    let engine = applied(model, &[1.0, 2.0, 3.0]);
    assert_eq!(engine.get_var("a").unwrap(), engine.get_var("b").unwrap());
    assert_eq!(engine.get_var("c").unwrap(), engine.get_var("d").unwrap());
}

#[test]
fn test_mtimes_two_by_two() {
    let model = model_with(
        1,
        r#"<a size="[2,2]">1,2,3,4</a><b size="[2,2]">5,6,7,8</b>"#,
        "c = mtimes(a, b)",
    );
    let engine = applied(model, &[0.0]);
    let expected = Matrix::from_rows(&[vec![19.0, 22.0], vec![43.0, 50.0]]).unwrap();
    assert_eq!(engine.get_var("c").unwrap(), &expected);
}

#[test]
fn test_gather_out_of_range() {
    let model = model_with(2, r#"<i size="[1,1]">3</i>"#, "y = cols(x, i)");
    let mut engine = ScoringEngine::new(model);
    engine.set_input_row(&[1.0, 2.0]).unwrap();
    assert!(matches!(
        engine.apply(),
        Err(RuntimeError::ExecutionError {
            source: MatrixError::InvalidIndex { .. },
            ..
        })
    ));
}

// ── Workspace semantics ────────────────────────────────────────

#[test]
fn test_constants_visible_to_later_steps() {
    let xml = r#"<model>
  <inputdata><size>1,1</size></inputdata>
  <information><modeltype>TEST</modeltype></information>
  <step><sequence>2</sequence><description>use</description>
    <script>z = times(y, c)</script></step>
  <step><sequence>1</sequence><description>define</description>
    <constants><c size="[1,1]">10</c></constants>
    <script>y = plus(x, c)</script></step>
</model>"#;
    let model = Arc::new(ModelLoader::from_xml(xml).unwrap());
    let engine = applied(model, &[1.0]);
    assert_eq!(engine.get_var("z").unwrap(), &Matrix::scalar(110.0));
}

#[test]
fn test_results_sorted_case_insensitively() {
    let model = model_with(1, "", "B = abs(x); a = abs(x); C = abs(x)");
    let engine = applied(model, &[1.0]);
    let names: Vec<&str> = engine.results().unwrap().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["a", "B", "C", "x"]);
}

#[test]
fn test_unset_variable_leaves_partial_workspace() {
    let model = model_with(1, "", "y = abs(x); z = plus(y, ghost)");
    let mut engine = ScoringEngine::new(model);
    engine.set_input_row(&[-2.0]).unwrap();

    match engine.apply().unwrap_err() {
        RuntimeError::Workspace(WorkspaceError::ValueNotSet { name }) => assert_eq!(name, "ghost"),
        other => panic!("unexpected: {other:?}"),
    }
    assert!(!engine.is_applied());
    assert!(engine.workspace().is_set("y"));
    assert!(!engine.workspace().is_set("z"));
}

#[test]
fn test_results_serialise_to_json() {
    let model = Arc::new(ModelLoader::from_xml(ABS_PLUS).unwrap());
    let engine = applied(model, &[-3.0, 4.0]);
    let json = serde_json::to_value(engine.result_workspace().unwrap()).unwrap();
    assert_eq!(json["z"]["data"], serde_json::json!([8.0, 9.0]));
    assert_eq!(json["z"]["rows"], 1);
}

// ── Loader errors ──────────────────────────────────────────────

#[test]
fn test_missing_inputdata_rejected() {
    let xml = ABS_PLUS.replace("<inputdata><size>1,2</size></inputdata>", "");
    assert!(matches!(
        ModelLoader::from_xml(&xml),
        Err(ModelError::InputdataInfoNotFound)
    ));
}

#[test]
fn test_missing_script_names_step() {
    let xml = ABS_PLUS.replace("<script><line>z = plus(y, k);</line></script>", "");
    match ModelLoader::from_xml(&xml) {
        Err(ModelError::ScriptMissing { step }) => assert_eq!(step, "offset"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_oversized_constant_rejected_at_load() {
    let xml = ABS_PLUS.replace(
        r#"<k size="[1,1]">5.0</k>"#,
        r#"<k size="[9223372036854775808,2]"></k>"#,
    );
    assert!(matches!(
        ModelLoader::from_xml(&xml),
        Err(ModelError::UnparsableConstant { .. })
    ));
}

#[test]
fn test_unknown_operation_rejected_at_load() {
    let xml = ABS_PLUS.replace("plus(y, k)", "inv(y)");
    assert!(matches!(
        ModelLoader::from_xml(&xml),
        Err(ModelError::UnrecognizedScriptCommand { .. })
    ));
}

// ── Concurrency ────────────────────────────────────────────────

#[test]
fn test_shared_model_across_threads() {
    let model = Arc::new(ModelLoader::from_xml(ABS_PLUS).unwrap());

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let model = Arc::clone(&model);
                scope.spawn(move || {
                    let v = -(i as f64);
                    let engine = applied(model, &[v, 1.0]);
                    engine.get_var("z").unwrap().clone()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let z = handle.join().unwrap();
            assert_eq!(z, Matrix::row(&[i as f64 + 5.0, 6.0]));
        }
    });
}
