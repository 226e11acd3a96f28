// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Example: score a batch of rows against one shared model.
//!
//! The model is loaded once and shared through an `Arc`; every worker
//! thread creates its own engine and scores its share of the rows.
//!
//! ```bash
//! cargo run -p runtime --example concurrent_scoring
//! ```

use model_ir::ModelLoader;
use runtime::ScoringEngine;
use std::path::Path;
use std::sync::Arc;

const WORKERS: usize = 4;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter("warn").init();

    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/pca_demo.xml");
    let model = Arc::new(ModelLoader::load(&path)?);
    println!("{}\n", model.summary());

    // Points drifting away from the model plane.
    let rows: Vec<Vec<f64>> = (0..16)
        .map(|i| {
            let d = i as f64 * 0.25;
            vec![1.0 + d, 2.0, 3.0 - d, 4.0]
        })
        .collect();

    let scored = std::thread::scope(|scope| {
        let handles: Vec<_> = rows
            .chunks(rows.len().div_ceil(WORKERS))
            .map(|chunk| {
                let model = Arc::clone(&model);
                scope.spawn(move || -> Result<Vec<(f64, f64)>, runtime::RuntimeError> {
                    let mut engine = ScoringEngine::new(model).with_profiling(false);
                    chunk
                        .iter()
                        .map(|row| {
                            engine.set_input_row(row)?;
                            engine.apply()?;
                            let t2 = engine.get_var("T2")?.as_slice()[0];
                            let q = engine.get_var("Q")?.as_slice()[0];
                            Ok((t2, q))
                        })
                        .collect()
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().map_err(|_| "worker panicked"))
            .collect::<Result<Vec<_>, _>>()
    })?;

    println!("{:<6} {:>12} {:>12}", "Row", "T2", "Q");
    println!("{}", "-".repeat(32));
    let mut index = 0;
    for batch in scored {
        for (t2, q) in batch? {
            println!("{index:<6} {t2:>12.4} {q:>12.4}");
            index += 1;
        }
    }

    Ok(())
}
