// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for a full `apply` over generated models.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use model_ir::ModelLoader;
use runtime::ScoringEngine;
use std::sync::Arc;

/// Builds a PCA-shaped model: autoscale, project onto `ncomp` loadings,
/// residual and T² statistics.
fn pca_xml(width: usize, ncomp: usize) -> String {
    let list = |n: usize, f: &dyn Fn(usize) -> f64| {
        (0..n).map(|i| f(i).to_string()).collect::<Vec<_>>().join(",")
    };
    format!(
        r#"<model>
  <inputdata><size>1,{width}</size></inputdata>
  <information><modeltype>PCA</modeltype></information>
  <step><sequence>1</sequence><description>autoscale</description>
    <constants>
      <mu size="[1,{width}]">{mu}</mu>
      <sigma size="[1,{width}]">{sigma}</sigma>
    </constants>
    <script>xc = minus(x, mu); xs = rdivide(xc, sigma)</script>
  </step>
  <step><sequence>2</sequence><description>project</description>
    <constants>
      <P size="[{width},{ncomp}]">{loadings}</P>
      <lambda size="[1,{ncomp}]">{lambda}</lambda>
      <two size="[1,1]">2</two>
    </constants>
    <script>
      t = mtimes(xs, P); Pt = transpose(P); xhat = mtimes(t, Pt);
      r = minus(xs, xhat); rt = transpose(r); Q = mtimes(r, rt);
      tsq = power(t, two); T2c = rdivide(tsq, lambda)
    </script>
  </step>
</model>"#,
        mu = list(width, &|i| i as f64 * 0.1),
        sigma = list(width, &|i| 1.0 + i as f64 * 0.01),
        loadings = list(width * ncomp, &|i| ((i % 7) as f64 - 3.0) * 0.05),
        lambda = list(ncomp, &|i| 1.0 + i as f64),
    )
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");
    for width in [16, 128, 512] {
        let model = Arc::new(ModelLoader::from_xml(&pca_xml(width, 4)).unwrap());
        let row: Vec<f64> = (0..width).map(|i| i as f64).collect();
        let mut engine = ScoringEngine::new(model).with_profiling(false);

        group.bench_with_input(BenchmarkId::new("pca", width), &width, |b, _| {
            b.iter(|| {
                // Re-assigning the input resets the engine so every iteration scores.
                engine.set_input_row(black_box(&row)).unwrap();
                engine.apply().unwrap();
            })
        });
    }
    group.finish();
}

fn bench_load(c: &mut Criterion) {
    let xml = pca_xml(128, 4);
    c.bench_function("load/pca_128", |b| {
        b.iter(|| ModelLoader::from_xml(black_box(&xml)).unwrap())
    });
}

criterion_group!(benches, bench_apply, bench_load);
criterion_main!(benches);
