// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `mescore inspect`: print model metadata, constants and scripts.

use std::path::PathBuf;

pub async fn execute(model: PathBuf) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║              mescore · Model Inspector              ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    // Load and validate the model.
    let loaded = model_ir::ModelLoader::load(&model).map_err(|e| {
        anyhow::anyhow!("failed to load model from '{}': {e}", model.display())
    })?;

    // ── Summary ────────────────────────────────────────────────
    println!("  Model:        {}", model.display());
    println!("  Type:         {}", loaded.model_type());
    println!("  Input width:  {}", loaded.input_data_size());
    println!("  Steps:        {}", loaded.num_steps());
    println!("  Instructions: {}", loaded.total_instructions());
    println!();

    // ── Information ────────────────────────────────────────────
    let info = loaded.information();
    if !info.entries.is_empty() {
        println!("  Information:");
        for entry in &info.entries {
            println!("   {:<20} {}", entry.name, truncate(&entry.value, 50));
        }
        println!();
    }

    // ── Steps ──────────────────────────────────────────────────
    for step in loaded.iter_steps() {
        println!("  [{}] {}", step.sequence, step.description);

        if !step.constants.is_empty() {
            println!("   Constants:");
            for (name, value) in step.constants.iter() {
                println!("     {:<16} {}", name, value.shape());
            }
        }

        println!("   Script:");
        if step.script.is_empty() {
            println!("     (empty)");
        }
        for instruction in &step.script {
            println!("     {instruction}");
        }
        println!();
    }

    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    }
}
