// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # mescore
//!
//! Command-line interface for loading and scoring exported models.
//!
//! ## Usage
//! ```bash
//! # Score one row
//! mescore run --model ./demos/pca_demo.xml --input "1.5,1,1.5,2"
//!
//! # Score every row of a CSV file, reporting two results as JSON
//! mescore run --model ./demos/pca_demo.xml --input-file rows.csv --outputs T2,Q --json
//!
//! # Self-test with the row 1, 2, ..., n
//! mescore run --model ./demos/pca_demo.xml --ramp
//!
//! # Inspect model structure
//! mescore inspect --model ./demos/pca_demo.xml
//! ```

mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mescore",
    about = "Loads exported models and scores input rows against them",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file (CLI arguments take precedence).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one or more input rows and print the results.
    Run {
        /// Path to the model XML document.
        #[arg(short, long)]
        model: Option<PathBuf>,

        #[command(flatten)]
        input: InputArgs,

        /// Comma-separated result names to report (default: all).
        #[arg(short, long, value_delimiter = ',')]
        outputs: Vec<String>,

        /// Print results as JSON.
        #[arg(long)]
        json: bool,

        /// Skip per-step timing.
        #[arg(long)]
        no_profile: bool,
    },

    /// Print a model's metadata, constants and scripts.
    Inspect {
        /// Path to the model XML document.
        #[arg(short, long)]
        model: Option<PathBuf>,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// A single comma-separated input row.
    #[arg(short, long, allow_hyphen_values = true)]
    input: Option<String>,

    /// A CSV file with one input row per line.
    #[arg(long)]
    input_file: Option<PathBuf>,

    /// Score the row 1, 2, ..., n for a width-n model.
    #[arg(long)]
    ramp: bool,
}

impl InputArgs {
    fn into_source(self) -> commands::run::InputSource {
        use commands::run::InputSource;
        match (self.input, self.input_file) {
            (Some(row), _) => InputSource::Row(row),
            (None, Some(path)) => InputSource::File(path),
            (None, None) => InputSource::Ramp,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            model,
            input,
            outputs,
            json,
            no_profile,
        } => {
            let mut config = commands::resolve_config(cli.config.as_deref(), model)?;
            if !outputs.is_empty() {
                config.outputs = outputs;
            }
            if json {
                config.format = runtime::OutputFormat::Json;
            }
            if no_profile {
                config.enable_profiling = false;
            }
            commands::run::execute(config, input.into_source()).await
        }
        Commands::Inspect { model } => {
            let config = commands::resolve_config(cli.config.as_deref(), model)?;
            commands::inspect::execute(config.model_path).await
        }
    }
}
