pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use protean_bio::{Analyzer, ReferenceFunctionTable};
use protean_core::load_reference_spec;
use std::path::Path;

#[derive(Parser)]
#[command(
    name = "protean",
    version,
    about = "Protein property prediction from amino-acid sequences",
    long_about = "Protean analyzes protein sequences and predicts hydropathy profiles, \
                  secondary-structure composition, likely biological function, and \
                  functional regions, and compares original and mutated sequences."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full analysis over one sequence
    Analyze(commands::analyze::AnalyzeArgs),

    /// Compare an original sequence against a mutated one
    Compare(commands::compare::CompareArgs),

    /// Check a sequence against the canonical amino-acid alphabet
    Validate(commands::validate::ValidateArgs),

    /// List the function labels known to the reference table
    Functions(commands::functions::FunctionsArgs),
}

/// Build an analyzer over the built-in reference table, or over a table
/// loaded from a TOML spec when one is supplied.
pub(crate) fn build_analyzer(reference: Option<&Path>) -> anyhow::Result<Analyzer> {
    let table = match reference {
        Some(path) => {
            let spec = load_reference_spec(path)?;
            ReferenceFunctionTable::from_spec(&spec)?
        }
        None => ReferenceFunctionTable::builtin().clone(),
    };
    Ok(Analyzer::new(table))
}
