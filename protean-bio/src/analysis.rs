//! Full-analysis orchestration over a single sequence

use crate::composition::{self, CompositionSummary};
use crate::domains::{self, DomainHit};
use crate::embedding;
use crate::function::{self, FunctionPrediction, ReferenceFunctionTable};
use crate::hydropathy::{HydropathyAnalyzer, HydropathyProfile};
use crate::sequence::Sequence;
use crate::structure::{self, StructureComposition};
use protean_core::config::AnalysisConfig;
use protean_core::ProteanResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything the engine predicts for one sequence. Either the whole
/// record is produced or the analysis fails; there are no partial
/// results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sequence: Sequence,
    pub hydropathy: HydropathyProfile,
    pub structure: StructureComposition,
    /// One-letter conformation code per residue (H/E/C).
    pub conformation_track: String,
    pub composition: CompositionSummary,
    pub function: FunctionPrediction,
    pub domains: Vec<DomainHit>,
}

/// The engine's entry point. Owns the read-only reference function
/// table for its lifetime; all analysis calls are pure and independent,
/// so one `Analyzer` can serve any number of concurrent requests.
pub struct Analyzer {
    table: ReferenceFunctionTable,
    config: AnalysisConfig,
    hydropathy: HydropathyAnalyzer,
}

impl Analyzer {
    pub fn new(table: ReferenceFunctionTable) -> Self {
        Self::with_config(table, AnalysisConfig::default())
    }

    pub fn with_config(table: ReferenceFunctionTable, config: AnalysisConfig) -> Self {
        Self {
            table,
            config,
            hydropathy: HydropathyAnalyzer::new(),
        }
    }

    /// An analyzer over the built-in reference table.
    pub fn builtin() -> Self {
        Self::new(ReferenceFunctionTable::builtin().clone())
    }

    /// Reference-table labels, for display purposes only.
    pub fn known_functions(&self) -> Vec<&str> {
        self.table.labels()
    }

    /// Run every predictor over one validated sequence.
    ///
    /// The component analyses are mutually independent; nothing is
    /// shared between them except the input sequence.
    pub fn analyze_full(&self, seq: &Sequence) -> ProteanResult<AnalysisResult> {
        debug!(length = seq.len(), "analyzing sequence");

        let hydropathy = self.hydropathy.analyze(seq)?;
        let structure = structure::predict(seq)?;
        let track = structure::conformation_track(seq, self.config.conformation_window)?;
        let composition = composition::summarize(seq)?;
        let embedding = embedding::embed(seq)?;
        let function = function::predict(&embedding, &self.table)?;
        let domains = domains::scan(seq, self.config.domain_window)?;

        Ok(AnalysisResult {
            sequence: seq.clone(),
            hydropathy,
            structure,
            conformation_track: track.iter().map(|c| c.code()).collect(),
            composition,
            function,
            domains,
        })
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::builtin()
    }
}
