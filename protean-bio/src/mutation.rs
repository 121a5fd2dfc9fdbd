//! Aggregate-level comparison of an original and a mutated sequence

use crate::analysis::{AnalysisResult, Analyzer};
use crate::sequence::Sequence;
use protean_core::ProteanResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Per-class change in structure proportions (mutated minus original).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StructureDelta {
    pub helix: f64,
    pub sheet: f64,
    pub coil: f64,
}

/// Change in composition fractions and molecular weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositionDelta {
    pub hydrophobic: f64,
    pub polar: f64,
    pub charged: f64,
    pub molecular_weight: f64,
}

/// Whether and how the predicted function moved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionChange {
    pub changed: bool,
    pub original_label: String,
    pub mutated_label: String,
    pub original_confidence: f64,
    pub mutated_confidence: f64,
}

/// The two full analyses plus their aggregate-level differences.
/// Per-position diffing is deliberately absent: the two sequences may
/// differ in length (insertions and deletions are valid mutations).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationDelta {
    pub original: AnalysisResult,
    pub mutated: AnalysisResult,
    /// Mutated mean hydropathy minus original mean hydropathy.
    pub hydropathy_delta: f64,
    pub structure_delta: StructureDelta,
    pub composition_delta: CompositionDelta,
    pub function: FunctionChange,
}

impl Analyzer {
    /// Analyze both sequences independently and diff the aggregates.
    pub fn compare(&self, original: &Sequence, mutated: &Sequence) -> ProteanResult<MutationDelta> {
        debug!(
            original_length = original.len(),
            mutated_length = mutated.len(),
            "comparing sequences"
        );

        let original = self.analyze_full(original)?;
        let mutated = self.analyze_full(mutated)?;

        let hydropathy_delta = mutated.hydropathy.mean - original.hydropathy.mean;

        let structure_delta = StructureDelta {
            helix: mutated.structure.helix - original.structure.helix,
            sheet: mutated.structure.sheet - original.structure.sheet,
            coil: mutated.structure.coil - original.structure.coil,
        };

        let composition_delta = CompositionDelta {
            hydrophobic: mutated.composition.hydrophobic - original.composition.hydrophobic,
            polar: mutated.composition.polar - original.composition.polar,
            charged: mutated.composition.charged - original.composition.charged,
            molecular_weight: mutated.composition.molecular_weight
                - original.composition.molecular_weight,
        };

        let function = FunctionChange {
            changed: original.function.label() != mutated.function.label(),
            original_label: original.function.label().to_string(),
            mutated_label: mutated.function.label().to_string(),
            original_confidence: original.function.confidence(),
            mutated_confidence: mutated.function.confidence(),
        };

        Ok(MutationDelta {
            original,
            mutated,
            hydropathy_delta,
            structure_delta,
            composition_delta,
            function,
        })
    }
}
