//! Protein property prediction engine for Protean
//!
//! Pure, synchronous, deterministic analyses over validated amino-acid
//! sequences: hydropathy profiling, secondary-structure composition,
//! composition summaries, nearest-neighbor function prediction, domain
//! scanning, and aggregate mutation comparison.

pub mod analysis;
pub mod composition;
pub mod domains;
pub mod embedding;
pub mod function;
pub mod hydropathy;
pub mod mutation;
pub mod sequence;
pub mod structure;

// Re-export commonly used types
pub use analysis::{AnalysisResult, Analyzer};
pub use composition::CompositionSummary;
pub use domains::DomainHit;
pub use embedding::{embed, Embedding, EMBEDDING_DIM};
pub use function::{FunctionCandidate, FunctionPrediction, ReferenceFunctionTable};
pub use hydropathy::{HydropathyAnalyzer, HydropathyProfile};
pub use mutation::{FunctionChange, MutationDelta, StructureDelta};
pub use sequence::{Sequence, CANONICAL_ALPHABET};
pub use structure::{Conformation, StructureComposition};
