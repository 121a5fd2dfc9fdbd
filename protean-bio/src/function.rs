//! Nearest-neighbor function prediction against a reference table

use crate::embedding::{embed, Embedding};
use crate::sequence::Sequence;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use protean_core::{ProteanError, ProteanResult, ReferenceTableSpec};
use serde::{Deserialize, Serialize};

/// Built-in exemplar sequences, one per function label. The table is
/// derived by embedding these through the same pipeline queries use, so
/// reference and query vectors always live in the same space.
const BUILTIN_EXEMPLARS: &[(&str, &str)] = &[
    (
        "enzyme",
        "MKTAYIAKQRQISFVKSHFSRQLEERLGLIEVQAPILSRVGDGTQDNLSGAEKAVQ",
    ),
    (
        "membrane transport",
        "GWLLVATLLGLVAFIGLMVWLLIFAPVVGSLLAGMLVPLIVGAVSFMILWGLVRES",
    ),
    (
        "signaling",
        "MSNQEWQSTLSNGNTSQCSDSTNPQGSTSQNTSSAQNSTTSECSQNSTQSGSNTSG",
    ),
    (
        "dna binding",
        "MKRKSKRKAHIEQRKRELAKQKGKRLSREAKRAQKAKDKGLLTRPKKRAHKQEWRK",
    ),
    (
        "structural",
        "GAPGAPGSAGAPGLPGPRGPAGPPGPAGKDGEAGAQGPPGPAGPAGERGEQGPAGS",
    ),
];

static BUILTIN_TABLE: Lazy<ReferenceFunctionTable> = Lazy::new(|| {
    let mut table = ReferenceFunctionTable::new();
    for &(label, exemplar) in BUILTIN_EXEMPLARS {
        let seq = Sequence::parse(exemplar).expect("built-in exemplar is valid");
        let embedding = embed(&seq).expect("built-in exemplar embeds");
        table.insert(label.to_string(), embedding);
    }
    table
});

/// Read-only mapping from function label to reference embedding.
///
/// Insertion order is preserved and doubles as the tie-break order for
/// equal similarities. Initialized once at startup and never mutated
/// afterwards; concurrent reads are safe.
#[derive(Debug, Clone, Default)]
pub struct ReferenceFunctionTable {
    entries: IndexMap<String, Embedding>,
}

impl ReferenceFunctionTable {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// The built-in table over [`BUILTIN_EXEMPLARS`].
    pub fn builtin() -> &'static Self {
        &BUILTIN_TABLE
    }

    /// Build a table from an on-disk spec by embedding each exemplar.
    pub fn from_spec(spec: &ReferenceTableSpec) -> ProteanResult<Self> {
        if spec.functions.is_empty() {
            return Err(ProteanError::EmptyReferenceTable);
        }

        let mut table = Self::new();
        for entry in &spec.functions {
            let seq = Sequence::parse(&entry.sequence)?;
            table.insert(entry.label.clone(), embed(&seq)?);
        }
        Ok(table)
    }

    pub fn insert(&mut self, label: String, embedding: Embedding) {
        self.entries.insert(label, embedding);
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.keys().map(|k| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Embedding)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// One ranked reference match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCandidate {
    pub label: String,
    /// Cosine similarity clipped to [0, 1].
    pub similarity: f64,
    /// 1-based rank after sorting.
    pub rank: usize,
}

/// Candidates in non-increasing similarity order; the top entry is the
/// reported prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionPrediction {
    pub candidates: Vec<FunctionCandidate>,
}

impl FunctionPrediction {
    /// The best-ranked candidate. The predictor never produces an empty
    /// candidate list, so this cannot fail for predictor output.
    pub fn top(&self) -> &FunctionCandidate {
        &self.candidates[0]
    }

    pub fn label(&self) -> &str {
        &self.top().label
    }

    pub fn confidence(&self) -> f64 {
        self.top().similarity
    }
}

/// Normalized dot product of two vectors. Zero-magnitude input yields
/// 0.0 rather than NaN.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Rank every reference entry by cosine similarity to the query.
///
/// Sorting is total-ordered: similarity descending, then reference-table
/// insertion index ascending, so candidate order is reproducible.
pub fn predict(
    query: &Embedding,
    table: &ReferenceFunctionTable,
) -> ProteanResult<FunctionPrediction> {
    if table.is_empty() {
        return Err(ProteanError::EmptyReferenceTable);
    }

    let mut scored: Vec<(usize, &str, f64)> = table
        .iter()
        .enumerate()
        .map(|(index, (label, reference))| {
            let similarity = cosine_similarity(query, reference).clamp(0.0, 1.0);
            (index, label, similarity)
        })
        .collect();

    scored.sort_by(|a, b| {
        b.2.partial_cmp(&a.2)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });

    let candidates = scored
        .into_iter()
        .enumerate()
        .map(|(rank, (_, label, similarity))| FunctionCandidate {
            label: label.to_string(),
            similarity,
            rank: rank + 1,
        })
        .collect();

    Ok(FunctionPrediction { candidates })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_table() -> ReferenceFunctionTable {
        let mut table = ReferenceFunctionTable::new();
        table.insert("x".to_string(), vec![1.0, 0.0, 0.0]);
        table.insert("y".to_string(), vec![0.0, 1.0, 0.0]);
        table.insert("z".to_string(), vec![0.0, 0.0, 1.0]);
        table
    }

    #[test]
    fn test_cosine_self_similarity_is_one() {
        let seq = Sequence::parse("MKWVTFISLLLLFSSAYS").unwrap();
        let embedding = embed(&seq).unwrap();
        assert!((cosine_similarity(&embedding, &embedding) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_orthogonal_is_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn test_cosine_zero_vector_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_predict_ranks_by_similarity() {
        let prediction = predict(&vec![1.0, 0.1, 0.0], &unit_table()).unwrap();

        assert_eq!(prediction.label(), "x");
        assert_eq!(prediction.top().rank, 1);

        let similarities: Vec<f64> = prediction
            .candidates
            .iter()
            .map(|c| c.similarity)
            .collect();
        for pair in similarities.windows(2) {
            assert!(pair[0] >= pair[1], "candidates not non-increasing");
        }
    }

    #[test]
    fn test_ties_break_by_insertion_order() {
        // Equidistant from x and y; x was inserted first
        let prediction = predict(&vec![1.0, 1.0, 0.0], &unit_table()).unwrap();
        assert_eq!(prediction.candidates[0].label, "x");
        assert_eq!(prediction.candidates[1].label, "y");
        assert_eq!(
            prediction.candidates[0].similarity,
            prediction.candidates[1].similarity
        );
    }

    #[test]
    fn test_ranks_are_sequential() {
        let prediction = predict(&vec![0.5, 0.3, 0.1], &unit_table()).unwrap();
        let ranks: Vec<usize> = prediction.candidates.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_table_is_configuration_error() {
        let result = predict(&vec![1.0], &ReferenceFunctionTable::new());
        assert!(matches!(result, Err(ProteanError::EmptyReferenceTable)));
    }

    #[test]
    fn test_builtin_table_shape() {
        let table = ReferenceFunctionTable::builtin();
        assert_eq!(table.len(), 5);
        assert_eq!(
            table.labels(),
            vec![
                "enzyme",
                "membrane transport",
                "signaling",
                "dna binding",
                "structural"
            ]
        );
    }

    #[test]
    fn test_builtin_exemplar_maps_to_own_label() {
        // Embedding an exemplar and predicting against the built-in
        // table must return its own label with similarity ~1.0
        for &(label, exemplar) in BUILTIN_EXEMPLARS {
            let seq = Sequence::parse(exemplar).unwrap();
            let embedding = embed(&seq).unwrap();
            let prediction = predict(&embedding, ReferenceFunctionTable::builtin()).unwrap();
            assert_eq!(prediction.label(), label);
            assert!((prediction.confidence() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_hydrophobic_query_prefers_transport() {
        let seq = Sequence::parse("LLVVIIFFWWMMLLVVIIFFWWMM").unwrap();
        let embedding = embed(&seq).unwrap();
        let prediction = predict(&embedding, ReferenceFunctionTable::builtin()).unwrap();
        assert_eq!(prediction.label(), "membrane transport");
    }

    #[test]
    fn test_basic_query_prefers_dna_binding() {
        let seq = Sequence::parse("KRKRKRKKRRKKRRHKRKRKKRRH").unwrap();
        let embedding = embed(&seq).unwrap();
        let prediction = predict(&embedding, ReferenceFunctionTable::builtin()).unwrap();
        assert_eq!(prediction.label(), "dna binding");
    }

    #[test]
    fn test_from_spec_round_trip() {
        let spec = ReferenceTableSpec {
            functions: vec![
                protean_core::ReferenceFunctionEntry {
                    label: "a".to_string(),
                    sequence: "MKVLFW".to_string(),
                },
                protean_core::ReferenceFunctionEntry {
                    label: "b".to_string(),
                    sequence: "SSTTNNQQ".to_string(),
                },
            ],
        };

        let table = ReferenceFunctionTable::from_spec(&spec).unwrap();
        assert_eq!(table.labels(), vec!["a", "b"]);

        let query = embed(&Sequence::parse("MKVLFW").unwrap()).unwrap();
        let prediction = predict(&query, &table).unwrap();
        assert_eq!(prediction.label(), "a");
        assert!((prediction.confidence() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_spec_rejects_empty() {
        let spec = ReferenceTableSpec { functions: vec![] };
        assert!(matches!(
            ReferenceFunctionTable::from_spec(&spec),
            Err(ProteanError::EmptyReferenceTable)
        ));
    }

    #[test]
    fn test_from_spec_rejects_invalid_exemplar() {
        let spec = ReferenceTableSpec {
            functions: vec![protean_core::ReferenceFunctionEntry {
                label: "bad".to_string(),
                sequence: "MKV123".to_string(),
            }],
        };
        assert!(matches!(
            ReferenceFunctionTable::from_spec(&spec),
            Err(ProteanError::InvalidResidue { .. })
        ));
    }
}
