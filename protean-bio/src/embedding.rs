//! Fixed-length feature embeddings for function comparison

use crate::hydropathy::{HydropathyScale, KyteDoolittle};
use crate::sequence::{residue_index, Sequence};
use protean_core::{ProteanError, ProteanResult};

/// Dimensionality of every embedding: the 20-bin residue frequency
/// histogram plus two derived scalar features.
pub const EMBEDDING_DIM: usize = 22;

/// Index of the length feature within the embedding.
pub const LENGTH_FEATURE: usize = 20;

/// Index of the mean-hydropathy feature within the embedding.
pub const HYDROPATHY_FEATURE: usize = 21;

/// Sequence length at which the length feature saturates.
const LENGTH_CAP: f64 = 1000.0;

/// A fixed-length, non-negative feature vector.
pub type Embedding = Vec<f64>;

/// Embed a sequence as a normalized residue-frequency histogram plus a
/// length feature and a mean-hydropathy feature.
///
/// The histogram bins sum to 1.0; the length feature is
/// `min(len, 1000) / 1000`; the hydropathy feature maps the mean
/// Kyte-Doolittle value from [-4.5, 4.5] into [0, 1]. Every entry is
/// non-negative, which keeps cosine similarities in [0, 1]. Output
/// length is [`EMBEDDING_DIM`] regardless of sequence length.
pub fn embed(seq: &Sequence) -> ProteanResult<Embedding> {
    if seq.is_empty() {
        return Err(ProteanError::EmptySequence);
    }

    let mut values = vec![0.0; EMBEDDING_DIM];
    let scale = KyteDoolittle::new();
    let mut hydropathy_sum = 0.0;

    for &aa in seq.residues() {
        if let Some(i) = residue_index(aa) {
            values[i] += 1.0;
        }
        if let Some(v) = scale.value(aa) {
            hydropathy_sum += v;
        }
    }

    let len = seq.len() as f64;
    for bin in values.iter_mut().take(20) {
        *bin /= len;
    }

    values[LENGTH_FEATURE] = (len.min(LENGTH_CAP)) / LENGTH_CAP;
    values[HYDROPATHY_FEATURE] = (hydropathy_sum / len + 4.5) / 9.0;

    Ok(values)
}
