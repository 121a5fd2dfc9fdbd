//! Hydropathy profiling on the Kyte-Doolittle scale

use crate::sequence::{residue_index, Sequence};
use protean_core::{ProteanError, ProteanResult};
use serde::{Deserialize, Serialize};

/// A fixed per-residue hydropathy scale.
///
/// The seam exists so tests can substitute a synthetic scale; production
/// code uses [`KyteDoolittle`].
pub trait HydropathyScale {
    /// Hydropathy value for an upper-case canonical residue.
    fn value(&self, residue: u8) -> Option<f64>;
}

/// The Kyte-Doolittle hydropathy index, spanning -4.5 (Arg) to +4.5 (Ile).
/// Values indexed in canonical alphabet order.
pub struct KyteDoolittle {
    values: [f64; 20],
}

impl KyteDoolittle {
    pub fn new() -> Self {
        Self {
            //       A     C     D     E     F     G     H     I     K     L
            //       M     N     P     Q     R     S     T     V     W     Y
            values: [
                1.8, 2.5, -3.5, -3.5, 2.8, -0.4, -3.2, 4.5, -3.9, 3.8, //
                1.9, -3.5, -1.6, -3.5, -4.5, -0.8, -0.7, 4.2, -0.9, -1.3,
            ],
        }
    }
}

impl Default for KyteDoolittle {
    fn default() -> Self {
        Self::new()
    }
}

impl HydropathyScale for KyteDoolittle {
    fn value(&self, residue: u8) -> Option<f64> {
        residue_index(residue).map(|i| self.values[i])
    }
}

/// Per-residue hydropathy scores plus the arithmetic-mean aggregate.
/// Invariant: `per_residue.len()` equals the analyzed sequence length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydropathyProfile {
    pub per_residue: Vec<f64>,
    pub mean: f64,
}

impl HydropathyProfile {
    /// Sliding-window mean of the per-residue profile, for plotting.
    ///
    /// The window is centered; positions near the ends use the truncated
    /// window. Even window sizes are widened to the next odd size, and a
    /// window of zero is treated as one.
    pub fn smoothed(&self, window: usize) -> Vec<f64> {
        let window = window.max(1) | 1;
        let half = window / 2;
        let n = self.per_residue.len();

        (0..n)
            .map(|i| {
                let lo = i.saturating_sub(half);
                let hi = (i + half + 1).min(n);
                let slice = &self.per_residue[lo..hi];
                slice.iter().sum::<f64>() / slice.len() as f64
            })
            .collect()
    }
}

/// Hydropathy analyzer parameterized over the scale in use.
pub struct HydropathyAnalyzer<S: HydropathyScale = KyteDoolittle> {
    scale: S,
}

impl HydropathyAnalyzer {
    pub fn new() -> Self {
        Self {
            scale: KyteDoolittle::new(),
        }
    }
}

impl Default for HydropathyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: HydropathyScale> HydropathyAnalyzer<S> {
    pub fn with_scale(scale: S) -> Self {
        Self { scale }
    }

    /// Score every residue and aggregate to the arithmetic mean.
    pub fn analyze(&self, seq: &Sequence) -> ProteanResult<HydropathyProfile> {
        if seq.is_empty() {
            // Unreachable for sequences built through Sequence::parse
            return Err(ProteanError::EmptySequence);
        }

        let per_residue: Vec<f64> = seq
            .residues()
            .iter()
            .filter_map(|&aa| self.scale.value(aa))
            .collect();

        debug_assert_eq!(per_residue.len(), seq.len());

        let mean = per_residue.iter().sum::<f64>() / per_residue.len() as f64;

        Ok(HydropathyProfile { per_residue, mean })
    }
}
