//! Amino-acid composition summary and molecular weight estimate

use crate::sequence::{residue_index, Sequence};
use protean_core::{ProteanError, ProteanResult};
use serde::{Deserialize, Serialize};

/// Monoisotopic-averaged residue masses in Daltons, canonical alphabet
/// order. Chain mass is the residue sum plus one water.
const RESIDUE_MASS: [f64; 20] = [
    71.04, 103.01, 115.03, 129.04, 147.07, 57.02, 137.06, 113.08, 128.09, 113.08, //
    131.04, 114.04, 97.05, 128.06, 156.10, 87.03, 101.05, 99.07, 186.08, 163.06,
];

const WATER_MASS: f64 = 18.02;

pub fn is_hydrophobic(residue: u8) -> bool {
    matches!(residue, b'V' | b'I' | b'L' | b'M' | b'F' | b'Y' | b'W')
}

pub fn is_polar(residue: u8) -> bool {
    matches!(residue, b'S' | b'T' | b'N' | b'Q')
}

pub fn is_charged(residue: u8) -> bool {
    matches!(residue, b'D' | b'E' | b'K' | b'R')
}

/// Content fractions by residue class plus an approximate molecular
/// weight. Fractions are over sequence length, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositionSummary {
    pub hydrophobic: f64,
    pub polar: f64,
    pub charged: f64,
    pub molecular_weight: f64,
}

pub fn summarize(seq: &Sequence) -> ProteanResult<CompositionSummary> {
    if seq.is_empty() {
        return Err(ProteanError::EmptySequence);
    }

    let mut hydrophobic = 0usize;
    let mut polar = 0usize;
    let mut charged = 0usize;
    let mut mass = WATER_MASS;

    for &aa in seq.residues() {
        if is_hydrophobic(aa) {
            hydrophobic += 1;
        } else if is_polar(aa) {
            polar += 1;
        } else if is_charged(aa) {
            charged += 1;
        }
        if let Some(i) = residue_index(aa) {
            mass += RESIDUE_MASS[i];
        }
    }

    let len = seq.len() as f64;
    Ok(CompositionSummary {
        hydrophobic: hydrophobic as f64 / len,
        polar: polar as f64 / len,
        charged: charged as f64 / len,
        molecular_weight: mass,
    })
}
