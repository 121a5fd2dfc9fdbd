//! Secondary-structure composition from Chou-Fasman propensities

use crate::sequence::{residue_index, Sequence};
use protean_core::{ProteanError, ProteanResult};
use serde::{Deserialize, Serialize};

/// Secondary-structure conformation class of a residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Conformation {
    Helix,
    Sheet,
    Coil,
}

impl Conformation {
    /// One-letter code: H (helix), E (sheet), C (coil).
    pub fn code(&self) -> char {
        match self {
            Conformation::Helix => 'H',
            Conformation::Sheet => 'E',
            Conformation::Coil => 'C',
        }
    }
}

/// Chou-Fasman conformational propensities, indexed in canonical
/// alphabet order. Values are relative tendencies, not probabilities.
pub struct PropensityTable {
    helix: [f64; 20],
    sheet: [f64; 20],
    coil: [f64; 20],
}

impl PropensityTable {
    pub fn chou_fasman() -> Self {
        Self {
            //      A     C     D     E     F     G     H     I     K     L
            //      M     N     P     Q     R     S     T     V     W     Y
            helix: [
                1.42, 0.70, 1.01, 1.51, 1.13, 0.57, 1.00, 1.08, 1.16, 1.21, //
                1.45, 0.67, 0.57, 1.11, 0.98, 0.77, 0.83, 1.06, 1.08, 0.69,
            ],
            sheet: [
                0.83, 1.19, 0.54, 0.37, 1.38, 0.75, 0.87, 1.60, 0.74, 1.30, //
                1.05, 0.89, 0.55, 1.10, 0.93, 0.75, 1.19, 1.70, 1.37, 1.47,
            ],
            coil: [
                0.66, 1.19, 1.46, 0.74, 0.60, 1.56, 0.95, 0.47, 1.01, 0.59, //
                0.60, 1.56, 1.52, 0.98, 0.95, 1.43, 0.96, 0.50, 0.96, 1.14,
            ],
        }
    }

    /// (helix, sheet, coil) propensities for an upper-case residue.
    pub fn propensities(&self, residue: u8) -> Option<(f64, f64, f64)> {
        residue_index(residue).map(|i| (self.helix[i], self.sheet[i], self.coil[i]))
    }
}

/// Proportions of the three conformation classes. Non-negative and
/// summing to 1.0 within floating-point tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StructureComposition {
    pub helix: f64,
    pub sheet: f64,
    pub coil: f64,
}

impl StructureComposition {
    pub fn sum(&self) -> f64 {
        self.helix + self.sheet + self.coil
    }

    /// The class with the largest proportion; ties resolve
    /// helix > sheet > coil.
    pub fn dominant(&self) -> Conformation {
        if self.helix >= self.sheet && self.helix >= self.coil {
            Conformation::Helix
        } else if self.sheet >= self.coil {
            Conformation::Sheet
        } else {
            Conformation::Coil
        }
    }
}

/// Aggregate per-class propensity sums into class proportions.
///
/// Each class's summed propensity is divided by the total across all
/// three classes, so the three outputs sum to 1.0 by construction. A
/// zero total (impossible with the Chou-Fasman table) falls back to the
/// equal split instead of dividing by zero.
pub fn predict(seq: &Sequence) -> ProteanResult<StructureComposition> {
    let table = PropensityTable::chou_fasman();

    if seq.is_empty() {
        return Err(ProteanError::EmptySequence);
    }

    let mut helix = 0.0;
    let mut sheet = 0.0;
    let mut coil = 0.0;

    for &aa in seq.residues() {
        if let Some((h, s, c)) = table.propensities(aa) {
            helix += h;
            sheet += s;
            coil += c;
        }
    }

    let total = helix + sheet + coil;
    if total == 0.0 {
        return Ok(StructureComposition {
            helix: 1.0 / 3.0,
            sheet: 1.0 / 3.0,
            coil: 1.0 / 3.0,
        });
    }

    Ok(StructureComposition {
        helix: helix / total,
        sheet: sheet / total,
        coil: coil / total,
    })
}

/// Per-position dominant conformation from window-averaged propensities.
///
/// Each position is scored over a centered window (truncated at the
/// sequence ends); the class with the highest averaged propensity wins,
/// with ties resolving helix > sheet > coil.
pub fn conformation_track(seq: &Sequence, window: usize) -> ProteanResult<Vec<Conformation>> {
    let table = PropensityTable::chou_fasman();

    if seq.is_empty() {
        return Err(ProteanError::EmptySequence);
    }

    let window = window.max(1) | 1;
    let half = window / 2;
    let residues = seq.residues();
    let n = residues.len();

    let mut track = Vec::with_capacity(n);
    for i in 0..n {
        let lo = i.saturating_sub(half);
        let hi = (i + half + 1).min(n);

        let mut helix = 0.0;
        let mut sheet = 0.0;
        let mut coil = 0.0;
        for &aa in &residues[lo..hi] {
            if let Some((h, s, c)) = table.propensities(aa) {
                helix += h;
                sheet += s;
                coil += c;
            }
        }

        track.push(if helix >= sheet && helix >= coil {
            Conformation::Helix
        } else if sheet >= coil {
            Conformation::Sheet
        } else {
            Conformation::Coil
        });
    }

    Ok(track)
}
