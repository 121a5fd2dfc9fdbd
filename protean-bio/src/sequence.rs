//! Validated protein sequences over the canonical amino-acid alphabet

use protean_core::{ProteanError, ProteanResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The 20 canonical amino acids, in alphabetical one-letter order.
/// Every fixed lookup table in this crate is indexed in this order.
pub const CANONICAL_ALPHABET: [u8; 20] = *b"ACDEFGHIKLMNPQRSTVWY";

/// Map an upper-case residue code to its index in [`CANONICAL_ALPHABET`].
pub fn residue_index(residue: u8) -> Option<usize> {
    match residue {
        b'A' => Some(0),
        b'C' => Some(1),
        b'D' => Some(2),
        b'E' => Some(3),
        b'F' => Some(4),
        b'G' => Some(5),
        b'H' => Some(6),
        b'I' => Some(7),
        b'K' => Some(8),
        b'L' => Some(9),
        b'M' => Some(10),
        b'N' => Some(11),
        b'P' => Some(12),
        b'Q' => Some(13),
        b'R' => Some(14),
        b'S' => Some(15),
        b'T' => Some(16),
        b'V' => Some(17),
        b'W' => Some(18),
        b'Y' => Some(19),
        _ => None,
    }
}

/// A validated, immutable protein sequence.
///
/// Constructed through [`Sequence::parse`], which normalizes raw input
/// (whitespace stripped, upper-cased) and rejects anything outside the
/// canonical alphabet. Once built, the residues never change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Sequence {
    residues: Vec<u8>,
}

impl Sequence {
    /// Validate raw input into a `Sequence`.
    ///
    /// Whitespace is stripped and letters are upper-cased before
    /// validation. The reported position of an invalid character is its
    /// index in the normalized sequence.
    pub fn parse(raw: &str) -> ProteanResult<Self> {
        let mut residues = Vec::with_capacity(raw.len());
        for ch in raw.chars().filter(|c| !c.is_whitespace()) {
            let upper = ch.to_ascii_uppercase();
            if !upper.is_ascii() || residue_index(upper as u8).is_none() {
                return Err(ProteanError::InvalidResidue {
                    position: residues.len(),
                    residue: ch,
                });
            }
            residues.push(upper as u8);
        }

        if residues.is_empty() {
            return Err(ProteanError::EmptyInput);
        }

        Ok(Self { residues })
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn residues(&self) -> &[u8] {
        &self.residues
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.residues))
    }
}

impl From<Sequence> for String {
    fn from(seq: Sequence) -> Self {
        String::from_utf8_lossy(&seq.residues).into_owned()
    }
}

impl TryFrom<String> for Sequence {
    type Error = ProteanError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Sequence::parse(&raw)
    }
}
