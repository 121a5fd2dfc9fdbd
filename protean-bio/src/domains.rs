//! Functional-region scanning from motifs and window properties

use crate::composition::{is_charged, is_hydrophobic, summarize};
use crate::sequence::Sequence;
use protean_core::{ProteanError, ProteanResult};
use serde::{Deserialize, Serialize};

/// A named region of the sequence. `start`/`end` are 1-based and
/// inclusive, the convention biologists expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainHit {
    pub name: String,
    pub start: usize,
    pub end: usize,
    /// Confidence on a 0-100 scale.
    pub score: f64,
    pub description: String,
}

struct Motif {
    name: &'static str,
    pattern: &'static [u8],
    description: &'static str,
}

const MOTIFS: &[Motif] = &[
    Motif {
        name: "Insulin/IGF/Relaxin",
        pattern: b"FVNQHLCGSHLVEAL",
        description: "Hormone involved in glucose regulation",
    },
    Motif {
        name: "DNA-binding motif",
        pattern: b"KKRRH",
        description: "Basic cluster contacting the phosphate backbone",
    },
    Motif {
        name: "Membrane-spanning region",
        pattern: b"LLLLLLFFFF",
        description: "Uninterrupted hydrophobic stretch",
    },
];

const MOTIF_SCORE: f64 = 95.0;

/// Minimum hydrophobic residues in a window to flag a membrane span.
const TRANSMEMBRANE_MIN: usize = 7;

/// Minimum charged residues in a window to flag a binding region.
const CHARGED_MIN: usize = 5;

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Scan for known motifs and property-dense windows.
///
/// Exact motif matches score [`MOTIF_SCORE`]. Sliding windows of size
/// `window` are flagged as transmembrane-like or charged/binding-like
/// when they clear the per-window thresholds; overlapping windows of
/// the same kind merge into one region scored by the densest window.
/// When nothing is found the whole sequence is reported once, labeled
/// by its dominant composition class.
pub fn scan(seq: &Sequence, window: usize) -> ProteanResult<Vec<DomainHit>> {
    if seq.is_empty() {
        return Err(ProteanError::EmptySequence);
    }

    let residues = seq.residues();
    let mut hits = Vec::new();

    for motif in MOTIFS {
        if let Some(start) = find_subslice(residues, motif.pattern) {
            hits.push(DomainHit {
                name: motif.name.to_string(),
                start: start + 1,
                end: start + motif.pattern.len(),
                score: MOTIF_SCORE,
                description: motif.description.to_string(),
            });
        }
    }

    let window = window.max(1);
    if residues.len() >= window {
        hits.extend(window_regions(
            residues,
            window,
            TRANSMEMBRANE_MIN,
            is_hydrophobic,
            "Transmembrane domain",
            "Potential membrane-spanning region",
        ));
        hits.extend(window_regions(
            residues,
            window,
            CHARGED_MIN,
            is_charged,
            "Charged domain",
            "Potential binding or interaction site",
        ));
    }

    if hits.is_empty() {
        hits.push(fallback_region(seq)?);
    }

    Ok(hits)
}

/// Merge qualifying windows of one kind into contiguous regions.
fn window_regions(
    residues: &[u8],
    window: usize,
    threshold: usize,
    class: fn(u8) -> bool,
    name: &str,
    description: &str,
) -> Vec<DomainHit> {
    let mut regions = Vec::new();
    // (start, end) as 0-based inclusive, plus the densest window fraction
    let mut current: Option<(usize, usize, f64)> = None;

    for i in 0..=(residues.len() - window) {
        let count = residues[i..i + window].iter().filter(|&&aa| class(aa)).count();
        if count < threshold {
            continue;
        }
        let fraction = count as f64 / window as f64;
        let end = i + window - 1;

        current = match current {
            Some((start, prev_end, best)) if i <= prev_end + 1 => {
                Some((start, end, best.max(fraction)))
            }
            Some((start, prev_end, best)) => {
                regions.push(make_region(name, description, start, prev_end, best));
                Some((i, end, fraction))
            }
            None => Some((i, end, fraction)),
        };
    }

    if let Some((start, end, best)) = current {
        regions.push(make_region(name, description, start, end, best));
    }

    regions
}

fn make_region(name: &str, description: &str, start: usize, end: usize, best: f64) -> DomainHit {
    DomainHit {
        name: name.to_string(),
        start: start + 1,
        end: end + 1,
        score: best * 100.0,
        description: description.to_string(),
    }
}

/// Whole-sequence region labeled by the dominant composition class.
fn fallback_region(seq: &Sequence) -> ProteanResult<DomainHit> {
    let summary = summarize(seq)?;

    let (name, score, description) = if summary.hydrophobic > 0.4 {
        (
            "Hydrophobic region",
            summary.hydrophobic * 100.0,
            "Region rich in hydrophobic amino acids",
        )
    } else if summary.charged > 0.3 {
        (
            "Charged region",
            summary.charged * 100.0,
            "Region rich in charged amino acids",
        )
    } else {
        (
            "Mixed region",
            50.0,
            "Region with mixed amino acid properties",
        )
    };

    Ok(DomainHit {
        name: name.to_string(),
        start: 1,
        end: seq.len(),
        score,
        description: description.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motif_match_reports_position() {
        let seq = Sequence::parse("GGGGFVNQHLCGSHLVEALGGGG").unwrap();
        let hits = scan(&seq, 10).unwrap();

        let insulin = hits
            .iter()
            .find(|h| h.name == "Insulin/IGF/Relaxin")
            .expect("insulin motif found");
        assert_eq!(insulin.start, 5);
        assert_eq!(insulin.end, 19);
        assert_eq!(insulin.score, MOTIF_SCORE);
    }

    #[test]
    fn test_transmembrane_windows_merge() {
        // 20 hydrophobic residues flanked by polar tails: the
        // qualifying windows overlap and must collapse to one region
        let seq = Sequence::parse("SSSSLLLLLVVVVVIIIIIFWSSSS").unwrap();
        let hits = scan(&seq, 10).unwrap();

        let spans: Vec<&DomainHit> = hits
            .iter()
            .filter(|h| h.name == "Transmembrane domain")
            .collect();
        assert_eq!(spans.len(), 1);
        let span = spans[0];
        assert!(span.start >= 1 && span.end <= seq.len());
        assert!(span.end > span.start);
        assert!(span.score >= 70.0);
    }

    #[test]
    fn test_charged_region_detected() {
        let seq = Sequence::parse("GGGGGDEKRDEKRDEKRGGGGG").unwrap();
        let hits = scan(&seq, 10).unwrap();
        assert!(hits.iter().any(|h| h.name == "Charged domain"));
    }

    #[test]
    fn test_fallback_hydrophobic() {
        // Half hydrophobic overall, but alternation keeps every
        // 10-residue window below the 7-residue threshold
        let seq = Sequence::parse("VAVAVAVAVAVA").unwrap();
        let hits = scan(&seq, 10).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Hydrophobic region");
        assert_eq!(hits[0].start, 1);
        assert_eq!(hits[0].end, seq.len());
    }

    #[test]
    fn test_fallback_mixed() {
        let seq = Sequence::parse("GAGAGAGAGAGA").unwrap();
        let hits = scan(&seq, 10).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Mixed region");
        assert_eq!(hits[0].score, 50.0);
    }

    #[test]
    fn test_short_sequence_skips_window_scan() {
        // Shorter than the window: only the fallback applies
        let seq = Sequence::parse("MKV").unwrap();
        let hits = scan(&seq, 10).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].end, 3);
    }

    #[test]
    fn test_bounds_are_one_based_inclusive() {
        let seq = Sequence::parse("LLLLLLFFFFGGGGGGGGGG").unwrap();
        let hits = scan(&seq, 10).unwrap();

        let motif = hits
            .iter()
            .find(|h| h.name == "Membrane-spanning region")
            .expect("poly-LF motif found");
        assert_eq!(motif.start, 1);
        assert_eq!(motif.end, 10);

        for hit in &hits {
            assert!(hit.start >= 1);
            assert!(hit.end <= seq.len());
            assert!(hit.start <= hit.end);
        }
    }

    #[test]
    fn test_find_subslice() {
        assert_eq!(find_subslice(b"ABCDEF", b"CDE"), Some(2));
        assert_eq!(find_subslice(b"ABCDEF", b"XYZ"), None);
        assert_eq!(find_subslice(b"AB", b"ABC"), None);
    }
}
