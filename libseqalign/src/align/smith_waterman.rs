use crate::align::structs::{
    select_step, DpMatrix, LocalAlignment, LocalBounds, LocalTraceStep, ScoreMatrix,
};
use crate::align::ScoringScheme;
use crate::alphabet::GAP;
use crate::structs::Sequence;

use log::debug;

/// The filled local alignment matrices and the cell the traceback starts from.
pub struct SmithWatermanMatrices {
    pub scores: ScoreMatrix,
    pub directions: DpMatrix<LocalTraceStep>,
    pub max_score: isize,
    pub max_seq_1_idx: usize,
    pub max_seq_2_idx: usize,
}

/// Fill the local alignment score matrix and its direction matrix.
///
/// The boundary row and column are zero, and every cell is floored at zero.
/// The maximum is tracked with `>=` over a row-major scan, so among tied
/// cells the last one scanned is the traceback start.
pub fn smith_waterman_matrices(
    seq_1: &Sequence,
    seq_2: &Sequence,
    scoring: &ScoringScheme,
) -> SmithWatermanMatrices {
    let gap = scoring.gap_penalty;

    let mut scores = ScoreMatrix::new(seq_1.length, seq_2.length, 0);
    let mut directions = DpMatrix::new(seq_1.length, seq_2.length, LocalTraceStep::Stop);

    let mut max_score: isize = 0;
    let mut max_seq_1_idx: usize = 0;
    let mut max_seq_2_idx: usize = 0;

    for seq_1_idx in 1..=seq_1.length {
        let seq_1_residue = seq_1.digital_bytes[seq_1_idx];

        for seq_2_idx in 1..=seq_2.length {
            let seq_2_residue = seq_2.digital_bytes[seq_2_idx];

            let diag_score = scores.get(seq_1_idx - 1, seq_2_idx - 1)
                + scoring.score_pair(seq_1_residue, seq_2_residue);
            let left_score = scores.get(seq_1_idx - 1, seq_2_idx) + gap;
            let up_score = scores.get(seq_1_idx, seq_2_idx - 1) + gap;

            let score = 0.max(left_score.max(up_score.max(diag_score)));
            scores.set(seq_1_idx, seq_2_idx, score);

            // later matches overwrite earlier ones:
            // diagonal beats both gap moves, and up beats left
            directions.set(
                seq_1_idx,
                seq_2_idx,
                select_step(
                    score,
                    &[
                        (LocalTraceStep::GapInSeq2, left_score),
                        (LocalTraceStep::GapInSeq1, up_score),
                        (LocalTraceStep::Diagonal, diag_score),
                    ],
                    LocalTraceStep::Stop,
                ),
            );

            if score >= max_score {
                max_score = score;
                max_seq_1_idx = seq_1_idx;
                max_seq_2_idx = seq_2_idx;
            }
        }
    }

    SmithWatermanMatrices {
        scores,
        directions,
        max_score,
        max_seq_1_idx,
        max_seq_2_idx,
    }
}

/// Locally align two sequences.
///
/// Both sequences must be non-empty and gap-free, which `Sequence::from_utf8`
/// guarantees. If no positive-scoring region exists, the traceback may be
/// empty; the returned alignment then has zero length and zero identity.
pub fn smith_waterman(
    seq_1: &Sequence,
    seq_2: &Sequence,
    scoring: &ScoringScheme,
) -> LocalAlignment {
    debug!(
        "smith-waterman: {} x {} ({:?})",
        seq_1.length, seq_2.length, scoring
    );

    let matrices = smith_waterman_matrices(seq_1, seq_2, scoring);

    let mut seq_1_bytes: Vec<u8> = vec![];
    let mut seq_2_bytes: Vec<u8> = vec![];

    let mut seq_1_idx = matrices.max_seq_1_idx;
    let mut seq_2_idx = matrices.max_seq_2_idx;

    // every step moves toward the boundary, which is all Stop cells
    loop {
        match matrices.directions.get(seq_1_idx, seq_2_idx) {
            LocalTraceStep::Stop => break,
            LocalTraceStep::Diagonal => {
                seq_1_bytes.push(seq_1.utf8_bytes[seq_1_idx]);
                seq_2_bytes.push(seq_2.utf8_bytes[seq_2_idx]);
                seq_1_idx -= 1;
                seq_2_idx -= 1;
            }
            LocalTraceStep::GapInSeq1 => {
                seq_1_bytes.push(GAP);
                seq_2_bytes.push(seq_2.utf8_bytes[seq_2_idx]);
                seq_2_idx -= 1;
            }
            LocalTraceStep::GapInSeq2 => {
                seq_1_bytes.push(seq_1.utf8_bytes[seq_1_idx]);
                seq_2_bytes.push(GAP);
                seq_1_idx -= 1;
            }
        }
    }

    seq_1_bytes.reverse();
    seq_2_bytes.reverse();

    let bounds = LocalBounds {
        seq_1_start: seq_1_idx + 1,
        seq_1_end: matrices.max_seq_1_idx,
        seq_2_start: seq_2_idx + 1,
        seq_2_end: matrices.max_seq_2_idx,
    };

    LocalAlignment::from_aligned_bytes(
        &seq_1_bytes,
        &seq_2_bytes,
        scoring,
        matrices.max_score,
        bounds,
    )
    .with_names(seq_1, seq_2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::strip_gaps;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    fn align(seq_1: &str, seq_2: &str, m: isize, x: isize, g: isize) -> LocalAlignment {
        let seq_1 = Sequence::from_utf8(seq_1.as_bytes()).unwrap();
        let seq_2 = Sequence::from_utf8(seq_2.as_bytes()).unwrap();
        smith_waterman(&seq_1, &seq_2, &ScoringScheme::new(m, x, g))
    }

    #[test]
    fn test_identical_sequences() {
        let ali = align("ACGTAT", "ACGTAT", 10, -5, -5);
        assert_eq!(ali.tuple(), (100, 60, "ACGTAT", "ACGTAT", "ACGTAT"));
        assert_eq!((ali.seq_1_start, ali.seq_1_end), (1, 6));
        assert_eq!((ali.seq_2_start, ali.seq_2_end), (1, 6));
    }

    #[test]
    fn test_different_sequences() {
        let ali = align("ACGTAT", "AGTGCT", 10, -5, -5);
        assert_eq!(ali.tuple(), (57, 25, "ACGT-AT", "A GT  T", "A-GTGCT"));
        assert_eq!(ali.matrix_score, 25);
    }

    #[test]
    fn test_unequal_length_sequences() {
        let ali = align("ACGTAT", "ACG", 10, -5, -5);
        assert_eq!(ali.tuple(), (100, 30, "ACG", "ACG", "ACG"));
    }

    #[test]
    fn test_different_gap_penalties() {
        let ali = align("ACGTAT", "AGTGCT", 10, -5, -3);
        assert_eq!(ali.tuple(), (57, 29, "ACGT-AT", "A GT  T", "A-GTGCT"));
    }

    #[test]
    fn test_no_positive_region() {
        let ali = align("AAAA", "CCCC", 10, -5, -5);
        assert!(ali.is_empty());
        assert_eq!(ali.tuple(), (0, 0, "", "", ""));
        assert_eq!(ali.matrix_score, 0);
        // the last scanned cell is the start point
        assert_eq!((ali.seq_1_end, ali.seq_2_end), (4, 4));
        assert_eq!((ali.seq_1_start, ali.seq_2_start), (5, 5));
    }

    #[test]
    fn test_later_maximum_wins() {
        // two equally good single-residue hits: the later one in
        // row-major order is reported
        let ali = align("AC", "CA", 10, -50, -50);
        assert_eq!(ali.tuple(), (100, 10, "C", "C", "C"));
        assert_eq!((ali.seq_1_start, ali.seq_2_start), (2, 1));
    }

    #[test]
    fn test_local_region_coordinates() {
        let ali = align("TTTTACGTTTTT", "GGACGGG", 10, -5, -5);
        assert_eq!(ali.seq_1_string, "ACG");
        assert_eq!((ali.seq_1_start, ali.seq_1_end), (5, 7));
        assert_eq!((ali.seq_2_start, ali.seq_2_end), (3, 5));
    }

    #[test]
    fn test_random_properties() {
        let mut rng = Pcg64::seed_from_u64(4321);
        let scoring = ScoringScheme::new(10, -5, -5);

        for _ in 0..50 {
            let len_1 = rng.gen_range(1..30);
            let len_2 = rng.gen_range(1..30);
            let seq_1 = Sequence::random(len_1, &mut rng).unwrap();
            let seq_2 = Sequence::random(len_2, &mut rng).unwrap();

            let ali = smith_waterman(&seq_1, &seq_2, &scoring);

            assert!(ali.score >= 0);
            assert_eq!(ali.score, ali.matrix_score);
            assert_eq!(ali.seq_1_string.len(), ali.seq_2_string.len());
            assert_eq!(ali.annotation_string.len(), ali.length);
            assert!(!ali
                .seq_1_string
                .bytes()
                .zip(ali.seq_2_string.bytes())
                .any(|(a, b)| a == GAP && b == GAP));

            // the aligned region strips back to the sequence slice it covers
            let seq_1_string = seq_1.residue_string();
            let seq_2_string = seq_2.residue_string();
            let seq_1_region = &seq_1_string[ali.seq_1_start - 1..ali.seq_1_end];
            let seq_2_region = &seq_2_string[ali.seq_2_start - 1..ali.seq_2_end];
            assert_eq!(strip_gaps(&ali.seq_1_string), seq_1_region);
            assert_eq!(strip_gaps(&ali.seq_2_string), seq_2_region);

            let identity = smith_waterman(&seq_1, &seq_1, &scoring);
            assert_eq!(identity.percent_identity, 100);
            assert_eq!(identity.seq_1_string, seq_1.residue_string());
            assert_eq!(identity.seq_2_string, seq_1.residue_string());
        }
    }
}
