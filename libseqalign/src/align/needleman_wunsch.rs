use crate::align::structs::{
    select_step, trace_string, DpMatrix, GlobalAlignment, ScoreMatrix, SimpleTrace,
    SimpleTraceStep,
};
use crate::align::ScoringScheme;
use crate::structs::Sequence;

use log::{debug, trace};

/// Fill the global alignment score matrix and its direction matrix.
///
/// Row 0 and column 0 ramp down by the gap penalty. On a scoring tie, the
/// direction prefers the diagonal, then the vertical move (Up); the horizontal
/// move (Left) is taken only when neither of the others produced the score.
pub fn needleman_wunsch_matrices(
    seq_1: &Sequence,
    seq_2: &Sequence,
    scoring: &ScoringScheme,
) -> (ScoreMatrix, DpMatrix<SimpleTraceStep>) {
    let gap = scoring.gap_penalty;

    let mut scores = ScoreMatrix::new(seq_1.length, seq_2.length, 0);
    let mut directions = DpMatrix::new(seq_1.length, seq_2.length, SimpleTraceStep::Stop);

    for seq_2_idx in 1..=seq_2.length {
        scores.set(0, seq_2_idx, (seq_2_idx as isize) * gap);
        directions.set(0, seq_2_idx, SimpleTraceStep::Left);
    }

    for seq_1_idx in 1..=seq_1.length {
        let seq_1_residue = seq_1.digital_bytes[seq_1_idx];
        scores.set(seq_1_idx, 0, (seq_1_idx as isize) * gap);
        directions.set(seq_1_idx, 0, SimpleTraceStep::Up);

        for seq_2_idx in 1..=seq_2.length {
            let seq_2_residue = seq_2.digital_bytes[seq_2_idx];

            let diag_score = scores.get(seq_1_idx - 1, seq_2_idx - 1)
                + scoring.score_pair(seq_1_residue, seq_2_residue);
            let up_score = scores.get(seq_1_idx - 1, seq_2_idx) + gap;
            let left_score = scores.get(seq_1_idx, seq_2_idx - 1) + gap;

            let score = diag_score.max(up_score.max(left_score));
            scores.set(seq_1_idx, seq_2_idx, score);

            directions.set(
                seq_1_idx,
                seq_2_idx,
                select_step(
                    score,
                    &[
                        (SimpleTraceStep::Up, up_score),
                        (SimpleTraceStep::Diagonal, diag_score),
                    ],
                    SimpleTraceStep::Left,
                ),
            );
        }
    }

    (scores, directions)
}

/// Walk a direction matrix from the bottom-right cell back to (0, 0).
///
/// The returned trace is ordered from the top-left to the bottom-right.
pub fn traceback(directions: &DpMatrix<SimpleTraceStep>) -> SimpleTrace {
    let mut trace: SimpleTrace = Vec::with_capacity(directions.rows + directions.cols);
    let mut seq_1_idx = directions.rows;
    let mut seq_2_idx = directions.cols;

    loop {
        let step = directions.get(seq_1_idx, seq_2_idx);
        match step {
            SimpleTraceStep::Stop => break,
            SimpleTraceStep::Diagonal => {
                seq_1_idx -= 1;
                seq_2_idx -= 1;
            }
            SimpleTraceStep::Up => seq_1_idx -= 1,
            SimpleTraceStep::Left => seq_2_idx -= 1,
        }
        trace.push(step);
    }

    trace.reverse();

    trace
}

/// Globally align two sequences.
///
/// Both sequences must be non-empty and gap-free, which `Sequence::from_utf8`
/// guarantees; the result is undefined for a hand-built `Sequence` that isn't.
pub fn needleman_wunsch(
    seq_1: &Sequence,
    seq_2: &Sequence,
    scoring: &ScoringScheme,
) -> GlobalAlignment {
    debug!(
        "needleman-wunsch: {} x {} ({:?})",
        seq_1.length, seq_2.length, scoring
    );

    let (scores, directions) = needleman_wunsch_matrices(seq_1, seq_2, scoring);
    let trace = traceback(&directions);
    trace!("trace: {}", trace_string(&trace));

    GlobalAlignment::from_trace(trace, seq_1, seq_2, scores.last())
}
