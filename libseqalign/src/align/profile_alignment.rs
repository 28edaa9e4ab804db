use crate::align::structs::{select_step, DpMatrix, ProfileTraceStep, ScoreMatrix};
use crate::alphabet::GAP;
use crate::structs::Profile;

use anyhow::{Context, Result};
use log::debug;

/// The filled profile-profile score matrix and its direction matrix.
pub struct ProfileDpMatrices {
    pub scores: ScoreMatrix,
    pub directions: DpMatrix<ProfileTraceStep>,
}

/// Globally align two profiles.
///
/// This is Needleman-Wunsch with the match score of a cell replaced by
/// `Profile::column_pair_score`. On a scoring tie, the diagonal beats the
/// horizontal move, which beats the vertical move.
///
/// The boundary row holds Horizontal moves and the boundary column holds
/// Vertical moves, so a traceback always reaches (0, 0).
pub fn profile_needleman_wunsch(
    profile_1: &Profile,
    profile_2: &Profile,
    gap_penalty: isize,
) -> ProfileDpMatrices {
    let rows = profile_1.width();
    let cols = profile_2.width();

    debug!(
        "profile needleman-wunsch: {} x {} columns, {} x {} sequences",
        rows,
        cols,
        profile_1.num_sequences(),
        profile_2.num_sequences()
    );

    let mut scores = ScoreMatrix::new(rows, cols, 0);
    let mut directions = DpMatrix::new(rows, cols, ProfileTraceStep::Stop);

    for row_idx in 1..=rows {
        scores.set(row_idx, 0, gap_penalty * row_idx as isize);
        directions.set(row_idx, 0, ProfileTraceStep::Vertical);
    }

    for col_idx in 1..=cols {
        scores.set(0, col_idx, gap_penalty * col_idx as isize);
        directions.set(0, col_idx, ProfileTraceStep::Horizontal);
    }

    for row_idx in 1..=rows {
        for col_idx in 1..=cols {
            let match_score = profile_1.column_pair_score(row_idx - 1, profile_2, col_idx - 1);

            let diag_score = scores.get(row_idx - 1, col_idx - 1) + match_score;
            let vertical_score = scores.get(row_idx - 1, col_idx) + gap_penalty;
            let horizontal_score = scores.get(row_idx, col_idx - 1) + gap_penalty;

            let score = diag_score.max(horizontal_score.max(vertical_score));
            scores.set(row_idx, col_idx, score);

            directions.set(
                row_idx,
                col_idx,
                select_step(
                    score,
                    &[
                        (ProfileTraceStep::Horizontal, horizontal_score),
                        (ProfileTraceStep::Diagonal, diag_score),
                    ],
                    ProfileTraceStep::Vertical,
                ),
            );
        }
    }

    ProfileDpMatrices { scores, directions }
}

/// Insert gaps into every member of both blocks, following a profile-profile direction matrix.
///
/// The blocks must be the ones the two profiles were built from: every row of
/// `block_1` has one byte per matrix row, and every row of `block_2` has one
/// byte per matrix column.
pub fn add_gaps<T: AsRef<[u8]>, U: AsRef<[u8]>>(
    directions: &DpMatrix<ProfileTraceStep>,
    block_1: &[T],
    block_2: &[U],
) -> (Vec<Vec<u8>>, Vec<Vec<u8>>) {
    let mut gapped_1: Vec<Vec<u8>> = vec![vec![]; block_1.len()];
    let mut gapped_2: Vec<Vec<u8>> = vec![vec![]; block_2.len()];

    let mut row_idx = directions.rows;
    let mut col_idx = directions.cols;

    // the rows are built back to front, then flipped
    loop {
        match directions.get(row_idx, col_idx) {
            ProfileTraceStep::Stop => break,
            ProfileTraceStep::Diagonal => {
                gapped_1
                    .iter_mut()
                    .zip(block_1)
                    .for_each(|(gapped, row)| gapped.push(row.as_ref()[row_idx - 1]));
                gapped_2
                    .iter_mut()
                    .zip(block_2)
                    .for_each(|(gapped, row)| gapped.push(row.as_ref()[col_idx - 1]));
                row_idx -= 1;
                col_idx -= 1;
            }
            ProfileTraceStep::Horizontal => {
                gapped_1.iter_mut().for_each(|gapped| gapped.push(GAP));
                gapped_2
                    .iter_mut()
                    .zip(block_2)
                    .for_each(|(gapped, row)| gapped.push(row.as_ref()[col_idx - 1]));
                col_idx -= 1;
            }
            ProfileTraceStep::Vertical => {
                gapped_1
                    .iter_mut()
                    .zip(block_1)
                    .for_each(|(gapped, row)| gapped.push(row.as_ref()[row_idx - 1]));
                gapped_2.iter_mut().for_each(|gapped| gapped.push(GAP));
                row_idx -= 1;
            }
        }
    }

    gapped_1.iter_mut().for_each(|gapped| gapped.reverse());
    gapped_2.iter_mut().for_each(|gapped| gapped.reverse());

    (gapped_1, gapped_2)
}

/// Align a block of n mutually aligned sequences with a block of m mutually aligned sequences.
///
/// Returns the two blocks with gaps inserted so that all n + m rows share one width.
pub fn align_blocks<T: AsRef<[u8]>, U: AsRef<[u8]>>(
    block_1: &[T],
    block_2: &[U],
    gap_penalty: isize,
) -> Result<(Vec<Vec<u8>>, Vec<Vec<u8>>)> {
    let profile_1 = Profile::from_block(block_1).context("failed to build the first profile")?;
    let profile_2 = Profile::from_block(block_2).context("failed to build the second profile")?;

    let matrices = profile_needleman_wunsch(&profile_1, &profile_2, gap_penalty);

    Ok(add_gaps(&matrices.directions, block_1, block_2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::DEFAULT_PROFILE_GAP_PENALTY;

    fn strings(block: Vec<Vec<u8>>) -> Vec<String> {
        block
            .into_iter()
            .map(|row| String::from_utf8(row).unwrap())
            .collect()
    }

    #[test]
    fn test_boundaries() -> Result<()> {
        let p1 = Profile::from_block(&["ACG"])?;
        let p2 = Profile::from_block(&["AC"])?;
        let matrices = profile_needleman_wunsch(&p1, &p2, -10);

        (0..=3).for_each(|i| assert_eq!(matrices.scores.get(i, 0), -10 * i as isize));
        (0..=2).for_each(|j| assert_eq!(matrices.scores.get(0, j), -10 * j as isize));
        assert_eq!(matrices.directions.get(0, 0), ProfileTraceStep::Stop);
        assert_eq!(matrices.directions.get(3, 0), ProfileTraceStep::Vertical);
        assert_eq!(matrices.directions.get(0, 2), ProfileTraceStep::Horizontal);
        Ok(())
    }

    #[test]
    fn test_identical_profiles_align_on_the_diagonal() -> Result<()> {
        let block = ["ACGT", "ACGA"];
        let (gapped_1, gapped_2) = align_blocks(&block, &block, DEFAULT_PROFILE_GAP_PENALTY)?;
        assert_eq!(strings(gapped_1), vec!["ACGT", "ACGA"]);
        assert_eq!(strings(gapped_2), vec!["ACGT", "ACGA"]);
        Ok(())
    }

    #[test]
    fn test_diagonal_beats_horizontal_beats_vertical() -> Result<()> {
        // A vs C scores -2 on the diagonal; with a gap penalty of -1
        // every move into (1, 1) scores -2
        let p1 = Profile::from_block(&["A"])?;
        let p2 = Profile::from_block(&["C"])?;
        let matrices = profile_needleman_wunsch(&p1, &p2, -1);
        assert_eq!(matrices.scores.get(1, 1), -2);
        assert_eq!(matrices.directions.get(1, 1), ProfileTraceStep::Diagonal);

        // with a large mismatch, only the gap moves tie
        let p1 = Profile::from_block(&["A", "A", "A"])?;
        let p2 = Profile::from_block(&["C", "C", "C"])?;
        let matrices = profile_needleman_wunsch(&p1, &p2, -1);
        assert_eq!(matrices.scores.get(1, 1), -2);
        assert_eq!(matrices.directions.get(1, 1), ProfileTraceStep::Horizontal);
        Ok(())
    }

    #[test]
    fn test_leading_residues_are_kept() -> Result<()> {
        // the traceback reaches column 0 with residues of the first block
        // left over; they are walked down the boundary column
        let (gapped_1, gapped_2) = align_blocks(&["GGGAC"], &["AC"], -10)?;
        assert_eq!(strings(gapped_1), vec!["GGGAC"]);
        assert_eq!(strings(gapped_2), vec!["---AC"]);

        let (gapped_1, gapped_2) = align_blocks(&["AC"], &["GGGAC"], -10)?;
        assert_eq!(strings(gapped_1), vec!["---AC"]);
        assert_eq!(strings(gapped_2), vec!["GGGAC"]);
        Ok(())
    }

    #[test]
    fn test_multi_member_blocks_share_gaps() -> Result<()> {
        let block_1 = ["ACGTAT", "ACGTTT"];
        let block_2 = ["ACGAT"];
        let (gapped_1, gapped_2) = align_blocks(&block_1, &block_2, -10)?;
        let gapped_1 = strings(gapped_1);
        let gapped_2 = strings(gapped_2);

        assert_eq!(gapped_1, vec!["ACGTAT", "ACGTTT"]);
        assert_eq!(gapped_2, vec!["ACG-AT"]);
        Ok(())
    }

    #[test]
    fn test_ragged_block_is_rejected() {
        let result = align_blocks(&["ACGT", "AC"], &["ACGT"], -10);
        assert!(result.is_err());
    }
}
