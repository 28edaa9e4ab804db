use serde::Serialize;

/// The profile-profile gap penalty used by the progressive assembler.
pub const DEFAULT_PROFILE_GAP_PENALTY: isize = -10;

/// A linear scoring scheme, applied uniformly to every cell of a DP matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ScoringScheme {
    /// The score for aligning two identical residues
    pub match_score: isize,
    /// The score for aligning two different residues
    pub mismatch_score: isize,
    /// The score for aligning a residue against a gap
    pub gap_penalty: isize,
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self {
            match_score: 1,
            mismatch_score: -1,
            gap_penalty: -1,
        }
    }
}

impl ScoringScheme {
    pub fn new(match_score: isize, mismatch_score: isize, gap_penalty: isize) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap_penalty,
        }
    }

    /// Score a pair of residues that are aligned against each other.
    #[inline]
    pub fn score_pair(&self, a: u8, b: u8) -> isize {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    /// Score an alignment column, where either side may be a gap.
    ///
    /// Two identical symbols always score as a match.
    #[inline]
    pub fn score_column(&self, a: u8, b: u8, gap: u8) -> isize {
        if a == b {
            self.match_score
        } else if a == gap || b == gap {
            self.gap_penalty
        } else {
            self.mismatch_score
        }
    }
}
