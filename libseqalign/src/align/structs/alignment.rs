use std::fmt::{Display, Formatter};

use crate::align::ScoringScheme;
use crate::alphabet::{GAP, UTF8_DOT, UTF8_PIPE, UTF8_SPACE};
use crate::structs::Sequence;
use serde::Serialize;

use super::trace::{SimpleTrace, SimpleTraceStep};

/// The result of a global (Needleman-Wunsch) alignment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GlobalAlignment {
    /// The score in the bottom-right cell of the DP matrix
    pub score: isize,
    /// The number of columns in the alignment
    pub length: usize,
    /// The name of the first sequence
    pub seq_1_name: String,
    /// The name of the second sequence
    pub seq_2_name: String,
    /// The gapped first sequence
    pub seq_1_string: String,
    /// `|` for a match, `.` for a mismatch, and a space for a gap column
    pub middle_string: String,
    /// The gapped second sequence
    pub seq_2_string: String,
    #[serde(skip)]
    pub trace: SimpleTrace,
}

impl GlobalAlignment {
    /// Render a traceback (ordered from the top-left to the bottom-right) into display strings.
    pub fn from_trace(
        trace: SimpleTrace,
        seq_1: &Sequence,
        seq_2: &Sequence,
        score: isize,
    ) -> Self {
        let mut seq_1_bytes: Vec<u8> = Vec::with_capacity(trace.len());
        let mut seq_2_bytes: Vec<u8> = Vec::with_capacity(trace.len());
        let mut middle_bytes: Vec<u8> = Vec::with_capacity(trace.len());

        let mut seq_1_idx = 0;
        let mut seq_2_idx = 0;

        for step in trace.iter() {
            match step {
                SimpleTraceStep::Diagonal => {
                    seq_1_idx += 1;
                    seq_2_idx += 1;
                    seq_1_bytes.push(seq_1.utf8_bytes[seq_1_idx]);
                    seq_2_bytes.push(seq_2.utf8_bytes[seq_2_idx]);
                    if seq_1.digital_bytes[seq_1_idx] == seq_2.digital_bytes[seq_2_idx] {
                        middle_bytes.push(UTF8_PIPE);
                    } else {
                        middle_bytes.push(UTF8_DOT);
                    }
                }
                SimpleTraceStep::Up => {
                    seq_1_idx += 1;
                    seq_1_bytes.push(seq_1.utf8_bytes[seq_1_idx]);
                    seq_2_bytes.push(GAP);
                    middle_bytes.push(UTF8_SPACE);
                }
                SimpleTraceStep::Left => {
                    seq_2_idx += 1;
                    seq_1_bytes.push(GAP);
                    seq_2_bytes.push(seq_2.utf8_bytes[seq_2_idx]);
                    middle_bytes.push(UTF8_SPACE);
                }
                SimpleTraceStep::Stop => {}
            }
        }

        Self {
            score,
            length: seq_1_bytes.len(),
            seq_1_name: seq_1.name.clone(),
            seq_2_name: seq_2.name.clone(),
            seq_1_string: String::from_utf8_lossy(&seq_1_bytes).into_owned(),
            middle_string: String::from_utf8_lossy(&middle_bytes).into_owned(),
            seq_2_string: String::from_utf8_lossy(&seq_2_bytes).into_owned(),
            trace,
        }
    }

    /// The `(score, aligned_1, aligned_2)` triple.
    pub fn tuple(&self) -> (isize, &str, &str) {
        (self.score, &self.seq_1_string, &self.seq_2_string)
    }

    /// The verbose, human readable form of the alignment.
    pub fn report(&self) -> String {
        format!(
            "Alignment Score: {}\n{}\n{}\n{}",
            self.score, self.seq_1_string, self.middle_string, self.seq_2_string
        )
    }
}

impl Display for GlobalAlignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.report())
    }
}

/// The result of a local (Smith-Waterman) alignment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LocalAlignment {
    /// 100 * (identical columns) / (alignment length), truncated
    pub percent_identity: usize,
    /// The score recomputed column by column from the display strings
    pub score: isize,
    /// The maximum score found in the DP matrix
    pub matrix_score: isize,
    /// The number of columns in the alignment
    pub length: usize,
    /// The name of the first sequence
    pub seq_1_name: String,
    /// The name of the second sequence
    pub seq_2_name: String,
    /// The first aligned position (1-indexed) of the first sequence
    pub seq_1_start: usize,
    /// The last aligned position (1-indexed) of the first sequence
    pub seq_1_end: usize,
    /// The first aligned position (1-indexed) of the second sequence
    pub seq_2_start: usize,
    /// The last aligned position (1-indexed) of the second sequence
    pub seq_2_end: usize,
    /// The gapped first sequence
    pub seq_1_string: String,
    /// The matched residue on identical columns, otherwise a space
    pub annotation_string: String,
    /// The gapped second sequence
    pub seq_2_string: String,
}

/// The coordinates of a local alignment, as (start, end) pairs for each sequence.
///
/// For an empty alignment, each start is one past its end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalBounds {
    pub seq_1_start: usize,
    pub seq_1_end: usize,
    pub seq_2_start: usize,
    pub seq_2_end: usize,
}

impl LocalAlignment {
    /// Summarize a pair of aligned byte strings.
    ///
    /// The identity, annotation, and score are all derived from the strings
    /// themselves, independent of the DP matrix that produced them.
    pub fn from_aligned_bytes(
        seq_1_bytes: &[u8],
        seq_2_bytes: &[u8],
        scoring: &ScoringScheme,
        matrix_score: isize,
        bounds: LocalBounds,
    ) -> Self {
        debug_assert_eq!(seq_1_bytes.len(), seq_2_bytes.len());

        let length = seq_1_bytes.len();
        let mut identical: usize = 0;
        let mut score: isize = 0;
        let mut annotation_bytes: Vec<u8> = Vec::with_capacity(length);

        seq_1_bytes
            .iter()
            .zip(seq_2_bytes.iter())
            .for_each(|(&a, &b)| {
                if a == b {
                    identical += 1;
                    annotation_bytes.push(a);
                } else {
                    annotation_bytes.push(UTF8_SPACE);
                }
                score += scoring.score_column(a, b, GAP);
            });

        let percent_identity = match length {
            0 => 0,
            _ => 100 * identical / length,
        };

        Self {
            percent_identity,
            score,
            matrix_score,
            length,
            seq_1_name: String::new(),
            seq_2_name: String::new(),
            seq_1_start: bounds.seq_1_start,
            seq_1_end: bounds.seq_1_end,
            seq_2_start: bounds.seq_2_start,
            seq_2_end: bounds.seq_2_end,
            seq_1_string: String::from_utf8_lossy(seq_1_bytes).into_owned(),
            annotation_string: String::from_utf8_lossy(&annotation_bytes).into_owned(),
            seq_2_string: String::from_utf8_lossy(seq_2_bytes).into_owned(),
        }
    }

    pub fn with_names(mut self, seq_1: &Sequence, seq_2: &Sequence) -> Self {
        self.seq_1_name = seq_1.name.clone();
        self.seq_2_name = seq_2.name.clone();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The `(percent_identity, score, aligned_1, annotation, aligned_2)` tuple.
    pub fn tuple(&self) -> (usize, isize, &str, &str, &str) {
        (
            self.percent_identity,
            self.score,
            &self.seq_1_string,
            &self.annotation_string,
            &self.seq_2_string,
        )
    }

    pub fn report(&self) -> String {
        format!(
            "Alignment Score: {}\nIdentity: {}%\n{}\n{}\n{}",
            self.score,
            self.percent_identity,
            self.seq_1_string,
            self.annotation_string,
            self.seq_2_string
        )
    }
}

impl Display for LocalAlignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.report())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_from_trace() -> anyhow::Result<()> {
        use SimpleTraceStep::*;

        let seq_1 = Sequence::from_utf8(b"ACTGC")?;
        let seq_2 = Sequence::from_utf8(b"ACTCA")?;
        let trace = vec![Diagonal, Diagonal, Diagonal, Up, Diagonal, Left];

        let ali = GlobalAlignment::from_trace(trace, &seq_1, &seq_2, 2);
        assert_eq!(ali.tuple(), (2, "ACTGC-", "ACT-CA"));
        assert_eq!(ali.middle_string, "||| | ");
        assert_eq!(ali.length, 6);
        assert_eq!(ali.report(), "Alignment Score: 2\nACTGC-\n||| | \nACT-CA");
        Ok(())
    }

    #[test]
    fn test_global_mismatch_middle_character() -> anyhow::Result<()> {
        use SimpleTraceStep::*;

        let seq_1 = Sequence::from_utf8(b"AC")?;
        let seq_2 = Sequence::from_utf8(b"AG")?;
        let ali = GlobalAlignment::from_trace(vec![Diagonal, Diagonal], &seq_1, &seq_2, 0);
        assert_eq!(ali.middle_string, "|.");
        Ok(())
    }

    #[test]
    fn test_local_summary() {
        let scoring = ScoringScheme::new(10, -5, -3);
        let ali = LocalAlignment::from_aligned_bytes(
            b"ACGT-AT",
            b"A-GTGCT",
            &scoring,
            29,
            LocalBounds::default(),
        );

        // 4 identical columns out of 7
        assert_eq!(ali.tuple(), (57, 29, "ACGT-AT", "A GT  T", "A-GTGCT"));
        assert_eq!(ali.score, ali.matrix_score);
    }

    #[test]
    fn test_local_summary_empty() {
        let ali = LocalAlignment::from_aligned_bytes(
            b"",
            b"",
            &ScoringScheme::default(),
            0,
            LocalBounds::default(),
        );
        assert!(ali.is_empty());
        assert_eq!(ali.tuple(), (0, 0, "", "", ""));
    }
}
