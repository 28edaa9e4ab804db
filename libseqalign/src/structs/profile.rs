use std::fmt::{Display, Formatter};

use crate::alphabet::{
    NUCLEOTIDE_ALPHABET_WITH_GAP, PROFILE_ALPHABET_SIZE, UTF8_TO_DIGITAL_ALIGNED,
};
use anyhow::Result;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("can't build a profile from an empty block")]
pub struct EmptyBlockError;

#[derive(Error, Debug)]
#[error("block row {row} has length {length}, expected {expected}")]
pub struct RaggedBlockError {
    pub row: usize,
    pub length: usize,
    pub expected: usize,
}

#[derive(Error, Debug)]
#[error("unknown aligned symbol: {byte} (row {row}, column {column})")]
pub struct UnknownAlignedSymbolError {
    pub byte: u8,
    pub row: usize,
    pub column: usize,
}

/// The column-wise symbol counts of a block of mutually aligned sequences.
///
/// Every column holds one count per symbol channel: A, C, G, T, and the gap.
/// The counts of a column always sum to the number of rows in the block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    /// The number of columns in the block
    pub width: usize,
    /// Indexed by [column][channel], where column is 0-indexed
    pub counts: Vec<[usize; PROFILE_ALPHABET_SIZE]>,
}

impl Profile {
    /// Build a profile from the rows of an aligned block.
    ///
    /// The rows may contain gaps, but they must all have the same length.
    pub fn from_block<T: AsRef<[u8]>>(block: &[T]) -> Result<Self> {
        let expected = match block.first() {
            Some(row) => row.as_ref().len(),
            None => return Err(EmptyBlockError.into()),
        };

        let mut counts = vec![[0usize; PROFILE_ALPHABET_SIZE]; expected];

        for (row_idx, row) in block.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != expected {
                return Err(RaggedBlockError {
                    row: row_idx,
                    length: row.len(),
                    expected,
                }
                .into());
            }

            for (column, byte) in row.iter().enumerate() {
                let channel = match UTF8_TO_DIGITAL_ALIGNED.get(byte) {
                    Some(c) => *c as usize,
                    None => {
                        return Err(UnknownAlignedSymbolError {
                            byte: *byte,
                            row: row_idx,
                            column,
                        }
                        .into())
                    }
                };
                counts[column][channel] += 1;
            }
        }

        Ok(Self {
            width: expected,
            counts,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of sequences that were counted into the profile.
    ///
    /// This is recovered from the first column, since every column sums to the same total.
    pub fn num_sequences(&self) -> usize {
        self.counts
            .first()
            .map(|column| column.iter().sum())
            .unwrap_or(0)
    }

    pub fn count(&self, channel: usize, column: usize) -> usize {
        self.counts[column][channel]
    }

    /// Score the pairing of `column` in this profile with `other_column` in `other`.
    ///
    /// Each channel rewards agreement (the product of the two counts) and penalizes
    /// each side's count against the other side's disagreeing sequences. The gap
    /// channel is scored like any nucleotide, so two gap-heavy columns reward each other.
    pub fn column_pair_score(&self, column: usize, other: &Profile, other_column: usize) -> isize {
        let num_seqs = self.num_sequences() as isize;
        let other_num_seqs = other.num_sequences() as isize;

        let counts = &self.counts[column];
        let other_counts = &other.counts[other_column];

        counts
            .iter()
            .zip(other_counts.iter())
            .map(|(&count, &other_count)| {
                let count = count as isize;
                let other_count = other_count as isize;

                let mismatch = num_seqs - count;
                let other_mismatch = other_num_seqs - other_count;

                count * other_count - count * other_mismatch - other_count * mismatch
            })
            .sum()
    }
}

impl Display for Profile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (channel, symbol) in NUCLEOTIDE_ALPHABET_WITH_GAP.iter().enumerate() {
            write!(f, "{symbol}")?;
            for column in &self.counts {
                write!(f, " {:3}", column[channel])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
