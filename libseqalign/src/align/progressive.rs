use std::fmt::{Display, Formatter};

use crate::align::profile_alignment::align_blocks;
use crate::align::{needleman_wunsch, ScoringScheme, DEFAULT_PROFILE_GAP_PENALTY};
use crate::alphabet::GAP;
use crate::structs::Sequence;

use anyhow::{Context, Result};
use derive_builder::Builder;
use indexmap::IndexSet;
use log::{debug, info};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("multiple alignment needs at least 2 sequences, got {count}")]
pub struct TooFewSequencesError {
    pub count: usize,
}

#[derive(Error, Debug)]
#[error("no pairwise alignment links {absorbed} absorbed sequences to the other {remaining}")]
pub struct DisconnectedMergeError {
    pub absorbed: usize,
    pub remaining: usize,
}

/// The parameters of a progressive multiple alignment.
#[derive(Builder, Clone, Debug, PartialEq, Eq)]
#[builder(default)]
pub struct MultipleAlignmentParams {
    /// The scoring used to rank every pair of input sequences
    pub pairwise_scoring: ScoringScheme,
    /// The gap penalty of the profile-profile merge
    pub profile_gap_penalty: isize,
}

impl Default for MultipleAlignmentParams {
    fn default() -> Self {
        Self {
            pairwise_scoring: ScoringScheme::default(),
            profile_gap_penalty: DEFAULT_PROFILE_GAP_PENALTY,
        }
    }
}

/// A global alignment between two of the input sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairwiseRecord {
    pub score: isize,
    pub index_a: usize,
    pub index_b: usize,
    pub gapped_a: Vec<u8>,
    pub gapped_b: Vec<u8>,
}

impl PairwiseRecord {
    fn touches(&self, absorbed: &IndexSet<usize>) -> bool {
        absorbed.contains(&self.index_a) || absorbed.contains(&self.index_b)
    }

    fn is_redundant(&self, absorbed: &IndexSet<usize>) -> bool {
        absorbed.contains(&self.index_a) && absorbed.contains(&self.index_b)
    }
}

/// One row of a multiple alignment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AlignedRow {
    /// The position of the sequence in the input
    pub index: usize,
    pub name: String,
    pub aligned: String,
}

/// A block of mutually aligned sequences, in the order they were absorbed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MultipleAlignment {
    pub rows: Vec<AlignedRow>,
}

impl MultipleAlignment {
    pub fn num_sequences(&self) -> usize {
        self.rows.len()
    }

    /// The number of columns in the alignment.
    pub fn width(&self) -> usize {
        self.rows.first().map(|row| row.aligned.len()).unwrap_or(0)
    }

    /// The gapped sequences, in absorption order.
    pub fn sequences(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.aligned.clone()).collect()
    }

    /// The input positions of the rows, in absorption order.
    pub fn order(&self) -> Vec<usize> {
        self.rows.iter().map(|row| row.index).collect()
    }

    /// One byte per row for the given column.
    pub fn column(&self, column: usize) -> Option<Vec<u8>> {
        if column >= self.width() {
            return None;
        }
        Some(
            self.rows
                .iter()
                .map(|row| row.aligned.as_bytes()[column])
                .collect(),
        )
    }

    /// The fraction of columns in which every row holds the same nucleotide.
    pub fn conservation(&self) -> f64 {
        let width = self.width();
        if width == 0 {
            return 0.0;
        }

        let conserved = (0..width)
            .filter_map(|column| self.column(column))
            .filter(|column| {
                let first = column[0];
                first != GAP && column.iter().all(|&b| b == first)
            })
            .count();

        conserved as f64 / width as f64
    }
}

impl Display for MultipleAlignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            let name = match row.name.is_empty() {
                true => format!("seq{}", row.index),
                false => row.name.clone(),
            };
            writeln!(f, ">{name}")?;
            writeln!(f, "{}", row.aligned)?;
        }
        Ok(())
    }
}

/// Globally align every unordered pair of sequences and rank the results.
///
/// The records are sorted by descending score. The sort is stable, so tied
/// records keep the order they were generated in: (0, 1), (0, 2), ..., (1, 2), ...
pub fn rank_pairs(sequences: &[Sequence], scoring: &ScoringScheme) -> Vec<PairwiseRecord> {
    let mut records: Vec<PairwiseRecord> = vec![];

    for index_a in 0..sequences.len() {
        for index_b in (index_a + 1)..sequences.len() {
            let alignment = needleman_wunsch(&sequences[index_a], &sequences[index_b], scoring);
            records.push(PairwiseRecord {
                score: alignment.score,
                index_a,
                index_b,
                gapped_a: alignment.seq_1_string.into_bytes(),
                gapped_b: alignment.seq_2_string.into_bytes(),
            });
        }
    }

    records.sort_by(|a, b| b.score.cmp(&a.score));

    records
}

/// Greedily merge ranked pairwise records into one aligned block.
///
/// The top record seeds the block. Each step takes the first remaining record
/// that touches an absorbed sequence, aligns the other side of that record
/// (in its gapped pairwise form) against the profile of the block, and appends
/// it. Records whose endpoints are both absorbed are then discarded.
///
/// Returns the block rows paired with their input positions, in absorption order.
pub fn assemble(
    mut records: Vec<PairwiseRecord>,
    num_sequences: usize,
    profile_gap_penalty: isize,
) -> Result<Vec<(usize, Vec<u8>)>> {
    if num_sequences < 2 {
        return Err(TooFewSequencesError {
            count: num_sequences,
        }
        .into());
    }

    if records.is_empty() {
        return Err(DisconnectedMergeError {
            absorbed: 0,
            remaining: num_sequences,
        }
        .into());
    }

    let seed = records.remove(0);
    debug!(
        "seeding the block with sequences {} and {} (score: {})",
        seed.index_a, seed.index_b, seed.score
    );

    let mut absorbed: IndexSet<usize> = IndexSet::new();
    absorbed.insert(seed.index_a);
    absorbed.insert(seed.index_b);

    let mut block: Vec<Vec<u8>> = vec![seed.gapped_a, seed.gapped_b];
    records.retain(|record| !record.is_redundant(&absorbed));

    while absorbed.len() < num_sequences {
        let position = records
            .iter()
            .position(|record| record.touches(&absorbed))
            .ok_or(DisconnectedMergeError {
                absorbed: absorbed.len(),
                remaining: num_sequences - absorbed.len(),
            })?;

        let record = records.remove(position);

        let (entering_index, entering) = if absorbed.contains(&record.index_a) {
            (record.index_b, record.gapped_b)
        } else {
            (record.index_a, record.gapped_a)
        };

        debug!(
            "merging sequence {} into a block of {} (score: {})",
            entering_index,
            block.len(),
            record.score
        );

        let (mut merged, entering_gapped) =
            align_blocks(&block, &[entering], profile_gap_penalty).with_context(|| {
                format!("failed to merge sequence {entering_index} into the block")
            })?;

        merged.extend(entering_gapped);
        block = merged;

        absorbed.insert(entering_index);
        records.retain(|record| !record.is_redundant(&absorbed));
    }

    Ok(absorbed.into_iter().zip(block).collect())
}

/// Progressively align a set of sequences into one mutually gap-aligned block.
///
/// The rows of the result are in absorption order (the seed pair first, then
/// one row per merge), not in input order.
pub fn multiple_align(
    sequences: &[Sequence],
    params: &MultipleAlignmentParams,
) -> Result<MultipleAlignment> {
    if sequences.len() < 2 {
        return Err(TooFewSequencesError {
            count: sequences.len(),
        }
        .into());
    }

    let records = rank_pairs(sequences, &params.pairwise_scoring);
    let rows = assemble(records, sequences.len(), params.profile_gap_penalty)?;

    let alignment = MultipleAlignment {
        rows: rows
            .into_iter()
            .map(|(index, aligned)| AlignedRow {
                index,
                name: sequences[index].name.clone(),
                aligned: String::from_utf8_lossy(&aligned).into_owned(),
            })
            .collect(),
    };

    info!(
        "aligned {} sequences into {} columns",
        alignment.num_sequences(),
        alignment.width()
    );

    Ok(alignment)
}
