pub mod align;
pub mod alphabet;
pub mod output;
pub mod structs;
pub mod util;

use align::{
    multiple_align, needleman_wunsch, smith_waterman, GlobalAlignment, LocalAlignment,
    MultipleAlignmentParams, ScoringScheme,
};
use anyhow::{Context, Result};
use structs::Sequence;

/// Globally align two raw nucleotide strings.
pub fn global_align(seq_1: &str, seq_2: &str, scoring: &ScoringScheme) -> Result<GlobalAlignment> {
    let seq_1 = Sequence::from_utf8(seq_1.as_bytes()).context("invalid first sequence")?;
    let seq_2 = Sequence::from_utf8(seq_2.as_bytes()).context("invalid second sequence")?;
    Ok(needleman_wunsch(&seq_1, &seq_2, scoring))
}

/// Locally align two raw nucleotide strings.
pub fn local_align(seq_1: &str, seq_2: &str, scoring: &ScoringScheme) -> Result<LocalAlignment> {
    let seq_1 = Sequence::from_utf8(seq_1.as_bytes()).context("invalid first sequence")?;
    let seq_2 = Sequence::from_utf8(seq_2.as_bytes()).context("invalid second sequence")?;
    Ok(smith_waterman(&seq_1, &seq_2, scoring))
}

/// Progressively align raw nucleotide strings with the default parameters.
///
/// The gapped strings are returned in absorption order.
pub fn multiple_align_strs<S: AsRef<str>>(sequences: &[S]) -> Result<Vec<String>> {
    let sequences = sequences
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            Sequence::from_utf8(s.as_ref().as_bytes())
                .with_context(|| format!("invalid sequence at position {idx}"))
        })
        .collect::<Result<Vec<Sequence>>>()?;

    Ok(multiple_align(&sequences, &MultipleAlignmentParams::default())?.sequences())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::TooFewSequencesError;
    use crate::structs::sequence::{
        EmptySequenceError, ReservedGapSymbolError, UnknownUtf8SequenceByteError,
    };

    #[test]
    fn test_global_align() -> Result<()> {
        let scoring = ScoringScheme::new(1, -1, -1);

        let ali = global_align("ACGTAT", "ACGTAT", &scoring)?;
        assert_eq!(ali.tuple(), (6, "ACGTAT", "ACGTAT"));

        let ali = global_align("ACGTAT", "AGTGCT", &scoring)?;
        assert_eq!(ali.tuple(), (1, "ACGT-AT", "A-GTGCT"));

        let ali = global_align("ACGTAT", "ACG", &scoring)?;
        assert_eq!(ali.tuple(), (0, "ACGTAT", "ACG---"));
        Ok(())
    }

    #[test]
    fn test_local_align() -> Result<()> {
        let scoring = ScoringScheme::new(10, -5, -5);
        let ali = local_align("ACGTAT", "AGTGCT", &scoring)?;
        assert_eq!(ali.tuple(), (57, 25, "ACGT-AT", "A GT  T", "A-GTGCT"));
        Ok(())
    }

    #[test]
    fn test_multiple_align() -> Result<()> {
        assert_eq!(multiple_align_strs(&["GCAT", "ATCG"])?, vec!["GCAT--", "--ATCG"]);
        Ok(())
    }

    #[test]
    fn test_malformed_input_fails_fast() {
        let scoring = ScoringScheme::default();

        let err = global_align("", "ACGT", &scoring).unwrap_err();
        assert!(err.downcast_ref::<EmptySequenceError>().is_some());

        let err = local_align("ACGT", "AC-T", &scoring).unwrap_err();
        let gap = err.downcast_ref::<ReservedGapSymbolError>().unwrap();
        assert_eq!(gap.position, 3);

        let err = global_align("ACGT", "acgt", &scoring).unwrap_err();
        let unknown = err.downcast_ref::<UnknownUtf8SequenceByteError>().unwrap();
        assert_eq!(unknown.byte, b'a');

        let err = multiple_align_strs(&["ACGT"]).unwrap_err();
        assert!(err.downcast_ref::<TooFewSequencesError>().is_some());

        let err = multiple_align_strs(&["ACGT", "A-GT"]).unwrap_err();
        assert!(err.downcast_ref::<ReservedGapSymbolError>().is_some());
    }
}
