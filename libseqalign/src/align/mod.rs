pub mod structs;
pub use structs::{GlobalAlignment, LocalAlignment};

mod scoring;
pub use scoring::{ScoringScheme, DEFAULT_PROFILE_GAP_PENALTY};

mod needleman_wunsch;
pub use needleman_wunsch::{needleman_wunsch, needleman_wunsch_matrices, traceback};

mod smith_waterman;
pub use smith_waterman::{smith_waterman, smith_waterman_matrices, SmithWatermanMatrices};

mod profile_alignment;
pub use profile_alignment::{add_gaps, align_blocks, profile_needleman_wunsch, ProfileDpMatrices};

mod progressive;
pub use progressive::{
    assemble, multiple_align, rank_pairs, AlignedRow, DisconnectedMergeError, MultipleAlignment,
    MultipleAlignmentParams, MultipleAlignmentParamsBuilder, PairwiseRecord,
    TooFewSequencesError,
};
