use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use libseqalign::align::{ScoringScheme, DEFAULT_PROFILE_GAP_PENALTY};

#[derive(Subcommand)]
pub enum SubCommands {
    #[command(about = "Globally align two sequences (Needleman-Wunsch)")]
    Global(PairwiseArgs),
    #[command(about = "Locally align two sequences (Smith-Waterman)")]
    Local(PairwiseArgs),
    #[command(about = "Progressively align every sequence in a fasta file")]
    Multiple(MultipleArgs),
    #[command(about = "Summarize the global and local alignment of every pair in a fasta file")]
    Table(TableArgs),
}

#[derive(Parser)]
#[command(name = "seqalign")]
#[command(about = "Global, local, and progressive multiple nucleotide sequence alignment")]
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,
}

#[derive(Args, Debug, Clone)]
pub struct ScoringArgs {
    /// The score for two identical residues
    #[arg(
        long = "match",
        default_value_t = 1isize,
        value_name = "N",
        allow_hyphen_values = true
    )]
    pub match_score: isize,

    /// The score for two different residues
    #[arg(
        long = "mismatch",
        default_value_t = -1isize,
        value_name = "N",
        allow_hyphen_values = true
    )]
    pub mismatch_score: isize,

    /// The score for a residue aligned to a gap
    #[arg(
        long = "gap",
        default_value_t = -1isize,
        value_name = "N",
        allow_hyphen_values = true
    )]
    pub gap_penalty: isize,
}

impl ScoringArgs {
    pub fn scheme(&self) -> ScoringScheme {
        ScoringScheme::new(self.match_score, self.mismatch_score, self.gap_penalty)
    }
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Where to place the output (defaults to stdout)
    #[arg(short = 'o', long = "output", value_name = "path")]
    pub output_path: Option<PathBuf>,

    /// Allow seqalign to overwrite files
    #[arg(long = "allow-overwrite", default_value_t = false)]
    pub allow_overwrite: bool,

    /// Write the results as JSON
    #[arg(long, action)]
    pub json: bool,

    /// Don't color terminal output
    #[arg(long = "no-color", action)]
    pub no_color: bool,
}

#[derive(Debug, Args)]
pub struct PairwiseArgs {
    /// The first sequence, e.g. ACGTAT
    #[arg(value_name = "SEQ_1", required_unless_present = "fasta_path")]
    pub seq_1: Option<String>,

    /// The second sequence, e.g. AGTGCT
    #[arg(value_name = "SEQ_2", required_unless_present = "fasta_path")]
    pub seq_2: Option<String>,

    /// Align the first two records of a fasta file instead
    #[arg(long = "fasta", value_name = "PATH", conflicts_with_all = ["seq_1", "seq_2"])]
    pub fasta_path: Option<PathBuf>,

    /// Print the full alignment report instead of the aligned sequences
    #[arg(short = 'v', long, action)]
    pub verbose: bool,

    /// Arguments that control the scoring scheme
    #[command(flatten)]
    pub scoring_args: ScoringArgs,

    /// Arguments that control output options
    #[command(flatten)]
    pub output_args: OutputArgs,
}

#[derive(Debug, Args)]
pub struct MultipleArgs {
    /// Sequences to align
    #[arg(value_name = "SEQS.fasta")]
    pub fasta_path: PathBuf,

    /// The gap penalty used when merging a sequence into the aligned block
    #[arg(
        long = "gap-profile",
        default_value_t = DEFAULT_PROFILE_GAP_PENALTY,
        value_name = "N",
        allow_hyphen_values = true
    )]
    pub profile_gap_penalty: isize,

    /// Arguments that control the scoring scheme of the pairwise ranking
    #[command(flatten)]
    pub scoring_args: ScoringArgs,

    /// Arguments that control output options
    #[command(flatten)]
    pub output_args: OutputArgs,
}

#[derive(Debug, Args)]
pub struct TableArgs {
    /// Sequences to compare
    #[arg(value_name = "SEQS.fasta")]
    pub fasta_path: PathBuf,

    /// Arguments that control the scoring scheme
    #[command(flatten)]
    pub scoring_args: ScoringArgs,

    /// Arguments that control output options
    #[command(flatten)]
    pub output_args: OutputArgs,
}
