use std::io::Write;

use libseqalign::align::{multiple_align, MultipleAlignmentParamsBuilder};
use libseqalign::output::output_json::write_json_output;
use libseqalign::structs::Sequence;
use log::info;

use crate::args::MultipleArgs;

pub fn multiple(args: &MultipleArgs) -> anyhow::Result<()> {
    let seqs = Sequence::from_fasta(&args.fasta_path)?;
    info!(
        "read {} sequences from {}",
        seqs.len(),
        args.fasta_path.to_string_lossy()
    );

    let params = MultipleAlignmentParamsBuilder::default()
        .pairwise_scoring(args.scoring_args.scheme())
        .profile_gap_penalty(args.profile_gap_penalty)
        .build()?;

    let msa = multiple_align(&seqs, &params)?;

    let mut out = args.output_args.writer()?;
    match args.output_args.json {
        true => write_json_output(&msa, &mut out)?,
        false => write!(out, "{msa}")?,
    }
    out.flush()?;

    info!(
        "{:.1}% of {} columns are fully conserved",
        msa.conservation() * 100.0,
        msa.width()
    );
    Ok(())
}
