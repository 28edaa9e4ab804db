use std::io::Write;

use anyhow::Context;
use libseqalign::align::{needleman_wunsch, smith_waterman, GlobalAlignment, LocalAlignment};
use libseqalign::output::output_json::write_json_output;
use libseqalign::structs::Sequence;
use log::info;
use thiserror::Error;

use crate::args::PairwiseArgs;
use crate::util::{colorize_annotation, colorize_rows};

#[derive(Error, Debug)]
#[error("fasta file holds {count} sequences, pairwise alignment needs 2")]
pub struct MissingPairError {
    pub count: usize,
}

/// Resolve the two sequences named on the command line.
fn load_pair(args: &PairwiseArgs) -> anyhow::Result<(Sequence, Sequence)> {
    match (&args.fasta_path, &args.seq_1, &args.seq_2) {
        (Some(path), _, _) => {
            let mut seqs = Sequence::from_fasta(path)?;
            if seqs.len() < 2 {
                return Err(MissingPairError { count: seqs.len() }.into());
            }
            if seqs.len() > 2 {
                info!("using the first 2 of {} sequences", seqs.len());
            }
            seqs.truncate(2);
            let seq_2 = seqs.remove(1);
            let seq_1 = seqs.remove(0);
            Ok((seq_1, seq_2))
        }
        (None, Some(seq_1), Some(seq_2)) => {
            let mut seq_1 =
                Sequence::from_utf8(seq_1.as_bytes()).context("invalid first sequence")?;
            let mut seq_2 =
                Sequence::from_utf8(seq_2.as_bytes()).context("invalid second sequence")?;
            seq_1.name = "seq_1".to_string();
            seq_2.name = "seq_2".to_string();
            Ok((seq_1, seq_2))
        }
        _ => Err(MissingPairError { count: 0 }.into()),
    }
}

/// Colour the three alignment lines of a global report, leaving the score line as is.
fn colorize_report(report: &str) -> String {
    let mut lines: Vec<String> = report.split('\n').map(str::to_string).collect();
    if let [_, seq_1, middle, seq_2] = lines.as_mut_slice() {
        (*seq_1, *seq_2) = colorize_rows(seq_1, seq_2);
        *middle = colorize_annotation(middle);
    }
    lines.join("\n")
}

fn write_global(
    ali: &GlobalAlignment,
    args: &PairwiseArgs,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let color = args.output_args.use_color();

    if args.verbose {
        let report = ali.report();
        match color {
            true => writeln!(out, "{}", colorize_report(&report))?,
            false => writeln!(out, "{report}")?,
        }
    } else {
        let (seq_1_string, seq_2_string) = match color {
            true => colorize_rows(&ali.seq_1_string, &ali.seq_2_string),
            false => (ali.seq_1_string.clone(), ali.seq_2_string.clone()),
        };
        writeln!(out, "{}\n{seq_1_string}\n{seq_2_string}", ali.score)?;
    }
    Ok(())
}

fn write_local(
    ali: &LocalAlignment,
    args: &PairwiseArgs,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let color = args.output_args.use_color();

    let (seq_1_string, seq_2_string) = match color {
        true => colorize_rows(&ali.seq_1_string, &ali.seq_2_string),
        false => (ali.seq_1_string.clone(), ali.seq_2_string.clone()),
    };
    let annotation_string = match color {
        true => colorize_annotation(&ali.annotation_string),
        false => ali.annotation_string.clone(),
    };

    if args.verbose {
        writeln!(out, "Alignment Score: {}", ali.score)?;
        writeln!(out, "Identity: {}%", ali.percent_identity)?;
        writeln!(
            out,
            "{}: {}..{}  {}: {}..{}",
            ali.seq_1_name,
            ali.seq_1_start,
            ali.seq_1_end,
            ali.seq_2_name,
            ali.seq_2_start,
            ali.seq_2_end
        )?;
    } else {
        writeln!(out, "{} {}", ali.percent_identity, ali.score)?;
    }
    writeln!(out, "{seq_1_string}\n{annotation_string}\n{seq_2_string}")?;
    Ok(())
}

pub fn global(args: &PairwiseArgs) -> anyhow::Result<()> {
    let (seq_1, seq_2) = load_pair(args)?;
    let ali = needleman_wunsch(&seq_1, &seq_2, &args.scoring_args.scheme());

    let mut out = args.output_args.writer()?;
    match args.output_args.json {
        true => write_json_output(&ali, &mut out)?,
        false => write_global(&ali, args, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

pub fn local(args: &PairwiseArgs) -> anyhow::Result<()> {
    let (seq_1, seq_2) = load_pair(args)?;
    let ali = smith_waterman(&seq_1, &seq_2, &args.scoring_args.scheme());

    if ali.is_empty() {
        info!("no positive scoring local alignment exists");
    }

    let mut out = args.output_args.writer()?;
    match args.output_args.json {
        true => write_json_output(&ali, &mut out)?,
        false => write_local(&ali, args, &mut out)?,
    }
    out.flush()?;
    Ok(())
}
