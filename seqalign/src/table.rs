use std::io::Write;

use libseqalign::align::{needleman_wunsch, smith_waterman};
use libseqalign::output::output_json::write_json_output;
use libseqalign::output::output_tabular::{Field, PairSummary, TableFormat};
use libseqalign::structs::Sequence;
use log::debug;
use strum::IntoEnumIterator;

use crate::args::TableArgs;

pub fn table(args: &TableArgs) -> anyhow::Result<()> {
    let seqs = Sequence::from_fasta(&args.fasta_path)?;
    let scoring = args.scoring_args.scheme();

    let mut summaries: Vec<PairSummary> = vec![];
    for (idx, seq_1) in seqs.iter().enumerate() {
        for seq_2 in seqs.iter().skip(idx + 1) {
            debug!("comparing {} and {}", seq_1.name, seq_2.name);
            let global = needleman_wunsch(seq_1, seq_2, &scoring);
            let local = smith_waterman(seq_1, seq_2, &scoring);
            summaries.push(PairSummary::new(&global, &local));
        }
    }

    summaries.sort_by(|a, b| b.global_score.cmp(&a.global_score));

    let mut out = args.output_args.writer()?;

    if args.output_args.json {
        write_json_output(summaries.as_slice(), &mut out)?;
    } else {
        let fields: Vec<Field> = Field::iter().collect();
        let mut table_format = TableFormat::new(&fields)?;
        table_format.update_widths(&summaries);

        writeln!(out, "{}", table_format.header()?)?;
        for summary in &summaries {
            writeln!(out, "{}", summary.tab_string_formatted(&table_format))?;
        }
    }
    out.flush()?;
    Ok(())
}
