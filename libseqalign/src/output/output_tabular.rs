use crate::align::structs::{GlobalAlignment, LocalAlignment};

use anyhow::{bail, Context};
use regex::Regex;
use serde::Serialize;
use strum::{EnumCount, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumCount)]
pub enum Field {
    Query,
    Target,
    GlobalScore,
    LocalScore,
    Identity,
    QueryStart,
    QueryEnd,
    TargetStart,
    TargetEnd,
    LocalLength,
}

impl Field {
    pub fn extract_from(&self, summary: &PairSummary) -> String {
        match self {
            Field::Query => summary.query_name.clone(),
            Field::Target => summary.target_name.clone(),
            Field::GlobalScore => summary.global_score.to_string(),
            Field::LocalScore => summary.local_score.to_string(),
            Field::Identity => format!("{}%", summary.percent_identity),
            Field::QueryStart => summary.query_start.to_string(),
            Field::QueryEnd => summary.query_end.to_string(),
            Field::TargetStart => summary.target_start.to_string(),
            Field::TargetEnd => summary.target_end.to_string(),
            Field::LocalLength => summary.local_length.to_string(),
        }
    }
}

/// One row of the all-vs-all table: the global and local alignment of a sequence pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairSummary {
    pub query_name: String,
    pub target_name: String,
    pub global_score: isize,
    pub local_score: isize,
    pub percent_identity: usize,
    pub query_start: usize,
    pub query_end: usize,
    pub target_start: usize,
    pub target_end: usize,
    pub local_length: usize,
}

impl PairSummary {
    pub fn new(global: &GlobalAlignment, local: &LocalAlignment) -> Self {
        Self {
            query_name: global.seq_1_name.clone(),
            target_name: global.seq_2_name.clone(),
            global_score: global.score,
            local_score: local.score,
            percent_identity: local.percent_identity,
            query_start: local.seq_1_start,
            query_end: local.seq_1_end,
            target_start: local.seq_2_start,
            target_end: local.seq_2_end,
            local_length: local.length,
        }
    }

    /// Render the row under `format`, one space between padded cells.
    pub fn tab_string_formatted(&self, format: &TableFormat) -> String {
        format
            .columns
            .iter()
            .map(|column| {
                let value = column.field.extract_from(self);
                format!("{value:width$}", width = column.width)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Header lines start with this, so the first column is widened to fit it.
const COMMENT_PREFIX: &str = "# ";

/// One column of the pair table.
#[derive(Debug, Clone)]
pub struct Column {
    pub field: Field,
    /// Lower-cased words of the variant name, one header line each.
    pub label: Vec<String>,
    pub min_width: usize,
    pub width: usize,
}

impl Column {
    fn new(field: Field, words: &Regex, prefix_width: usize) -> anyhow::Result<Self> {
        // the Debug string of a variant is its CamelCase name
        let label: Vec<String> = words
            .find_iter(&format!("{field:?}"))
            .map(|word| word.as_str().to_lowercase())
            .collect();

        let min_width = label
            .iter()
            .map(String::len)
            .max()
            .with_context(|| format!("no label words in field {field:?}"))?
            + prefix_width;

        Ok(Self {
            field,
            label,
            min_width,
            width: min_width,
        })
    }

    /// The label bottom-aligned in `depth` cells, then a dash rule.
    fn header_cells(&self, depth: usize, width: usize) -> Vec<String> {
        let blank = depth - self.label.len();
        std::iter::repeat("")
            .take(blank)
            .chain(self.label.iter().map(String::as_str))
            .map(|word| format!("{word:width$}"))
            .chain(std::iter::once("-".repeat(width)))
            .collect()
    }
}

/// Column layout for printing `PairSummary` rows under a commented header.
#[derive(Debug, Clone)]
pub struct TableFormat {
    pub columns: Vec<Column>,
}

impl TableFormat {
    pub fn new(fields: &[Field]) -> anyhow::Result<Self> {
        if fields.is_empty() {
            bail!("a table needs at least one field");
        }

        let words = Regex::new(r"[A-Z][a-z]*").context("failed to build field label regex")?;

        let columns = fields
            .iter()
            .enumerate()
            .map(|(idx, &field)| {
                let prefix_width = if idx == 0 { COMMENT_PREFIX.len() } else { 0 };
                Column::new(field, &words, prefix_width)
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self { columns })
    }

    pub fn widths(&self) -> Vec<usize> {
        self.columns.iter().map(|column| column.width).collect()
    }

    /// Widen each column to fit its values in `summaries`.
    pub fn update_widths(&mut self, summaries: &[PairSummary]) {
        for column in self.columns.iter_mut() {
            column.width = summaries
                .iter()
                .map(|summary| column.field.extract_from(summary).len())
                .fold(column.width, usize::max);
        }
    }

    /// Shrink every column back to the width of its label.
    pub fn reset_widths(&mut self) {
        for column in self.columns.iter_mut() {
            column.width = column.min_width;
        }
    }

    pub fn header(&self) -> anyhow::Result<String> {
        let depth = self
            .columns
            .iter()
            .map(|column| column.label.len())
            .max()
            .context("a table needs at least one field")?;

        let cells: Vec<Vec<String>> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let width = match idx {
                    0 => column.width - COMMENT_PREFIX.len(),
                    _ => column.width,
                };
                column.header_cells(depth, width)
            })
            .collect();

        Ok((0..=depth)
            .map(|line| {
                let row: Vec<&str> = cells.iter().map(|column| column[line].as_str()).collect();
                format!("{COMMENT_PREFIX}{}", row.join(" ")).trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::ScoringScheme;
    use crate::{global_align, local_align};
    use strum::IntoEnumIterator;

    fn summary() -> anyhow::Result<PairSummary> {
        let global = global_align("ACGTAT", "AGTGCT", &ScoringScheme::default())?;
        let local = local_align("ACGTAT", "AGTGCT", &ScoringScheme::new(10, -5, -5))?;
        Ok(PairSummary::new(&global, &local))
    }

    #[test]
    fn test_labels_split_on_camel_case() -> anyhow::Result<()> {
        let format = TableFormat::new(&[Field::Query, Field::GlobalScore, Field::QueryStart])?;
        assert_eq!(format.columns[0].label, vec!["query"]);
        assert_eq!(format.columns[1].label, vec!["global", "score"]);
        assert_eq!(format.columns[2].label, vec!["query", "start"]);
        // "query" plus the "# " prefix
        assert_eq!(format.widths(), vec![7, 6, 5]);
        Ok(())
    }

    #[test]
    fn test_header() -> anyhow::Result<()> {
        let format = TableFormat::new(&[Field::Query, Field::GlobalScore])?;
        let header = format.header()?;
        assert_eq!(header, "#       global\n# query score\n# ----- ------");
        Ok(())
    }

    #[test]
    fn test_header_lines_up_with_rows() -> anyhow::Result<()> {
        let mut summary = summary()?;
        summary.query_name = "a_long_query_name".to_string();

        let mut format = TableFormat::new(&[Field::Query, Field::LocalScore])?;
        format.update_widths(&[summary.clone()]);

        let header = format.header()?;
        let rule = header.lines().last().unwrap();
        assert_eq!(rule, format!("# {} -----", "-".repeat(15)));

        let row = summary.tab_string_formatted(&format);
        assert_eq!(row.len(), rule.len());
        assert!(row.ends_with(" 25   "));
        Ok(())
    }

    #[test]
    fn test_empty_fields() {
        assert!(TableFormat::new(&[]).is_err());
    }

    #[test]
    fn test_widths_grow_and_reset() -> anyhow::Result<()> {
        let mut summary = summary()?;
        summary.query_name = "a_long_query_name".to_string();

        let mut format = TableFormat::new(&[Field::Query, Field::Identity])?;
        format.update_widths(&[summary.clone()]);
        assert_eq!(format.widths(), vec![17, 8]);

        format.reset_widths();
        assert_eq!(format.widths(), vec![7, 8]);
        Ok(())
    }

    #[test]
    fn test_tab_string() -> anyhow::Result<()> {
        let mut summary = summary()?;
        summary.query_name = "q".to_string();
        summary.target_name = "t".to_string();

        let fields: Vec<Field> = Field::iter().collect();
        assert_eq!(fields.len(), Field::COUNT);

        let format = TableFormat::new(&fields)?;
        let row = summary.tab_string_formatted(&format);
        let values: Vec<&str> = row.split_whitespace().collect();
        assert_eq!(
            values,
            vec!["q", "t", "1", "25", "57%", "1", "6", "1", "6", "7"]
        );
        Ok(())
    }
}
