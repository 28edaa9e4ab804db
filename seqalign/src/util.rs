use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use colored::Colorize;
use libseqalign::alphabet::{GAP, UTF8_PIPE};

use crate::args::OutputArgs;

pub trait PathBufExt {
    fn open(&self, allow_overwrite: bool) -> anyhow::Result<BufWriter<File>>;
}

impl PathBufExt for PathBuf {
    fn open(&self, allow_overwrite: bool) -> anyhow::Result<BufWriter<File>> {
        let mut file_options = File::options();

        if allow_overwrite {
            file_options.write(true).truncate(true).create(true);
        } else {
            file_options.write(true).create_new(true);
        };

        let file = file_options
            .open(self)
            .context(format!("failed to create file: {}", self.to_string_lossy()))?;

        Ok(BufWriter::new(file))
    }
}

impl OutputArgs {
    /// The destination for results: the output file if one was given, otherwise stdout.
    pub fn writer(&self) -> anyhow::Result<Box<dyn Write>> {
        match &self.output_path {
            Some(path) => Ok(Box::new(path.open(self.allow_overwrite)?)),
            None => Ok(Box::new(stdout())),
        }
    }

    /// Color is only used when writing to the terminal.
    pub fn use_color(&self) -> bool {
        !self.no_color && !self.json && self.output_path.is_none()
    }
}

/// Color an aligned pair of rows column by column: identical residues in green,
/// mismatches in red, and gapped columns dimmed.
pub fn colorize_rows(seq_1: &str, seq_2: &str) -> (String, String) {
    let mut colored_1 = String::new();
    let mut colored_2 = String::new();

    seq_1
        .bytes()
        .zip(seq_2.bytes())
        .for_each(|(a, b)| {
            let (a_str, b_str) = ((a as char).to_string(), (b as char).to_string());
            let (a_str, b_str) = if a == GAP || b == GAP {
                (a_str.dimmed(), b_str.dimmed())
            } else if a == b {
                (a_str.green(), b_str.green())
            } else {
                (a_str.red(), b_str.red())
            };
            colored_1 = format!("{colored_1}{a_str}");
            colored_2 = format!("{colored_2}{b_str}");
        });

    (colored_1, colored_2)
}

/// Color the annotation line of a report: `|` and matched residues in bold.
pub fn colorize_annotation(annotation: &str) -> String {
    annotation
        .bytes()
        .map(|b| match b {
            b' ' => " ".to_string(),
            UTF8_PIPE => "|".bold().to_string(),
            _ => (b as char).to_string().bold().to_string(),
        })
        .collect()
}
