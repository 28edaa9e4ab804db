use anyhow::Result;
use std::fmt::Display;
use std::io::Write;

/// Write the human readable report of each result, separated by blank lines.
pub fn write_standard_output<T: Display>(results: &[T], out: &mut impl Write) -> Result<()> {
    for (idx, result) in results.iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{result}")?
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::ScoringScheme;
    use crate::global_align;

    #[test]
    fn test_reports_are_separated() -> Result<()> {
        let scoring = ScoringScheme::default();
        let results = vec![
            global_align("ACTGC", "ACTCA", &scoring)?,
            global_align("AC", "AC", &scoring)?,
        ];

        let mut out: Vec<u8> = vec![];
        write_standard_output(&results, &mut out)?;

        assert_eq!(
            String::from_utf8(out)?,
            "Alignment Score: 2\nACTGC-\n||| | \nACT-CA\n\nAlignment Score: 2\nAC\n||\nAC\n"
        );
        Ok(())
    }
}
