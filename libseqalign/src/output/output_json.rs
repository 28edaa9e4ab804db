use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

/// Write any result as pretty printed JSON, followed by a newline.
pub fn write_json_output<T: Serialize + ?Sized>(result: &T, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, result).context("failed to serialize result")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::ScoringScheme;
    use crate::{global_align, local_align, multiple_align_strs};

    fn to_value<T: Serialize + ?Sized>(result: &T) -> Result<serde_json::Value> {
        let mut out: Vec<u8> = vec![];
        write_json_output(result, &mut out)?;
        Ok(serde_json::from_slice(&out)?)
    }

    #[test]
    fn test_global_json() -> Result<()> {
        let ali = global_align("ACGTAT", "AGTGCT", &ScoringScheme::default())?;
        let value = to_value(&ali)?;
        assert_eq!(value["score"], 1);
        assert_eq!(value["seq_1_string"], "ACGT-AT");
        assert_eq!(value["seq_2_string"], "A-GTGCT");
        // the step trace stays out of the output
        assert!(value.get("trace").is_none());
        Ok(())
    }

    #[test]
    fn test_local_json() -> Result<()> {
        let ali = local_align("ACGTAT", "AGTGCT", &ScoringScheme::new(10, -5, -5))?;
        let value = to_value(&ali)?;
        assert_eq!(value["percent_identity"], 57);
        assert_eq!(value["annotation_string"], "A GT  T");
        Ok(())
    }

    #[test]
    fn test_slice_json() -> Result<()> {
        let block = multiple_align_strs(&["GCAT", "ATCG"])?;
        let value = to_value(block.as_slice())?;
        assert_eq!(value, serde_json::json!(["GCAT--", "--ATCG"]));
        Ok(())
    }
}
