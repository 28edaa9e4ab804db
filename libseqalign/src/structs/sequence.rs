use seq_io::fasta::{Reader, Record};
use std::fmt::{Debug, Display, Formatter};
use std::path::Path;

use crate::alphabet::{
    GAP, NUCLEOTIDE_ALPHABET_SIZE, NUCLEOTIDE_INVERSE_MAP, PAD_BYTE, UTF8_SPACE,
    UTF8_TO_DIGITAL_NUCLEOTIDE,
};
use anyhow::{Context, Result};
use rand::Rng;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("unknown UTF8 sequence byte: {byte}")]
pub struct UnknownUtf8SequenceByteError {
    pub byte: u8,
}

#[derive(Error, Debug)]
#[error("sequence contains the reserved gap symbol at position {position}")]
pub struct ReservedGapSymbolError {
    pub position: usize,
}

#[derive(Error, Debug)]
#[error("sequence is empty")]
pub struct EmptySequenceError;

/// This holds the both the "digital" data and string data of a nucleotide sequence.
#[derive(Clone)]
pub struct Sequence {
    /// The name of the sequence
    pub name: String,
    /// The sequence details. If the sequence comes from a fasta, this
    /// is the information following the sequence name in the header
    pub details: Option<String>,
    /// The length of the sequence
    pub length: usize,
    /// The "digital" data of the sequence. These are
    /// the string bytes, but mapped to [0u8..3u8]
    pub digital_bytes: Vec<u8>,
    /// The string data of the sequence. These are the UTF8 bytes
    /// that make up the sequence in the "normal" alphabet
    pub utf8_bytes: Vec<u8>,
}

/// Map a raw residue byte to its digital code, rejecting gaps and unknown bytes.
///
/// The `position` is 1-indexed, matching the layout of the sequence vectors.
fn digitize(utf8_byte: u8, position: usize) -> Result<u8> {
    if utf8_byte == GAP {
        return Err(ReservedGapSymbolError { position }.into());
    }

    match UTF8_TO_DIGITAL_NUCLEOTIDE.get(&utf8_byte) {
        Some(b) => Ok(*b),
        None => Err(UnknownUtf8SequenceByteError { byte: utf8_byte }.into()),
    }
}

impl Sequence {
    pub fn from_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<Self>> {
        let mut seqs: Vec<Self> = vec![];

        let mut reader = Reader::from_path(&path).with_context(|| {
            format!(
                "failed to open fasta file: {}",
                path.as_ref().to_string_lossy()
            )
        })?;

        while let Some(record) = reader.next() {
            let record = record.with_context(|| "failed to read fasta record")?;
            let mut header_bytes = record.head().to_vec();
            let first_space_idx = header_bytes.iter().position(|&b| b == UTF8_SPACE);

            let error_context: fn() -> &'static str =
                || "failed to create String from fasta header bytes";

            let (name, details) = match first_space_idx {
                Some(idx) => {
                    let details_bytes = header_bytes.split_off(idx + 1);
                    header_bytes.pop();
                    (
                        String::from_utf8(header_bytes).with_context(error_context)?,
                        Some(String::from_utf8(details_bytes).with_context(error_context)?),
                    )
                }
                None => (
                    String::from_utf8(header_bytes).with_context(error_context)?,
                    None,
                ),
            };

            let residues: Vec<u8> = record.seq_lines().flatten().copied().collect();

            let mut seq = Sequence::from_utf8(&residues)
                .with_context(|| format!("invalid fasta record: {name}"))?;
            seq.name = name;
            seq.details = details;

            seqs.push(seq);
        }
        Ok(seqs)
    }

    pub fn from_utf8(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(EmptySequenceError.into());
        }

        // We want position 1 of the sequence to be at index 1, so we'll buffer with 255
        let mut utf8_bytes: Vec<u8> = vec![PAD_BYTE; bytes.len() + 1];
        utf8_bytes[1..].copy_from_slice(bytes);
        let mut digital_bytes: Vec<u8> = vec![PAD_BYTE; utf8_bytes.len()];

        for (idx, utf8_byte) in utf8_bytes[1..].iter().enumerate() {
            digital_bytes[idx + 1] = digitize(*utf8_byte, idx + 1)?;
        }

        Ok(Sequence {
            name: "".to_string(),
            details: None,
            length: digital_bytes.len() - 1,
            digital_bytes,
            utf8_bytes,
        })
    }

    /// Produce a uniformly random nucleotide sequence.
    pub fn random(length: usize, rng: &mut impl Rng) -> Result<Self> {
        let bytes: Vec<u8> = (0..length)
            .map(|_| {
                let digital = rng.gen_range(0..NUCLEOTIDE_ALPHABET_SIZE) as u8;
                NUCLEOTIDE_INVERSE_MAP[&digital]
            })
            .collect();

        Sequence::from_utf8(&bytes)
    }

    /// The residues of the sequence, without the leading pad byte.
    pub fn residues(&self) -> &[u8] {
        &self.utf8_bytes[1..]
    }

    pub fn residue_string(&self) -> String {
        // the utf8 bytes were validated against the nucleotide map on construction
        String::from_utf8_lossy(self.residues()).into_owned()
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, ">{}", self.name)?;

        if let Some(ref details) = self.details {
            write!(f, " {details}")?
        };

        writeln!(f)?;

        let mut iter = self.residues().chunks(80).peekable();

        while let Some(byte_chunk) = iter.next() {
            match std::str::from_utf8(byte_chunk) {
                Ok(seq_line) => {
                    write!(f, "{}", seq_line)?;
                    if iter.peek().is_some() {
                        // if we're not on the last
                        // line, add a linebreak
                        writeln!(f)?;
                    }
                }
                Err(_) => return Err(std::fmt::Error),
            }
        }
        Ok(())
    }
}

impl Debug for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match std::str::from_utf8(self.residues()) {
            Ok(residues) => write!(f, "{residues}"),
            Err(_) => Err(std::fmt::Error),
        }
    }
}
