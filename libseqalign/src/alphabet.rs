use phf::phf_map;

pub const UTF8_SPACE: u8 = 32;
pub const UTF8_DASH: u8 = 45;
pub const UTF8_DOT: u8 = 46;
pub const UTF8_PIPE: u8 = 124;

/// The padding byte that sits at index 0 of every sequence byte vector.
pub const PAD_BYTE: u8 = 255;

/// The gap symbol; it is reserved and never appears in a raw sequence.
pub const GAP: u8 = UTF8_DASH;

/// The symbols tracked by a profile column, in digital order.
pub const NUCLEOTIDE_ALPHABET_WITH_GAP: [&str; 5] = ["A", "C", "G", "T", "-"];

pub const NUCLEOTIDE_ALPHABET_SIZE: usize = 4;
pub const PROFILE_ALPHABET_SIZE: usize = 5;

pub const DIGITAL_GAP: u8 = 4;

pub const UTF8_TO_DIGITAL_NUCLEOTIDE: phf::Map<u8, u8> = phf_map! {
    65u8 => 0,    // A
    67u8 => 1,    // C
    71u8 => 2,    // G
    84u8 => 3,    // T
};

/// Like `UTF8_TO_DIGITAL_NUCLEOTIDE`, but also maps the gap symbol.
///
/// This is the map used when reading rows of an already-aligned block.
pub const UTF8_TO_DIGITAL_ALIGNED: phf::Map<u8, u8> = phf_map! {
    65u8 => 0,    // A
    67u8 => 1,    // C
    71u8 => 2,    // G
    84u8 => 3,    // T
    45u8 => 4,    // -
};

pub const NUCLEOTIDE_INVERSE_MAP: phf::Map<u8, u8> = phf_map! {
    0u8  => 65,   // A
    1u8  => 67,   // C
    2u8  => 71,   // G
    3u8  => 84,   // T
    4u8  => 45,   // -
    255u8 => 32,  // space
};
