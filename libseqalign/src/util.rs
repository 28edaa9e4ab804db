use crate::alphabet::GAP;

#[cfg(test)]
#[ctor::ctor]
fn init_backtrace() {
    color_backtrace::install();
}

/// Remove every gap symbol from an aligned string.
pub fn strip_gaps(aligned: &str) -> String {
    aligned.chars().filter(|&c| c != GAP as char).collect()
}

/// Check that every row of a block of aligned strings has the same width.
///
/// All-gap columns are allowed. A sequence entering the block keeps the gaps
/// from its pairwise alignment, and the profile recurrence scores a gap like
/// any other symbol, so it can line one of those gaps up against gaps in every
/// other row.
pub fn is_rectangular_block<S: AsRef<str>>(block: &[S]) -> bool {
    match block.first() {
        Some(first) => {
            let width = first.as_ref().len();
            block.iter().all(|row| row.as_ref().len() == width)
        }
        None => true,
    }
}
