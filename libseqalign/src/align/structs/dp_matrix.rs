use std::fmt::Display;
use std::io::Write;

use anyhow::Result;

/// A dense dynamic programming matrix stored as a flat, row-major vector.
///
/// The matrix has `(rows + 1) * (cols + 1)` cells: row 0 and column 0 are the
/// boundary cells, and cell (i, j) describes the length-i prefix of the first
/// sequence (or profile) against the length-j prefix of the second.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct DpMatrix<T> {
    pub rows: usize,
    pub cols: usize,
    /// The cells as a flat vector.
    ///
    /// It's stored in the following pattern:
    /// ```text
    ///     [
    ///
    ///         c_(0, 0), c_(0, 1), ..., c_(0, C),
    ///         c_(1, 0), c_(1, 1), ..., c_(1, C),
    ///         ...
    ///         c_(R, 0), c_(R, 1), ..., c_(R, C)
    ///
    ///     ]
    /// ```
    ///
    /// where:
    ///
    /// ```text
    ///     R:        <rows>
    ///     C:        <cols>
    ///     c_(i, j): the value at cell (i, j)
    /// ```
    ///
    pub data: Vec<T>,
}

/// The integer score matrix shared by every aligner.
pub type ScoreMatrix = DpMatrix<isize>;

impl<T: Copy> DpMatrix<T> {
    pub fn new(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; (rows + 1) * (cols + 1)],
        }
    }

    #[inline]
    pub fn get(&self, row_idx: usize, col_idx: usize) -> T {
        debug_assert!(row_idx <= self.rows);
        debug_assert!(col_idx <= self.cols);
        self.data[row_idx * (self.cols + 1) + col_idx]
    }

    #[inline]
    pub fn set(&mut self, row_idx: usize, col_idx: usize, value: T) {
        debug_assert!(row_idx <= self.rows);
        debug_assert!(col_idx <= self.cols);
        self.data[row_idx * (self.cols + 1) + col_idx] = value;
    }

    /// The value in the bottom-right cell.
    pub fn last(&self) -> T {
        self.get(self.rows, self.cols)
    }
}

impl<T: Copy + Display> DpMatrix<T> {
    pub fn dump(&self, out: &mut impl Write) -> Result<()> {
        let row_idx_width = self.rows.to_string().len();
        let column_width = self
            .data
            .iter()
            .map(|value| value.to_string().len())
            .max()
            .unwrap_or(1)
            .max(self.cols.to_string().len());

        // write the column indices
        write!(out, "{}", " ".repeat(row_idx_width + 1))?;
        for col_idx in 0..=self.cols {
            write!(out, "{:>w$} ", col_idx, w = column_width)?;
        }
        writeln!(out)?;

        write!(out, "{}", " ".repeat(row_idx_width + 1))?;
        for _ in 0..=self.cols {
            write!(out, "{} ", "-".repeat(column_width))?;
        }
        writeln!(out)?;

        for row_idx in 0..=self.rows {
            write!(out, "{:w$} ", row_idx, w = row_idx_width)?;
            for col_idx in 0..=self.cols {
                write!(
                    out,
                    "{:>w$} ",
                    self.get(row_idx, col_idx).to_string(),
                    w = column_width
                )?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dp_matrix_get_set() {
        let mut reference = [[0isize; 4]; 6];
        let mut matrix = ScoreMatrix::new(5, 3, 0);

        (0..=5).for_each(|row| {
            (0..=3).for_each(|col| {
                let value = (row * 10 + col) as isize;
                reference[row][col] = value;
                matrix.set(row, col, value);
            });
        });

        (0..=5).for_each(|row| {
            (0..=3).for_each(|col| {
                assert_eq!(matrix.get(row, col), reference[row][col]);
            });
        });

        assert_eq!(matrix.data.len(), 24);
        assert_eq!(matrix.last(), 53);
    }

    #[test]
    fn test_dump() -> Result<()> {
        let mut matrix = ScoreMatrix::new(1, 2, 0);
        matrix.set(0, 1, -1);
        matrix.set(0, 2, -2);
        matrix.set(1, 0, -1);
        matrix.set(1, 1, 1);
        matrix.set(1, 2, 0);

        let mut out: Vec<u8> = vec![];
        matrix.dump(&mut out)?;

        let expected = concat!(
            "   0  1  2 \n",
            "  -- -- -- \n",
            "0  0 -1 -2 \n",
            "1 -1  1  0 \n",
        );
        assert_eq!(String::from_utf8(out)?, expected);
        Ok(())
    }
}
