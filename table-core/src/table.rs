//! The owning 2-D container: cells, rows, and the table that holds them.
//!
//! The rectangular invariant — every row has the same number of cells — is
//! established once by [`Table::normalize_shape`] after load and must be
//! preserved by every mutation afterward. `Vec`'s own growth strategy stands
//! in for the source's hand-rolled `allocate_rows`/`allocate_cells`; the only
//! thing we add on top is mapping an allocation failure to
//! [`Error::Allocation`] instead of aborting the process, since `spec.md`
//! treats it as a recoverable, command-fatal error rather than a panic.

use crate::error::{Error, Result};

/// A single cell: an owned, variable-length byte string. No typing — numeric
/// interpretation happens on demand in the data operators.
pub type Cell = Vec<u8>;

/// An ordered sequence of cells.
pub type Row = Vec<Cell>;

/// An ordered sequence of rows, plus the delimiter byte used on output.
#[derive(Debug, Clone)]
pub struct Table {
    rows: Vec<Row>,
    delimiter: u8,
}

fn try_reserve_one<T>(v: &mut Vec<T>) -> Result<()> {
    if v.len() == v.capacity() {
        v.try_reserve(1)
            .map_err(|e| Error::Allocation(e.to_string()))?;
    }
    Ok(())
}

impl Table {
    pub fn new(delimiter: u8) -> Table {
        Table {
            rows: Vec::new(),
            delimiter,
        }
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// The table's column count, i.e. the length of its first row. Zero if
    /// the table has no rows.
    pub fn cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn row(&self, r: usize) -> &Row {
        &self.rows[r]
    }

    pub fn row_mut(&mut self, r: usize) -> &mut Row {
        &mut self.rows[r]
    }

    pub fn cell(&self, r: usize, c: usize) -> &Cell {
        &self.rows[r][c]
    }

    pub fn cell_mut(&mut self, r: usize, c: usize) -> &mut Cell {
        &mut self.rows[r][c]
    }

    /// Replaces a cell's content with a copy of `s`.
    pub fn set_cell(&mut self, r: usize, c: usize, s: &[u8]) -> Result<()> {
        let cell = self.cell_mut(r, c);
        cell.clear();
        cell.try_reserve(s.len())
            .map_err(|e| Error::Allocation(e.to_string()))?;
        cell.extend_from_slice(s);
        Ok(())
    }

    /// Appends an empty cell to `row`, growing its backing array.
    pub fn append_empty_cell(row: &mut Row) -> Result<()> {
        try_reserve_one(row)?;
        row.push(Vec::new());
        Ok(())
    }

    /// Appends a fully-formed row as produced by the line parser. Used only
    /// during load, before the rectangular invariant is established.
    pub fn append_row(&mut self, row: Row) -> Result<()> {
        try_reserve_one(&mut self.rows)?;
        self.rows.push(row);
        Ok(())
    }

    /// Inserts an empty row (every cell empty, width equal to the table's
    /// current column count) at index `at`, shifting later rows down.
    pub fn insert_empty_row(&mut self, at: usize) -> Result<()> {
        let width = self.cols();
        let mut row = Vec::new();
        row.try_reserve(width)
            .map_err(|e| Error::Allocation(e.to_string()))?;
        row.resize(width, Vec::new());
        try_reserve_one(&mut self.rows)?;
        self.rows.insert(at.min(self.rows.len()), row);
        Ok(())
    }

    /// Deletes rows `r1..=r2` inclusive, clamped to the last row.
    pub fn delete_rows(&mut self, r1: usize, r2: usize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        let r2 = r2.min(last);
        if r1 > r2 {
            return;
        }
        self.rows.drain(r1..=r2);
    }

    /// Inserts an empty column at index `at` in every row.
    pub fn insert_empty_col(&mut self, at: usize) -> Result<()> {
        for row in &mut self.rows {
            try_reserve_one(row)?;
            row.insert(at.min(row.len()), Vec::new());
        }
        Ok(())
    }

    /// Deletes columns `c1..=c2` inclusive in every row.
    pub fn delete_cols(&mut self, c1: usize, c2: usize) {
        for row in &mut self.rows {
            if row.is_empty() {
                continue;
            }
            let last = row.len() - 1;
            let c2 = c2.min(last);
            if c1 > c2 {
                continue;
            }
            row.drain(c1..=c2);
        }
    }

    /// Pads every row to the widest row's length, then trims trailing
    /// all-empty columns (stopping at the first non-all-empty column from
    /// the right; column 0 is never trimmed). Idempotent.
    pub fn normalize_shape(&mut self) -> Result<()> {
        let width = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut self.rows {
            if row.len() < width {
                row.try_reserve(width - row.len())
                    .map_err(|e| Error::Allocation(e.to_string()))?;
                row.resize(width, Vec::new());
            }
        }
        let mut trim_from = width;
        while trim_from > 1 {
            let col = trim_from - 1;
            let all_empty = self.rows.iter().all(|row| row[col].is_empty());
            if !all_empty {
                break;
            }
            for row in &mut self.rows {
                row.remove(col);
            }
            trim_from -= 1;
        }
        Ok(())
    }

    /// Exchanges the contents of two cells. A no-op if `a == b`.
    pub fn swap_cell_contents(&mut self, a: (usize, usize), b: (usize, usize)) {
        if a == b {
            return;
        }
        let a_val = std::mem::take(self.cell_mut(a.0, a.1));
        let b_val = std::mem::replace(self.cell_mut(b.0, b.1), a_val);
        *self.cell_mut(a.0, a.1) = b_val;
    }

    /// Debug-only check of the rectangular invariant.
    pub fn is_rectangular(&self) -> bool {
        let width = self.cols();
        self.rows.iter().all(|row| row.len() == width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_from(rows: &[&[&[u8]]]) -> Table {
        let mut t = Table::new(b',');
        for row in rows {
            t.append_row(row.iter().map(|c| c.to_vec()).collect())
                .unwrap();
        }
        t
    }

    #[test]
    fn normalize_pads_short_rows() {
        let mut t = table_from(&[&[b"a", b"b"], &[b"c"]]);
        t.normalize_shape().unwrap();
        assert_eq!(t.cols(), 2);
        assert_eq!(t.cell(1, 1), b"");
    }

    #[test]
    fn normalize_trims_trailing_empty_columns_but_not_column_zero() {
        let mut t = table_from(&[&[b"", b"", b""], &[b"", b"", b""]]);
        t.normalize_shape().unwrap();
        assert_eq!(t.cols(), 1);
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut t = table_from(&[&[b"a", b""], &[b"b", b"c"]]);
        t.normalize_shape().unwrap();
        let before = t.clone();
        t.normalize_shape().unwrap();
        assert_eq!(before.rows.len(), t.rows.len());
        assert_eq!(before.cols(), t.cols());
    }

    #[test]
    fn insert_and_delete_row_preserve_rectangle() {
        let mut t = table_from(&[&[b"a", b"b"], &[b"c", b"d"]]);
        t.insert_empty_row(1).unwrap();
        assert_eq!(t.rows(), 3);
        assert!(t.is_rectangular());
        t.delete_rows(1, 1);
        assert_eq!(t.rows(), 2);
        assert!(t.is_rectangular());
    }

    #[test]
    fn swap_cell_contents_exchanges_values() {
        let mut t = table_from(&[&[b"a", b"b"]]);
        t.swap_cell_contents((0, 0), (0, 1));
        assert_eq!(t.cell(0, 0), b"b");
        assert_eq!(t.cell(0, 1), b"a");
    }

    #[test]
    fn insert_and_delete_col_preserve_rectangle() {
        let mut t = table_from(&[&[b"a", b"b"], &[b"c", b"d"]]);
        t.insert_empty_col(0).unwrap();
        assert_eq!(t.cols(), 3);
        assert!(t.is_rectangular());
        t.delete_cols(0, 0);
        assert_eq!(t.cols(), 2);
        assert!(t.is_rectangular());
    }
}
