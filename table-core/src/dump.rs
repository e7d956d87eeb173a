//! Serializes a [`Table`] back to delimited text: one row per line,
//! terminated by `\n` (never `\r\n`, regardless of what the input used),
//! fields joined by the table's canonical delimiter.

use crate::table::Table;

/// Renders the whole table as delimited text.
pub fn dump(table: &Table) -> Vec<u8> {
    let mut out = Vec::new();
    for r in 0..table.rows() {
        let row = table.row(r);
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.push(table.delimiter());
            }
            out.extend_from_slice(cell);
        }
        out.push(b'\n');
    }
    out
}
