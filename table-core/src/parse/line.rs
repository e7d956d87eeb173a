//! Normalizes a single input line into a row of cells, and drives the
//! whole-table load from raw file bytes.

use crate::error::Result;
use crate::parse::scan;
use crate::table::{Row, Table};

/// Strips a trailing `\n` and, if present, a trailing `\r` before it.
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Replaces every non-quoted, non-escaped occurrence of a secondary
/// delimiter with the primary (canonical) delimiter. Quotes and escapes in
/// the line are otherwise left untouched.
fn normalize_delimiters(line: &[u8], delimiters: &[u8]) -> Vec<u8> {
    let primary = delimiters[0];
    let secondary = &delimiters[1..];
    scan::QuoteScan::new(line)
        .map(|item| {
            if !item.in_quote && !item.escaped && secondary.contains(&item.byte) {
                primary
            } else {
                item.byte
            }
        })
        .collect()
}

/// Splits one already-delimiter-normalized line into cells, verbatim (quotes
/// and escapes preserved, no unquoting).
pub fn parse_line(line: &[u8], primary: u8) -> Row {
    let n = scan::count(line, primary, false);
    (0..=n)
        .map(|i| scan::split(line, primary, i, false, false).0.to_vec())
        .collect()
}

/// Loads an entire table from raw file bytes: splits into lines, normalizes
/// delimiters and line endings, parses each line into cells, then runs shape
/// normalization.
pub fn load_table(data: &[u8], delimiters: &[u8]) -> Result<Table> {
    let primary = delimiters[0];
    let mut table = Table::new(primary);

    // Walk line boundaries with `memchr` rather than a byte-by-byte split
    // closure; `data` is typically dominated by ordinary cell bytes, so
    // skipping straight to each `\n` is the cheaper scan.
    let mut start = 0;
    let mut next_nl = memchr::memchr(b'\n', data);
    while let Some(nl) = next_nl {
        load_line(&mut table, &data[start..nl], delimiters)?;
        start = nl + 1;
        next_nl = memchr::memchr(b'\n', &data[start..]).map(|p| p + start);
    }
    // A final, unterminated line is loaded only if it holds any bytes;
    // a trailing `\n` must not produce a spurious last row.
    if start < data.len() {
        load_line(&mut table, &data[start..], delimiters)?;
    }

    table.normalize_shape()?;
    Ok(table)
}

fn load_line(table: &mut Table, raw: &[u8], delimiters: &[u8]) -> Result<()> {
    let stripped = strip_line_ending(raw);
    let normalized = normalize_delimiters(stripped, delimiters);
    let row = parse_line(&normalized, delimiters[0]);
    table.append_row(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_simple_csv() {
        let t = load_table(b"a,b,c\nd,e,f\n", b",").unwrap();
        assert_eq!(t.rows(), 2);
        assert_eq!(t.cols(), 3);
        assert_eq!(t.cell(1, 2), b"f");
    }

    #[test]
    fn strips_crlf_and_trailing_newline() {
        let t = load_table(b"a,b\r\nc,d\r\n", b",").unwrap();
        assert_eq!(t.rows(), 2);
        assert_eq!(t.cell(0, 1), b"b");
    }

    #[test]
    fn quoted_delimiter_does_not_split() {
        let t = load_table(b"a,\"b,c\",d\n", b",").unwrap();
        assert_eq!(t.cols(), 3);
        assert_eq!(t.cell(0, 1), b"\"b,c\"");
    }

    #[test]
    fn secondary_delimiters_normalize_to_primary() {
        let t = load_table(b"a;b,c\n", b",;").unwrap();
        assert_eq!(t.cols(), 3);
        assert_eq!(t.cell(0, 0), b"a");
    }

    #[test]
    fn no_trailing_row_from_final_newline() {
        let t = load_table(b"a,b\n", b",").unwrap();
        assert_eq!(t.rows(), 1);
    }
}
