//! Data operators: `set`/`clear`/`swap`/`sum`/`avg`/`count`/`len`. Each acts
//! over every cell within the current selection, clamped to the table's
//! current dimensions.

use crate::error::{Error, Result};
use crate::interp::rect::Rect;
use crate::numeric;
use crate::parse::scan;
use crate::table::Table;

/// A `[R,C]` target reference as used by `swap`/`sum`/`avg`/`count`/`len`:
/// each component is a positive 1-based integer or `-` ("last").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RefTok {
    Num(usize),
    Dash,
}

fn parse_ref_component(s: &[u8]) -> Result<RefTok> {
    if s == b"-" {
        return Ok(RefTok::Dash);
    }
    let text = std::str::from_utf8(s)
        .map_err(|_| Error::NumericConversion(format!("not a number: {s:?}")))?;
    let n: usize = text
        .parse()
        .map_err(|_| Error::NumericConversion(format!("not a number: {text:?}")))?;
    if n == 0 {
        return Err(Error::InvalidArgument("indices are 1-based".into()));
    }
    Ok(RefTok::Num(n))
}

/// Parses a `[R,C]` argument into 0-based table coordinates.
pub fn parse_cell_ref(arg: &[u8], rows: usize, cols: usize) -> Result<(usize, usize)> {
    if !(arg.starts_with(b"[") && arg.ends_with(b"]")) {
        return Err(Error::InvalidArgument(
            "expected a [R,C] argument".to_string(),
        ));
    }
    let inner = &arg[1..arg.len() - 1];
    let parts = scan::split_all(inner, b',', false);
    if parts.len() != 2 {
        return Err(Error::InvalidArgument(format!(
            "expected [R,C], found {} component(s)",
            parts.len()
        )));
    }
    let r = parse_ref_component(parts[0])?;
    let c = parse_ref_component(parts[1])?;
    if rows == 0 || cols == 0 {
        return Err(Error::InvalidArgument("table has no rows or columns".into()));
    }
    let resolve = |t: RefTok, bound: usize| -> Result<usize> {
        match t {
            RefTok::Dash => Ok(bound - 1),
            RefTok::Num(n) if n <= bound => Ok(n - 1),
            RefTok::Num(n) => Err(Error::InvalidArgument(format!(
                "index {n} out of range 1..={bound}"
            ))),
        }
    };
    Ok((resolve(r, rows)?, resolve(c, cols)?))
}

pub fn set(table: &mut Table, current: &Rect, value: &[u8]) -> Result<()> {
    for (r, c) in current.clamped_cells(table.rows(), table.cols()) {
        table.set_cell(r, c, value)?;
    }
    Ok(())
}

pub fn clear(table: &mut Table, current: &Rect) -> Result<()> {
    set(table, current, b"")
}

pub fn swap(table: &mut Table, current: &Rect, target: (usize, usize)) -> Result<()> {
    for (r, c) in current.clamped_cells(table.rows(), table.cols()) {
        if (r, c) != target {
            table.swap_cell_contents((r, c), target);
        }
    }
    Ok(())
}

/// Shared walk for `sum`/`avg`: accumulates numeric-parseable cells in
/// row-major order, stopping at the first cell that fails to parse.
fn accumulate(table: &Table, current: &Rect) -> (f64, usize, bool) {
    let mut total = 0.0;
    let mut counted = 0usize;
    for (r, c) in current.clamped_cells(table.rows(), table.cols()) {
        match numeric::parse_numeric(table.cell(r, c)) {
            Some(v) => {
                total += v;
                counted += 1;
            }
            None => return (total, counted, true),
        }
    }
    (total, counted, false)
}

pub fn sum(table: &mut Table, current: &Rect, target: (usize, usize)) -> Result<()> {
    let (total, _, failed) = accumulate(table, current);
    let text = if failed {
        "NaN".to_string()
    } else {
        numeric::format_numeric(total)
    };
    table.set_cell(target.0, target.1, text.as_bytes())
}

pub fn avg(table: &mut Table, current: &Rect, target: (usize, usize)) -> Result<()> {
    let (total, counted, failed) = accumulate(table, current);
    let text = if failed {
        "NaN".to_string()
    } else if counted == 0 {
        "NaN".to_string()
    } else {
        numeric::format_numeric(total / counted as f64)
    };
    table.set_cell(target.0, target.1, text.as_bytes())
}

pub fn count(table: &mut Table, current: &Rect, target: (usize, usize)) -> Result<()> {
    let n = current
        .clamped_cells(table.rows(), table.cols())
        .into_iter()
        .filter(|&(r, c)| !table.cell(r, c).is_empty())
        .count();
    table.set_cell(target.0, target.1, numeric::format_numeric(n as f64).as_bytes())
}

pub fn len(table: &mut Table, current: &Rect, target: (usize, usize)) -> Result<()> {
    let r2 = current.r2.min(table.rows().saturating_sub(1));
    let c2 = current.c2.min(table.cols().saturating_sub(1));
    let n = table.cell(r2, c2).len();
    table.set_cell(target.0, target.1, numeric::format_numeric(n as f64).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        let mut t = Table::new(b',');
        t.append_row(vec![b"1".to_vec(), b"2".to_vec(), b"3".to_vec()])
            .unwrap();
        t.append_row(vec![b"4".to_vec(), b"5".to_vec(), b"6".to_vec()])
            .unwrap();
        t
    }

    #[test]
    fn set_and_clear_fill_selection() {
        let mut t = table();
        let rect = Rect { r1: 0, c1: 0, r2: 1, c2: 1 };
        set(&mut t, &rect, b"X").unwrap();
        assert_eq!(t.cell(0, 0), b"X");
        assert_eq!(t.cell(1, 1), b"X");
        assert_eq!(t.cell(0, 2), b"3");
        clear(&mut t, &rect).unwrap();
        assert_eq!(t.cell(0, 0), b"");
    }

    #[test]
    fn sum_writes_total_and_stops_on_nan() {
        let mut t = table();
        let rect = Rect { r1: 0, c1: 0, r2: 1, c2: 2 };
        sum(&mut t, &rect, (0, 0)).unwrap();
        assert_eq!(t.cell(0, 0), b"21");

        let mut t2 = table();
        t2.set_cell(0, 1, b"oops").unwrap();
        let rect2 = Rect { r1: 0, c1: 0, r2: 1, c2: 2 };
        sum(&mut t2, &rect2, (0, 0)).unwrap();
        assert_eq!(t2.cell(0, 0), b"NaN");
    }

    #[test]
    fn avg_divides_by_scanned_count() {
        let mut t = table();
        let rect = Rect { r1: 0, c1: 0, r2: 1, c2: 2 };
        avg(&mut t, &rect, (0, 0)).unwrap();
        assert_eq!(t.cell(0, 0), b"3.5");
    }

    #[test]
    fn count_counts_nonempty_cells() {
        let mut t = table();
        t.set_cell(0, 0, b"").unwrap();
        let rect = Rect { r1: 0, c1: 0, r2: 1, c2: 2 };
        count(&mut t, &rect, (1, 2)).unwrap();
        assert_eq!(t.cell(1, 2), b"5");
    }

    #[test]
    fn len_reads_bottom_right_cell() {
        let mut t = table();
        t.set_cell(1, 2, b"hello").unwrap();
        let rect = Rect { r1: 0, c1: 0, r2: 1, c2: 2 };
        len(&mut t, &rect, (0, 0)).unwrap();
        assert_eq!(t.cell(0, 0), b"5");
    }

    #[test]
    fn swap_pairwise_exchanges_with_live_target() {
        let mut t = Table::new(b',');
        t.append_row(vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()])
            .unwrap();
        let rect = Rect { r1: 0, c1: 0, r2: 0, c2: 2 };
        // target is (0,1) == "b"; visiting (0,0) then (0,2) in row-major order.
        swap(&mut t, &rect, (0, 1)).unwrap();
        // after swapping (0,0)<->target: (0,0)="b", target="a"
        // after swapping (0,2)<->target: (0,2)="a", target="c"
        assert_eq!(t.cell(0, 0), b"b");
        assert_eq!(t.cell(0, 1), b"c");
        assert_eq!(t.cell(0, 2), b"a");
    }

    #[test]
    fn cell_ref_resolves_dash_as_last() {
        let (r, c) = parse_cell_ref(b"[-,-]", 3, 4).unwrap();
        assert_eq!((r, c), (2, 3));
    }
}
