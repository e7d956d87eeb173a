//! The selector grammar: parses a `[...]` bracket's stripped content and
//! applies it against the current/saved selection rectangles.

use bstr::ByteSlice;

use crate::error::{Error, Result};
use crate::interp::rect::Rect;
use crate::numeric;
use crate::parse::scan;
use crate::table::Table;

/// One component of a `R,C`/`R1,C1,R2,C2` selector: a 1-based positive
/// integer, `-` ("last"), or `_` ("all").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tok {
    Num(usize),
    Dash,
    Underscore,
}

fn parse_component(s: &[u8]) -> Result<Tok> {
    match s {
        b"-" => Ok(Tok::Dash),
        b"_" => Ok(Tok::Underscore),
        _ => {
            let text = std::str::from_utf8(s)
                .map_err(|_| Error::NumericConversion(format!("not a number: {:?}", s.as_bstr())))?;
            let n: usize = text
                .parse()
                .map_err(|_| Error::NumericConversion(format!("not a number: {text:?}")))?;
            if n == 0 {
                return Err(Error::MalformedSelector("indices are 1-based".into()));
            }
            Ok(Tok::Num(n))
        }
    }
}

/// A parsed but unresolved selector expression, stripped of its brackets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorOp {
    Rect2(Tok2),
    Rect4(Tok4),
    RestoreSaved,
    SaveCurrent,
    Find(Vec<u8>),
    Min,
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tok2(Tok, Tok);
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tok4(Tok, Tok, Tok, Tok);

fn trim(s: &[u8]) -> &[u8] {
    s.trim_start_with(|c| c.is_whitespace())
        .trim_end_with(|c| c.is_whitespace())
}

/// Parses the content of a `[...]` selector, with the brackets already
/// stripped.
pub fn parse(content: &[u8]) -> Result<SelectorOp> {
    let content = trim(content);
    if content == b"_" {
        return Ok(SelectorOp::RestoreSaved);
    }
    if content == b"set" {
        return Ok(SelectorOp::SaveCurrent);
    }
    if content == b"min" {
        return Ok(SelectorOp::Min);
    }
    if content == b"max" {
        return Ok(SelectorOp::Max);
    }
    if let Some(needle) = content.strip_prefix(b"find ") {
        return Ok(SelectorOp::Find(needle.to_vec()));
    }

    let parts = scan::split_all(content, b',', false);
    match parts.len() {
        2 => Ok(SelectorOp::Rect2(Tok2(
            parse_component(parts[0])?,
            parse_component(parts[1])?,
        ))),
        4 => Ok(SelectorOp::Rect4(Tok4(
            parse_component(parts[0])?,
            parse_component(parts[1])?,
            parse_component(parts[2])?,
            parse_component(parts[3])?,
        ))),
        _ => Err(Error::MalformedSelector(format!(
            "expected 2 or 4 comma-separated components, found {}",
            parts.len()
        ))),
    }
}

fn validate_range(n: usize, bound: usize, what: &str) -> Result<usize> {
    if n < 1 || n > bound {
        return Err(Error::MalformedSelector(format!(
            "{what} {n} out of range 1..={bound}"
        )));
    }
    Ok(n - 1)
}

fn require_nonempty(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(Error::MalformedSelector("table has no rows or columns".into()));
    }
    Ok(())
}

fn resolve_rect2(Tok2(a, b): Tok2, rows: usize, cols: usize) -> Result<Rect> {
    require_nonempty(rows, cols)?;
    use Tok::*;
    let rect = match (a, b) {
        (Num(r), Num(c)) => {
            let r = validate_range(r, rows, "row")?;
            let c = validate_range(c, cols, "column")?;
            Rect::single(r, c)
        }
        (Num(r), Underscore) => {
            let r = validate_range(r, rows, "row")?;
            Rect { r1: r, c1: 0, r2: r, c2: cols - 1 }
        }
        (Num(r), Dash) => {
            let r = validate_range(r, rows, "row")?;
            Rect::single(r, cols - 1)
        }
        (Underscore, Num(c)) => {
            let c = validate_range(c, cols, "column")?;
            Rect { r1: 0, c1: c, r2: rows - 1, c2: c }
        }
        (Dash, Num(c)) => {
            let c = validate_range(c, cols, "column")?;
            Rect::single(rows - 1, c)
        }
        (Underscore, Underscore) => Rect { r1: 0, c1: 0, r2: rows - 1, c2: cols - 1 },
        (Dash, Dash) => Rect::single(rows - 1, cols - 1),
        (Underscore, Dash) => Rect { r1: 0, c1: cols - 1, r2: rows - 1, c2: cols - 1 },
        (Dash, Underscore) => Rect { r1: rows - 1, c1: 0, r2: rows - 1, c2: cols - 1 },
    };
    Ok(rect)
}

fn resolve_rect4(Tok4(r1, c1, r2, c2): Tok4, rows: usize, cols: usize) -> Result<Rect> {
    require_nonempty(rows, cols)?;
    let resolve_row = |t: Tok| -> Result<usize> {
        match t {
            Tok::Num(n) => validate_range(n, rows, "row"),
            Tok::Dash => Ok(rows - 1),
            Tok::Underscore => Err(Error::MalformedSelector(
                "`_` is not allowed in a 4-component rectangle".into(),
            )),
        }
    };
    let resolve_col = |t: Tok| -> Result<usize> {
        match t {
            Tok::Num(n) => validate_range(n, cols, "column"),
            Tok::Dash => Ok(cols - 1),
            Tok::Underscore => Err(Error::MalformedSelector(
                "`_` is not allowed in a 4-component rectangle".into(),
            )),
        }
    };
    let r1 = resolve_row(r1)?;
    let c1 = resolve_col(c1)?;
    let r2 = resolve_row(r2)?;
    let c2 = resolve_col(c2)?;
    if r1 > r2 || c1 > c2 {
        return Err(Error::MalformedSelector(format!(
            "rectangle corners out of order: ({r1},{c1}) .. ({r2},{c2})"
        )));
    }
    Ok(Rect { r1, c1, r2, c2 })
}

/// Applies a parsed selector against the table and the current/saved
/// selection rectangles. Returns a diagnostic message for `find`/`min`/`max`
/// when they fail to match — never an error — so the caller can print it to
/// stdout per the warning policy.
pub fn apply(
    op: &SelectorOp,
    table: &Table,
    current: &mut Rect,
    saved: &mut Rect,
) -> Result<Option<String>> {
    match op {
        SelectorOp::Rect2(tok2) => {
            *current = resolve_rect2(*tok2, table.rows(), table.cols())?;
            Ok(None)
        }
        SelectorOp::Rect4(tok4) => {
            *current = resolve_rect4(*tok4, table.rows(), table.cols())?;
            Ok(None)
        }
        SelectorOp::RestoreSaved => {
            *current = *saved;
            Ok(None)
        }
        SelectorOp::SaveCurrent => {
            *saved = *current;
            Ok(None)
        }
        SelectorOp::Find(needle) => {
            for (r, c) in current.clamped_cells(table.rows(), table.cols()) {
                if table.cell(r, c).starts_with(needle.as_slice()) {
                    *current = Rect::single(r, c);
                    return Ok(None);
                }
            }
            Ok(Some(format!(
                "find: no cell in the current selection starts with {:?}",
                needle.as_bstr()
            )))
        }
        SelectorOp::Min => Ok(extremum(table, current, |a, b| a < b)),
        SelectorOp::Max => Ok(extremum(table, current, |a, b| a > b)),
    }
}

/// Shared implementation of `min`/`max`: `better(candidate, current_best)`
/// decides whether `candidate` replaces the running best. Ties keep the
/// first cell found in row-major order, since `better` is called with
/// strict comparison.
fn extremum(table: &Table, current: &mut Rect, better: impl Fn(f64, f64) -> bool) -> Option<String> {
    let mut best: Option<(f64, usize, usize)> = None;
    for (r, c) in current.clamped_cells(table.rows(), table.cols()) {
        let content = numeric::trim_one_quote_pair(table.cell(r, c));
        let Some(value) = numeric::parse_numeric(content) else {
            continue;
        };
        match best {
            Some((b, _, _)) if !better(value, b) => {}
            _ => best = Some((value, r, c)),
        }
    }
    match best {
        Some((_, r, c)) => {
            *current = Rect::single(r, c);
            None
        }
        None => Some("no cell in the current selection parses as a number".to_string()),
    }
}
