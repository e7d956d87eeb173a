//! The temp-variable store: ten numbered string slots, addressed as
//! `_0`..`_9`, with `def`/`use`/`inc`.

use crate::error::{Error, Result};
use crate::interp::ops;
use crate::interp::rect::Rect;
use crate::numeric;
use crate::table::Table;

pub const SLOT_COUNT: usize = 10;

/// A fixed array of 10 slots, each either empty or an owned byte string.
#[derive(Debug, Clone, Default)]
pub struct TempVars {
    slots: [Option<Vec<u8>>; SLOT_COUNT],
}

impl TempVars {
    pub fn new() -> TempVars {
        TempVars::default()
    }
}

/// Parses a `_N` argument (shared by `def`/`use`/`inc`): the leading `_`
/// sigil is stripped, and the remainder must parse as an integer in 0..=9.
pub fn parse_slot(arg: &[u8]) -> Result<usize> {
    if arg.first() != Some(&b'_') {
        return Err(Error::InvalidArgument(
            "expected a _N temp-variable argument".to_string(),
        ));
    }
    let rest = &arg[1..];
    let text = std::str::from_utf8(rest)
        .map_err(|_| Error::NumericConversion(format!("not a number: {rest:?}")))?;
    let n: usize = text
        .parse()
        .map_err(|_| Error::NumericConversion(format!("not a number: {text:?}")))?;
    if n >= SLOT_COUNT {
        return Err(Error::InvalidArgument(format!(
            "slot {n} out of range 0..={}",
            SLOT_COUNT - 1
        )));
    }
    Ok(n)
}

/// `def _N` — copies the content of the single selected cell into slot N.
/// Requires the current selection to be exactly one cell.
pub fn def(table: &Table, current: &Rect, vars: &mut TempVars, slot: usize) -> Result<()> {
    if !current.is_single_cell() {
        return Err(Error::InvalidArgument(
            "def requires a single-cell selection".to_string(),
        ));
    }
    // Row/column ops never touch the selection rectangle itself, so by the
    // time `def` runs it may point past a table that has since shrunk; clamp
    // at the boundary the same way `ops::len` clamps its bottom-right corner.
    let r = current.r1.min(table.rows().saturating_sub(1));
    let c = current.c1.min(table.cols().saturating_sub(1));
    vars.slots[slot] = Some(table.cell(r, c).clone());
    Ok(())
}

/// `use _N` — writes slot N's value into every cell of the current
/// selection. A silent no-op if the slot is empty.
pub fn use_var(table: &mut Table, current: &Rect, vars: &TempVars, slot: usize) -> Result<()> {
    match &vars.slots[slot] {
        Some(value) => ops::set(table, current, value),
        None => Ok(()),
    }
}

/// `inc _N` — increments slot N's value by one, formatting as an integer
/// when the result has no fractional part. An empty or non-numeric slot
/// becomes `"1"`.
pub fn inc(vars: &mut TempVars, slot: usize) -> Result<()> {
    let next = match vars.slots[slot].as_deref().and_then(numeric::parse_numeric) {
        Some(v) => numeric::format_numeric(v + 1.0),
        None => "1".to_string(),
    };
    vars.slots[slot] = Some(next.into_bytes());
    Ok(())
}
