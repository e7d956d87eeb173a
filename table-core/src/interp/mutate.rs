//! The mutation engine: `irow`/`arow`/`drow`/`icol`/`acol`/`dcol`, each
//! relative to the current selection. None of these touch the selection
//! rectangle itself — later commands may see it point past the table
//! boundary, which is fine, since every reader clamps.

use crate::error::Result;
use crate::interp::rect::Rect;
use crate::table::Table;

pub fn irow(table: &mut Table, current: &Rect) -> Result<()> {
    table.insert_empty_row(current.r1)
}

pub fn arow(table: &mut Table, current: &Rect) -> Result<()> {
    let at = if current.r2 + 1 >= table.rows() {
        table.rows()
    } else {
        current.r2 + 1
    };
    table.insert_empty_row(at)
}

pub fn drow(table: &mut Table, current: &Rect) {
    table.delete_rows(current.r1, current.r2)
}

pub fn icol(table: &mut Table, current: &Rect) -> Result<()> {
    table.insert_empty_col(current.c1)
}

pub fn acol(table: &mut Table, current: &Rect) -> Result<()> {
    let at = if current.c2 + 1 >= table.cols() {
        table.cols()
    } else {
        current.c2 + 1
    };
    table.insert_empty_col(at)
}

pub fn dcol(table: &mut Table, current: &Rect) {
    table.delete_cols(current.c1, current.c2)
}
