//! Drives command execution: for each tokenized command, the selector
//! evaluator updates the selection state, or the mutation engine/data
//! operators/temp-variable store act on the table under the current
//! selection.

use tracing::{debug, warn};

use crate::error::Result;
use crate::interp::command::{self, Command};
use crate::interp::ops;
use crate::interp::rect::Rect;
use crate::interp::vars::TempVars;
use crate::interp::{mutate, selector};
use crate::parse::tokenize::RawCommand;
use crate::table::Table;

/// Owns the table and every piece of interpreter state for the lifetime of a
/// command execution phase: the current and saved selection rectangles and
/// the ten temp-variable slots. Nothing here is shared or observable from
/// outside the run.
pub struct Interpreter {
    pub table: Table,
    current: Rect,
    saved: Rect,
    vars: TempVars,
}

impl Interpreter {
    pub fn new(table: Table) -> Interpreter {
        Interpreter {
            table,
            current: Rect::ORIGIN,
            saved: Rect::ORIGIN,
            vars: TempVars::new(),
        }
    }

    pub fn current_selection(&self) -> Rect {
        self.current
    }

    /// Runs every command in order. Stops and propagates the first error,
    /// leaving the table in whatever state it reached — the caller must not
    /// write the output file when this returns `Err`. Selector warnings
    /// (`find`/`min`/`max` with no match) are diagnostics, not errors; they
    /// are logged and collected for the caller to print to stdout.
    pub fn run(&mut self, commands: &[RawCommand]) -> Result<Vec<String>> {
        let mut diagnostics = Vec::new();
        for raw in commands {
            let command = command::resolve(raw)?;
            debug!(?command, "executing command");
            if let Some(message) = self.run_one(&command)? {
                warn!(%message, "selector warning");
                diagnostics.push(message);
            }
            debug_assert!(
                self.table.is_rectangular(),
                "rectangular invariant violated after command"
            );
        }
        Ok(diagnostics)
    }

    fn run_one(&mut self, command: &Command) -> Result<Option<String>> {
        match command {
            Command::Selector(op) => {
                selector::apply(op, &self.table, &mut self.current, &mut self.saved)
            }
            Command::Irow => mutate::irow(&mut self.table, &self.current).map(|_| None),
            Command::Arow => mutate::arow(&mut self.table, &self.current).map(|_| None),
            Command::Drow => {
                mutate::drow(&mut self.table, &self.current);
                Ok(None)
            }
            Command::Icol => mutate::icol(&mut self.table, &self.current).map(|_| None),
            Command::Acol => mutate::acol(&mut self.table, &self.current).map(|_| None),
            Command::Dcol => {
                mutate::dcol(&mut self.table, &self.current);
                Ok(None)
            }
            Command::Set(value) => ops::set(&mut self.table, &self.current, value).map(|_| None),
            Command::Clear => ops::clear(&mut self.table, &self.current).map(|_| None),
            Command::Swap(arg) => {
                let target = ops::parse_cell_ref(arg, self.table.rows(), self.table.cols())?;
                ops::swap(&mut self.table, &self.current, target).map(|_| None)
            }
            Command::Sum(arg) => {
                let target = ops::parse_cell_ref(arg, self.table.rows(), self.table.cols())?;
                ops::sum(&mut self.table, &self.current, target).map(|_| None)
            }
            Command::Avg(arg) => {
                let target = ops::parse_cell_ref(arg, self.table.rows(), self.table.cols())?;
                ops::avg(&mut self.table, &self.current, target).map(|_| None)
            }
            Command::Count(arg) => {
                let target = ops::parse_cell_ref(arg, self.table.rows(), self.table.cols())?;
                ops::count(&mut self.table, &self.current, target).map(|_| None)
            }
            Command::Len(arg) => {
                let target = ops::parse_cell_ref(arg, self.table.rows(), self.table.cols())?;
                ops::len(&mut self.table, &self.current, target).map(|_| None)
            }
            Command::Def(slot) => {
                crate::interp::vars::def(&self.table, &self.current, &mut self.vars, *slot)
                    .map(|_| None)
            }
            Command::Use(slot) => {
                crate::interp::vars::use_var(&mut self.table, &self.current, &self.vars, *slot)
                    .map(|_| None)
            }
            Command::Inc(slot) => {
                crate::interp::vars::inc(&mut self.vars, *slot).map(|_| None)
            }
        }
    }
}
