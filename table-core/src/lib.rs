//! Core command-interpreter pipeline for the batch spreadsheet processor:
//! the quoting-aware scanner, the cell/row/table store, the line parser, the
//! command tokenizer, the selector evaluator, the mutation engine, the data
//! operators, and the temp-variable store.
//!
//! The command-line entry point, file discovery, and argument-array shape
//! are deliberately out of scope here — see `table-cli` for those.

mod dump;
pub mod error;
pub mod interp;
mod numeric;
pub mod parse;
pub mod table;

pub use dump::dump;
pub use error::{Error, Result};
pub use interp::Interpreter;
pub use parse::{load_table, tokenize_commands};
pub use table::Table;
