//! Lexical parsing: the quoting-aware scanner, the per-line cell splitter,
//! and the command tokenizer all live here, since they share the same
//! quote/escape rules.

pub mod line;
pub mod scan;
pub mod tokenize;

pub use line::load_table;
pub use tokenize::{tokenize_commands, RawCommand};
