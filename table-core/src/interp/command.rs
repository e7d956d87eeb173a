//! Resolves a tokenized `(function, argument)` pair into a tagged `Command`
//! variant — the selector/action dichotomy is a `match` over this enum
//! rather than a string-prefix check scattered through the interpreter.

use crate::error::{Error, Result};
use crate::interp::selector::{self, SelectorOp};
use crate::interp::vars;
use crate::parse::tokenize::RawCommand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Selector(SelectorOp),
    Irow,
    Arow,
    Drow,
    Icol,
    Acol,
    Dcol,
    Set(Vec<u8>),
    Clear,
    Swap(Vec<u8>),
    Sum(Vec<u8>),
    Avg(Vec<u8>),
    Count(Vec<u8>),
    Len(Vec<u8>),
    Def(usize),
    Use(usize),
    Inc(usize),
}

fn require_argument(raw: &RawCommand) -> Result<Vec<u8>> {
    raw.argument.clone().ok_or_else(|| {
        Error::InvalidArgument(format!(
            "{} requires an argument",
            String::from_utf8_lossy(&raw.function)
        ))
    })
}

fn reject_argument(raw: &RawCommand) -> Result<()> {
    if raw.argument.is_some() {
        return Err(Error::MalformedCommand(format!(
            "{} takes no argument",
            String::from_utf8_lossy(&raw.function)
        )));
    }
    Ok(())
}

/// Resolves one tokenized command. A function whose trimmed form is
/// bracket-delimited is a selector; otherwise it is dispatched by name.
pub fn resolve(raw: &RawCommand) -> Result<Command> {
    if raw.function.starts_with(b"[") && raw.function.ends_with(b"]") {
        let content = &raw.function[1..raw.function.len() - 1];
        return Ok(Command::Selector(selector::parse(content)?));
    }

    match raw.function.as_slice() {
        b"irow" => {
            reject_argument(raw)?;
            Ok(Command::Irow)
        }
        b"arow" => {
            reject_argument(raw)?;
            Ok(Command::Arow)
        }
        b"drow" => {
            reject_argument(raw)?;
            Ok(Command::Drow)
        }
        b"icol" => {
            reject_argument(raw)?;
            Ok(Command::Icol)
        }
        b"acol" => {
            reject_argument(raw)?;
            Ok(Command::Acol)
        }
        b"dcol" => {
            reject_argument(raw)?;
            Ok(Command::Dcol)
        }
        b"clear" => {
            reject_argument(raw)?;
            Ok(Command::Clear)
        }
        b"set" => Ok(Command::Set(require_argument(raw)?)),
        b"swap" => Ok(Command::Swap(require_argument(raw)?)),
        b"sum" => Ok(Command::Sum(require_argument(raw)?)),
        b"avg" => Ok(Command::Avg(require_argument(raw)?)),
        b"count" => Ok(Command::Count(require_argument(raw)?)),
        b"len" => Ok(Command::Len(require_argument(raw)?)),
        b"def" => Ok(Command::Def(vars::parse_slot(&require_argument(raw)?)?)),
        b"use" => Ok(Command::Use(vars::parse_slot(&require_argument(raw)?)?)),
        b"inc" => Ok(Command::Inc(vars::parse_slot(&require_argument(raw)?)?)),
        other => Err(Error::MalformedCommand(format!(
            "unknown function: {:?}",
            String::from_utf8_lossy(other)
        ))),
    }
}
