//! Splits a command source (a literal `;`-separated string, or a `-cPATH`
//! command file) into an ordered list of `(function, argument)` pairs.

use bstr::ByteSlice;

use crate::error::{Error, Result};
use crate::parse::scan;

/// One tokenized command: a function name (a selector literal like
/// `[2,2]`, or an action word like `set`) and its optional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommand {
    pub function: Vec<u8>,
    pub argument: Option<Vec<u8>>,
}

fn trim(s: &[u8]) -> &[u8] {
    let s = s.trim_start_with(|c| c.is_whitespace());
    s.trim_end_with(|c| c.is_whitespace())
}

/// Splits one command string into `(function, argument)`. A command whose
/// trimmed form both begins with `[` and ends with `]` is a single selector
/// token. Otherwise the command splits once on the first unquoted space.
fn split_function_arg(command: &[u8]) -> RawCommand {
    let command = trim(command);
    if command.starts_with(b"[") && command.ends_with(b"]") {
        return RawCommand {
            function: command.to_vec(),
            argument: None,
        };
    }
    match scan::position(command, b' ', 0, false) {
        Some(p) => RawCommand {
            function: command[..p].to_vec(),
            argument: Some(command[p + 1..].to_vec()),
        },
        None => RawCommand {
            function: command.to_vec(),
            argument: None,
        },
    }
}

/// Tokenizes a literal command string, commands separated by `;`
/// (quote-aware, but escapes are always ignored for this split). An empty
/// string yields zero commands.
pub fn tokenize_literal(spec: &[u8]) -> Vec<RawCommand> {
    if spec.is_empty() {
        return Vec::new();
    }
    scan::split_all(spec, b';', true)
        .into_iter()
        .map(split_function_arg)
        .collect()
}

/// Tokenizes a `-cPATH` command file: each line is one command. The `-c`
/// prefix is stripped before the path is opened. Only ever called via
/// [`tokenize_commands`], which has already checked the prefix.
pub(crate) fn tokenize_file(spec: &[u8]) -> Result<Vec<RawCommand>> {
    let path_bytes = spec.strip_prefix(b"-c").ok_or_else(|| {
        Error::MalformedCommand("command file spec is missing its -c prefix".into())
    })?;
    let os_path = path_bytes
        .to_os_str()
        .map_err(|_| Error::InvalidArgument("command file path is not valid for this platform".into()))?;
    let path = std::path::Path::new(os_path);
    let data = std::fs::read(path).map_err(|source| Error::OpenFile {
        path: path.display().to_string(),
        source,
    })?;

    let mut commands = Vec::new();
    let mut lines = data.split(|&b| b == b'\n');
    let mut pending = lines.next();
    for next in lines {
        if let Some(line) = pending.take() {
            push_command_line(&mut commands, line);
        }
        pending = Some(next);
    }
    if let Some(line) = pending {
        if !trim(line.strip_suffix(b"\r").unwrap_or(line)).is_empty() {
            push_command_line(&mut commands, line);
        }
    }
    Ok(commands)
}

fn push_command_line(commands: &mut Vec<RawCommand>, line: &[u8]) {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    commands.push(split_function_arg(line));
}

/// Tokenizes a command spec, dispatching to the literal or file form.
pub fn tokenize_commands(spec: &[u8]) -> Result<Vec<RawCommand>> {
    if spec.starts_with(b"-c") {
        tokenize_file(spec)
    } else {
        Ok(tokenize_literal(spec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_literal_yields_no_commands() {
        assert_eq!(tokenize_literal(b""), Vec::new());
    }

    #[test]
    fn splits_on_semicolons() {
        let cmds = tokenize_literal(b"[2,2];set X");
        assert_eq!(cmds.len(), 2);
        assert_eq!(cmds[0].function, b"[2,2]");
        assert_eq!(cmds[1].function, b"set");
        assert_eq!(cmds[1].argument.as_deref(), Some(&b"X"[..]));
    }

    #[test]
    fn bracketed_command_is_a_single_selector_token() {
        let cmd = split_function_arg(b"[1,1,2,3]");
        assert_eq!(cmd.function, b"[1,1,2,3]");
        assert_eq!(cmd.argument, None);
    }

    #[test]
    fn splits_on_first_unquoted_space_only() {
        let cmd = split_function_arg(b"set hello world");
        assert_eq!(cmd.function, b"set");
        assert_eq!(cmd.argument.as_deref(), Some(&b"hello world"[..]));
    }

    #[test]
    fn semicolon_split_ignores_quoting() {
        // `spec.md` calls for `ignore_escapes=true` on the top-level `;`
        // split, which per the scanner's contract ignores quote state
        // entirely, not just escapes.
        let cmds = tokenize_literal(b"set \"a;b\"");
        assert_eq!(cmds.len(), 2);
    }
}
