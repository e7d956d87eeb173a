//! Positional argv parsing for the external interface:
//! `PROGRAM [-d DELIMS] COMMAND_SPEC INPUT_FILE`.

use std::path::PathBuf;

use table_core::Error;

const FORBIDDEN_DELIMITER_BYTES: &[u8] = b"\"'\\";
const DEFAULT_DELIMITER: &[u8] = b" ";

pub struct Args {
    pub delimiters: Vec<u8>,
    pub command_spec: Vec<u8>,
    pub input_file: PathBuf,
}

/// Parses argv (excluding the program name). `-d DELIMS` is optional and, if
/// present, must precede the two required positionals.
pub fn parse(argv: &[String]) -> Result<Args, Error> {
    let (delimiters, rest): (Vec<u8>, &[String]) = if argv.first().map(String::as_str) == Some("-d")
    {
        let delims = argv
            .get(1)
            .ok_or_else(|| Error::MissingArgs("-d requires a DELIMS value".to_string()))?;
        (delims.as_bytes().to_vec(), &argv[2..])
    } else {
        (DEFAULT_DELIMITER.to_vec(), argv)
    };

    for &byte in &delimiters {
        if FORBIDDEN_DELIMITER_BYTES.contains(&byte) {
            return Err(Error::ForbiddenDelimiterByte(byte));
        }
    }
    if delimiters.is_empty() {
        return Err(Error::InvalidValue("DELIMS must not be empty".to_string()));
    }

    let [command_spec, input_file] = rest else {
        return Err(Error::MissingArgs(
            "expected COMMAND_SPEC and INPUT_FILE".to_string(),
        ));
    };

    Ok(Args {
        delimiters,
        command_spec: command_spec.as_bytes().to_vec(),
        input_file: PathBuf::from(input_file),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_to_space_delimiter() {
        let args = parse(&v(&["cmds", "file.txt"])).unwrap();
        assert_eq!(args.delimiters, b" ");
        assert_eq!(args.command_spec, b"cmds");
    }

    #[test]
    fn dash_d_sets_delimiters() {
        let args = parse(&v(&["-d", ",;", "cmds", "file.txt"])).unwrap();
        assert_eq!(args.delimiters, b",;");
    }

    #[test]
    fn forbidden_delimiter_byte_is_rejected() {
        let err = parse(&v(&["-d", "\"", "cmds", "file.txt"])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_positional_is_rejected() {
        let err = parse(&v(&["only-one"])).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }
}
