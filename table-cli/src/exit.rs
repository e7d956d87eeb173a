//! Maps `table_core::Error` onto the program's exit code table in one place,
//! instead of scattering `std::process::exit` calls through the driver.

use table_core::Error;

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    MissingArgs = 1,
    ForbiddenDelimiterByte = 2,
    OpenFile = 3,
    Allocation = 4,
    InvariantViolated = 5,
    InvalidArgument = 6,
    InvalidValue = 7,
    MalformedCommand = 8,
    MalformedSelector = 9,
    NumericConversion = 10,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> ExitCode {
        match err {
            Error::MissingArgs(_) => ExitCode::MissingArgs,
            Error::ForbiddenDelimiterByte(_) => ExitCode::ForbiddenDelimiterByte,
            Error::OpenFile { .. } => ExitCode::OpenFile,
            Error::Allocation(_) => ExitCode::Allocation,
            Error::InvariantViolated(_) => ExitCode::InvariantViolated,
            Error::InvalidArgument(_) => ExitCode::InvalidArgument,
            Error::InvalidValue(_) => ExitCode::InvalidValue,
            Error::MalformedCommand(_) => ExitCode::MalformedCommand,
            Error::MalformedSelector(_) => ExitCode::MalformedSelector,
            Error::NumericConversion(_) => ExitCode::NumericConversion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_core_error_exit_code() {
        let err = Error::MalformedSelector("x".into());
        assert_eq!(ExitCode::from(&err) as i32, err.exit_code());
    }
}
