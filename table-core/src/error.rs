//! The error taxonomy shared by every fallible operation in this crate.
//!
//! Every component returns `Result<T>` rather than writing an integer code
//! through an output parameter; `table-cli` maps each variant to the exit
//! code table of the external interface.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Tagged sum over everything that can go wrong while loading, interpreting,
/// or saving a table. Variant order matches the exit code table.
#[derive(Debug, Error)]
pub enum Error {
    #[error("missing required argument: {0}")]
    MissingArgs(String),

    #[error("delimiter contains a forbidden byte: {0:?}")]
    ForbiddenDelimiterByte(u8),

    #[error("could not open {path}: {source}")]
    OpenFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("allocation failed: {0}")]
    Allocation(String),

    #[error("internal invariant violated: {0}")]
    InvariantViolated(String),

    #[error("invalid function argument: {0}")]
    InvalidArgument(String),

    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("malformed command: {0}")]
    MalformedCommand(String),

    #[error("malformed selector: {0}")]
    MalformedSelector(String),

    #[error("numeric conversion failed: {0}")]
    NumericConversion(String),
}

impl Error {
    /// The process exit code this error corresponds to, per the external
    /// interface's exit code table. Success (0) has no `Error` variant.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::MissingArgs(_) => 1,
            Error::ForbiddenDelimiterByte(_) => 2,
            Error::OpenFile { .. } => 3,
            Error::Allocation(_) => 4,
            Error::InvariantViolated(_) => 5,
            Error::InvalidArgument(_) => 6,
            Error::InvalidValue(_) => 7,
            Error::MalformedCommand(_) => 8,
            Error::MalformedSelector(_) => 9,
            Error::NumericConversion(_) => 10,
        }
    }
}
