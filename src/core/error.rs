//! Errors that can end a console session.

use std::fmt;
use std::io;
use std::num::ParseIntError;

/// Everything else the user can run into (unknown title, empty library,
/// unmatched genre, invalid menu choice) is a normal `Outcome`, not an error.
#[derive(Debug)]
pub enum SessionError {
    /// The publication year did not parse as an integer.
    InvalidYear { input: String, source: ParseIntError },
    /// The publication year is a whole number outside the `i64` range.
    YearOutOfRange { input: String },
    /// Reading from or writing to the console failed.
    Io(io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidYear { input, source } => {
                write!(f, "invalid publication year '{input}': {source}")
            }
            SessionError::YearOutOfRange { input } => write!(
                f,
                "publication year '{input}' is outside {}..={}",
                i64::MIN,
                i64::MAX
            ),
            SessionError::Io(e) => write!(f, "console I/O error: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::InvalidYear { source, .. } => Some(source),
            SessionError::YearOutOfRange { .. } => None,
            SessionError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for SessionError {
    fn from(e: io::Error) -> Self {
        SessionError::Io(e)
    }
}
