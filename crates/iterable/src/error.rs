use std::{fmt, result};

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for cursor access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    OutOfRange { position: isize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OutOfRange { position, len } => write!(
                f,
                "Cursor position {position} is out of range for a host of length {len}"
            ),
        }
    }
}

impl std::error::Error for Error {}
