use std::error::Error as StdError;
use std::fmt;
use std::io;

use crate::invocation::InvocationError;

/// Unified error type for the frontend invocation crate.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Invocation(InvocationError),
    Json(serde_json::Error),
}

/// Convenience result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {err}"),
            Error::Invocation(err) => write!(f, "invalid frontend invocation: {err}"),
            Error::Json(err) => write!(f, "failed to serialize invocation: {err}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Invocation(err) => Some(err),
            Error::Json(err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

impl From<InvocationError> for Error {
    fn from(error: InvocationError) -> Self {
        Error::Invocation(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json(error)
    }
}
