// gl-nullify/src/error.rs
//
//! Various errors that setting up the shim can produce.
//!
//! None of these ever reach the host application. They are printed to the diagnostic stream and
//! the shim carries on with defaults.

use std::error;
use std::fmt::{self, Display, Formatter};
use std::io;

/// Various errors that setting up the shim can produce.
#[derive(Debug)]
pub enum Error {
    /// `GL_NULLIFY_LOG` named a call class that doesn't exist.
    UnknownCallClass(String),
    /// A boolean environment variable held something other than an on/off value.
    InvalidSwitch {
        /// The variable that was being read.
        variable: &'static str,
        /// The value it held.
        value: String,
    },
    /// The file named by `GL_NULLIFY_LOG_FILE` couldn't be opened for appending.
    LogFileOpenFailed(io::Error),
    /// A logger was already installed in this copy of the library.
    LoggerAlreadySet,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Error::UnknownCallClass(ref name) => write!(f, "unknown call class `{}`", name),
            Error::InvalidSwitch { variable, ref value } => {
                write!(f, "{} must be on or off, not `{}`", variable, value)
            }
            Error::LogFileOpenFailed(ref err) => write!(f, "couldn't open log file: {}", err),
            Error::LoggerAlreadySet => f.write_str("a logger is already installed"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::LogFileOpenFailed(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<log::SetLoggerError> for Error {
    #[inline]
    fn from(_: log::SetLoggerError) -> Error {
        Error::LoggerAlreadySet
    }
}
