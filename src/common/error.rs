use serde::{Deserialize, Serialize};

/// A tutor error. Every error is reported to the learner through the
/// output sink and never terminates the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Error {
    /// The statement matched a dispatch keyword but failed structural
    /// parsing, e.g. a missing clause or mismatched column/value counts.
    /// The message names the syntactic expectation.
    Malformed(String),
    /// No dispatch keyword matched the statement.
    Unrecognized(String),
    /// Invalid user input, e.g. a value that fails numeric coercion.
    InvalidInput(String),
    /// Invalid configuration.
    Config(String),
    /// An input/output error from the hosting terminal.
    Io(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(message)
            | Self::Unrecognized(message)
            | Self::InvalidInput(message)
            | Self::Config(message)
            | Self::Io(message) => write!(f, "{message}"),
        }
    }
}

/// Constructs an Error::InvalidInput for the given format string.
#[macro_export]
macro_rules! errinput {
    ($($args:tt)*) => { $crate::common::Error::InvalidInput(format!($($args)*)).into() };
}

/// Constructs an Error::Malformed for the given format string.
#[macro_export]
macro_rules! errmalformed {
    ($($args:tt)*) => { $crate::common::Error::Malformed(format!($($args)*)).into() };
}

/// A tutor result, returning Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Allows the err macros to construct a Result in both error and result
/// positions, e.g. `return errinput!(...)` and `.ok_or_else(|| errinput!(...))`.
impl<T> From<Error> for Result<T> {
    fn from(error: Error) -> Self {
        Err(error)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for Error {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        Self::Io(err.to_string())
    }
}
