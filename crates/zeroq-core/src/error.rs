use thiserror::Error;

/// Canonical result for zeroq.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Rejected at the call that received the argument, before any enumeration.
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("sequence contains no elements")]
    NoElements,

    #[error("sequence contains more than one element")]
    MoreThanOneElement,

    #[error("index {index} is out of range")]
    IndexOutOfRange { index: String },

    #[error("arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}
