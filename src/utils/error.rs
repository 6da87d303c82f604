use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for collapsify operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for collapsify operations
#[derive(Debug)]
pub enum CollapsifyError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Document parse or serialize error
    Document(String),
    /// State store error
    Store(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for CollapsifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollapsifyError::Io(err) => write!(f, "IO error: {}", err),
            CollapsifyError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CollapsifyError::Document(msg) => write!(f, "Document error: {}", msg),
            CollapsifyError::Store(msg) => write!(f, "State store error: {}", msg),
            CollapsifyError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for CollapsifyError {}

impl From<io::Error> for CollapsifyError {
    fn from(err: io::Error) -> Self {
        CollapsifyError::Io(err)
    }
}

impl From<String> for CollapsifyError {
    fn from(msg: String) -> Self {
        CollapsifyError::Generic(msg)
    }
}

impl From<&str> for CollapsifyError {
    fn from(msg: &str) -> Self {
        CollapsifyError::Generic(msg.to_string())
    }
}
