use std::fmt;
use std::io;

#[derive(Debug)]
pub enum LoadError {
    /// Opening the connection failed; carries the driver's error verbatim.
    Connect(mysql::Error),
    /// The LOAD DATA statement failed; carries the driver's error verbatim.
    Execute(mysql::Error),
    /// Reading the payload from standard input failed.
    Stdin(io::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Connect(e) => write!(f, "Connection error: {e}"),
            LoadError::Execute(e) => write!(f, "Load failed: {e}"),
            LoadError::Stdin(e) => write!(f, "Error reading standard input: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Connect(e) | LoadError::Execute(e) => Some(e),
            LoadError::Stdin(e) => Some(e),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Stdin(e)
    }
}
