use std::error::Error;
use std::fmt::{Display, Formatter, Result};
use crate::utils::sanitize_sensitive_info;

#[macro_export]
macro_rules! create_curator_error {
     ($kind: expr, $($arg:tt)*) => {
        $crate::error::CuratorError::new($kind, format!($($arg)*))
    }
}

pub use create_curator_error;

#[macro_export]
macro_rules! create_curator_error_result {
     ($kind: expr, $($arg:tt)*) => {
        Err($crate::error::CuratorError::new($kind, format!($($arg)*)))
    }
}

pub use create_curator_error_result;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CuratorErrorKind {
    // missing or malformed settings
    Config,
    // playlist could not be retrieved
    Fetch,
    // output playlist could not be persisted
    Write,
}

impl Display for CuratorErrorKind {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let name = match self {
            Self::Config => "config",
            Self::Fetch => "fetch",
            Self::Write => "write",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug)]
pub struct CuratorError {
    pub kind: CuratorErrorKind,
    pub message: String,
}

impl CuratorError {
    pub const fn new(kind: CuratorErrorKind, message: String) -> Self {
        Self { kind, message }
    }
}

impl Display for CuratorError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "Curator {} error: {}", self.kind, sanitize_sensitive_info(&self.message))
    }
}

impl Error for CuratorError {}
