use std::fmt::Display;
use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("Unable to open operations file [{path}]: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error
    },
    #[error("Malformed operation on line [{line}]: {reason}")]
    Malformed {
        line: u64,
        reason: String
    }
}

impl OperationError {
    pub fn open(path: &str, source: io::Error) -> Self {
        Self::Open { path: path.to_string(), source }
    }

    pub fn malformed(line: u64, reason: impl Display) -> Self {
        Self::Malformed { line, reason: reason.to_string() }
    }
}
