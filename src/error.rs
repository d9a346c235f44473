//! Conversion error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while converting notes
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("source directory `{0}` does not exist")]
    SourceDirMissing(PathBuf),

    #[error("IO error on `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("cannot render post header")]
    Header(#[from] serde_yaml::Error),

    #[error("cannot render JSON output")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        ConvertError::Io(path.into(), err)
    }

    /// Message with every source appended, `outer: inner`
    pub fn chain(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(inner) = source {
            message.push_str(": ");
            message.push_str(&inner.to_string());
            source = inner.source();
        }
        message
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
