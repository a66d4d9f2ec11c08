use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Scope filter error types
#[derive(Error, Debug)]
pub enum ScopeError {
    #[error("File '{}' not found", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to read '{}': {source}", path.display())]
    ReadFailed { path: PathBuf, source: io::Error },

    #[error("Failed to write '{}': {source}", path.display())]
    WriteFailed { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, ScopeError>;
