use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Terminal failures. Each is reported once to stderr and ends the run
/// before any selected lines have been printed.
#[derive(Debug, Error)]
pub enum TailError {
    #[error("usage: tail [-NUM] [file]")]
    Usage,

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("cannot open {}: {source}", .path.display())]
    CannotOpen { path: PathBuf, source: io::Error },
}
