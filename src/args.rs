//! Command-line argument interpretation.
//!
//! The accepted shapes are `tail`, `tail -NUM`, `tail FILE` and
//! `tail -NUM FILE`. Anything else is a usage error.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::error::TailError;

pub const DEFAULT_LINE_COUNT: usize = 10;

/// Where the bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

/// Validated invocation: how many lines to keep and what to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub line_count: usize,
    pub source: Source,
}

impl Config {
    /// Interpret the argument list, program name excluded.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Config, TailError> {
        match args {
            [] => Ok(Config {
                line_count: DEFAULT_LINE_COUNT,
                source: Source::Stdin,
            }),
            [arg] if arg.as_ref().starts_with('-') => Ok(Config {
                line_count: parse_count(arg.as_ref())?,
                source: Source::Stdin,
            }),
            [file] => Ok(Config {
                line_count: DEFAULT_LINE_COUNT,
                source: Source::File(PathBuf::from(file.as_ref())),
            }),
            [count, file] => {
                if !count.as_ref().starts_with('-') {
                    return Err(TailError::Usage);
                }
                Ok(Config {
                    line_count: parse_count(count.as_ref())?,
                    source: Source::File(PathBuf::from(file.as_ref())),
                })
            }
            _ => Err(TailError::Usage),
        }
    }
}

/// Parse a `-NUM` flag: at least one character after the dash, all of them
/// decimal digits. Values too large for `usize` are rejected the same way.
fn parse_count(arg: &str) -> Result<usize, TailError> {
    let digits = &arg[1..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TailError::InvalidNumber(arg.to_string()));
    }
    digits
        .parse()
        .map_err(|_| TailError::InvalidNumber(arg.to_string()))
}

impl Source {
    /// Resolve to a readable byte stream.
    pub fn open(&self) -> Result<Box<dyn Read>, TailError> {
        match self {
            Source::Stdin => Ok(Box::new(io::stdin())),
            Source::File(path) => match File::open(path) {
                Ok(file) => Ok(Box::new(file)),
                Err(source) => Err(TailError::CannotOpen {
                    path: path.clone(),
                    source,
                }),
            },
        }
    }
}
