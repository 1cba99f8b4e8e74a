use std::path::PathBuf;
use thiserror::Error;

/// Rejected letter bag. Raised before any search starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("invalid number of letters: got {len}, expected {min} to {max}")]
    Length { len: usize, min: usize, max: usize },
    #[error("invalid character {0:?} found, only letters are allowed")]
    Character(char),
}

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("cannot read the dictionary file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read words")]
    Read(#[from] std::io::Error),
    #[error("line {line}: no word in column {column}")]
    MissingColumn { line: usize, column: usize },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot open config file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid search config")]
    Parse(#[from] serde_json::Error),
    #[error("letter limits {min}..={max} admit no bag")]
    EmptyLimits { min: usize, max: usize },
}
