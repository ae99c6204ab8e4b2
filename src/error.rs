use std::io;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("unsupported algorithm '{name}', expected one of: {valid}")]
    UnknownAlgorithm { name: String, valid: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("unknown shape type '{0}'")]
    UnknownKind(String),
    #[error("expected 3 fields (type height parameter), found {found}")]
    MissingFields { found: usize },
    #[error("invalid {field} '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("unknown compare type '{0}', expected one of: h/height, a/area, v/volume")]
    UnknownCompareType(String),
    #[error("shape dimensions must be positive (height={height}, parameter={parameter})")]
    NonPositiveDimension { height: f64, parameter: f64 },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read shape file: {0}")]
    Io(#[from] io::Error),
    #[error("shape file is empty")]
    Empty,
    #[error("invalid shape count '{0}'")]
    InvalidCount(String),
}
