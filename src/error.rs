// src/error.rs
//! Crate error type. The cell parsers never fail; everything here comes from
//! I/O, table decoding, configuration and the command line.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("max weeks must be at least 1 (got {0})")]
    InvalidMaxWeeks(u32),

    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
