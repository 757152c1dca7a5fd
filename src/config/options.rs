// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub parse: ParseOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    pub fn validate(&self) -> Result<()> {
        self.parse.validate()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Number of teaching weeks in the term; week numbers run `1..=max_weeks`.
    pub max_weeks: u32,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { max_weeks: DEFAULT_MAX_WEEKS }
    }
}

impl ParseOptions {
    pub fn validate(&self) -> Result<()> {
        if self.max_weeks == 0 {
            return Err(Error::InvalidMaxWeeks(self.max_weeks));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Tsv,
}

impl InputFormat {
    pub fn delim(&self) -> u8 {
        match self { InputFormat::Csv => b',', InputFormat::Tsv => b'\t' }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(InputFormat::Csv),
            "tsv" => Ok(InputFormat::Tsv),
            other => Err(Error::Usage(format!("Unknown input format: {}", other))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Field separator for the delimited formats. JSON has none.
    pub fn delim(&self) -> Option<u8> {
        match self {
            ExportFormat::Csv => Some(b','),
            ExportFormat::Tsv => Some(b'\t'),
            ExportFormat::Json => None,
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            other => Err(Error::Usage(format!("Unknown format: {}", other))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    /// `None` writes to stdout.
    pub out: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: false,
            out: None,
        }
    }
}

impl ExportOptions {
    /// Output path with the format's extension applied when the path has none.
    /// An explicit extension is kept even if it disagrees with the format.
    pub fn out_path(&self) -> Option<PathBuf> {
        self.out.as_ref().map(|p| {
            if p.extension().is_some() { p.clone() } else { p.with_extension(self.format.ext()) }
        })
    }
}

pub fn default_store_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(STORE_FILE)
}
