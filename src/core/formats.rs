use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Payloads containing this marker are rejected by every format.
pub const REJECT_MARKER: &str = "invalid";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{format} transform failed: {reason}")]
pub struct TransformError {
    pub format: &'static str,
    pub reason: String,
}

/// The format-specific step of `DataProcessor::process`.
pub trait DataFormat {
    fn name(&self) -> &'static str;

    fn transform(&self, data: &str) -> Result<String, TransformError>;
}

fn reject_marked(format: &'static str, data: &str) -> Result<(), TransformError> {
    if data.contains(REJECT_MARKER) {
        return Err(TransformError {
            format,
            reason: format!("payload contains '{}'", REJECT_MARKER),
        });
    }
    Ok(())
}

/// Rewrites the field separator from `,` to `;`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvFormat;

impl DataFormat for CsvFormat {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn transform(&self, data: &str) -> Result<String, TransformError> {
        reject_marked(self.name(), data)?;
        Ok(data.replace(',', ";"))
    }
}

/// Rewrites double quotes to single quotes.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl DataFormat for JsonFormat {
    fn name(&self) -> &'static str {
        "json"
    }

    fn transform(&self, data: &str) -> Result<String, TransformError> {
        reject_marked(self.name(), data)?;
        Ok(data.replace('"', "'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DataFormatKind {
    Csv,
    Json,
}

impl DataFormatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataFormatKind::Csv => "csv",
            DataFormatKind::Json => "json",
        }
    }
}

impl fmt::Display for DataFormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
