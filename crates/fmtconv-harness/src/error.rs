//! Harness error type.

use fmtconv_core::{ConversionError, ScanError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("scan: {0}")]
    Scan(#[from] ScanError),
    #[error("conversion: {0}")]
    Conversion(#[from] ConversionError),
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),
    #[error("unknown kind '{0}'")]
    UnknownKind(String),
    #[error("no fixture JSON files loaded from {}", .0.display())]
    NoFixtures(std::path::PathBuf),
    #[error("bad input field '{field}': {message}")]
    BadInput { field: String, message: String },
}

impl HarnessError {
    pub(crate) fn bad_input(field: &str, message: impl Into<String>) -> Self {
        Self::BadInput {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
