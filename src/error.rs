use thiserror::Error;

use crate::converter::{FhirDataType, V2DataType};
use crate::core::V2Version;

#[derive(Error, Debug)]
pub enum MappingError {
    #[error("No mapping registered for {source_type} -> {target_type} (HL7 v{version})")]
    UnsupportedMapping {
        source_type: V2DataType,
        target_type: FhirDataType,
        version: V2Version,
    },

    #[error("Source mismatch: expected {expected}, found {found}")]
    SourceMismatch { expected: String, found: String },

    #[error("Unknown HL7v2 version: {value}")]
    UnknownVersion { value: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MappingError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn source_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::SourceMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MappingError>;
