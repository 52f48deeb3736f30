use super::schema::SchemaViolation;
use std::io;
use thiserror::Error;

/// The single diagnostic a failed validation run surfaces.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("unable to read {file} ({source}); make sure the file exists in the dataset root")]
    IndexUnreadable {
        file: String,
        #[source]
        source: io::Error,
    },
    #[error("{file} is not a valid JSON file: {source}")]
    IndexNotJson {
        file: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("error in {file}: {violation}")]
    IndexSchema { file: String, violation: SchemaViolation },
    #[error("unable to read '{dir}' directory ({source}); make sure it exists in the dataset root")]
    RecordDirUnreadable {
        dir: String,
        #[source]
        source: io::Error,
    },
    #[error("number of data files ({found}) does not match metadata length ({expected})")]
    CountMismatch { found: usize, expected: u64 },
    #[error("unable to read {file} ({source}); make sure the file exists in the '{dir}' directory")]
    RecordUnreadable {
        file: String,
        dir: String,
        #[source]
        source: io::Error,
    },
    #[error("{file} is not a valid JSON file: {source}")]
    RecordNotJson {
        file: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("error in {file}: {violation}")]
    RecordSchema { file: String, violation: SchemaViolation },
    #[error("error in {file}: {source}")]
    Model {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ValidationError {
    /// Coarse category, matching the storage / decoding / schema /
    /// consistency split of the diagnostics.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IndexUnreadable { .. }
            | Self::RecordDirUnreadable { .. }
            | Self::RecordUnreadable { .. } => ErrorKind::Storage,
            Self::IndexNotJson { .. } | Self::RecordNotJson { .. } => ErrorKind::Decoding,
            Self::IndexSchema { .. } | Self::RecordSchema { .. } | Self::Model { .. } => {
                ErrorKind::Schema
            }
            Self::CountMismatch { .. } => ErrorKind::Consistency,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Storage,
    Decoding,
    Schema,
    Consistency,
}
