use std::io;
use thiserror::Error;

/// Failures of the length-prefixed zstd framing primitive.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("frame truncated: {0}")]
    Truncated(String),

    #[error("frame corrupt: {0}")]
    Corrupt(String),
}

/// Errors raised while encoding a record sequence into a container.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("input is not a JSON array of objects")]
    NotRecords,

    #[error("record {row} is not a JSON object")]
    NotAnObject { row: usize },

    #[error("record {row} is missing field '{field}'")]
    MissingField { row: usize, field: String },

    #[error("value out of range for field '{field}': {value}")]
    ValueOutOfRange { field: String, value: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("frame error: {0}")]
    Frame(#[from] FrameError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised while opening or reading a container.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid header: {0}")]
    HeaderInvalid(String),

    #[error("unsupported container version {0}")]
    UnsupportedVersion(u32),

    #[error("frame error: {0}")]
    Frame(#[from] FrameError),

    #[error("schema malformed: {0}")]
    SchemaMalformed(String),

    #[error("column '{field}': expected {expected} bytes for {rows} rows, got {actual}")]
    ColumnLengthMismatch {
        field: String,
        rows: u32,
        expected: usize,
        actual: usize,
    },

    #[error("column '{field}' failed to decode: {reason}")]
    ColumnDecode { field: String, reason: String },

    #[error("index for '{field}' invalid: {reason}")]
    IndexInvalid { field: String, reason: String },

    #[error("field '{0}' is not numeric")]
    NotNumeric(String),

    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
