use std::path::Path;

use serde_json::{Map, Value};
use tracing::info;

use crate::codec::errors::CodecError;
use crate::codec::schema::Schema;

use super::reader::JonxReader;

/// Fully materialized container: the parsed schema plus one JSON object per
/// row, fields in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedFile {
    pub schema: Schema,
    pub rows: Vec<Value>,
}

impl JonxReader {
    /// Reconstructs every record. This decompresses all columns; prefer
    /// `get_column` when only parts of the file are needed.
    pub fn to_records(&self) -> Result<Vec<Value>, CodecError> {
        let fields: Vec<&str> = self.schema().fields.iter().map(String::as_str).collect();
        let columns = self.get_columns(&fields)?;

        let n = self.count() as usize;
        let mut rows = Vec::with_capacity(n);
        for i in 0..n {
            let mut obj = Map::with_capacity(fields.len());
            for &field in &fields {
                let value = columns
                    .get(field)
                    .and_then(|col| col.value_at(i))
                    .ok_or_else(|| CodecError::ColumnDecode {
                        field: field.to_string(),
                        reason: format!("row {i} missing during reconstruction"),
                    })?;
                obj.insert(field.to_string(), value);
            }
            rows.push(Value::Object(obj));
        }
        Ok(rows)
    }
}

/// Full materialization of an in-memory container.
pub fn decode_bytes(bytes: &[u8]) -> Result<DecodedFile, CodecError> {
    let reader = JonxReader::open_bytes(bytes.to_vec())?;
    let rows = reader.to_records()?;
    info!(
        target: "reader::decode",
        rows = rows.len(),
        columns = reader.schema().fields.len(),
        "Materialized container"
    );
    Ok(DecodedFile {
        schema: reader.schema().clone(),
        rows,
    })
}

/// Full materialization of a container file on disk.
pub fn decode_file(path: impl AsRef<Path>) -> Result<DecodedFile, CodecError> {
    let reader = JonxReader::open(path)?;
    let rows = reader.to_records()?;
    Ok(DecodedFile {
        schema: reader.schema().clone(),
        rows,
    })
}
