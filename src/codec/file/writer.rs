use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::codec::column::encode_column;
use crate::codec::errors::EncodeError;
use crate::codec::frame::{write_frame, ZstdCodec};
use crate::codec::index::{build_argsort, write_index_section};
use crate::codec::schema::{infer_type, Schema};

use super::{MAGIC, VERSION};

/// Encodes a record sequence into a complete container: header, schema
/// frame, one column frame per field in schema order, then the index
/// section. Field order is the first record's key order, extended by fields
/// first appearing in later records; a record missing any schema field is an
/// error.
pub fn encode_records(records: &[Value]) -> Result<Vec<u8>, EncodeError> {
    let mut objects = Vec::with_capacity(records.len());
    let mut fields: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for (row, record) in records.iter().enumerate() {
        let obj = record
            .as_object()
            .ok_or(EncodeError::NotAnObject { row })?;
        for key in obj.keys() {
            if seen.insert(key.clone()) {
                fields.push(key.clone());
            }
        }
        objects.push(obj);
    }

    let mut columns: Vec<Vec<&Value>> = fields
        .iter()
        .map(|_| Vec::with_capacity(records.len()))
        .collect();
    for (row, obj) in objects.iter().enumerate() {
        for (i, field) in fields.iter().enumerate() {
            let value = obj.get(field).ok_or_else(|| EncodeError::MissingField {
                row,
                field: field.clone(),
            })?;
            columns[i].push(value);
        }
    }

    let mut types = HashMap::with_capacity(fields.len());
    for (i, field) in fields.iter().enumerate() {
        types.insert(field.clone(), infer_type(field, &columns[i])?);
    }

    let codec = ZstdCodec::from_config();
    let mut out = Vec::new();
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&VERSION.to_le_bytes());

    let schema = Schema::new(fields.clone(), types, records.len() as u32);
    write_frame(&mut out, &schema.to_plaintext()?, &codec)?;

    for (i, field) in fields.iter().enumerate() {
        let phys = schema.types[field];
        let plaintext = encode_column(field, &columns[i], phys)?;
        debug!(
            target: "writer::column",
            %field,
            tag = phys.tag(),
            plaintext_len = plaintext.len(),
            "Encoded column"
        );
        write_frame(&mut out, &plaintext, &codec)?;
    }

    let mut entries: Vec<(&str, Vec<u32>)> = Vec::new();
    for (i, field) in fields.iter().enumerate() {
        if schema.types[field].is_numeric() {
            let keys: Vec<f64> = columns[i]
                .iter()
                .map(|v| v.as_f64().unwrap_or_default())
                .collect();
            entries.push((field.as_str(), build_argsort(&keys)));
        }
    }
    write_index_section(&mut out, &entries, &codec)?;

    info!(
        target: "writer::encode",
        rows = records.len(),
        columns = fields.len(),
        indexes = entries.len(),
        bytes = out.len(),
        "Encoded record set"
    );
    Ok(out)
}

/// Parses a JSON array of objects from `src` and writes the container to
/// `dst`.
pub fn encode_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<(), EncodeError> {
    let input = std::fs::read(src.as_ref())?;
    let parsed: Value = serde_json::from_slice(&input)?;
    let records = parsed.as_array().ok_or(EncodeError::NotRecords)?;
    let bytes = encode_records(records)?;
    std::fs::write(dst.as_ref(), &bytes)?;
    info!(
        target: "writer::file",
        src = %src.as_ref().display(),
        dst = %dst.as_ref().display(),
        "Encoded file"
    );
    Ok(())
}
