use half::f16;
use serde_json::Value;

use crate::codec::column::values::ColumnValues;
use crate::codec::errors::CodecError;
use crate::codec::schema::PhysicalType;

/// Decodes a column frame's plaintext against its declared type. Fixed-width
/// types must satisfy `len == num_rows × width`; str/json plaintext must
/// parse as a JSON array of exactly `num_rows` elements.
pub fn decode_column(
    field: &str,
    plaintext: &[u8],
    phys: PhysicalType,
    num_rows: u32,
) -> Result<ColumnValues, CodecError> {
    if let Some(width) = phys.fixed_width() {
        let expected = num_rows as usize * width;
        if plaintext.len() != expected {
            return Err(CodecError::ColumnLengthMismatch {
                field: field.to_string(),
                rows: num_rows,
                expected,
                actual: plaintext.len(),
            });
        }
    }

    match phys {
        PhysicalType::Int16 => Ok(ColumnValues::Int16(
            plaintext
                .chunks_exact(2)
                .map(|c| i16::from_le_bytes([c[0], c[1]]))
                .collect(),
        )),
        PhysicalType::Int32 => Ok(ColumnValues::Int32(
            plaintext
                .chunks_exact(4)
                .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                .collect(),
        )),
        PhysicalType::Float16 => Ok(ColumnValues::Float16(
            plaintext
                .chunks_exact(2)
                .map(|c| f16::from_le_bytes([c[0], c[1]]))
                .collect(),
        )),
        PhysicalType::Float32 => Ok(ColumnValues::Float32(
            plaintext
                .chunks_exact(4)
                .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                .collect(),
        )),
        PhysicalType::Bool => {
            let mut out = Vec::with_capacity(plaintext.len());
            for (i, &b) in plaintext.iter().enumerate() {
                match b {
                    0 => out.push(false),
                    1 => out.push(true),
                    other => {
                        return Err(CodecError::ColumnDecode {
                            field: field.to_string(),
                            reason: format!("invalid bool byte 0x{other:02x} at row {i}"),
                        })
                    }
                }
            }
            Ok(ColumnValues::Bool(out))
        }
        PhysicalType::Str => {
            let strings: Vec<String> = serde_json::from_slice(plaintext).map_err(|e| {
                CodecError::ColumnDecode {
                    field: field.to_string(),
                    reason: format!("string array: {e}"),
                }
            })?;
            check_element_count(field, strings.len(), num_rows)?;
            Ok(ColumnValues::Str(strings))
        }
        PhysicalType::Json => {
            let values: Vec<Value> = serde_json::from_slice(plaintext).map_err(|e| {
                CodecError::ColumnDecode {
                    field: field.to_string(),
                    reason: format!("value array: {e}"),
                }
            })?;
            check_element_count(field, values.len(), num_rows)?;
            Ok(ColumnValues::Json(values))
        }
    }
}

fn check_element_count(field: &str, actual: usize, num_rows: u32) -> Result<(), CodecError> {
    if actual != num_rows as usize {
        return Err(CodecError::ColumnDecode {
            field: field.to_string(),
            reason: format!("expected {num_rows} elements, got {actual}"),
        });
    }
    Ok(())
}
