use half::f16;
use serde_json::Value;

use crate::codec::errors::EncodeError;
use crate::codec::schema::PhysicalType;

/// Serializes one column's values into the type-specific plaintext that gets
/// framed. Values that merely "look like" a narrower kind than the column's
/// inferred type are re-coerced here (an integer in a float column encodes
/// as a float).
pub fn encode_column(
    field: &str,
    values: &[&Value],
    phys: PhysicalType,
) -> Result<Vec<u8>, EncodeError> {
    match phys {
        PhysicalType::Int16 => {
            let mut out = Vec::with_capacity(values.len() * 2);
            for v in values {
                let n = v
                    .as_i64()
                    .and_then(|n| i16::try_from(n).ok())
                    .ok_or_else(|| out_of_range(field, v))?;
                out.extend_from_slice(&n.to_le_bytes());
            }
            Ok(out)
        }
        PhysicalType::Int32 => {
            let mut out = Vec::with_capacity(values.len() * 4);
            for v in values {
                let n = v
                    .as_i64()
                    .and_then(|n| i32::try_from(n).ok())
                    .ok_or_else(|| out_of_range(field, v))?;
                out.extend_from_slice(&n.to_le_bytes());
            }
            Ok(out)
        }
        PhysicalType::Float16 => {
            let mut out = Vec::with_capacity(values.len() * 2);
            for v in values {
                let x = v.as_f64().ok_or_else(|| out_of_range(field, v))?;
                out.extend_from_slice(&f16::from_f64(x).to_le_bytes());
            }
            Ok(out)
        }
        PhysicalType::Float32 => {
            let mut out = Vec::with_capacity(values.len() * 4);
            for v in values {
                let x = v.as_f64().ok_or_else(|| out_of_range(field, v))?;
                if !x.is_finite() || x.abs() > f32::MAX as f64 {
                    return Err(out_of_range(field, v));
                }
                out.extend_from_slice(&(x as f32).to_le_bytes());
            }
            Ok(out)
        }
        PhysicalType::Bool => {
            let mut out = Vec::with_capacity(values.len());
            for v in values {
                let b = v.as_bool().ok_or_else(|| out_of_range(field, v))?;
                out.push(u8::from(b));
            }
            Ok(out)
        }
        PhysicalType::Str => {
            let strings: Vec<&str> = values
                .iter()
                .map(|v| v.as_str().ok_or_else(|| out_of_range(field, v)))
                .collect::<Result<_, _>>()?;
            Ok(serde_json::to_vec(&strings)?)
        }
        PhysicalType::Json => Ok(serde_json::to_vec(values)?),
    }
}

fn out_of_range(field: &str, value: &Value) -> EncodeError {
    EncodeError::ValueOutOfRange {
        field: field.to_string(),
        value: value.to_string(),
    }
}
