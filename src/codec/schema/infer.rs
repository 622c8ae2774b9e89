use half::f16;
use serde_json::Value;
use tracing::debug;

use crate::codec::errors::EncodeError;
use crate::codec::schema::types::PhysicalType;

/// Largest finite binary16 magnitude.
const F16_MAX: f64 = 65504.0;

/// Picks the narrowest physical type that represents every value of one
/// column. Precedence: bool over numeric, integer over float, and any mix of
/// kinds (or nested values) falls through to json.
pub fn infer_type(field: &str, values: &[&Value]) -> Result<PhysicalType, EncodeError> {
    let mut all_bool = true;
    let mut all_int = true;
    let mut all_number = true;
    let mut all_str = true;

    for v in values {
        match v {
            Value::Bool(_) => {
                all_int = false;
                all_number = false;
                all_str = false;
            }
            Value::Number(n) => {
                all_bool = false;
                all_str = false;
                if !n.is_i64() && !n.is_u64() {
                    all_int = false;
                }
            }
            Value::String(_) => {
                all_bool = false;
                all_int = false;
                all_number = false;
            }
            _ => {
                all_bool = false;
                all_int = false;
                all_number = false;
                all_str = false;
            }
        }
    }

    let phys = if all_bool {
        PhysicalType::Bool
    } else if all_int {
        infer_int(field, values)?
    } else if all_number {
        infer_float(field, values)?
    } else if all_str {
        PhysicalType::Str
    } else {
        PhysicalType::Json
    };

    debug!(target: "schema::infer", %field, rows = values.len(), tag = phys.tag(), "Inferred column type");
    Ok(phys)
}

fn infer_int(field: &str, values: &[&Value]) -> Result<PhysicalType, EncodeError> {
    let mut fits_i16 = true;
    for v in values {
        let n = v
            .as_i64()
            .ok_or_else(|| out_of_range(field, v))?;
        if i32::try_from(n).is_err() {
            return Err(out_of_range(field, v));
        }
        if n < i16::MIN as i64 || n > i16::MAX as i64 {
            fits_i16 = false;
        }
    }
    Ok(if fits_i16 {
        PhysicalType::Int16
    } else {
        PhysicalType::Int32
    })
}

fn infer_float(field: &str, values: &[&Value]) -> Result<PhysicalType, EncodeError> {
    let mut all_f16 = true;
    for v in values {
        let x = v.as_f64().ok_or_else(|| out_of_range(field, v))?;
        if !x.is_finite() {
            return Err(out_of_range(field, v));
        }
        if x.abs() > f32::MAX as f64 {
            return Err(out_of_range(field, v));
        }
        if !float16_eligible(x) {
            all_f16 = false;
        }
    }
    Ok(if all_f16 {
        PhysicalType::Float16
    } else {
        PhysicalType::Float32
    })
}

/// binary16 eligibility: in range, at most 3 fractional digits in the
/// shortest decimal representation, and the binary16 round-trip stays within
/// half a ULP of the input.
fn float16_eligible(x: f64) -> bool {
    if x.abs() > F16_MAX {
        return false;
    }
    let repr = format!("{x}");
    if repr.contains(['e', 'E']) {
        return false;
    }
    if let Some(dot) = repr.find('.') {
        if repr.len() - dot - 1 > 3 {
            return false;
        }
    }
    let back = f16::from_f64(x).to_f64();
    (back - x).abs() <= binary16_ulp(x) / 2.0
}

/// Spacing of binary16 values at the magnitude of `x`.
fn binary16_ulp(x: f64) -> f64 {
    let a = x.abs();
    if a < f16::MIN_POSITIVE.to_f64() {
        // subnormal spacing
        return 2f64.powi(-24);
    }
    let e = (a.log2().floor() as i32).clamp(-14, 15);
    2f64.powi(e - 10)
}

fn out_of_range(field: &str, value: &Value) -> EncodeError {
    EncodeError::ValueOutOfRange {
        field: field.to_string(),
        value: value.to_string(),
    }
}
