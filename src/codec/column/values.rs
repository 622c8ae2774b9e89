use half::f16;
use serde_json::Value;

use crate::codec::schema::PhysicalType;

/// Decoded values of one column, tagged by physical type. Owned by the
/// caller once returned; carries no reference back into the reader.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Float16(Vec<f16>),
    Float32(Vec<f32>),
    Bool(Vec<bool>),
    Str(Vec<String>),
    Json(Vec<Value>),
}

impl ColumnValues {
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Int16(v) => v.len(),
            ColumnValues::Int32(v) => v.len(),
            ColumnValues::Float16(v) => v.len(),
            ColumnValues::Float32(v) => v.len(),
            ColumnValues::Bool(v) => v.len(),
            ColumnValues::Str(v) => v.len(),
            ColumnValues::Json(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn physical_type(&self) -> PhysicalType {
        match self {
            ColumnValues::Int16(_) => PhysicalType::Int16,
            ColumnValues::Int32(_) => PhysicalType::Int32,
            ColumnValues::Float16(_) => PhysicalType::Float16,
            ColumnValues::Float32(_) => PhysicalType::Float32,
            ColumnValues::Bool(_) => PhysicalType::Bool,
            ColumnValues::Str(_) => PhysicalType::Str,
            ColumnValues::Json(_) => PhysicalType::Json,
        }
    }

    /// Numeric view used by aggregates and index validation. None for
    /// non-numeric columns or out-of-bounds rows.
    #[inline]
    pub fn as_f64_at(&self, index: usize) -> Option<f64> {
        match self {
            ColumnValues::Int16(v) => v.get(index).map(|&x| x as f64),
            ColumnValues::Int32(v) => v.get(index).map(|&x| x as f64),
            ColumnValues::Float16(v) => v.get(index).map(|&x| x.to_f64()),
            ColumnValues::Float32(v) => v.get(index).map(|&x| x as f64),
            _ => None,
        }
    }

    /// Lossless JSON view of one row, used for record reconstruction.
    pub fn value_at(&self, index: usize) -> Option<Value> {
        match self {
            ColumnValues::Int16(v) => v.get(index).map(|&x| Value::from(x)),
            ColumnValues::Int32(v) => v.get(index).map(|&x| Value::from(x)),
            ColumnValues::Float16(v) => v.get(index).map(|&x| Value::from(x.to_f64())),
            ColumnValues::Float32(v) => v.get(index).map(|&x| Value::from(x as f64)),
            ColumnValues::Bool(v) => v.get(index).map(|&x| Value::from(x)),
            ColumnValues::Str(v) => v.get(index).map(|x| Value::from(x.as_str())),
            ColumnValues::Json(v) => v.get(index).cloned(),
        }
    }

    #[inline]
    pub fn get_str_at(&self, index: usize) -> Option<&str> {
        match self {
            ColumnValues::Str(v) => v.get(index).map(|s| s.as_str()),
            _ => None,
        }
    }

    #[inline]
    pub fn get_bool_at(&self, index: usize) -> Option<bool> {
        match self {
            ColumnValues::Bool(v) => v.get(index).copied(),
            _ => None,
        }
    }
}
