use serde::{Deserialize, Serialize};

/// Physical column type. The tag strings are part of the container format
/// and appear verbatim in the schema frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhysicalType {
    #[serde(rename = "int16")]
    Int16,
    #[serde(rename = "int32")]
    Int32,
    #[serde(rename = "float16")]
    Float16,
    #[serde(rename = "float32")]
    Float32,
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "str")]
    Str,
    #[serde(rename = "json")]
    Json,
}

impl PhysicalType {
    pub fn tag(&self) -> &'static str {
        match self {
            PhysicalType::Int16 => "int16",
            PhysicalType::Int32 => "int32",
            PhysicalType::Float16 => "float16",
            PhysicalType::Float32 => "float32",
            PhysicalType::Bool => "bool",
            PhysicalType::Str => "str",
            PhysicalType::Json => "json",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "int16" => Some(PhysicalType::Int16),
            "int32" => Some(PhysicalType::Int32),
            "float16" => Some(PhysicalType::Float16),
            "float32" => Some(PhysicalType::Float32),
            "bool" => Some(PhysicalType::Bool),
            "str" => Some(PhysicalType::Str),
            "json" => Some(PhysicalType::Json),
            _ => None,
        }
    }

    /// Numeric columns carry an argsort index and support aggregates.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            PhysicalType::Int16
                | PhysicalType::Int32
                | PhysicalType::Float16
                | PhysicalType::Float32
        )
    }

    /// Bytes per value for fixed-width types; None for str/json.
    pub fn fixed_width(&self) -> Option<usize> {
        match self {
            PhysicalType::Int16 | PhysicalType::Float16 => Some(2),
            PhysicalType::Int32 | PhysicalType::Float32 => Some(4),
            PhysicalType::Bool => Some(1),
            PhysicalType::Str | PhysicalType::Json => None,
        }
    }
}
