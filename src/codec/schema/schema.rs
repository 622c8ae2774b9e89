use std::collections::HashMap;

use serde::Deserialize;

use crate::codec::errors::CodecError;
use crate::codec::schema::types::PhysicalType;

/// Ordered field list plus field → type map plus row count. The canonical
/// serialized form is `to_plaintext`/`from_plaintext`, the schema frame's
/// JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub fields: Vec<String>,
    pub types: HashMap<String, PhysicalType>,
    pub num_rows: u32,
}

/// Raw schema document as it appears on disk. Type tags stay strings here so
/// an unknown tag surfaces as `SchemaMalformed` instead of a bare JSON error.
#[derive(Debug, Deserialize)]
struct SchemaDoc {
    fields: Vec<String>,
    types: HashMap<String, String>,
    num_rows: u32,
}

impl Schema {
    pub fn new(fields: Vec<String>, types: HashMap<String, PhysicalType>, num_rows: u32) -> Self {
        Self {
            fields,
            types,
            num_rows,
        }
    }

    pub fn from_plaintext(bytes: &[u8]) -> Result<Self, CodecError> {
        let doc: SchemaDoc = serde_json::from_slice(bytes)
            .map_err(|e| CodecError::SchemaMalformed(format!("schema JSON: {e}")))?;

        let mut types = HashMap::with_capacity(doc.types.len());
        for (field, tag) in &doc.types {
            let phys = PhysicalType::from_tag(tag).ok_or_else(|| {
                CodecError::SchemaMalformed(format!("unknown type tag '{tag}' for field '{field}'"))
            })?;
            types.insert(field.clone(), phys);
        }

        let schema = Self {
            fields: doc.fields,
            types,
            num_rows: doc.num_rows,
        };
        schema.check()?;
        Ok(schema)
    }

    pub fn to_plaintext(&self) -> Result<Vec<u8>, serde_json::Error> {
        let types: HashMap<&str, &str> = self
            .types
            .iter()
            .map(|(f, t)| (f.as_str(), t.tag()))
            .collect();
        serde_json::to_vec(&serde_json::json!({
            "fields": self.fields,
            "types": types,
            "num_rows": self.num_rows,
        }))
    }

    /// Structural consistency: no duplicate field names, every declared
    /// field carries a type.
    pub fn check(&self) -> Result<(), CodecError> {
        let mut seen = std::collections::HashSet::with_capacity(self.fields.len());
        for field in &self.fields {
            if !seen.insert(field) {
                return Err(CodecError::SchemaMalformed(format!(
                    "duplicate field name '{field}'"
                )));
            }
            if !self.types.contains_key(field) {
                return Err(CodecError::SchemaMalformed(format!(
                    "field '{field}' has no type entry"
                )));
            }
        }
        Ok(())
    }

    pub fn type_of(&self, field: &str) -> Option<PhysicalType> {
        self.types.get(field).copied()
    }

    pub fn is_numeric(&self, field: &str) -> bool {
        self.type_of(field).is_some_and(|t| t.is_numeric())
    }

    /// Fields that get an argsort index, in schema order.
    pub fn numeric_fields(&self) -> impl Iterator<Item = &String> {
        self.fields.iter().filter(|f| self.is_numeric(f))
    }
}
