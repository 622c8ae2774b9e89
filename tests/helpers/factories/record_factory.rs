use serde_json::{json, Value};

/// Builds record batches column-by-column for tests. Columns keep insertion
/// order; `build` transposes them into one JSON object per row.
pub struct RecordFactory {
    columns: Vec<(String, Vec<Value>)>,
}

impl RecordFactory {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    pub fn with_ints(self, field: &str, values: &[i64]) -> Self {
        self.with_values(field, values.iter().map(|&v| json!(v)).collect())
    }

    pub fn with_floats(self, field: &str, values: &[f64]) -> Self {
        self.with_values(field, values.iter().map(|&v| json!(v)).collect())
    }

    pub fn with_bools(self, field: &str, values: &[bool]) -> Self {
        self.with_values(field, values.iter().map(|&v| json!(v)).collect())
    }

    pub fn with_strs(self, field: &str, values: &[&str]) -> Self {
        self.with_values(field, values.iter().map(|&v| json!(v)).collect())
    }

    pub fn with_values(mut self, field: &str, values: Vec<Value>) -> Self {
        self.columns.push((field.to_string(), values));
        self
    }

    pub fn build(self) -> Vec<Value> {
        let rows = self.columns.first().map(|(_, v)| v.len()).unwrap_or(0);
        for (field, values) in &self.columns {
            assert_eq!(
                values.len(),
                rows,
                "column '{field}' length differs from the first column"
            );
        }

        (0..rows)
            .map(|i| {
                let mut obj = serde_json::Map::new();
                for (field, values) in &self.columns {
                    obj.insert(field.clone(), values[i].clone());
                }
                Value::Object(obj)
            })
            .collect()
    }
}

impl Default for RecordFactory {
    fn default() -> Self {
        Self::new()
    }
}
