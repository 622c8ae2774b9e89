use serde_json::Value;
use tracing::debug;

use crate::codec::column::ColumnValues;
use crate::codec::errors::CodecError;
use crate::codec::frame::decompress_region;
use crate::codec::index::decode_permutation;

use super::reader::JonxReader;

enum Extremum {
    Min,
    Max,
}

impl JonxReader {
    fn numeric_column(&self, field: &str) -> Result<ColumnValues, CodecError> {
        match self.schema().type_of(field) {
            None => Err(CodecError::UnknownField(field.to_string())),
            Some(t) if !t.is_numeric() => Err(CodecError::NotNumeric(field.to_string())),
            Some(_) => self.get_column(field),
        }
    }

    /// Smallest value of a numeric column. With `use_index`, only the index
    /// frame and the column frame are decompressed and π(0) is read; without
    /// it, the column is scanned. `None` only for an empty file.
    pub fn find_min(&self, field: &str, use_index: bool) -> Result<Option<Value>, CodecError> {
        self.extremum(field, use_index, Extremum::Min)
    }

    /// Largest value of a numeric column; counterpart of `find_min` reading
    /// π(N-1).
    pub fn find_max(&self, field: &str, use_index: bool) -> Result<Option<Value>, CodecError> {
        self.extremum(field, use_index, Extremum::Max)
    }

    fn extremum(
        &self,
        field: &str,
        use_index: bool,
        which: Extremum,
    ) -> Result<Option<Value>, CodecError> {
        match self.schema().type_of(field) {
            None => return Err(CodecError::UnknownField(field.to_string())),
            Some(t) if !t.is_numeric() => return Err(CodecError::NotNumeric(field.to_string())),
            Some(_) => {}
        }
        let n = self.count();
        if n == 0 {
            return Ok(None);
        }

        if use_index {
            if let Some(region) = self.directory()?.indexes.get(field).copied() {
                let plaintext = decompress_region(self.bytes(), region)?;
                let perm = decode_permutation(field, &plaintext, n)?;
                let row = match which {
                    Extremum::Min => perm[0],
                    Extremum::Max => perm[n as usize - 1],
                };
                if row >= n {
                    return Err(CodecError::IndexInvalid {
                        field: field.to_string(),
                        reason: format!("row {row} out of range for {n} rows"),
                    });
                }
                debug!(target: "reader::extremum", %field, row, "Resolved extremum via index");
                let column = self.get_column(field)?;
                return Ok(column.value_at(row as usize));
            }
        }

        let column = self.get_column(field)?;
        let mut best: Option<(usize, f64)> = None;
        for i in 0..column.len() {
            if let Some(x) = column.as_f64_at(i) {
                best = match (best, &which) {
                    (None, _) => Some((i, x)),
                    (Some((_, b)), Extremum::Min) if x < b => Some((i, x)),
                    (Some((_, b)), Extremum::Max) if x > b => Some((i, x)),
                    (keep, _) => keep,
                };
            }
        }
        Ok(best.and_then(|(i, _)| column.value_at(i)))
    }

    /// Sum of a numeric column; integer columns stay integer-exact.
    pub fn sum(&self, field: &str) -> Result<Value, CodecError> {
        let column = self.numeric_column(field)?;
        let out = match &column {
            ColumnValues::Int16(v) => Value::from(v.iter().map(|&x| i64::from(x)).sum::<i64>()),
            ColumnValues::Int32(v) => Value::from(v.iter().map(|&x| i64::from(x)).sum::<i64>()),
            ColumnValues::Float16(v) => Value::from(v.iter().map(|x| x.to_f64()).sum::<f64>()),
            ColumnValues::Float32(v) => Value::from(v.iter().map(|&x| f64::from(x)).sum::<f64>()),
            _ => return Err(CodecError::NotNumeric(field.to_string())),
        };
        Ok(out)
    }

    /// Mean of a numeric column; 0.0 for an empty file.
    pub fn avg(&self, field: &str) -> Result<f64, CodecError> {
        let column = self.numeric_column(field)?;
        let n = column.len();
        if n == 0 {
            return Ok(0.0);
        }
        let mut total = 0.0;
        for i in 0..n {
            if let Some(x) = column.as_f64_at(i) {
                total += x;
            }
        }
        Ok(total / n as f64)
    }
}
