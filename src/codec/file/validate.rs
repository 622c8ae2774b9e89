use tracing::warn;

use crate::codec::errors::CodecError;
use crate::codec::frame::decompress_region;
use crate::codec::index::{decode_permutation, validate_permutation};

use super::reader::JonxReader;

/// Outcome of `check_schema` / `validate`. Errors mean the file (or part of
/// it) is unusable; warnings are advisory.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    fn error(&mut self, msg: String) {
        self.errors.push(msg);
    }

    fn warning(&mut self, msg: String) {
        self.warnings.push(msg);
    }

    fn finish(mut self) -> Self {
        self.valid = self.errors.is_empty();
        self
    }
}

impl JonxReader {
    /// Structural schema consistency: declared fields are unique and typed,
    /// index entries point at known numeric fields. Walks frame lengths to
    /// locate the index section but never decompresses column payloads.
    pub fn check_schema(&self) -> ValidationReport {
        let mut report = ValidationReport::default();

        if let Err(e) = self.schema().check() {
            report.error(e.to_string());
        }

        match self.directory() {
            Ok(directory) => {
                for name in directory.indexes.keys() {
                    match self.schema().type_of(name) {
                        None => report.error(format!("index entry for unknown field '{name}'")),
                        Some(t) if !t.is_numeric() => report.error(format!(
                            "index entry for non-numeric field '{name}' ({})",
                            t.tag()
                        )),
                        Some(_) => {}
                    }
                }
            }
            Err(e) => report.error(format!("directory walk failed: {e}")),
        }

        report.finish()
    }

    /// Everything `check_schema` does, plus a full decompress-and-decode of
    /// every column and index: length invariants, permutation-ness, and
    /// sort order. Errors are collected per column instead of aborting.
    pub fn validate(&self) -> ValidationReport {
        let mut report = self.check_schema();

        let directory = match self.directory() {
            Ok(d) => d,
            // Already reported by check_schema; nothing else is reachable.
            Err(_) => return report.finish(),
        };

        for field in &self.schema().fields {
            let column = match self.get_column(field) {
                Ok(c) => c,
                Err(e) => {
                    warn!(target: "validate::column", %field, error = %e, "Column failed validation");
                    report.error(format!("column '{field}': {e}"));
                    continue;
                }
            };

            if let Some(region) = directory.indexes.get(field).copied() {
                let result = decompress_region(self.bytes(), region)
                    .map_err(CodecError::from)
                    .and_then(|plaintext| decode_permutation(field, &plaintext, self.count()))
                    .and_then(|perm| validate_permutation(field, &perm, &column));
                if let Err(e) = result {
                    warn!(target: "validate::index", %field, error = %e, "Index failed validation");
                    report.error(format!("index '{field}': {e}"));
                }
            }
        }

        if directory.end_offset < self.file_size() {
            report.warning(format!(
                "{} trailing bytes after index section",
                self.file_size() - directory.end_offset
            ));
        }

        report.finish()
    }
}
