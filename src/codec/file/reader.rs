use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use std::sync::OnceLock;

use memmap2::{Mmap, MmapOptions};
use tracing::debug;

use crate::codec::column::{decode_column, ColumnValues};
use crate::codec::errors::CodecError;
use crate::codec::frame::{decompress_region, read_frame};
use crate::codec::schema::{PhysicalType, Schema};
use crate::shared::le_slice_reader::LeSliceReader;

use super::directory::{build_directory, Directory};
use super::{HEADER_LEN, MAGIC, VERSION};

/// Immutable byte view backing a reader.
enum ByteSource {
    Mmap(Mmap),
    Owned(Vec<u8>),
}

impl ByteSource {
    fn as_slice(&self) -> &[u8] {
        match self {
            ByteSource::Mmap(m) => m,
            ByteSource::Owned(v) => v,
        }
    }
}

/// Handle over one container file: parsed header and schema plus a lazily
/// built column directory. Column data is only decompressed on request, and
/// decoded values are owned by the caller.
///
/// The directory is populated on first access and is not safe for
/// concurrent first-touch; share a reader across threads only after a
/// `warm()` call.
pub struct JonxReader {
    source: ByteSource,
    schema: Schema,
    data_start: usize,
    directory: OnceLock<Directory>,
}

impl std::fmt::Debug for JonxReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JonxReader")
            .field("schema", &self.schema)
            .field("data_start", &self.data_start)
            .finish()
    }
}

impl JonxReader {
    /// Memory-maps a container file. Only the header and schema frame are
    /// parsed here.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CodecError> {
        let file = File::open(path.as_ref())?;
        let len = file.metadata()?.len();
        if (len as usize) < HEADER_LEN {
            return Err(CodecError::HeaderInvalid(format!(
                "file is {len} bytes, header needs {HEADER_LEN}"
            )));
        }
        let mmap = unsafe { MmapOptions::new().map(&file)? };
        debug!(
            target: "reader::open",
            path = %path.as_ref().display(),
            bytes = mmap.len(),
            "Opened container file"
        );
        Self::from_source(ByteSource::Mmap(mmap))
    }

    /// Wraps an in-memory container.
    pub fn open_bytes(bytes: Vec<u8>) -> Result<Self, CodecError> {
        Self::from_source(ByteSource::Owned(bytes))
    }

    fn from_source(source: ByteSource) -> Result<Self, CodecError> {
        let bytes = source.as_slice();
        if bytes.len() < HEADER_LEN {
            return Err(CodecError::HeaderInvalid(format!(
                "file is {} bytes, header needs {HEADER_LEN}",
                bytes.len()
            )));
        }
        if bytes[0..4] != MAGIC {
            return Err(CodecError::HeaderInvalid("magic mismatch".to_string()));
        }
        let version = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        if version != VERSION {
            return Err(CodecError::UnsupportedVersion(version));
        }

        let mut cursor = LeSliceReader::at_offset(bytes, HEADER_LEN);
        let schema_plaintext = read_frame(&mut cursor)?;
        let schema = Schema::from_plaintext(&schema_plaintext)?;
        let data_start = cursor.position();
        debug!(
            target: "reader::open",
            fields = schema.fields.len(),
            rows = schema.num_rows,
            "Parsed schema frame"
        );

        Ok(Self {
            source,
            schema,
            data_start,
            directory: OnceLock::new(),
        })
    }

    pub(crate) fn bytes(&self) -> &[u8] {
        self.source.as_slice()
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn file_size(&self) -> usize {
        self.bytes().len()
    }

    /// Row count, straight from the schema.
    pub fn count(&self) -> u32 {
        self.schema.num_rows
    }

    /// Row count scoped to one field; all columns share N.
    pub fn count_field(&self, field: &str) -> Result<u32, CodecError> {
        if self.schema.type_of(field).is_none() {
            return Err(CodecError::UnknownField(field.to_string()));
        }
        Ok(self.schema.num_rows)
    }

    pub(crate) fn directory(&self) -> Result<&Directory, CodecError> {
        if let Some(dir) = self.directory.get() {
            return Ok(dir);
        }
        let dir = build_directory(self.bytes(), &self.schema, self.data_start)?;
        let _ = self.directory.set(dir);
        Ok(self.directory.get().expect("directory just set"))
    }

    /// Pre-populates the column directory so later accesses are read-only.
    pub fn warm(&self) -> Result<(), CodecError> {
        self.directory().map(|_| ())
    }

    /// Decompresses and decodes exactly one column frame.
    pub fn get_column(&self, field: &str) -> Result<ColumnValues, CodecError> {
        let phys = self
            .schema
            .type_of(field)
            .ok_or_else(|| CodecError::UnknownField(field.to_string()))?;
        let directory = self.directory()?;
        let region = directory
            .columns
            .get(field)
            .ok_or_else(|| CodecError::UnknownField(field.to_string()))?;

        let plaintext = decompress_region(self.bytes(), *region)?;
        debug!(
            target: "reader::column",
            %field,
            tag = phys.tag(),
            compressed = region.len,
            plaintext = plaintext.len(),
            "Decoded column frame"
        );
        decode_column(field, &plaintext, phys, self.schema.num_rows)
    }

    /// Batched variant of `get_column`; the directory walk happens at most
    /// once per handle either way.
    pub fn get_columns(&self, fields: &[&str]) -> Result<HashMap<String, ColumnValues>, CodecError> {
        self.warm()?;
        let mut out = HashMap::with_capacity(fields.len());
        for &field in fields {
            out.insert(field.to_string(), self.get_column(field)?);
        }
        Ok(out)
    }

    pub fn has_index(&self, field: &str) -> Result<bool, CodecError> {
        if self.schema.type_of(field).is_none() {
            return Err(CodecError::UnknownField(field.to_string()));
        }
        Ok(self.directory()?.indexes.contains_key(field))
    }

    pub fn is_numeric(&self, field: &str) -> Result<bool, CodecError> {
        match self.schema.type_of(field) {
            Some(t) => Ok(t.is_numeric()),
            None => Err(CodecError::UnknownField(field.to_string())),
        }
    }

    pub fn info(&self) -> Result<FileInfo, CodecError> {
        let directory = self.directory()?;
        let indexed_fields: Vec<String> = self
            .schema
            .fields
            .iter()
            .filter(|f| directory.indexes.contains_key(*f))
            .cloned()
            .collect();
        Ok(FileInfo {
            fields: self.schema.fields.clone(),
            types: self.schema.types.clone(),
            num_rows: self.schema.num_rows,
            column_count: self.schema.fields.len(),
            indexed_fields,
            file_size: self.file_size(),
        })
    }
}

/// Summary metadata for one container, as reported by `info()`.
#[derive(Debug, Clone, PartialEq)]
pub struct FileInfo {
    pub fields: Vec<String>,
    pub types: HashMap<String, PhysicalType>,
    pub num_rows: u32,
    pub column_count: usize,
    pub indexed_fields: Vec<String>,
    pub file_size: usize,
}
