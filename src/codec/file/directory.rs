use std::collections::HashMap;

use tracing::debug;

use crate::codec::errors::CodecError;
use crate::codec::frame::{skip_frame, FrameRegion};
use crate::codec::index::parse_index_section;
use crate::codec::schema::Schema;
use crate::shared::le_slice_reader::LeSliceReader;

/// Field → byte region map for column frames and index frames, produced by
/// one frame-skipping walk over the file body. Nothing is decompressed.
#[derive(Debug, Default)]
pub struct Directory {
    pub columns: HashMap<String, FrameRegion>,
    pub indexes: HashMap<String, FrameRegion>,
    /// Offset just past the index section; trailing bytes after it are
    /// flagged by `validate`.
    pub end_offset: usize,
}

pub fn build_directory(
    bytes: &[u8],
    schema: &Schema,
    data_start: usize,
) -> Result<Directory, CodecError> {
    let mut cursor = LeSliceReader::at_offset(bytes, data_start);

    let mut columns = HashMap::with_capacity(schema.fields.len());
    for field in &schema.fields {
        let region = skip_frame(&mut cursor)?;
        columns.insert(field.clone(), region);
    }

    let mut indexes = HashMap::new();
    for (name, region) in parse_index_section(&mut cursor)? {
        indexes.insert(name, region);
    }

    debug!(
        target: "reader::directory",
        columns = columns.len(),
        indexes = indexes.len(),
        end_offset = cursor.position(),
        "Built column directory"
    );
    Ok(Directory {
        columns,
        indexes,
        end_offset: cursor.position(),
    })
}
