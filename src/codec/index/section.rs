use crate::codec::column::ColumnValues;
use crate::codec::errors::{CodecError, EncodeError, FrameError};
use crate::codec::frame::{skip_frame, write_frame, CompressionCodec, FrameRegion};
use crate::shared::le_slice_reader::LeSliceReader;

/// Appends the index section: `u32_le count`, then per entry
/// `u32_le name_len ∥ name ∥ frame(N × u32_le row indices)`.
pub fn write_index_section<C: CompressionCodec>(
    out: &mut Vec<u8>,
    entries: &[(&str, Vec<u32>)],
    codec: &C,
) -> Result<(), EncodeError> {
    out.extend_from_slice(&(entries.len() as u32).to_le_bytes());
    for (name, perm) in entries {
        out.extend_from_slice(&(name.len() as u32).to_le_bytes());
        out.extend_from_slice(name.as_bytes());

        let mut plaintext = Vec::with_capacity(perm.len() * 4);
        for row in perm {
            plaintext.extend_from_slice(&row.to_le_bytes());
        }
        write_frame(out, &plaintext, codec)?;
    }
    Ok(())
}

/// Walks the index section without decompressing anything, returning each
/// entry's name and the byte region of its permutation frame.
pub fn parse_index_section(
    reader: &mut LeSliceReader,
) -> Result<Vec<(String, FrameRegion)>, CodecError> {
    let count = reader.read_u32().ok_or_else(|| {
        CodecError::Frame(FrameError::Truncated(
            "source ended before index count".to_string(),
        ))
    })?;

    let mut entries = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let name_len = reader.read_u32().ok_or_else(truncated_entry)? as usize;
        let name_bytes = reader.read_bytes(name_len).ok_or_else(truncated_entry)?;
        let name = std::str::from_utf8(name_bytes)
            .map_err(|e| CodecError::IndexInvalid {
                field: String::from_utf8_lossy(name_bytes).into_owned(),
                reason: format!("index name is not UTF-8: {e}"),
            })?
            .to_string();
        let region = skip_frame(reader)?;
        entries.push((name, region));
    }
    Ok(entries)
}

fn truncated_entry() -> CodecError {
    CodecError::Frame(FrameError::Truncated(
        "source ended inside index entry".to_string(),
    ))
}

/// Decodes an index frame's plaintext into row indices; the plaintext must
/// be exactly `num_rows` little-endian u32 values.
pub fn decode_permutation(
    field: &str,
    plaintext: &[u8],
    num_rows: u32,
) -> Result<Vec<u32>, CodecError> {
    let expected = num_rows as usize * 4;
    if plaintext.len() != expected {
        return Err(CodecError::IndexInvalid {
            field: field.to_string(),
            reason: format!(
                "expected {expected} bytes for {num_rows} rows, got {}",
                plaintext.len()
            ),
        });
    }
    Ok(plaintext
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Checks that `perm` is a permutation of [0, N) and that the column is
/// non-decreasing along it.
pub fn validate_permutation(
    field: &str,
    perm: &[u32],
    column: &ColumnValues,
) -> Result<(), CodecError> {
    let n = column.len();
    if perm.len() != n {
        return Err(CodecError::IndexInvalid {
            field: field.to_string(),
            reason: format!("index has {} entries for {n} rows", perm.len()),
        });
    }

    let mut seen = vec![false; n];
    for &row in perm {
        let row = row as usize;
        if row >= n || seen[row] {
            return Err(CodecError::IndexInvalid {
                field: field.to_string(),
                reason: "index is not a permutation of the row range".to_string(),
            });
        }
        seen[row] = true;
    }

    for window in perm.windows(2) {
        let a = column.as_f64_at(window[0] as usize);
        let b = column.as_f64_at(window[1] as usize);
        match (a, b) {
            (Some(a), Some(b)) if a <= b => {}
            (Some(_), Some(_)) => {
                return Err(CodecError::IndexInvalid {
                    field: field.to_string(),
                    reason: format!(
                        "index not sorted: rows {} and {} are out of order",
                        window[0], window[1]
                    ),
                })
            }
            _ => {
                return Err(CodecError::IndexInvalid {
                    field: field.to_string(),
                    reason: "index over a non-numeric column".to_string(),
                })
            }
        }
    }
    Ok(())
}
