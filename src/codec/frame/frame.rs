use crate::codec::errors::FrameError;
use crate::shared::le_slice_reader::LeSliceReader;

use super::compression_codec::{CompressionCodec, ZstdCodec};

/// Byte region of one frame's compressed payload (the length prefix excluded).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRegion {
    pub offset: usize,
    pub len: usize,
}

/// Compresses `plaintext` and appends `u32_le length ∥ payload` to `out`.
pub fn write_frame<C: CompressionCodec>(
    out: &mut Vec<u8>,
    plaintext: &[u8],
    codec: &C,
) -> Result<(), FrameError> {
    let compressed = codec.compress(plaintext)?;
    out.extend_from_slice(&(compressed.len() as u32).to_le_bytes());
    out.extend_from_slice(&compressed);
    Ok(())
}

/// Reads one frame at the cursor and returns its decompressed plaintext.
pub fn read_frame(reader: &mut LeSliceReader) -> Result<Vec<u8>, FrameError> {
    let len = reader
        .read_u32()
        .ok_or_else(|| FrameError::Truncated("source ended inside frame length".to_string()))?
        as usize;
    let payload = reader.read_bytes(len).ok_or_else(|| {
        FrameError::Truncated(format!("frame claims {len} payload bytes past end of source"))
    })?;
    ZstdCodec::default().decompress(payload)
}

/// Advances the cursor past one frame without decompressing it and reports
/// where the payload sits. This is what the lazy directory walk is built on.
pub fn skip_frame(reader: &mut LeSliceReader) -> Result<FrameRegion, FrameError> {
    let len = reader
        .read_u32()
        .ok_or_else(|| FrameError::Truncated("source ended inside frame length".to_string()))?
        as usize;
    let offset = reader.position();
    if !reader.skip(len) {
        return Err(FrameError::Truncated(format!(
            "frame claims {len} payload bytes past end of source"
        )));
    }
    Ok(FrameRegion { offset, len })
}

/// Decompresses the payload of a previously located frame region.
pub fn decompress_region(bytes: &[u8], region: FrameRegion) -> Result<Vec<u8>, FrameError> {
    let end = region
        .offset
        .checked_add(region.len)
        .filter(|&e| e <= bytes.len())
        .ok_or_else(|| FrameError::Truncated("frame region out of bounds".to_string()))?;
    ZstdCodec::default().decompress(&bytes[region.offset..end])
}
