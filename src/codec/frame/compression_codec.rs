use crate::codec::errors::FrameError;
use crate::shared::config::CONFIG;

pub const DEFAULT_COMPRESSION_LEVEL: i32 = 7;

pub trait CompressionCodec {
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, FrameError>;
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, FrameError>;
}

/// zstd codec. The level only affects writing; decompression accepts
/// payloads produced at any level.
pub struct ZstdCodec {
    level: i32,
}

impl ZstdCodec {
    pub fn new(level: i32) -> Self {
        Self { level }
    }

    pub fn from_config() -> Self {
        Self::new(CONFIG.codec.compression_level)
    }
}

impl Default for ZstdCodec {
    fn default() -> Self {
        Self::new(DEFAULT_COMPRESSION_LEVEL)
    }
}

impl CompressionCodec for ZstdCodec {
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, FrameError> {
        zstd::encode_all(input, self.level)
            .map_err(|e| FrameError::Corrupt(format!("zstd compress: {e}")))
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, FrameError> {
        zstd::decode_all(input).map_err(|e| FrameError::Corrupt(format!("zstd decompress: {e}")))
    }
}
