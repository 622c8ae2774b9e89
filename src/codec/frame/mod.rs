pub mod compression_codec;
pub mod frame;

pub use compression_codec::{CompressionCodec, ZstdCodec, DEFAULT_COMPRESSION_LEVEL};
pub use frame::{decompress_region, read_frame, skip_frame, write_frame, FrameRegion};

#[cfg(test)]
mod compression_codec_test;
