use crate::codec::frame::{CompressionCodec, ZstdCodec, DEFAULT_COMPRESSION_LEVEL};

#[test]
fn compress_then_decompress_is_identity() {
    let codec = ZstdCodec::default();
    let input = b"the quick brown fox jumps over the lazy dog".repeat(50);
    let compressed = codec.compress(&input).expect("compress");
    assert!(compressed.len() < input.len());
    let restored = codec.decompress(&compressed).expect("decompress");
    assert_eq!(restored, input);
}

#[test]
fn decompress_accepts_any_write_level() {
    // A frame written at level 1 must decode with the default codec.
    let fast = ZstdCodec::new(1);
    let input = vec![42u8; 4096];
    let compressed = fast.compress(&input).expect("compress");
    let restored = ZstdCodec::default().decompress(&compressed).expect("decompress");
    assert_eq!(restored, input);
}

#[test]
fn decompress_rejects_garbage() {
    let codec = ZstdCodec::default();
    assert!(codec.decompress(b"definitely not zstd").is_err());
}

#[test]
fn default_level_is_seven() {
    assert_eq!(DEFAULT_COMPRESSION_LEVEL, 7);
}

#[test]
fn empty_input_roundtrips() {
    let codec = ZstdCodec::default();
    let compressed = codec.compress(&[]).expect("compress");
    let restored = codec.decompress(&compressed).expect("decompress");
    assert!(restored.is_empty());
}
