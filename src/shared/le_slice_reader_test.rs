use crate::shared::le_slice_reader::LeSliceReader;

#[test]
fn reads_u32_values_in_order() {
    let mut buf = Vec::new();
    buf.extend_from_slice(&7u32.to_le_bytes());
    buf.extend_from_slice(&0xDEAD_BEEFu32.to_le_bytes());

    let mut r = LeSliceReader::new(&buf);
    assert_eq!(r.read_u32(), Some(7));
    assert_eq!(r.read_u32(), Some(0xDEAD_BEEF));
    assert_eq!(r.read_u32(), None);
}

#[test]
fn read_bytes_advances_position() {
    let buf = [1u8, 2, 3, 4, 5];
    let mut r = LeSliceReader::new(&buf);
    assert_eq!(r.read_bytes(3), Some(&[1u8, 2, 3][..]));
    assert_eq!(r.position(), 3);
    assert_eq!(r.remaining(), 2);
    assert_eq!(r.read_bytes(3), None);
    // Failed read does not consume anything
    assert_eq!(r.position(), 3);
}

#[test]
fn skip_past_end_is_rejected() {
    let buf = [0u8; 4];
    let mut r = LeSliceReader::new(&buf);
    assert!(r.skip(4));
    assert!(!r.skip(1));
}

#[test]
fn at_offset_starts_midway() {
    let mut buf = vec![0xFFu8; 4];
    buf.extend_from_slice(&42u32.to_le_bytes());
    let mut r = LeSliceReader::at_offset(&buf, 4);
    assert_eq!(r.read_u32(), Some(42));
}
