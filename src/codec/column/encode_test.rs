use serde_json::{json, Value};

use crate::codec::column::encode_column;
use crate::codec::errors::EncodeError;
use crate::codec::schema::PhysicalType;

fn encode(values: &[Value], phys: PhysicalType) -> Result<Vec<u8>, EncodeError> {
    let refs: Vec<&Value> = values.iter().collect();
    encode_column("field", &refs, phys)
}

#[test]
fn int16_little_endian_layout() {
    let bytes = encode(&[json!(1), json!(-2), json!(300)], PhysicalType::Int16).expect("encode");
    assert_eq!(bytes.len(), 6);
    assert_eq!(&bytes[0..2], &1i16.to_le_bytes());
    assert_eq!(&bytes[2..4], &(-2i16).to_le_bytes());
    assert_eq!(&bytes[4..6], &300i16.to_le_bytes());
}

#[test]
fn int32_little_endian_layout() {
    let bytes = encode(&[json!(100_000), json!(-1)], PhysicalType::Int32).expect("encode");
    assert_eq!(bytes.len(), 8);
    assert_eq!(&bytes[0..4], &100_000i32.to_le_bytes());
    assert_eq!(&bytes[4..8], &(-1i32).to_le_bytes());
}

#[test]
fn float32_layout_and_integer_recoercion() {
    // 1 appears in a float column: encoded as 1.0
    let bytes = encode(&[json!(1), json!(2.5)], PhysicalType::Float32).expect("encode");
    assert_eq!(&bytes[0..4], &1.0f32.to_le_bytes());
    assert_eq!(&bytes[4..8], &2.5f32.to_le_bytes());
}

#[test]
fn float16_uses_ieee_binary16_bits() {
    let bytes = encode(&[json!(1.5)], PhysicalType::Float16).expect("encode");
    // 1.5 in binary16 is 0x3E00
    assert_eq!(bytes, 0x3E00u16.to_le_bytes());
}

#[test]
fn bool_is_one_byte_per_value() {
    let bytes = encode(&[json!(true), json!(false), json!(true)], PhysicalType::Bool)
        .expect("encode");
    assert_eq!(bytes, vec![1, 0, 1]);
}

#[test]
fn str_plaintext_is_a_json_array() {
    let bytes = encode(&[json!("a"), json!("b")], PhysicalType::Str).expect("encode");
    let back: Vec<String> = serde_json::from_slice(&bytes).expect("parse");
    assert_eq!(back, ["a", "b"]);
}

#[test]
fn json_plaintext_preserves_nested_values() {
    let values = [json!({"a": 1}), json!([1, 2])];
    let bytes = encode(&values, PhysicalType::Json).expect("encode");
    let back: Vec<Value> = serde_json::from_slice(&bytes).expect("parse");
    assert_eq!(back, values);
}

#[test]
fn int16_overflow_is_out_of_range() {
    assert!(matches!(
        encode(&[json!(40_000)], PhysicalType::Int16),
        Err(EncodeError::ValueOutOfRange { .. })
    ));
}

#[test]
fn empty_column_encodes_to_empty_plaintext() {
    assert!(encode(&[], PhysicalType::Int16).expect("encode").is_empty());
    assert_eq!(encode(&[], PhysicalType::Str).expect("encode"), b"[]");
}
