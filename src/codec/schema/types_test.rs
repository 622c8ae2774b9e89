use crate::codec::schema::types::PhysicalType;

#[test]
fn tags_roundtrip() {
    for t in [
        PhysicalType::Int16,
        PhysicalType::Int32,
        PhysicalType::Float16,
        PhysicalType::Float32,
        PhysicalType::Bool,
        PhysicalType::Str,
        PhysicalType::Json,
    ] {
        assert_eq!(PhysicalType::from_tag(t.tag()), Some(t));
    }
    assert_eq!(PhysicalType::from_tag("int64"), None);
    assert_eq!(PhysicalType::from_tag(""), None);
}

#[test]
fn numeric_classification() {
    assert!(PhysicalType::Int16.is_numeric());
    assert!(PhysicalType::Int32.is_numeric());
    assert!(PhysicalType::Float16.is_numeric());
    assert!(PhysicalType::Float32.is_numeric());
    assert!(!PhysicalType::Bool.is_numeric());
    assert!(!PhysicalType::Str.is_numeric());
    assert!(!PhysicalType::Json.is_numeric());
}

#[test]
fn fixed_widths() {
    assert_eq!(PhysicalType::Int16.fixed_width(), Some(2));
    assert_eq!(PhysicalType::Int32.fixed_width(), Some(4));
    assert_eq!(PhysicalType::Float16.fixed_width(), Some(2));
    assert_eq!(PhysicalType::Float32.fixed_width(), Some(4));
    assert_eq!(PhysicalType::Bool.fixed_width(), Some(1));
    assert_eq!(PhysicalType::Str.fixed_width(), None);
    assert_eq!(PhysicalType::Json.fixed_width(), None);
}

#[test]
fn serde_uses_format_tags() {
    let json = serde_json::to_string(&PhysicalType::Float16).expect("serialize");
    assert_eq!(json, "\"float16\"");
    let back: PhysicalType = serde_json::from_str("\"int32\"").expect("deserialize");
    assert_eq!(back, PhysicalType::Int32);
}
