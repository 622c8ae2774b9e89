use std::sync::Arc;

use crate::codec::file::writer::encode_records;
use crate::codec::file::{ColumnCache, JonxReader};
use crate::test_helpers::RecordFactory;

fn sample_reader() -> JonxReader {
    let records = RecordFactory::new()
        .with_ints("id", &[1, 2])
        .with_strs("name", &["a", "b"])
        .build();
    JonxReader::open_bytes(encode_records(&records).expect("encode")).expect("open")
}

#[test]
fn second_access_hits_the_cache() {
    let reader = sample_reader();
    let cache = ColumnCache::new(4);

    let first = cache.get_or_load(&reader, "id").expect("load");
    let second = cache.get_or_load(&reader, "id").expect("load");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);
}

#[test]
fn capacity_one_evicts_the_older_column() {
    let reader = sample_reader();
    let cache = ColumnCache::new(1);

    let id_first = cache.get_or_load(&reader, "id").expect("load");
    cache.get_or_load(&reader, "name").expect("load");
    assert_eq!(cache.len(), 1);

    // "id" was evicted; reloading decodes a fresh copy.
    let id_second = cache.get_or_load(&reader, "id").expect("load");
    assert!(!Arc::ptr_eq(&id_first, &id_second));
    assert_eq!(*id_first, *id_second);
}

#[test]
fn unknown_field_errors_pass_through_uncached() {
    let reader = sample_reader();
    let cache = ColumnCache::new(4);
    assert!(cache.get_or_load(&reader, "missing").is_err());
    assert!(cache.is_empty());
}

#[test]
fn zero_capacity_is_clamped() {
    let reader = sample_reader();
    let cache = ColumnCache::new(0);
    cache.get_or_load(&reader, "id").expect("load");
    assert_eq!(cache.len(), 1);
}
