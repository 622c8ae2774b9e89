use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

use lru::LruCache;
use tracing::debug;

use crate::codec::column::ColumnValues;
use crate::codec::errors::CodecError;
use crate::shared::config::CONFIG;

use super::reader::JonxReader;

/// Opt-in memoization of decoded columns, keyed by field name. The reader
/// itself never caches; callers that re-read the same columns can put this
/// in front of `get_column`.
pub struct ColumnCache {
    inner: Mutex<LruCache<String, Arc<ColumnValues>>>,
}

impl ColumnCache {
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity.max(1)).expect("capacity clamped to >= 1");
        Self {
            inner: Mutex::new(LruCache::new(cap)),
        }
    }

    pub fn from_config() -> Self {
        Self::new(CONFIG.codec.column_cache_capacity)
    }

    pub fn get_or_load(
        &self,
        reader: &JonxReader,
        field: &str,
    ) -> Result<Arc<ColumnValues>, CodecError> {
        if let Ok(mut guard) = self.inner.lock() {
            if let Some(column) = guard.get(field) {
                debug!(target: "reader::cache", %field, "Column cache hit");
                return Ok(Arc::clone(column));
            }
        }

        let column = Arc::new(reader.get_column(field)?);
        if let Ok(mut guard) = self.inner.lock() {
            guard.put(field.to_string(), Arc::clone(&column));
        }
        Ok(column)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|g| g.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
