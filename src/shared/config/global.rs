use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::shared::config::model::{load_settings, Settings};

// Embedded library: a broken or absent config file falls back to defaults
// instead of aborting the host process.
pub static CONFIG: Lazy<Arc<Settings>> =
    Lazy::new(|| Arc::new(load_settings().unwrap_or_default()));
