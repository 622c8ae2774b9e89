pub mod argsort;
pub mod section;

pub use argsort::build_argsort;
pub use section::{
    decode_permutation, parse_index_section, validate_permutation, write_index_section,
};
