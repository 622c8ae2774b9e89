pub mod infer;
pub mod schema;
pub mod types;

pub use infer::infer_type;
pub use schema::Schema;
pub use types::PhysicalType;

#[cfg(test)]
mod types_test;
