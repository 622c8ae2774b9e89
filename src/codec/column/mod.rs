pub mod decode;
pub mod encode;
pub mod values;

pub use decode::decode_column;
pub use encode::encode_column;
pub use values::ColumnValues;

#[cfg(test)]
mod encode_test;
