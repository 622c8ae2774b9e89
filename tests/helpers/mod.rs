pub mod factories;

pub use factories::record_factory::RecordFactory;
