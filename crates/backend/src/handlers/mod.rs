pub mod a001_supplier;
pub mod error;
