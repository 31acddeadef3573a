pub mod a001_supplier;
