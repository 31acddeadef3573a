pub mod badge;
pub mod checkbox;

pub use badge::{Badge, StatusBadge};
pub use checkbox::Checkbox;
