//! Разделы, для которых пока есть только заголовок.

mod placeholder;

pub use placeholder::{BatchesPage, NotFoundPage, PurchasesPage, RecipesPage, ReportsPage, SalesPage};
