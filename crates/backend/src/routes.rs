use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::shared::app_state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Supplier handlers
        .route(
            "/api/suppliers",
            get(handlers::a001_supplier::list_all).post(handlers::a001_supplier::upsert),
        )
        .route(
            "/api/suppliers/testdata",
            post(handlers::a001_supplier::insert_test_data),
        )
        .route(
            "/api/suppliers/:id",
            get(handlers::a001_supplier::get_by_id),
        )
        .route(
            "/api/suppliers/:id/archive",
            post(handlers::a001_supplier::archive),
        )
        .route(
            "/api/suppliers/:id/restore",
            post(handlers::a001_supplier::restore),
        )
        .with_state(state)
}
