use axum::extract::{Path, Query, State};
use axum::Json;
use contracts::domain::a001_supplier::aggregate::{Supplier, SupplierDto};
use contracts::domain::common::AggregateId;
use serde::Deserialize;
use serde_json::json;

use super::error::ApiError;
use crate::domain::a001_supplier::service;
use crate::shared::app_state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub include_archived: bool,
}

/// GET /api/suppliers?include_archived=
pub async fn list_all(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Supplier>>, ApiError> {
    let items = service::list(&state.suppliers, params.include_archived).await?;
    Ok(Json(items))
}

/// GET /api/suppliers/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Supplier>, ApiError> {
    Ok(Json(service::get_by_id(&state.suppliers, &id).await?))
}

/// POST /api/suppliers
pub async fn upsert(
    State(state): State<AppState>,
    Json(dto): Json<SupplierDto>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = service::upsert(&state.suppliers, dto).await?;
    Ok(Json(json!({ "id": id.as_string() })))
}

/// POST /api/suppliers/:id/archive
pub async fn archive(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Supplier>, ApiError> {
    Ok(Json(service::archive(&state.suppliers, &id).await?))
}

/// POST /api/suppliers/:id/restore
pub async fn restore(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Supplier>, ApiError> {
    Ok(Json(service::restore(&state.suppliers, &id).await?))
}

/// POST /api/suppliers/testdata
pub async fn insert_test_data(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let inserted = service::insert_test_data(&state.suppliers).await?;
    Ok(Json(json!({ "inserted": inserted })))
}

#[cfg(test)]
mod tests {
    use crate::routes::configure_routes;
    use crate::shared::app_state::AppState;
    use crate::shared::config::{AccessLevel, Config};
    use crate::shared::data::sqlite_gateway::SqliteGateway;
    use contracts::domain::a001_supplier::aggregate::Supplier;
    use contracts::shared::api_error::{ApiErrorBody, ApiErrorKind};
    use serde_json::json;
    use std::sync::Arc;

    async fn serve(access: AccessLevel) -> String {
        let gateway = SqliteGateway::connect("sqlite::memory:", access)
            .await
            .unwrap();
        let state = AppState::new(Arc::new(gateway), Config::default());
        let app = configure_routes(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_create_archive_and_list() {
        let base = serve(AccessLevel::Restricted).await;
        let client = reqwest::Client::new();

        for name in ["Bravo", "Alpha"] {
            let resp = client
                .post(format!("{base}/api/suppliers"))
                .json(&json!({ "name": name, "contactName": "Олег" }))
                .send()
                .await
                .unwrap();
            assert_eq!(resp.status(), 200);
        }

        let list: Vec<Supplier> = client
            .get(format!("{base}/api/suppliers"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "Alpha");
        assert_eq!(list[0].contact_name.as_deref(), Some("Олег"));

        let archived: Supplier = client
            .post(format!("{base}/api/suppliers/{}/archive", list[1].to_string_id()))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert!(archived.archived);

        let active: Vec<Supplier> = client
            .get(format!("{base}/api/suppliers?include_archived=false"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(active.len(), 1);

        let all: Vec<Supplier> = client
            .get(format!("{base}/api/suppliers?include_archived=true"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_error_bodies() {
        let base = serve(AccessLevel::Restricted).await;
        let client = reqwest::Client::new();

        let resp = client
            .post(format!("{base}/api/suppliers"))
            .json(&json!({ "name": "  " }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
        let body: ApiErrorBody = resp.json().await.unwrap();
        assert_eq!(body.kind, ApiErrorKind::Validation);

        let resp = client
            .get(format!("{base}/api/suppliers/not-a-uuid"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);

        let resp = client
            .get(format!(
                "{base}/api/suppliers/00000000-0000-0000-0000-000000000001"
            ))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);

        let resp = client
            .post(format!("{base}/api/suppliers/testdata"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 403);
        let body: ApiErrorBody = resp.json().await.unwrap();
        assert_eq!(body.kind, ApiErrorKind::Unauthorized);
    }

    #[tokio::test]
    async fn test_testdata_with_elevated_access() {
        let base = serve(AccessLevel::Elevated).await;
        let client = reqwest::Client::new();

        let resp: serde_json::Value = client
            .post(format!("{base}/api/suppliers/testdata"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(resp["inserted"], 4);

        let health = client
            .get(format!("{base}/health"))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(health, "ok");
    }
}
