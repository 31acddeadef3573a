use std::time::Duration;

use async_trait::async_trait;
use contracts::shared::query::{Filter, Projection, Row, TableQuery};
use reqwest::{Client, RequestBuilder, StatusCode};

use super::gateway::{check_update_filters, check_write, DataGateway, GatewayError};
use crate::shared::config::{AccessLevel, StoreSettings};

/// Hosted store with a PostgREST-style HTTP interface (`/rest/v1/{table}`).
pub struct RestGateway {
    client: Client,
    base_url: String,
    api_key: String,
    access: AccessLevel,
}

impl RestGateway {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        access: AccessLevel,
    ) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            access,
        })
    }

    pub fn from_settings(settings: &StoreSettings) -> Result<Self, GatewayError> {
        Self::new(&settings.url, settings.api_key(), settings.access)
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "application/json")
    }

    async fn send(&self, request: RequestBuilder) -> Result<Vec<Row>, GatewayError> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(map_status(status, &body));
        }

        serde_json::from_str::<Vec<Row>>(&body)
            .map_err(|e| GatewayError::Malformed(format!("{e}: {}", truncate(&body))))
    }
}

#[async_trait]
impl DataGateway for RestGateway {
    async fn select(&self, query: &TableQuery) -> Result<Vec<Row>, GatewayError> {
        query.validate()?;
        let request = self
            .client
            .get(self.table_url(&query.table))
            .query(&select_params(query));
        self.send(request).await
    }

    async fn insert(&self, table: &str, row: Row) -> Result<Row, GatewayError> {
        check_write(table, &[], &row)?;
        let request = self
            .client
            .post(self.table_url(table))
            .header("Prefer", "return=representation")
            .json(&row);
        self.send(request)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::Malformed("insert returned no row".into()))
    }

    async fn update(
        &self,
        table: &str,
        filters: &[Filter],
        patch: Row,
    ) -> Result<Vec<Row>, GatewayError> {
        check_write(table, filters, &patch)?;
        check_update_filters(filters)?;
        let request = self
            .client
            .patch(self.table_url(table))
            .query(&filter_params(filters))
            .header("Prefer", "return=representation")
            .json(&patch);
        self.send(request).await
    }

    fn access_level(&self) -> AccessLevel {
        self.access
    }
}

/// `select=*&archived=eq.false&order=name.asc,id.asc`
fn select_params(query: &TableQuery) -> Vec<(String, String)> {
    let select = match &query.columns {
        Projection::All => "*".to_string(),
        Projection::Columns(columns) => columns.join(","),
    };
    let mut params = vec![("select".to_string(), select)];
    params.extend(filter_params(&query.filters));
    if !query.order.is_empty() {
        let order = query
            .order
            .iter()
            .map(|o| format!("{}.{}", o.column, o.direction.as_str()))
            .collect::<Vec<_>>()
            .join(",");
        params.push(("order".to_string(), order));
    }
    params
}

fn filter_params(filters: &[Filter]) -> Vec<(String, String)> {
    filters
        .iter()
        .map(|filter| match filter {
            Filter::Eq { column, value } => {
                let operand = match value {
                    serde_json::Value::Null => "is.null".to_string(),
                    serde_json::Value::String(s) => format!("eq.{}", s),
                    other => format!("eq.{}", other),
                };
                (column.clone(), operand)
            }
        })
        .collect()
}

fn map_status(status: StatusCode, body: &str) -> GatewayError {
    let detail = format!("HTTP {}: {}", status.as_u16(), truncate(body));
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return GatewayError::Unauthorized(detail);
    }
    if status == StatusCode::CONFLICT || is_integrity_violation(body) {
        return GatewayError::Constraint(detail);
    }
    GatewayError::Network(detail)
}

/// SQLSTATE класса 23: integrity constraint violation
fn is_integrity_violation(body: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("code").and_then(|c| c.as_str()).map(|c| c.starts_with("23")))
        .unwrap_or(false)
}

fn truncate(body: &str) -> String {
    const LIMIT: usize = 500;
    if body.chars().count() > LIMIT {
        let cut: String = body.chars().take(LIMIT).collect();
        format!("{cut}...")
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::State;
    use axum::http::{HeaderMap, Method, Uri};
    use axum::routing::any;
    use axum::Router;
    use contracts::shared::query::Direction;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone)]
    struct Seen {
        method: Method,
        query: String,
        apikey: String,
        authorization: String,
        prefer: Option<String>,
        body: String,
    }

    struct FakeStore {
        status: axum::http::StatusCode,
        body: String,
        seen: Mutex<Vec<Seen>>,
    }

    async fn record(
        State(store): State<Arc<FakeStore>>,
        method: Method,
        uri: Uri,
        headers: HeaderMap,
        body: String,
    ) -> (axum::http::StatusCode, String) {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        store.seen.lock().unwrap().push(Seen {
            method,
            query: uri.query().unwrap_or_default().to_string(),
            apikey: header("apikey").unwrap_or_default(),
            authorization: header("authorization").unwrap_or_default(),
            prefer: header("prefer"),
            body,
        });
        (store.status, store.body.clone())
    }

    /// Поднимает поддельное хранилище на свободном порту.
    async fn fake_store(status: u16, body: &str) -> (String, Arc<FakeStore>) {
        let store = Arc::new(FakeStore {
            status: axum::http::StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
            seen: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .route("/rest/v1/:table", any(record))
            .with_state(store.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}", addr), store)
    }

    fn decoded_query(seen: &Seen) -> Vec<(String, String)> {
        seen.query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (
                    urlencoding::decode(key).unwrap().into_owned(),
                    urlencoding::decode(value).unwrap().into_owned(),
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn test_select_sends_key_filters_and_order() {
        let body = r#"[{"id":"1","name":"Alpha"},{"id":"2","name":"Bravo"}]"#;
        let (url, store) = fake_store(200, body).await;
        let gw = RestGateway::new(url, "anon-key", AccessLevel::Restricted).unwrap();

        let query = TableQuery::new("suppliers")
            .eq("archived", false)
            .order_by("name", Direction::Asc)
            .order_by("id", Direction::Asc);
        let rows = gw.select(&query).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["name"], "Bravo");

        let seen = store.seen.lock().unwrap()[0].clone();
        assert_eq!(seen.method, Method::GET);
        assert_eq!(seen.apikey, "anon-key");
        assert_eq!(seen.authorization, "Bearer anon-key");
        assert_eq!(
            decoded_query(&seen),
            vec![
                ("select".to_string(), "*".to_string()),
                ("archived".to_string(), "eq.false".to_string()),
                ("order".to_string(), "name.asc,id.asc".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_insert_asks_for_representation() {
        let (url, store) = fake_store(201, r#"[{"id":"n1","name":"Новый","archived":false}]"#).await;
        let gw = RestGateway::new(url, "service-key", AccessLevel::Elevated).unwrap();

        let mut row = Row::new();
        row.insert("id".into(), json!("n1"));
        row.insert("name".into(), json!("Новый"));
        let stored = gw.insert("suppliers", row).await.unwrap();
        assert_eq!(stored["archived"], false);
        assert_eq!(gw.access_level(), AccessLevel::Elevated);

        let seen = store.seen.lock().unwrap()[0].clone();
        assert_eq!(seen.method, Method::POST);
        assert_eq!(seen.prefer.as_deref(), Some("return=representation"));
        let sent: serde_json::Value = serde_json::from_str(&seen.body).unwrap();
        assert_eq!(sent["name"], "Новый");
    }

    #[tokio::test]
    async fn test_update_puts_filters_in_query_string() {
        let (url, store) = fake_store(200, "[]").await;
        let gw = RestGateway::new(url, "k", AccessLevel::Restricted).unwrap();

        let filters = [Filter::Eq {
            column: "id".into(),
            value: json!("abc"),
        }];
        let mut patch = Row::new();
        patch.insert("archived".into(), json!(true));
        let updated = gw.update("suppliers", &filters, patch).await.unwrap();
        assert!(updated.is_empty());

        let seen = store.seen.lock().unwrap()[0].clone();
        assert_eq!(seen.method, Method::PATCH);
        assert_eq!(
            decoded_query(&seen),
            vec![("id".to_string(), "eq.abc".to_string())]
        );
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let (url, _) = fake_store(401, r#"{"message":"Invalid API key"}"#).await;
        let gw = RestGateway::new(url, "bad", AccessLevel::Restricted).unwrap();
        let err = gw.select(&TableQuery::new("suppliers")).await.unwrap_err();
        assert!(matches!(err, GatewayError::Unauthorized(_)), "{err:?}");

        let (url, _) = fake_store(409, r#"{"code":"23505","message":"duplicate key"}"#).await;
        let gw = RestGateway::new(url, "k", AccessLevel::Restricted).unwrap();
        let err = gw.select(&TableQuery::new("suppliers")).await.unwrap_err();
        assert!(matches!(err, GatewayError::Constraint(_)), "{err:?}");

        let (url, _) = fake_store(400, r#"{"code":"23502","message":"null value"}"#).await;
        let gw = RestGateway::new(url, "k", AccessLevel::Restricted).unwrap();
        let err = gw.select(&TableQuery::new("suppliers")).await.unwrap_err();
        assert!(matches!(err, GatewayError::Constraint(_)), "{err:?}");

        let (url, _) = fake_store(503, "maintenance").await;
        let gw = RestGateway::new(url, "k", AccessLevel::Restricted).unwrap();
        let err = gw.select(&TableQuery::new("suppliers")).await.unwrap_err();
        match err {
            GatewayError::Network(detail) => assert!(detail.contains("503")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let (url, _) = fake_store(200, r#"{"not":"a list"}"#).await;
        let gw = RestGateway::new(url, "k", AccessLevel::Restricted).unwrap();
        let err = gw.select(&TableQuery::new("suppliers")).await.unwrap_err();
        assert!(matches!(err, GatewayError::Malformed(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_unreachable_store_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gw = RestGateway::new(format!("http://{addr}"), "k", AccessLevel::Restricted).unwrap();
        let err = gw.select(&TableQuery::new("suppliers")).await.unwrap_err();
        assert!(matches!(err, GatewayError::Network(_)), "{err:?}");
    }
}
