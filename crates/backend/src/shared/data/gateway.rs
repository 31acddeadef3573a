use std::sync::Arc;

use async_trait::async_trait;
use contracts::shared::query::{check_identifier, Filter, InvalidIdentifier, Row, TableQuery};

use super::rest_gateway::RestGateway;
use super::sqlite_gateway::SqliteGateway;
use crate::shared::config::{AccessLevel, StoreSettings};

/// Ошибки обращения к хранилищу.
///
/// Повторов нет: каждая операция делает ровно одну попытку, ошибка уходит
/// вызывающему коду без изменений.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("store unreachable: {0}")]
    Network(String),
    #[error("store rejected credentials: {0}")]
    Unauthorized(String),
    #[error("store constraint violated: {0}")]
    Constraint(String),
    #[error("invalid query: {0}")]
    InvalidQuery(String),
    #[error("malformed store response: {0}")]
    Malformed(String),
}

impl From<InvalidIdentifier> for GatewayError {
    fn from(e: InvalidIdentifier) -> Self {
        GatewayError::InvalidQuery(e.to_string())
    }
}

/// Remote data gateway: table-oriented access to the relational store.
///
/// Constructed once in `main` and shared as `Arc<dyn DataGateway>`.
#[async_trait]
pub trait DataGateway: Send + Sync {
    /// Rows matching all filters, in the requested order.
    async fn select(&self, query: &TableQuery) -> Result<Vec<Row>, GatewayError>;

    /// Insert one row and return it as stored (with store-side defaults).
    async fn insert(&self, table: &str, row: Row) -> Result<Row, GatewayError>;

    /// Apply `patch` to every row matching `filters`, return updated rows.
    async fn update(
        &self,
        table: &str,
        filters: &[Filter],
        patch: Row,
    ) -> Result<Vec<Row>, GatewayError>;

    fn access_level(&self) -> AccessLevel;
}

/// Выбрать реализацию по схеме URL хранилища.
pub async fn connect(settings: &StoreSettings) -> anyhow::Result<Arc<dyn DataGateway>> {
    let url = settings.url.as_str();
    if url.starts_with("sqlite:") {
        tracing::info!("Using local SQLite store: {}", url);
        let gateway = SqliteGateway::connect(url, settings.access).await?;
        Ok(Arc::new(gateway))
    } else if url.starts_with("http://") || url.starts_with("https://") {
        tracing::info!("Using hosted REST store: {}", url);
        let gateway = RestGateway::from_settings(settings)?;
        Ok(Arc::new(gateway))
    } else {
        anyhow::bail!("unsupported store URL scheme: {url}")
    }
}

/// Проверка таблицы, колонок и фильтров для insert/update.
pub(crate) fn check_write(table: &str, filters: &[Filter], row: &Row) -> Result<(), GatewayError> {
    check_identifier(table)?;
    for filter in filters {
        check_identifier(filter.column())?;
    }
    for column in row.keys() {
        check_identifier(column)?;
    }
    if row.is_empty() {
        return Err(GatewayError::InvalidQuery("empty row".into()));
    }
    Ok(())
}

/// Обновление без фильтров затронуло бы всю таблицу.
pub(crate) fn check_update_filters(filters: &[Filter]) -> Result<(), GatewayError> {
    if filters.is_empty() {
        return Err(GatewayError::InvalidQuery(
            "update without filters is not allowed".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_write_rejects_bad_columns() {
        let mut row = Row::new();
        row.insert("name".into(), json!("Мельница"));
        assert!(check_write("suppliers", &[], &row).is_ok());

        row.insert("name = 'x' --".into(), json!(1));
        assert!(matches!(
            check_write("suppliers", &[], &row),
            Err(GatewayError::InvalidQuery(_))
        ));
        assert!(matches!(
            check_write("suppliers", &[], &Row::new()),
            Err(GatewayError::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_update_requires_filters() {
        assert!(check_update_filters(&[]).is_err());
        let filters = [Filter::Eq {
            column: "id".into(),
            value: json!("x"),
        }];
        assert!(check_update_filters(&filters).is_ok());
    }
}
