use async_trait::async_trait;
use contracts::shared::query::{Filter, Projection, Row, TableQuery};
use sea_orm::{
    DatabaseBackend, DatabaseConnection, DbErr, FromQueryResult, JsonValue, Statement, Value,
};

use super::db;
use super::gateway::{check_update_filters, check_write, DataGateway, GatewayError};
use crate::shared::config::AccessLevel;

/// Локальное хранилище на SQLite с тем же контрактом, что и REST.
///
/// Уровень доступа здесь только запоминается: политик строк у SQLite нет.
pub struct SqliteGateway {
    conn: DatabaseConnection,
    access: AccessLevel,
}

impl SqliteGateway {
    pub async fn connect(url: &str, access: AccessLevel) -> Result<Self, GatewayError> {
        let conn = db::open(url)
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        db::ensure_schema(&conn).await.map_err(map_db_err)?;
        Ok(Self { conn, access })
    }

    async fn fetch(&self, sql: String, values: Vec<Value>) -> Result<Vec<Row>, GatewayError> {
        tracing::debug!("sqlite: {}", sql);
        let stmt = Statement::from_sql_and_values(DatabaseBackend::Sqlite, sql, values);
        let rows = JsonValue::find_by_statement(stmt)
            .all(&self.conn)
            .await
            .map_err(map_db_err)?;
        rows.into_iter().map(into_row).collect()
    }
}

#[async_trait]
impl DataGateway for SqliteGateway {
    async fn select(&self, query: &TableQuery) -> Result<Vec<Row>, GatewayError> {
        query.validate()?;

        let columns = match &query.columns {
            Projection::All => "*".to_string(),
            Projection::Columns(columns) => columns
                .iter()
                .map(|c| quote(c))
                .collect::<Vec<_>>()
                .join(", "),
        };
        let mut sql = format!("SELECT {} FROM {}", columns, quote(&query.table));
        let mut values = Vec::new();
        push_where(&mut sql, &mut values, &query.filters);

        if !query.order.is_empty() {
            let keys: Vec<String> = query
                .order
                .iter()
                .map(|o| format!("{} {}", quote(&o.column), o.direction.as_str().to_uppercase()))
                .collect();
            sql.push_str(" ORDER BY ");
            sql.push_str(&keys.join(", "));
        }

        self.fetch(sql, values).await
    }

    async fn insert(&self, table: &str, row: Row) -> Result<Row, GatewayError> {
        check_write(table, &[], &row)?;

        let columns: Vec<String> = row.keys().map(|c| quote(c)).collect();
        let placeholders = vec!["?"; row.len()].join(", ");
        let values: Vec<Value> = row.values().map(to_sql_value).collect();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
            quote(table),
            columns.join(", "),
            placeholders
        );

        self.fetch(sql, values)
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

        let assignments: Vec<String> = patch.keys().map(|c| format!("{} = ?", quote(c))).collect();
        let mut values: Vec<Value> = patch.values().map(to_sql_value).collect();
        let mut sql = format!("UPDATE {} SET {}", quote(table), assignments.join(", "));
        push_where(&mut sql, &mut values, filters);
        sql.push_str(" RETURNING *");

        self.fetch(sql, values).await
    }

    fn access_level(&self) -> AccessLevel {
        self.access
    }
}

/// Идентификаторы уже проверены, кавычки защищают от совпадения с ключевыми словами.
fn quote(identifier: &str) -> String {
    format!("\"{}\"", identifier)
}

fn push_where(sql: &mut String, values: &mut Vec<Value>, filters: &[Filter]) {
    if filters.is_empty() {
        return;
    }
    let conditions: Vec<String> = filters
        .iter()
        .map(|filter| match filter {
            Filter::Eq { column, value } if value.is_null() => format!("{} IS NULL", quote(column)),
            Filter::Eq { column, value } => {
                values.push(to_sql_value(value));
                format!("{} = ?", quote(column))
            }
        })
        .collect();
    sql.push_str(" WHERE ");
    sql.push_str(&conditions.join(" AND "));
}

fn to_sql_value(value: &serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::String(None),
        serde_json::Value::Bool(b) => (*b).into(),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => i.into(),
            None => n.as_f64().into(),
        },
        serde_json::Value::String(s) => s.clone().into(),
        // массивы и объекты храним как JSON-текст
        other => other.to_string().into(),
    }
}

fn into_row(value: JsonValue) -> Result<Row, GatewayError> {
    match value {
        JsonValue::Object(map) => Ok(map),
        other => Err(GatewayError::Malformed(format!(
            "expected an object row, got {}",
            other
        ))),
    }
}

fn map_db_err(e: DbErr) -> GatewayError {
    let message = e.to_string();
    match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => GatewayError::Network(message),
        DbErr::Exec(_) | DbErr::Query(_) if message.contains("constraint failed") => {
            GatewayError::Constraint(message)
        }
        // ошибки SQL: неизвестная колонка, синтаксис, схема
        DbErr::Exec(_) | DbErr::Query(_) => GatewayError::InvalidQuery(message),
        _ => GatewayError::Malformed(message),
    }
}
