use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr, Statement};

/// Открыть SQLite по URL вида `sqlite://path/to/app.db?mode=rwc` или `sqlite::memory:`.
pub async fn open(url: &str) -> Result<DatabaseConnection, DbErr> {
    let in_memory = url.contains(":memory:");
    if !in_memory {
        if let Some(parent) = file_path(url).and_then(|p| p.parent().map(|p| p.to_path_buf())) {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(&parent).map_err(|e| {
                    DbErr::Custom(format!("failed to create {}: {e}", parent.display()))
                })?;
            }
        }
    }

    let mut options = ConnectOptions::new(url.to_string());
    options.sqlx_logging(false);
    if in_memory {
        // каждое соединение к :memory: видит свою отдельную базу
        options.max_connections(1).min_connections(1);
    }
    Database::connect(options).await
}

fn file_path(url: &str) -> Option<std::path::PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next()?;
    if path.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(path))
    }
}

/// Minimal schema bootstrap: create tables that are missing.
pub async fn ensure_schema(conn: &DatabaseConnection) -> Result<(), DbErr> {
    let check_table = r#"
        SELECT name FROM sqlite_master
        WHERE type='table' AND name='suppliers';
    "#;
    let existing = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            check_table.to_string(),
        ))
        .await?;

    if existing.is_empty() {
        tracing::info!("Creating suppliers table");
        let create_suppliers_table_sql = r#"
            CREATE TABLE suppliers (
                id TEXT PRIMARY KEY NOT NULL,
                name TEXT NOT NULL CHECK (length(trim(name)) > 0),
                contact_name TEXT,
                email TEXT,
                phone TEXT,
                address TEXT,
                notes TEXT,
                archived BOOLEAN NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
                updated_at TEXT
            );
        "#;
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_suppliers_table_sql.to_string(),
        ))
        .await?;
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            "CREATE INDEX IF NOT EXISTS idx_suppliers_name ON suppliers (name, id);".to_string(),
        ))
        .await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_path_from_url() {
        assert_eq!(
            file_path("sqlite://target/db/app.db?mode=rwc"),
            Some(std::path::PathBuf::from("target/db/app.db"))
        );
        assert_eq!(
            file_path("sqlite:data.db"),
            Some(std::path::PathBuf::from("data.db"))
        );
        assert_eq!(file_path("https://example.com"), None);
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let conn = open("sqlite::memory:").await.unwrap();
        ensure_schema(&conn).await.unwrap();
        ensure_schema(&conn).await.unwrap();

        let rows = conn
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type='table' AND name='suppliers'"
                    .to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
    }
}
