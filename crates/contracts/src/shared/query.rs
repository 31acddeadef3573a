//! Модель запроса к реляционному хранилищу.
//!
//! Покрывает ровно то, что умеет обобщённый query builder хранилища:
//! выборка колонок, фильтры на равенство и сортировка по одной или
//! нескольким колонкам.
//!
//! ```rust
//! use contracts::shared::query::{Direction, TableQuery};
//!
//! let query = TableQuery::new("suppliers")
//!     .eq("archived", false)
//!     .order_by("name", Direction::Asc);
//! assert_eq!(query.filters.len(), 1);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Одна запись результата: имя колонки → значение.
pub type Row = serde_json::Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableQuery {
    pub table: String,
    pub columns: Projection,
    pub filters: Vec<Filter>,
    pub order: Vec<OrderBy>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Projection {
    /// `*`
    All,
    Columns(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Filter {
    Eq { column: String, value: Value },
}

impl Filter {
    pub fn column(&self) -> &str {
        match self {
            Filter::Eq { column, .. } => column,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBy {
    pub column: String,
    pub direction: Direction,
}

impl TableQuery {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Projection::All,
            filters: Vec::new(),
            order: Vec::new(),
        }
    }

    pub fn select(mut self, columns: &[&str]) -> Self {
        self.columns = Projection::Columns(columns.iter().map(|c| c.to_string()).collect());
        self
    }

    pub fn eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::Eq {
            column: column.into(),
            value: value.into(),
        });
        self
    }

    /// Ключи сортировки применяются в порядке добавления.
    pub fn order_by(mut self, column: impl Into<String>, direction: Direction) -> Self {
        self.order.push(OrderBy {
            column: column.into(),
            direction,
        });
        self
    }

    /// Проверить все идентификаторы запроса до отправки в хранилище.
    pub fn validate(&self) -> Result<(), InvalidIdentifier> {
        check_identifier(&self.table)?;
        if let Projection::Columns(columns) = &self.columns {
            for column in columns {
                check_identifier(column)?;
            }
        }
        for filter in &self.filters {
            check_identifier(filter.column())?;
        }
        for order in &self.order {
            check_identifier(&order.column)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid identifier: {0:?}")]
pub struct InvalidIdentifier(pub String);

/// Имя таблицы или колонки: `[A-Za-z_][A-Za-z0-9_]*`.
pub fn check_identifier(name: &str) -> Result<(), InvalidIdentifier> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(InvalidIdentifier(name.to_string()))
    }
}
