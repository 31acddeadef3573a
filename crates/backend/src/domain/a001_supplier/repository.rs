use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use contracts::domain::a001_supplier::aggregate::{NewSupplier, Supplier, SupplierDto, SupplierId};
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::shared::query::{Direction, Filter, Row, TableQuery};
use serde::Serialize;

use crate::shared::config::AccessLevel;
use crate::shared::data::{DataGateway, GatewayError};

/// Доступ к таблице `suppliers` через шлюз хранилища.
///
/// Ошибки шлюза не перехватываются: пустой список вместо ошибки не возвращается.
#[derive(Clone)]
pub struct SupplierRepository {
    gateway: Arc<dyn DataGateway>,
}

impl SupplierRepository {
    pub fn new(gateway: Arc<dyn DataGateway>) -> Self {
        Self { gateway }
    }

    pub fn access_level(&self) -> AccessLevel {
        self.gateway.access_level()
    }

    /// Список поставщиков по наименованию (при равных именах по id).
    ///
    /// Без `include_archived` в выборку попадают только `archived = false`.
    pub async fn list_suppliers(&self, include_archived: bool) -> Result<Vec<Supplier>, GatewayError> {
        let mut query = TableQuery::new(Supplier::collection_name());
        if !include_archived {
            query = query.eq("archived", false);
        }
        let query = query
            .order_by("name", Direction::Asc)
            .order_by("id", Direction::Asc);

        let rows = self.gateway.select(&query).await?;
        rows.into_iter().map(decode).collect()
    }

    pub async fn get_by_id(&self, id: SupplierId) -> Result<Option<Supplier>, GatewayError> {
        let query = TableQuery::new(Supplier::collection_name()).eq("id", id.as_string());
        let rows = self.gateway.select(&query).await?;
        rows.into_iter().next().map(decode).transpose()
    }

    pub async fn insert(&self, supplier: &NewSupplier) -> Result<Supplier, GatewayError> {
        let row = encode(supplier)?;
        let stored = self
            .gateway
            .insert(Supplier::collection_name(), row)
            .await?;
        decode(stored)
    }

    /// Обновить редактируемые поля. `None`, если записи с таким id нет.
    pub async fn update(
        &self,
        id: SupplierId,
        dto: &SupplierDto,
    ) -> Result<Option<Supplier>, GatewayError> {
        self.patch(id, dto.editable_fields()).await
    }

    pub async fn set_archived(
        &self,
        id: SupplierId,
        archived: bool,
    ) -> Result<Option<Supplier>, GatewayError> {
        let mut patch = Row::new();
        patch.insert("archived".into(), archived.into());
        self.patch(id, patch).await
    }

    async fn patch(&self, id: SupplierId, mut patch: Row) -> Result<Option<Supplier>, GatewayError> {
        patch.insert(
            "updated_at".into(),
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true).into(),
        );
        let filters = [Filter::Eq {
            column: "id".into(),
            value: id.as_string().into(),
        }];
        let rows = self
            .gateway
            .update(Supplier::collection_name(), &filters, patch)
            .await?;
        rows.into_iter().next().map(decode).transpose()
    }
}

fn decode(row: Row) -> Result<Supplier, GatewayError> {
    serde_json::from_value(serde_json::Value::Object(row))
        .map_err(|e| GatewayError::Malformed(format!("supplier row: {e}")))
}

fn encode<T: Serialize>(value: &T) -> Result<Row, GatewayError> {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::Object(row)) => Ok(row),
        Ok(other) => Err(GatewayError::InvalidQuery(format!(
            "expected an object, got {other}"
        ))),
        Err(e) => Err(GatewayError::InvalidQuery(e.to_string())),
    }
}
