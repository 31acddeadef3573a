use crate::domain::common::serde_helpers::bool_from_any;
use crate::domain::common::{AggregateId, AggregateRoot};
use crate::enums::status::Status;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(pub Uuid);

impl SupplierId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for SupplierId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SupplierId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Поставщик в том виде, в котором он лежит в таблице `suppliers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "bool_from_any")]
    pub archived: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Supplier {
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn status(&self) -> Status {
        if self.archived {
            Status::Archived
        } else {
            Status::Active
        }
    }
}

impl AggregateRoot for Supplier {
    type Id = SupplierId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn collection_name() -> &'static str {
        "suppliers"
    }
}

// ============================================================================
// Insert model
// ============================================================================

/// Строка для вставки. `id` генерируется на нашей стороне, временные метки
/// проставляет хранилище.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSupplier {
    pub id: SupplierId,
    pub name: String,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub archived: bool,
}

impl NewSupplier {
    pub fn from_dto(dto: &SupplierDto) -> Self {
        Self {
            id: SupplierId::new_v4(),
            name: dto.name.trim().to_string(),
            contact_name: normalize(&dto.contact_name),
            email: normalize(&dto.email),
            phone: normalize(&dto.phone),
            address: normalize(&dto.address),
            notes: normalize(&dto.notes),
            archived: false,
        }
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SupplierDto {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "contactName", default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl SupplierDto {
    pub fn validate(&self) -> Result<(), SupplierValidationError> {
        if self.name.trim().is_empty() {
            return Err(SupplierValidationError::EmptyName);
        }
        if let Some(email) = normalize(&self.email) {
            if !email.contains('@') {
                return Err(SupplierValidationError::InvalidEmail(email));
            }
        }
        Ok(())
    }

    /// Поля, которые меняются при обновлении (без `id`, `archived` и меток времени).
    pub fn editable_fields(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut patch = serde_json::Map::new();
        patch.insert("name".into(), self.name.trim().into());
        patch.insert("contact_name".into(), normalize(&self.contact_name).into());
        patch.insert("email".into(), normalize(&self.email).into());
        patch.insert("phone".into(), normalize(&self.phone).into());
        patch.insert("address".into(), normalize(&self.address).into());
        patch.insert("notes".into(), normalize(&self.notes).into());
        patch
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SupplierValidationError {
    #[error("Наименование поставщика не может быть пустым")]
    EmptyName,
    #[error("Некорректный email: {0}")]
    InvalidEmail(String),
}

/// Пустые строки из формы сохраняем как NULL.
fn normalize(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_store_row() {
        let json = r#"{
            "id": "6f1c2d7e-0d1a-4f7e-9d55-3f1a8c6b2e10",
            "name": "Мельница Север",
            "contact_name": "Ирина",
            "email": null,
            "archived": 1,
            "created_at": "2026-10-16T09:00:00.000Z"
        }"#;
        let supplier: Supplier = serde_json::from_str(json).unwrap();
        assert_eq!(supplier.name, "Мельница Север");
        assert_eq!(supplier.contact_name.as_deref(), Some("Ирина"));
        assert!(supplier.archived);
        assert_eq!(supplier.status(), Status::Archived);
        assert!(supplier.created_at.is_some());
        assert!(supplier.updated_at.is_none());
    }

    #[test]
    fn test_new_supplier_is_not_archived_and_trimmed() {
        let dto = SupplierDto {
            name: "  Молочная ферма  ".into(),
            email: Some("   ".into()),
            ..Default::default()
        };
        let new = NewSupplier::from_dto(&dto);
        assert_eq!(new.name, "Молочная ферма");
        assert!(!new.archived);
        assert_eq!(new.email, None);
    }

    #[test]
    fn test_validate() {
        let mut dto = SupplierDto {
            name: " ".into(),
            ..Default::default()
        };
        assert_eq!(dto.validate(), Err(SupplierValidationError::EmptyName));

        dto.name = "Пекарня".into();
        dto.email = Some("no-at-sign".into());
        assert!(matches!(
            dto.validate(),
            Err(SupplierValidationError::InvalidEmail(_))
        ));

        dto.email = Some("orders@bakery.example".into());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_editable_fields_nulls_blank_values() {
        let dto = SupplierDto {
            name: "Сыроварня".into(),
            phone: Some("".into()),
            ..Default::default()
        };
        let patch = dto.editable_fields();
        assert_eq!(patch["name"], "Сыроварня");
        assert!(patch["phone"].is_null());
        assert!(!patch.contains_key("archived"));
    }
}
