use contracts::domain::a001_supplier::aggregate::{
    NewSupplier, Supplier, SupplierDto, SupplierId, SupplierValidationError,
};
use contracts::domain::common::AggregateId;

use super::repository::SupplierRepository;
use crate::shared::config::AccessLevel;
use crate::shared::data::GatewayError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] SupplierValidationError),
    #[error("Некорректный идентификатор: {0}")]
    InvalidId(String),
    #[error("Поставщик {0} не найден")]
    NotFound(String),
    #[error("Операция доступна только при повышенном уровне доступа к хранилищу")]
    AccessDenied,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

pub fn parse_id(id: &str) -> Result<SupplierId, ServiceError> {
    SupplierId::from_string(id).map_err(|_| ServiceError::InvalidId(id.to_string()))
}

/// Получение списка поставщиков
pub async fn list(
    repo: &SupplierRepository,
    include_archived: bool,
) -> Result<Vec<Supplier>, ServiceError> {
    Ok(repo.list_suppliers(include_archived).await?)
}

/// Получение поставщика по ID
pub async fn get_by_id(repo: &SupplierRepository, id: &str) -> Result<Supplier, ServiceError> {
    let supplier_id = parse_id(id)?;
    repo.get_by_id(supplier_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(id.to_string()))
}

/// Создание нового поставщика
pub async fn create(repo: &SupplierRepository, dto: SupplierDto) -> Result<SupplierId, ServiceError> {
    // Валидация
    dto.validate()?;

    let new = NewSupplier::from_dto(&dto);
    let stored = repo.insert(&new).await?;
    tracing::info!("Supplier created: {} ({})", stored.name, stored.id.as_string());
    Ok(stored.id)
}

/// Обновление существующего поставщика
pub async fn update(repo: &SupplierRepository, dto: SupplierDto) -> Result<SupplierId, ServiceError> {
    let raw_id = dto.id.clone().unwrap_or_default();
    let supplier_id = parse_id(&raw_id)?;

    // Валидация
    dto.validate()?;

    repo.update(supplier_id, &dto)
        .await?
        .map(|s| s.id)
        .ok_or(ServiceError::NotFound(raw_id))
}

/// Создание или обновление в зависимости от наличия `id`
pub async fn upsert(repo: &SupplierRepository, dto: SupplierDto) -> Result<SupplierId, ServiceError> {
    if dto.id.as_deref().is_some_and(|id| !id.trim().is_empty()) {
        update(repo, dto).await
    } else {
        create(repo, dto).await
    }
}

/// Перенос в архив (мягкое удаление)
pub async fn archive(repo: &SupplierRepository, id: &str) -> Result<Supplier, ServiceError> {
    set_archived(repo, id, true).await
}

/// Возврат из архива
pub async fn restore(repo: &SupplierRepository, id: &str) -> Result<Supplier, ServiceError> {
    set_archived(repo, id, false).await
}

async fn set_archived(
    repo: &SupplierRepository,
    id: &str,
    archived: bool,
) -> Result<Supplier, ServiceError> {
    let supplier_id = parse_id(id)?;
    repo.set_archived(supplier_id, archived)
        .await?
        .ok_or_else(|| ServiceError::NotFound(id.to_string()))
}

/// Вставка тестовых данных
///
/// Требует `AccessLevel::Elevated`: публичный ключ не проходит политики записи.
pub async fn insert_test_data(repo: &SupplierRepository) -> Result<usize, ServiceError> {
    if repo.access_level() != AccessLevel::Elevated {
        return Err(ServiceError::AccessDenied);
    }

    let data = vec![
        (
            SupplierDto {
                name: "Мельница \"Северная\"".into(),
                contact_name: Some("Ирина Соколова".into()),
                email: Some("orders@mill-north.example".into()),
                phone: Some("+7 812 555-01-10".into()),
                address: Some("Санкт-Петербург, Обводный канал, 14".into()),
                notes: Some("Мука высшего сорта, поставка по вторникам".into()),
                ..Default::default()
            },
            false,
        ),
        (
            SupplierDto {
                name: "Молочная ферма Луговая".into(),
                contact_name: Some("Пётр Иванов".into()),
                email: Some("milk@lugovaya.example".into()),
                phone: Some("+7 921 555-22-33".into()),
                ..Default::default()
            },
            false,
        ),
        (
            SupplierDto {
                name: "Дрожжевой завод".into(),
                email: Some("sales@yeast.example".into()),
                notes: Some("Договор закрыт в 2025 году".into()),
                ..Default::default()
            },
            true,
        ),
        (
            SupplierDto {
                name: "Сахар Опт".into(),
                contact_name: Some("Анна".into()),
                phone: Some("+7 495 555-44-55".into()),
                ..Default::default()
            },
            false,
        ),
    ];

    let mut inserted = 0;
    for (dto, archived) in data {
        let id = create(repo, dto).await?;
        if archived {
            repo.set_archived(id, true).await?;
        }
        inserted += 1;
    }
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_supplier::repository::tests::memory_repository;

    #[tokio::test]
    async fn test_create_rejects_invalid_dto() {
        let repo = memory_repository(AccessLevel::Restricted).await;
        let err = create(
            &repo,
            SupplierDto {
                name: "   ".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(SupplierValidationError::EmptyName)
        ));
        assert!(repo.list_suppliers(true).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upsert_creates_then_updates() {
        let repo = memory_repository(AccessLevel::Restricted).await;
        let id = upsert(
            &repo,
            SupplierDto {
                name: "Сыроварня".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let same = upsert(
            &repo,
            SupplierDto {
                id: Some(id.as_string()),
                name: "Сыроварня №1".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(id, same);

        let stored = get_by_id(&repo, &id.as_string()).await.unwrap();
        assert_eq!(stored.name, "Сыроварня №1");
    }

    #[tokio::test]
    async fn test_not_found_and_bad_id() {
        let repo = memory_repository(AccessLevel::Restricted).await;
        assert!(matches!(
            get_by_id(&repo, "not-a-uuid").await,
            Err(ServiceError::InvalidId(_))
        ));
        assert!(matches!(
            archive(&repo, "00000000-0000-0000-0000-000000000001").await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_archive_and_restore() {
        let repo = memory_repository(AccessLevel::Restricted).await;
        let id = create(
            &repo,
            SupplierDto {
                name: "Кондитерская".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .as_string();

        assert!(archive(&repo, &id).await.unwrap().archived);
        assert!(list(&repo, false).await.unwrap().is_empty());
        assert!(!restore(&repo, &id).await.unwrap().archived);
        assert_eq!(list(&repo, false).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_test_data_requires_elevated_access() {
        let restricted = memory_repository(AccessLevel::Restricted).await;
        assert!(matches!(
            insert_test_data(&restricted).await,
            Err(ServiceError::AccessDenied)
        ));

        let elevated = memory_repository(AccessLevel::Elevated).await;
        assert_eq!(insert_test_data(&elevated).await.unwrap(), 4);
        let all = list(&elevated, true).await.unwrap();
        let active = list(&elevated, false).await.unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(active.len(), 3);
    }
}
