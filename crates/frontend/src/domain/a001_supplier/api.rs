use crate::shared::api_utils::{api_url, get_json, post_json};
use contracts::domain::a001_supplier::aggregate::Supplier;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct ListQuery {
    include_archived: bool,
}

#[derive(Debug, Deserialize)]
pub struct TestDataResult {
    pub inserted: usize,
}

fn list_url(include_archived: bool) -> Result<String, String> {
    let query = serde_qs::to_string(&ListQuery { include_archived })
        .map_err(|e| format!("Ошибка формирования запроса: {}", e))?;
    Ok(format!("{}?{}", api_url("/api/suppliers"), query))
}

/// Поставщики по наименованию; архивные только при `include_archived`
pub async fn fetch_suppliers(include_archived: bool) -> Result<Vec<Supplier>, String> {
    let url = list_url(include_archived)?;
    get_json(&url).await
}

/// Заполнить справочник демонстрационными данными (нужен повышенный доступ)
pub async fn insert_test_data() -> Result<TestDataResult, String> {
    post_json(&api_url("/api/suppliers/testdata")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_string() {
        let q = serde_qs::to_string(&ListQuery {
            include_archived: true,
        })
        .unwrap();
        assert_eq!(q, "include_archived=true");
    }
}
