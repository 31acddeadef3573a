//! Категории страниц.
//!
//! Корневой элемент каждой страницы несёт:
//!   - `id` в формате `{entity}--{variant}` (например `"a001_supplier--list"`)
//!   - `data-page-category` с одной из констант ниже
//!
//! По части до `--` в исходниках находится каталог `domain/a001_supplier/`.

/// Список записей (таблица или карточки).
pub const PAGE_CAT_LIST: &str = "list";

/// Дашборд со сводными показателями.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Раздел-заглушка без собственных данных.
pub const PAGE_CAT_PLACEHOLDER: &str = "placeholder";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD, PAGE_CAT_PLACEHOLDER];

/// Проверка формата `{entity}--{variant}`.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, variant)) => !entity.is_empty() && !variant.is_empty(),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}
