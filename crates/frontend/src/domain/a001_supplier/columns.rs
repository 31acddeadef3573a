use crate::shared::components::data_table::TableColumn;
use crate::shared::components::ui::StatusBadge;
use contracts::domain::a001_supplier::aggregate::Supplier;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupplierColumn {
    Name,
    ContactName,
    Email,
    Phone,
    Address,
    Notes,
    Status,
    CreatedAt,
}

const ALL_COLUMNS: [SupplierColumn; 8] = [
    SupplierColumn::Name,
    SupplierColumn::ContactName,
    SupplierColumn::Email,
    SupplierColumn::Phone,
    SupplierColumn::Address,
    SupplierColumn::Notes,
    SupplierColumn::Status,
    SupplierColumn::CreatedAt,
];

/// Колонки, видимые по умолчанию в компактном варианте
pub const COMPACT_COLUMNS: [SupplierColumn; 4] = [
    SupplierColumn::Name,
    SupplierColumn::Phone,
    SupplierColumn::Email,
    SupplierColumn::Status,
];

impl TableColumn for SupplierColumn {
    fn all() -> &'static [Self] {
        &ALL_COLUMNS
    }

    fn label(&self) -> &'static str {
        match self {
            SupplierColumn::Name => "Наименование",
            SupplierColumn::ContactName => "Контактное лицо",
            SupplierColumn::Email => "Email",
            SupplierColumn::Phone => "Телефон",
            SupplierColumn::Address => "Адрес",
            SupplierColumn::Notes => "Примечание",
            SupplierColumn::Status => "Статус",
            SupplierColumn::CreatedAt => "Создан",
        }
    }

    fn min_width(&self) -> f64 {
        match self {
            SupplierColumn::Name | SupplierColumn::Address => 200.0,
            SupplierColumn::Status | SupplierColumn::CreatedAt => 100.0,
            _ => 140.0,
        }
    }
}

/// Текст ячейки. Пустые необязательные поля показываются как "—".
pub fn cell_text(supplier: &Supplier, column: SupplierColumn) -> String {
    let opt = |v: &Option<String>| match v.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => "—".to_string(),
    };
    match column {
        SupplierColumn::Name => supplier.name.clone(),
        SupplierColumn::ContactName => opt(&supplier.contact_name),
        SupplierColumn::Email => opt(&supplier.email),
        SupplierColumn::Phone => opt(&supplier.phone),
        SupplierColumn::Address => opt(&supplier.address),
        SupplierColumn::Notes => opt(&supplier.notes),
        SupplierColumn::Status => supplier.status().display_name().to_string(),
        SupplierColumn::CreatedAt => supplier
            .created_at
            .map(|d| d.format("%d.%m.%Y").to_string())
            .unwrap_or_else(|| "—".to_string()),
    }
}

pub fn render_cell(supplier: &Supplier, column: SupplierColumn) -> AnyView {
    match column {
        SupplierColumn::Status => view! { <StatusBadge status=supplier.status() /> }.into_any(),
        _ => cell_text(supplier, column).into_any(),
    }
}

pub fn row_key(supplier: &Supplier) -> String {
    supplier.to_string_id()
}
