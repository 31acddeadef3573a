use contracts::domain::a001_supplier::aggregate::Supplier;

/// Счётчики поставщиков для главной страницы
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SupplierSummary {
    pub active: usize,
    pub archived: usize,
}

impl SupplierSummary {
    pub fn from_suppliers(items: &[Supplier]) -> Self {
        let archived = items.iter().filter(|s| s.archived).count();
        Self {
            active: items.len() - archived,
            archived,
        }
    }

    pub fn total(&self) -> usize {
        self.active + self.archived
    }
}
