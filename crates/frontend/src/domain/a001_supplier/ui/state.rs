//! Состояние страницы списка поставщиков.
//!
//! Каждый вариант страницы создаёт свой контроллер при монтировании;
//! при размонтировании все незавершённые запросы отбрасываются.

use super::super::api::fetch_suppliers;
use super::super::columns::SupplierColumn;
use crate::shared::components::data_table::TableColumn;
use crate::shared::view_options::{FetchGuard, FetchTicket, ViewOptions};
use contracts::domain::a001_supplier::aggregate::Supplier;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct SupplierListController {
    pub options: RwSignal<ViewOptions<SupplierColumn>>,
    pub rows: RwSignal<Vec<Supplier>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    guard: StoredValue<FetchGuard>,
}

impl SupplierListController {
    /// Создать состояние с колонками по умолчанию и загрузить первую страницу.
    pub fn new(default_columns: &[SupplierColumn]) -> Self {
        let controller = Self::with_columns(default_columns);

        on_cleanup(move || controller.unmount());

        controller.reload();
        controller
    }

    fn with_columns(default_columns: &[SupplierColumn]) -> Self {
        Self {
            options: RwSignal::new(ViewOptions::new(default_columns)),
            rows: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            guard: StoredValue::new(FetchGuard::new()),
        }
    }

    /// Запросить данные с текущим значением "показать архивные".
    ///
    /// Применяется только ответ на последний запрос.
    pub fn reload(&self) {
        let Some(ticket) = self.begin_fetch() else {
            return;
        };
        let include_archived = self.options.with_untracked(|o| o.show_archived);
        let this = *self;

        spawn_local(async move {
            let result = fetch_suppliers(include_archived).await;
            this.apply(ticket, result);
        });
    }

    fn begin_fetch(&self) -> Option<FetchTicket> {
        let ticket = self.guard.try_update_value(|g| g.begin())?;
        self.loading.set(true);
        self.error.set(None);
        Some(ticket)
    }

    /// Применить ответ, если квитанция ещё актуальна. Возвращает `false`,
    /// если ответ устарел или страница размонтирована.
    pub fn apply(&self, ticket: FetchTicket, result: Result<Vec<Supplier>, String>) -> bool {
        let accepted = self
            .guard
            .try_with_value(|g| g.accepts(&ticket))
            .unwrap_or(false);
        if !accepted {
            log!("suppliers: stale response discarded");
            return false;
        }

        match result {
            Ok(items) => {
                self.rows.set(items);
            }
            Err(e) => {
                log!("suppliers: fetch failed: {}", e);
                self.rows.set(Vec::new());
                self.error.set(Some(e));
            }
        }
        self.loading.set(false);
        true
    }

    pub fn is_mounted(&self) -> bool {
        self.guard
            .try_with_value(|g| g.is_mounted())
            .unwrap_or(false)
    }

    fn unmount(&self) {
        self.guard.try_update_value(|g| g.unmount());
    }

    pub fn toggle_show_archived(&self) {
        self.options.update(|o| {
            o.toggle_show_archived();
        });
        self.reload();
    }

    pub fn visible_columns(&self) -> Signal<Vec<SupplierColumn>> {
        let options = self.options;
        Signal::derive(move || {
            options.with(|o| {
                o.visible_in_order(SupplierColumn::all())
            })
        })
    }

    pub fn count(&self) -> Signal<Option<usize>> {
        let rows = self.rows;
        let loading = self.loading;
        Signal::derive(move || {
            if loading.get() {
                None
            } else {
                Some(rows.with(|r| r.len()))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_supplier::aggregate::SupplierId;

    fn supplier(name: &str, archived: bool) -> Supplier {
        Supplier {
            id: SupplierId(Default::default()),
            name: name.to_string(),
            contact_name: None,
            email: None,
            phone: None,
            address: None,
            notes: None,
            archived,
            created_at: None,
            updated_at: None,
        }
    }

    fn names(controller: &SupplierListController) -> Vec<String> {
        controller
            .rows
            .with_untracked(|rows| rows.iter().map(|s| s.name.clone()).collect())
    }

    #[test]
    fn test_late_response_for_old_flag_is_ignored() {
        let owner = Owner::new();
        owner.set();
        let controller = SupplierListController::with_columns(SupplierColumn::all());

        // "показать архив" включили и сразу выключили: запрос без архива
        // выдан первым, запрос с архивом вторым
        let without_archived = controller.begin_fetch().unwrap();
        controller.options.update(|o| {
            o.toggle_show_archived();
        });
        let with_archived = controller.begin_fetch().unwrap();

        let all = vec![supplier("A", false), supplier("B", true), supplier("C", false)];
        assert!(controller.apply(with_archived, Ok(all)));
        assert_eq!(names(&controller), ["A", "B", "C"]);

        let active = vec![supplier("A", false), supplier("C", false)];
        assert!(!controller.apply(without_archived, Ok(active)));
        assert_eq!(names(&controller), ["A", "B", "C"]);
        assert!(!controller.loading.get_untracked());
        assert!(controller.error.get_untracked().is_none());
    }

    #[test]
    fn test_late_error_does_not_clear_rows() {
        let owner = Owner::new();
        owner.set();
        let controller = SupplierListController::with_columns(SupplierColumn::all());

        let first = controller.begin_fetch().unwrap();
        let second = controller.begin_fetch().unwrap();
        assert!(controller.apply(second, Ok(vec![supplier("A", false)])));
        assert!(!controller.apply(first, Err("timeout".to_string())));

        assert_eq!(names(&controller), ["A"]);
        assert!(controller.error.get_untracked().is_none());
    }

    #[test]
    fn test_nothing_applied_after_unmount() {
        let owner = Owner::new();
        owner.set();
        let controller = SupplierListController::with_columns(SupplierColumn::all());

        let ticket = controller.begin_fetch().unwrap();
        assert!(controller.is_mounted());
        controller.unmount();
        assert!(!controller.is_mounted());

        assert!(!controller.apply(ticket, Ok(vec![supplier("A", false)])));
        assert!(!controller.apply(ticket, Err("offline".to_string())));
        assert!(names(&controller).is_empty());
        assert!(controller.error.get_untracked().is_none());
    }

    #[test]
    fn test_failed_fetch_shows_error_and_empty_list() {
        let owner = Owner::new();
        owner.set();
        let controller = SupplierListController::with_columns(SupplierColumn::all());

        let ticket = controller.begin_fetch().unwrap();
        assert!(controller.loading.get_untracked());
        assert!(controller.apply(ticket, Err("HTTP 502".to_string())));

        assert!(names(&controller).is_empty());
        assert_eq!(controller.error.get_untracked().as_deref(), Some("HTTP 502"));
        assert!(!controller.loading.get_untracked());
    }
}
