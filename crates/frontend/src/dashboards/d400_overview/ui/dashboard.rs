use crate::dashboards::d400_overview::summary::SupplierSummary;
use crate::domain::a001_supplier::api;
use crate::shared::components::stat_card::StatCard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::view_options::FetchGuard;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Главная: сводка по справочнику поставщиков
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let (summary, set_summary) = signal(None::<SupplierSummary>);
    let (error, set_error) = signal(None::<String>);

    // Экран может закрыться раньше ответа
    let guard = StoredValue::new(FetchGuard::new());
    on_cleanup(move || {
        guard.try_update_value(|g| g.unmount());
    });

    if let Some(ticket) = guard.try_update_value(|g| g.begin()) {
        spawn_local(async move {
            let result = api::fetch_suppliers(true).await;
            let accepted = guard
                .try_with_value(|g| g.accepts(&ticket))
                .unwrap_or(false);
            if !accepted {
                return;
            }
            match result {
                Ok(items) => set_summary.set(Some(SupplierSummary::from_suppliers(&items))),
                Err(e) => {
                    log::error!("Failed to load supplier summary: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    }

    let active = Signal::derive(move || summary.get().map(|s| s.active));
    let archived = Signal::derive(move || summary.get().map(|s| s.archived));
    let total = Signal::derive(move || summary.get().map(|s| s.total()));

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Обзор"</h1>
                </div>
            </div>
            <div class="page__content">
                {move || error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}
                <div class="stat-grid">
                    <StatCard label="Активные поставщики" icon_name="suppliers" value=active variant="success" />
                    <StatCard label="В архиве" icon_name="archive" value=archived variant="neutral" />
                    <StatCard label="Всего" icon_name="dashboard" value=total />
                </div>
            </div>
        </PageFrame>
    }
}
