use super::state::SupplierListController;
use super::{LoadError, SupplierToolbar};
use crate::domain::a001_supplier::api;
use crate::domain::a001_supplier::columns::{render_cell, row_key, SupplierColumn};
use crate::shared::components::data_table::{DataTable, TableColumn};
use crate::shared::components::page_header::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Справочник поставщиков: все колонки.
#[component]
pub fn SupplierList() -> impl IntoView {
    let controller = SupplierListController::new(SupplierColumn::all());
    let (seeding, set_seeding) = signal(false);

    let seed = move |_| {
        set_seeding.set(true);
        spawn_local(async move {
            let result = api::insert_test_data().await;
            if !controller.is_mounted() {
                return;
            }
            match result {
                Ok(result) => {
                    log!("suppliers: inserted {} demo rows", result.inserted);
                    controller.reload();
                }
                Err(e) => {
                    controller.error.set(Some(e));
                }
            }
            set_seeding.set(false);
        });
    };

    view! {
        <PageFrame page_id="a001_supplier--list" category=PAGE_CAT_LIST>
            <PageHeader title="Поставщики" count=controller.count()>
                <SupplierToolbar controller=controller />
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=seed
                    disabled=Signal::derive(move || seeding.get())
                >
                    "Тестовые данные"
                </Button>
            </PageHeader>

            <div class="page__content">
                <LoadError controller=controller />
                <DataTable
                    rows=controller.rows
                    columns=controller.visible_columns()
                    row_key=row_key
                    render_cell=render_cell
                    empty_text="Поставщиков нет"
                />
            </div>
        </PageFrame>
    }
}
