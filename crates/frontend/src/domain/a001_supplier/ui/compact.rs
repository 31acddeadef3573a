use super::state::SupplierListController;
use super::{LoadError, SupplierToolbar};
use crate::domain::a001_supplier::columns::{render_cell, row_key, COMPACT_COLUMNS};
use crate::shared::components::data_table::DataTable;
use crate::shared::components::page_header::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use leptos::prelude::*;

/// Плотная таблица; остальные колонки включаются через меню "Вид".
#[component]
pub fn SupplierCompactList() -> impl IntoView {
    let controller = SupplierListController::new(&COMPACT_COLUMNS);

    view! {
        <PageFrame page_id="a001_supplier--compact" category=PAGE_CAT_LIST>
            <PageHeader title="Поставщики" count=controller.count()>
                <SupplierToolbar controller=controller />
            </PageHeader>

            <div class="page__content">
                <LoadError controller=controller />
                <DataTable
                    rows=controller.rows
                    columns=controller.visible_columns()
                    row_key=row_key
                    render_cell=render_cell
                    dense=true
                    empty_text="Поставщиков нет"
                />
            </div>
        </PageFrame>
    }
}
