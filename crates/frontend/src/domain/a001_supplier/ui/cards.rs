use super::state::SupplierListController;
use super::{LoadError, SupplierToolbar};
use crate::domain::a001_supplier::columns::{cell_text, row_key, SupplierColumn};
use crate::shared::components::data_table::TableColumn;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::StatusBadge;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use leptos::prelude::*;

/// Карточки поставщиков. Поля карточки следуют видимым колонкам.
#[component]
pub fn SupplierCards() -> impl IntoView {
    let controller = SupplierListController::new(SupplierColumn::all());
    let columns = controller.visible_columns();

    view! {
        <PageFrame page_id="a001_supplier--cards" category=PAGE_CAT_LIST>
            <PageHeader title="Поставщики" count=controller.count()>
                <SupplierToolbar controller=controller />
            </PageHeader>

            <div class="page__content">
                <LoadError controller=controller />
                <Show when=move || !controller.loading.get() && controller.rows.with(|r| r.is_empty())>
                    <div class="table__empty">"Поставщиков нет"</div>
                </Show>
                <div class="card-grid">
                    <For
                        each=move || controller.rows.get()
                        key=row_key
                        children=move |supplier| {
                            let status = supplier.status();
                            let archived = supplier.archived;
                            view! {
                                <div class="supplier-card" class:supplier-card--archived=archived>
                                    {move || {
                                        let cols = columns.get();
                                        let title = cols
                                            .contains(&SupplierColumn::Name)
                                            .then(|| view! {
                                                <div class="supplier-card__title">{supplier.name.clone()}</div>
                                            });
                                        let badge = cols
                                            .contains(&SupplierColumn::Status)
                                            .then(|| view! { <StatusBadge status=status /> });
                                        let fields = cols
                                            .iter()
                                            .copied()
                                            .filter(|c| {
                                                !matches!(c, SupplierColumn::Name | SupplierColumn::Status)
                                            })
                                            .map(|c| {
                                                view! {
                                                    <div class="supplier-card__field">
                                                        <span class="supplier-card__label">{c.label()}</span>
                                                        <span class="supplier-card__value">{cell_text(&supplier, c)}</span>
                                                    </div>
                                                }
                                            })
                                            .collect_view();
                                        view! {
                                            <div class="supplier-card__header">{title}{badge}</div>
                                            {fields}
                                        }
                                    }}
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </PageFrame>
    }
}
