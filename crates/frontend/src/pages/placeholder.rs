use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PLACEHOLDER;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
fn Placeholder(page_id: &'static str, title: &'static str, icon_name: &'static str) -> impl IntoView {
    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_PLACEHOLDER>
            <div class="page__header">
                <div class="page__header-left">
                    {icon(icon_name)}
                    <h1 class="page__title">{title}</h1>
                </div>
            </div>
            <div class="page__content">
                <div class="placeholder">"Раздел в разработке"</div>
            </div>
        </PageFrame>
    }
}

#[component]
pub fn PurchasesPage() -> impl IntoView {
    view! { <Placeholder page_id="purchases--placeholder" title="Закупки" icon_name="purchases" /> }
}

#[component]
pub fn SalesPage() -> impl IntoView {
    view! { <Placeholder page_id="sales--placeholder" title="Продажи" icon_name="sales" /> }
}

#[component]
pub fn RecipesPage() -> impl IntoView {
    view! { <Placeholder page_id="recipes--placeholder" title="Рецептуры" icon_name="recipes" /> }
}

#[component]
pub fn BatchesPage() -> impl IntoView {
    view! { <Placeholder page_id="batches--placeholder" title="Партии" icon_name="batches" /> }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    view! { <Placeholder page_id="reports--placeholder" title="Отчёты" icon_name="reports" /> }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--placeholder" category=PAGE_CAT_PLACEHOLDER>
            <div class="page__content">
                <div class="placeholder">
                    "Страница не найдена. "
                    <A href="/">"На главную"</A>
                </div>
            </div>
        </PageFrame>
    }
}
