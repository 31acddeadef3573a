pub mod cards;
pub mod compact;
pub mod list;
pub mod state;

use self::state::SupplierListController;
use crate::shared::components::view_options_menu::ViewOptionsMenu;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

/// Переключатель вариантов отображения справочника
#[component]
fn VariantLinks() -> impl IntoView {
    view! {
        <nav class="variant-links">
            <A href="/suppliers">"Таблица"</A>
            <A href="/suppliers/compact">"Компактно"</A>
            <A href="/suppliers/cards">"Карточки"</A>
        </nav>
    }
}

/// Общие действия заголовка: варианты, "Вид" и обновление.
#[component]
fn SupplierToolbar(controller: SupplierListController) -> impl IntoView {
    let loading = controller.loading;

    view! {
        <VariantLinks />
        <ViewOptionsMenu
            options=controller.options
            on_toggle_archived=Callback::new(move |_| controller.toggle_show_archived())
        />
        <Button
            appearance=ButtonAppearance::Primary
            on_click=move |_| controller.reload()
            disabled=Signal::derive(move || loading.get())
        >
            {icon("refresh")}
            {move || if loading.get() { " Загрузка..." } else { " Обновить" }}
        </Button>
    }
}

/// Ошибка загрузки показывается над таблицей, пока не придёт успешный ответ.
#[component]
fn LoadError(controller: SupplierListController) -> impl IntoView {
    let error = controller.error;
    move || {
        error.get().map(|err| {
            view! { <div class="alert alert--error">{err}</div> }
        })
    }
}
