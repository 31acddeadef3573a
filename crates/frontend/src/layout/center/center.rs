use leptos::prelude::*;

/// Область контента. Прокручивается окно, а не этот контейнер:
/// выпадающие меню с `position: fixed` слушают прокрутку окна.
#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-content" style="flex: 1;">
            {children()}
        </div>
    }
}
