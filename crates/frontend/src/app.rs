use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Состояние каркаса доступно всем страницам через контекст
    provide_context(AppGlobalContext::new());

    view! {
        <AppRoutes />
    }
}
