use crate::shared::components::ui::Badge;
use leptos::prelude::*;

/// PageHeader component - reusable header for list pages
///
/// Заголовок, счётчик записей и блок действий справа.
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Количество записей рядом с заголовком (None - не показывать)
    #[prop(optional, into)]
    count: Signal<Option<usize>>,

    /// Actions on the right side
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {move || count.get().map(|n| view! {
                    <Badge variant="primary".to_string()>{n.to_string()}</Badge>
                })}
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
