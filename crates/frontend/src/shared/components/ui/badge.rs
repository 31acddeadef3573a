use contracts::enums::status::Status;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge badge--primary",
        "success" => "badge badge--success",
        "warning" => "badge badge--warning",
        "error" => "badge badge--error",
        _ => "badge badge--neutral",
    };

    view! {
        <span class=variant_class>
            {children()}
        </span>
    }
}

/// Вариант бейджа для статуса записи
pub fn status_variant(status: Status) -> &'static str {
    match status {
        Status::Active => "success",
        Status::Pending => "warning",
        Status::Archived => "neutral",
    }
}

/// Бейдж статуса (Активен / Ожидает / В архиве)
#[component]
pub fn StatusBadge(status: Status) -> impl IntoView {
    view! {
        <Badge variant=status_variant(status).to_string()>
            {status.display_name()}
        </Badge>
    }
}
