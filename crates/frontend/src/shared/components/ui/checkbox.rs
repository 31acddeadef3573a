use leptos::prelude::*;

/// Чекбокс с подписью. Состояние хранит владелец, компонент только сообщает о клике.
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: String,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler, receives the new checked value
    on_change: Callback<bool>,
    /// Additional CSS classes for wrapper
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let wrapper_class = move || match class.get() {
        Some(extra) if !extra.is_empty() => format!("form__checkbox-wrapper {}", extra),
        _ => "form__checkbox-wrapper".to_string(),
    };

    view! {
        <label class=wrapper_class>
            <input
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span class="form__checkbox-label">{label}</span>
        </label>
    }
}
