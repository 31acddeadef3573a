//! Боковое меню разделов.

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuItem {
    href: &'static str,
    label: &'static str,
    icon: &'static str,
}

const MENU_ITEMS: &[MenuItem] = &[
    MenuItem { href: "/", label: "Обзор", icon: "dashboard" },
    MenuItem { href: "/purchases", label: "Закупки", icon: "purchases" },
    MenuItem { href: "/suppliers", label: "Поставщики", icon: "suppliers" },
    MenuItem { href: "/sales", label: "Продажи", icon: "sales" },
    MenuItem { href: "/recipes", label: "Рецептуры", icon: "recipes" },
    MenuItem { href: "/batches", label: "Партии", icon: "batches" },
    MenuItem { href: "/reports", label: "Отчёты", icon: "reports" },
];

/// Пункт активен на своём пути и на вложенных (`/suppliers/cards`).
/// Корень активен только сам по себе.
fn is_active(pathname: &str, href: &str) -> bool {
    if href == "/" {
        return pathname == "/" || pathname.is_empty();
    }
    pathname == href
        || pathname
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="app-sidebar__content">
            {MENU_ITEMS
                .iter()
                .copied()
                .map(|item| {
                    let active = move || location.pathname.with(|p| is_active(p, item.href));
                    view! {
                        <A href=item.href>
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=active
                                style:padding-left="12px"
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(item.icon)}
                                    <span>{item.label}</span>
                                </div>
                            </div>
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}
