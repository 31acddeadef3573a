//! Выпадающее меню "Вид": показ архивных записей и видимость колонок.
//!
//! Меню позиционируется `position: fixed` по координатам кнопки-триггера,
//! поэтому не обрезается контейнером таблицы. Позиция пересчитывается при
//! прокрутке и изменении размера окна; клик вне меню его закрывает.

use super::data_table::TableColumn;
use super::ui::checkbox::Checkbox;
use crate::shared::icons::icon;
use crate::shared::view_options::ViewOptions;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub const MENU_WIDTH: f64 = 240.0;
const MENU_GAP: f64 = 4.0;
const VIEWPORT_MARGIN: f64 = 8.0;

/// Границы кнопки-триггера в координатах окна.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerRect {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuPosition {
    pub top: f64,
    pub left: f64,
}

/// Меню выравнивается по правому краю триггера и не выходит за окно.
pub fn menu_position(trigger: TriggerRect, menu_width: f64, viewport_width: f64) -> MenuPosition {
    let max_left = (viewport_width - menu_width - VIEWPORT_MARGIN).max(VIEWPORT_MARGIN);
    let left = (trigger.right - menu_width).clamp(VIEWPORT_MARGIN, max_left);
    MenuPosition {
        top: trigger.bottom + MENU_GAP,
        left,
    }
}

#[component]
pub fn ViewOptionsMenu<C: TableColumn>(
    options: RwSignal<ViewOptions<C>>,
    /// Переключение "Показать архивные"; перезапрос делает владелец
    on_toggle_archived: Callback<()>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let position = RwSignal::new(None::<MenuPosition>);
    let root_ref = NodeRef::<leptos::html::Div>::new();
    let trigger_ref = NodeRef::<leptos::html::Button>::new();

    let measure = move || {
        let Some(trigger) = trigger_ref.get_untracked() else {
            return;
        };
        let rect = trigger.get_bounding_client_rect();
        let viewport_width = window()
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(rect.right() + MENU_WIDTH);
        position.set(Some(menu_position(
            TriggerRect {
                left: rect.left(),
                right: rect.right(),
                bottom: rect.bottom(),
            },
            MENU_WIDTH,
            viewport_width,
        )));
    };

    let on_scroll = window_event_listener(ev::scroll, move |_| {
        if open.get_untracked() {
            measure();
        }
    });
    let on_resize = window_event_listener(ev::resize, move |_| {
        if open.get_untracked() {
            measure();
        }
    });
    // Клик вне меню закрывает его
    let on_click = window_event_listener(ev::click, move |ev: ev::MouseEvent| {
        if !open.get_untracked() {
            return;
        }
        let Some(root) = root_ref.get_untracked() else {
            return;
        };
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            .map(|node| root.contains(Some(&node)))
            .unwrap_or(false);
        if !inside {
            open.set(false);
        }
    });
    on_cleanup(move || {
        on_scroll.remove();
        on_resize.remove();
        on_click.remove();
    });

    let toggle_open = move |_| {
        if !open.get_untracked() {
            measure();
        }
        open.update(|o| *o = !*o);
    };

    let menu_style = move || match position.get() {
        Some(p) => format!(
            "position: fixed; top: {}px; left: {}px; width: {}px; z-index: 1000;",
            p.top, p.left, MENU_WIDTH
        ),
        None => format!("position: fixed; width: {}px; z-index: 1000;", MENU_WIDTH),
    };

    let show_archived = Signal::derive(move || options.with(|o| o.show_archived));

    view! {
        <div class="view-options" node_ref=root_ref>
            <button
                class="button button--secondary view-options__trigger"
                node_ref=trigger_ref
                on:click=toggle_open
                title="Настройки отображения"
            >
                {icon("columns")}
                " Вид"
            </button>
            <Show when=move || open.get()>
                <div class="view-options__menu" style=menu_style>
                    <div class="view-options__section">
                        <Checkbox
                            label="Показать архивные"
                            checked=show_archived
                            on_change=Callback::new(move |_| on_toggle_archived.run(()))
                        />
                    </div>
                    <div class="view-options__divider"></div>
                    <div class="view-options__section">
                        <div class="view-options__title">"Колонки"</div>
                        {C::all()
                            .iter()
                            .copied()
                            .map(|column| {
                                let checked = Signal::derive(move || {
                                    options.with(|o| o.is_visible(column))
                                });
                                view! {
                                    <Checkbox
                                        label=column.label()
                                        checked=checked
                                        on_change=Callback::new(move |visible: bool| {
                                            options.update(|o| o.set_column_visible(column, visible))
                                        })
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </div>
    }
}
