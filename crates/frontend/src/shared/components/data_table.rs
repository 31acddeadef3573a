use leptos::prelude::*;
use std::hash::Hash;
use thaw::*;

/// Колонка таблицы с фиксированным порядком объявления.
pub trait TableColumn: Copy + Eq + Hash + Send + Sync + 'static {
    /// Все колонки в порядке отображения
    fn all() -> &'static [Self];

    fn label(&self) -> &'static str;

    fn min_width(&self) -> f64 {
        120.0
    }
}

/// Таблица на компонентах thaw: строки `rows`, колонки `columns` в переданном порядке.
///
/// Содержимое ячейки рисует `render_cell`; смена набора колонок не перезапрашивает данные.
#[component]
pub fn DataTable<R, C>(
    #[prop(into)] rows: Signal<Vec<R>>,
    /// Видимые колонки в порядке отображения
    #[prop(into)]
    columns: Signal<Vec<C>>,
    row_key: fn(&R) -> String,
    render_cell: fn(&R, C) -> AnyView,
    /// Плотная разметка (компактный вариант страницы)
    #[prop(optional)]
    dense: bool,
    #[prop(optional, into)] empty_text: Option<String>,
) -> impl IntoView
where
    R: Clone + Send + Sync + 'static,
    C: TableColumn,
{
    let empty_text = empty_text.unwrap_or_else(|| "Нет данных".to_string());
    let wrapper_class = if dense {
        "table-wrapper table-wrapper--dense"
    } else {
        "table-wrapper"
    };

    view! {
        <div class=wrapper_class>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {move || {
                            columns
                                .get()
                                .into_iter()
                                .map(|column| {
                                    view! {
                                        <TableHeaderCell resizable=false min_width=column.min_width()>
                                            {column.label()}
                                        </TableHeaderCell>
                                    }
                                })
                                .collect_view()
                        }}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || rows.get()
                        key=move |row| row_key(row)
                        children=move |row| {
                            view! {
                                <TableRow>
                                    {move || {
                                        columns
                                            .get()
                                            .into_iter()
                                            .map(|column| {
                                                let row = row.clone();
                                                view! {
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            {render_cell(&row, column)}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
            <Show when=move || rows.with(|r| r.is_empty())>
                <div class="table__empty">{empty_text.clone()}</div>
            </Show>
        </div>
    }
}
