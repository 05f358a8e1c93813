//! Универсальная таблица для страниц списков.
//!
//! Сама ничего не загружает и не сортирует: показывает `data` как есть и
//! сообщает наверх о кликах по заголовкам, вводе в фильтры, смене страницы
//! и клике по строке. Локально хранит только индикатор сортировки и текст фильтров.

pub mod column;

pub use column::{row_actions, CellRenderer, ColumnSpec, RowActions};

use contracts::shared::list_query::{FilterParam, PaginationState, SortState};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::collections::BTreeMap;
use thaw::Spinner;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, merge_filter, next_sort, ListRow};

#[component]
pub fn DataGrid<T>(
    columns: Vec<ColumnSpec<T>>,

    #[prop(into)]
    data: Signal<Vec<T>>,

    #[prop(into, default = false.into())]
    is_loading: Signal<bool>,

    /// Без пагинации нижняя панель не выводится
    #[prop(optional, into)]
    pagination: Option<Signal<PaginationState>>,

    #[prop(optional)]
    on_page_change: Option<Callback<u32>>,

    #[prop(optional)]
    on_sort: Option<Callback<SortState>>,

    /// Получает полный набор фильтров после каждого изменения
    #[prop(optional)]
    on_filter: Option<Callback<Vec<FilterParam>>>,

    #[prop(optional_no_strip)]
    on_row_click: Option<Callback<T>>,

    /// Кнопки в последней колонке; клики по ним не доходят до строки
    #[prop(optional_no_strip)]
    render_actions: Option<RowActions<T>>,

    /// Содержимое пустой таблицы (по умолчанию "Нет данных")
    #[prop(optional, into)]
    empty_message: Option<ViewFn>,

    /// Начальное состояние индикатора сортировки
    #[prop(optional_no_strip)]
    initial_sort: Option<SortState>,
) -> impl IntoView
where
    T: ListRow + Clone + Send + Sync + 'static,
{
    let has_actions = render_actions.is_some();
    let has_filters = columns.iter().any(|c| c.filterable);
    let col_span = (columns.len() + usize::from(has_actions)).to_string();

    let columns = StoredValue::new(columns);
    let render_actions = StoredValue::new(render_actions);
    let sort_state = RwSignal::new(initial_sort);
    let filter_values = RwSignal::new(BTreeMap::<String, String>::new());

    let handle_sort_click = move |field: String| {
        let next = next_sort(sort_state.get_untracked().as_ref(), &field);
        sort_state.set(Some(next.clone()));
        if let Some(cb) = on_sort {
            cb.run(next);
        }
    };

    let handle_filter_change = move |field: String, value: String| {
        let filters = filter_values
            .try_update(|f| merge_filter(f, &field, &value))
            .unwrap_or_default();
        if let Some(cb) = on_filter {
            cb.run(filters);
        }
    };

    let header_cells = columns.with_value(|cols| {
        cols.iter()
            .map(|col| {
                let class = format!("data-grid__th data-grid__th--{}", col.align);
                let header = col.header.clone();
                if !col.sortable {
                    return view! { <th class=class>{header}</th> }.into_any();
                }

                let key = col.key.clone();
                let key_for_class = key.clone();
                let key_for_indicator = key.clone();
                view! {
                    <th class=class>
                        <div
                            class="table__sortable-header"
                            style="cursor: pointer;"
                            on:click=move |_| handle_sort_click(key.clone())
                        >
                            {header}
                            <span class=move || sort_state.with(|s| get_sort_class(s.as_ref(), &key_for_class))>
                                {move || sort_state.with(|s| get_sort_indicator(s.as_ref(), &key_for_indicator))}
                            </span>
                        </div>
                    </th>
                }
                .into_any()
            })
            .collect_view()
    });

    let filter_row = has_filters.then(|| {
        let cells = columns.with_value(|cols| {
            cols.iter()
                .map(|col| {
                    if !col.filterable {
                        return view! { <th></th> }.into_any();
                    }
                    let key = col.key.clone();
                    let key_for_value = key.clone();
                    view! {
                        <th>
                            <input
                                type="text"
                                class="data-grid__filter"
                                placeholder="Фильтр..."
                                prop:value=move || {
                                    filter_values.with(|f| f.get(&key_for_value).cloned().unwrap_or_default())
                                }
                                on:input=move |ev| handle_filter_change(key.clone(), event_target_value(&ev))
                            />
                        </th>
                    }
                    .into_any()
                })
                .collect_view()
        });
        view! {
            <tr class="data-grid__filters">
                {cells}
                {has_actions.then(|| view! { <th></th> })}
            </tr>
        }
    });

    let render_row = move |row: T, index: usize| {
        let cells = columns.with_value(|cols| {
            cols.iter()
                .map(|col| {
                    let content = match &col.render {
                        Some(render) => render(&row, index),
                        None => row.field_value(&col.key).unwrap_or_default().into_any(),
                    };
                    view! {
                        <td class=format!("data-grid__td data-grid__td--{}", col.align)>{content}</td>
                    }
                })
                .collect_view()
        });

        let actions = render_actions
            .with_value(|ra| ra.as_ref().map(|f| f(&row)))
            .map(|content| {
                view! {
                    <td class="data-grid__actions" on:click=|ev: MouseEvent| ev.stop_propagation()>
                        {content}
                    </td>
                }
            });

        let row_class = if on_row_click.is_some() {
            "data-grid__row data-grid__row--clickable"
        } else {
            "data-grid__row"
        };

        view! {
            <tr
                class=row_class
                on:click=move |_| {
                    if let Some(cb) = on_row_click {
                        cb.run(row.clone());
                    }
                }
            >
                {cells}
                {actions}
            </tr>
        }
        .into_any()
    };

    let body = move || {
        if is_loading.get() {
            return view! {
                <tr class="data-grid__loading">
                    <td colspan=col_span.clone()>
                        <Spinner />
                        " Загрузка..."
                    </td>
                </tr>
            }
            .into_any();
        }

        let rows = data.get();
        if rows.is_empty() {
            let message = match empty_message.as_ref() {
                Some(m) => m.run(),
                None => "Нет данных".into_any(),
            };
            return view! {
                <tr class="data-grid__empty">
                    <td colspan=col_span.clone()>{message}</td>
                </tr>
            }
            .into_any();
        }

        rows.into_iter()
            .enumerate()
            .map(|(index, row)| render_row(row, index))
            .collect_view()
            .into_any()
    };

    let footer = pagination.map(|p| {
        let on_change = on_page_change.unwrap_or_else(|| Callback::new(|_| {}));
        view! { <PaginationControls pagination=p on_page_change=on_change /> }
    });

    view! {
        <div class="data-grid">
            <div class="table-wrapper">
                <table class="table data-grid__table">
                    <thead>
                        <tr>
                            {header_cells}
                            {has_actions.then(|| view! { <th class="data-grid__th data-grid__th--actions"></th> })}
                        </tr>
                        {filter_row}
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
            {footer}
        </div>
    }
}
