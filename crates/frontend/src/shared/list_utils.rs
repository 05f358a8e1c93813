/// Универсальные утилиты для списков: доступ к полям строки, сортировка, фильтры, поиск
use contracts::shared::list_query::{FilterParam, SortDirection, SortState};
use leptos::prelude::*;
use std::collections::BTreeMap;

/// Строка списка, которую умеет показать `DataGrid`.
///
/// `row_id` заменяет строковый `keyField`: ключ строки выбирается
/// типобезопасно, в JSON он по-прежнему приходит как `_id`.
pub trait ListRow {
    /// Уникальный идентификатор строки
    fn row_id(&self) -> &str;

    /// Название для диалога удаления
    fn display_name(&self) -> String {
        self.row_id().to_string()
    }

    /// Значение колонки по ключу (когда у колонки нет своего render)
    fn field_value(&self, field: &str) -> Option<String>;
}

/// Следующее состояние сортировки после клика по заголовку.
///
/// Повторный клик по активной колонке переключает asc/desc,
/// клик по другой колонке всегда начинает с asc.
pub fn next_sort(current: Option<&SortState>, field: &str) -> SortState {
    match current {
        Some(sort) if sort.field == field => SortState {
            field: field.to_string(),
            direction: sort.direction.toggled(),
        },
        _ => SortState::asc(field),
    }
}

/// Вносит значение фильтра колонки в карту и возвращает полный набор фильтров.
/// Пустое значение удаляет фильтр.
pub fn merge_filter(
    filters: &mut BTreeMap<String, String>,
    field: &str,
    value: &str,
) -> Vec<FilterParam> {
    if value.is_empty() {
        filters.remove(field);
    } else {
        filters.insert(field.to_string(), value.to_string());
    }
    contracts::shared::list_query::filters_to_params(filters)
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current: Option<&SortState>, field: &str) -> &'static str {
    match current {
        Some(sort) if sort.field == field => match sort.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        },
        _ => " ⇅",
    }
}

/// CSS класс индикатора: активная колонка подсвечивается
pub fn get_sort_class(current: Option<&SortState>, field: &str) -> &'static str {
    match current {
        Some(sort) if sort.field == field => "sort-icon active",
        _ => "sort-icon",
    }
}

/// Поле поиска с кнопкой очистки.
///
/// Сообщает о каждом изменении сразу; задержку выдерживает контроллер списка.
#[component]
pub fn SearchInput(
    /// Callback на каждое изменение текста
    #[prop(into)]
    on_input: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(String::new());

    let clear = move |_| {
        set_input_value.set(String::new());
        on_input.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="search"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    set_input_value.set(val.clone());
                    on_input.run(val);
                }
            />
            <Show when=move || !input_value.get().is_empty()>
                <button type="button" class="search-input__clear" on:click=clear title="Очистить">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_sort_toggles_same_field() {
        let current = SortState::asc("name");
        assert_eq!(next_sort(Some(&current), "name"), SortState::desc("name"));

        let current = SortState::desc("name");
        assert_eq!(next_sort(Some(&current), "name"), SortState::asc("name"));
    }

    #[test]
    fn test_next_sort_other_field_starts_asc() {
        let current = SortState::desc("name");
        assert_eq!(next_sort(Some(&current), "code"), SortState::asc("code"));
        assert_eq!(next_sort(None, "code"), SortState::asc("code"));
    }

    #[test]
    fn test_merge_filter_keeps_others_and_drops_empty() {
        let mut filters = BTreeMap::new();
        let params = merge_filter(&mut filters, "name", "shoe");
        assert_eq!(params, vec![FilterParam::new("name", "shoe")]);

        let params = merge_filter(&mut filters, "code", "A");
        assert_eq!(
            params,
            vec![FilterParam::new("code", "A"), FilterParam::new("name", "shoe")]
        );

        let params = merge_filter(&mut filters, "name", "");
        assert_eq!(params, vec![FilterParam::new("code", "A")]);
        assert!(!filters.contains_key("name"));
    }

    #[test]
    fn test_sort_indicator() {
        let sort = SortState::desc("name");
        assert_eq!(get_sort_indicator(Some(&sort), "name"), " ▼");
        assert_eq!(get_sort_indicator(Some(&sort), "code"), " ⇅");
        assert_eq!(get_sort_class(None, "code"), "sort-icon");
    }
}
