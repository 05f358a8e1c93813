//! Общая оболочка страниц-списков справочников PIM.
//!
//! Заголовок со счётчиком, поиск, таблица с удалением и диалог подтверждения.
//! Страница сущности передаёт только загрузку/удаление и колонки.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::confirm_delete::ConfirmDeleteModal;
use crate::shared::components::data_grid::{row_actions, ColumnSpec, DataGrid};
use crate::shared::icons::icon;
use crate::shared::list_page::{use_list_page, ListPageOptions};
use crate::shared::list_utils::{ListRow, SearchInput};

const NOTICE_TIMEOUT_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq)]
struct Notice {
    text: String,
    is_error: bool,
}

#[component]
pub fn EntityListPage<T>(
    #[prop(into)]
    title: String,
    options: ListPageOptions<T>,
    columns: Vec<ColumnSpec<T>>,
    #[prop(optional, into)]
    search_placeholder: String,
    /// Клик по строке (кроме колонки действий)
    #[prop(optional)]
    on_row_click: Option<Callback<T>>,
) -> impl IntoView
where
    T: ListRow + Clone + Send + Sync + 'static,
{
    let notice = RwSignal::new(None::<Notice>);
    let show_notice = move |text: String, is_error: bool| {
        notice.set(Some(Notice { text, is_error }));
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            notice.try_set(None);
        });
    };

    let options = options
        .on_delete_success(move |deleted: Option<T>| {
            let text = match deleted {
                Some(row) => format!("Запись «{}» удалена", row.display_name()),
                None => "Запись удалена".to_string(),
            };
            show_notice(text, false);
        })
        .on_delete_error(move |message| show_notice(message, true));

    let list = use_list_page(options);
    let pagination = list.pagination();
    let is_loading = list.is_loading();
    let error = list.error();

    let actions = list.can_delete().then(|| {
        row_actions(move |row: &T| {
            let id = row.row_id().to_string();
            let name = row.display_name();
            view! {
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| list.handle_delete_click(id.clone(), name.clone())
                >
                    {icon("trash")}
                </Button>
            }
            .into_any()
        })
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    <Badge>{move || pagination.get().total.to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| list.refresh_data()
                        disabled=is_loading
                    >
                        {icon("refresh")}
                        {move || if is_loading.get() { " Загрузка..." } else { " Обновить" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || notice.get().map(|n| {
                    let class = if n.is_error { "alert alert--error" } else { "alert alert--success" };
                    view! { <div class=class>{n.text}</div> }
                })}
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <form class="filter-panel" on:submit=move |ev| list.handle_search(ev)>
                    <SearchInput on_input=list.on_search_input() placeholder=search_placeholder />
                    <button type="submit" class="button button--primary">"Найти"</button>
                </form>

                <DataGrid
                    columns=columns
                    data=list.data()
                    is_loading=is_loading
                    pagination=pagination
                    on_page_change=list.on_page_change()
                    on_sort=list.on_sort()
                    on_filter=list.on_filter_input()
                    on_row_click=on_row_click
                    render_actions=actions
                    initial_sort=list.sort().get_untracked()
                />

                <ConfirmDeleteModal
                    state=list.delete_state()
                    on_confirm=Callback::new(move |_| list.confirm_delete())
                    on_cancel=Callback::new(move |_| list.cancel_delete())
                />
            </div>
        </div>
    }
}
