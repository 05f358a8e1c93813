//! Контроллер страницы списка: пагинация, поиск, сортировка, фильтры и удаление.
//!
//! # Использование
//!
//! ```ignore
//! let list = use_list_page(
//!     ListPageOptions::new(api::fetch_items).with_delete(api::delete_item),
//! );
//!
//! view! {
//!     <DataGrid
//!         columns=columns
//!         data=list.data()
//!         is_loading=list.is_loading()
//!         pagination=list.pagination()
//!         on_page_change=list.on_page_change()
//!         on_sort=list.on_sort()
//!         on_filter=list.on_filter_input()
//!     />
//! }
//! ```
//!
//! Только контроллер вызывает `fetch`/`delete`; таблица лишь сообщает о намерениях.

pub mod debounce;
pub mod state;

use contracts::shared::list_query::{
    FilterParam, ListResponse, PaginationState, QueryParams, SortState,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use crate::shared::list_utils::ListRow;
use debounce::{debounce, Debouncer, SEARCH_DEBOUNCE_MS};
use state::{DeleteFollowUp, DeleteWorkflowState, FetchOutcome, FetchTicket, ListState};

pub const DEFAULT_PAGE_LIMIT: u32 = 10;

pub const DELETE_DISABLED_MESSAGE: &str = "Удаление недоступно для этого списка";

pub type LocalFuture<T> = Pin<Box<dyn Future<Output = T>>>;
pub type FetchFn<T> = Rc<dyn Fn(QueryParams) -> LocalFuture<Result<ListResponse<T>, String>>>;
pub type DeleteFn = Rc<dyn Fn(String) -> LocalFuture<Result<(), String>>>;

/// Настройки контроллера
pub struct ListPageOptions<T> {
    fetch: FetchFn<T>,
    delete: Option<DeleteFn>,
    initial_limit: u32,
    initial_sort: Option<SortState>,
    on_delete_success: Option<Rc<dyn Fn(Option<T>)>>,
    on_delete_error: Option<Rc<dyn Fn(String)>>,
}

impl<T: 'static> ListPageOptions<T> {
    pub fn new<F, Fut>(fetch: F) -> Self
    where
        F: Fn(QueryParams) -> Fut + 'static,
        Fut: Future<Output = Result<ListResponse<T>, String>> + 'static,
    {
        Self {
            fetch: Rc::new(move |params| Box::pin(fetch(params))),
            delete: None,
            initial_limit: DEFAULT_PAGE_LIMIT,
            initial_sort: None,
            on_delete_success: None,
            on_delete_error: None,
        }
    }

    pub fn with_delete<F, Fut>(mut self, delete: F) -> Self
    where
        F: Fn(String) -> Fut + 'static,
        Fut: Future<Output = Result<(), String>> + 'static,
    {
        self.delete = Some(Rc::new(move |id| Box::pin(delete(id))));
        self
    }

    pub fn with_initial_limit(mut self, limit: u32) -> Self {
        self.initial_limit = limit.max(1);
        self
    }

    pub fn with_initial_sort(mut self, sort: SortState) -> Self {
        self.initial_sort = Some(sort);
        self
    }

    /// Вызывается после удаления, до завершения перезагрузки.
    /// Получает `None`, если удалённой строки нет на текущей странице.
    pub fn on_delete_success(mut self, f: impl Fn(Option<T>) + 'static) -> Self {
        self.on_delete_success = Some(Rc::new(f));
        self
    }

    pub fn on_delete_error(mut self, f: impl Fn(String) + 'static) -> Self {
        self.on_delete_error = Some(Rc::new(f));
        self
    }
}

/// Обработчики и состояние одной страницы списка. `Copy`, можно свободно
/// переносить в замыкания.
pub struct ListPage<T: 'static> {
    state: RwSignal<ListState<T>>,
    source: StoredValue<ListPageOptions<T>, LocalStorage>,
    search_debounce: StoredValue<Debouncer<String>>,
    filter_debounce: StoredValue<Debouncer<Vec<FilterParam>>>,
}

impl<T: 'static> Clone for ListPage<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ListPage<T> {}

/// Создаёт контроллер и запускает первую загрузку.
///
/// Загрузка повторяется при каждом изменении страницы, лимита, сортировки,
/// фильтров или поиска.
pub fn use_list_page<T>(options: ListPageOptions<T>) -> ListPage<T>
where
    T: ListRow + Clone + Send + Sync + 'static,
{
    let state = RwSignal::new(
        ListState::new(options.initial_limit).with_sort(options.initial_sort.clone()),
    );
    let list = ListPage {
        state,
        source: StoredValue::new_local(options),
        search_debounce: StoredValue::new(Debouncer::new(SEARCH_DEBOUNCE_MS)),
        filter_debounce: StoredValue::new(Debouncer::new(SEARCH_DEBOUNCE_MS)),
    };

    let query = Memo::new(move |_| state.with(|s| s.query_params()));
    Effect::new(move |_| {
        query.track();
        list.load();
    });

    on_cleanup(move || {
        list.search_debounce.try_update_value(|d| d.cancel());
        list.filter_debounce.try_update_value(|d| d.cancel());
    });

    list
}

impl<T> ListPage<T>
where
    T: ListRow + Clone + Send + Sync + 'static,
{
    // ------------------------------------------------------------------------
    // Data accessors
    // ------------------------------------------------------------------------

    pub fn data(&self) -> Signal<Vec<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.data.clone()))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_loading))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error.clone()))
    }

    pub fn pagination(&self) -> Signal<PaginationState> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.pagination))
    }

    pub fn sort(&self) -> Signal<Option<SortState>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.sort.clone()))
    }

    pub fn delete_state(&self) -> Signal<DeleteWorkflowState> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.delete.clone()))
    }

    pub fn can_delete(&self) -> bool {
        self.source
            .try_with_value(|s| s.delete.is_some())
            .unwrap_or(false)
    }

    // ------------------------------------------------------------------------
    // Handlers
    // ------------------------------------------------------------------------

    pub fn handle_page_change(&self, page: u32) {
        self.state.update(|s| s.set_page(page));
    }

    /// Ввод в поле поиска: через 500 мс тишины поиск применяется и страница сбрасывается на 1
    pub fn handle_search_input(&self, raw: String) {
        let state = self.state;
        debounce(self.search_debounce, raw, move |term| {
            state.try_update(|s| s.commit_search(&term));
        });
    }

    /// Кнопка "Найти": страница 1 и перезагрузка, текст поиска не меняется
    pub fn handle_search(&self, ev: SubmitEvent) {
        ev.prevent_default();
        self.restart_search();
    }

    pub fn restart_search(&self) {
        if let Some(ticket) = self.state.try_update(|s| s.restart_search()).flatten() {
            self.run_fetch(ticket);
        }
    }

    pub fn handle_sort(&self, sort: Option<SortState>) {
        self.state.update(|s| s.set_sort(sort));
    }

    pub fn handle_filter(&self, filters: Vec<FilterParam>) {
        self.state.update(|s| s.set_filters(filters));
    }

    /// То же, что `handle_filter`, но с задержкой поиска; для ввода в фильтры таблицы
    pub fn handle_filter_input(&self, filters: Vec<FilterParam>) {
        let state = self.state;
        debounce(self.filter_debounce, filters, move |filters| {
            state.try_update(|s| s.set_filters(filters));
        });
    }

    /// Открывает подтверждение удаления.
    /// Без `delete` диалог не открывается, а вызывающий получает ошибку.
    pub fn handle_delete_click(&self, id: String, display_name: String) {
        if !self.can_delete() {
            log::warn!("delete requested for '{}' but the list has no delete function", id);
            self.notify_delete_error(DELETE_DISABLED_MESSAGE.to_string());
            return;
        }
        self.state.update(|s| s.open_delete(id, display_name));
    }

    pub fn cancel_delete(&self) {
        self.state.update(|s| s.cancel_delete());
    }

    /// Удаляет выбранную строку и перезагружает страницу.
    /// Перезагрузка запускается только после успешного удаления.
    pub fn confirm_delete(&self) {
        let Some(delete) = self.source.try_with_value(|s| s.delete.clone()).flatten() else {
            return;
        };
        let Some(id) = self.state.try_update(|s| s.begin_delete()).flatten() else {
            return;
        };

        let list = *self;
        spawn_local(async move {
            let result = delete(id.clone()).await;
            if let Err(e) = &result {
                log::warn!("delete of '{}' failed: {}", id, e);
            }
            let Some(follow_up) = list.state.try_update(|s| s.finish_delete(&id, result)) else {
                return;
            };

            match follow_up {
                DeleteFollowUp::Refetch { deleted, ticket } => {
                    if deleted.is_none() {
                        log::debug!("deleted row '{}' was not on the current page", id);
                    }
                    list.notify_deleted(deleted);
                    list.run_fetch(ticket);
                }
                DeleteFollowUp::ReportError(message) => list.notify_delete_error(message),
            }
        });
    }

    pub fn refresh_data(&self) {
        self.load();
    }

    // ------------------------------------------------------------------------
    // Callbacks for DataGrid
    // ------------------------------------------------------------------------

    pub fn on_page_change(&self) -> Callback<u32> {
        let list = *self;
        Callback::new(move |page| list.handle_page_change(page))
    }

    pub fn on_sort(&self) -> Callback<SortState> {
        let list = *self;
        Callback::new(move |sort| list.handle_sort(Some(sort)))
    }

    pub fn on_filter_input(&self) -> Callback<Vec<FilterParam>> {
        let list = *self;
        Callback::new(move |filters| list.handle_filter_input(filters))
    }

    pub fn on_search_input(&self) -> Callback<String> {
        let list = *self;
        Callback::new(move |raw| list.handle_search_input(raw))
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn load(&self) {
        if let Some(ticket) = self.state.try_update(|s| s.begin_fetch()) {
            self.run_fetch(ticket);
        }
    }

    fn run_fetch(&self, ticket: FetchTicket) {
        let Some(fetch) = self.source.try_with_value(|s| s.fetch.clone()) else {
            return;
        };
        log::debug!("list fetch #{}: {:?}", ticket.seq, ticket.params);

        let state = self.state;
        spawn_local(async move {
            let result = fetch(ticket.params).await;
            if let Err(e) = &result {
                log::warn!("list fetch #{} failed: {}", ticket.seq, e);
            }
            if let Some(FetchOutcome::Discarded) =
                state.try_update(|s| s.finish_fetch(ticket.seq, result))
            {
                log::debug!("list fetch #{} superseded, result dropped", ticket.seq);
            }
        });
    }

    fn notify_deleted(&self, item: Option<T>) {
        if let Some(cb) = self.source.try_with_value(|s| s.on_delete_success.clone()).flatten() {
            cb(item);
        }
    }

    fn notify_delete_error(&self, message: String) {
        if let Some(cb) = self.source.try_with_value(|s| s.on_delete_error.clone()).flatten() {
            cb(message);
        }
    }
}
