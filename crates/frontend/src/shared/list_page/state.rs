//! Состояние страницы списка без привязки к реактивности.
//!
//! Все переходы здесь синхронные и проверяются юнит-тестами;
//! `use_list_page` только хранит `ListState` в сигнале и запускает запросы.

use contracts::shared::list_query::{
    is_reserved_key, FilterParam, ListResponse, PaginationState, QueryParams, SortState,
};
use std::collections::BTreeMap;

use crate::shared::list_utils::ListRow;

pub const FETCH_ERROR_FALLBACK: &str = "Не удалось загрузить данные";
pub const DELETE_ERROR_FALLBACK: &str = "Не удалось удалить запись";

/// Диалог подтверждения удаления
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteWorkflowState {
    pub is_open: bool,
    pub target_id: Option<String>,
    pub target_display_name: String,
    /// Запрос на удаление уже отправлен
    pub is_deleting: bool,
}

/// Запущенный запрос страницы
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub seq: u64,
    pub params: QueryParams,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// Пришёл ответ на устаревший запрос
    Discarded,
}

/// Итог удаления
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteFollowUp<T> {
    /// `deleted` пуст, если строки нет на текущей странице.
    /// Перезагрузка уже начата, `ticket` нужно выполнить.
    Refetch { deleted: Option<T>, ticket: FetchTicket },
    ReportError(String),
}

#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub data: Vec<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub pagination: PaginationState,
    pub sort: Option<SortState>,
    pub filters: BTreeMap<String, String>,
    pub search_term: String,
    pub delete: DeleteWorkflowState,
    last_started_seq: u64,
}

pub fn message_or(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

impl<T: ListRow + Clone> ListState<T> {
    pub fn new(initial_limit: u32) -> Self {
        Self {
            data: Vec::new(),
            is_loading: false,
            error: None,
            pagination: PaginationState::new(initial_limit),
            sort: None,
            filters: BTreeMap::new(),
            search_term: String::new(),
            delete: DeleteWorkflowState::default(),
            last_started_seq: 0,
        }
    }

    /// Начальная сортировка страницы
    pub fn with_sort(mut self, sort: Option<SortState>) -> Self {
        self.sort = sort;
        self
    }

    pub fn query_params(&self) -> QueryParams {
        QueryParams::new(self.pagination.page, self.pagination.limit)
            .with_search(&self.search_term)
            .with_sort(self.sort.as_ref())
            .with_filters(&self.filters)
    }

    // ------------------------------------------------------------------------
    // Fetch
    // ------------------------------------------------------------------------

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.last_started_seq += 1;
        self.is_loading = true;
        self.error = None;
        FetchTicket {
            seq: self.last_started_seq,
            params: self.query_params(),
        }
    }

    /// Применяет ответ, только если это ответ на последний запущенный запрос.
    pub fn finish_fetch(
        &mut self,
        seq: u64,
        result: Result<ListResponse<T>, String>,
    ) -> FetchOutcome {
        if seq < self.last_started_seq {
            return FetchOutcome::Discarded;
        }

        match result {
            Ok(response) => {
                // серверные page/limit/total важнее запрошенных
                self.pagination = response.pagination();
                self.data = response.data;
            }
            Err(message) => {
                self.error = Some(message_or(message, FETCH_ERROR_FALLBACK));
            }
        }
        self.is_loading = false;
        FetchOutcome::Applied
    }

    // ------------------------------------------------------------------------
    // Page / search / sort / filter
    // ------------------------------------------------------------------------

    pub fn set_page(&mut self, page: u32) {
        self.pagination.page = page.max(1);
    }

    pub fn commit_search(&mut self, raw: &str) {
        self.search_term = raw.trim().to_string();
        self.pagination.page = 1;
    }

    /// Повторный поиск с тем же текстом.
    ///
    /// Если страница уже первая, параметры запроса не меняются и загрузку
    /// приходится начать явно: тогда возвращается её билет. Иначе смена
    /// страницы сама вызовет загрузку.
    pub fn restart_search(&mut self) -> Option<FetchTicket> {
        if self.pagination.page == 1 {
            return Some(self.begin_fetch());
        }
        self.pagination.page = 1;
        None
    }

    /// Сортировка не сбрасывает текущую страницу
    pub fn set_sort(&mut self, sort: Option<SortState>) {
        self.sort = sort;
    }

    /// Полностью заменяет фильтры. Пустые значения и зарезервированные ключи отбрасываются.
    pub fn set_filters(&mut self, filters: Vec<FilterParam>) {
        self.filters = filters
            .into_iter()
            .filter(|f| !f.value.is_empty())
            .filter(|f| {
                let reserved = is_reserved_key(&f.field);
                if reserved {
                    log::warn!("filter field '{}' clashes with a query key, ignored", f.field);
                }
                !reserved
            })
            .map(|f| (f.field, f.value))
            .collect();
        self.pagination.page = 1;
    }

    // ------------------------------------------------------------------------
    // Delete workflow
    // ------------------------------------------------------------------------

    pub fn open_delete(&mut self, id: String, display_name: String) {
        if self.delete.is_deleting {
            return;
        }
        self.delete = DeleteWorkflowState {
            is_open: true,
            target_id: Some(id),
            target_display_name: display_name,
            is_deleting: false,
        };
    }

    /// Закрывает диалог. Пока удаление в полёте, отмена игнорируется.
    pub fn cancel_delete(&mut self) {
        if !self.delete.is_deleting {
            self.delete = DeleteWorkflowState::default();
        }
    }

    /// Отмечает начало удаления и возвращает id цели.
    pub fn begin_delete(&mut self) -> Option<String> {
        if !self.delete.is_open || self.delete.is_deleting {
            return None;
        }
        let id = self.delete.target_id.clone()?;
        self.delete.is_deleting = true;
        Some(id)
    }

    /// Закрывает диалог и решает, что делать дальше.
    ///
    /// Перезагрузка нужна только после успешного удаления; ошибка
    /// не попадает в `error` списка.
    pub fn finish_delete(&mut self, id: &str, result: Result<(), String>) -> DeleteFollowUp<T> {
        self.delete = DeleteWorkflowState::default();
        match result {
            Ok(()) => DeleteFollowUp::Refetch {
                deleted: self.find_row(id),
                ticket: self.begin_fetch(),
            },
            Err(message) => DeleteFollowUp::ReportError(message_or(message, DELETE_ERROR_FALLBACK)),
        }
    }

    /// Строка из текущей страницы; `None`, если её здесь нет
    pub fn find_row(&self, id: &str) -> Option<T> {
        self.data.iter().find(|row| row.row_id() == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_query::SortDirection;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        name: String,
    }

    impl ListRow for Row {
        fn row_id(&self) -> &str {
            &self.id
        }

        fn field_value(&self, field: &str) -> Option<String> {
            match field {
                "name" => Some(self.name.clone()),
                _ => None,
            }
        }
    }

    fn row(id: &str, name: &str) -> Row {
        Row {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn response(rows: Vec<Row>, page: u32, limit: u32, total: u64) -> ListResponse<Row> {
        ListResponse {
            data: rows,
            page,
            limit,
            total,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = ListState::<Row>::new(10);
        let params = state.query_params();
        assert_eq!(params, QueryParams::new(1, 10));
        assert!(!state.is_loading);
        assert!(!state.delete.is_open);
    }

    #[test]
    fn test_mount_fetch_applies_result() {
        let mut state = ListState::<Row>::new(10);
        let ticket = state.begin_fetch();
        assert!(state.is_loading);
        assert_eq!(ticket.params, QueryParams::new(1, 10));

        let outcome = state.finish_fetch(ticket.seq, Ok(response(vec![row("1", "Widget")], 1, 10, 1)));
        assert_eq!(outcome, FetchOutcome::Applied);
        assert!(!state.is_loading);
        assert_eq!(state.data.len(), 1);
        assert_eq!(state.pagination.total, 1);
    }

    #[test]
    fn test_server_pagination_wins() {
        let mut state = ListState::<Row>::new(10);
        state.set_page(7);
        let ticket = state.begin_fetch();
        assert_eq!(ticket.params.page, 7);

        state.finish_fetch(ticket.seq, Ok(response(vec![], 3, 25, 60)));
        assert_eq!(
            state.pagination,
            PaginationState {
                page: 3,
                limit: 25,
                total: 60
            }
        );
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let mut state = ListState::<Row>::new(10);
        let first = state.begin_fetch();
        state.set_page(2);
        let second = state.begin_fetch();

        let outcome = state.finish_fetch(second.seq, Ok(response(vec![row("b", "B")], 2, 10, 20)));
        assert_eq!(outcome, FetchOutcome::Applied);

        let outcome = state.finish_fetch(first.seq, Ok(response(vec![row("a", "A")], 1, 10, 20)));
        assert_eq!(outcome, FetchOutcome::Discarded);
        assert_eq!(state.data, vec![row("b", "B")]);
        assert_eq!(state.pagination.page, 2);
    }

    #[test]
    fn test_stale_result_keeps_loading_flag() {
        let mut state = ListState::<Row>::new(10);
        let first = state.begin_fetch();
        let _second = state.begin_fetch();

        state.finish_fetch(first.seq, Err("boom".to_string()));
        assert!(state.is_loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_fetch_error_keeps_previous_data() {
        let mut state = ListState::<Row>::new(10);
        let ticket = state.begin_fetch();
        state.finish_fetch(ticket.seq, Ok(response(vec![row("1", "Widget")], 1, 10, 1)));

        let ticket = state.begin_fetch();
        state.finish_fetch(ticket.seq, Err("Server error: 500".to_string()));
        assert_eq!(state.error.as_deref(), Some("Server error: 500"));
        assert_eq!(state.data.len(), 1);
        assert_eq!(state.pagination.total, 1);
        assert!(!state.is_loading);

        let ticket = state.begin_fetch();
        assert_eq!(state.error, None);
        state.finish_fetch(ticket.seq, Err(String::new()));
        assert_eq!(state.error.as_deref(), Some(FETCH_ERROR_FALLBACK));
    }

    #[test]
    fn test_search_commit_resets_page_and_trims() {
        let mut state = ListState::<Row>::new(10);
        state.set_page(4);
        state.commit_search("  widget  ");
        let params = state.query_params();
        assert_eq!(params.page, 1);
        assert_eq!(params.search.as_deref(), Some("widget"));

        state.commit_search("   ");
        assert_eq!(state.query_params().search, None);
    }

    #[test]
    fn test_restart_search_on_first_page_fetches_explicitly() {
        let mut state = ListState::<Row>::new(10);
        let mount = state.begin_fetch();
        state.finish_fetch(mount.seq, Ok(response(vec![], 1, 10, 0)));
        state.commit_search("shoe");

        let ticket = state.restart_search().expect("explicit fetch on page 1");
        assert_eq!(ticket.seq, mount.seq + 1);
        assert_eq!(ticket.params.search.as_deref(), Some("shoe"));
        assert!(state.is_loading);
    }

    #[test]
    fn test_restart_search_on_later_page_resets_page_only() {
        let mut state = ListState::<Row>::new(10);
        state.commit_search("shoe");
        state.set_page(3);
        let before = state.query_params();

        assert_eq!(state.restart_search(), None);
        assert!(!state.is_loading);
        assert_eq!(state.pagination.page, 1);
        assert_eq!(state.search_term, "shoe");
        // смена параметров сама запустит загрузку
        assert_ne!(state.query_params(), before);
    }

    #[test]
    fn test_initial_sort_goes_into_query() {
        let state = ListState::<Row>::new(10).with_sort(Some(SortState::asc("key")));
        let params = state.query_params();
        assert_eq!(params.sort.as_deref(), Some("key"));
        assert_eq!(params.direction, Some(SortDirection::Asc));
    }

    #[test]
    fn test_sort_keeps_page() {
        let mut state = ListState::<Row>::new(10);
        state.set_page(3);
        state.set_sort(Some(SortState::desc("name")));
        let params = state.query_params();
        assert_eq!(params.page, 3);
        assert_eq!(params.sort.as_deref(), Some("name"));
        assert_eq!(params.direction, Some(SortDirection::Desc));

        state.set_sort(None);
        assert_eq!(state.query_params().sort, None);
    }

    #[test]
    fn test_filters_drop_empty_values_and_reset_page() {
        let mut state = ListState::<Row>::new(10);
        state.set_page(5);
        state.set_filters(vec![
            FilterParam::new("name", "shoe"),
            FilterParam::new("code", ""),
            FilterParam::new("limit", "1000"),
        ]);
        let params = state.query_params();
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 10);
        assert_eq!(params.filters.get("name").map(String::as_str), Some("shoe"));
        assert!(!params.filters.contains_key("code"));
        assert!(!params.filters.contains_key("limit"));
    }

    #[test]
    fn test_page_never_below_one() {
        let mut state = ListState::<Row>::new(10);
        state.set_page(0);
        assert_eq!(state.pagination.page, 1);
        state.set_page(99);
        assert_eq!(state.query_params().page, 99);
    }

    #[test]
    fn test_delete_workflow_success() {
        let mut state = ListState::<Row>::new(10);
        let ticket = state.begin_fetch();
        state.finish_fetch(ticket.seq, Ok(response(vec![row("1", "Widget")], 1, 10, 1)));

        state.open_delete("1".to_string(), "Widget".to_string());
        assert!(state.delete.is_open);
        assert_eq!(state.delete.target_display_name, "Widget");

        let id = state.begin_delete();
        assert_eq!(id.as_deref(), Some("1"));
        assert!(state.delete.is_deleting);
        // повторное подтверждение пока запрос в полёте
        assert_eq!(state.begin_delete(), None);
        state.cancel_delete();
        assert!(state.delete.is_open);

        let follow_up = state.finish_delete("1", Ok(()));
        assert_eq!(state.delete, DeleteWorkflowState::default());
        match follow_up {
            DeleteFollowUp::Refetch { deleted, ticket: refetch } => {
                assert_eq!(deleted, Some(row("1", "Widget")));
                // ровно одна перезагрузка после удаления
                assert_eq!(refetch.seq, ticket.seq + 1);
                assert_eq!(refetch.params, state.query_params());
                assert!(state.is_loading);
            }
            other => panic!("unexpected follow-up: {:?}", other),
        }
    }

    #[test]
    fn test_deleted_row_missing_from_page() {
        let mut state = ListState::<Row>::new(10);
        state.open_delete("42".to_string(), "Old".to_string());
        let id = state.begin_delete().unwrap();
        match state.finish_delete(&id, Ok(())) {
            DeleteFollowUp::Refetch { deleted, .. } => assert_eq!(deleted, None),
            other => panic!("unexpected follow-up: {:?}", other),
        }
    }

    #[test]
    fn test_delete_failure_reports_and_keeps_data() {
        let mut state = ListState::<Row>::new(10);
        let ticket = state.begin_fetch();
        state.finish_fetch(ticket.seq, Ok(response(vec![row("1", "Widget")], 1, 10, 1)));

        state.open_delete("1".to_string(), "Widget".to_string());
        let id = state.begin_delete().unwrap();
        let follow_up = state.finish_delete(&id, Err("Permission denied".to_string()));

        assert_eq!(follow_up, DeleteFollowUp::ReportError("Permission denied".to_string()));
        assert!(!state.delete.is_open);
        assert_eq!(state.error, None);
        assert_eq!(state.data, vec![row("1", "Widget")]);
        // повторной загрузки не было
        assert!(!state.is_loading);
        assert_eq!(state.begin_fetch().seq, ticket.seq + 1);
    }

    #[test]
    fn test_delete_failure_without_message_uses_fallback() {
        let mut state = ListState::<Row>::new(10);
        state.open_delete("1".to_string(), "Widget".to_string());
        let id = state.begin_delete().unwrap();
        assert_eq!(
            state.finish_delete(&id, Err(String::new())),
            DeleteFollowUp::ReportError(DELETE_ERROR_FALLBACK.to_string())
        );
    }

    #[test]
    fn test_confirm_without_target_is_noop() {
        let mut state = ListState::<Row>::new(10);
        assert_eq!(state.begin_delete(), None);
        state.open_delete("1".to_string(), "Widget".to_string());
        state.cancel_delete();
        assert_eq!(state.begin_delete(), None);
        assert!(!state.delete.is_open);
    }

    #[test]
    fn test_message_fallback() {
        assert_eq!(message_or("X".to_string(), DELETE_ERROR_FALLBACK), "X");
        assert_eq!(message_or(" ".to_string(), DELETE_ERROR_FALLBACK), DELETE_ERROR_FALLBACK);
    }
}
