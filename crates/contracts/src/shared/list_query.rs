//! Контракт постраничных списков между консолью и REST API.
//!
//! `QueryParams` уходит на сервер как query string, `ListResponse<T>`
//! приходит обратно. Номера страниц везде начинаются с 1.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ключи запроса, которые нельзя использовать как имя фильтра
pub const RESERVED_QUERY_KEYS: [&str; 5] = ["page", "limit", "search", "sort", "direction"];

// ============================================================================
// Sort / Filter
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Активная сортировка. Сортировать можно только по одному полю.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParam {
    pub field: String,
    pub value: String,
}

impl FilterParam {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Переводит внутреннюю карту фильтров в упорядоченный список пар.
pub fn filters_to_params(filters: &BTreeMap<String, String>) -> Vec<FilterParam> {
    filters
        .iter()
        .map(|(field, value)| FilterParam::new(field.clone(), value.clone()))
        .collect()
}

// ============================================================================
// Pagination
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

impl PaginationState {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            total: 0,
        }
    }

    /// `ceil(total / limit)`, для пустого набора 0
    pub fn total_pages(&self) -> u32 {
        if self.total == 0 || self.limit == 0 {
            return 0;
        }
        let pages = self.total.div_ceil(u64::from(self.limit));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

// ============================================================================
// Request / Response
// ============================================================================

/// Параметры запроса страницы списка.
///
/// Фильтры сериализуются плоско: `?page=1&limit=10&family=shoes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    pub page: u32,
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
    #[serde(flatten)]
    pub filters: BTreeMap<String, String>,
}

impl QueryParams {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            search: None,
            sort: None,
            direction: None,
            filters: BTreeMap::new(),
        }
    }

    /// Пустой или пробельный поиск не попадает в запрос
    pub fn with_search(mut self, term: &str) -> Self {
        let term = term.trim();
        self.search = if term.is_empty() {
            None
        } else {
            Some(term.to_string())
        };
        self
    }

    pub fn with_sort(mut self, sort: Option<&SortState>) -> Self {
        self.sort = sort.map(|s| s.field.clone());
        self.direction = sort.map(|s| s.direction);
        self
    }

    pub fn with_filters(mut self, filters: &BTreeMap<String, String>) -> Self {
        self.filters.extend(
            filters
                .iter()
                .filter(|(field, value)| !value.is_empty() && !is_reserved_key(field))
                .map(|(field, value)| (field.clone(), value.clone())),
        );
        self
    }
}

pub fn is_reserved_key(field: &str) -> bool {
    RESERVED_QUERY_KEYS.contains(&field)
}

/// Ответ сервера на запрос страницы.
///
/// Бэкенд местами отдаёт `items`/`total_count`, алиасы переводят это
/// в единый контракт.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(alias = "items")]
    pub data: Vec<T>,
    pub page: u32,
    pub limit: u32,
    #[serde(alias = "total_count")]
    pub total: u64,
}

impl<T> ListResponse<T> {
    pub fn pagination(&self) -> PaginationState {
        PaginationState {
            page: self.page,
            limit: self.limit,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let mut p = PaginationState::new(10);
        assert_eq!(p.total_pages(), 0);
        p.total = 95;
        assert_eq!(p.total_pages(), 10);
        p.total = 100;
        assert_eq!(p.total_pages(), 10);
        p.total = 101;
        assert_eq!(p.total_pages(), 11);
    }

    #[test]
    fn test_query_params_skip_empty_parts() {
        let mut filters = BTreeMap::new();
        filters.insert("family".to_string(), "shoes".to_string());
        filters.insert("status".to_string(), String::new());
        filters.insert("page".to_string(), "7".to_string());

        let params = QueryParams::new(2, 10)
            .with_search("   ")
            .with_sort(None)
            .with_filters(&filters);

        assert_eq!(params.search, None);
        assert_eq!(params.sort, None);
        assert_eq!(params.direction, None);
        assert_eq!(params.filters.len(), 1);
        assert_eq!(params.filters.get("family").map(String::as_str), Some("shoes"));
        assert_eq!(params.page, 2);
    }

    #[test]
    fn test_query_params_trim_search_and_sort() {
        let params = QueryParams::new(1, 10)
            .with_search("  widget ")
            .with_sort(Some(&SortState::desc("name")));

        assert_eq!(params.search.as_deref(), Some("widget"));
        assert_eq!(params.sort.as_deref(), Some("name"));
        assert_eq!(params.direction, Some(SortDirection::Desc));
    }

    #[test]
    fn test_query_params_serialize_flat() {
        let mut filters = BTreeMap::new();
        filters.insert("code".to_string(), "A1".to_string());
        let params = QueryParams::new(1, 10)
            .with_sort(Some(&SortState::asc("name")))
            .with_filters(&filters);

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["page"], 1);
        assert_eq!(json["direction"], "asc");
        assert_eq!(json["code"], "A1");
        assert!(json.get("search").is_none());
    }

    #[test]
    fn test_list_response_aliases() {
        let raw = r#"{"items":[1,2,3],"page":2,"limit":3,"total_count":9}"#;
        let resp: ListResponse<i32> = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.data, vec![1, 2, 3]);
        assert_eq!(
            resp.pagination(),
            PaginationState {
                page: 2,
                limit: 3,
                total: 9
            }
        );
    }
}
