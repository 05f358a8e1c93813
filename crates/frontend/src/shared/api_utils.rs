//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and the generic
//! list/delete requests used by every list page.

use contracts::shared::list_query::{ListResponse, QueryParams};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/items");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Query string for a list request: `page=1&limit=10&sort=name&direction=asc&code=A1`
pub fn list_query_string(params: &QueryParams) -> Result<String, String> {
    serde_qs::to_string(params).map_err(|e| format!("Failed to encode query: {}", e))
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

/// Текст ошибки из ответа: `message` из тела, иначе HTTP статус
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ApiErrorBody>().await {
        Ok(body) if !body.message.trim().is_empty() => body.message,
        _ => format!("Server error: {}", status),
    }
}

/// GET `/api/{resource}?{query}`; одна страница списка
pub async fn fetch_list<T: DeserializeOwned>(
    resource: &str,
    params: &QueryParams,
) -> Result<ListResponse<T>, String> {
    let query = list_query_string(params)?;
    let url = api_url(&format!("/api/{}?{}", resource, query));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<ListResponse<T>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// DELETE `/api/{resource}/{id}`
pub async fn delete_by_id(resource: &str, id: &str) -> Result<(), String> {
    let url = api_url(&format!("/api/{}/{}", resource, urlencoding::encode(id)));

    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_query::SortState;
    use std::collections::BTreeMap;

    #[test]
    fn test_list_query_string() {
        let mut filters = BTreeMap::new();
        filters.insert("code".to_string(), "A1".to_string());
        let params = QueryParams::new(2, 10)
            .with_search("wid")
            .with_sort(Some(&SortState::asc("name")))
            .with_filters(&filters);

        let query = list_query_string(&params).unwrap();
        let parts: Vec<&str> = query.split('&').collect();
        assert!(parts.contains(&"page=2"));
        assert!(parts.contains(&"limit=10"));
        assert!(parts.contains(&"search=wid"));
        assert!(parts.contains(&"sort=name"));
        assert!(parts.contains(&"direction=asc"));
        assert!(parts.contains(&"code=A1"));
    }

    #[test]
    fn test_list_query_string_minimal() {
        let query = list_query_string(&QueryParams::new(1, 10)).unwrap();
        assert_eq!(query, "page=1&limit=10");
    }
}
