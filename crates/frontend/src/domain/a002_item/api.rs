use contracts::domain::a002_item::aggregate::Item;
use contracts::shared::list_query::{ListResponse, QueryParams};

use crate::shared::api_utils::{delete_by_id, fetch_list};

const RESOURCE: &str = "items";

/// Страница товаров
pub async fn fetch_items(params: QueryParams) -> Result<ListResponse<Item>, String> {
    fetch_list(RESOURCE, &params).await
}

pub async fn delete_item(id: String) -> Result<(), String> {
    delete_by_id(RESOURCE, &id).await
}
