use contracts::domain::a001_item_type::aggregate::ItemType;
use contracts::shared::list_query::{ListResponse, QueryParams};

use crate::shared::api_utils::{delete_by_id, fetch_list};

const RESOURCE: &str = "item-types";

/// Страница типов товаров
pub async fn fetch_item_types(params: QueryParams) -> Result<ListResponse<ItemType>, String> {
    fetch_list(RESOURCE, &params).await
}

pub async fn delete_item_type(id: String) -> Result<(), String> {
    delete_by_id(RESOURCE, &id).await
}
