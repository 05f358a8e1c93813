use contracts::domain::a003_category::aggregate::Category;
use contracts::shared::list_query::{ListResponse, QueryParams};

use crate::shared::api_utils::{delete_by_id, fetch_list};

const RESOURCE: &str = "categories";

/// Страница категорий
pub async fn fetch_categories(params: QueryParams) -> Result<ListResponse<Category>, String> {
    fetch_list(RESOURCE, &params).await
}

pub async fn delete_category(id: String) -> Result<(), String> {
    delete_by_id(RESOURCE, &id).await
}
