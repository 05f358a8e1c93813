use contracts::domain::a004_family::aggregate::Family;
use contracts::shared::list_query::{ListResponse, QueryParams};

use crate::shared::api_utils::{delete_by_id, fetch_list};

const RESOURCE: &str = "families";

/// Страница семейств
pub async fn fetch_families(params: QueryParams) -> Result<ListResponse<Family>, String> {
    fetch_list(RESOURCE, &params).await
}

pub async fn delete_family(id: String) -> Result<(), String> {
    delete_by_id(RESOURCE, &id).await
}
