use contracts::domain::a006_association::aggregate::Association;
use contracts::shared::list_query::{ListResponse, QueryParams};

use crate::shared::api_utils::{delete_by_id, fetch_list};

const RESOURCE: &str = "associations";

/// Страница типов связей
pub async fn fetch_associations(params: QueryParams) -> Result<ListResponse<Association>, String> {
    fetch_list(RESOURCE, &params).await
}

pub async fn delete_association(id: String) -> Result<(), String> {
    delete_by_id(RESOURCE, &id).await
}
