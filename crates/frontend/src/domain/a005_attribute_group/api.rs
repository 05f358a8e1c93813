use contracts::domain::a005_attribute_group::aggregate::AttributeGroup;
use contracts::shared::list_query::{ListResponse, QueryParams};

use crate::shared::api_utils::{delete_by_id, fetch_list};

const RESOURCE: &str = "attribute-groups";

/// Страница групп атрибутов
pub async fn fetch_attribute_groups(params: QueryParams) -> Result<ListResponse<AttributeGroup>, String> {
    fetch_list(RESOURCE, &params).await
}

pub async fn delete_attribute_group(id: String) -> Result<(), String> {
    delete_by_id(RESOURCE, &id).await
}
