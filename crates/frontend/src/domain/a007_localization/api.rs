use contracts::domain::a007_localization::aggregate::Localization;
use contracts::shared::list_query::{ListResponse, QueryParams};

use crate::shared::api_utils::fetch_list;

const RESOURCE: &str = "localizations";

/// Страница локализованных строк
pub async fn fetch_localizations(params: QueryParams) -> Result<ListResponse<Localization>, String> {
    fetch_list(RESOURCE, &params).await
}
