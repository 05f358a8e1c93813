use contracts::domain::a007_localization::aggregate::Localization;
use contracts::shared::list_query::SortState;
use leptos::prelude::*;

use crate::domain::a007_localization::api;
use crate::shared::components::data_grid::ColumnSpec;
use crate::shared::components::entity_list::EntityListPage;
use crate::shared::list_page::ListPageOptions;
use crate::shared::list_utils::ListRow;

const LOCALIZATIONS_PAGE_LIMIT: u32 = 50;

impl ListRow for Localization {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        format!("{} [{}]", self.key, self.locale)
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "key" => Some(self.key.clone()),
            "locale" => Some(self.locale.clone()),
            "value" => Some(self.value.clone()),
            _ => None,
        }
    }
}

/// Строки синхронизируются из файлов переводов, удаление из консоли не предусмотрено.
#[component]
pub fn LocalizationsList() -> impl IntoView {
    let columns = vec![
        ColumnSpec::new("key", "Ключ").sortable().filterable(),
        ColumnSpec::new("locale", "Язык").sortable().filterable(),
        ColumnSpec::new("value", "Перевод").filterable(),
    ];

    let options = ListPageOptions::new(api::fetch_localizations)
        .with_initial_limit(LOCALIZATIONS_PAGE_LIMIT)
        .with_initial_sort(SortState::asc("key"));

    view! {
        <EntityListPage
            title="Локализация"
            options=options
            columns=columns
            search_placeholder="Ключ или перевод..."
        />
    }
}
