use contracts::domain::a001_item_type::aggregate::ItemType;
use leptos::prelude::*;

use crate::domain::a001_item_type::api;
use crate::shared::components::data_grid::ColumnSpec;
use crate::shared::components::entity_list::EntityListPage;
use crate::shared::date_utils::format_datetime_opt;
use crate::shared::list_page::ListPageOptions;
use crate::shared::list_utils::ListRow;

impl ListRow for ItemType {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "code" => Some(self.code.clone()),
            "name" => Some(self.name.clone()),
            "description" => self.description.clone(),
            "updatedAt" => Some(format_datetime_opt(self.updated_at.as_ref())),
            _ => None,
        }
    }
}

#[component]
pub fn ItemTypesList() -> impl IntoView {
    let columns = vec![
        ColumnSpec::new("code", "Код").sortable().filterable(),
        ColumnSpec::new("name", "Наименование").sortable().filterable(),
        ColumnSpec::new("description", "Описание"),
        ColumnSpec::new("updatedAt", "Изменён").sortable(),
    ];

    view! {
        <EntityListPage
            title="Типы товаров"
            options=ListPageOptions::new(api::fetch_item_types).with_delete(api::delete_item_type)
            columns=columns
            search_placeholder="Код или наименование..."
        />
    }
}
