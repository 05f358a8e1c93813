use contracts::domain::a006_association::aggregate::Association;
use leptos::prelude::*;

use crate::domain::a006_association::api;
use crate::shared::components::data_grid::ColumnSpec;
use crate::shared::components::entity_list::EntityListPage;
use crate::shared::list_page::ListPageOptions;
use crate::shared::list_utils::ListRow;

impl ListRow for Association {
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
            "isTwoWay" => Some(if self.is_two_way { "Да" } else { "Нет" }.to_string()),
            _ => None,
        }
    }
}

#[component]
pub fn AssociationsList() -> impl IntoView {
    let columns = vec![
        ColumnSpec::new("code", "Код").sortable().filterable(),
        ColumnSpec::new("name", "Наименование").sortable().filterable(),
        ColumnSpec::new("isTwoWay", "Двусторонняя").sortable(),
    ];

    view! {
        <EntityListPage
            title="Типы связей"
            options=ListPageOptions::new(api::fetch_associations).with_delete(api::delete_association)
            columns=columns
        />
    }
}
