use contracts::domain::a004_family::aggregate::Family;
use leptos::prelude::*;

use crate::domain::a004_family::api;
use crate::shared::components::data_grid::ColumnSpec;
use crate::shared::components::entity_list::EntityListPage;
use crate::shared::list_page::ListPageOptions;
use crate::shared::list_utils::ListRow;

impl ListRow for Family {
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
            "itemTypeId" => self.item_type_id.clone(),
            "attributeGroupIds" => Some(self.attribute_group_ids.len().to_string()),
            _ => None,
        }
    }
}

#[component]
pub fn FamiliesList() -> impl IntoView {
    let columns = vec![
        ColumnSpec::new("code", "Код").sortable().filterable(),
        ColumnSpec::new("name", "Наименование").sortable().filterable(),
        ColumnSpec::new("itemTypeId", "Тип товара").filterable(),
        ColumnSpec::new("attributeGroupIds", "Групп атрибутов").align_right(),
    ];

    view! {
        <EntityListPage
            title="Семейства"
            options=ListPageOptions::new(api::fetch_families).with_delete(api::delete_family)
            columns=columns
        />
    }
}
