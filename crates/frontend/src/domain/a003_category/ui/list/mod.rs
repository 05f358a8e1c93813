use contracts::domain::a003_category::aggregate::Category;
use leptos::prelude::*;

use crate::domain::a003_category::api;
use crate::shared::components::data_grid::ColumnSpec;
use crate::shared::components::entity_list::EntityListPage;
use crate::shared::list_page::ListPageOptions;
use crate::shared::list_utils::ListRow;

impl ListRow for Category {
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
            "parentId" => self.parent_id.clone(),
            "position" => Some(self.position.to_string()),
            _ => None,
        }
    }
}

#[component]
pub fn CategoriesList() -> impl IntoView {
    let columns = vec![
        ColumnSpec::new("position", "#").sortable().align_right(),
        ColumnSpec::new("code", "Код").sortable().filterable(),
        ColumnSpec::new("name", "Наименование").sortable().filterable(),
        // корневые категории без родителя
        ColumnSpec::new("parentId", "Родитель").filterable().render(|c: &Category, _| {
            match &c.parent_id {
                Some(parent) => parent.clone().into_any(),
                None => view! { <span class="text-muted">"—"</span> }.into_any(),
            }
        }),
    ];

    view! {
        <EntityListPage
            title="Категории"
            options=ListPageOptions::new(api::fetch_categories).with_delete(api::delete_category)
            columns=columns
        />
    }
}
