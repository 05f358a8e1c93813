use contracts::domain::a002_item::aggregate::Item;
use leptos::prelude::*;

use crate::domain::a002_item::api;
use crate::shared::components::data_grid::ColumnSpec;
use crate::shared::components::entity_list::EntityListPage;
use crate::shared::date_utils::format_datetime_opt;
use crate::shared::list_page::ListPageOptions;
use crate::shared::list_utils::ListRow;

const ITEMS_PAGE_LIMIT: u32 = 25;

impl ListRow for Item {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "code" => Some(self.code.clone()),
            "name" => Some(self.name.clone()),
            "itemTypeId" => Some(self.item_type_id.clone()),
            "familyId" => self.family_id.clone(),
            "categoryIds" => Some(self.category_ids.len().to_string()),
            "updatedAt" => Some(format_datetime_opt(self.updated_at.as_ref())),
            _ => None,
        }
    }
}

#[component]
pub fn ItemsList() -> impl IntoView {
    let columns = vec![
        ColumnSpec::new("code", "Артикул").sortable().filterable(),
        ColumnSpec::new("name", "Наименование").sortable().filterable(),
        ColumnSpec::new("itemTypeId", "Тип").filterable(),
        ColumnSpec::new("familyId", "Семейство").filterable(),
        ColumnSpec::new("categoryIds", "Категорий").align_right(),
        ColumnSpec::new("isActive", "Статус").sortable().render(|item: &Item, _| {
            if item.is_active {
                view! { <span class="badge badge--success">"Активен"</span> }.into_any()
            } else {
                view! { <span class="badge badge--neutral">"Скрыт"</span> }.into_any()
            }
        }),
        ColumnSpec::new("updatedAt", "Изменён").sortable(),
    ];

    let options = ListPageOptions::new(api::fetch_items)
        .with_delete(api::delete_item)
        .with_initial_limit(ITEMS_PAGE_LIMIT);

    view! {
        <EntityListPage
            title="Товары"
            options=options
            columns=columns
            search_placeholder="Артикул или наименование..."
        />
    }
}
