use contracts::domain::a005_attribute_group::aggregate::AttributeGroup;
use leptos::prelude::*;

use crate::domain::a005_attribute_group::api;
use crate::shared::components::data_grid::ColumnSpec;
use crate::shared::components::entity_list::EntityListPage;
use crate::shared::list_page::ListPageOptions;
use crate::shared::list_utils::ListRow;
use crate::shared::modal::Modal;

/// Список атрибутов через запятую: "Ширина*, Высота"
fn attributes_summary(group: &AttributeGroup) -> String {
    group
        .attributes
        .iter()
        .map(|a| {
            if a.required {
                format!("{}*", a.name)
            } else {
                a.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

impl ListRow for AttributeGroup {
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
            "attributes" => Some(attributes_summary(self)),
            _ => None,
        }
    }
}

/// Состав группы, открывается кликом по строке
#[component]
fn AttributesModal(group: AttributeGroup, on_close: Callback<()>) -> impl IntoView {
    let title = format!("{} ({})", group.name, group.code);
    let rows = group
        .attributes
        .into_iter()
        .map(|a| {
            view! {
                <tr>
                    <td>{a.code}</td>
                    <td>{a.name}</td>
                    <td>{a.attribute_type.label()}</td>
                    <td>{if a.required { "Да" } else { "" }}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <Modal title=title on_close=on_close>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Код"</th>
                        <th>"Наименование"</th>
                        <th>"Тип"</th>
                        <th>"Обязательный"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </Modal>
    }
}

#[component]
pub fn AttributeGroupsList() -> impl IntoView {
    let selected = RwSignal::new(None::<AttributeGroup>);

    let columns = vec![
        ColumnSpec::new("code", "Код").sortable().filterable(),
        ColumnSpec::new("name", "Наименование").sortable().filterable(),
        ColumnSpec::new("attributes", "Атрибуты").render(|group: &AttributeGroup, _| {
            let types = group
                .attributes
                .iter()
                .map(|a| a.attribute_type.label())
                .collect::<Vec<_>>()
                .join(", ");
            view! { <span title=types>{attributes_summary(group)}</span> }.into_any()
        }),
    ];

    view! {
        <EntityListPage
            title="Группы атрибутов"
            options=ListPageOptions::new(api::fetch_attribute_groups)
                .with_delete(api::delete_attribute_group)
            columns=columns
            on_row_click=Callback::new(move |group: AttributeGroup| selected.set(Some(group)))
        />
        {move || selected.get().map(|group| view! {
            <AttributesModal group=group on_close=Callback::new(move |_| selected.set(None)) />
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_attribute_group::aggregate::{Attribute, AttributeType};

    #[test]
    fn test_attributes_summary_marks_required() {
        let group = AttributeGroup {
            id: "g1".to_string(),
            code: "DIM".to_string(),
            name: "Габариты".to_string(),
            attributes: vec![
                Attribute {
                    code: "w".to_string(),
                    name: "Ширина".to_string(),
                    attribute_type: AttributeType::Number,
                    required: true,
                },
                Attribute {
                    code: "h".to_string(),
                    name: "Высота".to_string(),
                    attribute_type: AttributeType::Number,
                    required: false,
                },
            ],
        };
        assert_eq!(attributes_summary(&group), "Ширина*, Высота");
        assert_eq!(group.field_value("attributes").as_deref(), Some("Ширина*, Высота"));
    }
}
