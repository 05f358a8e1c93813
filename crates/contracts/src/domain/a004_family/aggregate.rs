use serde::{Deserialize, Serialize};

/// Семейство: набор групп атрибутов, общий для товаров одного вида
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Family {
    #[serde(rename = "_id")]
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default, rename = "itemTypeId")]
    pub item_type_id: Option<String>,
    #[serde(default, rename = "attributeGroupIds")]
    pub attribute_group_ids: Vec<String>,
}
