use serde::{Deserialize, Serialize};

/// Тип связи между товарами (аналоги, комплектующие, upsell)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Association {
    #[serde(rename = "_id")]
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default, rename = "isTwoWay")]
    pub is_two_way: bool,
}
