use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Товар каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(rename = "itemTypeId")]
    pub item_type_id: String,
    #[serde(default, rename = "familyId")]
    pub family_id: Option<String>,
    #[serde(default, rename = "categoryIds")]
    pub category_ids: Vec<String>,
    #[serde(default = "default_active", rename = "isActive")]
    pub is_active: bool,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}
