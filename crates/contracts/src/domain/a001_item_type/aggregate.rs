use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Тип товара (определяет набор семейств и атрибутов)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemType {
    #[serde(rename = "_id")]
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_type_reads_mongo_id() {
        let raw = r#"{"_id":"t1","code":"SHOE","name":"Обувь","updatedAt":"2025-03-01T10:00:00Z"}"#;
        let item_type: ItemType = serde_json::from_str(raw).unwrap();
        assert_eq!(item_type.id, "t1");
        assert_eq!(item_type.description, None);
        assert!(item_type.updated_at.is_some());
    }
}
