use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    #[default]
    Text,
    Number,
    Boolean,
    Date,
    Select,
}

impl AttributeType {
    pub fn label(&self) -> &'static str {
        match self {
            AttributeType::Text => "Текст",
            AttributeType::Number => "Число",
            AttributeType::Boolean => "Да/Нет",
            AttributeType::Date => "Дата",
            AttributeType::Select => "Список",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub code: String,
    pub name: String,
    #[serde(default, rename = "type")]
    pub attribute_type: AttributeType,
    #[serde(default)]
    pub required: bool,
}

/// Группа атрибутов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeGroup {
    #[serde(rename = "_id")]
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_type_defaults_to_text() {
        let raw = r#"{"_id":"g1","code":"DIM","name":"Габариты","attributes":[{"code":"w","name":"Ширина"},{"code":"h","name":"Высота","type":"number","required":true}]}"#;
        let group: AttributeGroup = serde_json::from_str(raw).unwrap();
        assert_eq!(group.attributes[0].attribute_type, AttributeType::Text);
        assert_eq!(group.attributes[1].attribute_type, AttributeType::Number);
        assert!(group.attributes[1].required);
    }
}
