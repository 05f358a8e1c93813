use serde::{Deserialize, Serialize};

/// Локализованная строка интерфейса или данных
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Localization {
    #[serde(rename = "_id")]
    pub id: String,
    pub key: String,
    pub locale: String,
    pub value: String,
}
