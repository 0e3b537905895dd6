use serde::{Deserialize, Serialize};

/// Допустимые статусы записей справочников (в порядке отображения)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStatusCatalog {
    #[serde(rename = "itemStatus", default)]
    pub item_status: Vec<String>,
}

impl Default for ItemStatusCatalog {
    fn default() -> Self {
        Self {
            item_status: vec![
                "active".to_string(),
                "inactive".to_string(),
                "deleted".to_string(),
            ],
        }
    }
}
