use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор типа трансмиссии (целочисленный ключ на сервере)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarTransmissionId(pub i64);

impl CarTransmissionId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for CarTransmissionId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(CarTransmissionId::new)
            .map_err(|e| format!("Invalid transmission id: {}", e))
    }
}

// ============================================================================
// Record
// ============================================================================

/// Тип трансмиссии автомобиля (справочник админ-панели)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CarTransmission {
    pub id: CarTransmissionId,
    #[serde(default)]
    pub name_tm: String,
    #[serde(default)]
    pub name_ru: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
}

// ============================================================================
// DTO
// ============================================================================

/// Тело запроса PATCH /car-transmition/update/{id}
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CarTransmissionUpdateDto {
    pub name_tm: String,
    pub name_ru: String,
    pub description: String,
    pub status: String,
}

impl From<&CarTransmission> for CarTransmissionUpdateDto {
    fn from(record: &CarTransmission) -> Self {
        Self {
            name_tm: record.name_tm.clone(),
            name_ru: record.name_ru.clone(),
            description: record.description.clone(),
            status: record.status.clone(),
        }
    }
}

// ============================================================================
// Routes
// ============================================================================

/// Server path prefix. The spelling matches the deployed API.
pub const API_PREFIX: &str = "/car-transmition";

pub fn update_path(id: CarTransmissionId) -> String {
    format!("{}/update/{}", API_PREFIX, id.as_string())
}

pub fn list_path() -> String {
    format!("{}/all", API_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manual() -> CarTransmission {
        CarTransmission {
            id: CarTransmissionId::new(7),
            name_tm: "Manual".to_string(),
            name_ru: "Механика".to_string(),
            description: String::new(),
            status: "active".to_string(),
        }
    }

    #[test]
    fn test_update_path() {
        assert_eq!(update_path(manual().id), "/car-transmition/update/7");
        assert_eq!(list_path(), "/car-transmition/all");
    }

    #[test]
    fn test_update_body_from_record() {
        let body = CarTransmissionUpdateDto::from(&manual());
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "name_tm": "Manual",
                "name_ru": "Механика",
                "description": "",
                "status": "active"
            })
        );
    }

    #[test]
    fn test_record_missing_fields_default_to_empty() {
        let record: CarTransmission =
            serde_json::from_value(json!({ "id": 3, "name_tm": "Awtomat" })).unwrap();
        assert_eq!(record.id, CarTransmissionId::new(3));
        assert_eq!(record.name_tm, "Awtomat");
        assert_eq!(record.name_ru, "");
        assert_eq!(record.description, "");
        assert_eq!(record.status, "");
    }

    #[test]
    fn test_id_from_string() {
        assert_eq!(
            CarTransmissionId::from_string(" 42 "),
            Ok(CarTransmissionId::new(42))
        );
        assert!(CarTransmissionId::from_string("abc").is_err());
    }
}
