//! Конверт ответа API админ-панели: `{ "error": bool, "message": ..., "data": ... }`

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Response envelope returned by every admin endpoint.
///
/// The server reports application-level failures through the `error` flag
/// rather than the HTTP status, so callers must inspect it explicitly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ApiResponse {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error
    }

    /// Decode the `data` payload into a concrete type.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T, String> {
        let value = self
            .data
            .clone()
            .ok_or_else(|| "Response has no data".to_string())?;
        serde_json::from_value(value).map_err(|e| format!("Failed to parse data: {}", e))
    }
}
