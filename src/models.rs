//! API request/response bodies and the two persisted record kinds.
//!
//! Both record kinds are immutable once created: the API only appends and
//! reads, never mutates in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Asset type stamped on every stored generation result.
pub const ASSET_TYPE_AI_GENERATED: &str = "ai_generated";

fn default_style() -> String {
    "realistic".to_string()
}

/// A persisted status-check record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    /// Create a new record, stamping a fresh id and the current UTC instant.
    pub fn new(client_name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name,
            timestamp: Utc::now(),
        }
    }
}

/// Body of `POST /api/status`.
#[derive(Debug, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

/// Body of `POST /api/generate-image`.
#[derive(Debug, Deserialize)]
pub struct ImageGenerationRequest {
    pub prompt: String,
    #[serde(default = "default_style")]
    pub style: String,
}

/// Success body of `POST /api/generate-image`. `prompt` is the caller's
/// original prompt, not the enriched one sent upstream.
#[derive(Debug, Serialize)]
pub struct ImageGenerationResponse {
    pub image_base64: String,
    pub prompt: String,
}

/// A persisted generation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedAsset {
    pub id: String,
    pub asset_type: String,
    pub prompt: String,
    pub image_base64: String,
    pub created_at: DateTime<Utc>,
}

impl GeneratedAsset {
    /// Create a new asset from the caller's prompt and the encoded image.
    pub fn new(prompt: String, image_base64: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            asset_type: ASSET_TYPE_AI_GENERATED.to_string(),
            prompt,
            image_base64,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_check_gets_uuid_and_current_timestamp() {
        let before = Utc::now();
        let check = StatusCheck::new("acme".to_string());
        assert!(Uuid::parse_str(&check.id).is_ok());
        assert_eq!(check.client_name, "acme");
        assert!(check.timestamp >= before && check.timestamp <= Utc::now());
    }

    #[test]
    fn generated_asset_is_tagged_ai_generated() {
        let asset = GeneratedAsset::new("a city skyline".to_string(), "aGVsbG8=".to_string());
        assert!(Uuid::parse_str(&asset.id).is_ok());
        assert_eq!(asset.asset_type, ASSET_TYPE_AI_GENERATED);
        assert_eq!(asset.prompt, "a city skyline");
    }

    #[test]
    fn distinct_records_get_distinct_ids() {
        let a = StatusCheck::new("acme".to_string());
        let b = StatusCheck::new("acme".to_string());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn generation_request_style_defaults_to_realistic() {
        let req: ImageGenerationRequest =
            serde_json::from_str(r#"{"prompt":"a dashboard"}"#).unwrap();
        assert_eq!(req.style, "realistic");

        let req: ImageGenerationRequest =
            serde_json::from_str(r#"{"prompt":"a dashboard","style":"abstract"}"#).unwrap();
        assert_eq!(req.style, "abstract");
    }

    #[test]
    fn status_check_serializes_timestamp_as_iso8601() {
        let check = StatusCheck::new("acme".to_string());
        let value = serde_json::to_value(&check).unwrap();
        let raw = value["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(raw).is_ok());
    }
}
