//! Thin HTTP client for the OpenAI-compatible image API.
//!
//! One call: `generate_images` posts a prompt to `/images/generations` and
//! returns the decoded bytes of each image in the response. No retries and
//! no timeout of our own; the transport's behavior is the only limit.
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};

/// Model requested from the upstream API.
const IMAGE_MODEL: &str = "gpt-image-1";

#[derive(Clone)]
pub struct ImageGenClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ImageGenClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        ImageGenClient {
            client: Client::new(),
            base_url: base,
            api_key,
        }
    }

    /// Request `count` images for `prompt` and return their raw bytes.
    ///
    /// The generation call can take tens of seconds; it suspends only the
    /// request that issued it.
    pub async fn generate_images(&self, prompt: &str, count: u8) -> AppResult<Vec<Vec<u8>>> {
        let url = format!("{}/images/generations", self.base_url);
        tracing::info!("requesting {} image(s) from {}", count, url);
        tracing::debug!("prompt: {}", prompt);

        let body = json!({
            "model": IMAGE_MODEL,
            "prompt": prompt,
            "n": count,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if response.status().is_success() {
            let payload: Value = response.json().await.map_err(AppError::HttpClient)?;
            decode_image_payload(&payload)
        } else {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            let error_message = format!("image API returned {}: {}", status, error_body);
            tracing::error!("{}", error_message);
            Err(AppError::ImageGen(error_message))
        }
    }
}

/// Pull the base64 image data out of an `/images/generations` response and
/// decode each entry to raw bytes.
fn decode_image_payload(payload: &Value) -> AppResult<Vec<Vec<u8>>> {
    let items = payload
        .get("data")
        .and_then(|v| v.as_array())
        .ok_or_else(|| AppError::ImageGen("image API response had no 'data' array".to_string()))?;

    let mut images = Vec::with_capacity(items.len());
    for item in items {
        let encoded = item
            .get("b64_json")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                AppError::ImageGen("image API response entry had no 'b64_json' field".to_string())
            })?;
        let bytes = BASE64
            .decode(encoded)
            .map_err(|e| AppError::ImageGen(format!("undecodable image data: {}", e)))?;
        images.push(bytes);
    }
    Ok(images)
}
