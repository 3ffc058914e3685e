//! Axum request handlers for the HTTP API.
//!
//! Every handler is a single-step pass-through: request → (optional
//! external call) → (optional persist) → response. No handler holds state
//! beyond what [`AppState`] carries.
use axum::extract::State;
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::api::routes::AppState;
use crate::brand;
use crate::error::{AppError, AppResult};
use crate::models::{
    GeneratedAsset, ImageGenerationRequest, ImageGenerationResponse, StatusCheck,
    StatusCheckCreate,
};
use crate::prompt;

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "VeriTrust AI Backend API" }))
}

pub async fn create_status_check(
    State(state): State<Arc<AppState>>,
    Json(input): Json<StatusCheckCreate>,
) -> AppResult<Json<StatusCheck>> {
    let record = StatusCheck::new(input.client_name);
    state.store.insert_status_check(&record).await?;
    Ok(Json(record))
}

pub async fn get_status_checks(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<StatusCheck>>> {
    state.store.list_status_checks().await.map(Json)
}

/// Generate one image for the caller's prompt and persist the result.
///
/// The prompt is enriched with brand styling before it goes upstream; the
/// asset is only persisted after a successful generation, so a failed call
/// leaves no partial record behind.
pub async fn generate_image(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ImageGenerationRequest>,
) -> AppResult<Json<ImageGenerationResponse>> {
    let client = state
        .image_client
        .as_ref()
        .ok_or(AppError::MissingCredential("EMERGENT_LLM_KEY"))?;

    let enriched = prompt::brand_prompt(&request.prompt, &request.style);
    let images = client.generate_images(&enriched, 1).await.map_err(|e| {
        tracing::error!("Image generation error: {}", e);
        e
    })?;
    let bytes = images.into_iter().next().ok_or(AppError::NoImage)?;
    let image_base64 = BASE64.encode(bytes);

    let asset = GeneratedAsset::new(request.prompt.clone(), image_base64.clone());
    state.store.insert_generated_asset(&asset).await?;

    Ok(Json(ImageGenerationResponse {
        image_base64,
        prompt: request.prompt,
    }))
}

pub async fn get_generated_assets(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<GeneratedAsset>>> {
    state.store.list_generated_assets().await.map(Json)
}

pub async fn brand_colors() -> Json<Value> {
    Json(brand::brand_colors())
}

pub async fn brand_typography() -> Json<Value> {
    Json(brand::brand_typography())
}
