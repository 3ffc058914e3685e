//! VeriTrust backend service library
//!
//! Modules:
//! - `api`: Axum HTTP handlers and router setup used by the binary.
//! - `store`: MongoDB persistence for status checks and generated assets.
//! - `imagegen`: Thin client for the external image-generation API.
//! - `prompt`: Brand enrichment applied to generation prompts.
//! - `brand`: Fixed brand color and typography payloads.
//! - `models`: API bodies and the persisted record kinds.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type and alias.
//!
//! Re-exports are provided for common types: `Config`, `Store`,
//! `ImageGenClient`, `AppError`, and `AppResult`.
pub mod api;
pub mod brand;
pub mod config;
pub mod error;
pub mod imagegen;
pub mod models;
pub mod prompt;
pub mod store;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use imagegen::client::ImageGenClient;
pub use store::client::Store;
