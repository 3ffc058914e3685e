//! Env-driven configuration for the service and library.
//!
//! Values are read from the process environment; `dotenv` is loaded on demand
//! by the binary. Defaults are provided for convenience during development.
//! The image API credential has no default: its absence is a request-time
//! error for image generation only, never a startup failure.
use std::env;

pub struct Config {
    pub mongo_url: String,
    pub db_name: String,
    pub emergent_llm_key: Option<String>,
    pub image_api_url: String,
    pub cors_origins: Vec<String>,
    pub api_host: String,
    pub api_port: String,
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }

    pub fn new() -> Result<Self, env::VarError> {
        Ok(Config {
            mongo_url: env::var("MONGO_URL").unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            db_name: env::var("DB_NAME").unwrap_or_else(|_| "veritrust".to_string()),
            emergent_llm_key: env::var("EMERGENT_LLM_KEY").ok(),
            image_api_url: env::var("IMAGE_API_URL").unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            cors_origins: parse_origins(&env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string())),
            api_host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            api_port: env::var("API_PORT").unwrap_or_else(|_| "8001".to_string()),
        })
    }

    /// Log the effective configuration at startup. The credential is only
    /// reported as present or absent.
    pub fn log_startup(&self) {
        tracing::info!("MONGO_URL: {}", self.mongo_url);
        tracing::info!("DB_NAME: {}", self.db_name);
        tracing::info!(
            "EMERGENT_LLM_KEY: {}",
            if self.emergent_llm_key.is_some() { "<set>" } else { "<unset>" }
        );
        tracing::info!("IMAGE_API_URL: {}", self.image_api_url);
        tracing::info!("CORS_ORIGINS: {}", self.cors_origins.join(","));
        tracing::info!("API_HOST: {}", self.api_host);
        tracing::info!("API_PORT: {}", self.api_port);
    }
}

/// Split a comma-separated origin list, dropping empty entries.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_origins() {
        let origins = parse_origins("https://app.example.com, https://staging.example.com");
        assert_eq!(
            origins,
            vec!["https://app.example.com", "https://staging.example.com"]
        );
    }

    #[test]
    fn wildcard_stays_a_single_entry() {
        assert_eq!(parse_origins("*"), vec!["*"]);
    }

    #[test]
    fn empty_segments_are_dropped() {
        assert_eq!(parse_origins("https://a.example,,"), vec!["https://a.example"]);
    }
}
