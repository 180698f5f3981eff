use anyhow::{Context, Result};

/// Origins the local frontend dev servers run on.
const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://127.0.0.1:5173",
    "http://localhost:5174",
    "http://127.0.0.1:5174",
];

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub gemini_api_key: String,
    /// Document storage is optional; without it uploads are not persisted and
    /// `fileUrl` is omitted from submission responses.
    pub storage: Option<StorageConfig>,
    pub cors_allowed_origins: Vec<String>,
    pub port: u16,
    pub rust_log: String,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub bucket: String,
    pub endpoint: String,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    /// Base URL used to build the public link of a stored document.
    pub public_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            gemini_api_key: require_env("GOOGLE_GEMINI_API_KEY")?,
            storage: StorageConfig::from_env()?,
            cors_allowed_origins: parse_origins(std::env::var("CORS_ALLOWED_ORIGINS").ok()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl StorageConfig {
    /// Storage is enabled by setting `S3_BUCKET`; the remaining S3 variables are
    /// then required.
    fn from_env() -> Result<Option<Self>> {
        let bucket = match std::env::var("S3_BUCKET") {
            Ok(b) if !b.trim().is_empty() => b,
            _ => return Ok(None),
        };
        let endpoint = require_env("S3_ENDPOINT")?;
        let public_url = std::env::var("S3_PUBLIC_URL")
            .unwrap_or_else(|_| format!("{}/{}", endpoint.trim_end_matches('/'), bucket));

        Ok(Some(StorageConfig {
            bucket,
            endpoint,
            region: std::env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
            secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            public_url,
        }))
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_origins(raw: Option<String>) -> Vec<String> {
    let parsed: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(|o| o.trim().trim_end_matches('/').to_string())
        .filter(|o| !o.is_empty())
        .collect();

    if parsed.is_empty() {
        DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect()
    } else {
        parsed
    }
}
