use std::path::PathBuf;

use anyhow::{Context, Result};

const MAX_FILES_CEILING: usize = 50;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory CSV / JSON exports are written into.
    pub export_dir: PathBuf,
    /// Files parsed per upload batch, 1..=50.
    pub max_files: usize,
    pub max_upload_mb: usize,
    /// Overrides the regional phone pattern when set.
    pub phone_pattern: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            export_dir: std::env::var("EXPORT_DIR")
                .unwrap_or_else(|_| "exports".to_string())
                .into(),
            max_files: parse_env::<usize>("MAX_FILES", 10)?.clamp(1, MAX_FILES_CEILING),
            max_upload_mb: parse_env("MAX_UPLOAD_MB", 10)?,
            phone_pattern: std::env::var("PHONE_PATTERN")
                .ok()
                .filter(|p| !p.trim().is_empty()),
        })
    }

    /// Request body ceiling for one multipart upload batch.
    pub fn max_body_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024 * self.max_files
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
