use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

use crate::domain::limits::{DEFAULT_MAX_FIELD_LENGTH, DEFAULT_REPRESENTATION_LENGTH, FieldLimits};

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) database_url: String,
    pub(crate) database_max_connections: u32,
    pub(crate) http_addr: String,
    pub(crate) log_level: String,
    pub(crate) posts_by_page: u32,
    pub(crate) field_limits: FieldLimits,
    pub(crate) templates_dir: Option<PathBuf>,
    pub(crate) http_request_body_limit_bytes: usize,
    pub(crate) http_concurrency_limit: usize,
}

impl Settings {
    pub(crate) fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url =
            get_required(&lookup, "DATABASE_URL").context("DATABASE_URL is required")?;
        let database_max_connections =
            parse_positive(&lookup, "DATABASE_MAX_CONNECTIONS", 10u32)?;

        let http_addr = lookup("HTTP_ADDR").unwrap_or_else(|| "0.0.0.0:8000".to_string());
        let log_level = lookup("LOG_LEVEL")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| "info".to_string());

        let posts_by_page = parse_positive(&lookup, "POSTS_BY_PAGE", 5u32)?;
        let field_limits = FieldLimits {
            max_field_length: parse_positive(
                &lookup,
                "MAX_FIELD_LENGTH",
                DEFAULT_MAX_FIELD_LENGTH,
            )?,
            representation_length: parse_positive(
                &lookup,
                "REPRESENTATION_LENGTH",
                DEFAULT_REPRESENTATION_LENGTH,
            )?,
        };
        let templates_dir = lookup("TEMPLATES_DIR")
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        let http_request_body_limit_bytes =
            parse_positive(&lookup, "HTTP_REQUEST_BODY_LIMIT_BYTES", 1024 * 1024usize)?;
        let http_concurrency_limit = parse_positive(&lookup, "HTTP_CONCURRENCY_LIMIT", 256usize)?;

        Ok(Self {
            database_url,
            database_max_connections,
            http_addr,
            log_level,
            posts_by_page,
            field_limits,
            templates_dir,
            http_request_body_limit_bytes,
            http_concurrency_limit,
        })
    }
}

fn get_required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    let value = lookup(key).ok_or_else(|| anyhow!("{key} is not set"))?;
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(anyhow!("{key} must not be empty"));
    }
    Ok(value)
}

fn parse_positive<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr + PartialEq + Default,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?,
        None => default,
    };

    if value == T::default() {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}
