use anyhow::{Context, Result, anyhow};
use reqwest::Url;
use std::env::VarError;

pub const DEFAULT_CATALOG_API_URL: &str = "http://localhost:3001";

#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_base_url: String,
}

impl Config {
    pub fn init() -> Result<Self> {
        let catalog_base_url = match std::env::var("CATALOG_API_URL") {
            Ok(url) => url,
            Err(VarError::NotPresent) => DEFAULT_CATALOG_API_URL.to_string(),
            Err(err) => {
                return Err(err).context("Invalid environment variable: CATALOG_API_URL");
            }
        };

        Self::with_base_url(&catalog_base_url)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');

        let url = Url::parse(trimmed)
            .with_context(|| format!("CATALOG_API_URL must be a valid URL, got '{base_url}'"))?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(anyhow!(
                    "CATALOG_API_URL must use http or https, got '{}'",
                    other
                ));
            }
        }

        Ok(Self {
            catalog_base_url: trimmed.to_string(),
        })
    }
}
