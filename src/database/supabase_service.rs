use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::config::environment::EnvironmentVariables;

/// Backend-as-a-service client for the Supabase project. Construction is
/// synchronous and performs no connectivity check; the client simply carries
/// the project credentials on every request it would make.
#[derive(Clone)]
pub struct SupabaseService {
    client: reqwest::Client,
    base_url: Arc<str>,
}

impl SupabaseService {
    pub fn new(env: Arc<EnvironmentVariables>) -> Result<Self> {
        let key: HeaderValue = HeaderValue::from_str(env.supabase_key.as_ref())
            .context("SUPABASE_KEY is not a valid header value")?;
        let bearer: HeaderValue = HeaderValue::from_str(&format!("Bearer {}", env.supabase_key))
            .context("SUPABASE_KEY is not a valid header value")?;

        let mut headers: HeaderMap = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let client: reqwest::Client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build Supabase HTTP client")?;

        Ok(Self {
            client,
            base_url: Arc::from(env.supabase_url.as_ref()),
        })
    }

    /// Base URL of the Supabase project.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Preconfigured HTTP client carrying the project credentials.
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}
