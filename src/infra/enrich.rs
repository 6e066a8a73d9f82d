//! Name-based enrichment through agify.io, genderize.io and nationalize.io.

use crate::infra::config::EnrichConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("{api} request failed: {source}")]
    Transport {
        api: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{api} responded with status {status}")]
    Status { api: &'static str, status: u16 },
    #[error("{api} has no prediction for this name")]
    NoPrediction { api: &'static str },
}

/// Infers person attributes from a first name.
#[async_trait]
pub trait Enricher: Send + Sync {
    async fn age(&self, name: &str) -> Result<i32, EnrichError>;

    async fn gender(&self, name: &str) -> Result<String, EnrichError>;

    /// ISO 3166-1 alpha-2 code of the most probable country.
    async fn nationality(&self, name: &str) -> Result<String, EnrichError>;
}

#[derive(Deserialize)]
struct AgeResponse {
    age: Option<i32>,
}

#[derive(Deserialize)]
struct GenderResponse {
    gender: Option<String>,
}

#[derive(Deserialize)]
struct NationalityResponse {
    #[serde(default)]
    country: Vec<CountryGuess>,
}

#[derive(Deserialize)]
struct CountryGuess {
    country_id: String,
}

/// HTTP client for the three public lookup APIs.
#[derive(Clone)]
pub struct HttpEnricher {
    client: reqwest::Client,
    config: EnrichConfig,
}

impl HttpEnricher {
    pub fn new(config: EnrichConfig) -> Result<Self, EnrichError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|source| EnrichError::Transport {
                api: "http client",
                source,
            })?;
        Ok(Self { client, config })
    }

    async fn lookup<T: DeserializeOwned>(
        &self,
        api: &'static str,
        base_url: &str,
        name: &str,
    ) -> Result<T, EnrichError> {
        let url = format!("{}/", base_url.trim_end_matches('/'));
        let resp = self
            .client
            .get(&url)
            .query(&[("name", name)])
            .send()
            .await
            .map_err(|source| EnrichError::Transport { api, source })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::error!(api, status = status.as_u16(), "enrichment lookup failed");
            return Err(EnrichError::Status {
                api,
                status: status.as_u16(),
            });
        }

        if let Some(remaining) = resp
            .headers()
            .get("X-Rate-Limit-Remaining")
            .and_then(|v| v.to_str().ok())
        {
            tracing::info!(api, rate_limit_remaining = remaining, "enrichment lookup");
        }

        resp.json::<T>()
            .await
            .map_err(|source| EnrichError::Transport { api, source })
    }

    /// Issues one lookup per API and returns the first failure, if any.
    pub async fn probe(&self) -> Result<(), EnrichError> {
        self.age("Dmitriy").await?;
        self.gender("Dmitriy").await?;
        self.nationality("Dmitriy").await?;
        Ok(())
    }
}

#[async_trait]
impl Enricher for HttpEnricher {
    async fn age(&self, name: &str) -> Result<i32, EnrichError> {
        let api = "agify";
        let body: AgeResponse = self.lookup(api, &self.config.agify_url, name).await?;
        body.age.ok_or(EnrichError::NoPrediction { api })
    }

    async fn gender(&self, name: &str) -> Result<String, EnrichError> {
        let api = "genderize";
        let body: GenderResponse = self.lookup(api, &self.config.genderize_url, name).await?;
        body.gender.ok_or(EnrichError::NoPrediction { api })
    }

    async fn nationality(&self, name: &str) -> Result<String, EnrichError> {
        let api = "nationalize";
        let body: NationalityResponse =
            self.lookup(api, &self.config.nationalize_url, name).await?;
        body.country
            .into_iter()
            .next()
            .map(|c| c.country_id)
            .ok_or(EnrichError::NoPrediction { api })
    }
}
