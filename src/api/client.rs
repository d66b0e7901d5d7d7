//! HTTP gateway for the character catalog API.
//!
//! The gateway is a stateless request/response boundary: one call lists a
//! page of characters, one call resolves a batch of episodes by id. All
//! caching and merge behavior lives in the callers.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::config::Config;
use crate::error::{CrossoverError, Result};

use super::types::{CharacterPage, Episode};

/// Common interface to the catalog API.
///
/// Kept as a trait so the selection and feed machinery can be exercised
/// against an in-memory implementation in tests.
pub trait Gateway: Send + Sync {
    /// Fetch one page of the character listing. `None` requests the first
    /// page (the API defaults to page 1 when the parameter is omitted).
    fn list_characters(
        &self,
        page: Option<u32>,
    ) -> impl Future<Output = Result<CharacterPage>> + Send;

    /// Fetch the episodes with the given ids in a single batched request.
    /// An empty id list resolves to an empty result without touching the
    /// network.
    fn episodes_by_ids(&self, ids: &[u64]) -> impl Future<Output = Result<Vec<Episode>>> + Send;
}

/// Gateway implementation over HTTP.
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    /// Create a gateway from configuration.
    ///
    /// Configures the HTTP client with a 30s connect timeout and the
    /// configured total timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json(&self, url: String) -> Result<Value> {
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(CrossoverError::Api(format!(
                "{} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        Ok(response.json().await?)
    }
}

/// Normalize the episode endpoint's response shapes.
///
/// The batch endpoint returns an array for multiple ids, a bare object for
/// a single id, and `null` for an empty match.
pub(crate) fn normalize_episodes(value: Value) -> Result<Vec<Episode>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        other => Ok(vec![serde_json::from_value(other)?]),
    }
}

impl Gateway for HttpGateway {
    fn list_characters(
        &self,
        page: Option<u32>,
    ) -> impl Future<Output = Result<CharacterPage>> + Send {
        async move {
            let mut url = format!("{}/character", self.base_url);
            if let Some(page) = page {
                url.push_str(&format!("?page={page}"));
            }

            let value = self.get_json(url).await?;
            Ok(serde_json::from_value(value)?)
        }
    }

    fn episodes_by_ids(&self, ids: &[u64]) -> impl Future<Output = Result<Vec<Episode>>> + Send {
        let joined = ids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let empty = ids.is_empty();

        async move {
            if empty {
                return Ok(Vec::new());
            }

            let url = format!("{}/episode/{}", self.base_url, joined);
            let value = self.get_json(url).await?;
            normalize_episodes(value)
        }
    }
}
