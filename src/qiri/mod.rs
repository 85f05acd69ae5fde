//! Client for the external Qiri catalog API.
//!
//! One HTTP request per SKU against a configured base endpoint, the SKU
//! carried as a query parameter. No retries: sync-once semantics, any
//! retry policy belongs to a future caller.

use std::future::Future;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::qiri::{RawProductRecord, SourceEnvelope};

/// Why a product could not be retrieved from the source.
///
/// Both variants are recovered per item by the synchronizer; they stay
/// distinct so a retry policy could later treat them differently.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The source has no record for the SKU. A clean "no record" result,
    /// not a hard failure.
    #[error("{0}")]
    NotFound(String),
    /// The call itself failed: timeout, connection error, or a non-2xx
    /// response.
    #[error("{0}")]
    Transport(String),
}

/// Fetches one raw product record per SKU from the source catalog.
///
/// Seam between the sync service and the network so the pipeline is
/// testable against a scripted catalog.
pub trait CatalogFetcher {
    fn fetch(&self, sku: &str)
    -> impl Future<Output = Result<RawProductRecord, FetchError>>;
}

/// Error body returned by the source on failed lookups.
#[derive(Debug, Deserialize)]
struct SourceErrorBody {
    message: String,
}

/// Reqwest-backed catalog client. Cheap to clone; the inner client pools
/// connections.
#[derive(Clone)]
pub struct QiriClient {
    client: reqwest::Client,
    base_url: String,
}

impl QiriClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl CatalogFetcher for QiriClient {
    async fn fetch(&self, sku: &str) -> Result<RawProductRecord, FetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("sku", sku)])
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Prefer the source's own message over the bare status line.
            let reason = match response.json::<SourceErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => format!("source returned status {status}"),
            };
            return Err(if status == StatusCode::NOT_FOUND {
                FetchError::NotFound(reason)
            } else {
                FetchError::Transport(reason)
            });
        }

        let envelope = response
            .json::<SourceEnvelope>()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        match envelope.product {
            Some(product) => Ok(RawProductRecord {
                sku: envelope.sku.unwrap_or_else(|| sku.to_owned()),
                product,
            }),
            None => Err(FetchError::NotFound(format!(
                "no product returned for sku {sku}"
            ))),
        }
    }
}
