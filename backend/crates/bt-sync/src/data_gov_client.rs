use crate::{Result as SyncResult, SyncError};

use bt_config::SyncConfig;

use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, Url};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Envelope returned by `GET /resource/{id}`.
///
/// Error payloads (`{"error": ...}`) carry no `records` key and fail to decode.
#[derive(Debug, Deserialize)]
struct RecordsResponse {
    records: Vec<Map<String, Value>>,
}

/// HTTP client for one data.gov.in dataset resource
#[derive(Clone)]
pub struct DataGovClient {
    resource_url: String,
    api_key: Option<String>,
    limit: u32,
    timeout: Duration,
    client: ReqwestClient,
}

impl DataGovClient {
    /// Create a client for `{base_url}/resource/{resource_id}`.
    ///
    /// `timeout` bounds each whole request, body included.
    pub fn new(
        base_url: &str,
        resource_id: &str,
        api_key: Option<String>,
        limit: u32,
        timeout: Duration,
    ) -> SyncResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SyncError::from_reqwest(e, timeout))?;

        Ok(Self {
            resource_url: format!(
                "{}/resource/{}",
                base_url.trim_end_matches('/'),
                resource_id.trim()
            ),
            api_key,
            limit,
            timeout,
            client,
        })
    }

    pub fn from_config(config: &SyncConfig) -> SyncResult<Self> {
        Self::new(
            &config.base_url,
            &config.resource_id,
            config.api_key.clone(),
            config.limit,
            config.fetch_timeout(),
        )
    }

    /// Full request URL including query parameters
    pub fn request_url(&self) -> SyncResult<Url> {
        let mut params = Vec::with_capacity(3);
        if let Some(key) = &self.api_key {
            params.push(("api-key", key.clone()));
        }
        params.push(("format", "json".to_string()));
        params.push(("limit", self.limit.to_string()));

        Url::parse_with_params(&self.resource_url, &params)
            .map_err(|e| SyncError::invalid_url(format!("{}: {}", self.resource_url, e)))
    }

    /// Fetch the raw `records` array of the resource
    pub async fn fetch_records(&self) -> SyncResult<Vec<Map<String, Value>>> {
        let url = self.request_url()?;
        debug!("Fetching bills from {}", self.resource_url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SyncError::from_reqwest(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::status(status.as_u16()));
        }

        let body: RecordsResponse = response
            .json()
            .await
            .map_err(|e| SyncError::from_reqwest(e, self.timeout))?;

        debug!("Fetched {} records", body.records.len());

        Ok(body.records)
    }
}

impl std::fmt::Debug for DataGovClient {
    // The API key stays out of logs
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataGovClient")
            .field("resource_url", &self.resource_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("limit", &self.limit)
            .field("timeout", &self.timeout)
            .finish()
    }
}

