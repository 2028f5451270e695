//! Store client surface + builder.
//!
//! The ownership store speaks PostgREST conventions: tables live under
//! `rest/v1/`, stored procedures under `rest/v1/rpc/`, and every request
//! carries the service key both as an `apikey` header and as a bearer
//! token.

mod retry;

pub use retry::{Backoff, RetryConfig};

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::OwnershipError;

/// HTTP client for the ownership store.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: Client,
    base_rest: Url,
    base_rpc: Url,
    service_key: String,
    retry: RetryConfig,
}

impl StoreClient {
    /// Create a new builder.
    pub fn builder() -> StoreClientBuilder {
        StoreClientBuilder::default()
    }

    /* -------- internal getters used by the store module -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Endpoint for a table under the REST root.
    pub(crate) fn rest_url(&self, table: &str) -> Result<Url, OwnershipError> {
        Ok(self.base_rest.join(table)?)
    }

    /// Endpoint for a stored procedure under the RPC root.
    pub(crate) fn rpc_url(&self, function: &str) -> Result<Url, OwnershipError> {
        Ok(self.base_rpc.join(function)?)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }

    /// Sends a request through the retry policy.
    ///
    /// Success statuses return the response. Retryable statuses and
    /// transient transport errors back off and try again up to the
    /// configured limit; anything else maps to
    /// [`OwnershipError::Status`] or [`OwnershipError::Http`].
    pub(crate) async fn send_with_retry(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, OwnershipError> {
        let cfg = &self.retry;
        let mut attempt: u32 = 0;
        loop {
            let cloned = req
                .try_clone()
                .ok_or_else(|| OwnershipError::Data("request is not cloneable".into()))?;
            match self.authorize(cloned).send().await {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        return Ok(resp);
                    }
                    let retryable = cfg.enabled && cfg.retry_on_status.contains(&status.as_u16());
                    if !retryable || attempt >= cfg.max_retries {
                        return Err(OwnershipError::Status {
                            status: status.as_u16(),
                            url: resp.url().to_string(),
                        });
                    }
                }
                Err(err) => {
                    let transient = (err.is_timeout() && cfg.retry_on_timeout)
                        || (err.is_connect() && cfg.retry_on_connect);
                    if !cfg.enabled || !transient || attempt >= cfg.max_retries {
                        return Err(err.into());
                    }
                }
            }
            tokio::time::sleep(cfg.backoff.delay(attempt)).await;
            attempt += 1;
        }
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`StoreClient`].
#[derive(Default)]
pub struct StoreClientBuilder {
    base_url: Option<Url>,
    service_key: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,
}

impl StoreClientBuilder {
    /// The store's root URL (e.g. `https://project.supabase.co`).
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// The service key, sent as `apikey` and as a bearer token.
    pub fn service_key(mut self, key: impl Into<String>) -> Self {
        self.service_key = Some(key.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Override the default retry policy.
    pub fn retry(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    pub fn build(self) -> Result<StoreClient, OwnershipError> {
        let base = self
            .base_url
            .ok_or_else(|| OwnershipError::Data("store base URL is required".into()))?;
        let base = ensure_trailing_slash(base);
        let base_rest = base.join("rest/v1/")?;
        let base_rpc = base_rest.join("rpc/")?;

        let service_key = self
            .service_key
            .ok_or_else(|| OwnershipError::Data("store service key is required".into()))?;

        let mut httpb = Client::builder();
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(StoreClient {
            http: httpb.build()?,
            base_rest,
            base_rpc,
            service_key,
            retry: self.retry.unwrap_or_default(),
        })
    }
}

fn ensure_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }
    url
}
