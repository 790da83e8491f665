//! HTTP client for the link management API.
//!
//! ```rust,ignore
//! let client = LnkClient::builder()
//!     .base_url("http://localhost:8000")
//!     .build()?;
//!
//! let slug = client.create_link("https://example.com", None).await?;
//! let link = client.get_link(&slug).await?;
//! ```

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::api::dto::links::{CreateLinkRequest, LinkIdResponse, LinkListResponse, LinkResponse};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const TCP_KEEPALIVE: Duration = Duration::from_secs(5);

/// Errors returned by [`LnkClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("error making request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("slug {slug} not found")]
    NotFound { slug: String },

    #[error("request failed; status: {status}, code: {code}, message: {message}")]
    Api {
        status: StatusCode,
        code: String,
        message: String,
    },
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorInfo,
}

#[derive(Debug, Deserialize)]
struct ApiErrorInfo {
    code: String,
    message: String,
}

/// Client for a running lnk service.
#[derive(Debug, Clone)]
pub struct LnkClient {
    base_url: String,
    client: Client,
}

/// Builder for [`LnkClient`].
#[derive(Debug, Clone)]
pub struct LnkClientBuilder {
    base_url: String,
    connect_timeout: Duration,
}

impl Default for LnkClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: CONNECT_TIMEOUT,
        }
    }
}

impl LnkClientBuilder {
    /// Overrides the service base URL; a trailing slash is ignored.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Overrides the TCP connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Request`] if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<LnkClient, ClientError> {
        let client = Client::builder()
            .connect_timeout(self.connect_timeout)
            .tcp_keepalive(TCP_KEEPALIVE)
            .build()?;

        Ok(LnkClient {
            base_url: self.base_url,
            client,
        })
    }
}

impl LnkClient {
    /// Starts a builder with default settings.
    pub fn builder() -> LnkClientBuilder {
        LnkClientBuilder::default()
    }

    /// Client for `base_url` with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Request`] if the HTTP client cannot be initialized.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Creates a link to `target`, with an optional custom slug.
    ///
    /// Returns the slug the service registered.
    pub async fn create_link(&self, target: &str, slug: Option<&str>) -> Result<String, ClientError> {
        let request = CreateLinkRequest {
            target: target.to_string(),
            slug: slug.map(str::to_string),
        };

        let resp = self
            .client
            .post(format!("{}/api/links", self.base_url))
            .json(&request)
            .send()
            .await?;

        let body: LinkIdResponse = Self::decode(resp).await?;
        Ok(body.link)
    }

    /// Fetches a link and its statistics.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the slug is not registered.
    pub async fn get_link(&self, slug: &str) -> Result<LinkResponse, ClientError> {
        let resp = self
            .client
            .get(format!("{}/api/links/{}", self.base_url, slug))
            .send()
            .await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound {
                slug: slug.to_string(),
            });
        }

        Self::decode(resp).await
    }

    /// Lists every registered link.
    pub async fn list_links(&self) -> Result<Vec<LinkResponse>, ClientError> {
        let resp = self
            .client
            .get(format!("{}/api/links", self.base_url))
            .send()
            .await?;

        let body: LinkListResponse = Self::decode(resp).await?;
        Ok(body.links)
    }

    /// Deletes a link. Deleting an unknown slug succeeds.
    pub async fn delete_link(&self, slug: &str) -> Result<(), ClientError> {
        let resp = self
            .client
            .delete(format!("{}/api/links/{}", self.base_url, slug))
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(Self::api_error(resp).await)
        }
    }

    async fn decode<T: for<'de> Deserialize<'de>>(resp: Response) -> Result<T, ClientError> {
        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }

        Ok(resp.json().await?)
    }

    async fn api_error(resp: Response) -> ClientError {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();

        match serde_json::from_str::<ApiErrorBody>(&text) {
            Ok(body) => ClientError::Api {
                status,
                code: body.error.code,
                message: body.error.message,
            },
            Err(_) => ClientError::Api {
                status,
                code: "unknown".to_string(),
                message: text,
            },
        }
    }
}
