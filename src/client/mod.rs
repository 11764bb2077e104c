//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod account;
mod error;
#[cfg(test)]
mod fake;
mod messages;

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::domain::{ApiKey, ValidationError};

pub use account::AccountResource;
pub use error::{DEFAULT_ERROR_MESSAGE, ErrorKind, SapakError};
pub use messages::MessageResource;

/// Production endpoint of the Sapak API.
pub const DEFAULT_BASE_URL: &str = "https://api.sapak.me/v1/";
/// Timeout applied to every request by the default transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
pub type TransportFailure = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

#[derive(Clone, PartialEq)]
/// A fully resolved API request handed to an [`HttpTransport`].
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
    pub query: Vec<(String, String)>,
    pub json: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers = self
            .headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case(ApiKey::HEADER) {
                    (*name, "***")
                } else {
                    (*name, value.as_str())
                }
            })
            .collect::<Vec<_>>();
        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("headers", &headers)
            .field("query", &self.query)
            .field("json", &self.json)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Seam between the client and the HTTP stack.
///
/// Implementations issue exactly one request and return the raw status and body;
/// they must not interpret status codes. Retries, pooling and TLS are their concern.
pub trait HttpTransport: Send + Sync {
    fn send<'a>(&'a self, request: HttpRequest)
    -> BoxFuture<'a, Result<HttpResponse, TransportFailure>>;
}

#[derive(Debug, Clone)]
/// Default [`HttpTransport`] backed by `reqwest`.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wrap a preconfigured `reqwest` client (timeouts, proxies, TLS settings).
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
        Box::pin(async move {
            let mut builder = match request.method {
                HttpMethod::Get => self.client.get(request.url),
                HttpMethod::Post => self.client.post(request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(*name, value);
            }
            if !request.query.is_empty() {
                builder = builder.query(&request.query);
            }
            if let Some(json) = &request.json {
                builder = builder.json(json);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Clone)]
/// Builder for [`SapakClient`].
///
/// Use this when you need to customize the base URL, timeout, user-agent, or transport.
pub struct SapakClientBuilder {
    api_key: ApiKey,
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl fmt::Debug for SapakClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SapakClientBuilder")
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

impl SapakClientBuilder {
    /// Create a builder with the production base URL and a 5 second timeout.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            transport: None,
        }
    }

    /// Override the base URL (staging, tests). A trailing `/` is added when missing.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the timeout applied to the entire request by the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header of the default transport.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a custom transport instead of the default `reqwest` one.
    ///
    /// `timeout` and `user_agent` are then the transport's responsibility.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build a [`SapakClient`].
    pub fn build(self) -> Result<SapakClient, SapakError> {
        let base_url = parse_base_url(&self.base_url)?;

        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder().timeout(self.timeout);
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| SapakError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport::new(client))
            }
        };

        Ok(SapakClient {
            api_key: self.api_key,
            base_url,
            http,
        })
    }
}

#[derive(Clone)]
/// High-level Sapak client.
///
/// Holds the credentials and base URL and hands out resource clients:
/// [`SapakClient::messages`] and [`SapakClient::account`]. Cloning is cheap and the
/// default transport is safe to share between tasks.
pub struct SapakClient {
    api_key: ApiKey,
    base_url: Url,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for SapakClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SapakClient")
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl SapakClient {
    /// Create a client for the production API with default settings.
    ///
    /// For more customization, use [`SapakClient::builder`].
    pub fn new(api_key: ApiKey) -> Result<Self, SapakError> {
        SapakClientBuilder::new(api_key).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> SapakClientBuilder {
        SapakClientBuilder::new(api_key)
    }

    /// Message endpoints: send, peer-to-peer, statuses, find.
    pub fn messages(&self) -> MessageResource<'_> {
        MessageResource::new(self)
    }

    /// Account endpoints: credit.
    pub fn account(&self) -> AccountResource<'_> {
        AccountResource::new(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue one request and return the body of a successful (2xx) response.
    ///
    /// Non-success statuses are mapped with [`SapakError::from_status`].
    pub(crate) async fn execute(
        &self,
        method: HttpMethod,
        path: &'static str,
        query: Vec<(String, String)>,
        json: Option<serde_json::Value>,
    ) -> Result<String, SapakError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|err| SapakError::Transport(Box::new(err)))?;
        let request = HttpRequest {
            method,
            url,
            headers: self.headers(),
            query,
            json,
        };

        debug!(%method, path, "sending Sapak API request");
        let response = self.http.send(request).await.map_err(|err| {
            warn!(%method, path, error = %err, "Sapak API transport failure");
            SapakError::Transport(err)
        })?;

        if !(200..=299).contains(&response.status) {
            let message = crate::transport::decode_error_message(&response.body);
            let err = SapakError::from_status(response.status, message, path);
            warn!(%method, path, status = response.status, error = %err, "Sapak API request failed");
            return Err(err);
        }

        debug!(%method, path, status = response.status, "Sapak API request succeeded");
        Ok(response.body)
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            (ApiKey::HEADER, self.api_key.as_str().to_owned()),
            ("Accept", "application/json".to_owned()),
            ("Content-Type", "application/json".to_owned()),
        ]
    }
}

fn parse_base_url(input: &str) -> Result<Url, SapakError> {
    let trimmed = input.trim();
    let normalized = if trimmed.ends_with('/') {
        trimmed.to_owned()
    } else {
        format!("{trimmed}/")
    };
    let url = Url::parse(&normalized).map_err(|_| ValidationError::InvalidBaseUrl {
        input: input.to_owned(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ValidationError::InvalidBaseUrl {
            input: input.to_owned(),
        }
        .into());
    }
    Ok(url)
}
