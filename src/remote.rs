use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Url;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

mod http_client;

mod endpoints;
pub use self::endpoints::*;
mod types;
pub use self::types::*;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("{label}: request failed: {source}")]
    Transport {
        label: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{label}: {message} (status {status})")]
    Status {
        label: &'static str,
        status: u16,
        message: String,
    },
    #[error("{label}: unexpected response: {source}")]
    Decode {
        label: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{label}: encode request: {source}")]
    Encode {
        label: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Executes named requests against the remote service.
///
/// Implementations run on a single-threaded runtime, so futures need not be
/// `Send`.
#[async_trait(?Send)]
pub trait Gateway {
    async fn send(&self, request: ApiRequest) -> Result<Value, GatewayError>;

    /// One-shot delay used before a deferred follow-up operation.
    async fn defer(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

/// Sends `request` and decodes the payload into `T`.
pub async fn call<G, T>(gateway: &G, request: ApiRequest) -> Result<T, GatewayError>
where
    G: Gateway + ?Sized,
    T: DeserializeOwned,
{
    let label = request.endpoint.label();
    let value = gateway.send(request).await?;
    serde_json::from_value(value).map_err(|source| GatewayError::Decode { label, source })
}

/// An endpoint plus the values for its path placeholders and an optional JSON
/// body.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    pub params: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            params: Vec::new(),
            body: None,
        }
    }

    pub fn param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.params.push((name, value.into()));
        self
    }

    pub fn json(mut self, body: &impl Serialize) -> Result<Self, GatewayError> {
        let label = self.endpoint.label();
        self.body =
            Some(serde_json::to_value(body).map_err(|source| GatewayError::Encode { label, source })?);
        Ok(self)
    }

    pub fn param_value(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Path segments with placeholders substituted (not yet percent-encoded).
    /// A placeholder without a value is kept verbatim.
    pub fn segments(&self) -> Vec<String> {
        self.endpoint
            .template()
            .trim_start_matches('/')
            .split('/')
            .map(|seg| {
                match seg.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                    Some(name) => self
                        .param_value(name)
                        .map(str::to_string)
                        .unwrap_or_else(|| seg.to_string()),
                    None => seg.to_string(),
                }
            })
            .collect()
    }

    pub fn path(&self) -> String {
        format!("/{}", self.segments().join("/"))
    }
}

pub struct RemoteClient {
    api_url: Url,
    names_url: Url,
    client: reqwest::Client,
}

impl RemoteClient {
    pub fn new(api_url: &str, names_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("ripple-console")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            api_url: parse_base_url(api_url).context("api url")?,
            names_url: parse_base_url(names_url).context("names url")?,
            client,
        })
    }

    fn base(&self, host: Host) -> &Url {
        match host {
            Host::Rest => &self.api_url,
            Host::Names => &self.names_url,
        }
    }

    pub fn url(&self, request: &ApiRequest) -> Url {
        let mut url = self.base(request.endpoint.host()).clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(request.segments());
        }
        url
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("invalid url: {}", raw))?;
    if url.cannot_be_a_base() {
        anyhow::bail!("url cannot be used as a base: {}", raw);
    }
    Ok(url)
}

#[async_trait(?Send)]
impl Gateway for RemoteClient {
    async fn send(&self, request: ApiRequest) -> Result<Value, GatewayError> {
        let label = request.endpoint.label();
        let url = self.url(&request);
        tracing::debug!(method = request.endpoint.method().as_str(), %url, "remote request");

        let builder = match request.endpoint.method() {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Delete => self.client.delete(url),
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let resp = builder
            .send()
            .await
            .map_err(|source| GatewayError::Transport { label, source })?;
        self.read_json(resp, label).await
    }
}

#[cfg(test)]
#[path = "tests/remote/request_tests.rs"]
mod tests;
