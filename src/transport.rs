use async_trait::async_trait;
use reqwest::{header::ACCEPT, Method, StatusCode};
use url::Url;

use crate::utils::error_chain_fmt;

/// One outgoing contact request. Fields are sent as field-value pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: Method,
    pub url: Url,
    pub fields: Vec<(&'static str, String)>,
    pub fields_in_query: bool,
}

#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// The request never produced a response.
#[derive(thiserror::Error)]
#[error("The request could not be delivered")]
pub struct TransportError(#[from] pub anyhow::Error);

impl std::fmt::Debug for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[async_trait]
pub trait Transport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

#[derive(Clone)]
pub struct HttpTransport {
    http_client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let builder = self
            .http_client
            .request(request.method, request.url)
            .header(ACCEPT, "application/json");
        let builder = if request.fields_in_query {
            builder.query(&request.fields)
        } else {
            builder.form(&request.fields)
        };

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(e.into()))?;
        let status = response.status();
        // An unreadable body is treated like an empty one.
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                tracing::warn!("Failed to read response body: {:?}", e);
                Vec::new()
            }
        };

        Ok(TransportResponse { status, body })
    }
}
