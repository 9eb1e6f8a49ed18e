//! HTTP client wrapper for a running Tea House server.

use crate::store::{Tea, TeaDraft, TeaId};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use thiserror::Error;

/// Errors returned while talking to the Tea House API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL failed to parse or normalize.
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),
    /// HTTP layer failed before receiving a response.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The server reported that the requested tea does not exist.
    #[error("{0}")]
    NotFound(String),
    /// The server responded with an unexpected status code.
    #[error("Unexpected response ({status}): {body}")]
    UnexpectedStatus {
        /// HTTP status returned by the server.
        status: StatusCode,
        /// Body payload associated with the failing response.
        body: String,
    },
}

/// Lightweight HTTP client for the `/teas` API.
pub struct TeaClient {
    client: Client,
    base_url: String,
}

impl TeaClient {
    /// Construct a client targeting `base_url` (for example `http://127.0.0.1:3000`).
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder().user_agent("tea-house/0.1").build()?;
        let base_url = normalize_base_url(base_url).map_err(ClientError::InvalidUrl)?;
        tracing::debug!(url = %base_url, "Initialized Tea House HTTP client");
        Ok(Self { client, base_url })
    }

    /// Fetch every tea in insertion order.
    pub async fn list(&self) -> Result<Vec<Tea>, ClientError> {
        let response = self.request(Method::GET, "teas").send().await?;
        Ok(ensure_success(response).await?.json().await?)
    }

    /// Fetch a single tea.
    pub async fn get(&self, id: TeaId) -> Result<Tea, ClientError> {
        let response = self
            .request(Method::GET, &format!("teas/{id}"))
            .send()
            .await?;
        Ok(ensure_success(response).await?.json().await?)
    }

    /// Create a tea and return it with its assigned id.
    pub async fn create(&self, draft: &TeaDraft) -> Result<Tea, ClientError> {
        let response = self
            .request(Method::POST, "teas")
            .json(draft)
            .send()
            .await?;
        Ok(ensure_success(response).await?.json().await?)
    }

    /// Replace the name and price of an existing tea.
    pub async fn update(&self, id: TeaId, draft: &TeaDraft) -> Result<Tea, ClientError> {
        let response = self
            .request(Method::PUT, &format!("teas/{id}"))
            .json(draft)
            .send()
            .await?;
        Ok(ensure_success(response).await?.json().await?)
    }

    /// Delete a tea, returning the server's confirmation text.
    pub async fn delete(&self, id: TeaId) -> Result<String, ClientError> {
        let response = self
            .request(Method::DELETE, &format!("teas/{id}"))
            .send()
            .await?;
        Ok(ensure_success(response).await?.text().await?)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format_endpoint(&self.base_url, path))
    }
}

async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let error = if status == StatusCode::NOT_FOUND {
        ClientError::NotFound(body)
    } else {
        ClientError::UnexpectedStatus { status, body }
    };
    tracing::debug!(error = %error, "Tea House request failed");
    Err(error)
}

fn normalize_base_url(url: &str) -> Result<String, String> {
    let mut parsed = reqwest::Url::parse(url).map_err(|err| err.to_string())?;
    let path = parsed.path().trim_end_matches('/').to_string();
    parsed.set_path(&path);
    Ok(parsed.to_string())
}

fn format_endpoint(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}
