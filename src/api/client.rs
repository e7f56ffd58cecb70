// Debug API HTTP client.
// Resolves endpoints against the configured base URL and checks response status.

use reqwest::{
    Client, Request, RequestBuilder, Response, Url,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::de::DeserializeOwned;

use crate::error::{ConsoleError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Parse and normalize the debug API base URL.
///
/// Only http and https are accepted. The path always ends in `/` so that
/// endpoints join underneath it instead of replacing the last segment.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw).map_err(|e| ConsoleError::InvalidUrl(format!("{}: {}", raw, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConsoleError::InvalidUrl(format!(
            "{}: unsupported scheme '{}'",
            raw,
            url.scheme()
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Debug API client. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct DebugClient {
    client: Client,
    base_url: Url,
}

impl DebugClient {
    /// Create a new client rooted at the given base URL.
    pub fn new(base_url: Url) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("debug-console"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ConsoleError::Http)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Start a GET request for an endpoint relative to the base URL.
    pub fn get(&self, endpoint: &str) -> Result<RequestBuilder> {
        let url = self
            .base_url
            .join(endpoint)
            .map_err(|e| ConsoleError::InvalidUrl(format!("{}: {}", endpoint, e)))?;
        Ok(self.client.get(url))
    }

    /// Send a built request and check its status.
    pub async fn execute(&self, request: Request) -> Result<Response> {
        let response = self
            .client
            .execute(request)
            .await
            .map_err(ConsoleError::Http)?;
        check_response(response)
    }

    /// Send a request and decode its JSON body.
    pub async fn fetch_json<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let response = self.execute(request).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Any 2xx is a success; everything else counts as a failed fetch.
fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        status if status.is_success() => Ok(response),
        status => Err(ConsoleError::Status {
            status,
            url: response.url().to_string(),
        }),
    }
}
