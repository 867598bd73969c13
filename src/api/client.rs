//! HTTP client bound to one base origin.
//!
//! The server keeps sessions in a cookie, so the underlying reqwest client
//! carries a cookie jar: a successful login authenticates every later call
//! made through the same `ApiClient`.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ApiError;
use super::types::MessageResponse;
use crate::config::ClientConfig;

/// HTTP client wrapper for file server API communication.
///
/// Owns its base URL; nothing is read from or written to process-wide state.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the given base URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = validate_base_url(base_url)?;
        let client = Client::builder()
            .cookie_store(true)
            .user_agent(concat!("filebox-client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a relative API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a GET request to a relative API path.
    pub async fn get(&self, path: &str) -> Result<Response, reqwest::Error> {
        log::debug!("GET {}", path);
        self.client.get(self.url(path)).send().await
    }

    /// Send a POST request with a JSON body to a relative API path.
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Response, reqwest::Error> {
        log::debug!("POST {}", path);
        self.client.post(self.url(path)).json(body).send().await
    }

    /// Send a POST request without a body.
    pub async fn post_empty(&self, path: &str) -> Result<Response, reqwest::Error> {
        log::debug!("POST {}", path);
        self.client.post(self.url(path)).send().await
    }

    /// Send a DELETE request carrying a JSON body.
    pub async fn delete<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Response, reqwest::Error> {
        log::debug!("DELETE {}", path);
        self.client.delete(self.url(path)).json(body).send().await
    }

    /// Send a multipart POST request (used for file uploads).
    pub async fn multipart_post(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Response, reqwest::Error> {
        log::debug!("POST {} (multipart)", path);
        self.client.post(self.url(path)).multipart(form).send().await
    }
}

fn validate_base_url(raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: String| ApiError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };
    let parsed = reqwest::Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Fail with `ApiError::Status` unless the response is 2xx.
pub(crate) async fn ensure_success(resp: Response) -> Result<Response, ApiError> {
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, body });
    }
    Ok(resp)
}

/// Check the status and decode the JSON body.
pub(crate) async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let resp = ensure_success(resp).await?;
    let bytes = resp.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// GET a relative path and decode its JSON body.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &ApiClient,
    path: &str,
) -> Result<T, ApiError> {
    let resp = client.get(path).await?;
    read_json(resp).await
}

/// Like `read_json`, but an empty 2xx body reads as an empty message.
pub(crate) async fn read_message(resp: Response) -> Result<MessageResponse, ApiError> {
    let resp = ensure_success(resp).await?;
    let bytes = resp.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(MessageResponse::default());
    }
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://files.example.com:8080/").unwrap();
        assert_eq!(client.base_url(), "http://files.example.com:8080");
        assert_eq!(client.url("/files"), "http://files.example.com:8080/files");
    }

    #[test]
    fn test_base_url_rejects_garbage() {
        let err = ApiClient::new("not a url").unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_base_url_rejects_non_http_scheme() {
        let err = ApiClient::new("ftp://files.example.com").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }
}
