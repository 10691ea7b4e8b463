//! HTTP client for the SwagUp API.
//!
//! Gated behind the `client` cargo feature so downstream crates that only
//! need the wire types do not pull in `reqwest`.
//!
//! The client is stateless: its only fields are the immutable base URL,
//! the API key, and a `reqwest::Client` (which owns connection pooling and
//! timeouts).  Each operation is one request, one response, no retries.

mod designs;
mod orders;

use reqwest::{Client, StatusCode};
use url::Url;

use crate::objects::ApiEnvelope;

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-SwagUp-API-Key";

/// Errors produced by the SDK client.
///
/// Non-2xx statuses map deterministically onto the first four variants;
/// everything else is a local failure of transport, URL construction, or
/// response decoding.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, TLS, connection reset, …).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned 400, or the input was rejected before dispatch.
    #[error("bad request, check your input: {0}")]
    InvalidRequest(String),

    /// The server returned 401.
    #[error("unauthorized, check your API key: {0}")]
    Unauthorized(String),

    /// The server returned 404: the referenced design, order, or other
    /// resource does not exist.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The server returned any other non-2xx status code.
    #[error("request failed with status code {status}: {body}")]
    RequestFailed { status: StatusCode, body: String },

    /// The server returned 2xx but the body was not valid JSON or the
    /// `data` object was missing a required field.
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The base URL could not be joined with the endpoint path.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

impl ClientError {
    fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::InvalidRequest(body),
            StatusCode::UNAUTHORIZED => Self::Unauthorized(body),
            StatusCode::NOT_FOUND => Self::NotFound(body),
            _ => Self::RequestFailed { status, body },
        }
    }
}

/// Typed HTTP client for the SwagUp custom-merchandise API.
///
/// Every request carries the configured API key in the
/// [`API_KEY_HEADER`] header.  Path parameters are substituted verbatim,
/// so callers must supply identifiers free of path-breaking characters.
#[derive(Debug, Clone)]
pub struct SwagUpClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl SwagUpClient {
    /// Create a new `SwagUpClient`.
    ///
    /// * `base_url` – root URL of the SwagUp API (e.g. `https://api.example.com`).
    /// * `api_key` – the API key sent with every request.
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure timeouts or a proxy).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }

    pub(crate) fn get(&self, url: Url) -> reqwest::RequestBuilder {
        self.http.get(url).header(API_KEY_HEADER, &self.api_key)
    }

    pub(crate) fn post(&self, url: Url) -> reqwest::RequestBuilder {
        self.http.post(url).header(API_KEY_HEADER, &self.api_key)
    }

    pub(crate) fn delete(&self, url: Url) -> reqwest::RequestBuilder {
        self.http.delete(url).header(API_KEY_HEADER, &self.api_key)
    }
}

/// Translate a raw response into a typed result.
///
/// Non-2xx statuses short-circuit into a classified [`ClientError`]; on
/// success the body is parsed as an [`ApiEnvelope`] and only `data` is
/// returned.
pub(crate) async fn parse_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::from_status(status, body));
    }
    let bytes = resp.bytes().await?;
    let envelope: ApiEnvelope<T> = serde_json::from_slice(&bytes)?;
    Ok(envelope.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_400_classifies_as_invalid_request() {
        let err = ClientError::from_status(StatusCode::BAD_REQUEST, "oops".to_owned());
        assert!(matches!(err, ClientError::InvalidRequest(body) if body == "oops"));
    }

    #[test]
    fn status_401_classifies_as_unauthorized() {
        let err = ClientError::from_status(StatusCode::UNAUTHORIZED, String::new());
        assert!(matches!(err, ClientError::Unauthorized(_)));
    }

    #[test]
    fn status_404_classifies_as_not_found() {
        let err = ClientError::from_status(StatusCode::NOT_FOUND, String::new());
        assert!(matches!(err, ClientError::NotFound(_)));
    }

    #[test]
    fn other_statuses_carry_the_exact_code() {
        for code in [403u16, 409, 418, 500, 503] {
            let status = StatusCode::from_u16(code).unwrap();
            let err = ClientError::from_status(status, String::new());
            match err {
                ClientError::RequestFailed { status, .. } => assert_eq!(status.as_u16(), code),
                other => panic!("expected RequestFailed, got {other:?}"),
            }
        }
    }
}
