//! VoltUp HTTP client with header-based identity
//!
//! There are no cookies or tokens: the backend identifies the caller by the
//! `X-User-Id` header, read from local storage right before each request so
//! a login or logout takes effect on the very next call.

use super::ApiConfig;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Client, RequestBuilder,
};
use serde::Serialize;
use tracing::{debug, error, instrument, warn};
use voltup_core::errors::ApiErrorBody;
use voltup_core::{Error, Result};
use voltup_persistence::SessionStorage;

/// Identity header carrying the stored user id
pub const USER_ID_HEADER: &str = "X-User-Id";

/// HTTP client for the VoltUp REST API
///
/// Single-shot request/response: no retry, no backoff.
#[derive(Clone)]
pub struct VoltupClient {
    http: Client,
    base_url: String,
    storage: SessionStorage,
}

impl VoltupClient {
    /// Create a client for the configured backend
    pub fn new(config: &ApiConfig, storage: SessionStorage) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::ConfigError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            storage,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The storage the identity header is read from
    pub fn storage(&self) -> &SessionStorage {
        &self.storage
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// JSON headers plus the identity header when a user id is stored
    async fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(user_id) = self.storage.user_id().await {
            match HeaderValue::from_str(&user_id) {
                Ok(value) => {
                    headers.insert(USER_ID_HEADER, value);
                }
                Err(_) => warn!("Stored user id is not a valid header value, sending without identity"),
            }
        }

        headers
    }

    /// Send a request and return the raw body of a 2xx response.
    ///
    /// Transport failures become `NetworkError`; any other status becomes
    /// `ApiError` with the `{ code, message }` body when the server sent one.
    async fn execute(&self, request: RequestBuilder) -> Result<Vec<u8>> {
        let response = request.headers(self.default_headers().await).send().await?;
        let status = response.status();

        debug!("Response status: {}", status);

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body = ApiErrorBody::from_json(&text);
            if status.is_server_error() {
                error!("Request failed: HTTP {} {:?}", status, body.code);
            } else {
                debug!("Request rejected: HTTP {} {:?}", status, body.code);
            }
            return Err(Error::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    /// `GET {base}/{path}`
    #[instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.url(path);
        debug!("GET {}", url);
        self.execute(self.http.get(&url)).await
    }

    /// `POST {base}/{path}` with an optional JSON body
    #[instrument(skip(self, body))]
    pub async fn post<B>(&self, path: &str, body: Option<&B>) -> Result<Vec<u8>>
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = self.url(path);
        debug!("POST {}", url);
        let mut request = self.http.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request).await
    }
}

/// Percent-encode one path segment (user ids go into URLs)
pub fn path_segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}
