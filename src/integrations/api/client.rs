// src/integrations/api/client.rs
//
// REST API client for the intake backend.
//
// - Builds endpoint URLs under the configured base URL
// - Attaches the session's bearer token when one is available
// - Maps HTTP status codes to `AppError`
// - Knows nothing about which endpoint means what; repositories do

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use reqwest::header::{self, HeaderMap};
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::repositories::SessionStore;

/// Error body the API sends with non-success statuses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// A binary response body plus what the headers said about it
#[derive(Debug, Clone)]
pub struct BinaryResponse {
    pub content_type: Option<String>,
    pub file_name: Option<String>,
    pub data: Vec<u8>,
}

pub struct ApiClient {
    base_url: Url,
    http_client: Client,
    sessions: Option<Arc<dyn SessionStore>>,
}

impl ApiClient {
    /// `base_url` must be absolute; a trailing slash is not required.
    pub fn new(base_url: Url, timeout: Duration) -> AppResult<Self> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            http_client,
            sessions: None,
        })
    }

    /// Send `Authorization: Bearer` from this store on every request.
    pub fn with_sessions(mut self, sessions: Arc<dyn SessionStore>) -> Self {
        self.sessions = Some(sessions);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL plus path segments, each percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Other(format!("API base URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // ========================================================================
    // JSON
    // ========================================================================

    pub async fn get_json<T>(&self, segments: &[&str], resource: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let request = self.request(Method::GET, segments)?;
        self.send_json(request, resource).await
    }

    pub async fn get_json_with_query<T, Q>(
        &self,
        segments: &[&str],
        query: &Q,
        resource: &str,
    ) -> AppResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.request(Method::GET, segments)?.query(query);
        self.send_json(request, resource).await
    }

    pub async fn post_json<B, T>(&self, segments: &[&str], body: &B, resource: &str) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, segments)?.json(body);
        self.send_json(request, resource).await
    }

    pub async fn patch_json<B, T>(&self, segments: &[&str], body: &B, resource: &str) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::PATCH, segments)?.json(body);
        self.send_json(request, resource).await
    }

    /// POST without caring about the response body
    pub async fn post_empty<B>(&self, segments: &[&str], body: &B, resource: &str) -> AppResult<()>
    where
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::POST, segments)?.json(body);
        self.send(request, resource).await?;
        Ok(())
    }

    pub async fn delete(&self, segments: &[&str], resource: &str) -> AppResult<()> {
        let request = self.request(Method::DELETE, segments)?;
        self.send(request, resource).await?;
        Ok(())
    }

    // ========================================================================
    // MULTIPART & BINARY
    // ========================================================================

    pub async fn post_multipart<T>(&self, segments: &[&str], form: Form, resource: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, segments)?.multipart(form);
        self.send_json(request, resource).await
    }

    pub async fn get_bytes<Q>(
        &self,
        segments: &[&str],
        query: Option<&Q>,
        resource: &str,
    ) -> AppResult<BinaryResponse>
    where
        Q: Serialize + ?Sized,
    {
        let mut request = self
            .request(Method::GET, segments)?
            .header(header::ACCEPT, "*/*");
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = self.send(request, resource).await?;
        let headers = response.headers().clone();
        let data = response.bytes().await?.to_vec();

        Ok(BinaryResponse {
            content_type: header_str(&headers, header::CONTENT_TYPE).map(str::to_string),
            file_name: header_str(&headers, header::CONTENT_DISPOSITION)
                .and_then(file_name_from_disposition),
            data,
        })
    }

    // ========================================================================
    // INTERNAL
    // ========================================================================

    fn request(&self, method: Method, segments: &[&str]) -> AppResult<RequestBuilder> {
        let url = self.endpoint(segments)?;
        debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, url)
            .header(header::ACCEPT, "application/json");

        if let Some(token) = self.bearer_token() {
            request = request.bearer_auth(token);
        }

        Ok(request)
    }

    fn bearer_token(&self) -> Option<String> {
        let store = self.sessions.as_ref()?;
        match store.load() {
            Ok(session) => session.access_token().map(str::to_string),
            Err(e) => {
                warn!("could not read session for API request: {}", e);
                None
            }
        }
    }

    async fn send(&self, request: RequestBuilder, resource: &str) -> AppResult<Response> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(resource.to_string()));
        }

        let fallback = status
            .canonical_reason()
            .unwrap_or("Unexpected response")
            .to_string();
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or(fallback);

        warn!("API returned {} for {}: {}", status.as_u16(), resource, message);
        Err(AppError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn send_json<T>(&self, request: RequestBuilder, resource: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self.send(request, resource).await?;
        Ok(response.json::<T>().await?)
    }
}

fn header_str(headers: &HeaderMap, name: header::HeaderName) -> Option<&str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// `attachment; filename="cv.pdf"` -> `cv.pdf`
fn file_name_from_disposition(value: &str) -> Option<String> {
    value
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))
        .map(|name| name.trim_matches('"').to_string())
        .filter(|name| !name.is_empty())
}
