//! API Client Adapter
//!
//! Single boundary to the REST backend. Response envelopes and error bodies
//! are normalized here so call sites only ever see typed records.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::domain::{DomainError, DomainResult};

/// Characters escaped inside one path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// The backend answers either with the payload itself or with `{ "data": payload }`
#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(value) => value,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Decode a response body, accepting both envelope shapes
pub fn decode_body<T: DeserializeOwned>(body: &str) -> DomainResult<T> {
    let envelope: Envelope<T> = serde_json::from_str(body)?;
    Ok(envelope.into_inner())
}

/// Build the error for a non-2xx response
pub fn backend_error(status: u16, body: &str) -> DomainError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty());
    DomainError::Backend { status, message }
}

/// HTTP client bound to the backend's base URL
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join path segments onto the base URL, escaping each segment
    pub fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.extend(utf8_percent_encode(segment, SEGMENT));
        }
        url
    }

    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> DomainResult<T> {
        let url = self.url(segments);
        log::debug!("[API] GET {}", url);
        let response = self.http.get(&url).send().await.map_err(|e| transport(&url, e))?;
        Self::read(&url, response).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> DomainResult<T> {
        let url = self.url(segments);
        log::debug!("[API] POST {}", url);
        let response = self.http.post(&url).json(body).send().await.map_err(|e| transport(&url, e))?;
        Self::read(&url, response).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> DomainResult<T> {
        let url = self.url(segments);
        log::debug!("[API] PUT {}", url);
        let response = self.http.put(&url).json(body).send().await.map_err(|e| transport(&url, e))?;
        Self::read(&url, response).await
    }

    pub async fn delete(&self, segments: &[&str]) -> DomainResult<()> {
        let url = self.url(segments);
        log::debug!("[API] DELETE {}", url);
        let response = self.http.delete(&url).send().await.map_err(|e| transport(&url, e))?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        let err = backend_error(status.as_u16(), &body);
        log::warn!("[API] DELETE {} failed: {}", url, err);
        Err(err)
    }

    async fn read<T: DeserializeOwned>(url: &str, response: reqwest::Response) -> DomainResult<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let err = backend_error(status.as_u16(), &body);
            log::warn!("[API] {} failed: {}", url, err);
            return Err(err);
        }
        decode_body(&body).map_err(|e| {
            log::warn!("[API] {} returned an unexpected body: {}", url, e);
            e
        })
    }
}

fn transport(url: &str, err: reqwest::Error) -> DomainError {
    log::warn!("[API] {} unreachable: {}", url, err);
    DomainError::from(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_bare_and_wrapped_collections() {
        let bare: Vec<u32> = decode_body("[1, 2, 3]").unwrap();
        let wrapped: Vec<u32> = decode_body(r#"{"data": [1, 2, 3], "total": 3}"#).unwrap();
        assert_eq!(bare, wrapped);
    }

    #[test]
    fn test_backend_error_reads_message() {
        let err = backend_error(422, r#"{"message": "The code has already been taken."}"#);
        assert_eq!(
            err,
            DomainError::Backend { status: 422, message: Some("The code has already been taken.".into()) }
        );
        assert_eq!(backend_error(500, "<html>oops</html>"), DomainError::Backend { status: 500, message: None });
    }

    #[test]
    fn test_url_escapes_segments() {
        let client = ApiClient::new(&ApiConfig::default().with_base_url("http://erp.local/api/"));
        assert_eq!(client.url(&["inventory-locations", "MAIN ST/2"]), "http://erp.local/api/inventory-locations/MAIN%20ST%2F2");
    }
}
