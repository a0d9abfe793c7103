use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::error::TransportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Request/response exchange with the panel API.
///
/// Implementations send `body` as JSON when present and hand back the decoded
/// response body untouched; the `ok`/`error` envelope is the caller's concern.
/// Futures are not `Send`: the panel runs on a single browser thread.
#[async_trait(?Send)]
pub trait Transport {
    async fn call(
        &self,
        path: &str,
        method: Method,
        body: Option<Value>,
    ) -> Result<Value, TransportError>;
}

/// `reqwest`-backed transport. On `wasm32` reqwest drives the browser's fetch.
pub struct HttpTransport {
    client: reqwest::Client,
    api_root: String,
}

impl HttpTransport {
    /// `api_root` must be an absolute URL; paths are appended to it verbatim.
    pub fn new(api_root: &str, timeout: Option<Duration>) -> Result<Self, TransportError> {
        Url::parse(api_root).map_err(|_| TransportError::InvalidUrl(api_root.to_string()))?;

        Ok(Self {
            client: build_client(timeout)?,
            api_root: api_root.trim_end_matches('/').to_string(),
        })
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_root, path)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client, TransportError> {
    let mut builder = reqwest::Client::builder().user_agent("burn2cool-panel/0.1");
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| TransportError::Connection(format!("Failed to build HTTP client: {}", e)))
}

// The browser owns connection limits and timeouts for fetch.
#[cfg(target_arch = "wasm32")]
fn build_client(_timeout: Option<Duration>) -> Result<reqwest::Client, TransportError> {
    Ok(reqwest::Client::new())
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_decode() {
        TransportError::Decode(err.to_string())
    } else {
        TransportError::Connection(err.to_string())
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn call(
        &self,
        path: &str,
        method: Method,
        body: Option<Value>,
    ) -> Result<Value, TransportError> {
        let url = self.endpoint(path);
        debug!("{} {}", method, url);

        let mut request = self.client.request(method.into(), &url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| {
            warn!("{} {} failed: {}", method, url, e);
            classify(e)
        })?;

        // Non-2xx answers still carry the JSON envelope.
        debug!("{} {} -> {}", method, url, response.status());

        response.json::<Value>().await.map_err(|e| {
            warn!("{} {} returned an undecodable body: {}", method, url, e);
            TransportError::Decode(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_concatenates_root_and_path() {
        let transport = HttpTransport::new("http://127.0.0.1:8086/api/", None).unwrap();
        assert_eq!(transport.api_root(), "http://127.0.0.1:8086/api");
        assert_eq!(
            transport.endpoint("/profiles/a%20b"),
            "http://127.0.0.1:8086/api/profiles/a%20b"
        );
    }

    #[test]
    fn test_relative_root_is_rejected() {
        let err = HttpTransport::new("/api", None).err().unwrap();
        assert!(matches!(err, TransportError::InvalidUrl(ref root) if root == "/api"));
    }

    #[test]
    fn test_method_names() {
        assert_eq!(Method::Delete.to_string(), "DELETE");
        assert_eq!(reqwest::Method::from(Method::Put), reqwest::Method::PUT);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_transport_error() {
        // Port 9 (discard) is not expected to run an HTTP server locally.
        let transport =
            HttpTransport::new("http://127.0.0.1:9/api", Some(Duration::from_secs(2))).unwrap();
        let result = transport.call("/profiles", Method::Get, None).await;
        assert!(matches!(
            result,
            Err(TransportError::Connection(_)) | Err(TransportError::Timeout)
        ));
    }
}
