//! HTTP header retrieval.
//!
//! ### URL gate
//! - Reject raw spaces, control characters, and reserved punctuation
//! - Absolute URL with a host; localhost and IP literals pass, other hosts
//!   need a plausible dotted shape
//!
//! ### Fetch
//! - Plain GET with a bounded timeout and redirect limit
//! - Non-2xx statuses are errors; the caller decides what to cache (in
//!   practice: nothing, so a failing site is retried on the next check)

pub mod url;

use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode, header::HeaderMap};

use infotools_core::Error;

pub use url::{UrlError, validate_url};

/// Configuration for the header client.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User agent string (default: "infotools/0.1")
    pub user_agent: String,

    /// Request timeout (default: 10s)
    pub timeout: Duration,

    /// Maximum number of redirects to follow (default: 5)
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "infotools/0.1".to_string(),
            timeout: Duration::from_secs(10),
            max_redirects: 5,
        }
    }
}

/// Headers captured from a successful response.
#[derive(Debug, Clone)]
pub struct HeaderSnapshot {
    /// The final URL after redirects.
    pub final_url: reqwest::Url,
    /// HTTP status code (always 2xx).
    pub status: StatusCode,
    /// Header lines in wire order; repeated keys keep their value order.
    pub headers: Vec<(String, Vec<String>)>,
    /// Time taken to fetch in milliseconds.
    pub fetch_ms: u64,
}

/// HTTP client for the header-check page.
pub struct HeaderClient {
    http: Client,
    config: FetchConfig,
}

impl HeaderClient {
    /// Create a new header client with the given configuration.
    pub fn new(config: FetchConfig) -> Result<Self, Error> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::Http(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// GET the URL and capture its response headers.
    ///
    /// # Errors
    ///
    /// Network failures, timeouts, and non-2xx statuses all surface as
    /// errors with a short descriptive message.
    pub async fn fetch_headers(&self, url_str: &str) -> Result<HeaderSnapshot, Error> {
        let start = Instant::now();

        let response = self.http.get(url_str).send().await.map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http(format!("status {}", status.as_u16())));
        }

        let final_url = response.url().clone();
        let headers = group_headers(response.headers());
        let fetch_ms = start.elapsed().as_millis() as u64;

        tracing::debug!(
            "fetched headers for {} in {}ms ({} fields)",
            final_url,
            fetch_ms,
            headers.len()
        );

        Ok(HeaderSnapshot { final_url, status, headers, fetch_ms })
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}

fn map_send_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout(e.to_string())
    } else {
        Error::Http(format!("network error: {}", e))
    }
}

/// Group a response header map into ordered (key, values) pairs.
fn group_headers(map: &HeaderMap) -> Vec<(String, Vec<String>)> {
    let mut grouped: Vec<(String, Vec<String>)> = Vec::new();
    for (name, value) in map {
        let text = String::from_utf8_lossy(value.as_bytes()).into_owned();
        match grouped.iter_mut().find(|(key, _)| key == name.as_str()) {
            Some((_, values)) => values.push(text),
            None => grouped.push((name.as_str().to_string(), vec![text])),
        }
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderName, HeaderValue};

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.user_agent, "infotools/0.1");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.max_redirects, 5);
    }

    #[test]
    fn test_group_headers_preserves_value_order() {
        let mut map = HeaderMap::new();
        let set_cookie = HeaderName::from_static("set-cookie");
        map.append(set_cookie.clone(), HeaderValue::from_static("a=1"));
        map.append(set_cookie, HeaderValue::from_static("b=2"));
        map.insert("server", HeaderValue::from_static("nginx"));

        let grouped = group_headers(&map);
        let cookies = grouped.iter().find(|(k, _)| k == "set-cookie").unwrap();
        assert_eq!(cookies.1, vec!["a=1", "b=2"]);
        assert_eq!(grouped.len(), 2);
    }

    #[tokio::test]
    async fn test_header_client_new() {
        let client = HeaderClient::new(FetchConfig::default());
        assert!(client.is_ok());
    }
}
