use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{COOKIE, HeaderMap, HeaderValue, REFERER, USER_AGENT};

use crate::policy::RetryPolicy;

/// Headers sent with every request; the cookie is passed through as given
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestHeaders {
    pub cookie: Option<String>,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
}

impl RequestHeaders {
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let entries = [
            (COOKIE, &self.cookie),
            (REFERER, &self.referer),
            (USER_AGENT, &self.user_agent),
        ];
        for (name, value) in entries {
            if let Some(value) = value {
                let value = HeaderValue::from_str(value)
                    .with_context(|| format!("Invalid value for {} header", name))?;
                headers.insert(name, value);
            }
        }
        Ok(headers)
    }
}

/// Source of raw response bodies for marketplace paths
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String>;
}

/// GET-only HTTP transport with per-request retry
pub struct Transport {
    http: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl Transport {
    pub fn new(base_url: &str, headers: &RequestHeaders, retry: RetryPolicy) -> Result<Self> {
        let http = reqwest::Client::builder()
            .default_headers(headers.to_header_map()?)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            retry,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn try_get(&self, url: &str, query: &[(&str, String)]) -> Result<String> {
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .context("Failed to send request")?
            .error_for_status()
            .context("Marketplace returned an error status")?;

        response.text().await.context("Failed to read response body")
    }
}

#[async_trait]
impl Fetch for Transport {
    /// GET `path` and return the body, retrying failures per the policy
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        let url = self.url(path);
        let mut attempt = 1;

        loop {
            match self.try_get(&url, query).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < self.retry.max_attempts => {
                    let delay = self.retry.delay_for_retry(attempt);
                    tracing::warn!(
                        url = %url,
                        attempt = attempt,
                        max_attempts = self.retry.max_attempts,
                        error = %e,
                        "Request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    return Err(e.context(format!(
                        "GET {} failed after {} attempts",
                        url, attempt
                    )));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_map_skips_missing() {
        let headers = RequestHeaders {
            cookie: Some("session=abc".to_string()),
            referer: None,
            user_agent: Some("typerank/0.1".to_string()),
        };
        let map = headers.to_header_map().unwrap();

        assert_eq!(map.get(COOKIE).unwrap(), "session=abc");
        assert_eq!(map.get(USER_AGENT).unwrap(), "typerank/0.1");
        assert!(map.get(REFERER).is_none());
    }

    #[test]
    fn test_header_map_rejects_control_characters() {
        let headers = RequestHeaders {
            cookie: Some("bad\nvalue".to_string()),
            ..Default::default()
        };
        assert!(headers.to_header_map().is_err());
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let transport = Transport::new(
            "https://market.example.com/",
            &RequestHeaders::default(),
            RetryPolicy::default(),
        )
        .unwrap();
        assert_eq!(
            transport.url("/market/getElemonItems"),
            "https://market.example.com/market/getElemonItems"
        );
    }
}
