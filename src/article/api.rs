use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::constants::article::REQUEST_TIMEOUT_SECS;
use crate::error::{Error, Result};

/// Shape of the article JSON; only the HTML body is used.
#[derive(Debug, Deserialize)]
struct ArticlePayload {
    #[serde(default)]
    body: Option<String>,
}

/// Client for fetching article JSON over HTTP
#[derive(Clone)]
pub struct ArticleClient {
    client: Client,
}

impl Default for ArticleClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleClient {
    /// Create a new client with the standard request timeout
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Fetch the article at `url` and return its raw HTML body.
    ///
    /// A payload without a `body` field yields an empty string.
    pub async fn fetch_body(&self, url: &str) -> Result<String> {
        tracing::info!("Fetching article from {url}");

        let resp = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request to {url} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::article_status(
                format!("Request to {url} returned {status}"),
                status.as_u16(),
            ));
        }

        let text = resp
            .text()
            .await
            .map_err(|e| Error::Network(format!("Reading response from {url} failed: {e}")))?;

        parse_article_body(&text, url)
    }
}

/// Pull the HTML body out of an article JSON document.
pub fn parse_article_body(json: &str, source_name: &str) -> Result<String> {
    let payload: ArticlePayload = serde_json::from_str(json)
        .map_err(|e| Error::parse(format!("Invalid article JSON: {e}"), source_name))?;

    let body = payload.body.unwrap_or_default();
    if body.is_empty() {
        tracing::warn!("Article from {source_name} has no body");
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_parse_body_field() {
        let json = r#"{"id": 12905218, "title": "News", "body": "<p>Hello there</p>"}"#;
        let body = parse_article_body(json, "test").unwrap();
        assert_eq!(body, "<p>Hello there</p>");
    }

    #[test]
    fn test_missing_body_is_empty() {
        assert_eq!(parse_article_body(r#"{"title": "x"}"#, "test").unwrap(), "");
        assert_eq!(parse_article_body(r#"{"body": null}"#, "test").unwrap(), "");
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = parse_article_body("<html>not json</html>", "https://example.com").unwrap_err();
        match err {
            Error::Parse { source_name, .. } => assert_eq!(source_name, "https://example.com"),
            other => panic!("Expected parse error, got {other:?}"),
        }
    }
}
