//! Client for the hosted news-search API.
//!
//! # Architecture
//!
//! - [`Transport`]: trait for a single authenticated GET against the service
//! - [`HttpTransport`]: `reqwest` implementation used in production
//! - [`NewsClient`]: maps typed queries onto the three endpoints and
//!   normalizes the answers
//!
//! # Failure policy
//!
//! `fetch_*` never fails: transport errors, service errors and malformed
//! envelopes are logged and turned into `None`. The `try_fetch_*` twins
//! return the underlying [`Error`]. Nothing is retried.

pub mod normalize;
pub mod query;

use crate::config::NewsApiConfig;
use crate::error::{Error, Result};
use crate::models::{ArticleSet, SourceSet};
use normalize::{articles_from_response, sources_from_response};
pub use normalize::RawResponse;
pub use query::{EverythingQuery, SortBy, SourcesQuery, TopHeadlinesQuery};
use std::fmt;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use url::Url;

const TOP_HEADLINES_PATH: &str = "v2/top-headlines";
const EVERYTHING_PATH: &str = "v2/everything";
const SOURCES_PATH: &str = "v2/top-headlines/sources";

/// A single GET against the service.
///
/// Implementors return whatever status and body they got; interpreting
/// them is left to [`normalize`].
pub trait Transport {
    async fn get(&self, url: &Url, params: &[(&'static str, String)]) -> Result<RawResponse>;
}

/// `reqwest`-backed transport carrying the API credential.
pub struct HttpTransport {
    client: reqwest::Client,
    api_key: String,
}

impl HttpTransport {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("intelligent_news/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
        })
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl Transport for HttpTransport {
    #[instrument(level = "debug", skip_all, fields(url = %url))]
    async fn get(&self, url: &Url, params: &[(&'static str, String)]) -> Result<RawResponse> {
        let t0 = Instant::now();
        let response = self
            .client
            .get(url.clone())
            .header("X-Api-Key", &self.api_key)
            .query(params)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(
            status,
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u128,
            "Received response"
        );
        Ok(RawResponse { status, body })
    }
}

/// Search client over the three service endpoints.
pub struct NewsClient<T = HttpTransport> {
    transport: T,
    base_url: Url,
}

impl NewsClient<HttpTransport> {
    /// Build the production client. The API key comes from the config.
    pub fn from_config(config: &NewsApiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| Error::invalid_query("no API key configured"))?;
        NewsClient::with_transport(HttpTransport::new(api_key)?, &config.base_url)
    }
}

impl<T> fmt::Debug for NewsClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsClient")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl<T: Transport> NewsClient<T> {
    pub fn with_transport(transport: T, base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            transport,
            base_url,
        })
    }

    async fn call(&self, path: &str, params: &[(&'static str, String)]) -> Result<RawResponse> {
        let url = self.base_url.join(path)?;
        self.transport.get(&url, params).await
    }

    #[instrument(level = "info", skip_all, fields(q = ?query.keywords))]
    pub async fn try_fetch_top_headlines(&self, query: &TopHeadlinesQuery) -> Result<ArticleSet> {
        let params = query.params()?;
        let response = self.call(TOP_HEADLINES_PATH, &params).await?;
        articles_from_response(&response)
    }

    #[instrument(level = "info", skip_all, fields(q = ?query.keywords))]
    pub async fn try_fetch_everything(&self, query: &EverythingQuery) -> Result<ArticleSet> {
        let params = query.params()?;
        let response = self.call(EVERYTHING_PATH, &params).await?;
        articles_from_response(&response)
    }

    #[instrument(level = "info", skip_all)]
    pub async fn try_fetch_sources(&self, query: &SourcesQuery) -> Result<SourceSet> {
        let params = query.params()?;
        let response = self.call(SOURCES_PATH, &params).await?;
        sources_from_response(&response)
    }

    /// Top headlines, or `None` on any failure.
    pub async fn fetch_top_headlines(&self, query: &TopHeadlinesQuery) -> Option<ArticleSet> {
        soften("top-headlines", self.try_fetch_top_headlines(query).await)
    }

    /// Historic search, or `None` on any failure.
    pub async fn fetch_everything(&self, query: &EverythingQuery) -> Option<ArticleSet> {
        soften("everything", self.try_fetch_everything(query).await)
    }

    /// Publisher catalog, or `None` on any failure.
    pub async fn fetch_sources(&self, query: &SourcesQuery) -> Option<SourceSet> {
        soften("sources", self.try_fetch_sources(query).await)
    }
}

/// Log a failed call and drop the error.
fn soften<R: Counted>(endpoint: &'static str, result: Result<R>) -> Option<R> {
    match result {
        Ok(r) => {
            info!(endpoint, count = r.count(), "Fetched results");
            Some(r)
        }
        Err(e) => {
            warn!(endpoint, kind = e.kind(), error = %e, "Request failed; returning no results");
            None
        }
    }
}

trait Counted {
    fn count(&self) -> usize;
}

impl Counted for ArticleSet {
    fn count(&self) -> usize {
        self.len()
    }
}

impl Counted for SourceSet {
    fn count(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Replays a fixed answer (or a 503 when `None`) and records what was asked.
    struct Canned {
        response: Option<RawResponse>,
        seen: RefCell<Vec<(String, Vec<(&'static str, String)>)>>,
    }

    impl Canned {
        fn ok(body: &str) -> Self {
            Self {
                response: Some(RawResponse::ok(body)),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                response: None,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for Canned {
        async fn get(&self, url: &Url, params: &[(&'static str, String)]) -> Result<RawResponse> {
            self.seen
                .borrow_mut()
                .push((url.to_string(), params.to_vec()));
            self.response.clone().ok_or_else(|| Error::Status {
                status: 503,
                body: "unavailable".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_endpoint_urls() {
        let client =
            NewsClient::with_transport(Canned::ok(r#"{"articles":[]}"#), "https://newsapi.org")
                .unwrap();
        client
            .fetch_top_headlines(&TopHeadlinesQuery::new("a"))
            .await
            .unwrap();
        client
            .fetch_everything(&EverythingQuery::new("b"))
            .await
            .unwrap();
        let seen = client.transport.seen.borrow();
        assert_eq!(seen[0].0, "https://newsapi.org/v2/top-headlines");
        assert_eq!(seen[1].0, "https://newsapi.org/v2/everything");
    }

    #[tokio::test]
    async fn test_sources_endpoint_with_prefix() {
        let client = NewsClient::with_transport(
            Canned::ok(r#"{"sources":[]}"#),
            "http://localhost:8080/proxy",
        )
        .unwrap();
        let sources = client.fetch_sources(&SourcesQuery::default()).await.unwrap();
        assert!(sources.is_empty());
        let seen = client.transport.seen.borrow();
        assert_eq!(seen[0].0, "http://localhost:8080/proxy/v2/top-headlines/sources");
    }

    #[tokio::test]
    async fn test_transport_failure_is_absent() {
        let client = NewsClient::with_transport(Canned::failing(), "https://newsapi.org").unwrap();
        assert!(
            client
                .fetch_top_headlines(&TopHeadlinesQuery::new("x"))
                .await
                .is_none()
        );
        assert!(matches!(
            client.try_fetch_sources(&SourcesQuery::default()).await,
            Err(Error::Status { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_invalid_query_skips_network() {
        let client =
            NewsClient::with_transport(Canned::ok(r#"{"articles":[]}"#), "https://newsapi.org")
                .unwrap();
        let query = TopHeadlinesQuery {
            page_size: Some(500),
            ..TopHeadlinesQuery::new("x")
        };
        assert!(client.fetch_top_headlines(&query).await.is_none());
        assert!(client.transport.seen.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_missing_field_is_absent_for_every_endpoint() {
        let client =
            NewsClient::with_transport(Canned::ok(r#"{"status":"ok"}"#), "https://newsapi.org")
                .unwrap();
        assert!(client.fetch_top_headlines(&TopHeadlinesQuery::new("x")).await.is_none());
        assert!(client.fetch_everything(&EverythingQuery::new("x")).await.is_none());
        assert!(client.fetch_sources(&SourcesQuery::default()).await.is_none());
    }

    #[test]
    fn test_from_config_requires_key() {
        let config = NewsApiConfig {
            api_key: None,
            ..Default::default()
        };
        assert!(NewsClient::from_config(&config).is_err());
    }

    #[test]
    fn test_bad_base_url() {
        assert!(matches!(
            NewsClient::with_transport(Canned::ok("{}"), "not a url"),
            Err(Error::Url(_))
        ));
    }
}
