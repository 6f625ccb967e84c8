//! Envelope decoding: service JSON -> [`ArticleSet`] / [`SourceSet`].
//!
//! The service wraps every answer in `{"status": ..., <list field>: [...]}`.
//! An error answer carries `code` and `message` instead of the list.

use crate::error::{Error, Result};
use crate::models::{Article, ArticleSet, Source, SourceSet};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    total_results: Option<u64>,
    #[serde(default)]
    articles: Option<Vec<Article>>,
    #[serde(default)]
    sources: Option<Vec<Source>>,
}

/// The raw answer of a transport call.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

fn decode_envelope(response: &RawResponse) -> Result<Envelope> {
    let envelope: Envelope = match serde_json::from_str(&response.body) {
        Ok(envelope) => envelope,
        Err(_) if !response.is_success() => {
            return Err(Error::Status {
                status: response.status,
                body: crate::utils::truncate_for_log(&response.body, 300),
            });
        }
        Err(e) => {
            debug!(
                truncated = crate::utils::looks_truncated(&e),
                body = %crate::utils::truncate_for_log(&response.body, 300),
                "Response body is not a JSON envelope"
            );
            return Err(e.into());
        }
    };

    if envelope.status.as_deref() == Some("error") {
        return Err(Error::Api {
            code: envelope.code.clone().unwrap_or_else(|| "unknown".to_string()),
            message: envelope.message.clone().unwrap_or_default(),
        });
    }
    if !response.is_success() {
        return Err(Error::Status {
            status: response.status,
            body: crate::utils::truncate_for_log(&response.body, 300),
        });
    }
    Ok(envelope)
}

/// Decode an article-bearing answer and derive each article's timestamp.
pub fn articles_from_response(response: &RawResponse) -> Result<ArticleSet> {
    let envelope = decode_envelope(response)?;
    let articles = envelope.articles.ok_or(Error::MissingField("articles"))?;
    let articles: Vec<Article> = articles
        .into_iter()
        .map(Article::with_parsed_date)
        .collect();
    let unparsed = articles
        .iter()
        .filter(|a| a.published_at.is_some() && a.date.is_none())
        .count();
    if unparsed > 0 {
        debug!(unparsed, "Some publish times could not be parsed");
    }
    Ok(ArticleSet {
        total_results: envelope.total_results.unwrap_or(articles.len() as u64),
        articles,
    })
}

/// Decode a publisher catalog answer.
pub fn sources_from_response(response: &RawResponse) -> Result<SourceSet> {
    let envelope = decode_envelope(response)?;
    let sources = envelope.sources.ok_or(Error::MissingField("sources"))?;
    Ok(SourceSet { sources })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ARTICLES: &str = r#"{
        "status": "ok",
        "totalResults": 2,
        "articles": [
            {"source": {"id": null, "name": "Globe"}, "title": "First", "publishedAt": "2022-01-10T14:03:00Z", "url": "https://example.com/1"},
            {"source": {"id": "cbc", "name": "CBC"}, "title": "Second", "publishedAt": "2022-01-09T08:00:00Z", "url": "https://example.com/2"}
        ]
    }"#;

    #[test]
    fn test_articles_keep_order_and_dates() {
        let set = articles_from_response(&RawResponse::ok(TWO_ARTICLES)).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.total_results, 2);
        assert_eq!(set.articles[0].title.as_deref(), Some("First"));
        assert_eq!(set.articles[1].title.as_deref(), Some("Second"));
        assert!(set.iter().all(|a| a.date.is_some()));
    }

    #[test]
    fn test_missing_articles_field() {
        let err = articles_from_response(&RawResponse::ok(r#"{"status": "ok"}"#)).unwrap_err();
        assert!(matches!(err, Error::MissingField("articles")));
    }

    #[test]
    fn test_empty_envelope() {
        let err = articles_from_response(&RawResponse::ok("{}")).unwrap_err();
        assert!(matches!(err, Error::MissingField(_)));
        let err = sources_from_response(&RawResponse::ok("{}")).unwrap_err();
        assert!(matches!(err, Error::MissingField("sources")));
    }

    #[test]
    fn test_null_articles_is_missing() {
        let err =
            articles_from_response(&RawResponse::ok(r#"{"status":"ok","articles":null}"#))
                .unwrap_err();
        assert!(matches!(err, Error::MissingField("articles")));
    }

    #[test]
    fn test_empty_article_list_is_empty_set() {
        let set = articles_from_response(&RawResponse::ok(
            r#"{"status":"ok","totalResults":0,"articles":[]}"#,
        ))
        .unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_unparseable_date_only_affects_row() {
        let body = r#"{"status":"ok","articles":[
            {"title":"bad","publishedAt":"not a date"},
            {"title":"good","publishedAt":"2022-01-10T14:03:00Z"}
        ]}"#;
        let set = articles_from_response(&RawResponse::ok(body)).unwrap();
        assert!(set.articles[0].date.is_none());
        assert!(set.articles[1].date.is_some());
        assert_eq!(set.total_results, 2);
    }

    #[test]
    fn test_null_source_only_affects_row() {
        let body = r#"{"status":"ok","articles":[
            {"source":null,"title":"orphan"},
            {"source":{"id":"cbc","name":"CBC"},"title":"named"}
        ]}"#;
        let set = articles_from_response(&RawResponse::ok(body)).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.articles[0].source.name, None);
        assert_eq!(set.articles[1].source.name.as_deref(), Some("CBC"));
    }

    #[test]
    fn test_service_error_envelope() {
        let response = RawResponse {
            status: 401,
            body: r#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid."}"#
                .to_string(),
        };
        match articles_from_response(&response).unwrap_err() {
            Error::Api { code, message } => {
                assert_eq!(code, "apiKeyInvalid");
                assert_eq!(message, "Your API key is invalid.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_json_error_status() {
        let response = RawResponse {
            status: 502,
            body: "<html>Bad gateway</html>".to_string(),
        };
        assert!(matches!(
            articles_from_response(&response).unwrap_err(),
            Error::Status { status: 502, .. }
        ));
    }

    #[test]
    fn test_malformed_success_body() {
        let err = articles_from_response(&RawResponse::ok("[1, 2")).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_sources_decoded() {
        let body = r#"{"status":"ok","sources":[
            {"id":"abc-news","name":"ABC News","description":"d","url":"https://abcnews.go.com","category":"general","language":"en","country":"us"}
        ]}"#;
        let set = sources_from_response(&RawResponse::ok(body)).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.sources[0].country.as_deref(), Some("us"));
    }
}
