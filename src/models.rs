//! Data models for search results and text features.
//!
//! - [`Article`] / [`ArticleSet`]: normalized results of the headline and
//!   everything searches, in service order
//! - [`Source`] / [`SourceSet`]: the publisher catalog
//! - [`FeatureRecord`]: everything the featurizer derives from one text
//! - [`FeaturizedArticle`]: one row of a batch featurization
//!
//! Article and source fields mirror the service's JSON (camelCase on the
//! wire). Every field the service may send as `null` is an `Option`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The publisher reference embedded in each article.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// One normalized search result.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// `null` on the wire reads as an empty source.
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: ArticleSource,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub url_to_image: Option<String>,
    /// The publish time exactly as the service sent it.
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    /// Structured timestamp derived from `published_at`; `None` when absent
    /// or unparseable.
    #[serde(default, skip_deserializing)]
    pub date: Option<DateTime<Utc>>,
}

impl Article {
    /// Fill in [`Article::date`] from the raw publish string.
    pub fn with_parsed_date(mut self) -> Self {
        self.date = self.published_at.as_deref().and_then(parse_timestamp);
        self
    }

    /// The text this article contributes for the given field, if any.
    pub fn text(&self, field: TextField) -> Option<String> {
        let pick = |s: &Option<String>| {
            s.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        match field {
            TextField::Title => pick(&self.title),
            TextField::Description => pick(&self.description),
            TextField::Content => pick(&self.content),
            TextField::Combined => {
                let parts: Vec<String> = [&self.title, &self.description, &self.content]
                    .into_iter()
                    .filter_map(pick)
                    .collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join("\n\n"))
                }
            }
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a service publish-time string.
///
/// The service sends RFC 3339 (`2022-01-10T14:03:00Z`), but older items
/// sometimes drop the offset or the time entirely; those are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Articles returned by one search, in the order the service sent them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArticleSet {
    /// Total matches reported by the service (may exceed `articles.len()`).
    pub total_results: u64,
    pub articles: Vec<Article>,
}

impl ArticleSet {
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Article> {
        self.articles.iter()
    }

    /// First article whose title matches exactly.
    pub fn find_by_title(&self, title: &str) -> Option<&Article> {
        self.articles
            .iter()
            .find(|a| a.title.as_deref() == Some(title))
    }
}

/// A publisher from the service's catalog.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Source {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SourceSet {
    pub sources: Vec<Source>,
}

impl SourceSet {
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Which part of an article gets featurized in a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TextField {
    Title,
    Description,
    #[default]
    Content,
    /// Title, description and content joined by blank lines.
    Combined,
}

/// Semantic category of a named entity.
///
/// Labels follow the OntoNotes names used by most English NER models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    Person,
    Norp,
    Org,
    Gpe,
    Loc,
    Date,
    Time,
    Money,
    Percent,
    Ordinal,
    Cardinal,
}

impl EntityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Norp => "NORP",
            EntityLabel::Org => "ORG",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Loc => "LOC",
            EntityLabel::Date => "DATE",
            EntityLabel::Time => "TIME",
            EntityLabel::Money => "MONEY",
            EntityLabel::Percent => "PERCENT",
            EntityLabel::Ordinal => "ORDINAL",
            EntityLabel::Cardinal => "CARDINAL",
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Features derived from a single text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeatureRecord {
    /// Entity text -> label; a repeated entity keeps its last label.
    pub named_entities: BTreeMap<String, EntityLabel>,
    /// Noun token -> Penn Treebank tag (`NN*`); last occurrence wins.
    pub nouns: BTreeMap<String, String>,
    /// Verb token -> Penn Treebank tag (`VB*`); last occurrence wins.
    pub verbs: BTreeMap<String, String>,
    /// -1.0 (negative) to 1.0 (positive).
    pub polarity: f64,
    /// 0.0 (objective) to 1.0 (subjective).
    pub subjectivity: f64,
    /// Lowercased noun phrases, first-seen order, no duplicates.
    pub noun_phrases: Vec<String>,
    /// Keyword phrases with their score, most relevant (lowest) first.
    pub keywords: Vec<(String, f64)>,
}

impl FeatureRecord {
    /// True for the record produced from empty text.
    pub fn is_empty(&self) -> bool {
        self.named_entities.is_empty()
            && self.nouns.is_empty()
            && self.verbs.is_empty()
            && self.noun_phrases.is_empty()
            && self.keywords.is_empty()
            && self.polarity == 0.0
            && self.subjectivity == 0.0
    }
}

/// One row of a batch featurization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturizedArticle {
    /// Position of the article in its [`ArticleSet`].
    pub index: usize,
    pub title: Option<String>,
    pub url: Option<String>,
    /// `None` when the article had no text for the chosen field or
    /// featurization failed.
    pub features: Option<FeatureRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    fn article_json() -> &'static str {
        r#"{
            "source": {"id": "cbc-news", "name": "CBC News"},
            "author": null,
            "title": "Markets rally",
            "description": "Stocks climbed on Monday.",
            "url": "https://example.com/markets",
            "urlToImage": null,
            "publishedAt": "2022-01-10T14:03:00Z",
            "content": "Stocks climbed on Monday as investors cheered."
        }"#
    }

    #[test]
    fn test_article_deserialization() {
        let article: Article = serde_json::from_str(article_json()).unwrap();
        assert_eq!(article.source.id.as_deref(), Some("cbc-news"));
        assert_eq!(article.title.as_deref(), Some("Markets rally"));
        assert_eq!(article.author, None);
        assert_eq!(article.date, None);
        assert_eq!(article.published_at.as_deref(), Some("2022-01-10T14:03:00Z"));
    }

    #[test]
    fn test_article_date_is_derived() {
        let article: Article = serde_json::from_str(article_json()).unwrap();
        let article = article.with_parsed_date();
        let date = article.date.unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2022, 1, 10, 14, 3, 0).unwrap());
    }

    #[test]
    fn test_article_missing_fields_default() {
        let article: Article = serde_json::from_str("{}").unwrap();
        assert_eq!(article.source, ArticleSource::default());
        assert!(article.with_parsed_date().date.is_none());
    }

    #[test]
    fn test_article_null_source() {
        let article: Article =
            serde_json::from_str(r#"{"source": null, "title": "Orphan"}"#).unwrap();
        assert_eq!(article.source, ArticleSource::default());
        assert_eq!(article.title.as_deref(), Some("Orphan"));
    }

    #[test]
    fn test_parse_timestamp_round_trip() {
        for raw in [
            "2022-01-10T14:03:00Z",
            "2022-01-10T14:03:00.123Z",
            "2022-01-10T09:03:00-05:00",
        ] {
            let parsed = parse_timestamp(raw).unwrap();
            let formatted = parsed.to_rfc3339();
            assert_eq!(parse_timestamp(&formatted), Some(parsed), "{raw}");
        }
    }

    #[test]
    fn test_parse_timestamp_offset_normalized() {
        let a = parse_timestamp("2022-01-10T09:03:00-05:00").unwrap();
        let b = parse_timestamp("2022-01-10T14:03:00Z").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_timestamp_fallbacks() {
        let naive = parse_timestamp("2022-01-10T14:03:00").unwrap();
        assert_eq!(naive.hour(), 14);
        let day = parse_timestamp("2022-01-10").unwrap();
        assert_eq!(day.day(), 10);
        assert_eq!(day.hour(), 0);
        assert!(parse_timestamp("yesterday-ish").is_none());
    }

    #[test]
    fn test_article_text_fields() {
        let article: Article = serde_json::from_str(article_json()).unwrap();
        assert_eq!(article.text(TextField::Title).as_deref(), Some("Markets rally"));
        assert_eq!(
            article.text(TextField::Combined).unwrap(),
            "Markets rally\n\nStocks climbed on Monday.\n\nStocks climbed on Monday as investors cheered."
        );
        let blank = Article {
            content: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(blank.text(TextField::Content), None);
        assert_eq!(blank.text(TextField::Combined), None);
    }

    #[test]
    fn test_entity_label_serialization() {
        let json = serde_json::to_string(&EntityLabel::Org).unwrap();
        assert_eq!(json, "\"ORG\"");
        assert_eq!(EntityLabel::Gpe.to_string(), "GPE");
    }

    #[test]
    fn test_default_feature_record_is_empty() {
        assert!(FeatureRecord::default().is_empty());
    }

    #[test]
    fn test_find_by_title() {
        let set = ArticleSet {
            total_results: 2,
            articles: vec![
                Article {
                    title: Some("One".to_string()),
                    ..Default::default()
                },
                Article {
                    title: Some("Two".to_string()),
                    url: Some("https://example.com/2".to_string()),
                    ..Default::default()
                },
            ],
        };
        assert_eq!(
            set.find_by_title("Two").and_then(|a| a.url.as_deref()),
            Some("https://example.com/2")
        );
        assert!(set.find_by_title("Three").is_none());
    }
}
