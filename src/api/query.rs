//! Typed queries for the three search endpoints.
//!
//! Each query turns itself into the wire parameter list with
//! [`params`](TopHeadlinesQuery::params). The few rules the service would
//! reject anyway (page size, paging, date order, mixing `sources` with
//! `country`/`category`) are checked here so no request is wasted on them.
//! Country and category codes are passed through untouched.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest page the service will return.
pub const MAX_PAGE_SIZE: u32 = 100;

/// 2-letter country codes accepted by the top-headlines endpoint.
pub const COUNTRIES: &[&str] = &[
    "ae", "ar", "at", "au", "be", "bg", "br", "ca", "ch", "cn", "co", "cu", "cz", "de", "eg",
    "fr", "gb", "gr", "hk", "hu", "id", "ie", "il", "in", "is", "it", "jp", "kr", "lt", "lv",
    "ma", "mx", "my", "ng", "nl", "no", "nz", "ph", "pk", "pl", "pt", "ro", "rs", "ru", "sa",
    "se", "sg", "si", "sk", "th", "tr", "tw", "ua", "us", "ve", "za", "zh",
];

pub const CATEGORIES: &[&str] = &[
    "business",
    "entertainment",
    "general",
    "health",
    "science",
    "sports",
    "technology",
];

pub const LANGUAGES: &[&str] = &[
    "ar", "de", "en", "es", "fr", "he", "it", "nl", "no", "pt", "ru", "se", "ud", "zh",
];

pub const SORT_METHODS: &[&str] = &["relevancy", "popularity", "publishedAt"];

/// Ordering of `everything` results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
pub enum SortBy {
    #[serde(rename = "relevancy")]
    Relevancy,
    #[serde(rename = "popularity")]
    Popularity,
    #[serde(rename = "publishedAt")]
    #[value(name = "publishedAt", alias = "published-at")]
    PublishedAt,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Relevancy => SORT_METHODS[0],
            SortBy::Popularity => SORT_METHODS[1],
            SortBy::PublishedAt => SORT_METHODS[2],
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type Params = Vec<(&'static str, String)>;

fn push_opt(params: &mut Params, key: &'static str, value: &Option<String>) {
    if let Some(v) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        params.push((key, v.to_string()));
    }
}

fn push_list(params: &mut Params, key: &'static str, values: &[String]) {
    let joined = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(",");
    if !joined.is_empty() {
        params.push((key, joined));
    }
}

fn push_paging(params: &mut Params, page_size: Option<u32>, page: Option<u32>) -> Result<()> {
    if let Some(size) = page_size {
        if size > MAX_PAGE_SIZE {
            return Err(Error::invalid_query(format!(
                "page size {size} exceeds maximum of {MAX_PAGE_SIZE}"
            )));
        }
        params.push(("pageSize", size.to_string()));
    }
    if let Some(page) = page {
        if page == 0 {
            return Err(Error::invalid_query("page numbers start at 1"));
        }
        params.push(("page", page.to_string()));
    }
    Ok(())
}

/// Breaking headlines, optionally narrowed by keyword, country, category
/// or source.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TopHeadlinesQuery {
    pub keywords: Option<String>,
    pub sources: Vec<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub category: Option<String>,
    pub page_size: Option<u32>,
    pub page: Option<u32>,
}

impl Default for TopHeadlinesQuery {
    fn default() -> Self {
        Self {
            keywords: None,
            sources: Vec::new(),
            language: Some("en".to_string()),
            country: None,
            category: None,
            page_size: None,
            page: None,
        }
    }
}

impl TopHeadlinesQuery {
    pub fn new(keywords: impl Into<String>) -> Self {
        Self {
            keywords: Some(keywords.into()),
            ..Default::default()
        }
    }

    pub fn params(&self) -> Result<Params> {
        if !self.sources.is_empty() && (self.country.is_some() || self.category.is_some()) {
            return Err(Error::invalid_query(
                "sources cannot be combined with country or category",
            ));
        }
        let mut params = Params::new();
        push_opt(&mut params, "q", &self.keywords);
        push_list(&mut params, "sources", &self.sources);
        push_opt(&mut params, "language", &self.language);
        push_opt(&mut params, "country", &self.country);
        push_opt(&mut params, "category", &self.category);
        push_paging(&mut params, self.page_size, self.page)?;
        Ok(params)
    }
}

/// Historic search over every indexed article.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EverythingQuery {
    /// Matched against title and body.
    pub keywords: Option<String>,
    /// Matched against the title only.
    pub keywords_in_title: Option<String>,
    pub sources: Vec<String>,
    pub domains: Vec<String>,
    pub exclude_domains: Vec<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub language: Option<String>,
    pub sort_by: Option<SortBy>,
    pub page_size: Option<u32>,
    pub page: Option<u32>,
}

impl Default for EverythingQuery {
    fn default() -> Self {
        Self {
            keywords: None,
            keywords_in_title: None,
            sources: Vec::new(),
            domains: Vec::new(),
            exclude_domains: Vec::new(),
            from: None,
            to: None,
            language: Some("en".to_string()),
            sort_by: None,
            page_size: None,
            page: None,
        }
    }
}

impl EverythingQuery {
    pub fn new(keywords: impl Into<String>) -> Self {
        Self {
            keywords: Some(keywords.into()),
            ..Default::default()
        }
    }

    pub fn params(&self) -> Result<Params> {
        if let (Some(from), Some(to)) = (self.from, self.to) {
            if from > to {
                return Err(Error::invalid_query(format!(
                    "from date {from} is after to date {to}"
                )));
            }
        }
        let mut params = Params::new();
        push_opt(&mut params, "q", &self.keywords);
        push_opt(&mut params, "qInTitle", &self.keywords_in_title);
        push_list(&mut params, "sources", &self.sources);
        push_list(&mut params, "domains", &self.domains);
        push_list(&mut params, "excludeDomains", &self.exclude_domains);
        if let Some(from) = self.from {
            params.push(("from", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to {
            params.push(("to", to.format("%Y-%m-%d").to_string()));
        }
        push_opt(&mut params, "language", &self.language);
        if let Some(sort_by) = self.sort_by {
            params.push(("sortBy", sort_by.as_str().to_string()));
        }
        push_paging(&mut params, self.page_size, self.page)?;
        Ok(params)
    }
}

/// Filter for the publisher catalog.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SourcesQuery {
    pub category: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
}

impl SourcesQuery {
    pub fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        push_opt(&mut params, "category", &self.category);
        push_opt(&mut params, "language", &self.language);
        push_opt(&mut params, "country", &self.country);
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(params: &'a Params, key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_top_headlines_params() {
        let query = TopHeadlinesQuery {
            country: Some("ca".to_string()),
            category: Some("business".to_string()),
            page_size: Some(100),
            ..TopHeadlinesQuery::new("Coronavirus")
        };
        let params = query.params().unwrap();
        assert_eq!(lookup(&params, "q"), Some("Coronavirus"));
        assert_eq!(lookup(&params, "country"), Some("ca"));
        assert_eq!(lookup(&params, "category"), Some("business"));
        assert_eq!(lookup(&params, "language"), Some("en"));
        assert_eq!(lookup(&params, "pageSize"), Some("100"));
        assert_eq!(lookup(&params, "page"), None);
        assert_eq!(lookup(&params, "sources"), None);
    }

    #[test]
    fn test_page_size_limit() {
        let query = TopHeadlinesQuery {
            page_size: Some(101),
            ..TopHeadlinesQuery::new("x")
        };
        assert!(matches!(query.params(), Err(Error::InvalidQuery(_))));
    }

    #[test]
    fn test_page_zero_rejected() {
        let query = EverythingQuery {
            page: Some(0),
            ..EverythingQuery::new("x")
        };
        assert!(matches!(query.params(), Err(Error::InvalidQuery(_))));
    }

    #[test]
    fn test_sources_exclusive_with_country() {
        let query = TopHeadlinesQuery {
            sources: vec!["bbc-news".to_string()],
            country: Some("gb".to_string()),
            ..Default::default()
        };
        assert!(query.params().is_err());

        let query = TopHeadlinesQuery {
            sources: vec!["bbc-news".to_string(), " cnn ".to_string()],
            ..Default::default()
        };
        let params = query.params().unwrap();
        assert_eq!(lookup(&params, "sources"), Some("bbc-news,cnn"));
    }

    #[test]
    fn test_everything_params() {
        let query = EverythingQuery {
            keywords_in_title: Some("bitcoin".to_string()),
            domains: vec!["bbc.co.uk".to_string(), "techcrunch.com".to_string()],
            exclude_domains: vec!["example.com".to_string()],
            from: NaiveDate::from_ymd_opt(2022, 1, 1),
            to: NaiveDate::from_ymd_opt(2022, 1, 10),
            sort_by: Some(SortBy::PublishedAt),
            ..EverythingQuery::new("crypto")
        };
        let params = query.params().unwrap();
        assert_eq!(lookup(&params, "qInTitle"), Some("bitcoin"));
        assert_eq!(lookup(&params, "domains"), Some("bbc.co.uk,techcrunch.com"));
        assert_eq!(lookup(&params, "excludeDomains"), Some("example.com"));
        assert_eq!(lookup(&params, "from"), Some("2022-01-01"));
        assert_eq!(lookup(&params, "to"), Some("2022-01-10"));
        assert_eq!(lookup(&params, "sortBy"), Some("publishedAt"));
    }

    #[test]
    fn test_everything_date_order() {
        let query = EverythingQuery {
            from: NaiveDate::from_ymd_opt(2022, 2, 1),
            to: NaiveDate::from_ymd_opt(2022, 1, 1),
            ..EverythingQuery::new("x")
        };
        assert!(matches!(query.params(), Err(Error::InvalidQuery(_))));
    }

    #[test]
    fn test_blank_values_are_skipped() {
        let query = SourcesQuery {
            category: Some("  ".to_string()),
            language: Some("en".to_string()),
            country: None,
        };
        let params = query.params().unwrap();
        assert_eq!(params, vec![("language", "en".to_string())]);
    }

    #[test]
    fn test_vocabulary_constants() {
        assert!(COUNTRIES.contains(&"ca"));
        assert!(CATEGORIES.contains(&"business"));
        assert!(LANGUAGES.contains(&"en"));
        assert_eq!(SortBy::Popularity.to_string(), "popularity");
    }
}
