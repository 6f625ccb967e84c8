//! Runtime configuration.
//!
//! Settings come from an optional YAML file; CLI flags and environment
//! variables are applied on top in `main`. Every field has a default so an
//! empty or partial file is valid:
//!
//! ```yaml
//! news:
//!   base_url: https://newsapi.org
//!   api_key: "..."
//! featurizer:
//!   max_text_length: 1000000
//!   text_field: content
//!   keywords:
//!     max_ngram: 3
//!     top_n: 20
//!     dedup_threshold: 0.9
//!     window: 1
//! ```

use crate::error::{Error, Result};
use crate::models::TextField;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, instrument};

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub news: NewsApiConfig,
    pub featurizer: FeaturizerConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NewsApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl Default for NewsApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FeaturizerConfig {
    /// Texts longer than this many characters are rejected by the tagger.
    pub max_text_length: usize,
    /// Article field featurized in batch runs.
    pub text_field: TextField,
    pub keywords: KeywordConfig,
}

impl Default for FeaturizerConfig {
    fn default() -> Self {
        Self {
            max_text_length: 1_000_000,
            text_field: TextField::Content,
            keywords: KeywordConfig::default(),
        }
    }
}

/// Tuning for the keyword extractor.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Longest candidate phrase, in words.
    pub max_ngram: usize,
    /// How many phrases to keep.
    pub top_n: usize,
    /// Candidates at least this similar to a better one are dropped.
    pub dedup_threshold: f64,
    /// Co-occurrence window, in words.
    pub window: usize,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            max_ngram: 3,
            top_n: 20,
            dedup_threshold: 0.9,
            window: 1,
        }
    }
}

impl Config {
    /// Parse a YAML document and check the values make sense.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path.as_ref()).await?;
        let config = Self::from_yaml(&raw)?;
        info!("Loaded configuration");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let kw = &self.featurizer.keywords;
        if kw.max_ngram == 0 || kw.window == 0 {
            return Err(config_error("keywords.max_ngram and keywords.window must be at least 1"));
        }
        if !(0.0..=1.0).contains(&kw.dedup_threshold) {
            return Err(config_error("keywords.dedup_threshold must be within 0.0..=1.0"));
        }
        if self.featurizer.max_text_length == 0 {
            return Err(config_error("featurizer.max_text_length must be positive"));
        }
        Ok(())
    }
}

fn config_error(message: &str) -> Error {
    Error::Config(serde::de::Error::custom(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.news.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.featurizer.keywords.top_n, 20);
        assert_eq!(config.featurizer.text_field, TextField::Content);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_yaml() {
        let config = Config::from_yaml(
            "featurizer:\n  text_field: combined\n  keywords:\n    top_n: 5\n",
        )
        .unwrap();
        assert_eq!(config.featurizer.text_field, TextField::Combined);
        assert_eq!(config.featurizer.keywords.top_n, 5);
        assert_eq!(config.featurizer.keywords.max_ngram, 3);
        assert_eq!(config.news, NewsApiConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Config::from_yaml("featurizer:\n  keywords:\n    max_ngram: 0\n").is_err());
        assert!(Config::from_yaml("featurizer:\n  keywords:\n    dedup_threshold: 1.5\n").is_err());
        assert!(matches!(
            Config::from_yaml("news: [1, 2"),
            Err(Error::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "news:\n  base_url: http://localhost:9000\n  api_key: secret").unwrap();
        let config = Config::load(file.path()).await.unwrap();
        assert_eq!(config.news.base_url, "http://localhost:9000");
        assert_eq!(config.news.api_key.as_deref(), Some("secret"));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = Config::load("/definitely/not/here.yaml").await.unwrap_err();
        assert_eq!(err.kind(), "io");
    }
}
