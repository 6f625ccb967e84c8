//! Text featurization.
//!
//! A [`Featurizer`] runs three independent analyzers over one text and folds
//! their answers into a [`FeatureRecord`]:
//!
//! - [`SentimentAnalyzer`]: polarity, subjectivity and noun phrases
//! - [`KeywordExtractor`]: ranked key phrases
//! - [`Tagger`]: part-of-speech tags and named entities
//!
//! The analyzers are built once into an [`Analyzers`] value and are only
//! read afterwards. The default set is [`LexiconSentiment`],
//! [`YakeExtractor`] and [`RuleTagger`]; any of them can be swapped for
//! another implementation of the trait.

pub mod keywords;
pub mod lexicon;
pub mod sentiment;
pub mod tagger;
pub mod tokenizer;

pub use keywords::YakeExtractor;
pub use sentiment::LexiconSentiment;
pub use tagger::RuleTagger;

use crate::config::FeaturizerConfig;
use crate::error::Result;
use crate::models::{ArticleSet, EntityLabel, FeatureRecord, FeaturizedArticle, TextField};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// One tagged token.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedToken {
    pub text: String,
    /// Penn Treebank tag (`NN`, `VBD`, `NNP`, ...).
    pub tag: &'static str,
    pub start: usize,
    pub end: usize,
    pub sentence: usize,
}

/// A recognised entity span.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}

/// Output of a [`Tagger`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaggedDoc {
    pub tokens: Vec<TaggedToken>,
    pub entities: Vec<Entity>,
}

/// Output of a [`SentimentAnalyzer`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sentiment {
    /// -1.0 (negative) ..= 1.0 (positive)
    pub polarity: f64,
    /// 0.0 (objective) ..= 1.0 (subjective)
    pub subjectivity: f64,
    pub noun_phrases: Vec<String>,
}

pub trait Tagger: Send + Sync {
    fn tag(&self, text: &str) -> Result<TaggedDoc>;
}

pub trait SentimentAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<Sentiment>;
}

/// Ranked key phrases; lower scores are more relevant.
pub trait KeywordExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Result<Vec<(String, f64)>>;
}

/// The analyzer instances shared by every featurization.
pub struct Analyzers {
    pub tagger: Arc<dyn Tagger>,
    pub sentiment: Box<dyn SentimentAnalyzer>,
    pub keywords: Box<dyn KeywordExtractor>,
}

impl Analyzers {
    pub fn new(
        tagger: Arc<dyn Tagger>,
        sentiment: Box<dyn SentimentAnalyzer>,
        keywords: Box<dyn KeywordExtractor>,
    ) -> Self {
        Self {
            tagger,
            sentiment,
            keywords,
        }
    }

    /// Build the default analyzers. The sentiment analyzer reuses the tagger
    /// for noun-phrase chunking.
    pub fn from_config(config: &FeaturizerConfig) -> Self {
        let tagger: Arc<dyn Tagger> = Arc::new(RuleTagger::new(config.max_text_length));
        Self {
            sentiment: Box::new(LexiconSentiment::new(Arc::clone(&tagger))),
            keywords: Box::new(YakeExtractor::new(config.keywords.clone())),
            tagger,
        }
    }
}

impl std::fmt::Debug for Analyzers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzers").finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct Featurizer {
    analyzers: Analyzers,
}

impl Featurizer {
    pub fn new(analyzers: Analyzers) -> Self {
        Self { analyzers }
    }

    pub fn from_config(config: &FeaturizerConfig) -> Self {
        Self::new(Analyzers::from_config(config))
    }

    /// Featurize one text, propagating the first analyzer error.
    ///
    /// # Arguments
    /// * `text` - Raw text; blank text gives an empty record.
    ///
    /// # Returns
    /// * `Ok(FeatureRecord)` with all seven features filled
    /// * `Err(Error::Analyzer)` if any analyzer failed
    #[instrument(level = "debug", skip_all, fields(chars = text.chars().count()))]
    pub fn try_featurize(&self, text: &str) -> Result<FeatureRecord> {
        if text.trim().is_empty() {
            return Ok(FeatureRecord::default());
        }
        let t0 = Instant::now();

        let sentiment = self.analyzers.sentiment.analyze(text)?;
        let keywords = self.analyzers.keywords.extract(text)?;
        let doc = self.analyzers.tagger.tag(text)?;

        let mut record = FeatureRecord {
            polarity: sentiment.polarity,
            subjectivity: sentiment.subjectivity,
            noun_phrases: sentiment.noun_phrases,
            keywords,
            ..Default::default()
        };
        for entity in doc.entities {
            record.named_entities.insert(entity.text, entity.label);
        }
        for token in doc.tokens {
            if token.tag.starts_with("NN") {
                record.nouns.insert(token.text, token.tag.to_string());
            } else if token.tag.starts_with("VB") {
                record.verbs.insert(token.text, token.tag.to_string());
            }
        }

        debug!(
            entities = record.named_entities.len(),
            nouns = record.nouns.len(),
            verbs = record.verbs.len(),
            keywords = record.keywords.len(),
            elapsed_ms = t0.elapsed().as_millis() as u128,
            "Featurized text"
        );
        Ok(record)
    }

    /// Featurize one text; failures are logged and give `None`.
    pub fn featurize(&self, text: &str) -> Option<FeatureRecord> {
        match self.try_featurize(text) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(kind = e.kind(), error = %e, "Featurization failed");
                None
            }
        }
    }

    /// Featurize the chosen field of every article, in order.
    ///
    /// Rows are independent: a row with no text for `field`, or whose
    /// featurization fails, gets `features = None`.
    #[instrument(level = "info", skip_all, fields(articles = set.len(), field = ?field))]
    pub fn featurize_results(&self, set: &ArticleSet, field: TextField) -> Vec<FeaturizedArticle> {
        let t0 = Instant::now();
        let rows: Vec<FeaturizedArticle> = set
            .iter()
            .enumerate()
            .map(|(index, article)| FeaturizedArticle {
                index,
                title: article.title.clone(),
                url: article.url.clone(),
                features: article
                    .text(field)
                    .and_then(|text| self.featurize(&text)),
            })
            .collect();
        let featurized = rows.iter().filter(|r| r.features.is_some()).count();
        info!(
            featurized,
            skipped = rows.len() - featurized,
            elapsed_ms = t0.elapsed().as_millis() as u128,
            "Batch featurization finished"
        );
        rows
    }
}
