//! # intelligent_news
//!
//! Search a hosted news API and derive text features from the stories it
//! returns.
//!
//! ## Features
//!
//! - Typed queries for top headlines, the full article archive and the
//!   publisher catalog ([`api`])
//! - Fail-soft fetches: a failed search is logged and yields `None`
//! - A text featurizer ([`nlp`]) producing sentiment, nouns, verbs, named
//!   entities, noun phrases and ranked keyword phrases
//! - Batch featurization of whole result sets
//! - Plain-text tables and dated JSON files ([`outputs`])
//!
//! ## Example
//!
//! ```no_run
//! use intelligent_news::api::{NewsClient, TopHeadlinesQuery};
//! use intelligent_news::config::Config;
//! use intelligent_news::nlp::Featurizer;
//!
//! # async fn run() -> intelligent_news::error::Result<()> {
//! let config = Config::default();
//! let client = NewsClient::from_config(&config.news)?;
//! let query = TopHeadlinesQuery {
//!     country: Some("ca".into()),
//!     category: Some("business".into()),
//!     page_size: Some(100),
//!     ..TopHeadlinesQuery::new("Coronavirus")
//! };
//! if let Some(set) = client.fetch_top_headlines(&query).await {
//!     let featurizer = Featurizer::from_config(&config.featurizer);
//!     let rows = featurizer.featurize_results(&set, config.featurizer.text_field);
//!     println!("{} featurized", rows.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod nlp;
pub mod outputs;
pub mod utils;
