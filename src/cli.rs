//! Command-line interface definitions for intelligent_news.
//!
//! This module defines the CLI arguments and subcommands using the `clap`
//! crate. The API key can also come from the environment.

use crate::api::query::{CATEGORIES, COUNTRIES, LANGUAGES};
use crate::api::{EverythingQuery, SortBy, SourcesQuery, TopHeadlinesQuery};
use crate::models::TextField;
use chrono::NaiveDate;
use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the intelligent_news application.
///
/// # Examples
///
/// ```sh
/// # Canadian business headlines about the pandemic
/// intelligent_news headlines --keywords Coronavirus --country ca --category business --page-size 100
///
/// # Same, featurizing each story's content and saving JSON
/// intelligent_news -o ./out headlines --keywords Coronavirus --country ca --featurize
///
/// # Featurize text from stdin
/// echo "Apple released a new phone today." | intelligent_news featurize -
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// News service API key
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Optional path to config.yaml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Also write results as JSON under this directory
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Breaking headlines
    Headlines(HeadlinesArgs),
    /// Search every indexed article
    Everything(EverythingArgs),
    /// List publishers
    Sources(SourcesArgs),
    /// Featurize a single text
    Featurize {
        /// Text to analyze, or `-` to read stdin
        text: String,
    },
}

/// Options shared by the two article searches.
#[derive(Args, Debug, Clone)]
pub struct ResultArgs {
    #[arg(long, value_parser = PossibleValuesParser::new(LANGUAGES.iter().copied()), default_value = "en")]
    pub language: String,

    /// Results per page (at most 100)
    #[arg(long)]
    pub page_size: Option<u32>,

    #[arg(long)]
    pub page: Option<u32>,

    /// Print body and URL of the article at this row
    #[arg(long, conflicts_with = "inspect_title")]
    pub inspect: Option<usize>,

    /// Print body and URL of the article with exactly this title
    #[arg(long)]
    pub inspect_title: Option<String>,

    /// Featurize every returned article
    #[arg(long)]
    pub featurize: bool,

    /// Article field to featurize (defaults to the configured field)
    #[arg(long, value_enum)]
    pub field: Option<TextField>,
}

#[derive(Args, Debug, Clone)]
pub struct HeadlinesArgs {
    #[arg(short, long)]
    pub keywords: Option<String>,

    #[arg(long, value_parser = PossibleValuesParser::new(COUNTRIES.iter().copied()))]
    pub country: Option<String>,

    #[arg(long, value_parser = PossibleValuesParser::new(CATEGORIES.iter().copied()))]
    pub category: Option<String>,

    /// Comma-separated source ids
    #[arg(long, value_delimiter = ',')]
    pub sources: Vec<String>,

    #[command(flatten)]
    pub results: ResultArgs,
}

impl HeadlinesArgs {
    pub fn query(&self) -> TopHeadlinesQuery {
        TopHeadlinesQuery {
            keywords: self.keywords.clone(),
            sources: self.sources.clone(),
            language: Some(self.results.language.clone()),
            country: self.country.clone(),
            category: self.category.clone(),
            page_size: self.results.page_size,
            page: self.results.page,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct EverythingArgs {
    /// Matched against title and body
    #[arg(short, long)]
    pub keywords: Option<String>,

    /// Matched against the title only
    #[arg(long)]
    pub title_keywords: Option<String>,

    #[arg(long, value_delimiter = ',')]
    pub sources: Vec<String>,

    #[arg(long, value_delimiter = ',')]
    pub domains: Vec<String>,

    #[arg(long, value_delimiter = ',')]
    pub exclude_domains: Vec<String>,

    /// Oldest publish date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Newest publish date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    #[arg(long, value_enum)]
    pub sort_by: Option<SortBy>,

    #[command(flatten)]
    pub results: ResultArgs,
}

impl EverythingArgs {
    pub fn query(&self) -> EverythingQuery {
        EverythingQuery {
            keywords: self.keywords.clone(),
            keywords_in_title: self.title_keywords.clone(),
            sources: self.sources.clone(),
            domains: self.domains.clone(),
            exclude_domains: self.exclude_domains.clone(),
            from: self.from,
            to: self.to,
            language: Some(self.results.language.clone()),
            sort_by: self.sort_by,
            page_size: self.results.page_size,
            page: self.results.page,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct SourcesArgs {
    #[arg(long, value_parser = PossibleValuesParser::new(CATEGORIES.iter().copied()))]
    pub category: Option<String>,

    #[arg(long, value_parser = PossibleValuesParser::new(LANGUAGES.iter().copied()))]
    pub language: Option<String>,

    #[arg(long, value_parser = PossibleValuesParser::new(COUNTRIES.iter().copied()))]
    pub country: Option<String>,
}

impl SourcesArgs {
    pub fn query(&self) -> SourcesQuery {
        SourcesQuery {
            category: self.category.clone(),
            language: self.language.clone(),
            country: self.country.clone(),
        }
    }
}
