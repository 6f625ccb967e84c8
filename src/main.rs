//! # intelligent_news
//!
//! Command-line front end: search the news service, print the results as a
//! table, optionally inspect one story, featurize the results and save them
//! as JSON.
//!
//! ## Usage
//!
//! ```sh
//! intelligent_news headlines --keywords Coronavirus --country ca --category business
//! intelligent_news everything -k bitcoin --sort-by publishedAt --featurize
//! intelligent_news sources --country ca
//! intelligent_news featurize "Apple released a new phone today."
//! ```
//!
//! Results go to stdout; logs go to stderr (`RUST_LOG` controls the level).

use clap::Parser;
use intelligent_news::api::NewsClient;
use intelligent_news::cli::{Cli, Command, ResultArgs};
use intelligent_news::config::Config;
use intelligent_news::models::ArticleSet;
use intelligent_news::nlp::Featurizer;
use intelligent_news::outputs::{json, table};
use serde::Serialize;
use std::error::Error;
use std::io::Read;
use std::path::Path;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    let args = Cli::parse();
    debug!(?args.config, ?args.output_dir, "Parsed CLI arguments");

    let mut config = match &args.config {
        Some(path) => Config::load(path).await.map_err(|e| {
            error!(path = %path.display(), error = %e, "Failed to load configuration");
            e
        })?,
        None => Config::default(),
    };
    if let Some(key) = args.api_key.clone() {
        config.news.api_key = Some(key);
    }

    let output_dir = args.output_dir.as_deref();
    match &args.command {
        Command::Featurize { text } => {
            let text = if text == "-" {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                text.clone()
            };
            let featurizer = Featurizer::from_config(&config.featurizer);
            match featurizer.featurize(&text) {
                Some(record) => {
                    print!("{}", table::feature_summary(&record));
                    save(&record, output_dir, "featurized text").await?;
                }
                None => println!("Could not featurize that text."),
            }
        }
        Command::Sources(sources) => {
            let client = NewsClient::from_config(&config.news)?;
            match client.fetch_sources(&sources.query()).await {
                Some(set) if !set.is_empty() => {
                    print!("{}", table::sources_table(&set));
                    save(&set, output_dir, "sources").await?;
                }
                _ => println!("{}", table::NO_RESULTS),
            }
        }
        Command::Headlines(headlines) => {
            let client = NewsClient::from_config(&config.news)?;
            let results = client.fetch_top_headlines(&headlines.query()).await;
            let name = format!("headlines {}", headlines.keywords.as_deref().unwrap_or(""));
            show_articles(results, &headlines.results, &config, output_dir, &name).await?;
        }
        Command::Everything(everything) => {
            let client = NewsClient::from_config(&config.news)?;
            let results = client.fetch_everything(&everything.query()).await;
            let name = format!("everything {}", everything.keywords.as_deref().unwrap_or(""));
            show_articles(results, &everything.results, &config, output_dir, &name).await?;
        }
    }

    info!(
        elapsed_ms = start_time.elapsed().as_millis() as u128,
        "intelligent_news finished"
    );
    Ok(())
}

/// Print an article search, then handle `--inspect`, `--inspect-title`
/// and `--featurize`.
async fn show_articles(
    results: Option<ArticleSet>,
    opts: &ResultArgs,
    config: &Config,
    output_dir: Option<&Path>,
    name: &str,
) -> Result<(), Box<dyn Error>> {
    let Some(set) = results.filter(|s| !s.is_empty()) else {
        println!("{}", table::NO_RESULTS);
        return Ok(());
    };

    print!("{}", table::articles_table(&set));
    save(&set, output_dir, name).await?;

    if let Some(index) = opts.inspect {
        match set.articles.get(index) {
            Some(article) => print!("\n{}", table::article_detail(article)),
            None => warn!(index, available = set.len(), "No article at that row"),
        }
    }
    if let Some(title) = opts.inspect_title.as_deref() {
        match set.find_by_title(title) {
            Some(article) => print!("\n{}", table::article_detail(article)),
            None => warn!(title, "No article with that title"),
        }
    }

    if opts.featurize {
        let field = opts.field.unwrap_or(config.featurizer.text_field);
        let featurizer = Featurizer::from_config(&config.featurizer);
        let rows = featurizer.featurize_results(&set, field);
        print!("\n{}", table::featurized_table(&rows));
        save(&rows, output_dir, &format!("{name} features")).await?;
    }
    Ok(())
}

async fn save<T: Serialize>(
    value: &T,
    output_dir: Option<&Path>,
    name: &str,
) -> Result<(), Box<dyn Error>> {
    if let Some(dir) = output_dir {
        let path = json::write_json(value, dir, name).await?;
        info!(path = %path.display(), "Saved results");
    }
    Ok(())
}
