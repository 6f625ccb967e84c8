//! Plain-text rendering for the terminal.
//!
//! Everything here returns a `String`; printing is left to the caller so
//! stdout stays free of log lines.

use crate::models::{Article, ArticleSet, FeatureRecord, FeaturizedArticle, SourceSet};
use std::fmt::Write;

/// Printed when a search yields nothing (or fails).
pub const NO_RESULTS: &str = "No stories found matching those details.";

const TITLE_WIDTH: usize = 72;
const SOURCE_WIDTH: usize = 18;
const KEYWORDS_SHOWN: usize = 10;

/// Cut `s` to `width` characters, marking the cut with an ellipsis.
fn clip(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let kept: String = s.chars().take(width.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

fn or_dash(s: Option<&str>) -> &str {
    s.filter(|s| !s.trim().is_empty()).unwrap_or("-")
}

fn date_cell(article: &Article) -> String {
    article
        .date
        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// One line per article: index, publish time, source and title.
pub fn articles_table(set: &ArticleSet) -> String {
    if set.is_empty() {
        return format!("{NO_RESULTS}\n");
    }
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<16}  {:<SOURCE_WIDTH$}  {}",
        "#", "published", "source", "title"
    );
    for (i, article) in set.iter().enumerate() {
        let source = article.source.name.as_deref();
        let _ = writeln!(
            out,
            "{:>3}  {:<16}  {:<SOURCE_WIDTH$}  {}",
            i,
            date_cell(article),
            clip(or_dash(source), SOURCE_WIDTH),
            clip(or_dash(article.title.as_deref()), TITLE_WIDTH),
        );
    }
    let _ = writeln!(out, "\n{} shown of {} total", set.len(), set.total_results);
    out
}

/// Full view of one article: its body and where to read it.
pub fn article_detail(article: &Article) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", or_dash(article.title.as_deref()));
    let source = article.source.name.as_deref();
    let _ = writeln!(out, "{} | {}", or_dash(source), date_cell(article));
    if let Some(author) = article.author.as_deref() {
        let _ = writeln!(out, "by {author}");
    }
    if let Some(description) = article.description.as_deref() {
        let _ = writeln!(out, "\n{description}");
    }
    let _ = writeln!(out, "\n{}", or_dash(article.content.as_deref()));
    let _ = writeln!(out, "\n{}", or_dash(article.url.as_deref()));
    out
}

pub fn sources_table(set: &SourceSet) -> String {
    if set.is_empty() {
        return format!("{NO_RESULTS}\n");
    }
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<24}  {:<28}  {:<13}  {:<4}  {}",
        "id", "name", "category", "lang", "country"
    );
    for source in &set.sources {
        let _ = writeln!(
            out,
            "{:<24}  {:<28}  {:<13}  {:<4}  {}",
            clip(or_dash(source.id.as_deref()), 24),
            clip(or_dash(source.name.as_deref()), 28),
            or_dash(source.category.as_deref()),
            or_dash(source.language.as_deref()),
            or_dash(source.country.as_deref()),
        );
    }
    out
}

/// Human-readable dump of one [`FeatureRecord`].
pub fn feature_summary(record: &FeatureRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "polarity {:+.3}  subjectivity {:.3}",
        record.polarity, record.subjectivity
    );

    let entities: Vec<String> = record
        .named_entities
        .iter()
        .map(|(text, label)| format!("{text} ({label})"))
        .collect();
    let _ = writeln!(out, "entities:     {}", joined_or_dash(&entities));

    let nouns: Vec<String> = record
        .nouns
        .iter()
        .map(|(word, tag)| format!("{word}/{tag}"))
        .collect();
    let _ = writeln!(out, "nouns:        {}", joined_or_dash(&nouns));

    let verbs: Vec<String> = record
        .verbs
        .iter()
        .map(|(word, tag)| format!("{word}/{tag}"))
        .collect();
    let _ = writeln!(out, "verbs:        {}", joined_or_dash(&verbs));
    let _ = writeln!(out, "noun phrases: {}", joined_or_dash(&record.noun_phrases));

    let keywords: Vec<String> = record
        .keywords
        .iter()
        .take(KEYWORDS_SHOWN)
        .map(|(kw, score)| format!("{kw} ({score:.4})"))
        .collect();
    let _ = writeln!(out, "keywords:     {}", joined_or_dash(&keywords));
    out
}

/// Batch featurization results, one block per article.
pub fn featurized_table(rows: &[FeaturizedArticle]) -> String {
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(
            out,
            "[{}] {}",
            row.index,
            clip(or_dash(row.title.as_deref()), TITLE_WIDTH)
        );
        match &row.features {
            Some(record) => {
                for line in feature_summary(record).lines() {
                    let _ = writeln!(out, "    {line}");
                }
            }
            None => {
                let _ = writeln!(out, "    (no features)");
            }
        }
        out.push('\n');
    }
    out
}

fn joined_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
