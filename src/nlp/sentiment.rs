//! Lexicon-based polarity/subjectivity scoring and noun-phrase chunking.

use super::{Sentiment, SentimentAnalyzer, TaggedToken, Tagger, lexicon};
use crate::error::Result;
use itertools::Itertools;
use std::sync::Arc;

/// How many tokens back a negation still flips a sentiment word.
const NEGATION_WINDOW: usize = 3;
const NEGATION_FACTOR: f64 = -0.5;

/// Scores text against the built-in sentiment lexicon.
///
/// Each lexicon word contributes its (polarity, subjectivity) pair, scaled
/// by an intensifier directly in front of it and with polarity flipped and
/// damped by a nearby negation. The text score is the mean over the words
/// that contributed.
pub struct LexiconSentiment {
    tagger: Arc<dyn Tagger>,
}

impl LexiconSentiment {
    pub fn new(tagger: Arc<dyn Tagger>) -> Self {
        Self { tagger }
    }
}

impl SentimentAnalyzer for LexiconSentiment {
    fn analyze(&self, text: &str) -> Result<Sentiment> {
        let doc = self.tagger.tag(text)?;
        let (polarity, subjectivity) = score(&doc.tokens);
        Ok(Sentiment {
            polarity,
            subjectivity,
            noun_phrases: noun_phrases(&doc.tokens),
        })
    }
}

fn score(tokens: &[TaggedToken]) -> (f64, f64) {
    let lowers: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();
    let mut assessed: Vec<(f64, f64)> = Vec::new();

    for (i, word) in lowers.iter().enumerate() {
        let Some((mut polarity, mut subjectivity)) = lexicon::sentiment(word) else {
            continue;
        };
        let same_clause = |j: usize| {
            tokens[j].sentence == tokens[i].sentence && !matches!(tokens[j].tag, "," | ":" | ".")
        };

        if let Some(factor) = i
            .checked_sub(1)
            .filter(|&j| same_clause(j))
            .and_then(|j| lexicon::intensity(&lowers[j]))
        {
            polarity *= factor;
            subjectivity *= factor;
        }

        let negated = (i.saturating_sub(NEGATION_WINDOW)..i)
            .rev()
            .take_while(|&j| same_clause(j))
            .any(|j| lexicon::is_negation(&lowers[j]));
        if negated {
            polarity *= NEGATION_FACTOR;
        }

        assessed.push((polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0)));
    }

    if assessed.is_empty() {
        return (0.0, 0.0);
    }
    let n = assessed.len() as f64;
    let polarity = assessed.iter().map(|(p, _)| p).sum::<f64>() / n;
    let subjectivity = assessed.iter().map(|(_, s)| s).sum::<f64>() / n;
    (polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0))
}

/// Chunk grammar of the fast noun-phrase extractor: adjacent tag pairs and
/// what they merge into. `NNI` marks a compound.
fn merge(left: &str, right: &str) -> Option<&'static str> {
    match (left, right) {
        ("NNP", "NNP") => Some("NNP"),
        ("NN", "NN") => Some("NNI"),
        ("NNI", "NN") => Some("NNI"),
        ("JJ", "JJ") => Some("JJ"),
        ("JJ", "NN") => Some("NNI"),
        _ => None,
    }
}

fn normalize_tag(tag: &'static str) -> &'static str {
    match tag {
        "NNS" => "NN",
        "NNPS" => "NNP",
        other => other,
    }
}

/// Proper-noun groups and compounds, lowercased, first occurrence first.
fn noun_phrases(tokens: &[TaggedToken]) -> Vec<String> {
    let mut phrases = Vec::new();
    for sentence in tokens.chunk_by(|a, b| a.sentence == b.sentence) {
        let mut chunks: Vec<(String, &'static str)> = sentence
            .iter()
            .map(|t| (t.text.clone(), normalize_tag(t.tag)))
            .collect();

        // merge the leftmost matching pair until nothing merges
        while let Some(k) = (0..chunks.len().saturating_sub(1))
            .find(|&k| merge(chunks[k].1, chunks[k + 1].1).is_some())
        {
            let (right, right_tag) = chunks.remove(k + 1);
            let merged = merge(chunks[k].1, right_tag).unwrap_or(right_tag);
            chunks[k].0 = format!("{} {}", chunks[k].0, right);
            chunks[k].1 = merged;
        }

        phrases.extend(
            chunks
                .into_iter()
                .filter(|(_, tag)| matches!(*tag, "NNP" | "NNI"))
                .map(|(text, _)| text.trim().to_lowercase())
                .filter(|text| text.chars().count() > 1),
        );
    }
    phrases.into_iter().unique().collect()
}
