//! YAKE keyword extraction.
//!
//! YAKE ranks candidate phrases from statistics of a single document, with
//! no corpus and no model. Every word gets a weight `H` from five features:
//!
//! - casing: how often it appears capitalized or as an acronym
//! - position: how early its sentences are
//! - frequency: its count against the mean and spread of counts
//! - relatedness: how many different words surround it
//! - spread: the share of sentences it appears in
//!
//! A candidate phrase (up to `max_ngram` words, not starting or ending with
//! a stopword) scores the product of its words' weights divided by its own
//! frequency. **Lower is better.** Near-duplicate phrases are dropped in
//! favour of the better-scored one.

use super::KeywordExtractor;
use super::tokenizer::{Token, Tokenizer, WordTokenizer, sentences};
use crate::config::KeywordConfig;
use crate::error::Result;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;
use tracing::debug;

static STOP_WORDS: OnceLock<HashSet<String>> = OnceLock::new();

fn get_stop_words() -> &'static HashSet<String> {
    STOP_WORDS.get_or_init(|| {
        stop_words::get(stop_words::LANGUAGE::English)
            .into_iter()
            .map(|x| x.to_string())
            .collect()
    })
}

pub struct YakeExtractor {
    config: KeywordConfig,
    tokenizer: Box<dyn Tokenizer>,
}

impl YakeExtractor {
    pub fn new(config: KeywordConfig) -> Self {
        Self {
            config,
            tokenizer: Box::new(WordTokenizer),
        }
    }
}

/// Word shape as YAKE sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Digit,
    Unusual,
    Acronym,
    Proper,
    Plain,
}

impl Shape {
    fn of(word: &str, first_in_sentence: bool) -> Self {
        let stripped: String = word.chars().filter(|c| *c != ',' && *c != '.').collect();
        if stripped.chars().any(|c| c.is_ascii_digit()) && stripped.parse::<f64>().is_ok() {
            return Shape::Digit;
        }
        let digits = word.chars().filter(char::is_ascii_digit).count();
        let alphas = word.chars().filter(|c| c.is_alphabetic()).count();
        let specials = word.chars().filter(|c| !c.is_alphanumeric()).count();
        if (digits > 0 && alphas > 0) || (digits == 0 && alphas == 0) || specials > 1 {
            return Shape::Unusual;
        }
        let uppers = word.chars().filter(|c| c.is_uppercase()).count();
        if alphas > 1 && uppers == alphas {
            return Shape::Acronym;
        }
        let starts_upper = word.chars().next().is_some_and(char::is_uppercase);
        if uppers == 1 && starts_upper && word.chars().count() > 1 && !first_in_sentence {
            return Shape::Proper;
        }
        Shape::Plain
    }

    fn is_number_like(self) -> bool {
        matches!(self, Shape::Digit | Shape::Unusual)
    }
}

#[derive(Debug, Default)]
struct Term {
    tf: f64,
    tf_acronym: f64,
    tf_proper: f64,
    /// Distinct sentence indices, ascending.
    sentences: Vec<usize>,
    stopword: bool,
    h: f64,
}

#[derive(Debug)]
struct Candidate {
    surface: String,
    terms: Vec<usize>,
    tf: f64,
    /// At least one occurrence was free of numbers and odd symbols.
    valid: bool,
}

#[derive(Default)]
struct Stats {
    terms: Vec<Term>,
    index: HashMap<String, usize>,
    /// (left term, right term) -> co-occurrence count
    edges: HashMap<(usize, usize), f64>,
    candidates: Vec<Candidate>,
    candidate_index: HashMap<String, usize>,
    sentence_count: usize,
}

impl Stats {
    fn term_id(&mut self, word: &str) -> usize {
        let lower = word.to_lowercase();
        let simple_stop = get_stop_words().contains(&lower);
        let mut key = lower;
        if key.ends_with('s') && key.chars().count() > 3 {
            key.pop();
        }
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let letters = key.chars().filter(|c| c.is_alphanumeric()).count();
        let stopword = simple_stop || get_stop_words().contains(&key) || letters < 3;
        let id = self.terms.len();
        self.terms.push(Term {
            stopword,
            ..Default::default()
        });
        self.index.insert(key, id);
        id
    }

    fn add_occurrence(&mut self, id: usize, shape: Shape, sentence: usize) {
        let term = &mut self.terms[id];
        term.tf += 1.0;
        match shape {
            Shape::Acronym => term.tf_acronym += 1.0,
            Shape::Proper => term.tf_proper += 1.0,
            _ => {}
        }
        if term.sentences.last() != Some(&sentence) {
            term.sentences.push(sentence);
        }
    }

    fn add_candidate(&mut self, words: &[(String, Shape, usize)]) {
        let surface = words
            .iter()
            .map(|(w, _, _)| w.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let key = surface.to_lowercase();
        let valid = !words.iter().any(|(_, shape, _)| shape.is_number_like());
        match self.candidate_index.get(&key) {
            Some(&idx) => {
                let cand = &mut self.candidates[idx];
                cand.tf += 1.0;
                cand.valid |= valid;
            }
            None => {
                self.candidate_index.insert(key, self.candidates.len());
                self.candidates.push(Candidate {
                    surface,
                    terms: words.iter().map(|(_, _, id)| *id).collect(),
                    tf: 1.0,
                    valid,
                });
            }
        }
    }

    /// Count terms, co-occurrences and candidate n-grams block by block.
    fn collect(tokens: &[Token], config: &KeywordConfig) -> Self {
        let mut stats = Stats::default();
        let grouped = sentences(tokens);
        stats.sentence_count = grouped.len();

        for (pos_sent, sentence) in grouped.iter().enumerate() {
            let mut first_word = true;
            // punctuation splits a sentence into blocks
            for block in sentence.split(|t| t.is_punct()) {
                let mut seen: Vec<(String, Shape, usize)> = Vec::with_capacity(block.len());
                for token in block {
                    let shape = Shape::of(&token.text, first_word);
                    first_word = false;
                    let id = stats.term_id(&token.text);
                    stats.add_occurrence(id, shape, pos_sent);

                    if !shape.is_number_like() {
                        let from = seen.len().saturating_sub(config.window);
                        for (_, left_shape, left_id) in &seen[from..] {
                            if !left_shape.is_number_like() {
                                *stats.edges.entry((*left_id, id)).or_insert(0.0) += 1.0;
                            }
                        }
                    }

                    seen.push((token.text.clone(), shape, id));
                    let end = seen.len();
                    for n in 1..=config.max_ngram.min(end) {
                        stats.add_candidate(&seen[end - n..end]);
                    }
                }
            }
        }
        stats
    }

    fn weigh_terms(&mut self) {
        let valid_tfs: Vec<f64> = self
            .terms
            .iter()
            .filter(|t| !t.stopword)
            .map(|t| t.tf)
            .collect();
        if valid_tfs.is_empty() {
            return;
        }
        let avg_tf = valid_tfs.iter().sum::<f64>() / valid_tfs.len() as f64;
        let std_tf = (valid_tfs.iter().map(|tf| (tf - avg_tf).powi(2)).sum::<f64>()
            / valid_tfs.len() as f64)
            .sqrt();
        let max_tf = self.terms.iter().map(|t| t.tf).fold(0.0_f64, f64::max);

        let mut in_degree = vec![(0.0_f64, 0.0_f64); self.terms.len()];
        let mut out_degree = vec![(0.0_f64, 0.0_f64); self.terms.len()];
        for (&(left, right), &weight) in &self.edges {
            out_degree[left].0 += 1.0;
            out_degree[left].1 += weight;
            in_degree[right].0 += 1.0;
            in_degree[right].1 += weight;
        }
        let ratio = |(distinct, total): (f64, f64)| if total > 0.0 { distinct / total } else { 0.0 };

        let sentence_count = self.sentence_count.max(1) as f64;
        for (id, term) in self.terms.iter_mut().enumerate() {
            let rel = (0.5 + ratio(in_degree[id]) * (term.tf / max_tf))
                + (0.5 + ratio(out_degree[id]) * (term.tf / max_tf));
            let freq = term.tf / (avg_tf + std_tf);
            let spread = term.sentences.len() as f64 / sentence_count;
            let case = term.tf_acronym.max(term.tf_proper) / (1.0 + term.tf.ln());
            let pos = (3.0 + median(&term.sentences)).ln().ln();
            term.h = (pos * rel) / (case + freq / rel + spread / rel);
        }
    }

    fn score(&self, cand: &Candidate) -> f64 {
        let mut sum_h = 0.0;
        let mut prod_h = 1.0;
        for (t, &id) in cand.terms.iter().enumerate() {
            let term = &self.terms[id];
            if !term.stopword {
                sum_h += term.h;
                prod_h *= term.h;
                continue;
            }
            // interior stopwords are weighed by how tightly they bind
            let prob_left = t
                .checked_sub(1)
                .map(|p| cand.terms[p])
                .and_then(|prev| {
                    self.edges
                        .get(&(prev, id))
                        .map(|w| w / self.terms[prev].tf)
                })
                .unwrap_or(0.0);
            let prob_right = cand
                .terms
                .get(t + 1)
                .and_then(|&next| self.edges.get(&(id, next)).map(|w| w / self.terms[next].tf))
                .unwrap_or(0.0);
            let prob = prob_left * prob_right;
            prod_h *= 1.0 + (1.0 - prob);
            sum_h -= 1.0 - prob;
        }
        if (sum_h + 1.0_f64).abs() < f64::EPSILON {
            sum_h = -0.999_999_999;
        }
        prod_h / ((sum_h + 1.0) * cand.tf)
    }
}

fn median(sorted: &[usize]) -> f64 {
    match sorted.len() {
        0 => 0.0,
        n if n % 2 == 1 => sorted[n / 2] as f64,
        n => (sorted[n / 2 - 1] + sorted[n / 2]) as f64 / 2.0,
    }
}

/// Levenshtein edit distance over chars.
fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == *cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}

/// 1.0 for identical strings, 0.0 for entirely different ones.
fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / longest as f64
}

impl KeywordExtractor for YakeExtractor {
    fn extract(&self, text: &str) -> Result<Vec<(String, f64)>> {
        let tokens = self.tokenizer.tokenize(text);
        if tokens.is_empty() {
            return Ok(Vec::new());
        }
        let mut stats = Stats::collect(&tokens, &self.config);
        stats.weigh_terms();

        let mut scored: Vec<(f64, &Candidate)> = stats
            .candidates
            .iter()
            .filter(|c| c.valid)
            .filter(|c| {
                let first = c.terms.first().map(|&id| stats.terms[id].stopword);
                let last = c.terms.last().map(|&id| stats.terms[id].stopword);
                first == Some(false) && last == Some(false)
            })
            .map(|c| (stats.score(c), c))
            .collect();
        scored.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut picked: Vec<(String, f64)> = Vec::with_capacity(self.config.top_n);
        for (h, cand) in scored {
            if picked.len() >= self.config.top_n {
                break;
            }
            let key = cand.surface.to_lowercase();
            let duplicate = self.config.dedup_threshold < 1.0
                && picked
                    .iter()
                    .any(|(kw, _)| similarity(&key, &kw.to_lowercase()) > self.config.dedup_threshold);
            if !duplicate {
                picked.push((cand.surface.clone(), h));
            }
        }
        debug!(
            candidates = stats.candidates.len(),
            keywords = picked.len(),
            "Extracted keywords"
        );
        Ok(picked)
    }
}
