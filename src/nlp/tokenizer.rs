//! Word and sentence segmentation.
//!
//! Produces Penn-Treebank-style tokens: clitics are split off their host
//! (`don't` -> `do` + `n't`, `Apple's` -> `Apple` + `'s`), punctuation
//! stands alone, and abbreviations keep their period. Every token
//! remembers its byte span in the input and the sentence it belongs to.

use super::lexicon;
use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
          (?:[A-Za-z]\.){2,}              # initialisms: U.S. / U.K.
        | \d+(?:[.,:]\d+)+                # 1,000 / 3.5 / 10:30
        | \w+(?:[-'’]\w+)*                # words, hyphenated words, clitics attached
        | '(?:s|re|ve|ll|d|m)\b           # detached clitics
        | [^\w\s]                         # any other symbol
        ",
    )
    .expect("TOKEN_RE regex is valid")
});

const CLITICS: &[&str] = &["'s", "'re", "'ve", "'ll", "'d", "'m"];
const TERMINATORS: &[&str] = &[".", "!", "?"];
const CLOSERS: &[&str] = &["\"", "'", ")", "]", "”", "’"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Byte offsets into the tokenized text.
    pub start: usize,
    pub end: usize,
    /// Zero-based sentence index.
    pub sentence: usize,
}

impl Token {
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }

    pub fn is_punct(&self) -> bool {
        self.text.chars().all(|c| !c.is_alphanumeric())
    }
}

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Regex-driven English tokenizer.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut spans: Vec<(usize, usize)> = Vec::new();
        for m in TOKEN_RE.find_iter(text) {
            split_clitic(m.as_str(), m.start(), &mut spans);
        }
        let spans = merge_abbreviations(text, spans);
        assign_sentences(text, spans)
    }
}

/// Push `word` at `offset`, splitting a trailing clitic into its own span.
fn split_clitic(word: &str, offset: usize, spans: &mut Vec<(usize, usize)>) {
    let end = offset + word.len();
    let normalized = word.replace('’', "'").to_lowercase();
    // the curly apostrophe is 3 bytes, so clitic lengths are measured on the original
    let clitic_len = |n_chars: usize| -> usize {
        word.char_indices()
            .rev()
            .nth(n_chars - 1)
            .map(|(i, _)| word.len() - i)
            .unwrap_or(0)
    };

    if normalized.len() > 3 && normalized.ends_with("n't") {
        let cut = end - clitic_len(3);
        spans.push((offset, cut));
        spans.push((cut, end));
        return;
    }
    for clitic in CLITICS {
        if normalized.len() > clitic.len() && normalized.ends_with(clitic) {
            let cut = end - clitic_len(clitic.chars().count());
            spans.push((offset, cut));
            spans.push((cut, end));
            return;
        }
    }
    spans.push((offset, end));
}

/// Glue a period onto a directly preceding known abbreviation.
fn merge_abbreviations(text: &str, spans: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
    for (start, end) in spans {
        if &text[start..end] == "." {
            if let Some(last) = merged.last_mut() {
                let prev = text[last.0..last.1].to_lowercase();
                if last.1 == start && lexicon::is_abbreviation(&prev) {
                    last.1 = end;
                    continue;
                }
            }
        }
        merged.push((start, end));
    }
    merged
}

fn assign_sentences(text: &str, spans: Vec<(usize, usize)>) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(spans.len());
    let mut sentence = 0;
    let mut pending_break = false;
    let mut prev_end = 0;

    for (start, end) in spans {
        let surface = &text[start..end];
        let gap = &text[prev_end..start];
        let paragraph = gap.matches('\n').count() >= 2;

        if pending_break && !(start == prev_end && CLOSERS.contains(&surface)) {
            sentence += 1;
            pending_break = false;
        } else if paragraph && !tokens.is_empty() && !pending_break {
            sentence += 1;
        }

        tokens.push(Token {
            text: surface.to_string(),
            start,
            end,
            sentence,
        });
        if TERMINATORS.contains(&surface) {
            pending_break = true;
        }
        prev_end = end;
    }
    tokens
}

/// Group tokens by sentence, preserving order.
pub fn sentences(tokens: &[Token]) -> Vec<&[Token]> {
    tokens
        .chunk_by(|a, b| a.sentence == b.sentence)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        WordTokenizer
            .tokenize(text)
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_basic_tokens_and_offsets() {
        let text = "Apple released a new phone today.";
        let tokens = WordTokenizer.tokenize(text);
        assert_eq!(
            words(text),
            vec!["Apple", "released", "a", "new", "phone", "today", "."]
        );
        for t in &tokens {
            assert_eq!(&text[t.start..t.end], t.text);
            assert_eq!(t.sentence, 0);
        }
    }

    #[test]
    fn test_contractions_split() {
        assert_eq!(words("They don't know."), vec!["They", "do", "n't", "know", "."]);
        assert_eq!(words("Apple's chip"), vec!["Apple", "'s", "chip"]);
        assert_eq!(words("we're here"), vec!["we", "'re", "here"]);
        assert_eq!(words("It can’t"), vec!["It", "ca", "n’t"]);
    }

    #[test]
    fn test_numbers_and_initialisms() {
        assert_eq!(
            words("The U.S. spent $1,000.50 on 3 items"),
            vec!["The", "U.S.", "spent", "$", "1,000.50", "on", "3", "items"]
        );
        assert_eq!(words("up 5%"), vec!["up", "5", "%"]);
    }

    #[test]
    fn test_abbreviation_keeps_period() {
        let tokens = WordTokenizer.tokenize("Mr. Smith met Dr. Jones. They talked.");
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Mr.", "Smith", "met", "Dr.", "Jones", ".", "They", "talked", "."]
        );
        assert_eq!(tokens[5].sentence, 0);
        assert_eq!(tokens[6].sentence, 1);
    }

    #[test]
    fn test_sentence_split_and_closing_quote() {
        let tokens = WordTokenizer.tokenize("He said \"stop.\" Then left! Why?");
        let grouped = sentences(&tokens);
        assert_eq!(grouped.len(), 3);
        assert_eq!(grouped[0].last().map(|t| t.text.as_str()), Some("\""));
        assert_eq!(grouped[1][0].text, "Then");
        assert_eq!(grouped[2][0].text, "Why");
    }

    #[test]
    fn test_paragraph_break_starts_sentence() {
        let tokens = WordTokenizer.tokenize("Big headline\n\nBody text here");
        assert_eq!(tokens[1].sentence, 0);
        assert_eq!(tokens[2].sentence, 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(WordTokenizer.tokenize("").is_empty());
        assert!(WordTokenizer.tokenize("   \n ").is_empty());
    }
}
