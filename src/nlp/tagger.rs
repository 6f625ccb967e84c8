//! Rule-based part-of-speech tagger and entity recogniser.
//!
//! Tagging runs in two passes per sentence. The lexical pass looks each
//! token up on its own: punctuation and numbers, then closed-class words,
//! then capitalization, then the open-class lexicon and morphology, then
//! suffix rules. The contextual pass resolves the readings the lexical pass
//! left open (noun or verb, past tense or participle) from the tokens to the
//! left.
//!
//! Entities are found on the tagged tokens: dates and numeric expressions
//! first, then runs of proper nouns labelled from the gazetteer, titles,
//! organisation suffixes and first names.

use super::lexicon::{self, GAZETTEER_MAX_WORDS};
use super::tokenizer::{Token, Tokenizer, WordTokenizer};
use super::{Entity, TaggedDoc, TaggedToken, Tagger};
use crate::error::{Error, Result};
use crate::models::EntityLabel;
use tracing::{debug, instrument};

/// How settled a lexical tag is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reading {
    Fixed,
    /// Verb base form (`announce`): VB, VBP, or a noun after a determiner.
    Verb,
    /// Noun/verb homograph (`report`): NN unless in a verb slot.
    NounOrVerb,
    /// Plural of a homograph (`reports`): NNS or VBZ.
    PluralOrVerb,
    /// `-ed` or irregular past: VBD, VBN after have/be, JJ after a determiner.
    Past,
    /// Same form for base and past (`put`, `cut`).
    Invariant,
}

const HAVE_BE: &[&str] = &[
    "have", "has", "had", "having", "'ve", "is", "are", "was", "were", "be", "been", "being",
    "am", "'re", "'m",
];
const DO_FORMS: &[&str] = &["do", "does", "did"];
const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "we", "they"];
const THIRD_PERSON: &[&str] = &["he", "she", "it", "that", "who", "this"];
const CONNECTORS: &[&str] = &["of", "&", "de", "for"];
const CURRENCY_SYMBOLS: &[&str] = &["$", "€", "£", "¥"];
const CURRENCY_WORDS: &[&str] = &["dollars", "dollar", "cents", "euros", "pounds", "yen"];

pub struct RuleTagger {
    tokenizer: Box<dyn Tokenizer>,
    max_text_length: usize,
}

impl RuleTagger {
    pub fn new(max_text_length: usize) -> Self {
        Self::with_tokenizer(Box::new(WordTokenizer), max_text_length)
    }

    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>, max_text_length: usize) -> Self {
        Self {
            tokenizer,
            max_text_length,
        }
    }
}

impl Tagger for RuleTagger {
    #[instrument(level = "debug", skip_all)]
    fn tag(&self, text: &str) -> Result<TaggedDoc> {
        let length = text.chars().count();
        if length > self.max_text_length {
            return Err(Error::analyzer(
                "tagger",
                format!(
                    "text of {length} characters exceeds the limit of {}",
                    self.max_text_length
                ),
            ));
        }

        let raw = self.tokenizer.tokenize(text);
        let mut tokens = Vec::with_capacity(raw.len());
        for sentence in raw.chunk_by(|a, b| a.sentence == b.sentence) {
            tokens.extend(tag_sentence(sentence));
        }

        let mut entities = Vec::new();
        for sentence in tokens.chunk_by(|a, b| a.sentence == b.sentence) {
            entities.extend(recognise_entities(text, sentence));
        }
        debug!(tokens = tokens.len(), entities = entities.len(), "Tagged text");
        Ok(TaggedDoc { tokens, entities })
    }
}

// ---------------------------------------------------------------------------
// Part-of-speech tagging
// ---------------------------------------------------------------------------

fn tag_sentence(sentence: &[Token]) -> Vec<TaggedToken> {
    let lowers: Vec<String> = sentence.iter().map(Token::lower).collect();
    let mut tags = Vec::with_capacity(sentence.len());
    let mut readings = Vec::with_capacity(sentence.len());

    let mut initial = true;
    for (i, token) in sentence.iter().enumerate() {
        let opening = i == 0 || sentence[i - 1].end != token.start;
        let (tag, reading) = lexical(&token.text, &lowers[i], initial, opening);
        tags.push(tag);
        readings.push(reading);
        // leading quotes and brackets do not end the sentence-initial slot
        if !token.is_punct() {
            initial = false;
        }
    }

    for i in 0..sentence.len() {
        tags[i] = contextual(i, &tags, &readings, &lowers);
    }

    sentence
        .iter()
        .zip(tags)
        .map(|(t, tag)| TaggedToken {
            text: t.text.clone(),
            tag,
            start: t.start,
            end: t.end,
            sentence: t.sentence,
        })
        .collect()
}

fn lexical(text: &str, lower: &str, initial: bool, opening: bool) -> (&'static str, Reading) {
    use Reading::*;

    if let Some(tag) = punct_tag(text, opening) {
        return (tag, Fixed);
    }
    if is_number(text) {
        return ("CD", Fixed);
    }
    if is_numeric_ordinal(lower) {
        return ("JJ", Fixed);
    }

    let capitalized = text.chars().next().is_some_and(char::is_uppercase);
    let proper_name = lexicon::gazetteer(text).is_some() || lexicon::is_month(text);

    if let Some(tag) = lexicon::closed_class(lower) {
        // `US`, `May`, `WHO` mid-sentence are names, not pronouns or modals
        if !(capitalized && !initial && proper_name) {
            return (tag, Fixed);
        }
    }
    if capitalized && !initial {
        return (proper_tag(text), Fixed);
    }
    if capitalized
        && (proper_name
            || lexicon::is_first_name(text)
            || lexicon::is_person_title(text)
            || lexicon::is_weekday(text))
    {
        return (proper_tag(text), Fixed);
    }
    if let Some(found) = open_class(lower) {
        return found;
    }
    if let Some(found) = suffix_tag(lower) {
        return found;
    }
    if capitalized {
        return ("NNP", Fixed);
    }
    ("NN", Fixed)
}

fn proper_tag(text: &str) -> &'static str {
    if text.ends_with('s') && lexicon::gazetteer(text) == Some(EntityLabel::Norp) {
        "NNPS"
    } else {
        "NNP"
    }
}

fn punct_tag(text: &str, opening: bool) -> Option<&'static str> {
    if text.chars().any(char::is_alphanumeric) {
        return None;
    }
    let tag = match text {
        "." | "!" | "?" => ".",
        "," => ",",
        ":" | ";" | "-" | "--" | "…" | "–" | "—" => ":",
        "(" | "[" | "{" => "-LRB-",
        ")" | "]" | "}" => "-RRB-",
        "\"" | "'" if opening => "``",
        "\"" | "'" | "”" | "’" => "''",
        "“" | "‘" => "``",
        "%" => "NN",
        "#" => "#",
        s if CURRENCY_SYMBOLS.contains(&s) => "$",
        // `&` is a conjunction in the closed-class lexicon
        "&" => return None,
        _ => "SYM",
    };
    Some(tag)
}

fn is_number(text: &str) -> bool {
    let mut digits = 0;
    for c in text.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' | ',' | ':' => {}
            _ => return false,
        }
    }
    digits > 0
}

fn is_numeric_ordinal(lower: &str) -> bool {
    ["st", "nd", "rd", "th"].iter().any(|suffix| {
        lower
            .strip_suffix(suffix)
            .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
    })
}

fn open_class(lower: &str) -> Option<(&'static str, Reading)> {
    use Reading::*;

    if let Some(tag) = lexicon::irregular_verb(lower) {
        return Some(match tag {
            "VB" => ("VB", Verb),
            "VBD" => ("VBD", Past),
            other => (other, Fixed),
        });
    }
    if lexicon::is_noun_verb(lower) {
        return Some(("NN", NounOrVerb));
    }
    if lexicon::is_noun(lower) {
        return Some(("NN", Fixed));
    }
    if lexicon::is_adjective(lower) {
        return Some(("JJ", Fixed));
    }
    if lexicon::is_invariant_verb(lower) {
        return Some(("VB", Invariant));
    }
    if lexicon::is_verb_base(lower) {
        return Some(("VB", Verb));
    }
    if let Some(base) =
        lexicon::verb_base_of(lower, "s").or_else(|| lexicon::verb_base_of(lower, "es"))
    {
        return Some(if lexicon::is_noun_verb(&base) {
            ("NNS", PluralOrVerb)
        } else {
            ("VBZ", Fixed)
        });
    }
    if lexicon::noun_singular_of(lower).is_some() {
        return Some(("NNS", Fixed));
    }
    if lexicon::verb_base_of(lower, "ed").is_some() {
        return Some(("VBD", Past));
    }
    if lexicon::verb_base_of(lower, "ing").is_some() {
        return Some(("VBG", Fixed));
    }
    let comparative = |suffix: &str| {
        lower.strip_suffix(suffix).is_some_and(|stem| {
            lexicon::is_adjective(stem)
                || lexicon::is_adjective(&format!("{stem}e"))
                || lexicon::undouble(stem).is_some_and(lexicon::is_adjective)
        })
    };
    if comparative("er") {
        return Some(("JJR", Fixed));
    }
    if comparative("est") {
        return Some(("JJS", Fixed));
    }
    None
}

fn suffix_tag(lower: &str) -> Option<(&'static str, Reading)> {
    if !lower.chars().all(|c| c.is_alphabetic() || c == '-' || c == '\'') {
        return None;
    }
    for (suffix, tag) in lexicon::SUFFIX_TAGS {
        if lower.len() > suffix.len() + 2 && lower.ends_with(suffix) {
            let reading = if *tag == "VBD" {
                Reading::Past
            } else {
                Reading::Fixed
            };
            return Some((*tag, reading));
        }
    }
    let plural = lower.len() > 3
        && lower.ends_with('s')
        && !["ss", "us", "is"].iter().any(|s| lower.ends_with(s));
    plural.then_some(("NNS", Reading::Fixed))
}

/// Resolve token `i` from the (already resolved) tokens to its left.
fn contextual(
    i: usize,
    tags: &[&'static str],
    readings: &[Reading],
    lowers: &[String],
) -> &'static str {
    let tag = tags[i];
    let prev = i.checked_sub(1);
    let prev_tag = prev.map(|p| tags[p]).unwrap_or("");
    let prev_lower = prev.map(|p| lowers[p].as_str()).unwrap_or("");
    let next_lower = lowers.get(i + 1).map(String::as_str).unwrap_or("");

    // auxiliaries may be separated from their verb by adverbs
    let aux = (0..i)
        .rev()
        .find(|&p| tags[p] != "RB")
        .map(|p| (tags[p], lowers[p].as_str()));
    let after_infinitive = aux.is_some_and(|(t, w)| t == "TO" || t == "MD" || DO_FORMS.contains(&w));
    let after_have_be = aux.is_some_and(|(_, w)| HAVE_BE.contains(&w));
    let after_determiner = matches!(prev_tag, "DT" | "PRP$" | "POS" | "JJ" | "JJR" | "JJS");
    let after_subject = SUBJECT_PRONOUNS.contains(&prev_lower)
        || matches!(prev_tag, "NNS" | "NNPS")
        || matches!(prev_tag, "NN" | "NNP");
    let after_third_person =
        THIRD_PERSON.contains(&prev_lower) || matches!(prev_tag, "NN" | "NNP");

    match readings[i] {
        Reading::Verb => {
            if after_infinitive {
                "VB"
            } else if after_determiner {
                "NN"
            } else if after_subject {
                "VBP"
            } else {
                "VB"
            }
        }
        Reading::NounOrVerb => {
            if after_infinitive {
                "VB"
            } else if SUBJECT_PRONOUNS.contains(&prev_lower) {
                "VBP"
            } else {
                "NN"
            }
        }
        Reading::PluralOrVerb => {
            if after_third_person {
                "VBZ"
            } else {
                "NNS"
            }
        }
        Reading::Past => {
            if after_have_be {
                "VBN"
            } else if matches!(prev_tag, "DT" | "PRP$") {
                "JJ"
            } else {
                "VBD"
            }
        }
        Reading::Invariant => {
            if after_infinitive {
                "VB"
            } else if after_have_be {
                "VBN"
            } else if after_determiner {
                "NN"
            } else if after_subject || THIRD_PERSON.contains(&prev_lower) {
                "VBD"
            } else {
                "VB"
            }
        }
        Reading::Fixed => match lowers[i].as_str() {
            "'s" if matches!(prev_tag, "NN" | "NNS" | "NNP" | "NNPS") => "POS",
            "there" if !HAVE_BE.contains(&next_lower) => "RB",
            "her"
                if tags
                    .get(i + 1)
                    .is_none_or(|t| matches!(*t, "." | "," | "IN" | "CC" | "TO" | "RB")) =>
            {
                "PRP"
            }
            _ => tag,
        },
    }
}

// ---------------------------------------------------------------------------
// Entity recognition
// ---------------------------------------------------------------------------

fn span_entity(text: &str, tokens: &[TaggedToken], first: usize, last: usize, label: EntityLabel) -> Entity {
    let start = tokens[first].start;
    let end = tokens[last].end;
    Entity {
        text: text[start..end].to_string(),
        label,
        start,
        end,
    }
}

fn year_like(text: &str) -> bool {
    text.len() == 4
        && text
            .parse::<u32>()
            .is_ok_and(|y| (1800..=2100).contains(&y))
}

fn day_like(text: &str) -> bool {
    text.parse::<u32>().is_ok_and(|d| (1..=31).contains(&d))
}

fn recognise_entities(text: &str, tokens: &[TaggedToken]) -> Vec<Entity> {
    let mut taken = vec![false; tokens.len()];
    let mut entities = Vec::new();
    numeric_entities(text, tokens, &mut taken, &mut entities);
    name_entities(text, tokens, &taken, &mut entities);
    entities.sort_by_key(|e| e.start);
    entities
}

/// DATE, TIME, MONEY, PERCENT, ORDINAL and CARDINAL spans.
fn numeric_entities(text: &str, tokens: &[TaggedToken], taken: &mut [bool], out: &mut Vec<Entity>) {
    let n = tokens.len();
    let lower = |i: usize| tokens[i].text.to_lowercase();
    let is_cd = |i: usize| i < n && tokens[i].tag == "CD";
    let mut emit = |first: usize, last: usize, label: EntityLabel, taken: &mut [bool]| {
        taken[first..=last].iter_mut().for_each(|t| *t = true);
        out.push(span_entity(text, tokens, first, last, label));
    };

    let mut i = 0;
    while i < n {
        if taken[i] {
            i += 1;
            continue;
        }
        let word = tokens[i].text.as_str();
        let low = lower(i);

        // `January 10, 2022`, `10 January`, `March 2021`
        if lexicon::is_month(word) && tokens[i].tag.starts_with("NNP") {
            let first = if i > 0 && !taken[i - 1] && is_cd(i - 1) && day_like(&tokens[i - 1].text) {
                i - 1
            } else {
                i
            };
            let mut last = i;
            if is_cd(last + 1) && (day_like(&tokens[last + 1].text) || year_like(&tokens[last + 1].text)) {
                last += 1;
                if last + 2 < n && tokens[last + 1].text == "," && is_cd(last + 2) && year_like(&tokens[last + 2].text) {
                    last += 2;
                }
            }
            emit(first, last, EntityLabel::Date, taken);
            i = last + 1;
            continue;
        }
        if lexicon::is_weekday(word) {
            let first = if i > 0 && !taken[i - 1] && lexicon::is_period_determiner(&lower(i - 1)) {
                i - 1
            } else {
                i
            };
            emit(first, i, EntityLabel::Date, taken);
            i += 1;
            continue;
        }
        if lexicon::is_relative_day(&low) {
            emit(i, i, EntityLabel::Date, taken);
            i += 1;
            continue;
        }
        if low == "tonight" {
            emit(i, i, EntityLabel::Time, taken);
            i += 1;
            continue;
        }
        if lexicon::is_period_determiner(&low) && i + 1 < n && lexicon::is_period_word(&lower(i + 1)) {
            emit(i, i + 1, EntityLabel::Date, taken);
            i += 2;
            continue;
        }
        if lexicon::is_ordinal_word(&low) || is_numeric_ordinal(&low) {
            emit(i, i, EntityLabel::Ordinal, taken);
            i += 1;
            continue;
        }

        // `$ 4.5 billion`
        if CURRENCY_SYMBOLS.contains(&word) && is_cd(i + 1) {
            let mut last = i + 1;
            while is_cd(last + 1) && lexicon::is_scale_word(&lower(last + 1)) {
                last += 1;
            }
            emit(i, last, EntityLabel::Money, taken);
            i = last + 1;
            continue;
        }

        if tokens[i].tag == "CD" {
            // `10 January` is picked up from the month
            if day_like(word) && i + 1 < n && lexicon::is_month(&tokens[i + 1].text) {
                i += 1;
                continue;
            }
            let mut last = i;
            while is_cd(last + 1) && lexicon::is_scale_word(&lower(last + 1)) {
                last += 1;
            }
            let next = (last + 1 < n).then(|| lower(last + 1));
            let next2 = (last + 2 < n).then(|| lower(last + 2));
            let label = match next.as_deref() {
                Some("%") | Some("percent") => {
                    last += 1;
                    EntityLabel::Percent
                }
                Some("per") if next2.as_deref() == Some("cent") => {
                    last += 2;
                    EntityLabel::Percent
                }
                Some(w) if CURRENCY_WORDS.contains(&w) => {
                    last += 1;
                    EntityLabel::Money
                }
                _ if last == i && year_like(word) => EntityLabel::Date,
                _ if last == i && word.contains(':') => EntityLabel::Time,
                _ => EntityLabel::Cardinal,
            };
            emit(i, last, label, taken);
            i = last + 1;
            continue;
        }
        i += 1;
    }
}

/// Proper-noun runs, labelled.
fn name_entities(text: &str, tokens: &[TaggedToken], taken: &[bool], out: &mut Vec<Entity>) {
    let is_name = |i: usize| i < tokens.len() && !taken[i] && tokens[i].tag.starts_with("NNP");
    let mut i = 0;
    while i < tokens.len() {
        if !is_name(i) {
            i += 1;
            continue;
        }
        let first = i;
        let mut last = i;
        loop {
            if is_name(last + 1) {
                last += 1;
            } else if last + 2 < tokens.len()
                && CONNECTORS.contains(&tokens[last + 1].text.as_str())
                && is_name(last + 2)
            {
                last += 2;
            } else {
                break;
            }
        }
        for (a, b, label) in label_run(&tokens[first..=last]) {
            out.push(span_entity(text, tokens, first + a, first + b, label));
        }
        i = last + 1;
    }
}

/// Split a proper-noun run into labelled spans (indices relative to `run`).
fn label_run(run: &[TaggedToken]) -> Vec<(usize, usize, EntityLabel)> {
    let words: Vec<&str> = run.iter().map(|t| t.text.as_str()).collect();
    let n = words.len();
    let last = n - 1;

    if let Some(label) = lexicon::gazetteer(&words.join(" ")) {
        return vec![(0, last, label)];
    }
    let has_connector = words.iter().any(|w| CONNECTORS.contains(w));
    let first_content = words
        .iter()
        .position(|w| !lexicon::is_person_title(w))
        .unwrap_or(n);
    if n >= 2 && first_content < n && lexicon::is_org_suffix(words[last]) {
        return vec![(first_content.min(last - 1), last, EntityLabel::Org)];
    }
    if has_connector && lexicon::is_org_head(words[0]) {
        return vec![(0, last, EntityLabel::Org)];
    }

    let mut spans = Vec::new();
    let mut pending: Option<usize> = None;
    let mut titled = false;
    let flush = |start: Option<usize>,
                 end: usize,
                 titled: &mut bool,
                 spans: &mut Vec<(usize, usize, EntityLabel)>| {
        if let Some(s) = start {
            spans.push((s, end - 1, unknown_label(&words[s..end], *titled)));
        }
        *titled = false;
    };

    let mut j = 0;
    while j < n {
        if CONNECTORS.contains(&words[j]) {
            flush(pending.take(), j, &mut titled, &mut spans);
            j += 1;
            continue;
        }
        let known = (1..=GAZETTEER_MAX_WORDS.min(n - j))
            .rev()
            .find_map(|len| lexicon::gazetteer(&words[j..j + len].join(" ")).map(|l| (len, l)));
        if let Some((len, label)) = known {
            flush(pending.take(), j, &mut titled, &mut spans);
            spans.push((j, j + len - 1, label));
            j += len;
            continue;
        }
        if lexicon::is_person_title(words[j]) && pending.is_none() {
            titled = true;
            j += 1;
            continue;
        }
        pending.get_or_insert(j);
        j += 1;
    }
    flush(pending.take(), n, &mut titled, &mut spans);
    spans
}

fn unknown_label(words: &[&str], titled: bool) -> EntityLabel {
    let first = words[0];
    let last = words[words.len() - 1];
    if titled || lexicon::is_first_name(first) {
        EntityLabel::Person
    } else if lexicon::is_org_suffix(last) {
        EntityLabel::Org
    } else if words.len() == 1 && first.len() >= 2 && first.chars().all(|c| c.is_uppercase()) {
        EntityLabel::Org
    } else {
        EntityLabel::Person
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagger() -> RuleTagger {
        RuleTagger::new(1_000_000)
    }

    fn tags(text: &str) -> Vec<(String, &'static str)> {
        tagger()
            .tag(text)
            .unwrap()
            .tokens
            .into_iter()
            .map(|t| (t.text, t.tag))
            .collect()
    }

    fn tag_of(text: &str, word: &str) -> &'static str {
        tags(text)
            .into_iter()
            .find(|(w, _)| w == word)
            .map(|(_, t)| t)
            .unwrap_or_else(|| panic!("{word} not found in {text}"))
    }

    fn entities(text: &str) -> Vec<(String, EntityLabel)> {
        tagger()
            .tag(text)
            .unwrap()
            .entities
            .into_iter()
            .map(|e| (e.text, e.label))
            .collect()
    }

    #[test]
    fn test_apple_sentence_tags() {
        let got = tags("Apple released a new phone today.");
        let expected = [
            ("Apple", "NNP"),
            ("released", "VBD"),
            ("a", "DT"),
            ("new", "JJ"),
            ("phone", "NN"),
            ("today", "NN"),
            (".", "."),
        ];
        assert_eq!(got.len(), expected.len());
        for ((word, tag), (ew, et)) in got.iter().zip(expected) {
            assert_eq!((word.as_str(), *tag), (ew, et));
        }
    }

    #[test]
    fn test_apple_sentence_entities() {
        let got = entities("Apple released a new phone today.");
        assert!(got.contains(&("Apple".to_string(), EntityLabel::Org)));
        assert!(got.contains(&("today".to_string(), EntityLabel::Date)));
    }

    #[test]
    fn test_contextual_verbs() {
        assert_eq!(tag_of("Apple plans to release a phone.", "plans"), "VBZ");
        assert_eq!(tag_of("Apple plans to release a phone.", "release"), "VB");
        assert_eq!(tag_of("The company has released results.", "released"), "VBN");
        assert_eq!(tag_of("The company has released results.", "has"), "VBZ");
        assert_eq!(tag_of("They report strong sales.", "report"), "VBP");
        assert_eq!(tag_of("The report was late.", "report"), "NN");
        assert_eq!(tag_of("Prices could rise again.", "rise"), "VB");
        assert_eq!(tag_of("They don't know.", "know"), "VB");
    }

    #[test]
    fn test_irregular_and_participles() {
        assert_eq!(tag_of("She said nothing.", "said"), "VBD");
        assert_eq!(tag_of("The deal was signed.", "signed"), "VBN");
        assert_eq!(tag_of("Prices have gone up.", "gone"), "VBN");
    }

    #[test]
    fn test_possessive_and_contraction() {
        assert_eq!(tag_of("Apple's profit rose.", "'s"), "POS");
        assert_eq!(tag_of("It's late.", "'s"), "VBZ");
        assert_eq!(tag_of("They can't stop.", "n't"), "RB");
    }

    #[test]
    fn test_midsentence_capital_is_proper() {
        assert_eq!(tag_of("They met Bill.", "Bill"), "NNP");
        assert_eq!(tag_of("Bill passed the vote.", "Bill"), "NNP");
        assert_eq!(tag_of("Shares rose in May.", "May"), "NNP");
        assert_eq!(tag_of("Prices may rise.", "may"), "MD");
    }

    #[test]
    fn test_person_and_org_runs() {
        let got = entities("Canadian Prime Minister Justin Trudeau visited the University of Toronto.");
        assert!(got.contains(&("Canadian".to_string(), EntityLabel::Norp)));
        assert!(got.contains(&("Justin Trudeau".to_string(), EntityLabel::Person)));
        assert!(got.contains(&("University of Toronto".to_string(), EntityLabel::Org)));
    }

    #[test]
    fn test_org_suffix_and_gazetteer_phrase() {
        let got = entities("Shares of Acme Corp. fell after the Bank of Canada spoke.");
        assert!(got.contains(&("Acme Corp.".to_string(), EntityLabel::Org)));
        assert!(got.contains(&("Bank of Canada".to_string(), EntityLabel::Org)));
    }

    #[test]
    fn test_numeric_entities() {
        let got = entities("On January 10, 2022 the firm raised $4.5 billion, up 12% from last year.");
        assert!(got.contains(&("January 10, 2022".to_string(), EntityLabel::Date)));
        assert!(got.contains(&("$4.5 billion".to_string(), EntityLabel::Money)));
        assert!(got.contains(&("12%".to_string(), EntityLabel::Percent)));
        assert!(got.contains(&("last year".to_string(), EntityLabel::Date)));

        let got = entities("The first of three votes is on Monday.");
        assert!(got.contains(&("first".to_string(), EntityLabel::Ordinal)));
        assert!(got.contains(&("three".to_string(), EntityLabel::Cardinal)));
        assert!(got.contains(&("Monday".to_string(), EntityLabel::Date)));
    }

    #[test]
    fn test_gpe_in_sentence() {
        let got = entities("Stocks fell in Toronto and New York.");
        assert!(got.contains(&("Toronto".to_string(), EntityLabel::Gpe)));
        assert!(got.contains(&("New York".to_string(), EntityLabel::Gpe)));
    }

    #[test]
    fn test_length_limit() {
        let err = RuleTagger::new(5).tag("longer than five").unwrap_err();
        assert!(matches!(err, Error::Analyzer { analyzer: "tagger", .. }));
        assert!(RuleTagger::new(5).tag("short").is_ok());
    }

    #[test]
    fn test_empty_text() {
        let doc = tagger().tag("").unwrap();
        assert!(doc.tokens.is_empty());
        assert!(doc.entities.is_empty());
    }
}
