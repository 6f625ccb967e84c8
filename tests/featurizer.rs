//! Featurizer behaviour through the public API, including custom analyzers.

use intelligent_news::config::FeaturizerConfig;
use intelligent_news::error::{Error, Result};
use intelligent_news::models::{Article, ArticleSet, EntityLabel, TextField};
use intelligent_news::nlp::{
    Analyzers, Entity, Featurizer, KeywordExtractor, LexiconSentiment, Sentiment,
    SentimentAnalyzer, TaggedDoc, TaggedToken, Tagger, YakeExtractor,
};
use std::sync::Arc;

fn default_featurizer() -> Featurizer {
    Featurizer::from_config(&FeaturizerConfig::default())
}

mod default_analyzers {
    use super::*;

    #[test]
    fn test_apple_released_a_new_phone() {
        let record = default_featurizer()
            .featurize("Apple released a new phone today.")
            .unwrap();
        assert!(record.nouns.contains_key("Apple"));
        assert!(record.nouns.contains_key("phone"));
        assert_eq!(record.named_entities.get("Apple"), Some(&EntityLabel::Org));
        assert!((-1.0..=1.0).contains(&record.polarity));
    }

    #[test]
    fn test_keywords_ascending() {
        let record = default_featurizer()
            .featurize(
                "The central bank raised interest rates again. Interest rates have \
                 climbed five times this year, and the central bank expects more.",
            )
            .unwrap();
        assert!(!record.keywords.is_empty());
        assert!(
            record
                .keywords
                .windows(2)
                .all(|w| w[0].1 <= w[1].1)
        );
    }

    #[test]
    fn test_record_serializes() {
        let record = default_featurizer()
            .featurize("Apple released a new phone today.")
            .unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["named_entities"]["Apple"], "ORG");
        assert!(json["keywords"][0][0].is_string());
        assert!(json["keywords"][0][1].is_number());
    }
}

mod custom_analyzers {
    use super::*;

    /// Tags every whitespace word as `NN`, and refuses texts containing "FAIL".
    struct WordTagger;

    impl Tagger for WordTagger {
        fn tag(&self, text: &str) -> Result<TaggedDoc> {
            if text.contains("FAIL") {
                return Err(Error::analyzer("tagger", "refused"));
            }
            let mut doc = TaggedDoc::default();
            let mut offset = 0;
            for word in text.split_whitespace() {
                let start = text[offset..].find(word).map_or(offset, |i| offset + i);
                let end = start + word.len();
                offset = end;
                doc.tokens.push(TaggedToken {
                    text: word.to_string(),
                    tag: "NN",
                    start,
                    end,
                    sentence: 0,
                });
                if word == "Ottawa" {
                    doc.entities.push(Entity {
                        text: word.to_string(),
                        label: EntityLabel::Gpe,
                        start,
                        end,
                    });
                }
            }
            Ok(doc)
        }
    }

    struct FlatSentiment;

    impl SentimentAnalyzer for FlatSentiment {
        fn analyze(&self, _text: &str) -> Result<Sentiment> {
            Ok(Sentiment {
                polarity: 0.5,
                subjectivity: 0.25,
                noun_phrases: vec!["fixed phrase".to_string()],
            })
        }
    }

    struct NoKeywords;

    impl KeywordExtractor for NoKeywords {
        fn extract(&self, _text: &str) -> Result<Vec<(String, f64)>> {
            Ok(Vec::new())
        }
    }

    fn featurizer() -> Featurizer {
        Featurizer::new(Analyzers::new(
            Arc::new(WordTagger),
            Box::new(FlatSentiment),
            Box::new(NoKeywords),
        ))
    }

    #[test]
    fn test_record_is_assembled_from_analyzers() {
        let record = featurizer().featurize("budget Ottawa budget").unwrap();
        assert_eq!(record.polarity, 0.5);
        assert_eq!(record.subjectivity, 0.25);
        assert_eq!(record.noun_phrases, vec!["fixed phrase"]);
        assert!(record.keywords.is_empty());
        assert_eq!(record.nouns.len(), 2);
        assert_eq!(record.named_entities.get("Ottawa"), Some(&EntityLabel::Gpe));
        assert!(record.verbs.is_empty());
    }

    /// Returns the same fixed document for any text.
    struct FixedTagger(TaggedDoc);

    impl Tagger for FixedTagger {
        fn tag(&self, _text: &str) -> Result<TaggedDoc> {
            Ok(self.0.clone())
        }
    }

    fn token(text: &str, tag: &'static str, start: usize) -> TaggedToken {
        TaggedToken {
            text: text.to_string(),
            tag,
            start,
            end: start + text.len(),
            sentence: 0,
        }
    }

    fn entity(text: &str, label: EntityLabel, start: usize) -> Entity {
        Entity {
            text: text.to_string(),
            label,
            start,
            end: start + text.len(),
        }
    }

    #[test]
    fn test_repeated_token_and_entity_keep_last_tag() {
        let doc = TaggedDoc {
            tokens: vec![
                token("deer", "NN", 0),
                token("run", "VB", 5),
                token("Jordan", "NNP", 9),
                token("deer", "NNS", 16),
                token("run", "VBD", 21),
            ],
            entities: vec![
                entity("Jordan", EntityLabel::Person, 9),
                entity("Jordan", EntityLabel::Gpe, 30),
            ],
        };
        let featurizer = Featurizer::new(Analyzers::new(
            Arc::new(FixedTagger(doc)),
            Box::new(FlatSentiment),
            Box::new(NoKeywords),
        ));

        let record = featurizer.featurize("deer run Jordan deer run").unwrap();

        assert_eq!(record.nouns.get("deer").map(String::as_str), Some("NNS"));
        assert_eq!(record.nouns.get("Jordan").map(String::as_str), Some("NNP"));
        assert_eq!(record.verbs.get("run").map(String::as_str), Some("VBD"));
        assert_eq!(record.named_entities.get("Jordan"), Some(&EntityLabel::Gpe));
        assert_eq!(record.named_entities.len(), 1);
    }

    #[test]
    fn test_failing_row_leaves_others_alone() {
        let set = ArticleSet {
            total_results: 3,
            articles: ["first story", "FAIL here", "third story"]
                .into_iter()
                .map(|body| Article {
                    title: Some(body.to_uppercase()),
                    description: Some(body.to_string()),
                    ..Default::default()
                })
                .collect(),
        };

        let rows = featurizer().featurize_results(&set, TextField::Description);

        assert_eq!(rows.iter().map(|r| r.index).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(rows[0].features.is_some());
        assert!(rows[1].features.is_none());
        assert!(rows[2].features.is_some());
        assert!(rows[2].features.as_ref().unwrap().nouns.contains_key("third"));
    }

    #[test]
    fn test_shared_tagger_with_default_sentiment() {
        let tagger: Arc<dyn Tagger> = Arc::new(WordTagger);
        let featurizer = Featurizer::new(Analyzers::new(
            Arc::clone(&tagger),
            Box::new(LexiconSentiment::new(tagger)),
            Box::new(YakeExtractor::new(FeaturizerConfig::default().keywords)),
        ));
        assert!(featurizer.featurize("FAIL").is_none());
        assert!(featurizer.featurize("quiet news").is_some());
    }
}
