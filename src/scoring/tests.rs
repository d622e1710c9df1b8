use super::*;
use crate::analysis::LexiconSentiment;
use crate::constants::{NEUTRAL_FALLBACK_SCORE, NOVELTY_PREFIX_CHARS, UNREADABLE_DOCUMENT_FEEDBACK};
use crate::embedding::{EmbeddingError, SentenceEmbedder};
use std::collections::HashMap;

/// Returns a registered vector per exact text, or a fixed default.
struct TableEmbedder {
    table: HashMap<String, Vec<f32>>,
    default: Vec<f32>,
}

impl TableEmbedder {
    fn new(default: Vec<f32>) -> Self {
        Self {
            table: HashMap::new(),
            default,
        }
    }

    fn with(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.table.insert(text.to_string(), vector);
        self
    }
}

impl SentenceEmbedder for TableEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(self.table.get(text).cloned().unwrap_or_else(|| self.default.clone()))
    }

    fn embedding_dim(&self) -> usize {
        self.default.len()
    }
}

struct BrokenEmbedder;

impl SentenceEmbedder for BrokenEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Err(EmbeddingError::InferenceFailed {
            reason: "device lost".to_string(),
        })
    }

    fn embedding_dim(&self) -> usize {
        2
    }
}

/// Unit vector whose cosine with `[1, 0]` is `cos`.
fn at_cosine(cos: f32) -> Vec<f32> {
    vec![cos, (1.0 - cos * cos).sqrt()]
}

mod novelty_tests {
    use super::*;

    #[test]
    fn test_max_similarity_gives_zero_novelty() {
        let embedder = TableEmbedder::new(at_cosine(0.9));
        let score = score_novelty(&embedder, "paper", &[vec![1.0, 0.0]]).expect("score");
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_min_similarity_gives_full_novelty() {
        let embedder = TableEmbedder::new(at_cosine(0.2));
        let score = score_novelty(&embedder, "paper", &[vec![1.0, 0.0]]).expect("score");
        assert_eq!(score, 5.0);
    }

    #[test]
    fn test_mean_over_accepted() {
        // cosines 0.9 and 0.2 average to 0.55, the midpoint.
        let embedder = TableEmbedder::new(vec![1.0, 0.0]);
        let accepted = vec![at_cosine(0.9), at_cosine(0.2)];
        let score = score_novelty(&embedder, "paper", &accepted).expect("score");
        assert_eq!(score, 2.5);
    }

    #[test]
    fn test_only_prefix_is_embedded() {
        let head = "a".repeat(NOVELTY_PREFIX_CHARS);
        let text = format!("{head}TAIL");
        let embedder = TableEmbedder::new(at_cosine(0.9)).with(&head, at_cosine(0.2));

        let score = score_novelty(&embedder, &text, &[vec![1.0, 0.0]]).expect("score");
        assert_eq!(score, 5.0);
    }

    #[test]
    fn test_prefix_respects_char_boundaries() {
        let text = "é".repeat(NOVELTY_PREFIX_CHARS + 50);
        assert_eq!(novelty_prefix(&text).chars().count(), NOVELTY_PREFIX_CHARS);
        assert_eq!(novelty_prefix("short"), "short");
    }

    #[test]
    fn test_empty_accepted_corpus_falls_back() {
        let score = score_novelty(&BrokenEmbedder, "paper", &[]).expect("fallback");
        assert_eq!(score, NEUTRAL_FALLBACK_SCORE);
    }

    #[test]
    fn test_embedding_failure_propagates() {
        let err = score_novelty(&BrokenEmbedder, "paper", &[vec![1.0, 0.0]]).unwrap_err();
        assert!(matches!(err, ScoringError::Embedding(_)));
    }

    #[test]
    fn test_negative_similarity_clamps_to_full_novelty() {
        assert_eq!(novelty_from_similarity(-0.7), 5.0);
        assert_eq!(novelty_from_similarity(0.99), 0.0);
    }
}

mod quality_tests {
    use super::*;

    #[test]
    fn test_clean_readable_text_scores_five() {
        let score = quality_score(&QualityMeasurements {
            grammar_issues: 0,
            word_count: 350,
            readability: 60.0,
        });
        assert_eq!(score, 5.0);
    }

    #[test]
    fn test_error_density_floor_of_one_hundred_words() {
        assert_eq!(errors_per_100_words(3, 40), 3.0);
        assert_eq!(errors_per_100_words(3, 300), 1.0);
    }

    #[test]
    fn test_grammar_raw_score() {
        assert_eq!(grammar_raw_score(0, 500), 100.0);
        assert_eq!(grammar_raw_score(10, 100), 50.0);
        assert_eq!(grammar_raw_score(20, 100), 0.0);
        assert_eq!(grammar_raw_score(90, 100), 0.0);
    }

    #[test]
    fn test_average_of_normalized_parts() {
        // raw 75 -> 2.5; readability 15 -> 1.25; mean 1.875
        let score = quality_score(&QualityMeasurements {
            grammar_issues: 5,
            word_count: 100,
            readability: 15.0,
        });
        assert_eq!(score, 1.88);
    }

    #[test]
    fn test_negative_readability_clamps() {
        let score = quality_score(&QualityMeasurements {
            grammar_issues: 0,
            word_count: 100,
            readability: -40.0,
        });
        assert_eq!(score, 2.5);
    }

    #[test]
    fn test_word_count_whitespace() {
        assert_eq!(word_count("  one\ttwo\nthree  "), 3);
        assert_eq!(word_count(""), 0);
    }
}

mod relevance_tests {
    use super::*;

    const DOMAIN: &[f32] = &[1.0, 0.0];

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_midpoint_similarity() {
        let embedder = TableEmbedder::new(at_cosine(0.55));
        let score =
            score_relevance(&embedder, Some(DOMAIN), &keywords(&["graph"])).expect("score");
        assert_eq!(score, 2.5);
    }

    #[test]
    fn test_joined_keywords_are_embedded() {
        let embedder =
            TableEmbedder::new(at_cosine(0.2)).with("graph neural", at_cosine(0.9));
        let score = score_relevance(&embedder, Some(DOMAIN), &keywords(&["graph", "neural"]))
            .expect("score");
        assert_eq!(score, 5.0);
    }

    #[test]
    fn test_missing_domain_keywords_fall_back() {
        let score = score_relevance(&BrokenEmbedder, None, &keywords(&["graph"])).expect("score");
        assert_eq!(score, NEUTRAL_FALLBACK_SCORE);
    }

    #[test]
    fn test_empty_paper_keywords_score_zero() {
        let score = score_relevance(&BrokenEmbedder, Some(DOMAIN), &[]).expect("score");
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_embedding_failure_propagates() {
        let err =
            score_relevance(&BrokenEmbedder, Some(DOMAIN), &keywords(&["x1"])).unwrap_err();
        assert!(err.to_string().contains("device lost"));
    }
}

mod sentiment_tests {
    use super::*;

    #[test]
    fn test_polarity_mapping() {
        assert_eq!(sentiment_from_polarity(-1.0), 0.0);
        assert_eq!(sentiment_from_polarity(0.0), 2.5);
        assert_eq!(sentiment_from_polarity(1.0), 5.0);
        assert_eq!(sentiment_from_polarity(0.5), 3.75);
    }

    #[test]
    fn test_out_of_range_polarity_clamps() {
        assert_eq!(sentiment_from_polarity(3.0), 5.0);
        assert_eq!(sentiment_from_polarity(-2.0), 0.0);
        assert_eq!(sentiment_from_polarity(f64::NAN), 2.5);
    }

    #[test]
    fn test_missing_review_is_neutral() {
        let analyzer = LexiconSentiment::new();
        assert_eq!(score_sentiment(&analyzer, None), 2.5);
        assert_eq!(score_sentiment(&analyzer, Some("   ")), 2.5);
    }

    #[test]
    fn test_review_is_scored() {
        let analyzer = LexiconSentiment::new();
        assert_eq!(score_sentiment(&analyzer, Some("An excellent paper")), 5.0);
        assert!(score_sentiment(&analyzer, Some("weak and flawed")) < 2.0);
    }
}

mod composite_tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = Weights::default();
        assert_eq!(weights.novelty, 0.30);
        assert_eq!(weights.quality, 0.25);
        assert_eq!(weights.relevance, 0.25);
        assert_eq!(weights.sentiment, 0.20);
        assert!((weights.sum() - 1.0).abs() < 1e-12);
        assert!(ScoringPolicy::default().validate().is_ok());
    }

    #[test]
    fn test_composite_is_rounded_weighted_sum() {
        let scores = ScoreVector::new(4.12, 3.33, 2.71, 2.5);
        // 1.236 + 0.8325 + 0.6775 + 0.5 = 3.246
        assert_eq!(composite_score(&scores, &Weights::default()), 3.25);
    }

    #[test]
    fn test_threshold_boundary_is_accepted() {
        let verdict = aggregate(&ScoreVector::new(3.0, 3.0, 3.0, 3.0), &ScoringPolicy::default());
        assert_eq!(verdict.composite, 3.0);
        assert_eq!(verdict.label, VerdictLabel::Accepted);
    }

    #[test]
    fn test_just_below_threshold_is_rejected() {
        let verdict =
            aggregate(&ScoreVector::new(2.99, 2.99, 2.99, 2.99), &ScoringPolicy::default());
        assert_eq!(verdict.composite, 2.99);
        assert_eq!(verdict.label, VerdictLabel::Rejected);
        assert!(!verdict.is_accepted());
    }

    #[test]
    fn test_custom_policy() {
        let policy = ScoringPolicy {
            weights: Weights {
                novelty: 1.0,
                quality: 0.0,
                relevance: 0.0,
                sentiment: 0.0,
            },
            accept_threshold: 4.5,
        };
        assert!(policy.validate().is_ok());

        let verdict = aggregate(&ScoreVector::new(4.4, 5.0, 5.0, 5.0), &policy);
        assert_eq!(verdict.composite, 4.4);
        assert_eq!(verdict.label, VerdictLabel::Rejected);
    }

    #[test]
    fn test_composite_stays_in_range() {
        let steps = [0.0, 0.01, 1.7, 2.5, 3.99, 5.0];
        for &n in &steps {
            for &q in &steps {
                for &r in &steps {
                    for &s in &steps {
                        let composite =
                            composite_score(&ScoreVector::new(n, q, r, s), &Weights::default());
                        assert!((0.0..=5.0).contains(&composite), "{composite}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_policy_validation_errors() {
        let mut policy = ScoringPolicy::default();
        policy.weights.novelty = 0.5;
        assert!(policy.validate().unwrap_err().contains("sum"));

        let mut policy = ScoringPolicy::default();
        policy.weights.quality = -0.25;
        policy.weights.novelty = 0.8;
        assert!(policy.validate().unwrap_err().contains("quality"));

        let mut policy = ScoringPolicy::default();
        policy.accept_threshold = 5.5;
        assert!(policy.validate().unwrap_err().contains("threshold"));
    }

    #[test]
    fn test_verdict_serializes_uppercase_label() {
        let verdict = aggregate(&ScoreVector::new(5.0, 5.0, 5.0, 5.0), &ScoringPolicy::default());
        let json = serde_json::to_value(&verdict).expect("serialize");

        assert_eq!(json["verdict"], "ACCEPTED");
        assert_eq!(json["composite"], 5.0);
        assert_eq!(json["feedback"].as_array().map(Vec::len), Some(4));
        assert_eq!(VerdictLabel::Rejected.to_string(), "REJECTED");
        assert_eq!(VerdictLabel::Accepted.as_status(), "accepted");
    }
}

mod feedback_tests {
    use super::*;

    #[test]
    fn test_four_lines_in_fixed_order() {
        let feedback = synthesize_feedback(&ScoreVector::new(4.5, 4.5, 4.5, 4.5));
        assert_eq!(
            feedback,
            vec![
                "✅ High novelty and original contributions.",
                "✅ Strong grammar and readability.",
                "✅ Highly relevant to the domain.",
                "✅ Positive reviewer tone.",
            ]
        );
    }

    #[test]
    fn test_negative_tier_messages() {
        let feedback = synthesize_feedback(&ScoreVector::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(
            feedback,
            vec![
                "❌ Lacks novelty.",
                "❌ Poor readability.",
                "❌ Low relevance.",
                "❌ Weak reviewer support.",
            ]
        );
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Dimension::Novelty.tier(4.0), Tier::Positive);
        assert_eq!(Dimension::Novelty.tier(3.99), Tier::Neutral);
        assert_eq!(Dimension::Novelty.tier(3.0), Tier::Neutral);
        assert_eq!(Dimension::Novelty.tier(2.99), Tier::Negative);

        assert_eq!(Dimension::Quality.tier(4.0), Tier::Positive);
        assert_eq!(Dimension::Quality.tier(2.5), Tier::Neutral);
        assert_eq!(Dimension::Quality.tier(2.49), Tier::Negative);

        for dimension in [Dimension::Relevance, Dimension::Sentiment] {
            assert_eq!(dimension.tier(3.5), Tier::Positive);
            assert_eq!(dimension.tier(3.49), Tier::Neutral);
            assert_eq!(dimension.tier(2.0), Tier::Neutral);
            assert_eq!(dimension.tier(1.99), Tier::Negative);
        }
    }

    #[test]
    fn test_neutral_tier_messages() {
        let feedback = synthesize_feedback(&ScoreVector::new(3.5, 3.0, 2.5, 2.5));
        assert_eq!(
            feedback,
            vec![
                "ℹ️ Moderate novelty, could improve.",
                "ℹ️ Acceptable, needs polishing.",
                "ℹ️ Moderately relevant.",
                "ℹ️ Neutral tone.",
            ]
        );
    }

    #[test]
    fn test_each_line_matches_exactly_one_tier() {
        let tiers = [Tier::Positive, Tier::Neutral, Tier::Negative];
        for score in [0.0, 1.0, 2.0, 2.5, 3.0, 3.5, 4.0, 5.0] {
            let feedback = synthesize_feedback(&ScoreVector::new(score, score, score, score));
            for (line, dimension) in feedback.iter().zip(Dimension::ALL) {
                let matches = tiers
                    .iter()
                    .filter(|&&tier| dimension.message(tier) == *line)
                    .count();
                assert_eq!(matches, 1, "{line}");
            }
        }
    }

    #[test]
    fn test_unreadable_message_is_negative() {
        assert!(UNREADABLE_DOCUMENT_FEEDBACK.starts_with(Tier::Negative.marker()));
    }
}
