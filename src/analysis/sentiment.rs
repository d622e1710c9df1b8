//! Sentiment polarity of reviewer commentary.
//!
//! [`LexiconSentiment`] averages the polarity of opinion words found in the
//! text. A negation ("not", "never", ...) flips and halves the next opinion
//! word; an intensifier ("very", "highly", ...) scales it. Articles between a
//! modifier and its opinion word are skipped; any other word clears pending
//! modifiers.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Maps text to a polarity in `[-1, 1]`.
pub trait SentimentAnalyzer: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
}

/// Polarity scale applied to an opinion word following a negation.
const NEGATION_FACTOR: f64 = -0.5;

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "hardly", "barely", "isn't", "wasn't", "doesn't", "don't", "cannot",
];

const ARTICLES: &[&str] = &["a", "an", "the"];

static INTENSIFIERS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    HashMap::from([
        ("very", 1.3),
        ("really", 1.2),
        ("highly", 1.3),
        ("extremely", 1.5),
        ("exceptionally", 1.5),
        ("particularly", 1.2),
        ("quite", 1.1),
        ("somewhat", 0.8),
        ("slightly", 0.6),
        ("fairly", 0.9),
    ])
});

static LEXICON: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    HashMap::from([
        // positive
        ("excellent", 1.0),
        ("outstanding", 1.0),
        ("exceptional", 0.9),
        ("impressive", 0.8),
        ("great", 0.8),
        ("strong", 0.4),
        ("good", 0.7),
        ("solid", 0.4),
        ("novel", 0.5),
        ("original", 0.4),
        ("innovative", 0.6),
        ("interesting", 0.5),
        ("insightful", 0.6),
        ("clear", 0.3),
        ("convincing", 0.5),
        ("rigorous", 0.5),
        ("thorough", 0.4),
        ("comprehensive", 0.4),
        ("significant", 0.4),
        ("valuable", 0.5),
        ("useful", 0.4),
        ("promising", 0.5),
        ("elegant", 0.6),
        ("well-written", 0.7),
        ("well-structured", 0.6),
        ("well-motivated", 0.6),
        ("sound", 0.4),
        ("compelling", 0.6),
        ("accept", 0.5),
        ("recommend", 0.4),
        // negative
        ("poor", -0.6),
        ("weak", -0.5),
        ("bad", -0.7),
        ("terrible", -1.0),
        ("flawed", -0.6),
        ("unclear", -0.4),
        ("confusing", -0.5),
        ("incremental", -0.3),
        ("trivial", -0.5),
        ("limited", -0.3),
        ("insufficient", -0.5),
        ("unconvincing", -0.5),
        ("incorrect", -0.6),
        ("wrong", -0.6),
        ("missing", -0.3),
        ("lacking", -0.4),
        ("sloppy", -0.6),
        ("misleading", -0.6),
        ("questionable", -0.4),
        ("disappointing", -0.6),
        ("unsound", -0.6),
        ("poorly-written", -0.7),
        ("reject", -0.5),
    ])
});

/// Lexicon-based polarity analyzer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconSentiment;

impl LexiconSentiment {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentAnalyzer for LexiconSentiment {
    /// Returns `0.0` when no opinion word is present.
    fn polarity(&self, text: &str) -> f64 {
        let mut scores = Vec::new();
        let mut negated = false;
        let mut intensity = 1.0;

        for token in tokenize(text) {
            let token = token.as_str();
            if NEGATIONS.contains(&token) {
                negated = true;
            } else if let Some(&factor) = INTENSIFIERS.get(token) {
                intensity *= factor;
            } else if let Some(&polarity) = LEXICON.get(token) {
                let mut value = polarity * intensity;
                if negated {
                    value *= NEGATION_FACTOR;
                }
                scores.push(value.clamp(-1.0, 1.0));
                negated = false;
                intensity = 1.0;
            } else if !ARTICLES.contains(&token) {
                negated = false;
                intensity = 1.0;
            }
        }

        if scores.is_empty() {
            return 0.0;
        }
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

/// Lowercased words; hyphens and apostrophes stay inside a word.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '-' || c == '\'' || c == '’'))
        .map(|token| token.trim_matches(|c| c == '-' || c == '\'' || c == '’'))
        .filter(|token| !token.is_empty())
        .map(|token| token.to_lowercase().replace('’', "'"))
}

/// Polarity source used when a request carries no reviewer text: always neutral.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralSentiment;

impl SentimentAnalyzer for NeutralSentiment {
    fn polarity(&self, _text: &str) -> f64 {
        0.0
    }
}
