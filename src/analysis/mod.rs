//! Text analysis services consumed by the scorers.
//!
//! Each service is a narrow capability so scorers can be exercised with fakes:
//! - [`GrammarChecker`]: counts flagged issues (LanguageTool or stub)
//! - [`flesch_reading_ease`]: readability metric
//! - [`KeywordExtractor`]: top-N salient terms of a document collection
//! - [`SentimentAnalyzer`]: polarity in `[-1, 1]`

mod error;
pub mod grammar;
pub mod keywords;
pub mod readability;
pub mod sentiment;
mod stopwords;

pub use error::GrammarError;
pub use grammar::{GrammarChecker, LanguageToolChecker, StubGrammarChecker};
pub use keywords::KeywordExtractor;
pub use readability::{count_syllables, flesch_reading_ease};
pub use sentiment::{LexiconSentiment, NeutralSentiment, SentimentAnalyzer};
pub use stopwords::is_stop_word;
