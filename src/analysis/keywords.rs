//! Term-weighting keyword extraction.
//!
//! Documents are lowercased and split into runs of alphanumeric or `_`
//! characters; tokens shorter than two characters and English stop words are
//! dropped. A term's weight is its total count across the collection.

use std::collections::HashMap;

use super::stopwords::is_stop_word;
use crate::constants::DEFAULT_TOP_KEYWORDS;

/// Extracts the top-N terms of a document collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordExtractor {
    top_n: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_KEYWORDS)
    }
}

impl KeywordExtractor {
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Returns up to `top_n` keywords, sorted alphabetically.
    ///
    /// Ties on weight are broken alphabetically. An empty collection, or one
    /// made only of stop words, yields an empty set.
    pub fn extract(&self, documents: &[&str]) -> Vec<String> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for document in documents {
            for token in tokenize(document) {
                *counts.entry(token).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
        ranked.sort_by(|(a_term, a_count), (b_term, b_count)| {
            b_count.cmp(a_count).then_with(|| a_term.cmp(b_term))
        });
        ranked.truncate(self.top_n);

        let mut keywords: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        keywords.sort();
        keywords
    }

    /// Keywords joined with single spaces, ready for embedding.
    pub fn extract_joined(&self, documents: &[&str]) -> String {
        self.extract(documents).join(" ")
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_lowercase)
        .filter(|token| !is_stop_word(token))
}
