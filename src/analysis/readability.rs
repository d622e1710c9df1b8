//! Flesch reading ease.
//!
//! `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`.
//! Typical academic prose lands between 0 and 50; plain English sits around 60-70.

/// Computes the Flesch reading-ease score of `text`, rounded to two decimals.
///
/// Returns `0.0` for text without words.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let words: Vec<&str> = text
        .split_whitespace()
        .filter(|w| w.chars().any(char::is_alphanumeric))
        .collect();

    if words.is_empty() {
        return 0.0;
    }

    let word_count = words.len() as f64;
    let sentence_count = count_sentences(text).max(1) as f64;
    let syllable_count: usize = words.iter().map(|w| count_syllables(w)).sum();

    let score = 206.835
        - 1.015 * (word_count / sentence_count)
        - 84.6 * (syllable_count as f64 / word_count);

    (score * 100.0).round() / 100.0
}

/// Sentences are runs of text terminated by `.`, `!` or `?` that contain a word.
fn count_sentences(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|segment| segment.chars().any(char::is_alphabetic))
        .count()
}

/// Estimates syllables by counting vowel groups, with a silent trailing `e`.
///
/// Every word with letters counts at least one syllable; tokens without
/// letters (numbers, symbols) count one.
pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    if letters.is_empty() {
        return 1;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut groups = 0;
    let mut prev_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            groups += 1;
        }
        prev_vowel = vowel;
    }

    let n = letters.len();
    let silent_e = n > 2 && letters[n - 1] == 'e' && !is_vowel(letters[n - 2]) && letters[n - 2] != 'l';
    if silent_e && groups > 1 {
        groups -= 1;
    }

    groups.max(1)
}
