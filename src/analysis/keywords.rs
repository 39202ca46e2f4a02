//! Keyword, theme, and pros/cons extraction over analyzed reviews

use crate::models::TermCount;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// ASCII words of length >= 3; shorter tokens carry no theme signal
static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[a-zA-Z]{3,}\b").unwrap());

/// Any ASCII word, used for phrase windows
static PHRASE_WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[a-zA-Z]+\b").unwrap());

const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "this", "that", "have", "from",
    "will", "your", "more", "been", "what", "were", "there", "their",
    "would", "could", "very", "also", "just", "only",
    "other", "after", "before", "some", "when", "which", "where",
    "these", "those", "then", "than", "both", "each", "they", "them",
    "was", "are", "has", "had", "but", "not", "can", "did", "does",
];

/// Domain keywords tracked as corpus themes
const DOMAIN_KEYWORDS: &[&str] = &[
    "quality", "price", "shipping", "delivery", "design",
    "battery", "screen", "performance", "value", "packaging",
];

/// Rank a frequency map: count descending, term ascending on ties.
/// Deterministic for reproducible fixtures.
pub fn rank(counts: HashMap<String, usize>, n: usize) -> Vec<TermCount> {
    let mut ranked: Vec<TermCount> = counts
        .into_iter()
        .map(|(term, count)| TermCount::new(term, count))
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
    ranked.truncate(n);
    ranked
}

/// Extracts high-frequency terms and key phrases from review text
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stop_words: HashSet<String>,
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Replace the stop-word list
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = words.into_iter().map(|w| w.into().to_lowercase()).collect();
        self
    }

    fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Top-N terms across the given texts, stop words excluded
    pub fn top_terms<'a, I>(&self, texts: I, n: usize) -> Vec<TermCount>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for text in texts {
            let lower = text.to_lowercase();
            for m in WORD_REGEX.find_iter(&lower) {
                let word = m.as_str();
                if !self.is_stop_word(word) {
                    *counts.entry(word.to_string()).or_insert(0) += 1;
                }
            }
        }
        rank(counts, n)
    }

    /// Top-N two-word phrases where neither word is a stop word.
    ///
    /// Phrases occurring fewer than `min_count` times are dropped.
    pub fn top_phrases<'a, I>(&self, texts: I, n: usize, min_count: usize) -> Vec<TermCount>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for text in texts {
            let lower = text.to_lowercase();
            let words: Vec<&str> = PHRASE_WORD_REGEX.find_iter(&lower).map(|m| m.as_str()).collect();
            for pair in words.windows(2) {
                if pair.iter().any(|w| self.is_stop_word(w)) {
                    continue;
                }
                *counts.entry(pair.join(" ")).or_insert(0) += 1;
            }
        }
        counts.retain(|_, count| *count >= min_count);
        rank(counts, n)
    }

    /// Domain keywords mentioned in one review, capped at five.
    ///
    /// Falls back to the generic "product" theme when nothing matches.
    pub fn domain_keywords(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        let mut found: Vec<String> = DOMAIN_KEYWORDS
            .iter()
            .filter(|k| lower.contains(*k))
            .map(|k| k.to_string())
            .collect();
        found.truncate(5);
        if found.is_empty() {
            found.push("product".to_string());
        }
        found
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Derives pros/cons tags from fixed trigger-phrase sets.
///
/// A tag fires when any trigger is a substring of the normalized text;
/// multiple tags may fire for one review.
#[derive(Debug, Clone)]
pub struct TagExtractor {
    pros: Vec<(String, Vec<String>)>,
    cons: Vec<(String, Vec<String>)>,
}

fn tag_set(entries: &[(&str, &[&str])]) -> Vec<(String, Vec<String>)> {
    entries
        .iter()
        .map(|(tag, triggers)| {
            (
                tag.to_string(),
                triggers.iter().map(|t| t.to_string()).collect(),
            )
        })
        .collect()
}

impl TagExtractor {
    pub fn new() -> Self {
        Self {
            pros: tag_set(&[
                ("good quality", &["good quality", "high quality", "well made", "durable", "solid", "sturdy"]),
                ("fast delivery", &["fast shipping", "quick delivery", "arrived quickly", "fast delivery"]),
                ("good value", &["good price", "great value", "worth the money", "affordable"]),
                ("great design", &["beautiful", "sleek", "nice design", "looks great"]),
                ("easy to use", &["easy to use", "user friendly", "intuitive", "simple"]),
            ]),
            cons: tag_set(&[
                ("poor quality", &["poor quality", "cheap", "flimsy", "broke", "fragile", "low quality"]),
                ("shipping issues", &["late delivery", "delayed", "slow shipping", "damaged", "poor packaging"]),
                ("overpriced", &["expensive", "overpriced", "not worth", "too much"]),
                ("technical issues", &["doesn't work", "not working", "defective", "malfunction", "glitch"]),
                ("poor design", &["uncomfortable", "awkward", "heavy", "bulky"]),
            ]),
        }
    }

    fn matching_tags(sets: &[(String, Vec<String>)], text_lower: &str) -> Vec<String> {
        sets.iter()
            .filter(|(_, triggers)| triggers.iter().any(|t| text_lower.contains(t.as_str())))
            .map(|(tag, _)| tag.clone())
            .collect()
    }

    /// Pros tags fired by a review text
    pub fn pros(&self, text: &str) -> Vec<String> {
        Self::matching_tags(&self.pros, &text.to_lowercase())
    }

    /// Cons tags fired by a review text
    pub fn cons(&self, text: &str) -> Vec<String> {
        Self::matching_tags(&self.cons, &text.to_lowercase())
    }
}

impl Default for TagExtractor {
    fn default() -> Self {
        Self::new()
    }
}
