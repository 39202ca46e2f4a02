//! Sentiment lexicon: polarity-tagged words, phrases, and negation markers
//!
//! The lexicon is immutable once built and shared read-only across scoring
//! calls. A custom lexicon can be loaded from a JSON file, which is the one
//! place where absence is fatal: scoring cannot run without word sets.

use crate::error::{Error, Result};
use crate::models::Sentiment;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Version tag of the built-in English lexicon
pub const BUILTIN_LEXICON_VERSION: &str = "builtin-en-1";

const POSITIVE_WORDS: &[&str] = &[
    "excellent", "perfect", "amazing", "fantastic", "wonderful", "awesome",
    "outstanding", "superb", "exceptional", "brilliant", "magnificent",
    "great", "good", "nice", "well", "better", "best", "quality",
    "worth", "value", "works", "working", "functional", "effective",
    "fast", "easy", "simple", "convenient", "comfortable", "useful",
    "love", "loved", "like", "liked", "enjoy", "satisfied", "pleased",
    "happy", "recommend", "recommended", "beautiful", "pretty",
];

const NEGATIVE_WORDS: &[&str] = &[
    "terrible", "horrible", "awful", "worst", "disgusting", "hate",
    "bad", "poor", "inferior", "weak", "wrong", "useless", "worthless",
    "broken", "damaged", "defective", "faulty", "cheap", "junk",
    "failed", "failure", "fail", "malfunction", "unreliable", "slow",
    "disappointed", "disappointing", "dissatisfied", "unhappy", "frustrated",
    "waste", "wasted", "fake", "scam", "return", "returned", "refund",
];

const NEUTRAL_WORDS: &[&str] = &[
    "okay", "ok", "fine", "average", "normal", "standard", "acceptable",
    "adequate", "fair", "moderate", "reasonable", "decent", "satisfactory",
    "alright", "so-so", "ordinary", "typical", "regular", "expected",
];

const NEGATION_WORDS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "cannot", "can't",
    "won't", "doesn't", "didn't", "isn't", "aren't", "wasn't",
];

/// Hedging phrases signalling deliberate mid-range sentiment
const HEDGING_PHRASES: &[&str] = &[
    "not bad", "not great", "just okay", "nothing special",
    "as expected", "its okay", "its fine", "could be better",
];

const RECOMMEND_PHRASES: &[&str] = &["highly recommend", "definitely recommend"];

const NON_RECOMMEND_PHRASES: &[&str] = &["do not recommend", "don't recommend"];

const COMPLAINT_PHRASES: &[&str] = &["waste of money", "terrible quality"];

/// Static table of polarity-tagged words and phrases
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Lexicon version tag
    version: String,
    positive: HashSet<String>,
    negative: HashSet<String>,
    neutral: HashSet<String>,
    negations: HashSet<String>,
    hedging_phrases: Vec<String>,
    recommend_phrases: Vec<String>,
    non_recommend_phrases: Vec<String>,
    complaint_phrases: Vec<String>,
}

/// On-disk JSON shape for custom lexicons
#[derive(Debug, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    version: Option<String>,
    positive: Vec<String>,
    negative: Vec<String>,
    neutral: Vec<String>,
    #[serde(default)]
    negations: Vec<String>,
    #[serde(default)]
    hedging_phrases: Vec<String>,
    #[serde(default)]
    recommend_phrases: Vec<String>,
    #[serde(default)]
    non_recommend_phrases: Vec<String>,
    #[serde(default)]
    complaint_phrases: Vec<String>,
}

fn to_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn to_vec(phrases: &[&str]) -> Vec<String> {
    phrases.iter().map(|p| p.to_string()).collect()
}

impl Lexicon {
    /// Create the built-in English lexicon
    pub fn new() -> Self {
        Self {
            version: BUILTIN_LEXICON_VERSION.to_string(),
            positive: to_set(POSITIVE_WORDS),
            negative: to_set(NEGATIVE_WORDS),
            neutral: to_set(NEUTRAL_WORDS),
            negations: to_set(NEGATION_WORDS),
            hedging_phrases: to_vec(HEDGING_PHRASES),
            recommend_phrases: to_vec(RECOMMEND_PHRASES),
            non_recommend_phrases: to_vec(NON_RECOMMEND_PHRASES),
            complaint_phrases: to_vec(COMPLAINT_PHRASES),
        }
    }

    /// Load a custom lexicon from a JSON file.
    ///
    /// Fails if the file is unreadable or any core word set is empty; this is
    /// checked before any review is processed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| Error::LexiconError(format!("{}: {e}", path.as_ref().display())))?;
        let file: LexiconFile = serde_json::from_str(&content)
            .map_err(|e| Error::LexiconError(format!("invalid lexicon JSON: {e}")))?;

        let lexicon = Self {
            version: file.version.unwrap_or_else(|| "custom".to_string()),
            positive: file.positive.iter().map(|w| w.to_lowercase()).collect(),
            negative: file.negative.iter().map(|w| w.to_lowercase()).collect(),
            neutral: file.neutral.iter().map(|w| w.to_lowercase()).collect(),
            negations: file.negations.iter().map(|w| w.to_lowercase()).collect(),
            hedging_phrases: file.hedging_phrases.iter().map(|p| p.to_lowercase()).collect(),
            recommend_phrases: file.recommend_phrases.iter().map(|p| p.to_lowercase()).collect(),
            non_recommend_phrases: file
                .non_recommend_phrases
                .iter()
                .map(|p| p.to_lowercase())
                .collect(),
            complaint_phrases: file.complaint_phrases.iter().map(|p| p.to_lowercase()).collect(),
        };
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Check that the lexicon is usable for scoring
    pub fn validate(&self) -> Result<()> {
        if self.positive.is_empty() || self.negative.is_empty() || self.neutral.is_empty() {
            return Err(Error::LexiconError(
                "lexicon must define positive, negative, and neutral word sets".to_string(),
            ));
        }
        Ok(())
    }

    /// Version tag of this lexicon
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Classify a single term, case-insensitively.
    ///
    /// Unknown terms produce no match; this is not an error.
    pub fn classify(&self, term: &str) -> Option<Sentiment> {
        let term = term.to_lowercase();
        if self.positive.contains(&term) {
            Some(Sentiment::Positive)
        } else if self.negative.contains(&term) {
            Some(Sentiment::Negative)
        } else if self.neutral.contains(&term) {
            Some(Sentiment::Neutral)
        } else {
            None
        }
    }

    /// Find every lexicon phrase contained in the text.
    ///
    /// Matches are independent evidence: a phrase match does not suppress
    /// matches of its constituent words, and one phrase may overlap another.
    pub fn match_phrases(&self, text: &str) -> Vec<(&str, Sentiment)> {
        let text = text.to_lowercase();
        let mut matches = Vec::new();
        for (phrases, sentiment) in [
            (&self.hedging_phrases, Sentiment::Neutral),
            (&self.recommend_phrases, Sentiment::Positive),
            (&self.non_recommend_phrases, Sentiment::Negative),
            (&self.complaint_phrases, Sentiment::Negative),
        ] {
            for phrase in phrases {
                if text.contains(phrase.as_str()) {
                    matches.push((phrase.as_str(), sentiment));
                }
            }
        }
        matches
    }

    /// Check whether a word is a negation marker
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(&word.to_lowercase())
    }

    /// Hedging phrases ("not bad", "just okay", ...)
    pub fn hedging_phrases(&self) -> &[String] {
        &self.hedging_phrases
    }

    /// Explicit-recommend phrases
    pub fn recommend_phrases(&self) -> &[String] {
        &self.recommend_phrases
    }

    /// Explicit non-recommend phrases
    pub fn non_recommend_phrases(&self) -> &[String] {
        &self.non_recommend_phrases
    }

    /// Strong-complaint phrases ("waste of money", ...)
    pub fn complaint_phrases(&self) -> &[String] {
        &self.complaint_phrases
    }

    /// Get word and phrase counts
    pub fn stats(&self) -> LexiconStats {
        LexiconStats {
            positive_count: self.positive.len(),
            negative_count: self.negative.len(),
            neutral_count: self.neutral.len(),
            negation_count: self.negations.len(),
            phrase_count: self.hedging_phrases.len()
                + self.recommend_phrases.len()
                + self.non_recommend_phrases.len()
                + self.complaint_phrases.len(),
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

/// Size statistics for a lexicon
#[derive(Debug, Clone)]
pub struct LexiconStats {
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    pub negation_count: usize,
    pub phrase_count: usize,
}
