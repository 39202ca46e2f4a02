//! Core data types for review sentiment analysis

use serde::{Deserialize, Serialize};

/// Sentiment classification for a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Positive sentiment
    Positive,
    /// Negative sentiment
    Negative,
    /// Neutral sentiment
    Neutral,
}

impl Sentiment {
    /// All variants in report order
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    /// Lowercase label
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One unit of input: a review text with an optional star rating
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Opaque identifier for traceability (filename, row number, ...)
    pub source_id: String,
    /// Review text; may be empty
    pub text: String,
    /// Star rating in [1, 5] if present and valid
    pub rating: Option<f64>,
}

impl Review {
    /// Create a review, sanitizing the rating.
    ///
    /// Ratings that are non-finite or outside [1, 5] are treated as absent,
    /// not clamped and not an error.
    pub fn new(source_id: impl Into<String>, text: impl Into<String>, rating: Option<f64>) -> Self {
        let rating = rating.filter(|r| r.is_finite() && (1.0..=5.0).contains(r));
        Self {
            source_id: source_id.into(),
            text: text.into(),
            rating,
        }
    }

    /// True when the text carries no content to score
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Output of scoring one review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Identifier of the source review
    pub source_id: String,
    /// Original review text (kept for downstream aggregation)
    pub text: String,
    /// Assigned sentiment label
    pub sentiment: Sentiment,
    /// Confidence in the label (0.0 to 1.0)
    pub confidence: f64,
    /// Star rating carried over from the review
    pub rating: Option<f64>,
}

/// Per-sentiment review counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentCounts {
    /// Increment the counter for a sentiment
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    /// Count for a single sentiment
    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    /// Total count across all sentiments
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

/// A ranked term with its occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

impl TermCount {
    pub fn new(term: impl Into<String>, count: usize) -> Self {
        Self {
            term: term.into(),
            count,
        }
    }
}

/// Descriptive statistics over the declared star ratings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingStats {
    /// Number of reviews that carried a valid rating
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

/// Distribution of classifier confidence across the corpus
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfidenceStats {
    pub mean: f64,
    /// Results with confidence > 0.8
    pub high: usize,
    /// Results with confidence in [0.5, 0.8]
    pub medium: usize,
    /// Results with confidence < 0.5
    pub low: usize,
}

/// Sentiment breakdown for one star level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarSentiment {
    /// Whole-star level (1 through 5)
    pub stars: u8,
    pub counts: SentimentCounts,
}

/// Theme and keyword frequency tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeSummary {
    /// Top terms across the whole corpus
    pub overall: Vec<TermCount>,
    /// Top terms restricted to positive reviews
    pub positive: Vec<TermCount>,
    /// Top terms restricted to negative reviews
    pub negative: Vec<TermCount>,
    /// Top terms restricted to neutral reviews
    pub neutral: Vec<TermCount>,
    /// Key two-word phrases from positive reviews
    pub positive_phrases: Vec<TermCount>,
    /// Key two-word phrases from negative reviews
    pub negative_phrases: Vec<TermCount>,
    /// Domain keyword themes (quality, price, shipping, ...)
    pub domain: Vec<TermCount>,
}

/// Pros/cons tag frequencies derived from trigger phrases
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProsCons {
    pub pros: Vec<TermCount>,
    pub cons: Vec<TermCount>,
}

/// A review whose rating and assigned sentiment disagree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencyFlag {
    pub source_id: String,
    pub rating: f64,
    pub sentiment: Sentiment,
    pub confidence: f64,
}

/// Corpus-wide rating/sentiment consistency diagnostics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsistencyReport {
    /// Total number of flagged reviews
    pub total_flagged: usize,
    /// Low-rating reviews classified positive
    pub low_rating_positive: usize,
    /// High-rating reviews classified negative
    pub high_rating_negative: usize,
    /// Bounded sample of flagged results
    pub samples: Vec<ConsistencyFlag>,
}

/// Aggregated output over a whole corpus of reviews
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusSummary {
    /// Number of results folded in
    pub total: usize,
    /// Reviews that fell to the blank-text default
    pub defaulted: usize,
    pub sentiment_counts: SentimentCounts,
    /// Present when at least one review carried a rating
    pub rating_stats: Option<RatingStats>,
    /// Sentiment breakdown per whole-star level, 5 stars first
    pub by_star: Vec<StarSentiment>,
    pub confidence_stats: ConfidenceStats,
    pub themes: ThemeSummary,
    pub pros_cons: ProsCons,
    pub consistency: ConsistencyReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_sanitization() {
        assert_eq!(Review::new("r1", "ok", Some(4.0)).rating, Some(4.0));
        assert_eq!(Review::new("r2", "ok", Some(0.0)).rating, None);
        assert_eq!(Review::new("r3", "ok", Some(6.5)).rating, None);
        assert_eq!(Review::new("r4", "ok", Some(f64::NAN)).rating, None);
        assert_eq!(Review::new("r5", "ok", None).rating, None);
    }

    #[test]
    fn test_blank_detection() {
        assert!(Review::new("r1", "", Some(3.0)).is_blank());
        assert!(Review::new("r2", "   \t ", None).is_blank());
        assert!(!Review::new("r3", "fine", None).is_blank());
    }

    #[test]
    fn test_sentiment_counts() {
        let mut counts = SentimentCounts::default();
        counts.record(Sentiment::Positive);
        counts.record(Sentiment::Positive);
        counts.record(Sentiment::Neutral);

        assert_eq!(counts.get(Sentiment::Positive), 2);
        assert_eq!(counts.get(Sentiment::Negative), 0);
        assert_eq!(counts.total(), 3);
    }
}
