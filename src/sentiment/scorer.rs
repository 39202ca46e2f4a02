//! Rule-based sentiment scorer
//!
//! Combines the rating prior with lexical and phrase evidence, then resolves
//! the label through an ordered decision ladder: the rules are evaluated top
//! to bottom and the first match wins. Scoring is a pure function of the text,
//! the rating, and the injected lexicon.

use crate::models::{AnalysisResult, Review, Sentiment};
use crate::sentiment::lexicon::Lexicon;
use crate::sentiment::prior::{RatingBand, RatingPrior};

/// Fixed increment for each hedging phrase found in the text.
/// Larger than a single-word match: explicit hedging is stronger neutral
/// evidence than one neutral word.
const HEDGING_WEIGHT: u32 = 2;

/// Fixed increment when an explicit recommend / non-recommend phrase is found
const INTENT_WEIGHT: u32 = 3;

/// Fixed increment when a strong-complaint phrase is found
const COMPLAINT_WEIGHT: u32 = 2;

/// Transient per-review evidence counters.
///
/// Exists only for the duration of one scoring call; exposed read-only through
/// [`SentimentScorer::evidence`] so classifications can be audited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreAccumulator {
    pub positive: u32,
    pub negative: u32,
    pub neutral: u32,
}

impl ScoreAccumulator {
    /// Add weight to the counter for a sentiment
    pub fn add(&mut self, sentiment: Sentiment, weight: u32) {
        match sentiment {
            Sentiment::Positive => self.positive += weight,
            Sentiment::Negative => self.negative += weight,
            Sentiment::Neutral => self.neutral += weight,
        }
    }

    /// Sum of all three counters
    pub fn total(&self) -> u32 {
        self.positive + self.negative + self.neutral
    }

    fn ratio(&self, count: u32) -> f64 {
        f64::from(count) / f64::from(self.total())
    }
}

/// Deterministic rule-based sentiment scorer
#[derive(Debug, Clone, Default)]
pub struct SentimentScorer {
    lexicon: Lexicon,
    prior: RatingPrior,
}

impl SentimentScorer {
    /// Create a scorer with the built-in lexicon and default prior weights
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom lexicon (e.g. a swapped-in multilingual variant)
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Use a custom rating prior
    pub fn with_prior(mut self, prior: RatingPrior) -> Self {
        self.prior = prior;
        self
    }

    /// The lexicon in use
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score one review
    pub fn score(&self, review: &Review) -> AnalysisResult {
        let (sentiment, confidence) = self.score_text(&review.text, review.rating);
        AnalysisResult {
            source_id: review.source_id.clone(),
            text: review.text.clone(),
            sentiment,
            confidence,
            rating: review.rating,
        }
    }

    /// Score a batch of reviews
    pub fn score_batch(&self, reviews: &[Review]) -> Vec<AnalysisResult> {
        reviews.iter().map(|r| self.score(r)).collect()
    }

    /// Score raw text with an optional rating.
    ///
    /// Never fails: empty or all-whitespace text is the neutral default, and
    /// malformed input at worst falls to the zero-evidence branch.
    pub fn score_text(&self, text: &str, rating: Option<f64>) -> (Sentiment, f64) {
        if text.trim().is_empty() {
            return (Sentiment::Neutral, 0.5);
        }

        let lexical = self.lexical_evidence(&text.to_lowercase());

        // No word or phrase evidence at all: the rating alone decides, at the
        // low confidence the rating deserves without textual support.
        if lexical.total() == 0 {
            return Self::zero_evidence(rating);
        }

        let mut acc = lexical;
        if let Some((lean, weight)) = self.prior.contribution(rating) {
            acc.add(lean, weight);
        }
        self.decide(&acc, rating)
    }

    /// Collect the full evidence counters (rating prior included) for a
    /// text/rating pair without deciding.
    ///
    /// Useful for auditing which signals drove a classification.
    pub fn evidence(&self, text: &str, rating: Option<f64>) -> ScoreAccumulator {
        let mut acc = self.lexical_evidence(&text.to_lowercase());
        if let Some((lean, weight)) = self.prior.contribution(rating) {
            acc.add(lean, weight);
        }
        acc
    }

    /// Word and phrase evidence only, before the rating prior is folded in
    fn lexical_evidence(&self, text_lower: &str) -> ScoreAccumulator {
        let mut acc = ScoreAccumulator::default();

        for token in tokenize(text_lower) {
            if let Some(sentiment) = self.lexicon.classify(&token) {
                acc.add(sentiment, 1);
            }
        }

        // Each hedging phrase present counts on its own.
        for phrase in self.lexicon.hedging_phrases() {
            if text_lower.contains(phrase.as_str()) {
                acc.add(Sentiment::Neutral, HEDGING_WEIGHT);
            }
        }

        // Strong-intent phrases are group-level: any match adds one increment,
        // independent of the word and hedging evidence above.
        if contains_any(text_lower, self.lexicon.recommend_phrases()) {
            acc.add(Sentiment::Positive, INTENT_WEIGHT);
        }
        if contains_any(text_lower, self.lexicon.non_recommend_phrases()) {
            acc.add(Sentiment::Negative, INTENT_WEIGHT);
        }
        if contains_any(text_lower, self.lexicon.complaint_phrases()) {
            acc.add(Sentiment::Negative, COMPLAINT_WEIGHT);
        }

        acc
    }

    /// Ordered decision ladder over prior-seeded counters; first match wins
    fn decide(&self, acc: &ScoreAccumulator, rating: Option<f64>) -> (Sentiment, f64) {
        let (sentiment, confidence) = Self::mid_rating_neutral(acc, rating)
            .or_else(|| Self::neutral_dominance(acc))
            .or_else(|| Self::mixed_signal(acc))
            .or_else(|| Self::rating_anchored(acc, rating))
            .unwrap_or_else(|| Self::lexical_fallback(acc));

        (sentiment, confidence.clamp(0.0, 1.0))
    }

    /// No lexical evidence: decide purely from the rating
    fn zero_evidence(rating: Option<f64>) -> (Sentiment, f64) {
        match rating.map(RatingBand::of) {
            Some(RatingBand::Mid) => (Sentiment::Neutral, 0.7),
            Some(RatingBand::Low) => (Sentiment::Negative, 0.6),
            Some(RatingBand::High) => (Sentiment::Positive, 0.6),
            _ => (Sentiment::Neutral, 0.5),
        }
    }

    /// Three-star review with enough neutral evidence relative to the polar sides
    fn mid_rating_neutral(acc: &ScoreAccumulator, rating: Option<f64>) -> Option<(Sentiment, f64)> {
        let is_mid = matches!(rating.map(RatingBand::of), Some(RatingBand::Mid));
        let polar_max = acc.positive.max(acc.negative);
        if is_mid && f64::from(acc.neutral) >= 0.5 * f64::from(polar_max) {
            return Some((Sentiment::Neutral, 0.7 + acc.ratio(acc.neutral) * 0.2));
        }
        None
    }

    /// Neutral evidence dominates the polar sides
    fn neutral_dominance(acc: &ScoreAccumulator) -> Option<(Sentiment, f64)> {
        if acc.ratio(acc.neutral) > 0.4 || acc.neutral > acc.positive.max(acc.negative) {
            return Some((Sentiment::Neutral, 0.6 + acc.ratio(acc.neutral) * 0.3));
        }
        None
    }

    /// Close positive/negative split is treated as ambiguous, not resolved
    /// toward the larger side
    fn mixed_signal(acc: &ScoreAccumulator) -> Option<(Sentiment, f64)> {
        if acc.positive > 0 && acc.negative > 0 && acc.positive.abs_diff(acc.negative) <= 2 {
            return Some((Sentiment::Neutral, 0.65));
        }
        None
    }

    /// Rating picks the candidate label; the text must not contradict it.
    /// A text score more than double on the opposite side means the review
    /// text does not match the stars, so the call degrades to neutral.
    fn rating_anchored(acc: &ScoreAccumulator, rating: Option<f64>) -> Option<(Sentiment, f64)> {
        match rating.map(RatingBand::of)? {
            RatingBand::Low => {
                if acc.negative >= acc.positive {
                    Some((Sentiment::Negative, 0.7 + acc.ratio(acc.negative) * 0.2))
                } else if acc.positive > acc.negative * 2 {
                    Some((Sentiment::Neutral, 0.6))
                } else {
                    Some((Sentiment::Neutral, 0.55))
                }
            }
            RatingBand::High => {
                if acc.positive >= acc.negative {
                    Some((Sentiment::Positive, 0.7 + acc.ratio(acc.positive) * 0.2))
                } else if acc.negative > acc.positive * 2 {
                    Some((Sentiment::Neutral, 0.6))
                } else {
                    Some((Sentiment::Neutral, 0.55))
                }
            }
            RatingBand::Mid | RatingBand::Between => None,
        }
    }

    /// Final text-only decision
    fn lexical_fallback(acc: &ScoreAccumulator) -> (Sentiment, f64) {
        if acc.positive > acc.negative + 2 {
            (Sentiment::Positive, 0.6 + acc.ratio(acc.positive) * 0.3)
        } else if acc.negative > acc.positive + 2 {
            (Sentiment::Negative, 0.6 + acc.ratio(acc.negative) * 0.3)
        } else {
            (Sentiment::Neutral, 0.6)
        }
    }
}

/// Split lowercased text on whitespace and strip everything but
/// alphanumerics and underscores from each token
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter_map(|word| {
        let cleaned: String = word
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_')
            .collect();
        if cleaned.is_empty() {
            None
        } else {
            Some(cleaned)
        }
    })
}

fn contains_any(text: &str, phrases: &[String]) -> bool {
    phrases.iter().any(|p| text.contains(p.as_str()))
}
