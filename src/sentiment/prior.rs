//! Rating prior: initial sentiment lean derived from the star rating

use crate::models::Sentiment;

/// Band a star rating falls into for scoring purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingBand {
    /// rating <= 2
    Low,
    /// rating == 3
    Mid,
    /// rating >= 4
    High,
    /// Fractional rating between the bands (e.g. 2.5, 3.5)
    Between,
}

impl RatingBand {
    /// Classify a rating into its band
    pub fn of(rating: f64) -> Self {
        if rating <= 2.0 {
            RatingBand::Low
        } else if (rating - 3.0).abs() < f64::EPSILON {
            RatingBand::Mid
        } else if rating >= 4.0 {
            RatingBand::High
        } else {
            RatingBand::Between
        }
    }
}

/// Maps a star rating to an initial lean and score contribution.
///
/// Three-star reviews get a dominant neutral weight so that mid-range reviews
/// are not over-classified as positive; the positive weight is deliberately
/// the smallest so text evidence has more influence on positive calls.
#[derive(Debug, Clone)]
pub struct RatingPrior {
    negative_weight: u32,
    neutral_weight: u32,
    positive_weight: u32,
}

impl RatingPrior {
    pub fn new() -> Self {
        Self {
            negative_weight: 3,
            neutral_weight: 5,
            positive_weight: 2,
        }
    }

    /// Override the per-band weights
    pub fn with_weights(mut self, negative: u32, neutral: u32, positive: u32) -> Self {
        self.negative_weight = negative;
        self.neutral_weight = neutral;
        self.positive_weight = positive;
        self
    }

    /// Lean and base score contribution for a rating.
    ///
    /// Absent ratings and ratings between the bands contribute nothing.
    pub fn contribution(&self, rating: Option<f64>) -> Option<(Sentiment, u32)> {
        let rating = rating?;
        match RatingBand::of(rating) {
            RatingBand::Low => Some((Sentiment::Negative, self.negative_weight)),
            RatingBand::Mid => Some((Sentiment::Neutral, self.neutral_weight)),
            RatingBand::High => Some((Sentiment::Positive, self.positive_weight)),
            RatingBand::Between => None,
        }
    }
}

impl Default for RatingPrior {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands() {
        assert_eq!(RatingBand::of(1.0), RatingBand::Low);
        assert_eq!(RatingBand::of(2.0), RatingBand::Low);
        assert_eq!(RatingBand::of(3.0), RatingBand::Mid);
        assert_eq!(RatingBand::of(4.0), RatingBand::High);
        assert_eq!(RatingBand::of(5.0), RatingBand::High);
        assert_eq!(RatingBand::of(2.5), RatingBand::Between);
        assert_eq!(RatingBand::of(3.5), RatingBand::Between);
    }

    #[test]
    fn test_contributions() {
        let prior = RatingPrior::new();

        assert_eq!(prior.contribution(Some(1.0)), Some((Sentiment::Negative, 3)));
        assert_eq!(prior.contribution(Some(3.0)), Some((Sentiment::Neutral, 5)));
        assert_eq!(prior.contribution(Some(5.0)), Some((Sentiment::Positive, 2)));
        assert_eq!(prior.contribution(Some(3.5)), None);
        assert_eq!(prior.contribution(None), None);
    }

    #[test]
    fn test_neutral_weight_dominates() {
        let prior = RatingPrior::new();
        let (_, neutral) = prior.contribution(Some(3.0)).unwrap();
        let (_, positive) = prior.contribution(Some(5.0)).unwrap();
        let (_, negative) = prior.contribution(Some(1.0)).unwrap();

        assert!(neutral > negative);
        assert!(negative > positive);
    }
}
