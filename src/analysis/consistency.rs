//! Rating/sentiment consistency diagnostics

use crate::models::{AnalysisResult, ConsistencyFlag, ConsistencyReport, Sentiment};

/// Flags reviews whose declared rating and assigned sentiment disagree.
///
/// Purely diagnostic: the checker never alters results and never blocks the
/// pipeline; the reporting layer surfaces its output as a warning.
#[derive(Debug, Clone)]
pub struct ConsistencyChecker {
    /// Maximum number of flagged results kept as samples
    sample_limit: usize,
}

impl ConsistencyChecker {
    pub fn new() -> Self {
        Self { sample_limit: 10 }
    }

    /// Limit the number of retained sample flags
    pub fn with_sample_limit(mut self, limit: usize) -> Self {
        self.sample_limit = limit;
        self
    }

    /// True iff the rating and sentiment violate the expected monotonic
    /// relationship: low rating with positive sentiment, or high rating with
    /// negative sentiment.
    pub fn flag(result: &AnalysisResult) -> bool {
        match result.rating {
            Some(r) if r <= 2.0 => result.sentiment == Sentiment::Positive,
            Some(r) if r >= 4.0 => result.sentiment == Sentiment::Negative,
            _ => false,
        }
    }

    /// Fold a result set into a consistency report
    pub fn check(&self, results: &[AnalysisResult]) -> ConsistencyReport {
        let mut report = ConsistencyReport::default();

        for result in results {
            if !Self::flag(result) {
                continue;
            }
            report.total_flagged += 1;
            match result.sentiment {
                Sentiment::Positive => report.low_rating_positive += 1,
                Sentiment::Negative => report.high_rating_negative += 1,
                Sentiment::Neutral => {}
            }
            if report.samples.len() < self.sample_limit {
                report.samples.push(ConsistencyFlag {
                    source_id: result.source_id.clone(),
                    // flag() only passes when a rating is present
                    rating: result.rating.unwrap_or_default(),
                    sentiment: result.sentiment,
                    confidence: result.confidence,
                });
            }
        }

        report
    }
}

impl Default for ConsistencyChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(rating: Option<f64>, sentiment: Sentiment) -> AnalysisResult {
        AnalysisResult {
            source_id: "r".to_string(),
            text: String::new(),
            sentiment,
            confidence: 0.8,
            rating,
        }
    }

    #[test]
    fn test_flag_predicate() {
        assert!(ConsistencyChecker::flag(&result(Some(1.0), Sentiment::Positive)));
        assert!(ConsistencyChecker::flag(&result(Some(2.0), Sentiment::Positive)));
        assert!(ConsistencyChecker::flag(&result(Some(4.0), Sentiment::Negative)));
        assert!(ConsistencyChecker::flag(&result(Some(5.0), Sentiment::Negative)));

        assert!(!ConsistencyChecker::flag(&result(Some(1.0), Sentiment::Negative)));
        assert!(!ConsistencyChecker::flag(&result(Some(3.0), Sentiment::Positive)));
        assert!(!ConsistencyChecker::flag(&result(Some(5.0), Sentiment::Neutral)));
        assert!(!ConsistencyChecker::flag(&result(None, Sentiment::Positive)));
    }

    #[test]
    fn test_report_counts_and_split() {
        let checker = ConsistencyChecker::new();
        let results = vec![
            result(Some(1.0), Sentiment::Positive),
            result(Some(5.0), Sentiment::Negative),
            result(Some(5.0), Sentiment::Positive),
            result(Some(3.0), Sentiment::Neutral),
        ];

        let report = checker.check(&results);
        assert_eq!(report.total_flagged, 2);
        assert_eq!(report.low_rating_positive, 1);
        assert_eq!(report.high_rating_negative, 1);
        assert_eq!(report.samples.len(), 2);
    }

    #[test]
    fn test_sample_limit() {
        let checker = ConsistencyChecker::new().with_sample_limit(1);
        let results = vec![
            result(Some(1.0), Sentiment::Positive),
            result(Some(2.0), Sentiment::Positive),
        ];

        let report = checker.check(&results);
        assert_eq!(report.total_flagged, 2);
        assert_eq!(report.samples.len(), 1);
    }
}
