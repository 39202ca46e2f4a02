//! Corpus aggregation: folds per-review results into a summary

use crate::analysis::consistency::ConsistencyChecker;
use crate::analysis::keywords::{rank, KeywordExtractor, TagExtractor};
use crate::models::{
    AnalysisResult, ConfidenceStats, CorpusSummary, ProsCons, RatingStats, Sentiment,
    SentimentCounts, StarSentiment, ThemeSummary,
};
use std::collections::HashMap;

/// Reduces a full result set into theme tables, pros/cons tags, rating and
/// confidence statistics, and consistency diagnostics.
///
/// The fold is order-independent: frequency maps merge by summing counts and
/// ranking is deterministic, so partial summaries computed over corpus slices
/// combine to the same output.
#[derive(Debug, Clone)]
pub struct CorpusAggregator {
    extractor: KeywordExtractor,
    tags: TagExtractor,
    checker: ConsistencyChecker,
    /// Overall top-terms table size
    top_terms: usize,
    /// Per-sentiment-bucket table size
    top_bucket_terms: usize,
    /// Key-phrase table size
    top_phrases: usize,
    /// Minimum occurrences before a phrase is reported
    min_phrase_count: usize,
    /// Pros/cons and domain-theme table sizes
    top_tags: usize,
    top_domain: usize,
}

impl CorpusAggregator {
    pub fn new() -> Self {
        Self {
            extractor: KeywordExtractor::new(),
            tags: TagExtractor::new(),
            checker: ConsistencyChecker::new(),
            top_terms: 15,
            top_bucket_terms: 10,
            top_phrases: 5,
            min_phrase_count: 3,
            top_tags: 10,
            top_domain: 15,
        }
    }

    /// Override the overall top-terms table size
    pub fn with_top_terms(mut self, n: usize) -> Self {
        self.top_terms = n;
        self
    }

    /// Override the per-bucket table size
    pub fn with_top_bucket_terms(mut self, n: usize) -> Self {
        self.top_bucket_terms = n;
        self
    }

    /// Override the key-phrase table size
    pub fn with_top_phrases(mut self, n: usize) -> Self {
        self.top_phrases = n;
        self
    }

    /// Override the minimum phrase occurrence cutoff
    pub fn with_min_phrase_count(mut self, n: usize) -> Self {
        self.min_phrase_count = n;
        self
    }

    /// Override the number of consistency-flag samples kept
    pub fn with_flag_samples(mut self, n: usize) -> Self {
        self.checker = ConsistencyChecker::new().with_sample_limit(n);
        self
    }

    /// Use a custom keyword extractor (e.g. a different stop-word list)
    pub fn with_extractor(mut self, extractor: KeywordExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Fold all results into a corpus summary
    pub fn summarize(&self, results: &[AnalysisResult]) -> CorpusSummary {
        let mut sentiment_counts = SentimentCounts::default();
        let mut defaulted = 0;
        for result in results {
            sentiment_counts.record(result.sentiment);
            if result.text.trim().is_empty() {
                defaulted += 1;
            }
        }

        CorpusSummary {
            total: results.len(),
            defaulted,
            sentiment_counts,
            rating_stats: rating_stats(results),
            by_star: by_star(results),
            confidence_stats: confidence_stats(results),
            themes: self.themes(results),
            pros_cons: self.pros_cons(results),
            consistency: self.checker.check(results),
        }
    }

    fn themes(&self, results: &[AnalysisResult]) -> ThemeSummary {
        let all = texts(results, None);
        let positive = texts(results, Some(Sentiment::Positive));
        let negative = texts(results, Some(Sentiment::Negative));
        let neutral = texts(results, Some(Sentiment::Neutral));

        let mut domain: HashMap<String, usize> = HashMap::new();
        for result in results {
            for keyword in self.extractor.domain_keywords(&result.text) {
                *domain.entry(keyword).or_insert(0) += 1;
            }
        }

        ThemeSummary {
            overall: self.extractor.top_terms(all.iter().copied(), self.top_terms),
            positive: self
                .extractor
                .top_terms(positive.iter().copied(), self.top_bucket_terms),
            negative: self
                .extractor
                .top_terms(negative.iter().copied(), self.top_bucket_terms),
            neutral: self
                .extractor
                .top_terms(neutral.iter().copied(), self.top_bucket_terms),
            positive_phrases: self.extractor.top_phrases(
                positive.iter().copied(),
                self.top_phrases,
                self.min_phrase_count,
            ),
            negative_phrases: self.extractor.top_phrases(
                negative.iter().copied(),
                self.top_phrases,
                self.min_phrase_count,
            ),
            domain: rank(domain, self.top_domain),
        }
    }

    fn pros_cons(&self, results: &[AnalysisResult]) -> ProsCons {
        let mut pros: HashMap<String, usize> = HashMap::new();
        let mut cons: HashMap<String, usize> = HashMap::new();
        for result in results {
            for tag in self.tags.pros(&result.text) {
                *pros.entry(tag).or_insert(0) += 1;
            }
            for tag in self.tags.cons(&result.text) {
                *cons.entry(tag).or_insert(0) += 1;
            }
        }
        ProsCons {
            pros: rank(pros, self.top_tags),
            cons: rank(cons, self.top_tags),
        }
    }
}

impl Default for CorpusAggregator {
    fn default() -> Self {
        Self::new()
    }
}

fn texts(results: &[AnalysisResult], bucket: Option<Sentiment>) -> Vec<&str> {
    results
        .iter()
        .filter(|r| bucket.map_or(true, |s| r.sentiment == s))
        .map(|r| r.text.as_str())
        .collect()
}

fn rating_stats(results: &[AnalysisResult]) -> Option<RatingStats> {
    let mut ratings: Vec<f64> = results.iter().filter_map(|r| r.rating).collect();
    if ratings.is_empty() {
        return None;
    }
    ratings.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let count = ratings.len();
    let mean = ratings.iter().sum::<f64>() / count as f64;
    let median = if count % 2 == 0 {
        (ratings[count / 2 - 1] + ratings[count / 2]) / 2.0
    } else {
        ratings[count / 2]
    };
    let std_dev = if count > 1 {
        let var = ratings.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        var.sqrt()
    } else {
        0.0
    };

    Some(RatingStats {
        count,
        mean,
        median,
        std_dev,
    })
}

fn by_star(results: &[AnalysisResult]) -> Vec<StarSentiment> {
    let mut rows = Vec::new();
    for stars in (1..=5u8).rev() {
        let mut counts = SentimentCounts::default();
        for result in results {
            if let Some(r) = result.rating {
                if (r - f64::from(stars)).abs() < f64::EPSILON {
                    counts.record(result.sentiment);
                }
            }
        }
        if counts.total() > 0 {
            rows.push(StarSentiment { stars, counts });
        }
    }
    rows
}

fn confidence_stats(results: &[AnalysisResult]) -> ConfidenceStats {
    let mut stats = ConfidenceStats::default();
    if results.is_empty() {
        return stats;
    }
    let mut sum = 0.0;
    for result in results {
        sum += result.confidence;
        if result.confidence > 0.8 {
            stats.high += 1;
        } else if result.confidence >= 0.5 {
            stats.medium += 1;
        } else {
            stats.low += 1;
        }
    }
    stats.mean = sum / results.len() as f64;
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: &str, text: &str, rating: Option<f64>, sentiment: Sentiment) -> AnalysisResult {
        AnalysisResult {
            source_id: id.to_string(),
            text: text.to_string(),
            sentiment,
            confidence: 0.7,
            rating,
        }
    }

    #[test]
    fn test_sentiment_counts_fold() {
        let aggregator = CorpusAggregator::new();
        let results = vec![
            result("1", "great battery", Some(5.0), Sentiment::Positive),
            result("2", "poor quality screen", Some(1.0), Sentiment::Negative),
            result("3", "just okay", Some(3.0), Sentiment::Neutral),
        ];

        let summary = aggregator.summarize(&results);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.sentiment_counts.positive, 1);
        assert_eq!(summary.sentiment_counts.negative, 1);
        assert_eq!(summary.sentiment_counts.neutral, 1);
        assert_eq!(summary.defaulted, 0);
    }

    #[test]
    fn test_rating_stats() {
        let aggregator = CorpusAggregator::new();
        let results = vec![
            result("1", "a", Some(5.0), Sentiment::Positive),
            result("2", "b", Some(3.0), Sentiment::Neutral),
            result("3", "c", Some(1.0), Sentiment::Negative),
            result("4", "d", None, Sentiment::Neutral),
        ];

        let stats = aggregator.summarize(&results).rating_stats.unwrap();
        assert_eq!(stats.count, 3);
        assert!((stats.mean - 3.0).abs() < 1e-9);
        assert!((stats.median - 3.0).abs() < 1e-9);
        assert!(stats.std_dev > 0.0);
    }

    #[test]
    fn test_no_ratings_no_stats() {
        let aggregator = CorpusAggregator::new();
        let results = vec![result("1", "a", None, Sentiment::Neutral)];

        let summary = aggregator.summarize(&results);
        assert!(summary.rating_stats.is_none());
        assert!(summary.by_star.is_empty());
    }

    #[test]
    fn test_by_star_cross_tab() {
        let aggregator = CorpusAggregator::new();
        let results = vec![
            result("1", "a", Some(5.0), Sentiment::Positive),
            result("2", "b", Some(5.0), Sentiment::Negative),
            result("3", "c", Some(1.0), Sentiment::Negative),
        ];

        let summary = aggregator.summarize(&results);
        assert_eq!(summary.by_star.len(), 2);
        assert_eq!(summary.by_star[0].stars, 5);
        assert_eq!(summary.by_star[0].counts.positive, 1);
        assert_eq!(summary.by_star[0].counts.negative, 1);
        assert_eq!(summary.by_star[1].stars, 1);
    }

    #[test]
    fn test_bucket_themes_restricted_to_bucket() {
        let aggregator = CorpusAggregator::new();
        let results = vec![
            result("1", "battery battery battery", Some(5.0), Sentiment::Positive),
            result("2", "screen screen screen", Some(1.0), Sentiment::Negative),
        ];

        let summary = aggregator.summarize(&results);
        let positive: Vec<&str> = summary.themes.positive.iter().map(|t| t.term.as_str()).collect();
        let negative: Vec<&str> = summary.themes.negative.iter().map(|t| t.term.as_str()).collect();

        assert!(positive.contains(&"battery"));
        assert!(!positive.contains(&"screen"));
        assert!(negative.contains(&"screen"));
        assert!(!negative.contains(&"battery"));
    }

    #[test]
    fn test_defaulted_counting() {
        let aggregator = CorpusAggregator::new();
        let results = vec![
            result("1", "", Some(4.0), Sentiment::Neutral),
            result("2", "good", Some(4.0), Sentiment::Positive),
        ];

        let summary = aggregator.summarize(&results);
        assert_eq!(summary.defaulted, 1);
    }
}
