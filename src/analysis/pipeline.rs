//! Batch analysis pipeline: parallel scoring map, deterministic reduce

use crate::analysis::aggregator::CorpusAggregator;
use crate::classifier::Classifier;
use crate::models::{AnalysisResult, CorpusSummary, Review};
use crate::sentiment::{Lexicon, SentimentScorer};
use crate::utils::config::AppConfig;
use rayon::prelude::*;

/// Results of analyzing one review corpus
#[derive(Debug, Clone)]
pub struct AnalysisRun {
    /// Per-review classifications, in input order
    pub results: Vec<AnalysisResult>,
    pub summary: CorpusSummary,
}

/// End-to-end corpus analysis.
///
/// The map phase (scoring) is side-effect free and runs in parallel; the
/// reduce phase folds frequency maps by summing counts per key, so the
/// aggregation is independent of evaluation order. A malformed review never
/// aborts the batch: it falls to the scorer's default branches and the
/// summary reports how many did.
#[derive(Debug, Clone, Default)]
pub struct AnalysisPipeline {
    scorer: SentimentScorer,
    aggregator: CorpusAggregator,
}

impl AnalysisPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pipeline from configuration.
    ///
    /// Loads and validates the custom lexicon when one is configured; a
    /// missing or unusable lexicon fails here, before any review is processed.
    pub fn from_config(config: &AppConfig) -> crate::error::Result<Self> {
        let lexicon = match &config.analysis.lexicon_path {
            Some(path) => Lexicon::from_file(path)?,
            None => Lexicon::new(),
        };

        let scorer = SentimentScorer::new().with_lexicon(lexicon);
        let aggregator = CorpusAggregator::new()
            .with_top_terms(config.analysis.top_terms)
            .with_top_bucket_terms(config.analysis.top_bucket_terms)
            .with_top_phrases(config.analysis.top_phrases)
            .with_min_phrase_count(config.analysis.min_phrase_count)
            .with_flag_samples(config.analysis.flag_samples);

        Ok(Self { scorer, aggregator })
    }

    /// Use a custom scorer (swapped lexicon, adjusted prior)
    pub fn with_scorer(mut self, scorer: SentimentScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Use a custom aggregator
    pub fn with_aggregator(mut self, aggregator: CorpusAggregator) -> Self {
        self.aggregator = aggregator;
        self
    }

    /// The scorer in use
    pub fn scorer(&self) -> &SentimentScorer {
        &self.scorer
    }

    /// Score every review with the local rule scorer and summarize
    pub fn run(&self, reviews: &[Review]) -> AnalysisRun {
        let results: Vec<AnalysisResult> = reviews.par_iter().map(|r| self.scorer.score(r)).collect();
        let summary = self.aggregator.summarize(&results);
        AnalysisRun { results, summary }
    }

    /// Score every review through a classifier (e.g. the remote strategy)
    /// and summarize.
    ///
    /// Classification is infallible by contract: remote failures fall back to
    /// the local scorer inside the classifier, so the batch always completes.
    pub async fn run_with(&self, classifier: &dyn Classifier, reviews: &[Review]) -> AnalysisRun {
        let mut results = Vec::with_capacity(reviews.len());
        for review in reviews {
            results.push(classifier.classify(review).await);
        }
        let summary = self.aggregator.summarize(&results);
        AnalysisRun { results, summary }
    }
}
