//! Classifier strategies
//!
//! The scoring seam is capability-typed: [`LocalRuleClassifier`] wraps the
//! deterministic scorer, [`RemoteClassifier`] calls a hosted sentiment API and
//! falls back to the local rules on any failure. Callers never see a remote
//! error.

mod remote;

pub use remote::RemoteClassifier;

use crate::models::{AnalysisResult, Review};
use crate::sentiment::SentimentScorer;
use async_trait::async_trait;

/// A sentiment classifier over single reviews.
///
/// Classification is total: implementations resolve every review to a result
/// and never surface an error to the caller.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify one review
    async fn classify(&self, review: &Review) -> AnalysisResult;

    /// Name of the classifier backend
    fn name(&self) -> &str;
}

/// Deterministic local classifier backed by the rule scorer
#[derive(Debug, Clone, Default)]
pub struct LocalRuleClassifier {
    scorer: SentimentScorer,
}

impl LocalRuleClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing scorer
    pub fn with_scorer(scorer: SentimentScorer) -> Self {
        Self { scorer }
    }

    /// The underlying scorer
    pub fn scorer(&self) -> &SentimentScorer {
        &self.scorer
    }
}

#[async_trait]
impl Classifier for LocalRuleClassifier {
    async fn classify(&self, review: &Review) -> AnalysisResult {
        self.scorer.score(review)
    }

    fn name(&self) -> &str {
        "local-rules"
    }
}
