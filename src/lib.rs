//! # Review Insight
//!
//! Deterministic sentiment analysis for user-generated product reviews.
//! A rule-based scorer combines a star-rating prior with lexical and phrase
//! evidence, resolves conflicts between the two signals through an ordered
//! decision ladder, and emits a label with a calibrated confidence. An
//! aggregation layer reduces the per-review results into theme frequency
//! tables, pros/cons tags, and rating-sentiment consistency diagnostics.
//!
//! ## Modules
//!
//! - `sentiment` - lexicon, rating prior, and the rule-based scorer
//! - `analysis` - keyword/theme extraction, consistency checks, batch pipeline
//! - `classifier` - local/remote classifier strategies with total fallback
//! - `data` - CSV/JSON review loading
//! - `report` - plain-text report rendering
//! - `utils` - configuration
//!
//! ## Example
//!
//! ```rust
//! use review_insight::{AnalysisPipeline, Review};
//!
//! let pipeline = AnalysisPipeline::new();
//! let reviews = vec![
//!     Review::new("r1", "Excellent quality, highly recommend", Some(5.0)),
//!     Review::new("r2", "It's just okay, nothing special", Some(3.0)),
//! ];
//!
//! let run = pipeline.run(&reviews);
//! assert_eq!(run.summary.sentiment_counts.positive, 1);
//! assert_eq!(run.summary.sentiment_counts.neutral, 1);
//! ```

pub mod analysis;
pub mod classifier;
pub mod data;
pub mod error;
pub mod models;
pub mod report;
pub mod sentiment;
pub mod utils;

// Re-export main types for convenience
pub use analysis::{
    AnalysisPipeline, AnalysisRun, ConsistencyChecker, CorpusAggregator, KeywordExtractor,
    TagExtractor,
};
pub use classifier::{Classifier, LocalRuleClassifier, RemoteClassifier};
pub use data::{load_reviews, ReviewBatch};
pub use error::{Error, Result};
pub use models::{AnalysisResult, CorpusSummary, Review, Sentiment};
pub use report::render_text_report;
pub use sentiment::{Lexicon, RatingPrior, ScoreAccumulator, SentimentScorer};
pub use utils::{load_config, AppConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
