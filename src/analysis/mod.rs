//! Aggregation layer: keywords, themes, consistency, and the batch pipeline

pub mod aggregator;
pub mod consistency;
pub mod keywords;
pub mod pipeline;

pub use aggregator::CorpusAggregator;
pub use consistency::ConsistencyChecker;
pub use keywords::{KeywordExtractor, TagExtractor};
pub use pipeline::{AnalysisPipeline, AnalysisRun};
