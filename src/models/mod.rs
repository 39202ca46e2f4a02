//! Data models shared across the pipeline

mod types;

pub use types::{
    AnalysisResult, ConfidenceStats, ConsistencyFlag, ConsistencyReport, CorpusSummary, ProsCons,
    RatingStats, Review, Sentiment, SentimentCounts, StarSentiment, TermCount, ThemeSummary,
};
