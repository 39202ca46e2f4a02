//! Rule-based sentiment scoring: lexicon, rating prior, and the scorer

pub mod lexicon;
pub mod prior;
pub mod scorer;

pub use lexicon::{Lexicon, LexiconStats, BUILTIN_LEXICON_VERSION};
pub use prior::{RatingBand, RatingPrior};
pub use scorer::{ScoreAccumulator, SentimentScorer};
