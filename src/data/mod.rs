//! Review input loading

mod loader;

pub use loader::{load_reviews, ReviewBatch};
