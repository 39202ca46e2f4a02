//! Review loading from CSV and JSON files

use crate::error::{Error, Result};
use crate::models::Review;
use serde::Deserialize;
use std::path::Path;

/// Column names accepted for the review text, in priority order
const TEXT_COLUMNS: &[&str] = &["review", "body", "text", "comment", "content"];

/// Column names accepted for the review title, in priority order
const TITLE_COLUMNS: &[&str] = &["title", "subject", "heading"];

/// A loaded batch of reviews plus the number of unusable rows
#[derive(Debug, Clone)]
pub struct ReviewBatch {
    pub reviews: Vec<Review>,
    /// Rows with no usable text at all
    pub skipped: usize,
}

/// Load reviews from a file, dispatching on the extension
pub fn load_reviews<P: AsRef<Path>>(path: P) -> Result<ReviewBatch> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        _ => Err(Error::UnsupportedFormat(ext)),
    }
}

/// One review object in a JSON batch file
#[derive(Debug, Deserialize)]
struct JsonReview {
    #[serde(alias = "text", alias = "content", alias = "body")]
    review: String,
    #[serde(default)]
    rating: Option<f64>,
}

fn load_json(path: &Path) -> Result<ReviewBatch> {
    let content = std::fs::read_to_string(path)?;
    let raw: Vec<JsonReview> = serde_json::from_str(&content)?;
    let stem = file_stem(path);

    let mut reviews = Vec::with_capacity(raw.len());
    let mut skipped = 0;
    for (idx, item) in raw.into_iter().enumerate() {
        if item.review.trim().is_empty() {
            skipped += 1;
            continue;
        }
        reviews.push(Review::new(
            format!("{stem}:{idx}"),
            item.review,
            item.rating,
        ));
    }

    Ok(ReviewBatch { reviews, skipped })
}

fn load_csv(path: &Path) -> Result<ReviewBatch> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let text_idx = find_column(&headers, TEXT_COLUMNS).ok_or_else(|| {
        Error::InvalidInput(format!(
            "no review text column found (expected one of: {})",
            TEXT_COLUMNS.join(", ")
        ))
    })?;
    let title_idx = find_column(&headers, TITLE_COLUMNS);
    let rating_idx = headers.iter().position(|h| h == "rating");

    let stem = file_stem(path);
    let mut reviews = Vec::new();
    let mut skipped = 0;

    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let body = record.get(text_idx).unwrap_or("").trim();
        let title = title_idx
            .and_then(|i| record.get(i))
            .map(str::trim)
            .unwrap_or("");

        let text = match (title.is_empty(), body.is_empty()) {
            (false, false) => format!("{title}. {body}"),
            (true, false) => body.to_string(),
            (false, true) => title.to_string(),
            (true, true) => {
                skipped += 1;
                continue;
            }
        };

        // Non-numeric ratings are treated as absent, not as errors.
        let rating = rating_idx
            .and_then(|i| record.get(i))
            .and_then(|v| v.trim().parse::<f64>().ok());

        reviews.push(Review::new(format!("{stem}:{row}"), text, rating));
    }

    Ok(ReviewBatch { reviews, skipped })
}

fn find_column(headers: &[String], candidates: &[&str]) -> Option<usize> {
    candidates
        .iter()
        .find_map(|c| headers.iter().position(|h| h == c))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("input")
        .to_string()
}
