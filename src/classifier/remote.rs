//! Remote sentiment classifier with total fallback to the local rules

use crate::classifier::{Classifier, LocalRuleClassifier};
use crate::error::{Error, Result};
use crate::models::{AnalysisResult, Review, Sentiment};
use crate::utils::config::RemoteSettings;
use async_trait::async_trait;
use std::time::Duration;

/// Classifier that asks a hosted chat-completions API for the label.
///
/// One attempt per review, no retries: any failure (timeout, network error,
/// bad status, malformed reply) is logged as a warning and the review is
/// re-scored by the wrapped local classifier. No partial state from a failed
/// call reaches the local computation.
pub struct RemoteClassifier {
    settings: RemoteSettings,
    api_key: String,
    http: reqwest::Client,
    local: LocalRuleClassifier,
}

impl RemoteClassifier {
    /// Build a remote classifier, resolving the API key from config or env
    pub fn new(settings: RemoteSettings, local: LocalRuleClassifier) -> Result<Self> {
        let api_key = settings.get_api_key().ok_or_else(|| {
            Error::ConfigError(format!(
                "remote classifier enabled but no API key set ({} unset)",
                settings.api_key_env
            ))
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .build()?;

        Ok(Self {
            settings,
            api_key,
            http,
            local,
        })
    }

    fn build_prompt(&self, review: &Review) -> String {
        let text: String = review.text.chars().take(self.settings.max_chars).collect();
        let mut prompt = String::from("Analyze this product review sentiment");
        if let Some(rating) = review.rating {
            prompt.push_str(&format!(" (Rating: {rating}/5 stars)"));
        }
        prompt.push_str(&format!(": {text}"));
        prompt
    }

    /// Single classification attempt against the remote API
    async fn request(&self, review: &Review) -> Result<(Sentiment, f64)> {
        let request_body = serde_json::json!({
            "model": self.settings.model,
            "messages": [
                {
                    "role": "system",
                    "content": "Analyze sentiment. Return ONLY: positive, negative, or neutral. Consider rating: 3 stars often means neutral."
                },
                {
                    "role": "user",
                    "content": self.build_prompt(review)
                }
            ],
            "temperature": self.settings.temperature,
            "max_tokens": self.settings.max_tokens
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.settings.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(Error::ApiError(format!("Status {status}: {text}")));
        }

        let json: serde_json::Value = response.json().await?;
        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| Error::ParseError("missing content in response".to_string()))?;

        Ok(parse_label(content))
    }
}

/// Map the model reply to a label.
///
/// The reply is a single word in the well-behaved case; substring matching
/// tolerates extra prose, and anything unrecognized is neutral.
fn parse_label(content: &str) -> (Sentiment, f64) {
    let content = content.trim().to_lowercase();
    if content.contains("positive") {
        (Sentiment::Positive, 0.9)
    } else if content.contains("negative") {
        (Sentiment::Negative, 0.9)
    } else {
        (Sentiment::Neutral, 0.7)
    }
}

#[async_trait]
impl Classifier for RemoteClassifier {
    async fn classify(&self, review: &Review) -> AnalysisResult {
        // Blank text is a terminal local case; don't spend a request on it.
        if review.is_blank() {
            return self.local.classify(review).await;
        }

        match self.request(review).await {
            Ok((sentiment, confidence)) => AnalysisResult {
                source_id: review.source_id.clone(),
                text: review.text.clone(),
                sentiment,
                confidence,
                rating: review.rating,
            },
            Err(e) => {
                tracing::warn!(source_id = %review.source_id, error = %e,
                    "remote classification failed, falling back to local rules");
                self.local.classify(review).await
            }
        }
    }

    fn name(&self) -> &str {
        "remote"
    }
}
