//! Remote sentiment classifier client.
//!
//! Speaks the HuggingFace inference protocol: POST `{"inputs": text}`, answer
//! is a list of (label, score) pairs covering the full vocabulary, sometimes
//! nested one level deep. The consumer keeps the highest-confidence label.
use std::collections::HashMap;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

#[derive(Debug, Clone)]
pub struct EmotionAnalysis {
    pub primary_emotion: String,
    pub confidence: f64,
    pub scores: HashMap<String, f64>,
}

pub struct EmotionClassifier {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl EmotionClassifier {
    pub fn new(url: String, api_key: Option<String>) -> Self {
        EmotionClassifier {
            client: Client::new(),
            url,
            api_key,
        }
    }

    /// Classify `text` and return the top label plus the full score map.
    pub async fn analyze(&self, text: &str) -> AppResult<EmotionAnalysis> {
        tracing::debug!("Classifying sentiment via {}", self.url);
        let mut request = self.client.post(&self.url).json(&json!({ "inputs": text }));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(AppError::HttpClient)?;
        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            return Err(AppError::Emotion(format!(
                "Classifier request failed. Status: {}, Body: {}",
                status, error_body
            )));
        }

        let payload: Value = response.json().await.map_err(AppError::HttpClient)?;
        let ranked = rank_label_scores(payload)?;
        let top = ranked
            .first()
            .ok_or_else(|| AppError::Emotion("Classifier returned no labels".to_string()))?;

        Ok(EmotionAnalysis {
            primary_emotion: top.label.clone(),
            confidence: top.score,
            scores: ranked.iter().map(|e| (e.label.clone(), e.score)).collect(),
        })
    }
}

/// Parse the classifier payload into (label, score) pairs sorted by
/// descending confidence. Accepts both the flat `[{label, score}, ...]`
/// shape and the nested `[[{label, score}, ...]]` shape.
pub fn rank_label_scores(payload: Value) -> AppResult<Vec<LabelScore>> {
    let entries = match payload.get(0) {
        Some(first) if first.is_array() => first.clone(),
        _ => payload,
    };
    let mut scores: Vec<LabelScore> = serde_json::from_value(entries)
        .map_err(|e| AppError::Emotion(format!("Unparsable classifier payload: {}", e)))?;
    scores.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ranks_nested_payloads_by_confidence() {
        let payload = json!([[
            {"label": "sadness", "score": 0.12},
            {"label": "joy", "score": 0.81},
            {"label": "neutral", "score": 0.07},
        ]]);
        let ranked = rank_label_scores(payload).unwrap();
        assert_eq!(ranked[0].label, "joy");
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn accepts_the_flat_shape() {
        let payload = json!([
            {"label": "anger", "score": 0.6},
            {"label": "fear", "score": 0.4},
        ]);
        let ranked = rank_label_scores(payload).unwrap();
        assert_eq!(ranked[0].label, "anger");
    }

    #[test]
    fn rejects_malformed_payloads() {
        assert!(rank_label_scores(json!({"error": "loading"})).is_err());
        assert!(rank_label_scores(json!("nope")).is_err());
    }

    #[test]
    fn empty_payload_ranks_to_nothing() {
        assert!(rank_label_scores(json!([])).unwrap().is_empty());
    }
}
