//! Shared API response types
//!
//! The recommendation response deliberately mirrors what the page renderer
//! consumes: the ordered per-model outcomes plus the original item id and
//! model list for display context.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of a single per-model placement call
///
/// Exactly one of `data`/`error` is set. `data` is the upstream body passed
/// through opaquely; no schema is imposed on it here. The page decides how
/// to render whatever shape the scoring service returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelOutcome {
    /// Model identifier exactly as requested (not normalized)
    pub model: String,
    /// Decoded upstream response body on success
    pub data: Option<Value>,
    /// Human-readable failure message on transport/status/decode failure
    pub error: Option<String>,
}

impl ModelOutcome {
    /// Successful outcome carrying the upstream body
    pub fn success(model: impl Into<String>, data: Value) -> Self {
        Self {
            model: model.into(),
            data: Some(data),
            error: None,
        }
    }

    /// Failed outcome carrying the failure message
    pub fn failure(model: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            data: None,
            error: Some(message.into()),
        }
    }

    /// True when the per-model call failed
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Response for `GET /api/recommendations`
///
/// `item_id` is `None` when no item id was supplied with the request: the
/// distinguishable empty state, distinct from "item id supplied but a model
/// returned zero results". `results` is index-aligned with `models`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub item_id: Option<String>,
    pub models: Vec<String>,
    pub results: Vec<ModelOutcome>,
    /// Request-level failure message; per-model failures never set this
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_outcome_has_data_only() {
        let outcome = ModelOutcome::success("B_prod", json!([{"id": 1}]));
        assert_eq!(outcome.model, "B_prod");
        assert!(outcome.data.is_some());
        assert!(outcome.error.is_none());
        assert!(!outcome.is_error());
    }

    #[test]
    fn test_failure_outcome_has_error_only() {
        let outcome = ModelOutcome::failure("L_prod", "API error 500: upstream down");
        assert_eq!(outcome.model, "L_prod");
        assert!(outcome.data.is_none());
        assert_eq!(outcome.error.as_deref(), Some("API error 500: upstream down"));
        assert!(outcome.is_error());
    }

    #[test]
    fn test_outcome_serializes_all_fields() {
        // The page reads `data`/`error` as nullable keys, so both must be
        // present in the serialized form even when unset.
        let value = serde_json::to_value(ModelOutcome::success("B_prod", json!([]))).unwrap();
        assert_eq!(value["model"], "B_prod");
        assert_eq!(value["data"], json!([]));
        assert_eq!(value["error"], Value::Null);
    }

    #[test]
    fn test_empty_state_response_shape() {
        let response = RecommendationResponse {
            item_id: None,
            models: vec!["B_prod".to_string()],
            results: vec![],
            error: None,
        };
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["item_id"], Value::Null);
        assert_eq!(value["models"], json!(["B_prod"]));
        assert_eq!(value["results"], json!([]));
    }
}
