//! Request parameter interpretation for the recommendations page
//!
//! Turns the raw `item_id`/`model` query parameters into a normalized
//! request. Pure and synchronous; all defaults come from the resolved
//! configuration, never from inline literals.

use plx_common::config::PlxConfig;

/// Normalized recommendation request
///
/// `models` preserves the order of the comma-separated input and is never
/// deduplicated: each occurrence of a model id gets its own placement call
/// and its own outcome entry. Segments that trim to the empty string are
/// kept and passed through to the upstream as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationQuery {
    /// Item identifier (the configured default when none was supplied)
    pub item_id: String,
    /// Ordered model identifiers to fan out over
    pub models: Vec<String>,
    /// False when `item_id` was absent or empty; the caller short-circuits
    /// to the empty state without contacting the upstream
    pub item_specified: bool,
}

/// Parse raw request parameters into a normalized query
///
/// - `item_id` absent or empty → `item_specified` is false and the
///   configured default id is carried for display purposes.
/// - `model` absent → single configured default model; otherwise split on
///   commas with each segment trimmed of surrounding whitespace.
pub fn parse(
    item_id: Option<&str>,
    model: Option<&str>,
    config: &PlxConfig,
) -> RecommendationQuery {
    let item_specified = item_id.is_some_and(|id| !id.is_empty());

    let item_id = match item_id {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => config.default_item_id.clone(),
    };

    let models = match model {
        Some(list) => list.split(',').map(|m| m.trim().to_string()).collect(),
        None => vec![config.default_model.clone()],
    };

    RecommendationQuery {
        item_id,
        models,
        item_specified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PlxConfig {
        PlxConfig::default()
    }

    #[test]
    fn test_parse_defaults() {
        let query = parse(None, None, &config());
        assert_eq!(query.item_id, "1177646331_multicolor");
        assert_eq!(query.models, vec!["B_prod"]);
        assert!(!query.item_specified);
    }

    #[test]
    fn test_parse_explicit_item_and_models() {
        let query = parse(Some("abc123"), Some("L_prod,B_prod"), &config());
        assert_eq!(query.item_id, "abc123");
        assert_eq!(query.models, vec!["L_prod", "B_prod"]);
        assert!(query.item_specified);
    }

    #[test]
    fn test_parse_trims_segments() {
        let query = parse(Some("abc123"), Some(" L_prod , B_prod "), &config());
        assert_eq!(query.models, vec!["L_prod", "B_prod"]);
    }

    #[test]
    fn test_parse_keeps_empty_segments() {
        // "B_prod,,L_prod" produces three calls, one with an empty model id
        // that fails (or not) at the remote end, not silently dropped.
        let query = parse(Some("abc123"), Some("B_prod,,L_prod"), &config());
        assert_eq!(query.models, vec!["B_prod", "", "L_prod"]);
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let query = parse(Some("abc123"), Some("B_prod,B_prod"), &config());
        assert_eq!(query.models, vec!["B_prod", "B_prod"]);
    }

    #[test]
    fn test_parse_empty_model_param_is_single_empty_model() {
        let query = parse(Some("abc123"), Some(""), &config());
        assert_eq!(query.models, vec![""]);
    }

    #[test]
    fn test_parse_empty_item_id_is_not_specified() {
        let query = parse(Some(""), None, &config());
        assert!(!query.item_specified);
        assert_eq!(query.item_id, "1177646331_multicolor");
    }

    #[test]
    fn test_parse_is_idempotent() {
        let first = parse(Some("abc123"), Some("L_prod,B_prod"), &config());
        let second = parse(Some("abc123"), Some("L_prod,B_prod"), &config());
        assert_eq!(first, second);
    }
}
