//! Per-model fan-out orchestrator
//!
//! Issues one placement call per requested model, all concurrently, and
//! joins on the full set. Individual call failures are recovered into that
//! model's outcome and never fail the batch: a slow or failing model cannot
//! delay or corrupt its siblings' results.

use futures::future::join_all;
use tracing::{debug, warn};

use plx_common::api::types::ModelOutcome;

use crate::client::PlacementClient;
use crate::query::RecommendationQuery;

/// Fan-out executor over the placement client
///
/// Outcomes come back index-aligned with the requested model list:
/// `join_all` preserves input order, so the ordering guarantee is
/// positional, not temporal.
#[derive(Clone)]
pub struct FanOutOrchestrator {
    client: PlacementClient,
}

impl FanOutOrchestrator {
    /// Create a new orchestrator wrapping the given client
    pub fn new(client: PlacementClient) -> Self {
        Self { client }
    }

    /// Fetch placements for every model in the query, concurrently
    ///
    /// Returns exactly one outcome per requested model, in request order.
    /// Duplicate model ids each get their own independent call and entry.
    /// Never fails as a whole: per-model failures carry their message in the
    /// outcome instead of propagating.
    pub async fn fetch_all(&self, query: &RecommendationQuery) -> Vec<ModelOutcome> {
        let futures = query.models.iter().map(|model| {
            let client = self.client.clone();
            let model = model.clone();
            let item_id = query.item_id.clone();
            async move {
                match client.fetch_placements(&model, &item_id).await {
                    Ok(data) => {
                        debug!(model = %model, item_id = %item_id, "Placement fetch succeeded");
                        ModelOutcome::success(model, data)
                    }
                    Err(e) => {
                        warn!(
                            model = %model,
                            item_id = %item_id,
                            error = %e,
                            "Placement fetch failed (per-model error isolation)"
                        );
                        ModelOutcome::failure(model, e.to_string())
                    }
                }
            }
        });

        join_all(futures).await
    }
}
