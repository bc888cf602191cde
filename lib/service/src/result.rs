//! Output structures handed back to the request layer.

use giftrec_encoder::CatalogItem;
use serde::Serialize;
use std::sync::Arc;

/// One ranked recommendation.
///
/// Serializes as the item's own fields followed by `score` and `rank`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    #[serde(flatten)]
    pub item: Arc<CatalogItem>,
    /// Similarity to the query, clamped to [0, 1] unless configured otherwise
    pub score: f32,
    /// 1-based position in the returned order
    pub rank: usize,
}

/// Summary statistics for one recommendation query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationStats {
    /// Catalog items considered
    pub candidates_count: usize,
    pub results_count: usize,
    pub avg_score: f32,
    pub best_score: f32,
}

impl RecommendationStats {
    pub fn compute(results: &[RecommendationResult], candidates_count: usize) -> Self {
        let Some(best) = results.first() else {
            return Self {
                candidates_count,
                results_count: 0,
                avg_score: 0.0,
                best_score: 0.0,
            };
        };

        let total: f32 = results.iter().map(|r| r.score).sum();
        Self {
            candidates_count,
            results_count: results.len(),
            avg_score: total / results.len() as f32,
            best_score: best.score,
        }
    }
}

/// Envelope for a full answer: which snapshot produced it, results, stats
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    pub result: Vec<RecommendationResult>,
    pub stats: RecommendationStats,
}

impl RecommendationResponse {
    pub fn new(version: Option<u64>, result: Vec<RecommendationResult>, candidates_count: usize) -> Self {
        let stats = RecommendationStats::compute(&result, candidates_count);
        Self {
            version,
            result,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use giftrec_encoder::{GiftAttributes, ItemId};

    fn result(id: u64, score: f32, rank: usize) -> RecommendationResult {
        RecommendationResult {
            item: Arc::new(
                CatalogItem::new(id, format!("Gift {}", id), 10.0, "Books")
                    .with_attributes(GiftAttributes::default().with_style("Classic")),
            ),
            score,
            rank,
        }
    }

    #[test]
    fn test_serialization_is_flat() {
        let json = serde_json::to_value(result(4, 0.75, 1)).unwrap();

        assert_eq!(json["id"], 4);
        assert_eq!(json["name"], "Gift 4");
        assert_eq!(json["category"], "Books");
        assert_eq!(json["attributes"]["style"], "Classic");
        assert_eq!(json["score"], 0.75);
        assert_eq!(json["rank"], 1);
    }

    #[test]
    fn test_stats() {
        let results = vec![result(1, 0.9, 1), result(2, 0.5, 2), result(3, 0.4, 3)];
        let stats = RecommendationStats::compute(&results, 10);

        assert_eq!(stats.candidates_count, 10);
        assert_eq!(stats.results_count, 3);
        assert!((stats.avg_score - 0.6).abs() < 1e-6);
        assert_eq!(stats.best_score, 0.9);
        assert_eq!(results[0].item.id, ItemId::Integer(1));
    }

    #[test]
    fn test_stats_empty() {
        let stats = RecommendationStats::compute(&[], 0);
        assert_eq!(stats.results_count, 0);
        assert_eq!(stats.best_score, 0.0);
    }

    #[test]
    fn test_response_envelope() {
        let response = RecommendationResponse::new(Some(3), vec![result(1, 0.5, 1)], 5);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["version"], 3);
        assert_eq!(json["result"].as_array().unwrap().len(), 1);
        assert_eq!(json["stats"]["candidates_count"], 5);

        let empty = serde_json::to_value(RecommendationResponse::new(None, vec![], 0)).unwrap();
        assert!(empty.get("version").is_none());
    }
}
