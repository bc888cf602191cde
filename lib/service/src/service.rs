use crate::config::ServiceConfig;
use crate::result::RecommendationResult;
use crate::snapshot::Snapshot;
use giftrec_core::Result;
use giftrec_encoder::{CatalogItem, CategoricalFeature, NumericFeature, Survey};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Answers survey queries against the most recently published catalog snapshot.
///
/// `refresh` fits and indexes a catalog without holding any lock, then
/// publishes the result with a pointer swap under a short write lock. Queries
/// clone the current `Arc<Snapshot>` under the read lock and do all their work
/// against that clone, so a query that overlaps a refresh sees either the old
/// snapshot or the new one, never a mix.
pub struct RecommendationService {
    config: ServiceConfig,
    current: RwLock<Option<Arc<Snapshot>>>,
    next_version: AtomicU64,
}

impl RecommendationService {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            current: RwLock::new(None),
            next_version: AtomicU64::new(1),
        })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Re-fit on the full catalog and publish the new snapshot.
    ///
    /// An empty catalog is not an error: nothing is built and whatever was
    /// published before stays published. Returns whether a snapshot was
    /// published; a build that loses the race to a newer concurrent refresh
    /// is discarded.
    pub fn refresh(&self, catalog: &[CatalogItem]) -> Result<bool> {
        let version = self.next_version.fetch_add(1, Ordering::Relaxed);

        let Some(snapshot) = Snapshot::build(version, catalog, self.config.parallel_threshold)? else {
            tracing::warn!(version, "refresh with empty catalog ignored");
            return Ok(false);
        };
        let dim = snapshot.encoder().dim();

        let mut current = self.current.write();
        if let Some(existing) = current.as_ref() {
            if existing.version() > version {
                tracing::debug!(
                    version,
                    published = existing.version(),
                    "stale snapshot discarded"
                );
                return Ok(false);
            }
        }
        *current = Some(Arc::new(snapshot));
        drop(current);

        tracing::info!(version, items = catalog.len(), dim, "catalog snapshot published");
        Ok(true)
    }

    /// Unpublish the current snapshot, returning the service to the unfit state
    pub fn clear(&self) {
        if self.current.write().take().is_some() {
            tracing::info!("catalog snapshot cleared");
        }
    }

    /// The currently published snapshot, if any
    pub fn snapshot(&self) -> Option<Arc<Snapshot>> {
        self.current.read().clone()
    }

    pub fn is_fitted(&self) -> bool {
        self.current.read().is_some()
    }

    pub fn version(&self) -> Option<u64> {
        self.snapshot().map(|s| s.version())
    }

    /// Number of items in the published catalog
    pub fn len(&self) -> usize {
        self.snapshot().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rank catalog items against a survey.
    ///
    /// Returns an empty list while nothing has been fitted. A dimension
    /// mismatch between encoder and index means the snapshot is corrupt and
    /// is returned as an error.
    pub fn recommend(&self, survey: &Survey, k: usize) -> Result<Vec<RecommendationResult>> {
        match self.snapshot() {
            Some(snapshot) => self.recommend_with(&snapshot, survey, k),
            None => {
                tracing::debug!("recommend before any fit, returning no results");
                Ok(Vec::new())
            }
        }
    }

    /// `recommend` with the configured default result count
    pub fn recommend_default(&self, survey: &Survey) -> Result<Vec<RecommendationResult>> {
        self.recommend(survey, self.config.default_k)
    }

    /// Rank against an explicit snapshot, e.g. one obtained from [`Self::snapshot`]
    pub fn recommend_with(
        &self,
        snapshot: &Snapshot,
        survey: &Survey,
        k: usize,
    ) -> Result<Vec<RecommendationResult>> {
        let mut record = survey.record();
        if self.config.neutral_query_popularity {
            record.popularity = snapshot.encoder().scaler(NumericFeature::Popularity).mean() as f32;
        }

        let ranked = match snapshot.query(&record, k) {
            Ok(ranked) => ranked,
            Err(e) => {
                tracing::error!(version = snapshot.version(), error = %e, "snapshot is inconsistent");
                return Err(e);
            }
        };

        tracing::debug!(
            version = snapshot.version(),
            k,
            returned = ranked.len(),
            "recommendations computed"
        );

        Ok(ranked
            .into_iter()
            .enumerate()
            .map(|(position, (item, similarity))| RecommendationResult {
                item,
                score: self.display_score(similarity),
                rank: position + 1,
            })
            .collect())
    }

    fn display_score(&self, similarity: f32) -> f32 {
        if self.config.clamp_scores {
            similarity.clamp(0.0, 1.0)
        } else {
            similarity
        }
    }

    /// Distinct categories of the published catalog, sorted
    pub fn categories(&self) -> Vec<String> {
        self.snapshot()
            .map(|s| s.encoder().vocabulary(CategoricalFeature::Category).values().to_vec())
            .unwrap_or_default()
    }

    /// Items of exactly `category`, in catalog order
    pub fn items_in_category(&self, category: &str) -> Vec<Arc<CatalogItem>> {
        self.snapshot()
            .map(|s| {
                s.items()
                    .iter()
                    .filter(|item| item.category == category)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Default for RecommendationService {
    fn default() -> Self {
        Self {
            config: ServiceConfig::default(),
            current: RwLock::new(None),
            next_version: AtomicU64::new(1),
        }
    }
}
