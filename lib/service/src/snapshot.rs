use giftrec_core::{Result, SimilarityIndex, Vector};
use giftrec_encoder::{CatalogItem, EncoderState, FeatureRecord};
use std::sync::Arc;

/// One consistent (encoder state, index) pair.
///
/// Built off to the side from a full catalog and never modified afterwards.
/// Readers holding an `Arc<Snapshot>` keep a coherent view for as long as
/// they need it, regardless of later refreshes.
#[derive(Debug)]
pub struct Snapshot {
    version: u64,
    encoder: EncoderState,
    index: SimilarityIndex<Arc<CatalogItem>>,
}

impl Snapshot {
    /// Fit the encoder and build the index. `Ok(None)` for an empty catalog.
    pub fn build(
        version: u64,
        catalog: &[CatalogItem],
        parallel_threshold: usize,
    ) -> Result<Option<Self>> {
        let Some(encoder) = EncoderState::fit_items(catalog) else {
            return Ok(None);
        };

        let vectors: Vec<Vector> = catalog
            .iter()
            .map(|item| encoder.transform_item(item))
            .collect();
        let refs: Vec<Arc<CatalogItem>> = catalog.iter().cloned().map(Arc::new).collect();
        let index = SimilarityIndex::build(vectors, refs)?
            .with_parallel_threshold(parallel_threshold);

        Ok(Some(Self {
            version,
            encoder,
            index,
        }))
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn encoder(&self) -> &EncoderState {
        &self.encoder
    }

    pub fn index(&self) -> &SimilarityIndex<Arc<CatalogItem>> {
        &self.index
    }

    /// Catalog items in insertion order
    pub fn items(&self) -> &[Arc<CatalogItem>] {
        self.index.refs()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Encode `record` and return the `k` nearest items with raw similarity
    pub fn query(&self, record: &FeatureRecord, k: usize) -> Result<Vec<(Arc<CatalogItem>, f32)>> {
        let vector = self.encoder.transform(record);
        self.index.query(&vector, k)
    }
}
