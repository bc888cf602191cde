//! Feature encoder
//!
//! Converts feature records into fixed-width vectors using parameters learned
//! from one catalog snapshot. The layout is
//!
//! ```text
//! [ one-hot(category) | one-hot(target_age) | one-hot(style) | one-hot(occasion) | price | popularity ]
//! ```
//!
//! where each one-hot block is as wide as that feature's vocabulary and the
//! numeric coordinates are standardized with the fitted mean and deviation.

use crate::catalog::CatalogItem;
use crate::features::{CategoricalFeature, FeatureRecord, NumericFeature};
use crate::scaler::StandardScaler;
use crate::vocabulary::Vocabulary;
use giftrec_core::{Error, Result, Vector};
use std::ops::Range;
use std::sync::Arc;

/// Fitted encoder parameters.
///
/// Immutable: a refit produces a new state rather than patching this one, so
/// the scalers and vocabularies always describe the same catalog snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct EncoderState {
    vocabularies: [Vocabulary; 4],
    scalers: [StandardScaler; 2],
    offsets: [usize; 4],
    dim: usize,
}

impl EncoderState {
    /// Fit from feature records. Returns `None` when there are no records.
    pub fn fit(records: &[FeatureRecord]) -> Option<Self> {
        let scaler = |feature: NumericFeature| {
            StandardScaler::fit(records.iter().map(|r| r.numeric(feature)))
        };
        let scalers = [scaler(NumericFeature::Price)?, scaler(NumericFeature::Popularity)?];

        let vocabularies = CategoricalFeature::ALL
            .map(|feature| Vocabulary::fit(records.iter().map(|r| r.categorical(feature))));

        let mut offsets = [0usize; 4];
        let mut width = 0;
        for (offset, vocab) in offsets.iter_mut().zip(&vocabularies) {
            *offset = width;
            width += vocab.len();
        }

        Some(Self {
            vocabularies,
            scalers,
            offsets,
            dim: width + NumericFeature::ALL.len(),
        })
    }

    /// Fit from catalog items, applying attribute defaults
    pub fn fit_items(items: &[CatalogItem]) -> Option<Self> {
        let records: Vec<FeatureRecord> = items.iter().map(CatalogItem::record).collect();
        Self::fit(&records)
    }

    /// Total vector width
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn vocabulary(&self, feature: CategoricalFeature) -> &Vocabulary {
        &self.vocabularies[feature.slot()]
    }

    pub fn scaler(&self, feature: NumericFeature) -> &StandardScaler {
        &self.scalers[feature.slot()]
    }

    /// Coordinates of a categorical feature's one-hot block
    pub fn block(&self, feature: CategoricalFeature) -> Range<usize> {
        let start = self.offsets[feature.slot()];
        start..start + self.vocabulary(feature).len()
    }

    /// Coordinate of a scaled numeric feature
    pub fn numeric_position(&self, feature: NumericFeature) -> usize {
        self.dim - NumericFeature::ALL.len() + feature.slot()
    }

    /// Encode a record. Pure function of the state and the record.
    pub fn transform(&self, record: &FeatureRecord) -> Vector {
        let mut vector = Vector::zeros(self.dim);
        let data = vector.as_mut_slice();

        for feature in CategoricalFeature::ALL {
            let block = self.block(feature);
            self.vocabulary(feature)
                .encode_into(record.categorical(feature), &mut data[block]);
        }

        for feature in NumericFeature::ALL {
            data[self.numeric_position(feature)] =
                self.scaler(feature).scale(record.numeric(feature));
        }

        vector
    }

    pub fn transform_item(&self, item: &CatalogItem) -> Vector {
        self.transform(&item.record())
    }
}

/// Holder for an optional fitted state.
///
/// Starts unfit. `fit` on an empty catalog leaves the current state alone;
/// otherwise it swaps in a freshly fitted state.
#[derive(Debug, Clone, Default)]
pub struct FeatureEncoder {
    state: Option<Arc<EncoderState>>,
}

impl FeatureEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit on a catalog. Returns whether a new state was installed.
    pub fn fit(&mut self, items: &[CatalogItem]) -> bool {
        match EncoderState::fit_items(items) {
            Some(state) => {
                tracing::debug!(items = items.len(), dim = state.dim(), "encoder fitted");
                self.state = Some(Arc::new(state));
                true
            }
            None => {
                tracing::debug!("empty catalog, encoder left unchanged");
                false
            }
        }
    }

    pub fn is_fitted(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&Arc<EncoderState>> {
        self.state.as_ref()
    }

    pub fn dim(&self) -> Option<usize> {
        self.state.as_ref().map(|s| s.dim())
    }

    pub fn transform(&self, record: &FeatureRecord) -> Result<Vector> {
        let state = self.state.as_ref().ok_or(Error::NotFitted)?;
        Ok(state.transform(record))
    }

    pub fn transform_item(&self, item: &CatalogItem) -> Result<Vector> {
        self.transform(&item.record())
    }
}
