//! Feature vocabulary shared by items and queries.
//!
//! Every record, whether it came from a catalog item or a survey, is reduced
//! to the same flat [`FeatureRecord`] before encoding. The order of
//! [`CategoricalFeature::ALL`] and [`NumericFeature::ALL`] is the block order
//! of the encoded vector.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value used for a categorical feature that was not supplied
pub const DEFAULT_CATEGORY: &str = "Any";

/// Popularity assumed for items without a usable popularity attribute
pub const DEFAULT_POPULARITY: f32 = 50.0;

/// Popularity assigned to every survey query
pub const SURVEY_POPULARITY: f32 = 50.0;

/// Price assumed when a survey has no usable budget
pub const DEFAULT_BUDGET: f32 = 100.0;

/// Categorical features, in vector block order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoricalFeature {
    Category,
    TargetAge,
    Style,
    Occasion,
}

impl CategoricalFeature {
    pub const ALL: [CategoricalFeature; 4] = [
        CategoricalFeature::Category,
        CategoricalFeature::TargetAge,
        CategoricalFeature::Style,
        CategoricalFeature::Occasion,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CategoricalFeature::Category => "category",
            CategoricalFeature::TargetAge => "target_age",
            CategoricalFeature::Style => "style",
            CategoricalFeature::Occasion => "occasion",
        }
    }

    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CategoricalFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Numeric features, in vector block order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericFeature {
    Price,
    Popularity,
}

impl NumericFeature {
    pub const ALL: [NumericFeature; 2] = [NumericFeature::Price, NumericFeature::Popularity];

    pub fn name(self) -> &'static str {
        match self {
            NumericFeature::Price => "price",
            NumericFeature::Popularity => "popularity",
        }
    }

    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for NumericFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Flat feature record with every default already applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub price: f32,
    pub popularity: f32,
    pub category: String,
    pub target_age: String,
    pub style: String,
    pub occasion: String,
}

impl FeatureRecord {
    pub fn numeric(&self, feature: NumericFeature) -> f32 {
        match feature {
            NumericFeature::Price => self.price,
            NumericFeature::Popularity => self.popularity,
        }
    }

    pub fn categorical(&self, feature: CategoricalFeature) -> &str {
        match feature {
            CategoricalFeature::Category => &self.category,
            CategoricalFeature::TargetAge => &self.target_age,
            CategoricalFeature::Style => &self.style,
            CategoricalFeature::Occasion => &self.occasion,
        }
    }
}

impl Default for FeatureRecord {
    fn default() -> Self {
        Self {
            price: DEFAULT_BUDGET,
            popularity: DEFAULT_POPULARITY,
            category: DEFAULT_CATEGORY.to_string(),
            target_age: DEFAULT_CATEGORY.to_string(),
            style: DEFAULT_CATEGORY.to_string(),
            occasion: DEFAULT_CATEGORY.to_string(),
        }
    }
}
