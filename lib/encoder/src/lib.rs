//! # giftrec Encoder
//!
//! Turns catalog items and survey answers into vectors in one shared space.
//!
//! 1. Items and surveys are flattened into a [`FeatureRecord`] with defaults
//!    applied (`"Any"` for missing categories, 50 for missing popularity).
//! 2. [`EncoderState::fit`] learns a sorted [`Vocabulary`] per categorical
//!    feature and a [`StandardScaler`] per numeric feature.
//! 3. [`EncoderState::transform`] emits one-hot blocks followed by the scaled
//!    numeric coordinates.
//!
//! ```rust
//! use giftrec_encoder::{sample_catalog, EncoderState, Survey};
//!
//! let state = EncoderState::fit_items(&sample_catalog()).unwrap();
//! let query = Survey::new()
//!     .with_answer("budget", 180)
//!     .with_answer("interests", "Technology");
//!
//! let vector = state.transform(&query.record());
//! assert_eq!(vector.dim(), state.dim());
//! ```

pub mod catalog;
pub mod encoder;
pub mod features;
pub mod lenient;
pub mod scaler;
pub mod survey;
pub mod vocabulary;

pub use catalog::{load_catalog, sample_catalog, CatalogItem, GiftAttributes, ItemId};
pub use encoder::{EncoderState, FeatureEncoder};
pub use features::{
    CategoricalFeature, FeatureRecord, NumericFeature, DEFAULT_BUDGET, DEFAULT_CATEGORY,
    DEFAULT_POPULARITY, SURVEY_POPULARITY,
};
pub use scaler::StandardScaler;
pub use survey::Survey;
pub use vocabulary::Vocabulary;
