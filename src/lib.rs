//! # giftrec
//!
//! An in-process gift recommendation engine.
//!
//! A catalog of items is encoded into a shared vector space (one-hot blocks
//! for category, target age, style and occasion, standardized price and
//! popularity). A survey is mapped into the same space and the catalog is
//! ranked by cosine similarity to it.
//!
//! ## Quick Start
//!
//! ### As a Library
//!
//! ```rust
//! use giftrec::prelude::*;
//!
//! let service = RecommendationService::default();
//! service.refresh(&sample_catalog()).unwrap();
//!
//! let survey = Survey::new()
//!     .with_answer("budget", 180)
//!     .with_answer("interests", "Technology")
//!     .with_answer("style", "Modern");
//!
//! for rec in service.recommend(&survey, 3).unwrap() {
//!     println!("{}. {} ({:.2})", rec.rank, rec.item.name, rec.score);
//! }
//! ```
//!
//! ### From the Command Line
//!
//! ```bash
//! giftrec --survey '{"budget": 180, "interests": "Technology", "style": "Modern"}'
//! giftrec --catalog gifts.json --survey @answers.json -k 5
//! ```
//!
//! ## Crate Structure
//!
//! - `giftrec-core` - Vector, cosine kernels, similarity index, errors
//! - `giftrec-encoder` - Catalog/survey model and the feature encoder
//! - `giftrec-service` - Snapshot publishing and recommendation queries

// Re-export core types
pub use giftrec_core::{Error, Result, SimilarityIndex, Vector};

// Re-export encoder
pub use giftrec_encoder::{
    load_catalog, sample_catalog, CatalogItem, CategoricalFeature, EncoderState, FeatureEncoder,
    FeatureRecord, GiftAttributes, ItemId, NumericFeature, Survey,
};

// Re-export service
pub use giftrec_service::{
    RecommendationResponse, RecommendationResult, RecommendationService, ServiceConfig, Snapshot,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        sample_catalog, CatalogItem, Error, GiftAttributes, ItemId, RecommendationResult,
        RecommendationService, Result, ServiceConfig, Survey,
    };
}
