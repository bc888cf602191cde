//! # giftrec Service
//!
//! Orchestrates the encoder and the similarity index behind a single
//! [`RecommendationService`] handle.
//!
//! ## Lifecycle
//!
//! ```text
//!   unfit ──refresh(catalog)──> fitted(v1) ──refresh(catalog')──> fitted(v2) ...
//!     ^                                                              │
//!     └──────────────────────────── clear() ─────────────────────────┘
//! ```
//!
//! Every refresh builds a complete [`Snapshot`] (fitted encoder state plus
//! index) and publishes it atomically. Queries never see a half-built state.
//!
//! ```rust
//! use giftrec_encoder::{sample_catalog, Survey};
//! use giftrec_service::RecommendationService;
//!
//! let service = RecommendationService::default();
//! service.refresh(&sample_catalog()).unwrap();
//!
//! let survey = Survey::new()
//!     .with_answer("budget", 180)
//!     .with_answer("interests", "Technology")
//!     .with_answer("style", "Modern");
//! let results = service.recommend(&survey, 3).unwrap();
//! assert_eq!(results.len(), 3);
//! assert_eq!(results[0].rank, 1);
//! ```

pub mod config;
pub mod result;
pub mod service;
pub mod snapshot;

pub use config::ServiceConfig;
pub use result::{RecommendationResponse, RecommendationResult, RecommendationStats};
pub use service::RecommendationService;
pub use snapshot::Snapshot;
