//! # giftrec Core
//!
//! Core library for the giftrec recommendation engine.
//!
//! - [`Vector`] - Dense feature vector
//! - [`SimilarityIndex`] - Exact cosine k-nearest-neighbor index
//! - [`Error`] - Error taxonomy shared by the encoder and the service
//!
//! ## Example
//!
//! ```rust
//! use giftrec_core::{SimilarityIndex, Vector};
//!
//! let vectors = vec![
//!     Vector::new(vec![1.0, 0.0, 0.0]),
//!     Vector::new(vec![0.0, 1.0, 0.0]),
//! ];
//! let index = SimilarityIndex::build(vectors, vec!["a", "b"]).unwrap();
//!
//! let results = index.query(&Vector::new(vec![1.0, 0.2, 0.0]), 1).unwrap();
//! assert_eq!(results[0].0, "a");
//! ```

pub mod error;
pub mod index;
pub mod vector;

/// Dot product, norm and cosine kernels
pub mod kernels;

pub use error::{Error, Result};
pub use index::{SimilarityIndex, DEFAULT_PARALLEL_THRESHOLD};
pub use vector::Vector;
