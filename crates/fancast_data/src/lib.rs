//! # fancast_data
//!
//! Dataset assembly for fancast probabilistic forecasting.
//!
//! This crate provides:
//! - [`ListDataset`] and [`SeriesRecord`] for raw start/frequency-keyed
//!   targets
//! - [`train_test_datasets`] for the backtest split at a horizon
//! - Seeded synthetic recipes mirroring the reproduction pipeline
//!
//! ## Example
//!
//! ```rust
//! use fancast_core::Seed;
//! use fancast_data::{recipe, train_test_datasets};
//!
//! let r = recipe("synthetic_normal_small").unwrap();
//! let target = r.generate(Seed::new(1));
//! let (train, test) = train_test_datasets(&target, &r.metadata()).unwrap();
//! assert_eq!(train.len(), 1);
//! assert_eq!(test.len(), 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod dataset;
mod error;
mod synthetic;

pub use dataset::{train_test_datasets, DatasetMetadata, ListDataset, SeriesRecord};
pub use error::{DataError, Result};
pub use synthetic::{recipe, synthetic_normal_target, SyntheticRecipe, SYNTHETIC_RECIPES};
