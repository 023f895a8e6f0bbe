//! **gridsearch-core**: shared value types for the grid search engine.
//!
//! This crate provides the types every layer agrees on: grid coordinates,
//! the run configuration handed to the engine, a cooperative cancellation
//! token and the error taxonomy for rejected configurations.

pub mod config;
pub mod context;
pub mod error;
pub mod geom;

pub use config::{
    Algorithm, HeuristicKind, MAX_GRID_SIZE, MIN_GRID_SIZE, SearchConfig, validate_grid_size,
};
pub use context::Context;
pub use error::SearchError;
pub use geom::Cell;
