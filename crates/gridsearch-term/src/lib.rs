//! Terminal front-end for the grid search engine.
//!
//! Everything here is presentation: grid setup, live drawing of step
//! observations and the final statistics panel. The search itself lives in
//! `gridsearch-paths`.

pub mod render;
pub mod setup;
pub mod stats;
