//! Pipeline orchestrator: discovery, concurrent extraction, ranking.
//!
//! This module asks the discovery backend for source pages, extracts every
//! source concurrently under its own timeout, skips the ones that fail, and
//! hands the surviving batches to the [`crate::relevance::Ranker`].

pub mod pipeline;

pub use pipeline::Pipeline;
