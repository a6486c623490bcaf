//! Relevance core: text normalisation, hybrid scoring, and ranking.
//!
//! Everything in this module is pure and stateless. Functions only read
//! their arguments, so they can be called from any number of tasks at once
//! without synchronisation.

pub mod normalize;
pub mod rank;
pub mod scoring;

pub use normalize::{normalize, TokenSequence};
pub use rank::Ranker;
pub use scoring::Scorer;
