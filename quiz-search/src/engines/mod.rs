//! Source discovery backends.
//!
//! Each module provides a struct implementing
//! [`crate::discovery::SourceDiscovery`] that scrapes a specific search
//! engine's HTML results page for links on the target site.

pub mod duckduckgo;
pub mod google;

pub use duckduckgo::DuckDuckGoDiscovery;
pub use google::GoogleDiscovery;
