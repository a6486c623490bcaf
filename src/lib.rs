//! # quizrank
//!
//! HTTP host for [`quiz_search`]: loads configuration, serves
//! `GET /scrape?query=...`, and maps pipeline failures to HTTP statuses.
//!
//! ```no_run
//! # async fn example() -> quizrank::error::Result<()> {
//! use std::sync::Arc;
//! use quizrank::config::ServerConfig;
//! use quizrank::server::QueryServer;
//!
//! let config = ServerConfig::default();
//! let pipeline = Arc::new(quiz_search::web_pipeline(config.search.clone())?);
//! let server = QueryServer::start(pipeline, &config.server).await?;
//! println!("listening on {}", server.addr());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod server;

pub use config::{ListenConfig, ServerConfig};
pub use error::{Result, ServerError};
pub use server::QueryServer;
