//! Financial Modeling Prep client
//!
//! This crate provides access to the Financial Modeling Prep REST API and its
//! real-time WebSocket feeds.
//!
//! # Overview
//!
//! - Every REST endpoint is an entry in a declarative table ([`endpoints`]),
//!   grouped by [`Category`]; one generic call path resolves and sends any of them
//! - Responses are cached in memory, keyed on path and parameters (never the API key)
//! - Error-shaped responses are classified into auth, rate limit, malformed
//!   request and unknown failures
//! - Equities, crypto and forex streams with login, subscribe and unsubscribe
//!
//! # Architecture
//!
//! ```text
//! +----------------------+
//! | FinancialModelingPrep|  (facade, per-category handles)
//! +----------------------+
//!            |
//!            v
//! +----------------------+
//! |  Endpoint + Args     |  (template + parameter contract -> ApiRequest)
//! +----------------------+
//!            |
//!            v
//! +----------------------+
//! |     HttpClient       |  (apikey, timeout, cache, retry, classification)
//! +----------------------+
//!
//! +----------------------+
//! |    StreamClient      |  (connect, login, subscribe, forward to handler)
//! +----------------------+
//! ```
//!
//! # Example
//!
//! ```no_run
//! use fmp_client::{Args, Category, FinancialModelingPrep};
//!
//! # async fn run() -> fmp_client::Result<()> {
//! let fmp = FinancialModelingPrep::from_env()?;
//!
//! let chart = fmp
//!     .call(
//!         Category::Charts,
//!         "intraday_chart",
//!         &Args::new()
//!             .with("timeframe", "5min")
//!             .with("symbol", "AAPL")
//!             .with("from", "2023-01-01")
//!             .with("to", "2023-01-02"),
//!     )
//!     .await?;
//! # let _ = chart;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod errors;
pub mod http;
pub mod stream;

pub use client::{CategoryClient, FinancialModelingPrep};
pub use config::{CacheConfig, ClientConfig, StreamConfig};
pub use endpoints::{Args, Category, Endpoint, Param};
pub use errors::{ApiErrorKind, FmpError, ReconnectPolicy, Result, RetryPolicy};
pub use http::{ApiRequest, HttpClient, MemoryCache, ResponseCache};
pub use stream::{ConnectionState, Feed, MessageHandler, StreamClient, StreamMessage};
