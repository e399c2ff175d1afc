//! Transport for London integration for the transit gateway
//!
//! Provides stop discovery and bus arrival predictions via the
//! [TfL Unified API](https://api.tfl.gov.uk).
//!
//! # Architecture
//!
//! [`UpstreamClient`] performs a single GET against the upstream and yields an
//! [`UpstreamOutcome`]. [`StopsTranslator`] and [`PredictionsTranslator`] map
//! gateway queries onto upstream parameters and reduce upstream records to the
//! gateway's normalized records. [`TflClient`] ties the three together behind
//! the [`StopPointClient`] trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_tfl::{StopPointClient, TflClient, TflConfig};
//!
//! let client = TflClient::new(&TflConfig::default())?;
//! let arrivals = client.arrivals(&query).await?;
//! ```

mod client;
mod config;
mod error;
mod predictions;
mod stops;

pub use client::{StopPointClient, TflClient, UpstreamClient, UpstreamOutcome};
pub use config::TflConfig;
pub use error::TflError;
pub use predictions::PredictionsTranslator;
pub use stops::StopsTranslator;
