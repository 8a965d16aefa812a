//! statsbeam client library entry.
//!
//! Wires configuration, the metrics facade, and the UDP transport together.
//! Applications call [`configure`] once at startup and then emit through the
//! free functions (or through an owned [`Metrics`] where injection is
//! preferred). Emission never blocks and never reports transport failures.
//!
//! ```no_run
//! use statsbeam_client::{self as metrics, MetricsConfig, DEFAULT_SAMPLE_RATE};
//!
//! # fn main() -> statsbeam_core::Result<()> {
//! metrics::configure(&MetricsConfig::new("127.0.0.1").with_prefix("api"))?;
//!
//! metrics::increment("requests", DEFAULT_SAMPLE_RATE, Some(&["route:login"]));
//! let rows = metrics::time(|| 42, "db.query", DEFAULT_SAMPLE_RATE, None);
//! metrics::gauge("db.rows", rows, DEFAULT_SAMPLE_RATE, None);
//! # Ok(())
//! # }
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod facade;
pub mod global;
pub mod transport;

pub use config::MetricsConfig;
pub use facade::{compose, Metrics, ScopedTimer, DEFAULT_SAMPLE_RATE};
pub use global::*;
pub use transport::{MetricsTransport, UdpTransport};
