//! Top-level facade crate for statsbeam.
//!
//! Re-exports core types and the client library so users can depend on a single crate.

pub mod core {
    pub use statsbeam_core::*;
}

pub mod client {
    pub use statsbeam_client::*;
}

pub use statsbeam_client::{
    configure, counter, decrement, gauge, histogram, increment, set, start_timer, time,
    time_future, timer, Metrics, MetricsConfig, DEFAULT_SAMPLE_RATE,
};
