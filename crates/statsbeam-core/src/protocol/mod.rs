//! Wire-level types shared by the facade and the transports.
//!
//! - `sample`: the in-memory shape of one emission (kind, value, tags).
//! - `datagram`: DogStatsD text encoding of a sample.
//!
//! The encoder is panic-free: unencodable input is reported as `StatsError`
//! so a transport can log and drop it.

pub mod datagram;
pub mod sample;

pub use datagram::{encode_datagram, DEFAULT_MAX_PACKET_SIZE};
pub use sample::{MetricKind, MetricSample, Tags, Value};
