//! Transport seam between the facade and the network.
//!
//! The facade composes a [`MetricSample`] and hands it over; everything after
//! that (sampling, encoding, sending) belongs to the transport. Transports are
//! fire-and-forget: `send` has no return value, and failures are logged and
//! dropped at this boundary.

pub mod udp;

use std::time::Instant;

use statsbeam_core::protocol::{MetricKind, MetricSample, Tags};

pub use udp::UdpTransport;

/// Sink for composed metric samples.
pub trait MetricsTransport: Send + Sync {
    /// Encode and transmit one sample, or drop it when sampled out.
    fn send(&self, sample: &MetricSample<'_>);

    /// Run `action` and send its duration as a Timing sample.
    ///
    /// The sample is sent on every exit path, including a panic in `action`.
    fn time(
        &self,
        action: &mut dyn FnMut(),
        name: &str,
        sample_rate: f64,
        tags: Option<Tags<'_>>,
    ) {
        let _guard = SendOnDrop {
            transport: self,
            name,
            sample_rate,
            tags,
            start: Instant::now(),
        };
        action();
    }
}

struct SendOnDrop<'a, T: MetricsTransport + ?Sized> {
    transport: &'a T,
    name: &'a str,
    sample_rate: f64,
    tags: Option<Tags<'a>>,
    start: Instant,
}

impl<T: MetricsTransport + ?Sized> Drop for SendOnDrop<'_, T> {
    fn drop(&mut self) {
        self.transport.send(&MetricSample {
            name: self.name,
            kind: MetricKind::Timing,
            value: self.start.elapsed().into(),
            sample_rate: self.sample_rate,
            tags: self.tags,
        });
    }
}
