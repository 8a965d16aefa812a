//! The emission facade.
//!
//! Every operation is safe to call at any time: before configuration, in
//! tests, or in environments where metrics are disabled, it returns
//! immediately without composing a sample. Once configured, the call composes
//! the namespaced name and merged tags and hands the sample to the transport
//! without waiting for anything.

pub mod compose;
mod state;
mod timer;

use std::future::Future;
use std::sync::Arc;

use statsbeam_core::error::Result;
use statsbeam_core::protocol::{MetricKind, Value};

use crate::config::MetricsConfig;
use crate::transport::{MetricsTransport, UdpTransport};

use state::{ConfigurationState, Snapshot};

pub use timer::ScopedTimer;

/// Sample rate meaning "always send".
pub const DEFAULT_SAMPLE_RATE: f64 = 1.0;

/// Metrics emitter with swappable configuration.
///
/// Usually used through the process-wide instance ([`Metrics::global`] and
/// the free functions at the crate root); owned instances behave the same.
pub struct Metrics {
    state: ConfigurationState,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a disabled emitter.
    pub const fn new() -> Self {
        Self {
            state: ConfigurationState::new(),
        }
    }

    /// Validate `config`, connect a UDP transport to its endpoint, and replace
    /// the current configuration with it.
    ///
    /// On error the previous configuration stays in place.
    pub fn configure(&self, config: &MetricsConfig) -> Result<()> {
        config.validate()?;
        let transport = UdpTransport::new(
            &config.endpoint_host,
            config.endpoint_port,
            config.max_packet_size,
        )?;

        tracing::info!(
            endpoint = %transport.endpoint(),
            max_packet_size = config.max_packet_size,
            prefix = ?config.prefix,
            default_tags = ?config.default_tags,
            "metrics configured"
        );

        self.install(
            Arc::new(transport),
            config.prefix.clone(),
            config.default_tags.clone(),
        );
        Ok(())
    }

    /// Replace the current configuration with an arbitrary transport.
    ///
    /// `prefix` and `default_tags` are stored exactly as given.
    pub fn install(
        &self,
        transport: Arc<dyn MetricsTransport>,
        prefix: Option<String>,
        default_tags: Option<Vec<String>>,
    ) {
        let replaced = self.state.store(Snapshot {
            transport,
            prefix,
            default_tags,
        });
        tracing::debug!(replaced, "metrics transport installed");
    }

    /// Whether a transport is configured.
    pub fn is_enabled(&self) -> bool {
        self.state.is_set()
    }

    pub fn counter<V: Into<Value>>(
        &self,
        name: &str,
        value: V,
        sample_rate: f64,
        tags: Option<&[&str]>,
    ) {
        self.emit(MetricKind::Counting, name, value, sample_rate, tags);
    }

    /// Counter with value `1`.
    pub fn increment(&self, name: &str, sample_rate: f64, tags: Option<&[&str]>) {
        self.emit(MetricKind::Counting, name, 1, sample_rate, tags);
    }

    /// Counter with value `-1`.
    pub fn decrement(&self, name: &str, sample_rate: f64, tags: Option<&[&str]>) {
        self.emit(MetricKind::Counting, name, -1, sample_rate, tags);
    }

    pub fn gauge<V: Into<Value>>(
        &self,
        name: &str,
        value: V,
        sample_rate: f64,
        tags: Option<&[&str]>,
    ) {
        self.emit(MetricKind::Gauge, name, value, sample_rate, tags);
    }

    pub fn histogram<V: Into<Value>>(
        &self,
        name: &str,
        value: V,
        sample_rate: f64,
        tags: Option<&[&str]>,
    ) {
        self.emit(MetricKind::Histogram, name, value, sample_rate, tags);
    }

    pub fn set<V: Into<Value>>(&self, name: &str, value: V, sample_rate: f64, tags: Option<&[&str]>) {
        self.emit(MetricKind::Set, name, value, sample_rate, tags);
    }

    /// Timing sample; a `Duration` is sent in whole milliseconds.
    pub fn timer<V: Into<Value>>(
        &self,
        name: &str,
        value: V,
        sample_rate: f64,
        tags: Option<&[&str]>,
    ) {
        self.emit(MetricKind::Timing, name, value, sample_rate, tags);
    }

    /// Start a timer that emits a Timing sample when released.
    pub fn start_timer<'a>(
        &'a self,
        name: &'a str,
        sample_rate: f64,
        tags: Option<&'a [&'a str]>,
    ) -> ScopedTimer<'a> {
        ScopedTimer::new(self, name, sample_rate, tags)
    }

    /// Run `action` once and record how long it took.
    ///
    /// The timing is recorded on every exit path: a normal return, an `Err`
    /// carried in `T` (returned to the caller unchanged), or a panic. When
    /// disabled, `action` runs with no timing at all.
    pub fn time<T, F>(&self, action: F, name: &str, sample_rate: f64, tags: Option<&[&str]>) -> T
    where
        F: FnOnce() -> T,
    {
        if !self.is_enabled() {
            return action();
        }
        let _timer = self.start_timer(name, sample_rate, tags);
        action()
    }

    /// Await `future` and record how long it took.
    ///
    /// Dropping the returned future early records the time up to the drop.
    pub async fn time_future<F>(
        &self,
        future: F,
        name: &str,
        sample_rate: f64,
        tags: Option<&[&str]>,
    ) -> F::Output
    where
        F: Future,
    {
        if !self.is_enabled() {
            return future.await;
        }
        let _timer = self.start_timer(name, sample_rate, tags);
        future.await
    }

    fn emit<V: Into<Value>>(
        &self,
        kind: MetricKind,
        name: &str,
        value: V,
        sample_rate: f64,
        tags: Option<&[&str]>,
    ) {
        let Some(snapshot) = self.state.load() else {
            return;
        };
        snapshot.send(kind, name, value.into(), sample_rate, tags);
    }
}
