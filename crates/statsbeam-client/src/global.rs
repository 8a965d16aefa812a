//! Process-wide metrics instance.
//!
//! Configure once at startup with [`configure`]; every other function here is
//! a no-op until then.

use std::future::Future;
use std::sync::Arc;

use statsbeam_core::error::Result;
use statsbeam_core::protocol::Value;

use crate::config::MetricsConfig;
use crate::facade::{Metrics, ScopedTimer};
use crate::transport::MetricsTransport;

static GLOBAL: Metrics = Metrics::new();

impl Metrics {
    /// The process-wide instance used by the free functions.
    pub fn global() -> &'static Metrics {
        &GLOBAL
    }
}

pub fn configure(config: &MetricsConfig) -> Result<()> {
    GLOBAL.configure(config)
}

pub fn install(
    transport: Arc<dyn MetricsTransport>,
    prefix: Option<String>,
    default_tags: Option<Vec<String>>,
) {
    GLOBAL.install(transport, prefix, default_tags);
}

pub fn is_enabled() -> bool {
    GLOBAL.is_enabled()
}

pub fn counter<V: Into<Value>>(name: &str, value: V, sample_rate: f64, tags: Option<&[&str]>) {
    GLOBAL.counter(name, value, sample_rate, tags);
}

pub fn increment(name: &str, sample_rate: f64, tags: Option<&[&str]>) {
    GLOBAL.increment(name, sample_rate, tags);
}

pub fn decrement(name: &str, sample_rate: f64, tags: Option<&[&str]>) {
    GLOBAL.decrement(name, sample_rate, tags);
}

pub fn gauge<V: Into<Value>>(name: &str, value: V, sample_rate: f64, tags: Option<&[&str]>) {
    GLOBAL.gauge(name, value, sample_rate, tags);
}

pub fn histogram<V: Into<Value>>(name: &str, value: V, sample_rate: f64, tags: Option<&[&str]>) {
    GLOBAL.histogram(name, value, sample_rate, tags);
}

pub fn set<V: Into<Value>>(name: &str, value: V, sample_rate: f64, tags: Option<&[&str]>) {
    GLOBAL.set(name, value, sample_rate, tags);
}

pub fn timer<V: Into<Value>>(name: &str, value: V, sample_rate: f64, tags: Option<&[&str]>) {
    GLOBAL.timer(name, value, sample_rate, tags);
}

pub fn start_timer<'a>(
    name: &'a str,
    sample_rate: f64,
    tags: Option<&'a [&'a str]>,
) -> ScopedTimer<'a> {
    GLOBAL.start_timer(name, sample_rate, tags)
}

pub fn time<T, F>(action: F, name: &str, sample_rate: f64, tags: Option<&[&str]>) -> T
where
    F: FnOnce() -> T,
{
    GLOBAL.time(action, name, sample_rate, tags)
}

pub async fn time_future<F>(future: F, name: &str, sample_rate: f64, tags: Option<&[&str]>) -> F::Output
where
    F: Future,
{
    GLOBAL.time_future(future, name, sample_rate, tags).await
}
