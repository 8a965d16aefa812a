//! In-memory transport shared by the facade tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::{Arc, Mutex};

use statsbeam_client::MetricsTransport;
use statsbeam_core::protocol::{MetricKind, MetricSample, Value};

/// Owned copy of one sample as seen by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub name: String,
    pub kind: MetricKind,
    pub value: Value,
    pub sample_rate: f64,
    pub tags: Option<Vec<String>>,
}

#[derive(Default)]
pub struct RecordingTransport {
    samples: Mutex<Vec<Recorded>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn samples(&self) -> Vec<Recorded> {
        self.samples.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.samples.lock().unwrap().len()
    }

    pub fn only(&self) -> Recorded {
        let samples = self.samples();
        assert_eq!(samples.len(), 1, "expected exactly one sample: {samples:?}");
        samples.into_iter().next().unwrap()
    }
}

impl MetricsTransport for RecordingTransport {
    fn send(&self, sample: &MetricSample<'_>) {
        self.samples.lock().unwrap().push(Recorded {
            name: sample.name.to_owned(),
            kind: sample.kind,
            value: sample.value.clone(),
            sample_rate: sample.sample_rate,
            tags: sample.tags.map(|t| t.to_vec()),
        });
    }
}

pub fn strings(tags: &[&str]) -> Option<Vec<String>> {
    Some(tags.iter().map(|t| t.to_string()).collect())
}
