//! Swappable configuration state.
//!
//! The whole configuration lives in one immutable [`Snapshot`]. Readers clone
//! the `Arc` under a short read lock and then work on their own copy, so a
//! concurrent reconfiguration can never hand a caller the old transport with
//! the new tags.

use std::sync::{Arc, PoisonError, RwLock};

use statsbeam_core::protocol::{MetricKind, MetricSample, Value};

use super::compose;
use crate::transport::MetricsTransport;

/// One complete configuration: transport, prefix and default tags together.
pub(crate) struct Snapshot {
    pub(crate) transport: Arc<dyn MetricsTransport>,
    pub(crate) prefix: Option<String>,
    pub(crate) default_tags: Option<Vec<String>>,
}

impl Snapshot {
    /// Compose name and tags, then hand the sample to the transport.
    pub(crate) fn send(
        &self,
        kind: MetricKind,
        name: &str,
        value: Value,
        sample_rate: f64,
        tags: Option<&[&str]>,
    ) {
        let name = compose::build_namespaced_name(self.prefix.as_deref(), name);
        let tags = compose::merge_tags(self.default_tags.as_deref(), tags);
        self.transport.send(&MetricSample {
            name: &name,
            kind,
            value,
            sample_rate,
            tags,
        });
    }
}

/// `None` means metrics are disabled.
pub(crate) struct ConfigurationState {
    current: RwLock<Option<Arc<Snapshot>>>,
}

impl ConfigurationState {
    pub(crate) const fn new() -> Self {
        Self {
            current: RwLock::new(None),
        }
    }

    pub(crate) fn load(&self) -> Option<Arc<Snapshot>> {
        // The snapshot is replaced whole, so a poisoned lock still guards a
        // consistent value.
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the configuration. Returns whether one was already present.
    pub(crate) fn store(&self, snapshot: Snapshot) -> bool {
        let mut slot = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        slot.replace(Arc::new(snapshot)).is_some()
    }

    pub(crate) fn is_set(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
