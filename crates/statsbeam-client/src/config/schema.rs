use serde::Deserialize;
use statsbeam_core::error::{Result, StatsError};
use statsbeam_core::protocol::DEFAULT_MAX_PACKET_SIZE;

/// Startup configuration for the metrics facade.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsConfig {
    /// Collector host name or IP address. Required.
    pub endpoint_host: String,

    #[serde(default = "default_endpoint_port")]
    pub endpoint_port: u16,

    /// Largest datagram the transport will send, in bytes.
    #[serde(default = "default_max_packet_size")]
    pub max_packet_size: usize,

    /// Prepended to every stat name as `<prefix>.<name>`.
    #[serde(default)]
    pub prefix: Option<String>,

    /// Attached to every sample, ahead of call-site tags.
    #[serde(default)]
    pub default_tags: Option<Vec<String>>,
}

impl MetricsConfig {
    pub fn new(endpoint_host: impl Into<String>) -> Self {
        Self {
            endpoint_host: endpoint_host.into(),
            endpoint_port: default_endpoint_port(),
            max_packet_size: default_max_packet_size(),
            prefix: None,
            default_tags: None,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.endpoint_port = port;
        self
    }

    pub fn with_max_packet_size(mut self, bytes: usize) -> Self {
        self.max_packet_size = bytes;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_default_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.endpoint_host.is_empty() {
            return Err(StatsError::invalid_config("endpoint_host"));
        }
        if self.max_packet_size == 0 {
            return Err(StatsError::invalid_config("max_packet_size"));
        }
        Ok(())
    }
}

fn default_endpoint_port() -> u16 {
    8125
}
fn default_max_packet_size() -> usize {
    DEFAULT_MAX_PACKET_SIZE
}
