//! Non-blocking UDP transport speaking the DogStatsD datagram format.

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

use statsbeam_core::error::{Result, StatsError};
use statsbeam_core::protocol::{encode_datagram, MetricSample};

use super::MetricsTransport;

/// One datagram per sample, no buffering, no acknowledgment.
#[derive(Debug)]
pub struct UdpTransport {
    socket: UdpSocket,
    endpoint: SocketAddr,
    max_packet_size: usize,
}

impl UdpTransport {
    /// Resolve `host:port` and bind a connected, non-blocking socket to it.
    ///
    /// Resolution happens once here; a collector that later moves to a new
    /// address needs a reconfiguration.
    pub fn new(host: &str, port: u16, max_packet_size: usize) -> Result<Self> {
        let endpoint = (host, port)
            .to_socket_addrs()
            .map_err(|e| StatsError::Transport(format!("resolve {host}:{port} failed: {e}")))?
            .next()
            .ok_or_else(|| StatsError::Transport(format!("no address for {host}:{port}")))?;

        let local: SocketAddr = if endpoint.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(local)
            .map_err(|e| StatsError::Transport(format!("bind {local} failed: {e}")))?;
        socket
            .connect(endpoint)
            .map_err(|e| StatsError::Transport(format!("connect {endpoint} failed: {e}")))?;
        socket
            .set_nonblocking(true)
            .map_err(|e| StatsError::Transport(format!("set_nonblocking failed: {e}")))?;

        Ok(Self {
            socket,
            endpoint,
            max_packet_size,
        })
    }

    pub fn endpoint(&self) -> SocketAddr {
        self.endpoint
    }

    pub fn max_packet_size(&self) -> usize {
        self.max_packet_size
    }
}

impl MetricsTransport for UdpTransport {
    fn send(&self, sample: &MetricSample<'_>) {
        if !sampled_in(sample.sample_rate) {
            tracing::trace!(stat = %sample.name, rate = sample.sample_rate, "sampled out");
            return;
        }

        let datagram = match encode_datagram(sample, self.max_packet_size) {
            Ok(d) => d,
            Err(e) => {
                tracing::debug!(stat = %sample.name, code = e.code().as_str(), error = %e, "metric dropped");
                return;
            }
        };

        // Collector down, buffer full, ICMP refusal: all dropped.
        if let Err(e) = self.socket.send(&datagram) {
            tracing::debug!(endpoint = %self.endpoint, error = %e, "datagram send failed");
        }
    }
}

fn sampled_in(rate: f64) -> bool {
    rate >= 1.0 || rand::random::<f64>() < rate
}
