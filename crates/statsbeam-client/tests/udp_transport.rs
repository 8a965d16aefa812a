//! UDP transport against a local listener.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::io::ErrorKind;
use std::net::UdpSocket;
use std::time::Duration;

use statsbeam_client::{Metrics, MetricsConfig, UdpTransport, DEFAULT_SAMPLE_RATE};

fn listener() -> (UdpSocket, u16) {
    let sock = UdpSocket::bind("127.0.0.1:0").unwrap();
    sock.set_read_timeout(Some(Duration::from_millis(300))).unwrap();
    let port = sock.local_addr().unwrap().port();
    (sock, port)
}

fn recv(sock: &UdpSocket) -> Option<String> {
    let mut buf = [0u8; 2048];
    match sock.recv(&mut buf) {
        Ok(n) => Some(String::from_utf8(buf[..n].to_vec()).unwrap()),
        Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => None,
        Err(e) => panic!("recv failed: {e}"),
    }
}

fn init_logs() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn configured_facade_sends_datagrams() {
    init_logs();
    let (sock, port) = listener();
    let metrics = Metrics::new();
    metrics
        .configure(
            &MetricsConfig::new("127.0.0.1")
                .with_port(port)
                .with_prefix("app")
                .with_default_tags(["env:test"]),
        )
        .expect("configure");
    assert!(metrics.is_enabled());

    metrics.increment("requests", DEFAULT_SAMPLE_RATE, Some(&["route:x"]));
    assert_eq!(recv(&sock).as_deref(), Some("app.requests:1|c|#env:test,route:x"));

    metrics.gauge("load", 0.5, DEFAULT_SAMPLE_RATE, None);
    assert_eq!(recv(&sock).as_deref(), Some("app.load:0.5|g|#env:test"));
}

#[test]
fn sampled_rate_is_encoded_and_zero_rate_drops() {
    init_logs();
    let (sock, port) = listener();
    let metrics = Metrics::new();
    metrics
        .configure(&MetricsConfig::new("127.0.0.1").with_port(port))
        .expect("configure");

    metrics.counter("never", 1, 0.0, None);
    assert_eq!(recv(&sock), None);

    // Draws are in [0, 1), so a rate just below 1 almost always sends; retry
    // a few times to keep the test deterministic in practice.
    let mut got = None;
    for _ in 0..20 {
        metrics.counter("mostly", 1, 0.999, None);
        got = recv(&sock);
        if got.is_some() {
            break;
        }
    }
    assert_eq!(got.as_deref(), Some("mostly:1|c|@0.999"));
}

#[test]
fn unencodable_samples_are_dropped_silently() {
    init_logs();
    let (sock, port) = listener();
    let metrics = Metrics::new();
    metrics
        .configure(
            &MetricsConfig::new("127.0.0.1")
                .with_port(port)
                .with_max_packet_size(24),
        )
        .expect("configure");

    metrics.increment("a.very.long.metric.name.over.limit", DEFAULT_SAMPLE_RATE, None);
    metrics.increment("bad|name", DEFAULT_SAMPLE_RATE, None);
    metrics.increment("", DEFAULT_SAMPLE_RATE, None);
    metrics.increment("ok", DEFAULT_SAMPLE_RATE, None);

    assert_eq!(recv(&sock).as_deref(), Some("ok:1|c"));
    assert_eq!(recv(&sock), None);
}

#[test]
fn send_without_listener_does_not_fail() {
    init_logs();
    let (sock, port) = listener();
    drop(sock);

    let metrics = Metrics::new();
    metrics
        .configure(&MetricsConfig::new("127.0.0.1").with_port(port))
        .expect("configure");
    for _ in 0..5 {
        metrics.increment("into.the.void", DEFAULT_SAMPLE_RATE, None);
    }
}

#[test]
fn transport_reports_endpoint() {
    let t = UdpTransport::new("127.0.0.1", 8125, 512).expect("transport");
    assert_eq!(t.endpoint().to_string(), "127.0.0.1:8125");
    assert_eq!(t.max_packet_size(), 512);
}

#[test]
fn unresolvable_host_fails_configure() {
    let metrics = Metrics::new();
    let err = metrics
        .configure(&MetricsConfig::new("host.invalid"))
        .expect_err("must fail");
    assert_eq!(err.code().as_str(), "TRANSPORT");
    assert!(!metrics.is_enabled());
}
