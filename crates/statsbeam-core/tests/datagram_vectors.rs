//! Datagram encoder vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use statsbeam_core::protocol::{
    encode_datagram, MetricKind, MetricSample, Tags, Value, DEFAULT_MAX_PACKET_SIZE,
};

use vector_loader::TestVector;

fn load(name: &str) -> TestVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

#[test]
fn datagram_vectors() {
    let files = [
        "counter_plain.json",
        "gauge_float_sampled.json",
        "timing_merged_tags.json",
        "set_string_default_tags.json",
        "histogram_empty_tags.json",
        "bad_name_colon.json",
        "bad_tag_comma.json",
        "empty_name.json",
        "too_large.json",
    ];

    for f in files {
        let v = load(f);
        let call: Option<Vec<&str>> = v
            .sample
            .call_tags
            .as_ref()
            .map(|c| c.iter().map(String::as_str).collect());
        let tags = match (v.sample.default_tags.as_deref(), call.as_deref()) {
            (None, None) => None,
            (Some(d), None) => Some(Tags::Defaults(d)),
            (None, Some(c)) => Some(Tags::Call(c)),
            (Some(defaults), Some(call)) => Some(Tags::Merged { defaults, call }),
        };
        let sample = MetricSample {
            name: &v.sample.name,
            kind: v.sample.kind(),
            value: v.sample.value(),
            sample_rate: v.sample.sample_rate,
            tags,
        };
        let max = v.max_packet_size.unwrap_or(DEFAULT_MAX_PACKET_SIZE);
        let res = encode_datagram(&sample, max);

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.code().as_str(), err.code, "vector={}", v.description);
            continue;
        }

        let out = res.expect("expected ok datagram");
        let ex = v.expect.expect("missing expect");
        assert_eq!(std::str::from_utf8(&out).unwrap(), ex, "vector={}", v.description);
    }
}

#[test]
fn non_finite_float_is_rejected() {
    let sample = MetricSample {
        name: "latency",
        kind: MetricKind::Gauge,
        value: Value::from(f64::NAN),
        sample_rate: 1.0,
        tags: None,
    };
    let e = encode_datagram(&sample, DEFAULT_MAX_PACKET_SIZE).expect_err("nan must fail");
    assert_eq!(e.code().as_str(), "BAD_REQUEST");
}

#[test]
fn negative_counter_keeps_sign() {
    let sample = MetricSample {
        name: "jobs.pending",
        kind: MetricKind::Counting,
        value: Value::from(-1),
        sample_rate: 1.0,
        tags: None,
    };
    let out = encode_datagram(&sample, DEFAULT_MAX_PACKET_SIZE).unwrap();
    assert_eq!(&out[..], b"jobs.pending:-1|c");
}

#[test]
fn encode_into_leaves_buffer_untouched_on_error() {
    use bytes::BytesMut;
    use statsbeam_core::protocol::datagram::encode_into;

    let mut buf = BytesMut::from(&b"prev\n"[..]);
    let call = ["ok", "bad|tag"];
    let sample = MetricSample {
        name: "name",
        kind: MetricKind::Gauge,
        value: Value::from(1),
        sample_rate: 1.0,
        tags: Some(Tags::Call(&call)),
    };
    assert!(encode_into(&sample, &mut buf).is_err());
    assert_eq!(&buf[..], b"prev\n");
}
