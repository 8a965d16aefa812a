//! DogStatsD datagram encoding (panic-free).
//!
//! Layout: `<name>:<value>|<type>[|@<rate>][|#<tag>,<tag>...]`
//!
//! Encoding rules:
//! - `@rate` is omitted when the rate is >= 1.
//! - `#tags` is omitted when tags are absent or empty.
//! - Reserved separators inside a name, tag or string value are rejected
//!   rather than escaped; the collector has no escaping rules.

use std::fmt::Write as _;

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{Result, StatsError};
use crate::protocol::sample::{MetricSample, Value};

/// Default UDP payload limit, safe for typical MTUs.
pub const DEFAULT_MAX_PACKET_SIZE: usize = 512;

const NAME_RESERVED: &[char] = &[':', '|', '\n'];
const TAG_RESERVED: &[char] = &['|', ',', '\n'];
const VALUE_RESERVED: &[char] = &['|', '\n'];

/// Encode one sample into a single datagram no larger than `max_len`.
pub fn encode_datagram(sample: &MetricSample<'_>, max_len: usize) -> Result<Bytes> {
    let mut buf = BytesMut::with_capacity(64);
    encode_into(sample, &mut buf)?;

    if buf.len() > max_len {
        return Err(StatsError::PayloadTooLarge {
            len: buf.len(),
            max: max_len,
        });
    }
    Ok(buf.freeze())
}

/// Append the encoded sample to `buf`.
///
/// Input is validated before anything is written, so `buf` is untouched on error.
pub fn encode_into(sample: &MetricSample<'_>, buf: &mut BytesMut) -> Result<()> {
    if sample.name.is_empty() {
        return Err(StatsError::BadRequest("empty stat name".into()));
    }
    if sample.name.contains(NAME_RESERVED) {
        return Err(StatsError::BadRequest(format!(
            "reserved character in stat name: {:?}",
            sample.name
        )));
    }
    check_value(&sample.value)?;

    let tags = sample.tags.filter(|t| !t.is_empty());
    if let Some(bad) = tags.and_then(|t| t.iter().find(|tag| tag.contains(TAG_RESERVED))) {
        return Err(StatsError::BadRequest(format!(
            "reserved character in tag: {bad:?}"
        )));
    }

    buf.put_slice(sample.name.as_bytes());
    buf.put_u8(b':');
    write_fmt(buf, format_args!("{}", sample.value))?;
    buf.put_u8(b'|');
    buf.put_slice(sample.kind.as_str().as_bytes());

    if sample.sample_rate < 1.0 {
        write_fmt(buf, format_args!("|@{}", sample.sample_rate))?;
    }

    if let Some(tags) = tags {
        buf.put_slice(b"|#");
        for (i, tag) in tags.iter().enumerate() {
            if i > 0 {
                buf.put_u8(b',');
            }
            buf.put_slice(tag.as_bytes());
        }
    }

    Ok(())
}

fn check_value(value: &Value) -> Result<()> {
    match value {
        Value::Float(v) if !v.is_finite() => Err(StatsError::BadRequest(format!(
            "non-finite value: {v}"
        ))),
        Value::Str(s) if s.contains(VALUE_RESERVED) => Err(StatsError::BadRequest(format!(
            "reserved character in value: {s:?}"
        ))),
        _ => Ok(()),
    }
}

fn write_fmt(buf: &mut BytesMut, args: std::fmt::Arguments<'_>) -> Result<()> {
    buf.write_fmt(args)
        .map_err(|e| StatsError::BadRequest(format!("format failed: {e}")))
}
