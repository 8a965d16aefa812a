//! Metric samples as handed from the facade to a transport.
//!
//! Everything here borrows from the call site where it can: a sample lives for
//! the duration of one emission call and is never stored.

use std::fmt;
use std::time::Duration;

/// Metric type; decides how the collector aggregates a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Counting,
    Gauge,
    Histogram,
    Set,
    Timing,
}

impl MetricKind {
    /// DogStatsD type suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Counting => "c",
            MetricKind::Gauge => "g",
            MetricKind::Histogram => "h",
            MetricKind::Set => "s",
            MetricKind::Timing => "ms",
        }
    }
}

/// Sample payload.
///
/// Facade operations are generic over `impl Into<Value>`, so any primitive
/// number, string or `Duration` can be passed directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::UInt(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Str(v) => f.write_str(v),
        }
    }
}

macro_rules! impl_from {
    ($variant:ident, $target:ty: $($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v as $target)
                }
            }
        )+
    };
}

impl_from!(Int, i64: i8, i16, i32, i64, isize);
impl_from!(UInt, u64: u8, u16, u32, u64, usize);
impl_from!(Float, f64: f32, f64);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

/// Durations are reported in whole milliseconds.
impl From<Duration> for Value {
    fn from(v: Duration) -> Self {
        Value::UInt(u64::try_from(v.as_millis()).unwrap_or(u64::MAX))
    }
}

/// Tag set attached to one sample.
///
/// A borrowed view: configured default tags and call-site tags are never
/// copied into a new buffer just to be iterated once by the encoder.
/// Iteration order is always defaults first, then call-site tags.
#[derive(Debug, Clone, Copy)]
pub enum Tags<'a> {
    /// Only configured default tags.
    Defaults(&'a [String]),
    /// Only call-site tags.
    Call(&'a [&'a str]),
    /// Both, defaults first. Duplicates are kept.
    Merged {
        defaults: &'a [String],
        call: &'a [&'a str],
    },
}

impl<'a> Tags<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + 'a {
        let (defaults, call): (&'a [String], &'a [&'a str]) = match *self {
            Tags::Defaults(d) => (d, &[]),
            Tags::Call(c) => (&[], c),
            Tags::Merged { defaults, call } => (defaults, call),
        };
        defaults.iter().map(String::as_str).chain(call.iter().copied())
    }

    pub fn len(&self) -> usize {
        match *self {
            Tags::Defaults(d) => d.len(),
            Tags::Call(c) => c.len(),
            Tags::Merged { defaults, call } => defaults.len() + call.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materialise the tags as a new owned sequence.
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_owned).collect()
    }
}

/// One emission, fully composed (namespaced name, merged tags).
#[derive(Debug, Clone)]
pub struct MetricSample<'a> {
    pub name: &'a str,
    pub kind: MetricKind,
    pub value: Value,
    /// Probability in (0, 1] that the sample is transmitted.
    pub sample_rate: f64,
    pub tags: Option<Tags<'a>>,
}
