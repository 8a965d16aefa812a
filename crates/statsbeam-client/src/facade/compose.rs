//! Per-call stat name and tag composition.

use std::borrow::Cow;

use statsbeam_core::protocol::Tags;

/// `<prefix>.<stat>`, or `stat` untouched when there is no (or an empty) prefix.
pub fn build_namespaced_name<'a>(prefix: Option<&str>, stat: &'a str) -> Cow<'a, str> {
    match prefix {
        Some(p) if !p.is_empty() => Cow::Owned(format!("{p}.{stat}")),
        _ => Cow::Borrowed(stat),
    }
}

/// Merge configured default tags with call-site tags.
///
/// Absent on both sides stays absent (distinct from an empty tag list). A
/// single present side is passed through as-is. With both present, defaults
/// come first and call-site tags last, so "last tag wins" conventions
/// downstream favour the call site. Nothing is deduplicated or sorted.
pub fn merge_tags<'a>(
    defaults: Option<&'a [String]>,
    call: Option<&'a [&'a str]>,
) -> Option<Tags<'a>> {
    match (defaults, call) {
        (None, None) => None,
        (Some(defaults), None) => Some(Tags::Defaults(defaults)),
        (None, Some(call)) => Some(Tags::Call(call)),
        (Some(defaults), Some(call)) => Some(Tags::Merged { defaults, call }),
    }
}
