//! Conversions from resolved time values to operation arguments.

use crate::foundation::core::Fps;
use crate::graph::ops::{PadAmount, TimePoint};
use crate::style::time::{TimeUnit, TimeValue};

/// Fixed pad length for an explicit, positive value.
pub(crate) fn pad_amount(t: &TimeValue) -> Option<PadAmount> {
    if !t.is_positive() {
        return None;
    }
    match t.unit() {
        TimeUnit::Frame => Some(PadAmount::Frames(t.value().round() as u64)),
        TimeUnit::Second => Some(PadAmount::Seconds(t.value())),
        TimeUnit::Percent | TimeUnit::Fit | TimeUnit::Source => None,
    }
}

/// Trim point marking the end of an explicit length.
pub(crate) fn end_point(t: &TimeValue) -> Option<TimePoint> {
    match t.unit() {
        TimeUnit::Frame => Some(TimePoint::Frame(t.value().round().max(0.0) as u64)),
        TimeUnit::Second => Some(TimePoint::Second(t.value().max(0.0))),
        TimeUnit::Percent | TimeUnit::Fit | TimeUnit::Source => None,
    }
}

/// Whole milliseconds of an explicit value, rounded; `0` for anything else.
pub(crate) fn millis(t: &TimeValue, fps: Fps) -> u64 {
    if !t.is_explicit() {
        return 0;
    }
    secs_to_millis(t.to_seconds(fps, 0.0))
}

/// Nearest whole millisecond of a span, so summed offsets land on the same tick as their video.
pub(crate) fn secs_to_millis(secs: f64) -> u64 {
    (secs * 1000.0).round().max(0.0) as u64
}

/// Seconds of an explicit value, `0` for anything else.
pub(crate) fn explicit_secs(t: &TimeValue, fps: Fps) -> f64 {
    if t.is_explicit() {
        t.to_seconds(fps, 0.0).max(0.0)
    } else {
        0.0
    }
}

/// Log values the style resolver should have turned into frames or seconds.
pub(crate) fn warn_unresolved(element: &str, field: &'static str, t: &TimeValue) {
    if t.unit() == TimeUnit::Percent {
        tracing::warn!(element, field, value = %t, "unresolved percent time treated as zero");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/timing.rs"]
mod tests;
