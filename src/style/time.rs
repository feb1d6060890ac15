use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::foundation::core::Fps;
use crate::foundation::error::{VsmlError, VsmlResult};

/// Unit of a [`TimeValue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Relative to the parent's duration; resolved before compilation.
    Percent,
    /// Frame count at the document frame rate.
    Frame,
    /// Seconds.
    Second,
    /// Driven by the composed content.
    Fit,
    /// Driven by the native length of the underlying media.
    Source,
}

impl TimeUnit {
    fn suffix(self) -> &'static str {
        match self {
            Self::Percent => "%",
            Self::Frame => "f",
            Self::Second => "s",
            Self::Fit => "fit",
            Self::Source => "source",
        }
    }
}

/// A temporal quantity with its unit.
///
/// `Fit` and `Source` carry the sentinel value `-1`: they are policies, not quantities.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeValue {
    value: f64,
    unit: TimeUnit,
}

impl TimeValue {
    /// Zero frames, the value of the literal `"0"`.
    pub const ZERO: Self = Self {
        value: 0.0,
        unit: TimeUnit::Frame,
    };

    /// Content-driven length.
    pub const FIT: Self = Self {
        value: -1.0,
        unit: TimeUnit::Fit,
    };

    /// Native-media-driven length.
    pub const SOURCE: Self = Self {
        value: -1.0,
        unit: TimeUnit::Source,
    };

    /// Seconds.
    pub fn seconds(value: f64) -> Self {
        Self {
            value,
            unit: TimeUnit::Second,
        }
    }

    /// Frames at the document frame rate.
    pub fn frames(value: f64) -> Self {
        Self {
            value,
            unit: TimeUnit::Frame,
        }
    }

    /// Percent of the parent's duration.
    pub fn percent(value: f64) -> Self {
        Self {
            value,
            unit: TimeUnit::Percent,
        }
    }

    /// Raw numeric value (`-1` for `Fit`/`Source`).
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Unit fixed at construction.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Seconds for `Second`/`Frame` units, `default` otherwise.
    pub fn to_seconds(&self, fps: Fps, default: f64) -> f64 {
        match self.unit {
            TimeUnit::Second => self.value,
            TimeUnit::Frame => fps.frames_to_secs(self.value),
            TimeUnit::Percent | TimeUnit::Fit | TimeUnit::Source => default,
        }
    }

    /// `true` for a strictly positive `Second`, `Frame` or `Percent` value.
    pub fn is_positive(&self) -> bool {
        match self.unit {
            TimeUnit::Second | TimeUnit::Frame | TimeUnit::Percent => self.value > 0.0,
            TimeUnit::Fit | TimeUnit::Source => false,
        }
    }

    /// `true` when the value has a context-independent meaning (`Second` or `Frame`).
    pub fn is_explicit(&self) -> bool {
        matches!(self.unit, TimeUnit::Second | TimeUnit::Frame)
    }

    /// `true` for a content-driven length.
    pub fn is_fit(&self) -> bool {
        self.unit == TimeUnit::Fit
    }

    /// Compare through seconds at `fps`.
    pub fn cmp_at(&self, other: &Self, fps: Fps) -> Ordering {
        self.to_seconds(fps, 0.0)
            .total_cmp(&other.to_seconds(fps, 0.0))
    }

    /// Sum through seconds at `fps`; the result is always in seconds.
    ///
    /// Two frame counts are renormalized too, which is lossy when the frame duration is not
    /// exactly representable.
    pub fn add_at(&self, other: &Self, fps: Fps) -> Self {
        Self::seconds(self.to_seconds(fps, 0.0) + other.to_seconds(fps, 0.0))
    }
}

impl Default for TimeValue {
    fn default() -> Self {
        Self::ZERO
    }
}

impl FromStr for TimeValue {
    type Err = VsmlError;

    fn from_str(s: &str) -> VsmlResult<Self> {
        let s = s.trim();
        match s {
            "fit" => return Ok(Self::FIT),
            "source" => return Ok(Self::SOURCE),
            "0" => return Ok(Self::ZERO),
            _ => {}
        }

        let err = || VsmlError::value_parse("time", s);
        let (num, unit) = if let Some(n) = s.strip_suffix('s') {
            (n, TimeUnit::Second)
        } else if let Some(n) = s.strip_suffix('f') {
            (n, TimeUnit::Frame)
        } else if let Some(n) = s.strip_suffix('%') {
            (n, TimeUnit::Percent)
        } else {
            return Err(err());
        };

        let value = num.parse::<f64>().map_err(|_| err())?;
        if !value.is_finite() {
            return Err(err());
        }
        Ok(Self { value, unit })
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            TimeUnit::Fit | TimeUnit::Source => f.write_str(self.unit.suffix()),
            _ => write!(f, "{}{}", self.value, self.unit.suffix()),
        }
    }
}

impl TryFrom<String> for TimeValue {
    type Error = VsmlError;

    fn try_from(s: String) -> VsmlResult<Self> {
        s.parse()
    }
}

impl From<TimeValue> for String {
    fn from(v: TimeValue) -> Self {
        v.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/time.rs"]
mod tests;
