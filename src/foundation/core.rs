use std::path::{Path, PathBuf};

use crate::foundation::error::{VsmlError, VsmlResult};

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> VsmlResult<Self> {
        if den == 0 {
            return Err(VsmlError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(VsmlError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Validate a value that was built without [`Fps::new`] (e.g. deserialized).
    pub fn validate(self) -> VsmlResult<()> {
        Self::new(self.num, self.den).map(|_| ())
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert a (possibly fractional) frame count to seconds.
    pub fn frames_to_secs(self, frames: f64) -> f64 {
        frames * self.frame_duration_secs()
    }
}

/// Output resolution of the whole document, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Resolution {
    /// Validate that both dimensions are non-zero.
    pub fn validate(self) -> VsmlResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(VsmlError::validation("resolution width/height must be > 0"));
        }
        Ok(())
    }
}

/// Resolve `src` against `base` unless it is already absolute.
///
/// Pure path arithmetic; the file system is never touched.
pub(crate) fn join_relative(base: &Path, src: &str) -> PathBuf {
    let p = Path::new(src);
    if p.is_absolute() || base.as_os_str().is_empty() {
        p.to_path_buf()
    } else {
        base.join(p)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
