use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use crate::foundation::error::{VsmlError, VsmlResult};

/// Unit of a [`GraphicValue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GraphicUnit {
    /// Sized by content.
    Auto,
    /// Relative to the parent box.
    Percent,
    /// Concrete pixels.
    Pixel,
    /// Relative to the document width.
    ResWidth,
    /// Relative to the document height.
    ResHeight,
    /// Relative to the smaller document dimension.
    ResMin,
    /// Relative to the larger document dimension.
    ResMax,
}

impl GraphicUnit {
    fn suffix(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Percent => "%",
            Self::Pixel => "px",
            Self::ResWidth => "rw",
            Self::ResHeight => "rh",
            Self::ResMin => "rmin",
            Self::ResMax => "rmax",
        }
    }
}

/// A spatial quantity with its unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GraphicValue {
    value: i32,
    unit: GraphicUnit,
}

impl GraphicValue {
    /// `auto`, carrying the sentinel value `-1`.
    pub const AUTO: Self = Self {
        value: -1,
        unit: GraphicUnit::Auto,
    };

    /// Zero pixels.
    pub const ZERO: Self = Self {
        value: 0,
        unit: GraphicUnit::Pixel,
    };

    /// Build a value in pixels.
    pub fn px(value: i32) -> Self {
        Self {
            value,
            unit: GraphicUnit::Pixel,
        }
    }

    /// Build a value with an explicit unit.
    pub fn new(value: i32, unit: GraphicUnit) -> Self {
        if unit == GraphicUnit::Auto {
            return Self::AUTO;
        }
        Self { value, unit }
    }

    /// Raw numeric value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Unit fixed at construction.
    pub fn unit(&self) -> GraphicUnit {
        self.unit
    }

    /// Stored value when the unit is `Pixel`, `default` for anything not yet resolved.
    pub fn to_pixel(&self, default: i32) -> i32 {
        match self.unit {
            GraphicUnit::Pixel => self.value,
            _ => default,
        }
    }

    /// `true` for a strictly positive `Pixel` or `Percent` value.
    pub fn is_positive(&self) -> bool {
        matches!(self.unit, GraphicUnit::Pixel | GraphicUnit::Percent) && self.value > 0
    }

    /// `true` for concrete pixels.
    pub fn is_explicit(&self) -> bool {
        self.unit == GraphicUnit::Pixel
    }

    /// Compare the pixel interpretations (unresolved units count as `0`).
    pub fn cmp_px(&self, other: &Self) -> Ordering {
        self.to_pixel(0).cmp(&other.to_pixel(0))
    }
}

impl Default for GraphicValue {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for GraphicValue {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::px(self.to_pixel(0) + rhs.to_pixel(0))
    }
}

impl Sub for GraphicValue {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::px(self.to_pixel(0) - rhs.to_pixel(0))
    }
}

impl Neg for GraphicValue {
    type Output = Self;

    fn neg(self) -> Self {
        Self::px(-self.to_pixel(0))
    }
}

impl FromStr for GraphicValue {
    type Err = VsmlError;

    fn from_str(s: &str) -> VsmlResult<Self> {
        let s = s.trim();
        match s {
            "auto" => return Ok(Self::AUTO),
            "0" => return Ok(Self::ZERO),
            _ => {}
        }

        const SUFFIXES: [(&str, GraphicUnit); 6] = [
            ("px", GraphicUnit::Pixel),
            ("rw", GraphicUnit::ResWidth),
            ("rh", GraphicUnit::ResHeight),
            ("rmin", GraphicUnit::ResMin),
            ("rmax", GraphicUnit::ResMax),
            ("%", GraphicUnit::Percent),
        ];

        let err = || VsmlError::value_parse("graphic", s);
        let (num, unit) = SUFFIXES
            .iter()
            .find_map(|(suffix, unit)| s.strip_suffix(suffix).map(|n| (n, *unit)))
            .ok_or_else(err)?;
        let value = num.parse::<i32>().map_err(|_| err())?;
        Ok(Self { value, unit })
    }
}

impl fmt::Display for GraphicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            GraphicUnit::Auto => f.write_str(self.unit.suffix()),
            _ => write!(f, "{}{}", self.value, self.unit.suffix()),
        }
    }
}

impl TryFrom<String> for GraphicValue {
    type Error = VsmlError;

    fn try_from(s: String) -> VsmlResult<Self> {
        s.parse()
    }
}

impl From<GraphicValue> for String {
    fn from(v: GraphicValue) -> Self {
        v.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/graphic.rs"]
mod tests;
