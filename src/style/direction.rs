use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{VsmlError, VsmlResult};

/// Main axis of a flowed layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal flow.
    Row,
    /// Vertical flow.
    Column,
}

/// Flow axis plus reversal, parsed from `row|column|row-reverse|column-reverse`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DirectionInfo {
    /// Main axis.
    pub axis: Axis,
    /// Flow starts from the far edge.
    pub reversed: bool,
}

impl DirectionInfo {
    /// `row`.
    pub const ROW: Self = Self {
        axis: Axis::Row,
        reversed: false,
    };

    /// `true` when the main axis is horizontal.
    pub fn is_row(&self) -> bool {
        self.axis == Axis::Row
    }
}

impl Default for DirectionInfo {
    fn default() -> Self {
        Self::ROW
    }
}

impl FromStr for DirectionInfo {
    type Err = VsmlError;

    fn from_str(s: &str) -> VsmlResult<Self> {
        let (axis, reversed) = match s.trim() {
            "row" => (Axis::Row, false),
            "column" => (Axis::Column, false),
            "row-reverse" => (Axis::Row, true),
            "column-reverse" => (Axis::Column, true),
            other => return Err(VsmlError::value_parse("direction", other)),
        };
        Ok(Self { axis, reversed })
    }
}

impl fmt::Display for DirectionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis = match self.axis {
            Axis::Row => "row",
            Axis::Column => "column",
        };
        if self.reversed {
            write!(f, "{axis}-reverse")
        } else {
            f.write_str(axis)
        }
    }
}

impl TryFrom<String> for DirectionInfo {
    type Error = VsmlError;

    fn try_from(s: String) -> VsmlResult<Self> {
        s.parse()
    }
}

impl From<DirectionInfo> for String {
    fn from(d: DirectionInfo) -> Self {
        d.to_string()
    }
}
