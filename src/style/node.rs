use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{VsmlError, VsmlResult};
use crate::style::color::Color;
use crate::style::direction::DirectionInfo;
use crate::style::graphic::GraphicValue;
use crate::style::time::TimeValue;

/// Temporal composition mode of a container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Order {
    /// Children play one after another.
    Sequence,
    /// Children play simultaneously.
    #[default]
    Parallel,
}

/// Spatial composition mode of a container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LayerMode {
    /// Flowed: children advance a cursor and collapse adjacent margins.
    Single,
    /// Stacked: children overlap, later ones on top.
    #[default]
    Multi,
}

/// Channel layout of an audio stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AudioSystem {
    /// One channel.
    Monaural,
    /// Two channels.
    Stereo,
}

macro_rules! keyword_enum {
    ($ty:ty, $err:expr, { $($lit:literal => $variant:path),+ $(,)? }) => {
        impl FromStr for $ty {
            type Err = VsmlError;

            fn from_str(s: &str) -> VsmlResult<Self> {
                match s.trim() {
                    $($lit => Ok($variant),)+
                    other => Err($err(other.to_owned())),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let s = match self {
                    $($variant => $lit,)+
                };
                f.write_str(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = VsmlError;

            fn try_from(s: String) -> VsmlResult<Self> {
                s.parse()
            }
        }

        impl From<$ty> for String {
            fn from(v: $ty) -> Self {
                v.to_string()
            }
        }
    };
}

keyword_enum!(Order, VsmlError::UnsupportedOrder, {
    "sequence" => Order::Sequence,
    "parallel" => Order::Parallel,
});

keyword_enum!(LayerMode, VsmlError::UnsupportedLayerMode, {
    "single" => LayerMode::Single,
    "multi" => LayerMode::Multi,
});

keyword_enum!(AudioSystem, |s: String| VsmlError::value_parse("audio system", s), {
    "monaural" => AudioSystem::Monaural,
    "stereo" => AudioSystem::Stereo,
});

/// Four box edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Edges {
    /// Top edge.
    pub top: GraphicValue,
    /// Left edge.
    pub left: GraphicValue,
    /// Right edge.
    pub right: GraphicValue,
    /// Bottom edge.
    pub bottom: GraphicValue,
}

impl Default for Edges {
    fn default() -> Self {
        Self::uniform(GraphicValue::ZERO)
    }
}

impl Edges {
    /// Same value on every edge.
    pub fn uniform(v: GraphicValue) -> Self {
        Self {
            top: v,
            left: v,
            right: v,
            bottom: v,
        }
    }

    /// `true` when any edge resolves to a non-zero pixel amount.
    pub fn any_nonzero(&self) -> bool {
        [self.top, self.left, self.right, self.bottom]
            .iter()
            .any(|e| e.to_pixel(0) != 0)
    }
}

/// Text-only attributes. Absent fields fall back to the backend defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontStyle {
    /// Font family name.
    pub family: Option<String>,
    /// Font size.
    pub size: Option<GraphicValue>,
    /// Glyph color.
    pub color: Option<Color>,
    /// Outline color.
    pub border_color: Option<Color>,
    /// Outline width in pixels.
    pub border_width: Option<u32>,
}

/// Fully resolved style of one content node.
///
/// Graphic values are either concrete pixels or intentionally `auto`; time values are either
/// explicit frames/seconds or intentionally `fit`/`source`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleNode {
    pub width: GraphicValue,
    pub height: GraphicValue,
    pub padding: Edges,
    pub margin: Edges,
    pub background_color: Option<Color>,
    pub font: FontStyle,

    pub object_length: TimeValue,
    pub time_padding_start: TimeValue,
    pub time_padding_end: TimeValue,
    pub time_margin_start: TimeValue,
    pub time_margin_end: TimeValue,
    /// Native media length, filled in by the loader when it could be probed.
    pub source_object_length: Option<TimeValue>,

    pub source_audio_system: Option<AudioSystem>,
    pub audio_system: Option<AudioSystem>,
    pub audio_volume: f64,

    pub order: Order,
    pub direction: DirectionInfo,
    pub layer_mode: LayerMode,
}

impl Default for StyleNode {
    fn default() -> Self {
        Self {
            width: GraphicValue::AUTO,
            height: GraphicValue::AUTO,
            padding: Edges::default(),
            margin: Edges::default(),
            background_color: None,
            font: FontStyle::default(),
            object_length: TimeValue::FIT,
            time_padding_start: TimeValue::ZERO,
            time_padding_end: TimeValue::ZERO,
            time_margin_start: TimeValue::ZERO,
            time_margin_end: TimeValue::ZERO,
            source_object_length: None,
            source_audio_system: None,
            audio_system: None,
            audio_volume: 1.0,
            order: Order::default(),
            direction: DirectionInfo::default(),
            layer_mode: LayerMode::default(),
        }
    }
}

impl StyleNode {
    /// Width plus left and right padding, in pixels.
    pub fn width_with_padding(&self) -> i32 {
        self.width_with_padding_or(0)
    }

    /// Height plus top and bottom padding, in pixels.
    pub fn height_with_padding(&self) -> i32 {
        self.height_with_padding_or(0)
    }

    /// `(width, height)` with padding.
    pub fn size_with_padding(&self) -> (i32, i32) {
        (self.width_with_padding(), self.height_with_padding())
    }

    pub(crate) fn width_with_padding_or(&self, default: i32) -> i32 {
        self.width.to_pixel(default) + self.padding.left.to_pixel(0) + self.padding.right.to_pixel(0)
    }

    pub(crate) fn height_with_padding_or(&self, default: i32) -> i32 {
        self.height.to_pixel(default)
            + self.padding.top.to_pixel(0)
            + self.padding.bottom.to_pixel(0)
    }

    /// Background fill, transparent when unset.
    pub fn background_or_transparent(&self) -> Color {
        self.background_color.unwrap_or(Color::TRANSPARENT)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/node.rs"]
mod tests;
