use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use smallvec::{SmallVec, smallvec};

use crate::content::model::SourceKind;
use crate::style::color::Color;
use crate::style::node::AudioSystem;

/// Handle of one operation in an [`OpArena`](crate::graph::arena::OpArena) or a finished graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct OpId(pub u32);

impl fmt::Display for OpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "O{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamKind {
    Video,
    Audio,
}

/// A point on a stream's timeline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimePoint {
    Frame(u64),
    Second(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PadSide {
    Start,
    End,
}

/// How much to pad.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PadAmount {
    Frames(u64),
    Seconds(f64),
    /// Pad until the stream is this long in total.
    UntilSeconds(f64),
    /// Pad without bound; a downstream trim or overlay decides the end.
    Open,
}

/// What fills a padded segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PadFill {
    /// Solid color (video).
    Color(Color),
    /// Repeat the edge frame (video).
    Clone,
    /// Silence (audio).
    Silence,
}

/// Behavior of an overlay once its shorter input ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EofPolicy {
    /// Stop the output when either input ends.
    EndAll,
    /// Keep the base running after the overlay ends.
    Pass,
}

/// Optional text attributes, each mapped to one backend option.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TextOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
}

/// Abstract media operation. Inputs reference earlier operations by [`OpId`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    /// Open a media file. `looped` repeats it without bound.
    Input {
        path: PathBuf,
        kind: SourceKind,
        looped: bool,
    },
    /// Pick one stream of a multi-stream input.
    Select { input: OpId, stream: StreamKind },
    Trim {
        src: OpId,
        start: Option<TimePoint>,
        end: Option<TimePoint>,
    },
    PadTime {
        src: OpId,
        side: PadSide,
        amount: PadAmount,
        fill: PadFill,
    },
    Overlay {
        base: OpId,
        overlay: OpId,
        x: i32,
        y: i32,
        eof: EofPolicy,
    },
    DelayAudio { src: OpId, millis: u64 },
    MixAudio { a: OpId, b: OpId },
    SetSampleAspect { src: OpId, num: u32, den: u32 },
    DrawText {
        canvas: OpId,
        text: String,
        x: i32,
        y: i32,
        options: TextOptions,
    },
    SolidColor { width: u32, height: u32, color: Color },
    Scale {
        src: OpId,
        width: Option<u32>,
        height: Option<u32>,
    },
    ScaleVolume { src: OpId, factor: f64 },
    SetChannelLayout {
        src: OpId,
        from: Option<AudioSystem>,
        to: AudioSystem,
    },
}

impl Op {
    /// Operations this one reads from, in argument order.
    pub fn inputs(&self) -> SmallVec<[OpId; 2]> {
        match self {
            Self::Input { .. } | Self::SolidColor { .. } => SmallVec::new(),
            Self::Select { input, .. } => smallvec![*input],
            Self::Trim { src, .. }
            | Self::PadTime { src, .. }
            | Self::DelayAudio { src, .. }
            | Self::SetSampleAspect { src, .. }
            | Self::Scale { src, .. }
            | Self::ScaleVolume { src, .. }
            | Self::SetChannelLayout { src, .. } => smallvec![*src],
            Self::Overlay { base, overlay, .. } => smallvec![*base, *overlay],
            Self::MixAudio { a, b } => smallvec![*a, *b],
            Self::DrawText { canvas, .. } => smallvec![*canvas],
        }
    }

    /// Rewrite every input handle through `f`.
    pub fn map_inputs(&self, mut f: impl FnMut(OpId) -> OpId) -> Self {
        let mut op = self.clone();
        match &mut op {
            Self::Input { .. } | Self::SolidColor { .. } => {}
            Self::Select { input, .. } => *input = f(*input),
            Self::Trim { src, .. }
            | Self::PadTime { src, .. }
            | Self::DelayAudio { src, .. }
            | Self::SetSampleAspect { src, .. }
            | Self::Scale { src, .. }
            | Self::ScaleVolume { src, .. }
            | Self::SetChannelLayout { src, .. } => *src = f(*src),
            Self::Overlay { base, overlay, .. } => {
                *base = f(*base);
                *overlay = f(*overlay);
            }
            Self::MixAudio { a, b } => {
                *a = f(*a);
                *b = f(*b);
            }
            Self::DrawText { canvas, .. } => *canvas = f(*canvas),
        }
        op
    }
}

fn opt<T: fmt::Display>(v: &Option<T>) -> String {
    match v {
        Some(v) => v.to_string(),
        None => "-".to_owned(),
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frame(n) => write!(f, "{n}f"),
            Self::Second(s) => write!(f, "{s}s"),
        }
    }
}

impl fmt::Display for PadAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frames(n) => write!(f, "{n}f"),
            Self::Seconds(s) => write!(f, "{s}s"),
            Self::UntilSeconds(s) => write!(f, "until {s}s"),
            Self::Open => f.write_str("open"),
        }
    }
}

impl fmt::Display for PadFill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(c) => write!(f, "{c}"),
            Self::Clone => f.write_str("clone"),
            Self::Silence => f.write_str("silence"),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input { path, kind, looped } => {
                write!(f, "input {kind} {:?}", path.display().to_string())?;
                if *looped {
                    f.write_str(" loop")?;
                }
                Ok(())
            }
            Self::Select { input, stream } => write!(f, "select {input} {stream:?}"),
            Self::Trim { src, start, end } => {
                write!(f, "trim {src} start={} end={}", opt(start), opt(end))
            }
            Self::PadTime {
                src,
                side,
                amount,
                fill,
            } => write!(f, "pad {src} {side:?} {amount} fill={fill}"),
            Self::Overlay {
                base,
                overlay,
                x,
                y,
                eof,
            } => write!(f, "overlay {base} {overlay} at ({x},{y}) eof={eof:?}"),
            Self::DelayAudio { src, millis } => write!(f, "adelay {src} {millis}ms"),
            Self::MixAudio { a, b } => write!(f, "amix {a} {b}"),
            Self::SetSampleAspect { src, num, den } => write!(f, "setsar {src} {num}/{den}"),
            Self::DrawText {
                canvas,
                text,
                x,
                y,
                options,
            } => write!(
                f,
                "drawtext {canvas} {text:?} at ({x},{y}) font={} size={} color={} border={}/{}",
                opt(&options.font),
                opt(&options.size),
                opt(&options.color),
                opt(&options.border_color),
                opt(&options.border_width),
            ),
            Self::SolidColor {
                width,
                height,
                color,
            } => write!(f, "color {width}x{height} {color}"),
            Self::Scale { src, width, height } => {
                write!(f, "scale {src} {}x{}", opt(width), opt(height))
            }
            Self::ScaleVolume { src, factor } => write!(f, "volume {src} {factor}"),
            Self::SetChannelLayout { src, from, to } => {
                write!(f, "channels {src} {}->{to}", opt(from))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/ops.rs"]
mod tests;
