//! Operation-building primitives shared by the source compiler and both compositors.

use crate::compile::context::RenderContext;
use crate::compile::timing::{end_point, explicit_secs, millis, pad_amount};
use crate::foundation::core::{Fps, Resolution};
use crate::graph::arena::OpArena;
use crate::graph::ops::{EofPolicy, Op, OpId, PadAmount, PadFill, PadSide, TimePoint};
use crate::style::color::Color;
use crate::style::node::StyleNode;
use crate::style::time::TimeUnit;

/// Allocation handle passed down the tree: the render context plus the shared arena.
#[derive(Clone, Copy, Debug)]
pub(crate) struct GraphBuilder<'a> {
    pub(crate) ctx: &'a RenderContext,
    arena: &'a OpArena,
}

impl<'a> GraphBuilder<'a> {
    pub(crate) fn new(ctx: &'a RenderContext, arena: &'a OpArena) -> Self {
        Self { ctx, arena }
    }

    pub(crate) fn fps(&self) -> Fps {
        self.ctx.fps
    }

    pub(crate) fn push(&self, op: Op) -> OpId {
        self.arena.push(op)
    }

    pub(crate) fn solid(&self, (width, height): (i32, i32), color: Color) -> OpId {
        self.push(Op::SolidColor {
            width: width.max(0) as u32,
            height: height.max(0) as u32,
            color,
        })
    }

    pub(crate) fn pad(&self, src: OpId, side: PadSide, amount: PadAmount, fill: PadFill) -> OpId {
        self.push(Op::PadTime {
            src,
            side,
            amount,
            fill,
        })
    }

    pub(crate) fn trim_end(&self, src: OpId, end: TimePoint) -> OpId {
        self.push(Op::Trim {
            src,
            start: None,
            end: Some(end),
        })
    }

    pub(crate) fn overlay(
        &self,
        base: OpId,
        overlay: OpId,
        (x, y): (i32, i32),
        eof: EofPolicy,
    ) -> OpId {
        self.push(Op::Overlay {
            base,
            overlay,
            x,
            y,
            eof,
        })
    }

    /// Delay `src` by whole milliseconds; a zero delay emits nothing.
    pub(crate) fn delay(&self, src: OpId, millis: u64) -> OpId {
        if millis == 0 {
            return src;
        }
        self.push(Op::DelayAudio { src, millis })
    }

    /// Mix `next` into the running bus; the first stream seeds it.
    pub(crate) fn mix(&self, bus: Option<OpId>, next: OpId) -> OpId {
        match bus {
            None => next,
            Some(a) => self.push(Op::MixAudio { a, b: next }),
        }
    }
}

/// Padded box of a container. The root falls back to the document resolution for any side
/// that is not concrete pixels.
pub(crate) fn container_box(style: &StyleNode, fallback: Option<Resolution>) -> (i32, i32) {
    match fallback {
        Some(res) => (
            style.width_with_padding_or(res.width as i32),
            style.height_with_padding_or(res.height as i32),
        ),
        None => style.size_with_padding(),
    }
}

/// Known span of a container's output before its own time padding.
///
/// An explicit length wins; otherwise `content` is used.
pub(crate) fn container_span(style: &StyleNode, fps: Fps, content: Option<f64>) -> Option<f64> {
    if style.object_length.is_explicit() {
        Some(explicit_secs(&style.object_length, fps))
    } else {
        content
    }
}

/// Background canvas of a container, trimmed to its length when one is known.
///
/// An explicit frame length ends on the frame boundary after the last frame, so the final
/// frame is included.
pub(crate) fn base_canvas(
    b: GraphBuilder<'_>,
    style: &StyleNode,
    size: (i32, i32),
    span: Option<f64>,
) -> OpId {
    let canvas = b.solid(size, style.background_or_transparent());
    let ol = &style.object_length;
    let end = match ol.unit() {
        TimeUnit::Frame => Some(TimePoint::Frame(ol.value().round().max(0.0) as u64 + 1)),
        TimeUnit::Second => end_point(ol),
        TimeUnit::Percent | TimeUnit::Fit | TimeUnit::Source => span.map(TimePoint::Second),
    };
    match end {
        Some(end) => b.trim_end(canvas, end),
        None => canvas,
    }
}

/// Pad the mixed audio bus to the container length, or open-ended when it is unknown.
pub(crate) fn finish_audio(
    b: GraphBuilder<'_>,
    bus: Option<OpId>,
    style: &StyleNode,
    span: Option<f64>,
) -> Option<OpId> {
    let bus = bus?;
    let out = match span {
        Some(secs) => {
            let padded = b.pad(
                bus,
                PadSide::End,
                PadAmount::UntilSeconds(secs),
                PadFill::Silence,
            );
            if style.object_length.is_explicit() {
                b.trim_end(padded, TimePoint::Second(secs))
            } else {
                padded
            }
        }
        None => b.pad(bus, PadSide::End, PadAmount::Open, PadFill::Silence),
    };
    Some(out)
}

/// Streams and span of a node before its own time padding.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Streams {
    pub(crate) video: Option<OpId>,
    pub(crate) audio: Option<OpId>,
    pub(crate) duration: Option<f64>,
}

/// Prepend `time_padding_start`, then append `time_padding_end` when the node has an explicit
/// length. Video pads are filled with the background color, audio pads with silence.
pub(crate) fn apply_time_padding(b: GraphBuilder<'_>, style: &StyleNode, s: Streams) -> Streams {
    let fps = b.fps();
    let fill = PadFill::Color(style.background_or_transparent());
    let Streams {
        mut video,
        mut audio,
        mut duration,
    } = s;

    if let Some(amount) = pad_amount(&style.time_padding_start) {
        video = video.map(|v| b.pad(v, PadSide::Start, amount, fill));
        audio = audio.map(|a| b.delay(a, millis(&style.time_padding_start, fps)));
        duration = duration.map(|d| d + explicit_secs(&style.time_padding_start, fps));
    }

    if style.object_length.is_explicit()
        && let Some(amount) = pad_amount(&style.time_padding_end)
    {
        let secs = explicit_secs(&style.time_padding_end, fps);
        video = video.map(|v| b.pad(v, PadSide::End, amount, fill));
        audio = audio.map(|a| b.pad(a, PadSide::End, PadAmount::Seconds(secs), PadFill::Silence));
        duration = duration.map(|d| d + secs);
    }

    Streams {
        video,
        audio,
        duration,
    }
}

/// Largest value, `None` when empty or when any entry is unknown.
pub(crate) fn max_known(spans: impl IntoIterator<Item = Option<f64>>) -> Option<f64> {
    let mut out: Option<f64> = None;
    for s in spans {
        let s = s?;
        out = Some(out.map_or(s, |o| o.max(s)));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/compile/compose.rs"]
mod tests;
