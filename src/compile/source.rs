//! Leaf compilation: ingestion, spatial fit, audio shaping, temporal shaping.

use crate::compile::compose::{GraphBuilder, Streams, apply_time_padding};
use crate::compile::process::RenderProcess;
use crate::compile::timing::{end_point, explicit_secs, warn_unresolved};
use crate::content::model::{SourceContent, SourceKind};
use crate::foundation::error::VsmlResult;
use crate::graph::ops::{
    EofPolicy, Op, OpId, PadAmount, PadFill, PadSide, StreamKind, TextOptions, TimePoint,
};
use crate::style::node::StyleNode;

#[tracing::instrument(skip_all, fields(element = %src.label(), kind = %src.kind))]
pub(crate) fn compile_source(
    b: GraphBuilder<'_>,
    src: &SourceContent,
) -> VsmlResult<RenderProcess> {
    let style = &src.style;
    let label = src.label();
    warn_unresolved(&label, "object_length", &style.object_length);
    warn_unresolved(&label, "time_padding_start", &style.time_padding_start);
    warn_unresolved(&label, "time_padding_end", &style.time_padding_end);

    let (mut video, mut audio) = ingest(b, src);

    if src.kind != SourceKind::Text {
        video = video.map(|v| fit_box(b, style, v));
    }
    audio = audio.map(|a| shape_audio(b, style, a));

    let (video, audio) = shape_length(b, src.kind, style, video, audio);
    let duration = native_duration(b, style);
    let out = apply_time_padding(
        b,
        style,
        Streams {
            video,
            audio,
            duration,
        },
    );

    tracing::debug!(duration = ?out.duration, "compiled source");
    RenderProcess::new(&label, out.video, out.audio, style.clone(), out.duration)
}

fn ingest(b: GraphBuilder<'_>, src: &SourceContent) -> (Option<OpId>, Option<OpId>) {
    let style = &src.style;
    let input = |looped: bool| {
        b.push(Op::Input {
            path: b.ctx.resolve_path(&src.src),
            kind: src.kind,
            looped,
        })
    };
    let select = |input: OpId, stream: StreamKind| b.push(Op::Select { input, stream });

    match src.kind {
        SourceKind::Image => {
            let v = select(input(true), StreamKind::Video);
            let v = b.push(Op::SetSampleAspect {
                src: v,
                num: 1,
                den: 1,
            });
            (Some(v), None)
        }
        SourceKind::Video => {
            let i = input(false);
            let v = select(i, StreamKind::Video);
            let a = src.has_audio.then(|| select(i, StreamKind::Audio));
            (Some(v), a)
        }
        SourceKind::Audio => (None, Some(select(input(false), StreamKind::Audio))),
        SourceKind::Text => {
            let canvas = b.solid(style.size_with_padding(), style.background_or_transparent());
            let v = b.push(Op::DrawText {
                canvas,
                text: src.src.clone(),
                x: style.padding.left.to_pixel(0),
                y: style.padding.top.to_pixel(0),
                options: text_options(style),
            });
            (Some(v), None)
        }
    }
}

fn text_options(style: &StyleNode) -> TextOptions {
    let font = &style.font;
    TextOptions {
        font: font.family.clone(),
        size: font.size.filter(|s| s.is_explicit()).map(|s| s.value()),
        color: font.color,
        border_color: font.border_color,
        border_width: font.border_width,
    }
}

/// Resize to the declared box, then inset it by its padding over the background.
fn fit_box(b: GraphBuilder<'_>, style: &StyleNode, v: OpId) -> OpId {
    let px = |g: crate::style::graphic::GraphicValue| {
        g.is_explicit().then(|| g.value().max(0) as u32)
    };
    let (width, height) = (px(style.width), px(style.height));
    let mut v = v;
    if width.is_some() || height.is_some() {
        v = b.push(Op::Scale {
            src: v,
            width,
            height,
        });
    }

    if style.padding.any_nonzero() {
        let canvas = b.solid(style.size_with_padding(), style.background_or_transparent());
        let at = (
            style.padding.left.to_pixel(0),
            style.padding.top.to_pixel(0),
        );
        v = b.overlay(canvas, v, at, EofPolicy::EndAll);
    }
    v
}

fn shape_audio(b: GraphBuilder<'_>, style: &StyleNode, a: OpId) -> OpId {
    let mut a = a;
    if let Some(to) = style.audio_system
        && style.source_audio_system != Some(to)
    {
        a = b.push(Op::SetChannelLayout {
            src: a,
            from: style.source_audio_system,
            to,
        });
    }
    if style.audio_volume != 1.0 {
        a = b.push(Op::ScaleVolume {
            src: a,
            factor: style.audio_volume,
        });
    }
    a
}

/// Cut or extend both streams to an explicit `object_length`.
fn shape_length(
    b: GraphBuilder<'_>,
    kind: SourceKind,
    style: &StyleNode,
    video: Option<OpId>,
    audio: Option<OpId>,
) -> (Option<OpId>, Option<OpId>) {
    let Some(end) = end_point(&style.object_length) else {
        return (video, audio);
    };
    let secs = explicit_secs(&style.object_length, b.fps());

    let video = video.map(|v| {
        // Images loop and text canvases are unbounded; only decoded video can run short.
        let v = if kind == SourceKind::Video {
            b.pad(v, PadSide::End, PadAmount::Open, PadFill::Clone)
        } else {
            v
        };
        b.trim_end(v, end)
    });
    let audio = audio.map(|a| {
        let a = b.pad(a, PadSide::End, PadAmount::Open, PadFill::Silence);
        b.trim_end(a, TimePoint::Second(secs))
    });
    (video, audio)
}

/// Span before time padding: the explicit length, else the probed media length.
fn native_duration(b: GraphBuilder<'_>, style: &StyleNode) -> Option<f64> {
    if style.object_length.is_explicit() {
        return Some(explicit_secs(&style.object_length, b.fps()));
    }
    style
        .source_object_length
        .filter(|t| t.is_explicit())
        .map(|t| explicit_secs(&t, b.fps()))
}

#[cfg(test)]
#[path = "../../tests/unit/compile/source.rs"]
mod tests;
