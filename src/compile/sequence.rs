//! Consecutive composition of a container's children.

use crate::compile::compose::{
    GraphBuilder, Streams, apply_time_padding, base_canvas, container_span, finish_audio,
};
use crate::compile::layout::Placer;
use crate::compile::process::RenderProcess;
use crate::compile::timing::{explicit_secs, secs_to_millis};
use crate::content::model::WrapContent;
use crate::foundation::error::{VsmlError, VsmlResult};
use crate::graph::ops::{EofPolicy, PadAmount, PadFill, PadSide};
use crate::style::color::Color;

/// Place children one after another in time.
///
/// Each child starts at the running end of its predecessors plus its own `time_margin_start`;
/// the running end then advances past the child and its `time_margin_end`. Spatial placement is
/// the same as for parallel children.
#[tracing::instrument(skip_all, fields(element = %wrap.label(), children = children.len()))]
pub(crate) fn compose_sequence(
    b: GraphBuilder<'_>,
    wrap: &WrapContent,
    children: Vec<RenderProcess>,
    size: (i32, i32),
) -> VsmlResult<RenderProcess> {
    let style = &wrap.style;
    let fps = b.fps();

    let mut starts = Vec::with_capacity(children.len());
    let mut cursor = Some(0.0_f64);
    for (i, (child, node)) in children.iter().zip(&wrap.children).enumerate() {
        let Some(at) = cursor else {
            return Err(VsmlError::IndeterminateDuration {
                element: wrap.children[i - 1].label(),
            });
        };
        let start = at + explicit_secs(&child.style.time_margin_start, fps);
        tracing::trace!(child = %node.label(), start, "scheduled");
        starts.push(start);
        cursor = child
            .duration
            .map(|d| start + d + explicit_secs(&child.style.time_margin_end, fps));
    }

    let content = if children.is_empty() { None } else { cursor };
    let span = container_span(style, fps, content);

    let mut video = wrap.has_video.then(|| base_canvas(b, style, size, span));
    let mut bus = None;
    let mut placer = Placer::new(style, size);

    for ((child, node), start) in children.iter().zip(&wrap.children).zip(starts) {
        if let Some(mut v) = child.video {
            let Some(base) = video else {
                return Err(VsmlError::validation(format!(
                    "child '{}' has video but the container declares none",
                    node.label()
                )));
            };
            if start > 0.0 {
                v = b.pad(
                    v,
                    PadSide::Start,
                    PadAmount::Seconds(start),
                    PadFill::Color(Color::TRANSPARENT),
                );
            }
            let at = placer.place(&child.style);
            video = Some(b.overlay(base, v, at, EofPolicy::Pass));
        }

        if let Some(a) = child.audio {
            let a = b.delay(a, secs_to_millis(start));
            bus = Some(b.mix(bus, a));
        }
    }

    let audio = finish_audio(b, bus, style, span);
    let out = apply_time_padding(
        b,
        style,
        Streams {
            video,
            audio,
            duration: span,
        },
    );
    tracing::debug!(duration = ?out.duration, "composed sequence");
    RenderProcess::new(&wrap.label(), out.video, out.audio, style.clone(), out.duration)
}

#[cfg(test)]
#[path = "../../tests/unit/compile/sequence.rs"]
mod tests;
