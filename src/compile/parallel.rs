//! Simultaneous composition of a container's children.

use crate::compile::compose::{
    GraphBuilder, Streams, apply_time_padding, base_canvas, container_span, finish_audio,
    max_known,
};
use crate::compile::layout::Placer;
use crate::compile::process::RenderProcess;
use crate::compile::timing::{explicit_secs, millis, pad_amount};
use crate::content::model::WrapContent;
use crate::foundation::error::{VsmlError, VsmlResult};
use crate::graph::ops::{EofPolicy, PadAmount, PadFill, PadSide};

/// Overlay every child onto the container canvas and mix their audio, all starting together.
///
/// With an explicit container length each child is padded on both sides by its time margins and
/// the canvas cuts everything at that length. Without one, a content-driven child is frozen on
/// its last frame so that the canvas, trimmed to the longest child when that is known, decides
/// the end.
#[tracing::instrument(skip_all, fields(element = %wrap.label(), children = children.len()))]
pub(crate) fn compose_parallel(
    b: GraphBuilder<'_>,
    wrap: &WrapContent,
    children: Vec<RenderProcess>,
    size: (i32, i32),
) -> VsmlResult<RenderProcess> {
    let style = &wrap.style;
    let fps = b.fps();
    let explicit = style.object_length.is_explicit();
    let fill = PadFill::Color(style.background_or_transparent());

    let content = max_known(children.iter().map(|c| {
        c.duration
            .map(|d| explicit_secs(&c.style.time_margin_start, fps) + d)
    }));
    let span = container_span(style, fps, content);

    let mut video = wrap.has_video.then(|| base_canvas(b, style, size, span));
    let mut bus = None;
    let mut placer = Placer::new(style, size);

    for (child, node) in children.iter().zip(&wrap.children) {
        let cs = &child.style;

        if let Some(mut v) = child.video {
            let Some(base) = video else {
                return Err(VsmlError::validation(format!(
                    "child '{}' has video but the container declares none",
                    node.label()
                )));
            };
            if let Some(amount) = pad_amount(&cs.time_margin_start) {
                v = b.pad(v, PadSide::Start, amount, fill);
            }
            if explicit {
                if let Some(amount) = pad_amount(&cs.time_margin_end) {
                    v = b.pad(v, PadSide::End, amount, fill);
                }
            } else if cs.object_length.is_fit() && cs.source_object_length.is_none() {
                v = b.pad(v, PadSide::End, PadAmount::Open, PadFill::Clone);
            }
            let at = placer.place(cs);
            video = Some(b.overlay(base, v, at, EofPolicy::Pass));
        }

        if let Some(mut a) = child.audio {
            a = b.delay(a, millis(&cs.time_margin_start, fps));
            if explicit && pad_amount(&cs.time_margin_end).is_some() {
                let secs = explicit_secs(&cs.time_margin_end, fps);
                a = b.pad(a, PadSide::End, PadAmount::Seconds(secs), PadFill::Silence);
            }
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
    tracing::debug!(duration = ?out.duration, "composed parallel");
    RenderProcess::new(&wrap.label(), out.video, out.audio, style.clone(), out.duration)
}

#[cfg(test)]
#[path = "../../tests/unit/compile/parallel.rs"]
mod tests;
