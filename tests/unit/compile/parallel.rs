use super::*;
use crate::compile::context::RenderContext;
use crate::compile::source::compile_source;
use crate::content::model::{ContentNode, SourceContent, SourceKind};
use crate::foundation::core::{Fps, Resolution};
use crate::graph::arena::OpArena;
use crate::graph::ops::{Op, OpId, TimePoint};
use crate::style::graphic::GraphicValue;
use crate::style::node::{Edges, LayerMode, StyleNode};
use crate::style::time::TimeValue;

fn ctx() -> RenderContext {
    RenderContext::new(
        Fps::new(30, 1).unwrap(),
        Resolution {
            width: 640,
            height: 360,
        },
    )
}

fn clip(name: &str, secs: f64, audio: bool) -> ContentNode {
    let style = StyleNode {
        width: GraphicValue::px(100),
        height: GraphicValue::px(100),
        source_object_length: Some(TimeValue::seconds(secs)),
        ..StyleNode::default()
    };
    SourceContent::new(SourceKind::Video, name, style)
        .with_audio(audio)
        .into()
}

fn compose(wrap: &WrapContent) -> (VsmlResult<RenderProcess>, Vec<Op>) {
    let ctx = ctx();
    let arena = OpArena::new();
    let b = GraphBuilder::new(&ctx, &arena);
    let children = wrap
        .children
        .iter()
        .map(|c| match c {
            ContentNode::Source(s) => compile_source(b, s).unwrap(),
            ContentNode::Wrap(_) => unreachable!("leaf-only fixture"),
        })
        .collect();
    let out = compose_parallel(b, wrap, children, wrap.style.size_with_padding());
    (out, arena.into_ops())
}

fn overlays(ops: &[Op]) -> Vec<(i32, i32)> {
    ops.iter()
        .filter_map(|op| match op {
            Op::Overlay { x, y, eof, .. } => {
                assert_eq!(*eof, EofPolicy::Pass);
                Some((*x, *y))
            }
            _ => None,
        })
        .collect()
}

#[test]
fn explicit_length_cuts_canvas_and_audio() {
    let style = StyleNode {
        object_length: TimeValue::seconds(5.0),
        ..StyleNode::default()
    };
    let wrap = WrapContent::new(vec![clip("a", 3.0, true), clip("b", 7.0, false)], style);
    let (p, ops) = compose(&wrap);
    let p = p.unwrap();

    assert_eq!(p.duration, Some(5.0));
    assert!(ops.iter().any(|op| matches!(
        op,
        Op::Trim { end: Some(TimePoint::Second(s)), .. } if *s == 5.0
    )));
    assert!(matches!(
        &ops[p.audio.unwrap().0 as usize],
        Op::Trim { end: Some(TimePoint::Second(s)), .. } if *s == 5.0
    ));
}

#[test]
fn fit_length_follows_longest_child() {
    let wrap = WrapContent::new(
        vec![clip("a", 4.0, false), clip("b", 2.5, false)],
        StyleNode::default(),
    );
    let (p, ops) = compose(&wrap);
    assert_eq!(p.unwrap().duration, Some(4.0));
    assert!(ops.iter().any(|op| matches!(
        op,
        Op::Trim { end: Some(TimePoint::Second(s)), .. } if *s == 4.0
    )));
}

#[test]
fn margin_start_shifts_and_extends_span() {
    let mut late = clip("late", 2.0, true);
    if let ContentNode::Source(s) = &mut late {
        s.style.time_margin_start = TimeValue::seconds(1.5);
    }
    let wrap = WrapContent::new(vec![clip("a", 3.0, false), late], StyleNode::default());
    let (p, ops) = compose(&wrap);
    assert_eq!(p.unwrap().duration, Some(3.5));
    assert!(ops.iter().any(|op| matches!(op, Op::DelayAudio { millis: 1500, .. })));
    assert!(ops.iter().any(|op| matches!(
        op,
        Op::PadTime { side: PadSide::Start, amount: PadAmount::Seconds(s), .. } if *s == 1.5
    )));
}

#[test]
fn unknown_child_length_leaves_container_open_and_frozen() {
    let image: ContentNode =
        SourceContent::new(SourceKind::Image, "still.png", StyleNode::default()).into();
    let wrap = WrapContent::new(vec![image, clip("a", 3.0, false)], StyleNode::default());
    let (p, ops) = compose(&wrap);
    assert_eq!(p.unwrap().duration, None);
    assert!(ops.iter().any(|op| matches!(
        op,
        Op::PadTime {
            amount: PadAmount::Open,
            fill: PadFill::Clone,
            ..
        }
    )));
    assert!(!ops.iter().any(|op| matches!(op, Op::Trim { .. })));
}

#[test]
fn single_mode_flows_children() {
    let mut b = clip("b", 1.0, false);
    if let ContentNode::Source(s) = &mut b {
        s.style.margin.left = GraphicValue::px(4);
    }
    let mut a = clip("a", 1.0, false);
    if let ContentNode::Source(s) = &mut a {
        s.style.margin.right = GraphicValue::px(10);
    }
    let style = StyleNode {
        layer_mode: LayerMode::Single,
        padding: Edges::uniform(GraphicValue::px(2)),
        ..StyleNode::default()
    };
    let (_, ops) = compose(&WrapContent::new(vec![a, b], style));
    assert_eq!(overlays(&ops), vec![(0, 2), (110, 2)]);
}

#[test]
fn multi_mode_stacks_later_children_on_top() {
    let wrap = WrapContent::new(
        vec![clip("under", 1.0, false), clip("over", 1.0, false)],
        StyleNode::default(),
    );
    let (p, ops) = compose(&wrap);
    let p = p.unwrap();
    assert_eq!(overlays(&ops), vec![(0, 0), (0, 0)]);

    let Op::Overlay { base, overlay, .. } = &ops[p.video.unwrap().0 as usize] else {
        panic!("expected overlay");
    };
    assert!(matches!(&ops[base.0 as usize], Op::Overlay { .. }));
    let mut src = *overlay;
    while let Some(inner) = ops[src.0 as usize].inputs().first().copied() {
        src = inner;
    }
    assert!(matches!(&ops[src.0 as usize], Op::Input { path, .. } if path.ends_with("over")));
}

#[test]
fn audio_children_mix_in_document_order() {
    let wrap = WrapContent::new(
        vec![clip("a", 1.0, true), clip("b", 1.0, true), clip("c", 1.0, true)],
        StyleNode::default(),
    );
    let (p, ops) = compose(&wrap);
    let p = p.unwrap();
    let mixes: Vec<(OpId, OpId)> = ops
        .iter()
        .filter_map(|op| match op {
            Op::MixAudio { a, b } => Some((*a, *b)),
            _ => None,
        })
        .collect();
    assert_eq!(mixes.len(), 2);
    assert!(matches!(&ops[mixes[1].0.0 as usize], Op::MixAudio { .. }));
    assert!(matches!(
        &ops[p.audio.unwrap().0 as usize],
        Op::PadTime { amount: PadAmount::UntilSeconds(s), .. } if *s == 1.0
    ));
}

#[test]
fn video_child_without_container_video_is_rejected() {
    let mut wrap = WrapContent::new(vec![clip("a", 1.0, false)], StyleNode::default());
    wrap.has_video = false;
    let (p, _) = compose(&wrap);
    assert!(matches!(p, Err(VsmlError::Validation(_))));
}

fn with_margins(mut node: ContentNode, start: f64, end: f64) -> ContentNode {
    if let ContentNode::Source(s) = &mut node {
        s.style.time_margin_start = TimeValue::seconds(start);
        s.style.time_margin_end = TimeValue::seconds(end);
    }
    node
}

fn end_pads(ops: &[Op]) -> Vec<(PadAmount, PadFill)> {
    ops.iter()
        .filter_map(|op| match op {
            Op::PadTime {
                side: PadSide::End,
                amount,
                fill,
                ..
            } => Some((*amount, *fill)),
            _ => None,
        })
        .collect()
}

#[test]
fn margin_end_pads_both_streams_under_explicit_parent() {
    let style = StyleNode {
        object_length: TimeValue::seconds(6.0),
        background_color: Some(crate::style::color::Color::rgb(255, 0, 0)),
        ..StyleNode::default()
    };
    let child = with_margins(clip("a", 3.0, true), 1.0, 0.5);
    let (p, ops) = compose(&WrapContent::new(vec![child], style));
    assert_eq!(p.unwrap().duration, Some(6.0));

    let pads = end_pads(&ops);
    assert!(pads.contains(&(
        PadAmount::Seconds(0.5),
        PadFill::Color(crate::style::color::Color::rgb(255, 0, 0))
    )));
    assert!(pads.contains(&(PadAmount::Seconds(0.5), PadFill::Silence)));
    assert!(!pads.iter().any(|(amount, _)| *amount == PadAmount::Open));
}

#[test]
fn margin_end_is_ignored_under_fit_parent() {
    let child = with_margins(
        SourceContent::new(SourceKind::Video, "open.mp4", StyleNode::default())
            .with_audio(true)
            .into(),
        1.0,
        0.5,
    );
    let (p, ops) = compose(&WrapContent::new(vec![child], StyleNode::default()));
    assert_eq!(p.unwrap().duration, None);

    let pads = end_pads(&ops);
    assert!(!pads.iter().any(|(amount, _)| matches!(amount, PadAmount::Seconds(_))));
    assert!(pads.contains(&(PadAmount::Open, PadFill::Clone)));
    assert!(!pads.iter().any(|(_, fill)| matches!(fill, PadFill::Color(_))));
}
