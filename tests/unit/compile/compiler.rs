use super::*;
use crate::content::model::{SourceContent, SourceKind, WrapContent};
use crate::foundation::core::{Fps, Resolution};
use crate::style::node::StyleNode;
use crate::style::time::TimeValue;

fn ctx() -> RenderContext {
    RenderContext::new(
        Fps::new(25, 1).unwrap(),
        Resolution {
            width: 320,
            height: 180,
        },
    )
}

fn broken_sequence(id: &str) -> ContentNode {
    let open = SourceContent::new(SourceKind::Image, "still.png", StyleNode::default())
        .with_id(format!("{id}-open"));
    let next = SourceContent::new(SourceKind::Image, "next.png", StyleNode::default());
    let style = StyleNode {
        order: Order::Sequence,
        ..StyleNode::default()
    };
    WrapContent::new(vec![open.into(), next.into()], style)
        .with_id(id)
        .into()
}

#[test]
fn zero_threads_is_rejected() {
    let opts = CompileOpts {
        parallel: true,
        threads: Some(0),
    };
    let root: ContentNode =
        SourceContent::new(SourceKind::Image, "a.png", StyleNode::default()).into();
    let err = Compiler::new(ctx(), opts).compile(&root).unwrap_err();
    assert!(matches!(err, VsmlError::Validation(_)));
}

#[test]
fn first_failure_in_document_order_wins() {
    let root: ContentNode = WrapContent::new(
        vec![broken_sequence("first"), broken_sequence("second")],
        StyleNode::default(),
    )
    .into();

    for parallel in [false, true] {
        let opts = CompileOpts {
            parallel,
            threads: Some(4),
        };
        let err = Compiler::new(ctx(), opts).compile(&root).unwrap_err();
        assert!(
            matches!(&err, VsmlError::IndeterminateDuration { element } if element == "first-open"),
            "parallel={parallel}: {err}"
        );
    }
}

#[test]
fn invalid_context_and_empty_wrap_fail() {
    let mut bad = ctx();
    bad.fps = Fps { num: 25, den: 0 };
    let root: ContentNode =
        SourceContent::new(SourceKind::Image, "a.png", StyleNode::default()).into();
    assert!(Compiler::new(bad, CompileOpts::default()).compile(&root).is_err());

    let empty: ContentNode = WrapContent::new(Vec::new(), StyleNode::default())
        .with_id("hollow")
        .into();
    let err = Compiler::new(ctx(), CompileOpts::default())
        .compile(&empty)
        .unwrap_err();
    assert!(matches!(err, VsmlError::EmptyProcess { element } if element == "hollow"));
}

#[test]
fn root_canvas_uses_resolution_when_unsized() {
    let child = SourceContent::new(
        SourceKind::Image,
        "a.png",
        StyleNode {
            object_length: TimeValue::seconds(1.0),
            ..StyleNode::default()
        },
    );
    let root: ContentNode = WrapContent::new(vec![child.into()], StyleNode::default()).into();
    let graph = Compiler::new(ctx(), CompileOpts::default())
        .compile(&root)
        .unwrap();
    assert!(graph.ops.iter().any(|op| matches!(
        op,
        crate::graph::ops::Op::SolidColor {
            width: 320,
            height: 180,
            ..
        }
    )));
    assert_eq!(graph.duration, Some(1.0));
}
