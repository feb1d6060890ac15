use super::*;

#[test]
fn size_with_padding_adds_opposite_edges() {
    let style = StyleNode {
        width: GraphicValue::px(100),
        height: GraphicValue::px(50),
        padding: Edges {
            top: GraphicValue::px(1),
            left: GraphicValue::px(2),
            right: GraphicValue::px(3),
            bottom: GraphicValue::px(4),
        },
        ..StyleNode::default()
    };
    assert_eq!(style.size_with_padding(), (105, 55));
}

#[test]
fn auto_size_counts_only_padding() {
    let style = StyleNode {
        padding: Edges::uniform(GraphicValue::px(5)),
        ..StyleNode::default()
    };
    assert_eq!(style.size_with_padding(), (10, 10));
    assert_eq!(style.width_with_padding_or(640), 650);
}

#[test]
fn keyword_enums_reject_unknown_literals() {
    assert_eq!("sequence".parse::<Order>().unwrap(), Order::Sequence);
    assert_eq!("multi".parse::<LayerMode>().unwrap(), LayerMode::Multi);
    assert_eq!("stereo".parse::<AudioSystem>().unwrap(), AudioSystem::Stereo);

    assert!(matches!(
        "shuffle".parse::<Order>(),
        Err(VsmlError::UnsupportedOrder(s)) if s == "shuffle"
    ));
    assert!(matches!(
        "grid".parse::<LayerMode>(),
        Err(VsmlError::UnsupportedLayerMode(s)) if s == "grid"
    ));
    assert!("5.1".parse::<AudioSystem>().is_err());
}

#[test]
fn style_deserializes_from_literals_with_defaults() {
    let style: StyleNode = serde_json::from_value(serde_json::json!({
        "width": "320px",
        "padding": { "left": "8px" },
        "background_color": "#000",
        "object_length": "90f",
        "layer_mode": "single",
        "direction": "column"
    }))
    .unwrap();

    assert_eq!(style.width, GraphicValue::px(320));
    assert_eq!(style.height, GraphicValue::AUTO);
    assert_eq!(style.padding.left, GraphicValue::px(8));
    assert_eq!(style.padding.right, GraphicValue::ZERO);
    assert_eq!(style.background_color, Some(Color::rgb(0, 0, 0)));
    assert_eq!(style.object_length, TimeValue::frames(90.0));
    assert_eq!(style.time_margin_start, TimeValue::ZERO);
    assert_eq!(style.layer_mode, LayerMode::Single);
    assert!(!style.direction.is_row());
    assert_eq!(style.audio_volume, 1.0);
}

#[test]
fn style_rejects_bad_literal() {
    let err = serde_json::from_value::<StyleNode>(serde_json::json!({ "width": "3em" }))
        .unwrap_err()
        .to_string();
    assert!(err.contains("3em"), "{err}");
}

#[test]
fn transparent_background_by_default() {
    assert_eq!(
        StyleNode::default().background_or_transparent(),
        Color::TRANSPARENT
    );
}

#[test]
fn default_edges_are_zero_pixels() {
    let edges = Edges::default();
    assert_eq!(edges, Edges::uniform(GraphicValue::ZERO));
    assert!(!edges.any_nonzero());
    assert_eq!(StyleNode::default().size_with_padding(), (0, 0));
}
