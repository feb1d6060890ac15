use super::*;

fn video(has_audio: bool) -> ContentNode {
    SourceContent::new(SourceKind::Video, "clip.mp4", StyleNode::default())
        .with_audio(has_audio)
        .into()
}

fn image() -> ContentNode {
    SourceContent::new(SourceKind::Image, "still.png", StyleNode::default()).into()
}

#[test]
fn unknown_media_kind_is_typed_error() {
    assert!(matches!(
        "hologram".parse::<SourceKind>(),
        Err(VsmlError::UnsupportedMediaKind(k)) if k == "hologram"
    ));
    assert_eq!("img".parse::<SourceKind>().unwrap(), SourceKind::Image);
    assert_eq!("txt".parse::<SourceKind>().unwrap(), SourceKind::Text);
}

#[test]
fn audio_presence_depends_on_kind() {
    let audio = SourceContent::new(SourceKind::Audio, "a.wav", StyleNode::default());
    assert!(audio.has_audio());
    assert!(!ContentNode::from(audio).has_video());

    let text = SourceContent::new(SourceKind::Text, "hi", StyleNode::default()).with_audio(true);
    assert!(!text.has_audio());

    assert!(video(true).has_audio());
    assert!(!video(false).has_audio());
}

#[test]
fn wrap_flags_aggregate_children() {
    let silent = WrapContent::new(vec![image(), video(false)], StyleNode::default());
    assert!(silent.has_video);
    assert!(!silent.has_audio);

    let nested = WrapContent::new(vec![silent.into(), video(true)], StyleNode::default());
    assert!(nested.has_video);
    assert!(nested.has_audio);
}

#[test]
fn wrap_flags_computed_when_omitted_in_json() {
    let node: ContentNode = serde_json::from_value(serde_json::json!({
        "wrap": {
            "children": [
                { "source": { "src": "a.wav", "kind": "audio" } }
            ]
        }
    }))
    .unwrap();
    let ContentNode::Wrap(w) = node else {
        panic!("expected wrap");
    };
    assert!(!w.has_video);
    assert!(w.has_audio);
}

#[test]
fn explicit_wrap_flags_win() {
    let node: ContentNode = serde_json::from_value(serde_json::json!({
        "wrap": { "children": [], "has_video": true }
    }))
    .unwrap();
    assert!(node.has_video());
    assert!(!node.has_audio());
}

#[test]
fn labels_prefer_ids() {
    let plain = SourceContent::new(SourceKind::Video, "clip.mp4", StyleNode::default());
    assert_eq!(plain.label(), "video:clip.mp4");
    assert_eq!(plain.with_id("intro").label(), "intro");
    assert_eq!(
        WrapContent::new(vec![image()], StyleNode::default()).label(),
        "wrap[1]"
    );
}
