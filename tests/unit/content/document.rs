use super::*;

const DOC: &str = r#"{
    "fps": { "num": 30, "den": 1 },
    "resolution": { "width": 1280, "height": 720 },
    "root": {
        "wrap": {
            "id": "root",
            "style": { "order": "sequence", "background_color": "black" },
            "children": [
                { "source": { "src": "intro.mp4", "kind": "video", "has_audio": true,
                              "style": { "object_length": "2s" } } },
                { "source": { "src": "Hello", "kind": "txt",
                              "style": { "width": "200px", "height": "40px" } } }
            ]
        }
    }
}"#;

#[test]
fn parses_document_json() {
    let doc = Document::from_reader(DOC.as_bytes()).unwrap();
    doc.validate().unwrap();
    assert_eq!(doc.fps, Fps::new(30, 1).unwrap());
    assert_eq!(doc.resolution.width, 1280);

    let ContentNode::Wrap(root) = &doc.root else {
        panic!("expected wrap root");
    };
    assert_eq!(root.children.len(), 2);
    assert!(root.has_video && root.has_audio);
}

#[test]
fn bad_media_kind_surfaces_literal() {
    let bad = DOC.replace("\"txt\"", "\"hologram\"");
    let err = Document::from_reader(bad.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("hologram"), "{err}");
    let VsmlError::Element { element, source } = err else {
        panic!("expected element attribution");
    };
    assert_eq!(element, "hologram:Hello");
    assert!(matches!(*source, VsmlError::Serde(_)));
}

#[test]
fn bad_style_literal_names_owning_element() {
    let bad = DOC.replace(r#""width": "200px""#, r#""width": "wide""#);
    let bad = bad.replace(r#""src": "Hello""#, r#""id": "caption", "src": "Hello""#);
    let err = Document::from_reader(bad.as_bytes()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("element 'caption'"), "{msg}");
    assert!(msg.contains("wide"), "{msg}");
}

#[test]
fn bad_container_style_names_container() {
    let bad = DOC.replace(r#""order": "sequence""#, r#""order": "shuffle""#);
    let err = Document::from_reader(bad.as_bytes()).unwrap_err();
    assert!(matches!(&err, VsmlError::Element { element, .. } if element == "root"), "{err}");
}

#[test]
fn syntax_error_is_not_attributed() {
    let err = Document::from_reader(&b"{ \"fps\": "[..]).unwrap_err();
    assert!(matches!(err, VsmlError::Serde(_)));
}

#[test]
fn validate_rejects_zero_fps_and_negative_volume() {
    let mut doc = Document::from_reader(DOC.as_bytes()).unwrap();
    doc.fps.den = 0;
    assert!(doc.validate().is_err());

    let loud = DOC.replace(r#""object_length": "2s""#, r#""object_length": "2s", "audio_volume": -1.0"#);
    let doc = Document::from_reader(loud.as_bytes()).unwrap();
    let err = doc.validate().unwrap_err().to_string();
    assert!(err.contains("video:intro.mp4"), "{err}");
}

#[test]
fn render_context_carries_settings() {
    let doc = Document::from_reader(DOC.as_bytes()).unwrap();
    let ctx = doc.render_context("assets");
    assert_eq!(ctx.fps, doc.fps);
    assert_eq!(ctx.resolution, doc.resolution);
    assert_eq!(ctx.resolve_path("intro.mp4"), PathBuf::from("assets/intro.mp4"));
}

#[test]
fn missing_file_is_validation_error() {
    let err = Document::from_path("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, VsmlError::Validation(_)));
}
