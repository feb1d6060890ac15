use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    assert!(Fps { num: 30, den: 0 }.validate().is_err());
}

#[test]
fn ntsc_frame_duration() {
    let fps = Fps::new(30000, 1001).unwrap();
    assert_eq!(fps.frames_to_secs(30000.0), 1001.0);
}

#[test]
fn resolution_must_be_non_empty() {
    assert!(Resolution { width: 0, height: 10 }.validate().is_err());
    assert!(Resolution { width: 1920, height: 1080 }.validate().is_ok());
}

#[test]
fn relative_paths_join_base() {
    let base = Path::new("docs/show");
    assert_eq!(join_relative(base, "clip.mp4"), Path::new("docs/show/clip.mp4"));
    assert_eq!(join_relative(Path::new(""), "clip.mp4"), Path::new("clip.mp4"));
    assert_eq!(join_relative(base, "/abs/clip.mp4"), Path::new("/abs/clip.mp4"));
}
