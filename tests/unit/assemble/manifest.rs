use super::*;

#[test]
fn lists_segments_in_order() {
    let segs: Vec<PathBuf> = (1..=3)
        .map(|n| PathBuf::from(format!("/tmp/run/segment_{n}.mp4")))
        .collect();
    assert_eq!(
        manifest_contents(&segs),
        "file '/tmp/run/segment_1.mp4'\nfile '/tmp/run/segment_2.mp4'\nfile '/tmp/run/segment_3.mp4'\n"
    );
}

#[test]
fn escapes_single_quotes() {
    let segs = vec![PathBuf::from("/tmp/it's/segment_1.mp4")];
    assert_eq!(
        manifest_contents(&segs),
        "file '/tmp/it'\\''s/segment_1.mp4'\n"
    );
}

#[test]
fn empty_list_is_empty_manifest() {
    assert_eq!(manifest_contents(&[]), "");
}

#[test]
fn writes_manifest_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(MANIFEST_NAME);
    write_manifest(&path, &[PathBuf::from("/a.mp4")]).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "file '/a.mp4'\n");
}
