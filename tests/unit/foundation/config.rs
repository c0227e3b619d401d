use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_nothing_is_set() {
    let cfg = Config::from_lookup(|_| None);
    assert_eq!(cfg.content_base_url, DEFAULT_CONTENT_URL);
    assert_eq!(cfg.pinata_jwt, None);
    assert_eq!(cfg.pinata_api_url, DEFAULT_PINATA_API_URL);
    assert_eq!(cfg.pinata_gateway, DEFAULT_PINATA_GATEWAY);
    assert_eq!(cfg.output_dir, PathBuf::from("outputs"));
    assert_eq!(cfg.scratch_dir, None);
    assert_eq!(cfg.font_path, None);
    assert!(cfg.ffmpeg_path.ends_with("ffmpeg") || cfg.ffmpeg_path.ends_with("ffmpeg.exe"));
}

#[test]
fn overrides_are_trimmed_and_normalized() {
    let cfg = Config::from_lookup(lookup_from(&[
        ("CONTENT_SERVICE_URL", "https://content.example/ "),
        ("PINATA_JWT", "secret"),
        ("PINATA_GATEWAY", "https://gw.example/ipfs/"),
        ("FFMPEG_PATH", "/opt/ff/bin/ffmpeg"),
        ("FFPROBE_PATH", "/opt/ff/bin/ffprobe"),
        ("SLIDECAST_OUTPUT_DIR", "/srv/videos"),
        ("SLIDECAST_SCRATCH_DIR", "/srv/scratch"),
    ]));
    assert_eq!(cfg.content_base_url, "https://content.example");
    assert_eq!(cfg.pinata_jwt.as_deref(), Some("secret"));
    assert_eq!(cfg.pinata_gateway, "https://gw.example/ipfs");
    assert_eq!(cfg.ffmpeg_path, PathBuf::from("/opt/ff/bin/ffmpeg"));
    assert_eq!(cfg.ffprobe_path, PathBuf::from("/opt/ff/bin/ffprobe"));
    assert_eq!(cfg.output_dir, PathBuf::from("/srv/videos"));
    assert_eq!(cfg.scratch_dir, Some(PathBuf::from("/srv/scratch")));
}

#[test]
fn content_url_prefers_podio_variable() {
    let cfg = Config::from_lookup(lookup_from(&[("PODIO_AI_BASE_URL", "http://svc:9000/")]));
    assert_eq!(cfg.content_base_url, "http://svc:9000");

    let cfg = Config::from_lookup(lookup_from(&[
        ("PODIO_AI_BASE_URL", "http://svc:9000"),
        ("CONTENT_SERVICE_URL", "http://other:1"),
    ]));
    assert_eq!(cfg.content_base_url, "http://svc:9000");
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = Config::from_lookup(lookup_from(&[("PINATA_JWT", "   ")]));
    assert_eq!(cfg.pinata_jwt, None);
}

#[test]
fn builder_overrides_replace_directories() {
    let cfg = Config::default()
        .with_output_dir("/tmp/out")
        .with_scratch_dir("/tmp/scratch");
    assert_eq!(cfg.output_dir, PathBuf::from("/tmp/out"));
    assert_eq!(cfg.scratch_dir, Some(PathBuf::from("/tmp/scratch")));
}
