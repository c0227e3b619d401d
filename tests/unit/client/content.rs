use super::*;
use crate::foundation::error::SlidecastError;
use crate::model::slide::LayoutType;

const URL: &str = "http://localhost:3002/api/slides/generate";

#[test]
fn decodes_generated_slides() {
    let body = br#"{"slides": [
        {"title": "Intro", "layoutType": "title", "speakerNotes": "Welcome"},
        {"title": "Numbers", "layoutType": "statistics", "bullets": ["42%: growth"]}
    ]}"#;
    let slides = decode_slides(URL, body).unwrap();
    assert_eq!(slides.len(), 2);
    assert_eq!(slides[0].layout_type, LayoutType::Title);
    assert_eq!(slides[0].speaker_notes, "Welcome");
    assert_eq!(slides[1].bullets, vec!["42%: growth".to_string()]);
}

#[test]
fn missing_slides_field_is_a_malformed_response() {
    let err = decode_slides(URL, br#"{"items": []}"#).unwrap_err();
    assert!(matches!(err, ServiceError::MalformedResponse { .. }));
    assert!(err.to_string().contains("slides"));
}

#[test]
fn slide_without_title_is_rejected_up_front() {
    let err = decode_slides(URL, br#"{"slides": [{"bullets": []}]}"#).unwrap_err();
    assert!(matches!(err, ServiceError::MalformedResponse { .. }));
}

#[test]
fn update_accepts_wrapped_and_bare_slides() {
    let wrapped = decode_updated_slide(URL, br#"{"slide": {"title": "New"}}"#).unwrap();
    assert_eq!(wrapped.title, "New");

    let bare = decode_updated_slide(URL, br#"{"title": "Bare", "bullets": ["a"]}"#).unwrap();
    assert_eq!(bare.title, "Bare");
    assert_eq!(bare.bullets, vec!["a".to_string()]);

    assert!(decode_updated_slide(URL, br#"{"nope": 1}"#).is_err());
}

#[test]
fn unreachable_service_surfaces_request_error() {
    let cfg = Config {
        content_base_url: "http://127.0.0.1:9".to_string(),
        ..Config::default()
    };
    let client = ContentClient::new(&cfg).unwrap();
    assert_eq!(client.base_url(), "http://127.0.0.1:9");

    let err = client.generate_slides("AI", 1, DEFAULT_STYLE).unwrap_err();
    assert!(matches!(
        err,
        SlidecastError::Service(ServiceError::Request { .. })
    ));
}
