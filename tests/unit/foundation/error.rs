use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SlidecastError::configuration("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        SlidecastError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SlidecastError::narration("x")
            .to_string()
            .contains("narration error:")
    );
    assert!(
        SlidecastError::pinning("x")
            .to_string()
            .contains("pinata error:")
    );
    assert!(
        SlidecastError::video_generation("x")
            .to_string()
            .contains("video generation error:")
    );
    assert!(
        SlidecastError::render("x")
            .to_string()
            .contains("render error:")
    );
}

#[test]
fn service_status_embeds_body_verbatim() {
    let err = SlidecastError::from(ServiceError::Status {
        url: "http://localhost:3002/api/slides/generate".to_string(),
        status: 502,
        body: "upstream exploded".to_string(),
    });
    let msg = err.to_string();
    assert!(msg.starts_with("service error:"));
    assert!(msg.contains("502"));
    assert!(msg.contains("upstream exploded"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SlidecastError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
