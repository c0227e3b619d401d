use super::*;
use std::cell::RefCell;

struct Canned {
    response: TtsResponse,
    seen: RefCell<Vec<TtsRequest>>,
}

impl Narrator for Canned {
    fn synthesize(&self, request: &TtsRequest) -> SlidecastResult<String> {
        self.seen.borrow_mut().push(request.clone());
        validate_tts_response(self.response.clone())
    }
}

#[test]
fn valid_payload_is_returned_unchanged() {
    let audio = validate_tts_response(TtsResponse {
        audio: Some("dGVzdA==".to_string()),
    })
    .unwrap();
    assert_eq!(audio, "dGVzdA==");
}

#[test]
fn missing_or_empty_audio_is_a_narration_error() {
    let err = validate_tts_response(TtsResponse { audio: None }).unwrap_err();
    assert!(matches!(err, SlidecastError::Narration(_)));

    let err = validate_tts_response(TtsResponse {
        audio: Some("  ".to_string()),
    })
    .unwrap_err();
    assert!(matches!(err, SlidecastError::Narration(_)));
}

#[test]
fn undecodable_audio_is_a_narration_error() {
    let err = validate_tts_response(TtsResponse {
        audio: Some("not base64 !!".to_string()),
    })
    .unwrap_err();
    assert!(matches!(err, SlidecastError::Narration(_)));
    assert!(err.to_string().contains("invalid audio base64"));
}

#[test]
fn decode_tolerates_line_breaks() {
    assert_eq!(decode_audio_base64("dGVz\ndA==").unwrap(), b"test".to_vec());
}

#[test]
fn synthesize_builds_request_from_lines() {
    let narrator = Canned {
        response: TtsResponse {
            audio: Some("dGVzdA==".to_string()),
        },
        seen: RefCell::new(Vec::new()),
    };
    let audio = synthesize(
        &narrator,
        vec![TtsLine::new(PRESENTER, "Hello")],
        "fr-FR",
        None,
        None,
    )
    .unwrap();
    assert_eq!(audio, "dGVzdA==");

    let seen = narrator.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].language, "fr-FR");
    assert_eq!(seen[0].script[0].line, "Hello");
    assert_eq!(seen[0].script[0].speaker.as_deref(), Some(PRESENTER));
    assert_eq!(seen[0].provider, None);
    assert_eq!(seen[0].voice, None);
}

#[test]
fn synthesize_passes_voice_selectors_through() {
    let narrator = Canned {
        response: TtsResponse {
            audio: Some("dGVzdA==".to_string()),
        },
        seen: RefCell::new(Vec::new()),
    };
    synthesize(
        &narrator,
        vec![TtsLine::new(PRESENTER, "Hi")],
        "en-US",
        Some("elevenlabs".to_string()),
        Some("nova".to_string()),
    )
    .unwrap();

    let seen = narrator.seen.borrow();
    assert_eq!(seen[0].provider.as_deref(), Some("elevenlabs"));
    assert_eq!(seen[0].voice.as_deref(), Some("nova"));
}
