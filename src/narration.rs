//! Narration synthesis on top of the content service's TTS endpoint.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::client::content::ContentClient;
use crate::foundation::error::{SlidecastError, SlidecastResult};
use crate::model::request::{TtsLine, TtsRequest, TtsResponse};

/// Speaker label used for single-voice slide narration.
pub const PRESENTER: &str = "Presenter";

/// Source of narration audio.
///
/// Implementations return a base64 payload that is known to decode.
pub trait Narrator {
    fn synthesize(&self, request: &TtsRequest) -> SlidecastResult<String>;
}

/// [`Narrator`] backed by the remote content service.
pub struct ServiceNarrator {
    client: ContentClient,
}

impl ServiceNarrator {
    pub fn new(client: ContentClient) -> Self {
        Self { client }
    }
}

impl Narrator for ServiceNarrator {
    fn synthesize(&self, request: &TtsRequest) -> SlidecastResult<String> {
        let response = self.client.tts(request)?;
        validate_tts_response(response)
    }
}

/// Synthesize `lines` in `language`. `None` selectors leave the service defaults in place.
pub fn synthesize(
    narrator: &dyn Narrator,
    lines: Vec<TtsLine>,
    language: &str,
    provider: Option<String>,
    voice: Option<String>,
) -> SlidecastResult<String> {
    let mut request = TtsRequest::new(lines, language);
    request.provider = provider;
    request.voice = voice;
    narrator.synthesize(&request)
}

/// Require a non-empty, decodable `audio` field.
pub fn validate_tts_response(response: TtsResponse) -> SlidecastResult<String> {
    let audio = response
        .audio
        .filter(|a| !a.trim().is_empty())
        .ok_or_else(|| SlidecastError::narration("no audio generated by TTS service"))?;
    decode_audio_base64(&audio)?;
    Ok(audio)
}

/// Decode a base64 audio payload, ignoring embedded whitespace.
pub fn decode_audio_base64(payload: &str) -> SlidecastResult<Vec<u8>> {
    let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| SlidecastError::narration(format!("invalid audio base64: {e}")))
}

#[cfg(test)]
#[path = "../tests/unit/narration.rs"]
mod tests;
