use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::client::gateway::MediaFetcher;
use crate::foundation::error::SlidecastResult;
use crate::model::audio::AudioRef;
use crate::model::request::{RenderRequest, TtsLine, TtsRequest};
use crate::model::slide::Slide;
use crate::narration::{Narrator, PRESENTER, decode_audio_base64};

/// Where a slide's narration track came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioSource {
    /// The slide carried its own audio (inline payload or locator).
    Embedded,
    /// Synthesized from the slide's narration text.
    Synthesized,
    /// No narration; the segment gets a silent track.
    Silent,
}

/// Which source applies to `slide`. Embedded audio always wins.
pub fn select_source(slide: &Slide, generate_audio: bool) -> AudioSource {
    if slide.audio_url.as_deref().is_some_and(|a| !a.trim().is_empty()) {
        AudioSource::Embedded
    } else if generate_audio && !slide.speaker_notes.trim().is_empty() {
        AudioSource::Synthesized
    } else {
        AudioSource::Silent
    }
}

/// Single-speaker TTS request for a slide's narration.
pub fn narration_request(slide: &Slide, request: &RenderRequest) -> TtsRequest {
    let mut tts = TtsRequest::new(
        vec![TtsLine::new(PRESENTER, slide.speaker_notes.trim())],
        request.tts_language.clone(),
    );
    tts.provider = request.tts_provider.clone();
    tts.voice = request.tts_voice.clone();
    tts
}

/// Write the slide's narration to `out`, or return `None` for a silent segment.
pub fn resolve_audio(
    slide: &Slide,
    request: &RenderRequest,
    narrator: &dyn Narrator,
    fetcher: &dyn MediaFetcher,
    out: &Path,
) -> SlidecastResult<Option<PathBuf>> {
    let bytes = match select_source(slide, request.generate_audio) {
        AudioSource::Silent => return Ok(None),
        AudioSource::Embedded => {
            let reference = slide.audio_url.as_deref().unwrap_or_default();
            match AudioRef::parse(reference) {
                AudioRef::Inline(payload) => decode_audio_base64(&payload)?,
                AudioRef::Locator(locator) => fetcher.fetch(&locator)?,
            }
        }
        AudioSource::Synthesized => {
            let payload = narrator.synthesize(&narration_request(slide, request))?;
            decode_audio_base64(&payload)?
        }
    };

    std::fs::write(out, bytes).with_context(|| format!("write audio '{}'", out.display()))?;
    Ok(Some(out.to_path_buf()))
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/audio.rs"]
mod tests;
