use reqwest::blocking::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::http::{build_client, decode_json, send};
use crate::foundation::config::{CONTENT_TIMEOUT, Config};
use crate::foundation::error::{ServiceError, SlidecastResult};
use crate::model::slide::Slide;
use crate::model::request::{TtsRequest, TtsResponse};

/// Default visual style requested from the generator.
pub const DEFAULT_STYLE: &str = "Modern";

#[derive(serde::Deserialize)]
struct GenerateSlidesResponse {
    slides: Vec<Slide>,
}

// The update endpoint has been seen answering both `{"slide": {...}}` and a bare slide.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum UpdateSlideResponse {
    Wrapped { slide: Slide },
    Bare(Slide),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateSlidesBody<'a> {
    topic: &'a str,
    count: u32,
    style: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateSlideBody<'a> {
    topic: &'a str,
    instruction: &'a str,
    current_slide: &'a Slide,
    style: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveProjectBody<'a> {
    project_id: &'a str,
    title: &'a str,
    content: ProjectContent<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectContent<'a> {
    project_id: &'a str,
    topic: &'a str,
    style: &'a str,
    format: &'a str,
    slides: &'a [Slide],
    has_video: bool,
}

/// Client for the slide generation / TTS service.
pub struct ContentClient {
    http: Client,
    base_url: String,
}

impl ContentClient {
    pub fn new(cfg: &Config) -> SlidecastResult<Self> {
        Ok(Self {
            http: build_client(CONTENT_TIMEOUT)?,
            base_url: cfg.content_base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the service for `count` slides about `topic`.
    #[tracing::instrument(skip(self))]
    pub fn generate_slides(
        &self,
        topic: &str,
        count: u32,
        style: &str,
    ) -> SlidecastResult<Vec<Slide>> {
        let url = self.endpoint("/api/slides/generate");
        let body = GenerateSlidesBody {
            topic,
            count,
            style,
        };
        let bytes = self.post_raw(&url, &body)?;
        let slides = decode_slides(&url, &bytes)?;
        tracing::info!(slides = slides.len(), "generated slides");
        Ok(slides)
    }

    /// Rewrite one slide following a natural-language instruction.
    #[tracing::instrument(skip(self, current))]
    pub fn update_slide(
        &self,
        topic: &str,
        instruction: &str,
        current: &Slide,
        style: &str,
    ) -> SlidecastResult<Slide> {
        let url = self.endpoint("/api/slides/update");
        let body = UpdateSlideBody {
            topic,
            instruction,
            current_slide: current,
            style,
        };
        let bytes = self.post_raw(&url, &body)?;
        Ok(decode_updated_slide(&url, &bytes)?)
    }

    /// Raw TTS call. Use [`crate::narration`] for a validated payload.
    pub fn tts(&self, request: &TtsRequest) -> SlidecastResult<TtsResponse> {
        let url = self.endpoint("/api/podcast/tts");
        tracing::debug!(lines = request.script.len(), language = %request.language, "requesting tts");
        self.post(&url, request)
    }

    /// Persist a project (slides plus video flag) on the content service.
    pub fn save_project(
        &self,
        project_id: &str,
        topic: &str,
        slides: &[Slide],
        has_video: bool,
    ) -> SlidecastResult<serde_json::Value> {
        let url = self.endpoint("/api/project/save");
        let body = SaveProjectBody {
            project_id,
            title: topic,
            content: ProjectContent {
                project_id,
                topic,
                style: DEFAULT_STYLE,
                format: "16:9",
                slides,
                has_video,
            },
        };
        self.post(&url, &body)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> SlidecastResult<T> {
        let bytes = self.post_raw(url, body)?;
        Ok(decode_json(url, &bytes)?)
    }

    fn post_raw<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> SlidecastResult<Vec<u8>> {
        Ok(send(url, self.http.post(url).json(body))?)
    }
}

/// Decode a slide generation response body.
pub fn decode_slides(url: &str, body: &[u8]) -> Result<Vec<Slide>, ServiceError> {
    decode_json::<GenerateSlidesResponse>(url, body).map(|r| r.slides)
}

/// Decode a slide update response body (wrapped or bare).
pub fn decode_updated_slide(url: &str, body: &[u8]) -> Result<Slide, ServiceError> {
    decode_json::<UpdateSlideResponse>(url, body).map(|r| match r {
        UpdateSlideResponse::Wrapped { slide } | UpdateSlideResponse::Bare(slide) => slide,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/client/content.rs"]
mod tests;
