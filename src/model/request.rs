use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::foundation::error::SlidecastError;
use crate::model::slide::{BrandKit, Slide};

/// Target aspect format of the rendered video.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum AspectFormat {
    /// 1280x720.
    #[default]
    #[serde(rename = "16:9")]
    Landscape,
    /// 1080x1350.
    #[serde(rename = "4:5")]
    Portrait,
    /// 720x1280.
    #[serde(rename = "9:16")]
    Vertical,
}

impl AspectFormat {
    /// All supported formats.
    pub const ALL: [AspectFormat; 3] = [Self::Landscape, Self::Portrait, Self::Vertical];

    /// Output pixel dimensions `(width, height)`.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Landscape => (1280, 720),
            Self::Portrait => (1080, 1350),
            Self::Vertical => (720, 1280),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landscape => "16:9",
            Self::Portrait => "4:5",
            Self::Vertical => "9:16",
        }
    }

    /// Parse a format string, falling back to 16:9 for anything unrecognized.
    ///
    /// Only the standalone slide renderer uses this; assembly parses strictly.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            tracing::warn!(format = s, "unrecognized aspect format, using 16:9");
            Self::Landscape
        })
    }
}

impl fmt::Display for AspectFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectFormat {
    type Err = SlidecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s.trim())
            .ok_or_else(|| {
                SlidecastError::validation(format!(
                    "unsupported aspect format '{s}' (expected one of 16:9, 4:5, 9:16)"
                ))
            })
    }
}

/// Container of the final video.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputContainer {
    #[default]
    Mp4,
    Webm,
}

impl OutputContainer {
    /// File extension, which is also the name used on the wire.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Mp4 => "mp4",
            Self::Webm => "webm",
        }
    }

    /// Encoder used for the video stream of each segment.
    pub fn video_codec(self) -> &'static str {
        match self {
            Self::Mp4 => "libx264",
            Self::Webm => "libvpx-vp9",
        }
    }

    /// Encoder used for the audio stream of each segment.
    pub fn audio_codec(self) -> &'static str {
        match self {
            Self::Mp4 => "aac",
            Self::Webm => "libopus",
        }
    }

    /// Sample rate every segment's audio is resampled to, so stream-copy concat stays valid.
    /// Opus only accepts 48 kHz and its integer divisors.
    pub fn audio_sample_rate(self) -> u32 {
        match self {
            Self::Mp4 => 44_100,
            Self::Webm => 48_000,
        }
    }
}

impl fmt::Display for OutputContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputContainer {
    type Err = SlidecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "mp4" => Ok(Self::Mp4),
            "webm" => Ok(Self::Webm),
            other => Err(SlidecastError::validation(format!(
                "unsupported output format '{other}' (expected mp4 or webm)"
            ))),
        }
    }
}

/// Everything the assembler needs for one video.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub topic: String,
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub format: AspectFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<BrandKit>,
    #[serde(default = "default_fps")]
    pub fps: u32,
    #[serde(default)]
    pub output_format: OutputContainer,
    /// Synthesize narration for slides that carry no embedded audio.
    #[serde(default = "default_true")]
    pub generate_audio: bool,
    #[serde(default = "default_language")]
    pub tts_language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tts_provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tts_voice: Option<String>,
}

impl RenderRequest {
    /// Request with default format, fps and narration settings.
    pub fn new(topic: impl Into<String>, slides: Vec<Slide>) -> Self {
        Self {
            topic: topic.into(),
            slides,
            format: AspectFormat::default(),
            brand: None,
            fps: default_fps(),
            output_format: OutputContainer::default(),
            generate_audio: true,
            tts_language: default_language(),
            tts_provider: None,
            tts_voice: None,
        }
    }

    pub fn validate(&self) -> Result<(), SlidecastError> {
        if self.slides.is_empty() {
            return Err(SlidecastError::validation(
                "render request must contain at least one slide",
            ));
        }
        if self.fps == 0 {
            return Err(SlidecastError::validation("fps must be non-zero"));
        }
        Ok(())
    }
}

/// Response shape handed back to drivers after assembly (and optional pinning).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRenderResponse {
    pub video_path: String,
    pub video_filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipfs_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipfs_hash: Option<String>,
}

/// One spoken line of a TTS script.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TtsLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    pub line: String,
}

impl TtsLine {
    pub fn new(speaker: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            speaker: Some(speaker.into()),
            line: line.into(),
        }
    }
}

/// Body of the content service's TTS endpoint.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TtsRequest {
    pub script: Vec<TtsLine>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_map: Option<BTreeMap<String, String>>,
}

impl TtsRequest {
    pub fn new(script: Vec<TtsLine>, language: impl Into<String>) -> Self {
        Self {
            script,
            language: language.into(),
            provider: None,
            voice: None,
            voice_map: None,
        }
    }
}

/// Raw TTS response. `audio` is validated by the narration layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TtsResponse {
    #[serde(default)]
    pub audio: Option<String>,
}

fn default_fps() -> u32 {
    30
}

fn default_true() -> bool {
    true
}

fn default_language() -> String {
    "en-US".to_string()
}
