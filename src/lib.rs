//! slidecast turns a topic into a narrated slide video.
//!
//! # Pipeline overview
//!
//! 1. **Generate**: the content service drafts a slide deck for a topic ([`ContentClient`])
//! 2. **Render**: each slide is rasterized to a PNG on the CPU ([`SlideRenderer`])
//! 3. **Narrate**: speaker notes become audio through the service's TTS endpoint ([`ServiceNarrator`])
//! 4. **Assemble**: per-slide segments are encoded and concatenated with the system `ffmpeg`
//!    ([`VideoAssembler`])
//! 5. **Pin** (optional): the finished file is uploaded to IPFS via Pinata ([`PinningClient`])
//!
//! Everything runs synchronously on the calling thread. Collaborators sit behind small traits
//! ([`SlideRasterizer`], [`Narrator`], [`MediaToolchain`], [`MediaFetcher`]) so assembly can be
//! driven by substitutes.
#![forbid(unsafe_code)]

pub mod assemble;
pub mod client;
pub mod encode;
pub mod foundation;
pub mod model;
pub mod narration;
pub mod render;

pub use crate::foundation::config::Config;
pub use crate::foundation::error::{ServiceError, SlidecastError, SlidecastResult};

pub use crate::assemble::{RenderedVideo, VideoAssembler};
pub use crate::client::content::ContentClient;
pub use crate::client::gateway::{GatewayClient, MediaFetcher};
pub use crate::client::pinning::{PinnedFile, PinningClient};
pub use crate::encode::ffmpeg::{FfmpegToolchain, MediaToolchain, SegmentJob};
pub use crate::model::audio::AudioRef;
pub use crate::model::request::{
    AspectFormat, OutputContainer, RenderRequest, TtsLine, TtsRequest, TtsResponse,
    VideoRenderResponse,
};
pub use crate::model::slide::{BrandKit, LayoutType, Slide};
pub use crate::narration::{Narrator, ServiceNarrator};
pub use crate::render::{SlideRasterizer, SlideRenderer};
