//! Video assembly: render each slide, attach narration, encode per-slide segments
//! and concatenate them into one file.
//!
//! All intermediates live in a per-run scratch directory that is removed on every
//! exit path. Slides are processed strictly in input order.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::client::gateway::{GatewayClient, MediaFetcher};
use crate::client::content::ContentClient;
use crate::encode::ffmpeg::{FfmpegToolchain, MediaToolchain, SegmentJob};
use crate::foundation::config::Config;
use crate::foundation::error::SlidecastResult;
use crate::model::request::RenderRequest;
use crate::model::slide::Slide;
use crate::narration::{Narrator, ServiceNarrator};
use crate::render::{SlideRasterizer, SlideRenderer};

/// Audio source selection and materialization.
pub mod audio;
/// Slide duration estimate and reconciliation with measured audio.
pub mod duration;
pub mod filename;
/// Concat-demuxer manifest.
pub mod manifest;

/// Location of a finished video.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedVideo {
    pub path: PathBuf,
    pub filename: String,
}

/// Drives the per-slide pipeline over pluggable collaborators.
pub struct VideoAssembler {
    renderer: Box<dyn SlideRasterizer>,
    narrator: Box<dyn Narrator>,
    tools: Box<dyn MediaToolchain>,
    fetcher: Box<dyn MediaFetcher>,
    scratch_parent: Option<PathBuf>,
}

impl VideoAssembler {
    pub fn new(
        renderer: Box<dyn SlideRasterizer>,
        narrator: Box<dyn Narrator>,
        tools: Box<dyn MediaToolchain>,
        fetcher: Box<dyn MediaFetcher>,
    ) -> Self {
        Self {
            renderer,
            narrator,
            tools,
            fetcher,
            scratch_parent: None,
        }
    }

    /// Production wiring: CPU renderer, content-service narration, system ffmpeg.
    pub fn from_config(cfg: &Config) -> SlidecastResult<Self> {
        let mut assembler = Self::new(
            Box::new(SlideRenderer::new(cfg)?),
            Box::new(ServiceNarrator::new(ContentClient::new(cfg)?)),
            Box::new(FfmpegToolchain::new(cfg)),
            Box::new(GatewayClient::new(cfg)?),
        );
        assembler.scratch_parent = cfg.scratch_dir.clone();
        Ok(assembler)
    }

    /// Create per-run scratch directories under `dir` instead of the system temp dir.
    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_parent = Some(dir.into());
        self
    }

    /// Build one video from `request` into `output_dir`.
    #[tracing::instrument(
        skip(self, request),
        fields(topic = %request.topic, slides = request.slides.len(), format = %request.format)
    )]
    pub fn assemble(
        &mut self,
        request: &RenderRequest,
        output_dir: &Path,
    ) -> SlidecastResult<RenderedVideo> {
        request.validate()?;
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("create output dir '{}'", output_dir.display()))?;

        let scratch = self.scratch_dir()?;
        let scratch_root = std::path::absolute(scratch.path()).with_context(|| {
            format!("resolve scratch dir '{}'", scratch.path().display())
        })?;

        let mut segments = Vec::with_capacity(request.slides.len());
        for (idx, slide) in request.slides.iter().enumerate() {
            segments.push(self.build_segment(idx + 1, slide, request, &scratch_root)?);
        }

        let manifest_path = scratch_root.join(manifest::MANIFEST_NAME);
        manifest::write_manifest(&manifest_path, &segments)?;

        let filename = format!(
            "{}.{}",
            filename::sanitize_filename(&request.topic),
            request.output_format.extension()
        );
        let path = output_dir.join(&filename);
        if let Err(e) = self.tools.concat(&manifest_path, &path) {
            discard_partial(&path);
            return Err(e);
        }

        tracing::info!(out = %path.display(), "video assembled");
        Ok(RenderedVideo { path, filename })
    }

    fn scratch_dir(&self) -> SlidecastResult<tempfile::TempDir> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("slidecast-");
        let dir = match &self.scratch_parent {
            Some(parent) => {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create scratch parent '{}'", parent.display()))?;
                builder.tempdir_in(parent)
            }
            None => builder.tempdir(),
        }
        .context("create scratch directory")?;
        Ok(dir)
    }

    /// Render, narrate and encode slide number `n` (1-based).
    #[tracing::instrument(level = "debug", skip(self, slide, request, scratch), fields(title = %slide.title))]
    fn build_segment(
        &mut self,
        n: usize,
        slide: &Slide,
        request: &RenderRequest,
        scratch: &Path,
    ) -> SlidecastResult<PathBuf> {
        let image = scratch.join(format!("slide_{n}.png"));
        self.renderer
            .render(slide, &image, request.format, request.brand.as_ref())?;

        let audio = audio::resolve_audio(
            slide,
            request,
            self.narrator.as_ref(),
            self.fetcher.as_ref(),
            &scratch.join(format!("audio_{n}.mp3")),
        )?;

        let estimate = duration::estimate_duration(slide);
        let measured = match &audio {
            Some(path) => Some(self.tools.probe_duration(path)?),
            None => None,
        };
        let seconds = duration::reconcile(estimate, measured);

        let (width, height) = request.format.dimensions();
        let out_path = scratch.join(format!(
            "segment_{n}.{}",
            request.output_format.extension()
        ));
        self.tools.encode_segment(&SegmentJob {
            image,
            audio,
            duration: seconds,
            fps: request.fps,
            width,
            height,
            container: request.output_format,
            out_path: out_path.clone(),
        })?;

        tracing::info!(slide = n, estimate, ?measured, seconds, "segment encoded");
        Ok(out_path)
    }
}

fn discard_partial(path: &Path) {
    if path.exists()
        && let Err(e) = std::fs::remove_file(path)
    {
        tracing::warn!(path = %path.display(), error = %e, "failed to remove partial output");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/mod.rs"]
mod tests;
