use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use crate::{
    foundation::{
        config::Config,
        error::{SlidecastError, SlidecastResult},
    },
    model::request::OutputContainer,
};

/// Silent stereo source used when a slide has no narration.
pub const SILENT_AUDIO_SOURCE: &str = "anullsrc=channel_layout=stereo:sample_rate=44100";

/// One still-image segment to encode.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentJob {
    pub image: PathBuf,
    /// `None` encodes a silent track.
    pub audio: Option<PathBuf>,
    /// Seconds.
    pub duration: f64,
    pub fps: u32,
    pub width: u32,
    pub height: u32,
    pub container: OutputContainer,
    pub out_path: PathBuf,
}

impl SegmentJob {
    pub fn validate(&self) -> SlidecastResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SlidecastError::validation(
                "segment width/height must be non-zero",
            ));
        }
        if self.fps == 0 {
            return Err(SlidecastError::validation("segment fps must be non-zero"));
        }
        if !self.width.is_multiple_of(2) || !self.height.is_multiple_of(2) {
            return Err(SlidecastError::validation(
                "segment width/height must be even (required for yuv420p output)",
            ));
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(SlidecastError::validation(format!(
                "segment duration must be finite and > 0, got {}",
                self.duration
            )));
        }
        Ok(())
    }
}

/// External media tooling used by the assembler.
pub trait MediaToolchain {
    /// Length of an audio file in seconds.
    fn probe_duration(&self, audio: &Path) -> SlidecastResult<f64>;
    fn encode_segment(&self, job: &SegmentJob) -> SlidecastResult<()>;
    /// Stream-copy every segment listed in `manifest` into `out_path`.
    fn concat(&self, manifest: &Path, out_path: &Path) -> SlidecastResult<()>;
}

/// [`MediaToolchain`] backed by the `ffmpeg` and `ffprobe` executables.
#[derive(Clone, Debug)]
pub struct FfmpegToolchain {
    ffmpeg: PathBuf,
    ffprobe: PathBuf,
}

impl FfmpegToolchain {
    pub fn new(cfg: &Config) -> Self {
        Self {
            ffmpeg: cfg.ffmpeg_path.clone(),
            ffprobe: cfg.ffprobe_path.clone(),
        }
    }

    /// Both tools answer `-version`.
    pub fn is_available(&self) -> bool {
        is_tool_available(&self.ffmpeg) && is_tool_available(&self.ffprobe)
    }
}

impl MediaToolchain for FfmpegToolchain {
    fn probe_duration(&self, audio: &Path) -> SlidecastResult<f64> {
        let stdout = run_tool(&self.ffprobe, probe_args(audio), "ffprobe")?;
        parse_probe_output(&stdout)
    }

    fn encode_segment(&self, job: &SegmentJob) -> SlidecastResult<()> {
        job.validate()?;
        ensure_parent_dir(&job.out_path)?;
        tracing::debug!(
            out = %job.out_path.display(),
            duration = job.duration,
            silent = job.audio.is_none(),
            "encoding segment"
        );
        run_tool(&self.ffmpeg, segment_args(job), "ffmpeg").map(|_| ())
    }

    fn concat(&self, manifest: &Path, out_path: &Path) -> SlidecastResult<()> {
        ensure_parent_dir(out_path)?;
        tracing::debug!(out = %out_path.display(), "concatenating segments");
        run_tool(&self.ffmpeg, concat_args(manifest, out_path), "ffmpeg").map(|_| ())
    }
}

/// `ffprobe` arguments printing only the container duration.
pub fn probe_args(audio: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = [
        "-v",
        "error",
        "-show_entries",
        "format=duration",
        "-of",
        "default=noprint_wrappers=1:nokey=1",
    ]
    .into_iter()
    .map(OsString::from)
    .collect();
    args.push(audio.as_os_str().to_owned());
    args
}

/// `ffmpeg` arguments for a looped still image plus narration (or silence).
pub fn segment_args(job: &SegmentJob) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-y".into(), "-loop".into(), "1".into(), "-i".into()];
    args.push(job.image.as_os_str().to_owned());

    match &job.audio {
        Some(audio) => {
            args.push("-i".into());
            args.push(audio.as_os_str().to_owned());
        }
        None => {
            args.extend(["-f", "lavfi", "-i", SILENT_AUDIO_SOURCE].map(OsString::from));
        }
    }

    args.extend(
        [
            "-t".to_owned(),
            format!("{:.3}", job.duration),
            "-r".to_owned(),
            job.fps.to_string(),
            "-s".to_owned(),
            format!("{}x{}", job.width, job.height),
            "-c:v".to_owned(),
            job.container.video_codec().to_owned(),
            "-pix_fmt".to_owned(),
            "yuv420p".to_owned(),
            "-c:a".to_owned(),
            job.container.audio_codec().to_owned(),
            "-ar".to_owned(),
            job.container.audio_sample_rate().to_string(),
            "-ac".to_owned(),
            "2".to_owned(),
            "-shortest".to_owned(),
        ]
        .map(OsString::from),
    );
    args.push(job.out_path.as_os_str().to_owned());
    args
}

/// `ffmpeg` arguments for the concat demuxer with stream copy.
pub fn concat_args(manifest: &Path, out_path: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = ["-y", "-f", "concat", "-safe", "0", "-i"]
        .into_iter()
        .map(OsString::from)
        .collect();
    args.push(manifest.as_os_str().to_owned());
    args.push("-c".into());
    args.push("copy".into());
    args.push(out_path.as_os_str().to_owned());
    args
}

pub fn parse_probe_output(stdout: &str) -> SlidecastResult<f64> {
    let text = stdout.trim();
    match text.parse::<f64>() {
        Ok(secs) if secs.is_finite() && secs >= 0.0 => Ok(secs),
        _ => Err(SlidecastError::video_generation(format!(
            "ffprobe reported an unusable duration: {text:?}"
        ))),
    }
}

/// Run `program`, returning stdout; a spawn failure or non-zero exit becomes a
/// video generation error carrying stderr.
fn run_tool(program: &Path, args: Vec<OsString>, label: &str) -> SlidecastResult<String> {
    let output = Command::new(program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| {
            SlidecastError::video_generation(format!(
                "failed to spawn {label} '{}' (is it installed and on PATH?): {e}",
                program.display()
            ))
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        return Err(SlidecastError::video_generation(if stderr.is_empty() {
            format!("{label} exited with status {}", output.status)
        } else {
            format!("{label} exited with status {}: {stderr}", output.status)
        }));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

pub fn is_tool_available(program: &Path) -> bool {
    Command::new(program)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

pub fn ensure_parent_dir(path: &Path) -> SlidecastResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
