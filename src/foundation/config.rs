use std::path::PathBuf;
use std::time::Duration;

/// Default base URL of the slide/TTS content service.
pub const DEFAULT_CONTENT_URL: &str = "http://localhost:3002";
/// Default Pinata upload endpoint.
pub const DEFAULT_PINATA_API_URL: &str = "https://api.pinata.cloud/pinning/pinFileToIPFS";
/// Default public IPFS gateway used to build `gatewayUrl` locators.
pub const DEFAULT_PINATA_GATEWAY: &str = "https://gateway.pinata.cloud/ipfs";
/// Default directory for finished videos.
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// Client-level timeout for content service calls.
pub const CONTENT_TIMEOUT: Duration = Duration::from_secs(90);
/// Client-level timeout for pinning uploads and locator downloads.
pub const PINNING_TIMEOUT: Duration = Duration::from_secs(120);

/// Process-wide settings, resolved once at startup and handed to each component.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the content service (no trailing slash).
    pub content_base_url: String,
    /// Bearer credential for Pinata. Uploads fail with a configuration error without it.
    pub pinata_jwt: Option<String>,
    /// Pinata upload endpoint.
    pub pinata_api_url: String,
    /// Gateway prefix for `ipfs://` locators (no trailing slash).
    pub pinata_gateway: String,
    /// `ffmpeg` executable.
    pub ffmpeg_path: PathBuf,
    /// `ffprobe` executable.
    pub ffprobe_path: PathBuf,
    /// Where finished videos are written.
    pub output_dir: PathBuf,
    /// Parent directory for per-run scratch directories. `None` uses the system temp dir.
    pub scratch_dir: Option<PathBuf>,
    /// Explicit font file for slide text. `None` searches well-known system locations.
    pub font_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            content_base_url: get("PODIO_AI_BASE_URL")
                .or_else(|| get("CONTENT_SERVICE_URL"))
                .unwrap_or_else(|| DEFAULT_CONTENT_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            pinata_jwt: get("PINATA_JWT"),
            pinata_api_url: get("PINATA_API_URL")
                .unwrap_or_else(|| DEFAULT_PINATA_API_URL.to_string()),
            pinata_gateway: get("PINATA_GATEWAY")
                .unwrap_or_else(|| DEFAULT_PINATA_GATEWAY.to_string())
                .trim_end_matches('/')
                .to_string(),
            ffmpeg_path: resolve_tool(get("FFMPEG_PATH"), "ffmpeg"),
            ffprobe_path: resolve_tool(get("FFPROBE_PATH"), "ffprobe"),
            output_dir: get("SLIDECAST_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            scratch_dir: get("SLIDECAST_SCRATCH_DIR").map(PathBuf::from),
            font_path: get("SLIDECAST_FONT_PATH").map(PathBuf::from),
        }
    }

    /// Return a copy with a different output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Return a copy with a different scratch parent directory.
    pub fn with_scratch_dir(mut self, scratch_dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = Some(scratch_dir.into());
        self
    }
}

/// Explicit override first, then `PATH` discovery, then the bare name.
fn resolve_tool(explicit: Option<String>, name: &str) -> PathBuf {
    if let Some(path) = explicit {
        return PathBuf::from(path);
    }
    which::which(name).unwrap_or_else(|_| PathBuf::from(name))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
