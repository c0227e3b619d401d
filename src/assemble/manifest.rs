use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::SlidecastResult;

pub const MANIFEST_NAME: &str = "concat.txt";

/// Concat-demuxer manifest body: one `file '<path>'` line per segment, in order.
pub fn manifest_contents(segments: &[PathBuf]) -> String {
    let mut out = String::new();
    for seg in segments {
        let escaped = seg.to_string_lossy().replace('\'', r"'\''");
        out.push_str("file '");
        out.push_str(&escaped);
        out.push_str("'\n");
    }
    out
}

pub fn write_manifest(path: &Path, segments: &[PathBuf]) -> SlidecastResult<()> {
    std::fs::write(path, manifest_contents(segments))
        .with_context(|| format!("write concat manifest '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/manifest.rs"]
mod tests;
