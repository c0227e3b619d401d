/// Stem used when a topic sanitizes to nothing.
pub const FALLBACK_STEM: &str = "presentation";

/// Filesystem-safe stem for `topic`.
///
/// Alphanumerics, `-` and `_` survive; every other character becomes `_`, and
/// leading/trailing underscores are stripped.
pub fn sanitize_filename(topic: &str) -> String {
    let kept: String = topic
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let stem = kept.trim_matches('_');
    if stem.is_empty() {
        FALLBACK_STEM.to_owned()
    } else {
        stem.to_owned()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/filename.rs"]
mod tests;
