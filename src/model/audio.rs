/// Interpretation of a slide's `audioUrl`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AudioRef {
    /// Base64 payload with any `data:<media-type>;base64,` prefix already removed.
    Inline(String),
    /// Content-addressed (`ipfs://<hash>`) or HTTP(S) locator.
    Locator(String),
}

impl AudioRef {
    pub fn parse(reference: &str) -> Self {
        let trimmed = reference.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("ipfs://") || lower.starts_with("http://") || lower.starts_with("https://")
        {
            return Self::Locator(trimmed.to_string());
        }
        Self::Inline(strip_data_prefix(trimmed).to_string())
    }
}

/// Drop a `data:...,` prefix, returning the payload after the first comma.
pub fn strip_data_prefix(audio: &str) -> &str {
    if audio.starts_with("data:") {
        return audio.split_once(',').map(|(_, payload)| payload).unwrap_or("");
    }
    audio
}

/// Resolve an `ipfs://` locator against a gateway; other locators pass through.
pub fn locator_url(locator: &str, gateway: &str) -> String {
    match locator.strip_prefix("ipfs://") {
        Some(hash) => format!("{}/{}", gateway.trim_end_matches('/'), hash.trim_start_matches('/')),
        None => locator.to_string(),
    }
}
