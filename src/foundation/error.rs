/// Convenience result type used across slidecast.
pub type SlidecastResult<T> = Result<T, SlidecastError>;

/// Top-level error taxonomy used by every component.
#[derive(thiserror::Error, Debug)]
pub enum SlidecastError {
    /// A required setting (usually a credential) is missing.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Invalid caller-provided data (unsupported format, empty slide list, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// An external HTTP dependency failed or answered with something unusable.
    #[error("service error: {0}")]
    Service(#[from] ServiceError),

    /// Narration audio was missing or malformed.
    #[error("narration error: {0}")]
    Narration(String),

    /// The storage pinning service rejected an upload.
    #[error("pinata error: {0}")]
    Pinning(String),

    /// The encoding toolchain exited unsuccessfully.
    #[error("video generation error: {0}")]
    VideoGeneration(String),

    /// Slide rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Failures talking to an HTTP collaborator.
#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    /// The request never produced a response (connect, timeout, TLS, ...).
    #[error("request to {url} failed: {message}")]
    Request {
        /// Endpoint that was called.
        url: String,
        /// Transport diagnostic.
        message: String,
    },

    /// The service answered with a non-2xx status.
    #[error("{url} returned {status}: {body}")]
    Status {
        /// Endpoint that was called.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// The body could not be decoded into the expected shape.
    #[error("malformed response from {url}: {message}")]
    MalformedResponse {
        /// Endpoint that was called.
        url: String,
        /// Decoder diagnostic.
        message: String,
    },
}

impl SlidecastError {
    /// Build a [`SlidecastError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`SlidecastError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SlidecastError::Narration`] value.
    pub fn narration(msg: impl Into<String>) -> Self {
        Self::Narration(msg.into())
    }

    /// Build a [`SlidecastError::Pinning`] value.
    pub fn pinning(msg: impl Into<String>) -> Self {
        Self::Pinning(msg.into())
    }

    /// Build a [`SlidecastError::VideoGeneration`] value.
    pub fn video_generation(msg: impl Into<String>) -> Self {
        Self::VideoGeneration(msg.into())
    }

    /// Build a [`SlidecastError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
