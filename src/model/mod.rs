//! Boundary data model: slides, brand overlay, render requests and TTS shapes.
//!
//! Every type here is plain Serde data using the content service's camelCase wire names.

/// Embedded audio references.
pub mod audio;
/// Render request, formats and TTS shapes.
pub mod request;
/// Slide and brand records.
pub mod slide;

#[cfg(test)]
#[path = "../../tests/unit/model/model.rs"]
mod tests;
