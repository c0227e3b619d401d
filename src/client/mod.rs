//! HTTP collaborators: content service, pinning service and media gateway.
//!
//! All calls are blocking, single-attempt and bounded by a client-level timeout.

/// Slide generation, slide update, TTS and project persistence.
pub mod content;
/// Locator downloads (`ipfs://` through the gateway, or plain HTTP).
pub mod gateway;
pub(crate) mod http;
/// IPFS pinning uploads.
pub mod pinning;
