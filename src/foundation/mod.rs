/// Process-wide settings.
pub mod config;
/// Error taxonomy shared by every component.
pub mod error;
