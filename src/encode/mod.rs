//! Segment encoding, duration probing and concatenation through the system `ffmpeg`.

pub mod ffmpeg;
