use crate::model::slide::Slide;

/// Floor for any estimated slide duration, in seconds.
pub const MIN_SLIDE_SECONDS: f64 = 5.0;
/// Assumed narration pace.
pub const WORDS_PER_SECOND: f64 = 2.2;
/// Breathing room added after the estimated narration.
pub const TAIL_SECONDS: f64 = 1.5;

/// Declared duration if usable, otherwise a reading-pace estimate of the narration.
pub fn estimate_duration(slide: &Slide) -> f64 {
    if let Some(declared) = slide.declared_duration() {
        return declared;
    }
    let words = slide.narration_word_count();
    if words == 0 {
        return MIN_SLIDE_SECONDS;
    }
    (words as f64 / WORDS_PER_SECOND + TAIL_SECONDS).max(MIN_SLIDE_SECONDS)
}

/// Extend `estimate` to cover the measured audio length; never shortens.
pub fn reconcile(estimate: f64, measured: Option<f64>) -> f64 {
    match measured {
        Some(m) if m.is_finite() && m > estimate => m,
        _ => estimate,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/duration.rs"]
mod tests;
