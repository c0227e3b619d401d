use super::*;

fn by_chars(s: &str) -> f32 {
    s.chars().count() as f32
}

#[test]
fn wraps_greedily_at_width() {
    let lines = wrap_words("one two three four", 9.0, by_chars);
    assert_eq!(lines, vec!["one two", "three", "four"]);
}

#[test]
fn fitting_text_stays_on_one_line() {
    assert_eq!(wrap_words("short text", 100.0, by_chars), vec!["short text"]);
}

#[test]
fn collapses_whitespace() {
    assert_eq!(
        wrap_words("  a \t b\n c  ", 100.0, by_chars),
        vec!["a b c"]
    );
}

#[test]
fn oversized_word_gets_its_own_line_without_empty_lines() {
    let lines = wrap_words("supercalifragilistic is long", 5.0, by_chars);
    assert_eq!(lines, vec!["supercalifragilistic", "is", "long"]);
    assert!(lines.iter().all(|l| !l.is_empty()));
}

#[test]
fn empty_text_has_no_lines() {
    assert!(wrap_words("", 10.0, by_chars).is_empty());
    assert!(wrap_words("   ", 10.0, by_chars).is_empty());
}

#[test]
fn garbage_font_bytes_are_rejected() {
    let err = FontFace::from_bytes(b"not a font".to_vec()).unwrap_err();
    assert!(matches!(err, SlidecastError::Render(_)));
}

#[test]
fn missing_font_file_is_an_error() {
    assert!(FontFace::load(Path::new("target/definitely/missing.ttf")).is_err());
}
