use assistive_backend::application::ports::Synthesizer;
use assistive_backend::infrastructure::audio::{GoogleTranslateSynthesizer, split_segments};

#[test]
fn given_short_text_when_splitting_then_returns_single_segment() {
    assert_eq!(split_segments("  hello   world "), vec!["hello world"]);
}

#[test]
fn given_blank_text_when_splitting_then_returns_no_segments() {
    assert!(split_segments(" \n ").is_empty());
}

#[test]
fn given_long_text_when_splitting_then_segments_stay_within_limit_and_keep_words() {
    let text = "speak ".repeat(60);

    let segments = split_segments(&text);

    assert!(segments.len() > 1);
    assert!(segments.iter().all(|s| s.chars().count() <= 100));
    assert_eq!(segments.join(" "), text.trim());
}

#[test]
fn given_oversized_word_when_splitting_then_cuts_on_char_boundaries() {
    let word = "ந".repeat(250);

    let segments = split_segments(&word);

    assert_eq!(
        segments.iter().map(|s| s.chars().count()).collect::<Vec<_>>(),
        vec![100, 100, 50]
    );
}

#[test]
fn given_configured_languages_when_checking_support_then_matches_exact_tags() {
    let synthesizer =
        GoogleTranslateSynthesizer::new(None, vec!["en".to_string(), " hi ".to_string()]);

    assert!(synthesizer.supports_language("en"));
    assert!(synthesizer.supports_language("hi"));
    assert!(!synthesizer.supports_language("kn"));
}
