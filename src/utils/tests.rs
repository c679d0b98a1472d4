use super::*;
use scraper::Html;

#[test]
fn test_parse_selector_unsafe_valid() {
    let selector = parse_selector_unsafe("meta[name='description' i]", "test");
    let document = Html::parse_document(r#"<meta name="DESCRIPTION" content="x">"#);
    assert_eq!(document.select(&selector).count(), 1);
}

#[test]
#[should_panic(expected = "Failed to parse CSS selector")]
fn test_parse_selector_unsafe_invalid_panics() {
    parse_selector_unsafe("a[", "test");
}

#[test]
fn test_duration_to_ms() {
    assert_eq!(duration_to_ms(Duration::from_millis(1500)), 1500);
    assert_eq!(duration_to_ms(Duration::from_micros(999)), 0);
}
