use super::*;

// Native tests exercise the non-browser path, where the raw form passes
// through unchanged.

#[test]
fn missing_timestamp_renders_empty() {
    assert_eq!(format_local(None), "");
}

#[test]
fn empty_timestamp_renders_empty() {
    assert_eq!(format_local(Some("")), "");
}

#[test]
fn present_timestamp_is_preserved() {
    assert_eq!(format_local(Some("2024-01-01T00:00:00Z")), "2024-01-01T00:00:00Z");
}
