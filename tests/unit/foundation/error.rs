use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        KeyImageError::invalid_argument("x")
            .to_string()
            .contains("invalid argument:")
    );
    assert!(
        KeyImageError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        KeyImageError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        KeyImageError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn only_invalid_argument_reports_as_such() {
    assert!(KeyImageError::invalid_argument("seed").is_invalid_argument());
    assert!(!KeyImageError::validation("sheet").is_invalid_argument());
    assert!(!KeyImageError::render("buf").is_invalid_argument());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = KeyImageError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
