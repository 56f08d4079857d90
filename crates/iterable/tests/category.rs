use iterable::{Category, Error, Ordinary, Tag};

#[test]
fn test_tags() {
    assert_eq!(Ordinary::TAG, Tag::Ordinary);
    assert!(!Tag::Ordinary.is_contiguous());
    assert!(Tag::Contiguous.is_contiguous());
    assert_eq!(Tag::Ordinary.to_string(), "ordinary");
    assert_eq!(Tag::Contiguous.to_string(), "contiguous");
}

#[cfg(feature = "contiguous")]
#[test]
fn test_contiguous_tag() {
    assert_eq!(iterable::Contiguous::TAG, Tag::Contiguous);
}

#[cfg(feature = "serde")]
#[test]
fn test_tag_serde() -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(&Tag::Contiguous)?;
    assert_eq!(json, "\"Contiguous\"");
    assert_eq!(serde_json::from_str::<Tag>(&json)?, Tag::Contiguous);

    Ok(())
}

#[test]
fn test_error_display() {
    let error = Error::OutOfRange {
        position: 7,
        len: 5,
    };
    assert_eq!(
        error.to_string(),
        "Cursor position 7 is out of range for a host of length 5"
    );

    let source: &dyn std::error::Error = &error;
    assert!(source.source().is_none());
}
