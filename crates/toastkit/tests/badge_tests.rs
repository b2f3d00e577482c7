use strum::IntoEnumIterator;
use toastkit::{
    BadgeContent, BadgeGlyph, BadgeGlyphContent, BadgeNumericContent, ErrorKind, Payload, Validate,
};

#[test]
fn test_glyph_badge() -> Result<(), Box<dyn std::error::Error>> {
    let badge = BadgeGlyphContent::new(BadgeGlyph::Alert);
    assert_eq!(badge.to_xml()?, r#"<badge value="alert"/>"#);
    Ok(())
}

#[test]
fn test_numeric_badge() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(BadgeNumericContent::new(42).to_xml()?, r#"<badge value="42"/>"#);
    assert_eq!(BadgeNumericContent::new(0).to_xml()?, r#"<badge value="0"/>"#);
    Ok(())
}

#[test]
fn test_unset_glyph_produces_no_output() {
    let result = BadgeContent::from(BadgeGlyphContent::default()).to_xml();
    match result {
        Err(err) => assert_eq!(
            err.kind(),
            &ErrorKind::ContentValidation {
                reason: "glyph unset".to_string()
            }
        ),
        Ok(xml) => panic!("expected a validation error, got {xml}"),
    }
}

#[test]
fn test_all_glyphs_render() -> Result<(), Box<dyn std::error::Error>> {
    for glyph in BadgeGlyph::iter() {
        let badge = BadgeGlyphContent::new(glyph);
        badge.validate()?;
        let xml = badge.to_xml()?;
        assert_eq!(xml, format!(r#"<badge value="{}"/>"#, glyph.as_str()));
    }
    Ok(())
}

#[test]
fn test_deserialize_badges() -> Result<(), Box<dyn std::error::Error>> {
    let numeric: BadgeContent = serde_json::from_str(r#"{"number": 7}"#)?;
    assert_eq!(numeric, BadgeContent::Numeric(BadgeNumericContent::new(7)));

    let glyph: BadgeContent = serde_json::from_str(r#"{"glyph": "newMessage"}"#)?;
    assert_eq!(glyph.to_xml()?, r#"<badge value="newMessage"/>"#);

    let unset: BadgeContent = serde_json::from_str("{}")?;
    assert!(unset.validate().is_err());
    Ok(())
}
