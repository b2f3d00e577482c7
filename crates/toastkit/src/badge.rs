//! Badge payloads
//!
//! A badge shows either a small glyph or a number over an app tile.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};
use tracing::debug;

use crate::element::BadgeElement;
use crate::error::{Error, Result};
use crate::payload::Payload;
use crate::validate::Validate;
use crate::xml::{Element, XmlNode};

/// Predefined badge glyphs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, IntoStaticStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum BadgeGlyph {
    None,
    Activity,
    Alarm,
    Alert,
    Attention,
    Available,
    Away,
    Busy,
    Error,
    NewMessage,
    Paused,
    Playing,
    Unavailable,
}

impl BadgeGlyph {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Glyph badge. The glyph starts out unset and must be chosen before rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BadgeGlyphContent {
    pub glyph: Option<BadgeGlyph>,
}

impl BadgeGlyphContent {
    pub const fn new(glyph: BadgeGlyph) -> Self {
        Self { glyph: Some(glyph) }
    }
}

impl Validate for BadgeGlyphContent {
    fn validate(&self) -> Result<()> {
        match self.glyph {
            Some(_) => Ok(()),
            None => Err(Error::validation("glyph unset")),
        }
    }
}

impl Payload for BadgeGlyphContent {
    fn build(&self) -> Result<Element> {
        let glyph = self
            .glyph
            .ok_or_else(|| Error::validation("glyph unset"))?;
        debug!(glyph = glyph.as_str(), "building glyph badge");
        Ok(BadgeElement {
            value: glyph.as_str().to_string(),
        }
        .to_element())
    }
}

/// Numeric badge. Zero clears the badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BadgeNumericContent {
    pub number: u32,
}

impl BadgeNumericContent {
    pub const fn new(number: u32) -> Self {
        Self { number }
    }
}

impl Validate for BadgeNumericContent {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl Payload for BadgeNumericContent {
    fn build(&self) -> Result<Element> {
        Ok(BadgeElement {
            value: self.number.to_string(),
        }
        .to_element())
    }
}

/// Either kind of badge
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum BadgeContent {
    // Numeric first: an untagged glyph badge with no fields matches anything.
    Numeric(BadgeNumericContent),
    Glyph(BadgeGlyphContent),
}

impl Validate for BadgeContent {
    fn validate(&self) -> Result<()> {
        match self {
            Self::Numeric(numeric) => numeric.validate(),
            Self::Glyph(glyph) => glyph.validate(),
        }
    }
}

impl Payload for BadgeContent {
    fn build(&self) -> Result<Element> {
        match self {
            Self::Numeric(numeric) => numeric.build(),
            Self::Glyph(glyph) => glyph.build(),
        }
    }
}

impl From<BadgeGlyphContent> for BadgeContent {
    fn from(content: BadgeGlyphContent) -> Self {
        Self::Glyph(content)
    }
}

impl From<BadgeNumericContent> for BadgeContent {
    fn from(content: BadgeNumericContent) -> Self {
        Self::Numeric(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_unset_glyph_is_rejected() {
        let err = BadgeGlyphContent::default().validate().err();
        assert_eq!(err.map(|e| e.message().to_string()).as_deref(), Some("invalid content: glyph unset"));
    }

    #[test]
    fn test_every_glyph_validates() {
        for glyph in BadgeGlyph::iter() {
            assert!(BadgeGlyphContent::new(glyph).validate().is_ok(), "{glyph:?}");
        }
    }

    #[test]
    fn test_glyph_literals() {
        assert_eq!(BadgeGlyph::NewMessage.as_str(), "newMessage");
        assert_eq!(BadgeGlyph::None.as_str(), "none");
    }

    #[test]
    fn test_zero_is_a_valid_number() -> Result<()> {
        let zero = BadgeNumericContent::new(0);
        assert!(zero.validate().is_ok());
        assert_eq!(crate::xml::to_string(&zero.to_element()?), r#"<badge value="0"/>"#);
        Ok(())
    }
}
