//! Content-to-markup pipeline
//!
//! validate → select template → populate → serialize. Any step failing aborts
//! the payload; there is no partial output.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::badge::BadgeContent;
use crate::error::{Error, Result};
use crate::tile::TileContent;
use crate::toast::ToastContent;
use crate::validate::Validate;
use crate::xml::{writer, Element, WriterConfig};

/// Content that can be rendered into a notification payload
pub trait Payload: Validate {
    /// Lower content that has already passed [`Validate::validate`]
    fn build(&self) -> Result<Element>;

    /// Validate, then lower. Text or attribute values holding characters
    /// XML 1.0 forbids are a [`ContentValidation`](crate::ErrorKind::ContentValidation) error.
    fn to_element(&self) -> Result<Element> {
        self.validate()?;
        let element = self.build()?;
        if let Some((tag, c)) = element.find_invalid_char() {
            return Err(Error::validation(format!(
                "<{tag}> contains {c:?}, which is not allowed in XML"
            )));
        }
        Ok(element)
    }

    fn to_xml(&self) -> Result<String> {
        self.to_xml_with_config(&WriterConfig::default())
    }

    fn to_xml_with_config(&self, config: &WriterConfig) -> Result<String> {
        let element = self.to_element()?;
        Ok(writer::to_string_with_config(&element, config))
    }
}

/// Any notification payload, tagged by `kind`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Notification {
    Badge(BadgeContent),
    Tile(TileContent),
    Toast(ToastContent),
}

impl Notification {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Badge(_) => "badge",
            Self::Tile(_) => "tile",
            Self::Toast(_) => "toast",
        }
    }
}

impl Validate for Notification {
    fn validate(&self) -> Result<()> {
        match self {
            Self::Badge(badge) => badge.validate(),
            Self::Tile(tile) => tile.validate(),
            Self::Toast(toast) => toast.validate(),
        }
    }
}

impl Payload for Notification {
    #[instrument(skip_all, fields(kind = self.kind()))]
    fn build(&self) -> Result<Element> {
        match self {
            Self::Badge(badge) => badge.build(),
            Self::Tile(tile) => tile.build(),
            Self::Toast(toast) => toast.build(),
        }
    }
}

impl From<BadgeContent> for Notification {
    fn from(badge: BadgeContent) -> Self {
        Self::Badge(badge)
    }
}

impl From<TileContent> for Notification {
    fn from(tile: TileContent) -> Self {
        Self::Tile(tile)
    }
}

impl From<ToastContent> for Notification {
    fn from(toast: ToastContent) -> Self {
        Self::Toast(toast)
    }
}
