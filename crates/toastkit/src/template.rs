//! Tile template selection
//!
//! A tile binding names one of the platform's predefined layouts through its
//! `template` attribute. The layout depends on what kind of content the
//! binding carries and which tile size it is rendered for.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};
use tracing::debug;

use crate::error::{Error, ErrorKind, Result};

/// Logical kind of the content placed in a tile binding
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ContentKind {
    Adaptive,
    Contact,
    Iconic,
    People,
    Photos,
}

/// Tile size tier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum TileSize {
    Small,
    Medium,
    Wide,
    Large,
}

/// Platform-recognized template identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, IntoStaticStr, EnumIter)]
pub enum TemplateName {
    TileSmall,
    TileMedium,
    TileWide,
    TileLarge,
    TileSquare71x71IconWithBadge,
    TileSquare150x150IconWithBadge,
}

impl TemplateName {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for TemplateName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the template for `kind` rendered at `size`.
///
/// Iconic content only has Small and Medium layouts; every other kind maps
/// through the adaptive size table.
pub fn select_template(kind: ContentKind, size: TileSize) -> Result<TemplateName> {
    let template = match kind {
        ContentKind::Iconic => match size {
            TileSize::Small => TemplateName::TileSquare71x71IconWithBadge,
            TileSize::Medium => TemplateName::TileSquare150x150IconWithBadge,
            TileSize::Wide | TileSize::Large => {
                return Err(Error::new(ErrorKind::UnsupportedSize { kind, size }));
            }
        },
        ContentKind::Adaptive | ContentKind::Contact | ContentKind::People | ContentKind::Photos => {
            adaptive_template(size)
        }
    };

    debug!(%kind, %size, %template, "selected tile template");
    Ok(template)
}

const fn adaptive_template(size: TileSize) -> TemplateName {
    match size {
        TileSize::Small => TemplateName::TileSmall,
        TileSize::Medium => TemplateName::TileMedium,
        TileSize::Wide => TemplateName::TileWide,
        TileSize::Large => TemplateName::TileLarge,
    }
}
