//! Tile payloads
//!
//! A [`TileContent`] carries one [`TileVisual`], which in turn carries up to
//! one [`TileBinding`] per [`TileSize`]. Each binding is rendered with the
//! template its content kind selects for that size.

pub mod content;
pub mod populate;

pub use content::{
    TileBackgroundImage, TileBasicImage, TileBasicText, TileBindingContent,
    TileBindingContentAdaptive, TileBindingContentContact, TileBindingContentIconic,
    TileBindingContentPeople, TileBindingContentPhotos, TilePeekImage,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};
use tracing::{debug, instrument};

use crate::element::{TileBindingElement, TileElement, TileVisualElement};
use crate::error::{Error, Result};
use crate::payload::Payload;
use crate::template::{select_template, TileSize};
use crate::validate::Validate;
use crate::xml::{Element, XmlNode};

/// Which app identity the shell draws on the tile
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, IntoStaticStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum TileBranding {
    #[default]
    Auto,
    None,
    Logo,
    Name,
    NameAndLogo,
}

impl TileBranding {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Vertical alignment of the text block on a tile
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, IntoStaticStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum TileTextStacking {
    #[default]
    Top,
    Center,
    Bottom,
}

impl TileTextStacking {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Root of a tile payload
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TileContent {
    pub visual: TileVisual,
}

impl TileContent {
    pub const fn new(visual: TileVisual) -> Self {
        Self { visual }
    }
}

impl Validate for TileContent {
    fn validate(&self) -> Result<()> {
        self.visual.validate()
    }
}

impl Payload for TileContent {
    #[instrument(skip_all)]
    fn build(&self) -> Result<Element> {
        let visual = self.visual.build()?;
        Ok(TileElement { visual }.to_element())
    }
}

/// Tile-wide visual settings plus the per-size bindings
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct TileVisual {
    pub version: Option<u32>,
    pub lang: Option<String>,
    pub base_uri: Option<String>,
    pub branding: TileBranding,
    pub add_image_query: Option<bool>,
    pub content_id: Option<String>,
    pub display_name: Option<String>,
    pub arguments: Option<String>,
    /// Lock screen detail lines, emitted on the Wide binding
    pub lock_detailed_status1: Option<String>,
    pub lock_detailed_status2: Option<String>,
    pub lock_detailed_status3: Option<String>,
    pub tile_small: Option<TileBinding>,
    pub tile_medium: Option<TileBinding>,
    pub tile_wide: Option<TileBinding>,
    pub tile_large: Option<TileBinding>,
}

impl TileVisual {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the binding used at `size`, replacing any previous one
    #[must_use]
    pub fn with_binding(mut self, size: TileSize, binding: TileBinding) -> Self {
        let slot = match size {
            TileSize::Small => &mut self.tile_small,
            TileSize::Medium => &mut self.tile_medium,
            TileSize::Wide => &mut self.tile_wide,
            TileSize::Large => &mut self.tile_large,
        };
        *slot = Some(binding);
        self
    }

    #[must_use]
    pub fn with_branding(mut self, branding: TileBranding) -> Self {
        self.branding = branding;
        self
    }

    /// Bindings that are set, smallest size first
    pub fn bindings(&self) -> impl Iterator<Item = (TileSize, &TileBinding)> + '_ {
        [
            (TileSize::Small, self.tile_small.as_ref()),
            (TileSize::Medium, self.tile_medium.as_ref()),
            (TileSize::Wide, self.tile_wide.as_ref()),
            (TileSize::Large, self.tile_large.as_ref()),
        ]
        .into_iter()
        .filter_map(|(size, binding)| binding.map(|binding| (size, binding)))
    }

    fn build(&self) -> Result<TileVisualElement> {
        let mut bindings = Vec::new();
        for (size, binding) in self.bindings() {
            let mut element = binding.build(size)?;
            if size == TileSize::Wide {
                element.lock_detailed_status1 = self.lock_detailed_status1.clone();
                element.lock_detailed_status2 = self.lock_detailed_status2.clone();
                element.lock_detailed_status3 = self.lock_detailed_status3.clone();
            }
            bindings.push(element);
        }

        Ok(TileVisualElement {
            version: self.version,
            lang: self.lang.clone(),
            base_uri: self.base_uri.clone(),
            branding: self.branding,
            add_image_query: self.add_image_query,
            content_id: self.content_id.clone(),
            display_name: self.display_name.clone(),
            arguments: self.arguments.clone(),
            bindings,
        })
    }
}

impl Validate for TileVisual {
    fn validate(&self) -> Result<()> {
        if self.bindings().next().is_none() {
            return Err(Error::validation("tile visual has no bindings"));
        }
        self.bindings()
            .try_for_each(|(_, binding)| binding.content.validate())
    }
}

/// Content for a single tile size plus binding-level overrides
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TileBinding {
    pub content: TileBindingContent,
    #[cfg_attr(feature = "serde", serde(default))]
    pub lang: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub base_uri: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub branding: TileBranding,
    #[cfg_attr(feature = "serde", serde(default))]
    pub add_image_query: Option<bool>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub content_id: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub display_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub arguments: Option<String>,
}

impl TileBinding {
    pub fn new(content: impl Into<TileBindingContent>) -> Self {
        Self {
            content: content.into(),
            lang: None,
            base_uri: None,
            branding: TileBranding::default(),
            add_image_query: None,
            content_id: None,
            display_name: None,
            arguments: None,
        }
    }

    #[must_use]
    pub fn with_branding(mut self, branding: TileBranding) -> Self {
        self.branding = branding;
        self
    }

    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_arguments(mut self, arguments: impl Into<String>) -> Self {
        self.arguments = Some(arguments.into());
        self
    }

    /// Select the template for `size`, then populate a fresh binding element
    pub fn build(&self, size: TileSize) -> Result<TileBindingElement> {
        let template = select_template(self.content.kind(), size)?;
        let mut element = TileBindingElement {
            lang: self.lang.clone(),
            base_uri: self.base_uri.clone(),
            branding: self.branding,
            add_image_query: self.add_image_query,
            content_id: self.content_id.clone(),
            display_name: self.display_name.clone(),
            arguments: self.arguments.clone(),
            ..TileBindingElement::new(template)
        };
        self.content.populate(&mut element, size)?;

        debug!(%size, %template, children = element.children.len(), "populated tile binding");
        Ok(element)
    }
}
