//! Typed binding content for tiles

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::adaptive::{AdaptiveChild, AdaptiveImageCrop};
use crate::bounded::BoundedVec;
use crate::element::{ImageElement, ImagePlacement, TextElement};
use crate::error::{Error, Result};
use crate::template::ContentKind;
use crate::tile::TileTextStacking;
use crate::validate::Validate;

/// An image with no layout hints
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct TileBasicImage {
    pub source: String,
    pub alternate_text: Option<String>,
    pub add_image_query: Option<bool>,
}

impl TileBasicImage {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }
}

impl From<&TileBasicImage> for ImageElement {
    fn from(image: &TileBasicImage) -> Self {
        Self {
            alt: image.alternate_text.clone(),
            add_image_query: image.add_image_query,
            ..Self::new(image.source.clone())
        }
    }
}

/// Text with no layout hints
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TileBasicText {
    pub text: String,
    pub lang: Option<String>,
}

impl TileBasicText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: None,
        }
    }
}

impl From<&TileBasicText> for TextElement {
    fn from(text: &TileBasicText) -> Self {
        Self {
            lang: text.lang.clone(),
            ..Self::new(text.text.clone())
        }
    }
}

/// Full-bleed image drawn behind the tile content
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct TileBackgroundImage {
    pub source: String,
    pub alternate_text: Option<String>,
    pub add_image_query: Option<bool>,
    /// Black overlay opacity, 0 to 100
    pub hint_overlay: Option<u32>,
    pub hint_crop: AdaptiveImageCrop,
}

impl TileBackgroundImage {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }
}

impl From<&TileBackgroundImage> for ImageElement {
    fn from(image: &TileBackgroundImage) -> Self {
        Self {
            alt: image.alternate_text.clone(),
            add_image_query: image.add_image_query,
            placement: ImagePlacement::Background,
            crop: image.hint_crop,
            overlay: image.hint_overlay,
            ..Self::new(image.source.clone())
        }
    }
}

/// Image that slides in from the top of the tile
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct TilePeekImage {
    pub source: String,
    pub alternate_text: Option<String>,
    pub add_image_query: Option<bool>,
    pub hint_overlay: Option<u32>,
    pub hint_crop: AdaptiveImageCrop,
}

impl TilePeekImage {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }
}

impl From<&TilePeekImage> for ImageElement {
    fn from(image: &TilePeekImage) -> Self {
        Self {
            alt: image.alternate_text.clone(),
            add_image_query: image.add_image_query,
            placement: ImagePlacement::Peek,
            crop: image.hint_crop,
            overlay: image.hint_overlay,
            ..Self::new(image.source.clone())
        }
    }
}

fn check_overlay(overlay: Option<u32>, what: &str) -> Result<()> {
    match overlay {
        Some(value) if value > 100 => Err(Error::validation(format!(
            "{what} hint-overlay must be between 0 and 100, got {value}"
        ))),
        _ => Ok(()),
    }
}

/// Free-form adaptive layout
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct TileBindingContentAdaptive {
    pub children: Vec<AdaptiveChild>,
    pub background_image: Option<TileBackgroundImage>,
    pub peek_image: Option<TilePeekImage>,
    pub text_stacking: TileTextStacking,
}

impl TileBindingContentAdaptive {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_child(mut self, child: impl Into<AdaptiveChild>) -> Self {
        self.children.push(child.into());
        self
    }

    #[must_use]
    pub fn with_background_image(mut self, image: TileBackgroundImage) -> Self {
        self.background_image = Some(image);
        self
    }

    #[must_use]
    pub fn with_peek_image(mut self, image: TilePeekImage) -> Self {
        self.peek_image = Some(image);
        self
    }

    #[must_use]
    pub fn with_text_stacking(mut self, stacking: TileTextStacking) -> Self {
        self.text_stacking = stacking;
        self
    }
}

impl Validate for TileBindingContentAdaptive {
    fn validate(&self) -> Result<()> {
        if let Some(image) = &self.background_image {
            check_overlay(image.hint_overlay, "background image")?;
        }
        if let Some(image) = &self.peek_image {
            check_overlay(image.hint_overlay, "peek image")?;
        }
        self.children.validate()
    }
}

/// A contact's picture with their name underneath
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TileBindingContentContact {
    pub image: Option<TileBasicImage>,
    /// Not shown on Small tiles
    pub text: Option<TileBasicText>,
}

impl TileBindingContentContact {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_image(mut self, image: TileBasicImage) -> Self {
        self.image = Some(image);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TileBasicText) -> Self {
        self.text = Some(text);
        self
    }
}

/// An icon paired with the badge count
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TileBindingContentIconic {
    pub icon: Option<TileBasicImage>,
}

impl TileBindingContentIconic {
    pub fn new(icon: TileBasicImage) -> Self {
        Self { icon: Some(icon) }
    }
}

/// Circular people pictures that animate in sequence
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TileBindingContentPeople {
    pub images: Vec<TileBasicImage>,
}

impl TileBindingContentPeople {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_image(mut self, image: TileBasicImage) -> Self {
        self.images.push(image);
        self
    }
}

/// Most photos a Photos tile will cycle through
pub const MAX_PHOTOS: usize = 12;

/// Photo slideshow of up to twelve images
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TileBindingContentPhotos {
    pub images: BoundedVec<TileBasicImage, MAX_PHOTOS>,
}

impl TileBindingContentPhotos {
    pub const MAX_IMAGES: usize = MAX_PHOTOS;

    pub fn new() -> Self {
        Self::default()
    }

    /// Append a photo; fails once the slideshow already holds [`Self::MAX_IMAGES`]
    pub fn add_image(&mut self, image: TileBasicImage) -> Result<()> {
        self.images
            .push(image)
            .map_err(|_| Error::capacity(Self::MAX_IMAGES, "photos"))
    }
}

/// Content of one tile binding
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum TileBindingContent {
    Adaptive(TileBindingContentAdaptive),
    Contact(TileBindingContentContact),
    Iconic(TileBindingContentIconic),
    People(TileBindingContentPeople),
    Photos(TileBindingContentPhotos),
}

impl TileBindingContent {
    pub const fn kind(&self) -> ContentKind {
        match self {
            Self::Adaptive(_) => ContentKind::Adaptive,
            Self::Contact(_) => ContentKind::Contact,
            Self::Iconic(_) => ContentKind::Iconic,
            Self::People(_) => ContentKind::People,
            Self::Photos(_) => ContentKind::Photos,
        }
    }
}

impl Validate for TileBindingContent {
    fn validate(&self) -> Result<()> {
        match self {
            Self::Adaptive(adaptive) => adaptive.validate(),
            Self::Contact(_) | Self::Iconic(_) | Self::People(_) | Self::Photos(_) => Ok(()),
        }
    }
}

impl From<TileBindingContentAdaptive> for TileBindingContent {
    fn from(content: TileBindingContentAdaptive) -> Self {
        Self::Adaptive(content)
    }
}

impl From<TileBindingContentContact> for TileBindingContent {
    fn from(content: TileBindingContentContact) -> Self {
        Self::Contact(content)
    }
}

impl From<TileBindingContentIconic> for TileBindingContent {
    fn from(content: TileBindingContentIconic) -> Self {
        Self::Iconic(content)
    }
}

impl From<TileBindingContentPeople> for TileBindingContent {
    fn from(content: TileBindingContentPeople) -> Self {
        Self::People(content)
    }
}

impl From<TileBindingContentPhotos> for TileBindingContent {
    fn from(content: TileBindingContentPhotos) -> Self {
        Self::Photos(content)
    }
}
