//! Adaptive content shared by tiles and toasts
//!
//! Adaptive text, images and groups are the building blocks of the
//! `TileSmall`..`TileLarge` templates and of the `ToastGeneric` binding.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

use crate::element::{GroupElement, ImageElement, SubgroupElement, TextElement};
use crate::error::{Error, Result};
use crate::validate::Validate;
use crate::xml::{Element, XmlNode};

/// Text style hint
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, IntoStaticStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum AdaptiveTextStyle {
    #[default]
    Default,
    Caption,
    CaptionSubtle,
    Body,
    BodySubtle,
    Base,
    BaseSubtle,
    Subtitle,
    SubtitleSubtle,
    Title,
    TitleSubtle,
    TitleNumeral,
    Subheader,
    SubheaderSubtle,
    SubheaderNumeral,
    Header,
    HeaderSubtle,
    HeaderNumeral,
}

impl AdaptiveTextStyle {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Horizontal alignment of text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, IntoStaticStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum AdaptiveTextAlign {
    #[default]
    Default,
    Auto,
    Left,
    Center,
    Right,
}

impl AdaptiveTextAlign {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Crop applied to an image
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, IntoStaticStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum AdaptiveImageCrop {
    #[default]
    Default,
    None,
    Circle,
}

impl AdaptiveImageCrop {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Horizontal alignment of an inline image
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, IntoStaticStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum AdaptiveImageAlign {
    #[default]
    Default,
    Stretch,
    Left,
    Center,
    Right,
}

impl AdaptiveImageAlign {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Vertical alignment of text inside a subgroup
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, IntoStaticStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum AdaptiveSubgroupTextStacking {
    #[default]
    Default,
    Top,
    Center,
    Bottom,
}

impl AdaptiveSubgroupTextStacking {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// A line of adaptive text
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct AdaptiveText {
    pub text: String,
    pub lang: Option<String>,
    pub hint_style: AdaptiveTextStyle,
    pub hint_wrap: Option<bool>,
    pub hint_max_lines: Option<u32>,
    pub hint_min_lines: Option<u32>,
    pub hint_align: AdaptiveTextAlign,
}

impl AdaptiveText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: AdaptiveTextStyle) -> Self {
        self.hint_style = style;
        self
    }

    #[must_use]
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.hint_wrap = Some(wrap);
        self
    }

    #[must_use]
    pub fn with_max_lines(mut self, lines: u32) -> Self {
        self.hint_max_lines = Some(lines);
        self
    }

    #[must_use]
    pub fn with_min_lines(mut self, lines: u32) -> Self {
        self.hint_min_lines = Some(lines);
        self
    }

    #[must_use]
    pub fn with_align(mut self, align: AdaptiveTextAlign) -> Self {
        self.hint_align = align;
        self
    }
}

impl Validate for AdaptiveText {
    fn validate(&self) -> Result<()> {
        if self.hint_max_lines == Some(0) {
            return Err(Error::validation("hint-maxLines must be at least 1"));
        }
        if self.hint_min_lines == Some(0) {
            return Err(Error::validation("hint-minLines must be at least 1"));
        }
        if let (Some(min), Some(max)) = (self.hint_min_lines, self.hint_max_lines) {
            if min > max {
                return Err(Error::validation(format!(
                    "hint-minLines ({min}) exceeds hint-maxLines ({max})"
                )));
            }
        }
        Ok(())
    }
}

impl From<&AdaptiveText> for TextElement {
    fn from(text: &AdaptiveText) -> Self {
        Self {
            lang: text.lang.clone(),
            style: text.hint_style,
            wrap: text.hint_wrap,
            max_lines: text.hint_max_lines,
            min_lines: text.hint_min_lines,
            align: text.hint_align,
            ..Self::new(text.text.clone())
        }
    }
}

/// An inline adaptive image
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct AdaptiveImage {
    pub source: String,
    pub alternate_text: Option<String>,
    pub add_image_query: Option<bool>,
    pub hint_crop: AdaptiveImageCrop,
    pub hint_remove_margin: Option<bool>,
    pub hint_align: AdaptiveImageAlign,
}

impl AdaptiveImage {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_alternate_text(mut self, alt: impl Into<String>) -> Self {
        self.alternate_text = Some(alt.into());
        self
    }

    #[must_use]
    pub fn with_crop(mut self, crop: AdaptiveImageCrop) -> Self {
        self.hint_crop = crop;
        self
    }

    #[must_use]
    pub fn with_align(mut self, align: AdaptiveImageAlign) -> Self {
        self.hint_align = align;
        self
    }
}

impl From<&AdaptiveImage> for ImageElement {
    fn from(image: &AdaptiveImage) -> Self {
        Self {
            alt: image.alternate_text.clone(),
            add_image_query: image.add_image_query,
            crop: image.hint_crop,
            remove_margin: image.hint_remove_margin,
            align: image.hint_align,
            ..Self::new(image.source.clone())
        }
    }
}

/// Child of a subgroup
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum AdaptiveSubgroupChild {
    Text(AdaptiveText),
    Image(AdaptiveImage),
}

/// A vertical column inside an [`AdaptiveGroup`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct AdaptiveSubgroup {
    pub children: Vec<AdaptiveSubgroupChild>,
    /// Relative column width, 1 to 100
    pub hint_weight: Option<u32>,
    pub hint_text_stacking: AdaptiveSubgroupTextStacking,
}

impl AdaptiveSubgroup {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_text(mut self, text: AdaptiveText) -> Self {
        self.children.push(AdaptiveSubgroupChild::Text(text));
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: AdaptiveImage) -> Self {
        self.children.push(AdaptiveSubgroupChild::Image(image));
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.hint_weight = Some(weight);
        self
    }
}

impl Validate for AdaptiveSubgroup {
    fn validate(&self) -> Result<()> {
        if let Some(weight) = self.hint_weight {
            if !(1..=100).contains(&weight) {
                return Err(Error::validation(format!(
                    "hint-weight must be between 1 and 100, got {weight}"
                )));
            }
        }
        self.children.iter().try_for_each(|child| match child {
            AdaptiveSubgroupChild::Text(text) => text.validate(),
            AdaptiveSubgroupChild::Image(_) => Ok(()),
        })
    }
}

impl From<&AdaptiveSubgroup> for SubgroupElement {
    fn from(subgroup: &AdaptiveSubgroup) -> Self {
        let children = subgroup
            .children
            .iter()
            .map(|child| match child {
                AdaptiveSubgroupChild::Text(text) => TextElement::from(text).to_element(),
                AdaptiveSubgroupChild::Image(image) => ImageElement::from(image).to_element(),
            })
            .collect();

        Self {
            weight: subgroup.hint_weight,
            text_stacking: subgroup.hint_text_stacking,
            children,
        }
    }
}

/// Columns laid out side by side
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct AdaptiveGroup {
    pub subgroups: Vec<AdaptiveSubgroup>,
}

impl AdaptiveGroup {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_subgroup(mut self, subgroup: AdaptiveSubgroup) -> Self {
        self.subgroups.push(subgroup);
        self
    }
}

impl Validate for AdaptiveGroup {
    fn validate(&self) -> Result<()> {
        self.subgroups.iter().try_for_each(Validate::validate)
    }
}

impl From<&AdaptiveGroup> for GroupElement {
    fn from(group: &AdaptiveGroup) -> Self {
        Self {
            subgroups: group.subgroups.iter().map(SubgroupElement::from).collect(),
        }
    }
}

/// Top-level adaptive child of a tile or toast binding
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum AdaptiveChild {
    Text(AdaptiveText),
    Image(AdaptiveImage),
    Group(AdaptiveGroup),
}

impl AdaptiveChild {
    pub(crate) fn to_element(&self) -> Element {
        match self {
            Self::Text(text) => TextElement::from(text).to_element(),
            Self::Image(image) => ImageElement::from(image).to_element(),
            Self::Group(group) => GroupElement::from(group).to_element(),
        }
    }
}

impl Validate for AdaptiveChild {
    fn validate(&self) -> Result<()> {
        match self {
            Self::Text(text) => text.validate(),
            Self::Image(_) => Ok(()),
            Self::Group(group) => group.validate(),
        }
    }
}

impl From<AdaptiveText> for AdaptiveChild {
    fn from(text: AdaptiveText) -> Self {
        Self::Text(text)
    }
}

impl From<AdaptiveImage> for AdaptiveChild {
    fn from(image: AdaptiveImage) -> Self {
        Self::Image(image)
    }
}

impl From<AdaptiveGroup> for AdaptiveChild {
    fn from(group: AdaptiveGroup) -> Self {
        Self::Group(group)
    }
}
