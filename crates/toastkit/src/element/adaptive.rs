//! `<text>`, `<image>`, `<group>` and `<subgroup>`

use strum::IntoStaticStr;

use super::{flag, number};
use crate::adaptive::{
    AdaptiveImageAlign, AdaptiveImageCrop, AdaptiveSubgroupTextStacking, AdaptiveTextAlign,
    AdaptiveTextStyle,
};
use crate::xml::{AttrSpec, Content, Element, XmlNode};

/// Where an image is drawn
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum ImagePlacement {
    #[default]
    Inline,
    Background,
    Peek,
    AppLogoOverride,
    Hero,
}

impl ImagePlacement {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextElement {
    pub id: Option<u32>,
    pub lang: Option<String>,
    pub style: AdaptiveTextStyle,
    pub wrap: Option<bool>,
    pub max_lines: Option<u32>,
    pub min_lines: Option<u32>,
    pub align: AdaptiveTextAlign,
    pub placement: Option<&'static str>,
    pub text: String,
}

impl TextElement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

impl XmlNode for TextElement {
    const NAME: &'static str = "text";
    const ATTRIBUTES: &'static [AttrSpec<Self>] = &[
        AttrSpec {
            name: "id",
            default: None,
            get: |e| number(e.id),
        },
        AttrSpec {
            name: "lang",
            default: None,
            get: |e| e.lang.clone(),
        },
        AttrSpec {
            name: "hint-style",
            default: Some("default"),
            get: |e| Some(e.style.as_str().to_string()),
        },
        AttrSpec {
            name: "hint-wrap",
            default: Some("false"),
            get: |e| flag(e.wrap),
        },
        AttrSpec {
            name: "hint-maxLines",
            default: None,
            get: |e| number(e.max_lines),
        },
        AttrSpec {
            name: "hint-minLines",
            default: None,
            get: |e| number(e.min_lines),
        },
        AttrSpec {
            name: "hint-align",
            default: Some("default"),
            get: |e| Some(e.align.as_str().to_string()),
        },
        AttrSpec {
            name: "placement",
            default: None,
            get: |e| e.placement.map(str::to_string),
        },
    ];

    fn children(&self) -> Vec<Content> {
        vec![Content::Text(self.text.clone())]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageElement {
    pub id: Option<u32>,
    pub src: String,
    pub alt: Option<String>,
    pub add_image_query: Option<bool>,
    pub placement: ImagePlacement,
    pub crop: AdaptiveImageCrop,
    pub remove_margin: Option<bool>,
    pub align: AdaptiveImageAlign,
    /// Darkening overlay, 0 to 100
    pub overlay: Option<u32>,
}

impl ImageElement {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Self::default()
        }
    }
}

impl XmlNode for ImageElement {
    const NAME: &'static str = "image";
    const ATTRIBUTES: &'static [AttrSpec<Self>] = &[
        AttrSpec {
            name: "id",
            default: None,
            get: |e| number(e.id),
        },
        AttrSpec {
            name: "src",
            default: None,
            get: |e| Some(e.src.clone()),
        },
        AttrSpec {
            name: "alt",
            default: None,
            get: |e| e.alt.clone(),
        },
        AttrSpec {
            name: "addImageQuery",
            default: Some("false"),
            get: |e| flag(e.add_image_query),
        },
        AttrSpec {
            name: "placement",
            default: Some("inline"),
            get: |e| Some(e.placement.as_str().to_string()),
        },
        AttrSpec {
            name: "hint-crop",
            default: Some("default"),
            get: |e| Some(e.crop.as_str().to_string()),
        },
        AttrSpec {
            name: "hint-removeMargin",
            default: Some("false"),
            get: |e| flag(e.remove_margin),
        },
        AttrSpec {
            name: "hint-align",
            default: Some("default"),
            get: |e| Some(e.align.as_str().to_string()),
        },
        AttrSpec {
            name: "hint-overlay",
            default: None,
            get: |e| number(e.overlay),
        },
    ];
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubgroupElement {
    pub weight: Option<u32>,
    pub text_stacking: AdaptiveSubgroupTextStacking,
    pub children: Vec<Element>,
}

impl XmlNode for SubgroupElement {
    const NAME: &'static str = "subgroup";
    const ATTRIBUTES: &'static [AttrSpec<Self>] = &[
        AttrSpec {
            name: "hint-weight",
            default: None,
            get: |e| number(e.weight),
        },
        AttrSpec {
            name: "hint-textStacking",
            default: Some("default"),
            get: |e| Some(e.text_stacking.as_str().to_string()),
        },
    ];

    fn children(&self) -> Vec<Content> {
        self.children.iter().cloned().map(Content::Element).collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupElement {
    pub subgroups: Vec<SubgroupElement>,
}

impl XmlNode for GroupElement {
    const NAME: &'static str = "group";
    const ATTRIBUTES: &'static [AttrSpec<Self>] = &[];

    fn children(&self) -> Vec<Content> {
        self.subgroups
            .iter()
            .map(|subgroup| Content::Element(subgroup.to_element()))
            .collect()
    }
}
