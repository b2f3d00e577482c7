//! `<tile>`, its `<visual>` and the per-size `<binding>`

use strum::IntoStaticStr;

use super::flag;
use crate::template::TemplateName;
use crate::tile::{TileBranding, TileTextStacking};
use crate::xml::{AttrSpec, Content, Element, XmlNode};

/// Special presentation a binding asks the shell for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum TilePresentation {
    Contact,
    People,
    Photos,
}

impl TilePresentation {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileElement {
    pub visual: TileVisualElement,
}

impl XmlNode for TileElement {
    const NAME: &'static str = "tile";
    const ATTRIBUTES: &'static [AttrSpec<Self>] = &[];

    fn children(&self) -> Vec<Content> {
        vec![Content::Element(self.visual.to_element())]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileVisualElement {
    pub version: Option<u32>,
    pub lang: Option<String>,
    pub base_uri: Option<String>,
    pub branding: TileBranding,
    pub add_image_query: Option<bool>,
    pub content_id: Option<String>,
    pub display_name: Option<String>,
    pub arguments: Option<String>,
    pub bindings: Vec<TileBindingElement>,
}

impl XmlNode for TileVisualElement {
    const NAME: &'static str = "visual";
    const ATTRIBUTES: &'static [AttrSpec<Self>] = &[
        AttrSpec {
            name: "version",
            default: None,
            get: |e| e.version.map(|v| v.to_string()),
        },
        AttrSpec {
            name: "lang",
            default: None,
            get: |e| e.lang.clone(),
        },
        AttrSpec {
            name: "baseUri",
            default: None,
            get: |e| e.base_uri.clone(),
        },
        AttrSpec {
            name: "branding",
            default: Some("auto"),
            get: |e| Some(e.branding.as_str().to_string()),
        },
        AttrSpec {
            name: "addImageQuery",
            default: Some("false"),
            get: |e| flag(e.add_image_query),
        },
        AttrSpec {
            name: "contentId",
            default: None,
            get: |e| e.content_id.clone(),
        },
        AttrSpec {
            name: "displayName",
            default: None,
            get: |e| e.display_name.clone(),
        },
        AttrSpec {
            name: "arguments",
            default: None,
            get: |e| e.arguments.clone(),
        },
    ];

    fn children(&self) -> Vec<Content> {
        self.bindings
            .iter()
            .map(|binding| Content::Element(binding.to_element()))
            .collect()
    }
}

/// One visual presentation of a tile at a single size.
///
/// Created fresh for every serialization and filled in by
/// [`TileBindingContent::populate`](crate::tile::TileBindingContent::populate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileBindingElement {
    pub template: TemplateName,
    pub lang: Option<String>,
    pub base_uri: Option<String>,
    pub branding: TileBranding,
    pub add_image_query: Option<bool>,
    pub content_id: Option<String>,
    pub display_name: Option<String>,
    pub text_stacking: TileTextStacking,
    pub presentation: Option<TilePresentation>,
    pub lock_detailed_status1: Option<String>,
    pub lock_detailed_status2: Option<String>,
    pub lock_detailed_status3: Option<String>,
    pub arguments: Option<String>,
    pub children: Vec<Element>,
}

impl TileBindingElement {
    pub fn new(template: TemplateName) -> Self {
        Self {
            template,
            lang: None,
            base_uri: None,
            branding: TileBranding::default(),
            add_image_query: None,
            content_id: None,
            display_name: None,
            text_stacking: TileTextStacking::default(),
            presentation: None,
            lock_detailed_status1: None,
            lock_detailed_status2: None,
            lock_detailed_status3: None,
            arguments: None,
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, child: impl XmlNode) {
        self.children.push(child.to_element());
    }

    /// Children with the given tag, in order
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }
}

impl XmlNode for TileBindingElement {
    const NAME: &'static str = "binding";
    const ATTRIBUTES: &'static [AttrSpec<Self>] = &[
        AttrSpec {
            name: "template",
            default: None,
            get: |e| Some(e.template.as_str().to_string()),
        },
        AttrSpec {
            name: "lang",
            default: None,
            get: |e| e.lang.clone(),
        },
        AttrSpec {
            name: "baseUri",
            default: None,
            get: |e| e.base_uri.clone(),
        },
        AttrSpec {
            name: "branding",
            default: Some("auto"),
            get: |e| Some(e.branding.as_str().to_string()),
        },
        AttrSpec {
            name: "addImageQuery",
            default: Some("false"),
            get: |e| flag(e.add_image_query),
        },
        AttrSpec {
            name: "contentId",
            default: None,
            get: |e| e.content_id.clone(),
        },
        AttrSpec {
            name: "displayName",
            default: None,
            get: |e| e.display_name.clone(),
        },
        AttrSpec {
            name: "hint-textStacking",
            default: Some("top"),
            get: |e| Some(e.text_stacking.as_str().to_string()),
        },
        AttrSpec {
            name: "hint-presentation",
            default: None,
            get: |e| e.presentation.map(|p| p.as_str().to_string()),
        },
        AttrSpec {
            name: "hint-lockDetailedStatus1",
            default: None,
            get: |e| e.lock_detailed_status1.clone(),
        },
        AttrSpec {
            name: "hint-lockDetailedStatus2",
            default: None,
            get: |e| e.lock_detailed_status2.clone(),
        },
        AttrSpec {
            name: "hint-lockDetailedStatus3",
            default: None,
            get: |e| e.lock_detailed_status3.clone(),
        },
        AttrSpec {
            name: "arguments",
            default: None,
            get: |e| e.arguments.clone(),
        },
    ];

    fn children(&self) -> Vec<Content> {
        self.children.iter().cloned().map(Content::Element).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::to_string;

    #[test]
    fn test_empty_binding() {
        let binding = TileBindingElement::new(TemplateName::TileMedium);
        assert_eq!(
            to_string(&binding.to_element()),
            r#"<binding template="TileMedium"/>"#
        );
    }

    #[test]
    fn test_visual_attributes() {
        let visual = TileVisualElement {
            version: Some(3),
            lang: Some("en-US".to_string()),
            base_uri: Some("ms-appx:///Assets/".to_string()),
            branding: TileBranding::NameAndLogo,
            add_image_query: Some(true),
            ..TileVisualElement::default()
        };
        assert_eq!(
            to_string(&visual.to_element()),
            concat!(
                r#"<visual version="3" lang="en-US" baseUri="ms-appx:///Assets/" "#,
                r#"branding="nameAndLogo" addImageQuery="true"/>"#
            )
        );
    }
}
