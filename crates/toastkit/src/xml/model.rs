//! XML data model
//!
//! [`Element`] is the generic markup node every payload is lowered to before
//! serialization. Payload-specific node types describe themselves through
//! [`XmlNode`]: a tag name plus a static table of [`AttrSpec`] entries, read in
//! declaration order.

/// One attribute of a rendered element
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: &'static str,
    pub value: String,
    /// Value the platform assumes when the attribute is absent
    pub default: Option<&'static str>,
}

impl Attribute {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
            default: None,
        }
    }

    /// Whether the serializer can leave this attribute out
    pub fn is_default(&self) -> bool {
        self.default == Some(self.value.as_str())
    }
}

/// XML element
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub name: &'static str,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Content>,
}

/// XML content node
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    Element(Element),
    Text(String),
}

impl Element {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Content::Element(child));
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Content::Text(text.into()));
        self
    }

    /// Raw value of the attribute called `name`, whether or not it is at its default
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> + '_ {
        self.children.iter().filter_map(|child| match child {
            Content::Element(element) => Some(element),
            Content::Text(_) => None,
        })
    }

    /// Child elements with the given tag
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.child_elements().filter(move |child| child.name == name)
    }

    /// Concatenated text content, if the element has any
    pub fn text(&self) -> Option<String> {
        let mut text: Option<String> = None;
        for child in &self.children {
            if let Content::Text(value) = child {
                text.get_or_insert_with(String::new).push_str(value);
            }
        }
        text
    }
}

/// Whether `c` is allowed in an XML 1.0 document
pub const fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

impl Element {
    /// First character in this subtree that XML 1.0 cannot carry, with the tag
    /// whose attribute or text holds it
    pub fn find_invalid_char(&self) -> Option<(&'static str, char)> {
        let in_attributes = self
            .attributes
            .iter()
            .flat_map(|attr| attr.value.chars())
            .find(|&c| !is_xml_char(c));
        if let Some(c) = in_attributes {
            return Some((self.name, c));
        }
        self.children.iter().find_map(|child| match child {
            Content::Element(element) => element.find_invalid_char(),
            Content::Text(text) => text
                .chars()
                .find(|&c| !is_xml_char(c))
                .map(|c| (self.name, c)),
        })
    }
}

/// Static description of one attribute of an [`XmlNode`]
pub struct AttrSpec<T> {
    pub name: &'static str,
    pub default: Option<&'static str>,
    /// Returns `None` when the attribute is unset
    pub get: fn(&T) -> Option<String>,
}

/// A payload node with a fixed tag and a declared attribute table
pub trait XmlNode: Sized + 'static {
    const NAME: &'static str;
    const ATTRIBUTES: &'static [AttrSpec<Self>];

    fn children(&self) -> Vec<Content> {
        Vec::new()
    }

    fn to_element(&self) -> Element {
        let attributes = Self::ATTRIBUTES
            .iter()
            .filter_map(|spec| {
                (spec.get)(self).map(|value| Attribute {
                    name: spec.name,
                    value,
                    default: spec.default,
                })
            })
            .collect();

        Element {
            name: Self::NAME,
            attributes,
            children: self.children(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        id: Option<u32>,
        mode: &'static str,
        label: String,
    }

    impl XmlNode for Sample {
        const NAME: &'static str = "sample";
        const ATTRIBUTES: &'static [AttrSpec<Self>] = &[
            AttrSpec {
                name: "id",
                default: None,
                get: |s| s.id.map(|id| id.to_string()),
            },
            AttrSpec {
                name: "mode",
                default: Some("auto"),
                get: |p| Some(p.mode.to_string()),
            },
        ];

        fn children(&self) -> Vec<Content> {
            vec![Content::Text(self.label.clone())]
        }
    }

    #[test]
    fn test_unset_attributes_are_skipped() {
        let sample = Sample {
            id: None,
            mode: "auto",
            label: "hi".to_string(),
        };
        let element = sample.to_element();
        assert_eq!(element.name, "sample");
        assert_eq!(element.attributes.len(), 1);
        assert_eq!(element.attribute("id"), None);
        assert!(element.attributes.iter().all(Attribute::is_default));
        assert_eq!(element.text().as_deref(), Some("hi"));
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let sample = Sample {
            id: Some(7),
            mode: "manual",
            label: String::new(),
        };
        let names: Vec<_> = sample.to_element().attributes.iter().map(|a| a.name).collect();
        assert_eq!(names, ["id", "mode"]);
    }

    #[test]
    fn test_child_helpers() {
        let element = Element::new("root")
            .with_child(Element::new("a"))
            .with_text("x")
            .with_child(Element::new("b"))
            .with_child(Element::new("a"));
        assert_eq!(element.child_elements().count(), 3);
        assert_eq!(element.children_named("a").count(), 2);
        assert_eq!(element.text().as_deref(), Some("x"));
        assert_eq!(Element::new("empty").text(), None);
    }

    #[test]
    fn test_invalid_chars_are_found() {
        let clean = Element::new("root")
            .with_attribute("note", "tab\there")
            .with_child(Element::new("a").with_text("line\nbreak \u{1F600}"));
        assert_eq!(clean.find_invalid_char(), None);

        let in_text = Element::new("root").with_child(Element::new("text").with_text("a\u{1}b"));
        assert_eq!(in_text.find_invalid_char(), Some(("text", '\u{1}')));

        let in_attribute = Element::new("image").with_attribute("alt", "nul\u{0}");
        assert_eq!(in_attribute.find_invalid_char(), Some(("image", '\u{0}')));

        assert!(!is_xml_char('\u{FFFE}'));
        assert!(!is_xml_char('\u{B}'));
    }
}
