//! XML serializer

use tracing::trace;

use crate::xml::model::{Content, Element};

const DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Output options for the serializer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WriterConfig {
    /// Prepend an XML declaration
    pub declaration: bool,
    /// Pretty print with this many spaces per level; `None` writes everything on one line
    pub indent: Option<usize>,
}

impl WriterConfig {
    pub const fn pretty(indent: usize) -> Self {
        Self {
            declaration: false,
            indent: Some(indent),
        }
    }
}

/// Serialize an element tree on a single line
pub fn to_string(element: &Element) -> String {
    to_string_with_config(element, &WriterConfig::default())
}

pub fn to_string_with_config(element: &Element, config: &WriterConfig) -> String {
    let mut output = String::new();
    if config.declaration {
        output.push_str(DECLARATION);
        if config.indent.is_some() {
            output.push('\n');
        }
    }
    write_element(element, config.indent, 0, &mut output);
    trace!(bytes = output.len(), root = element.name, "serialized payload");
    output
}

fn write_element(element: &Element, indent: Option<usize>, depth: usize, output: &mut String) {
    output.push('<');
    output.push_str(element.name);

    for attr in element.attributes.iter().filter(|attr| !attr.is_default()) {
        output.push(' ');
        output.push_str(attr.name);
        output.push_str("=\"");
        output.push_str(&escape_xml(&attr.value));
        output.push('"');
    }

    if element.children.is_empty() {
        output.push_str("/>");
        return;
    }

    output.push('>');

    // Mixed content stays on one line so whitespace never leaks into text.
    let has_text = element
        .children
        .iter()
        .any(|child| matches!(child, Content::Text(_)));
    let indent = if has_text { None } else { indent };

    for child in &element.children {
        if let Some(width) = indent {
            push_line(output, width * (depth + 1));
        }
        match child {
            Content::Element(child) => write_element(child, indent, depth + 1, output),
            Content::Text(text) => output.push_str(&escape_xml(text)),
        }
    }

    if let Some(width) = indent {
        push_line(output, width * depth);
    }
    output.push_str("</");
    output.push_str(element.name);
    output.push('>');
}

fn push_line(output: &mut String, spaces: usize) {
    output.push('\n');
    output.extend(std::iter::repeat(' ').take(spaces));
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::model::Attribute;

    fn audio(looping: bool, silent: bool) -> Element {
        Element {
            name: "audio",
            attributes: vec![
                Attribute::new("src", "ms-winsoundevent:Notification.Mail"),
                Attribute {
                    name: "loop",
                    value: looping.to_string(),
                    default: Some("false"),
                },
                Attribute {
                    name: "silent",
                    value: silent.to_string(),
                    default: Some("false"),
                },
            ],
            children: Vec::new(),
        }
    }

    #[test]
    fn test_default_attributes_are_omitted() {
        assert_eq!(
            to_string(&audio(false, false)),
            r#"<audio src="ms-winsoundevent:Notification.Mail"/>"#
        );
        assert_eq!(
            to_string(&audio(true, false)),
            r#"<audio src="ms-winsoundevent:Notification.Mail" loop="true"/>"#
        );
    }

    #[test]
    fn test_escaping() {
        let element = Element::new("text")
            .with_attribute("lang", "a\"b'c")
            .with_text("Tom & Jerry <3");
        assert_eq!(
            to_string(&element),
            r#"<text lang="a&quot;b&apos;c">Tom &amp; Jerry &lt;3</text>"#
        );
    }

    #[test]
    fn test_empty_text_is_explicitly_closed() {
        let element = Element::new("text").with_text("");
        assert_eq!(to_string(&element), "<text></text>");
    }

    #[test]
    fn test_pretty_output() {
        let element = Element::new("toast").with_child(
            Element::new("visual").with_child(
                Element::new("binding")
                    .with_attribute("template", "ToastGeneric")
                    .with_child(Element::new("text").with_text("Hello")),
            ),
        );
        let config = WriterConfig {
            declaration: true,
            indent: Some(2),
        };
        let expected = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
<toast>\n  <visual>\n    <binding template=\"ToastGeneric\">\n      <text>Hello</text>\n    </binding>\n  </visual>\n</toast>";
        assert_eq!(to_string_with_config(&element, &config), expected);
    }

    #[test]
    fn test_mixed_content_stays_inline() {
        let element = Element::new("p")
            .with_text("a")
            .with_child(Element::new("b").with_child(Element::new("i")));
        assert_eq!(
            to_string_with_config(&element, &WriterConfig::pretty(4)),
            "<p>a<b><i/></b></p>"
        );
    }
}
