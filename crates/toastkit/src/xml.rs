//! XML model and serializer

pub mod model;
pub mod writer;

pub use model::{is_xml_char, AttrSpec, Attribute, Content, Element, XmlNode};
pub use writer::{to_string, to_string_with_config, WriterConfig};
