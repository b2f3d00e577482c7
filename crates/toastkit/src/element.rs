//! Element model
//!
//! One struct per payload element. Each declares its tag and attribute table
//! through [`XmlNode`]; the typed content in [`crate::badge`], [`crate::tile`]
//! and [`crate::toast`] lowers itself into these before serialization.

pub mod adaptive;
pub mod tile;
pub mod toast;

pub use adaptive::{GroupElement, ImagePlacement, ImageElement, SubgroupElement, TextElement};
pub use tile::{TileBindingElement, TileElement, TilePresentation, TileVisualElement};
pub use toast::{
    ActionElement, ActionsElement, AudioElement, HeaderElement, InputElement, SelectionElement,
    ToastBindingElement, ToastElement, ToastVisualElement,
};

use crate::xml::{AttrSpec, XmlNode};

/// `<badge value="..."/>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeElement {
    pub value: String,
}

impl XmlNode for BadgeElement {
    const NAME: &'static str = "badge";
    const ATTRIBUTES: &'static [AttrSpec<Self>] = &[AttrSpec {
        name: "value",
        default: None,
        get: |e| Some(e.value.clone()),
    }];
}

pub(crate) fn flag(value: Option<bool>) -> Option<String> {
    value.map(|v| v.to_string())
}

pub(crate) fn number(value: Option<u32>) -> Option<String> {
    value.map(|v| v.to_string())
}
