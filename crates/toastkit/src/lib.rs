//! toastkit - typed notification payloads
//!
//! Build badge, tile and toast content as plain Rust values and render them to
//! the XML the platform notification service consumes.
//!
//! Every payload goes through the same pipeline: validation, template
//! selection, population of the binding elements, then serialization.
//!
//! # Quick Start
//!
//! ```
//! use toastkit::{
//!     Payload, TileBasicImage, TileBinding, TileBindingContentPeople, TileContent, TileSize,
//!     TileVisual,
//! };
//! # fn main() -> Result<(), toastkit::Error> {
//! let people = TileBindingContentPeople::new()
//!     .with_image(TileBasicImage::new("a.png"))
//!     .with_image(TileBasicImage::new("b.png"));
//! let tile = TileContent::new(TileVisual::new().with_binding(TileSize::Wide, TileBinding::new(people)));
//!
//! assert_eq!(
//!     tile.to_xml()?,
//!     r#"<tile><visual><binding template="TileWide" hint-presentation="people"><image src="a.png"/><image src="b.png"/></binding></visual></tile>"#
//! );
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Result};

pub mod bounded;
pub use bounded::BoundedVec;

pub mod xml;
pub use xml::{Element, WriterConfig};

pub mod element;
pub mod template;
pub use template::{select_template, ContentKind, TemplateName, TileSize};

pub mod validate;
pub use validate::Validate;

pub mod payload;
pub use payload::{Notification, Payload};

pub mod adaptive;
pub use adaptive::{
    AdaptiveChild, AdaptiveGroup, AdaptiveImage, AdaptiveImageAlign, AdaptiveImageCrop,
    AdaptiveSubgroup, AdaptiveSubgroupChild, AdaptiveSubgroupTextStacking, AdaptiveText,
    AdaptiveTextAlign, AdaptiveTextStyle,
};

pub mod badge;
pub use badge::{BadgeContent, BadgeGlyph, BadgeGlyphContent, BadgeNumericContent};

pub mod tile;
pub use tile::{
    TileBackgroundImage, TileBasicImage, TileBasicText, TileBinding, TileBindingContent,
    TileBindingContentAdaptive, TileBindingContentContact, TileBindingContentIconic,
    TileBindingContentPeople, TileBindingContentPhotos, TileBranding, TileContent,
    TilePeekImage, TileTextStacking, TileVisual,
};

pub mod toast;
pub use toast::{
    ToastActions, ToastActionsCustom, ToastActivationType, ToastAudio, ToastBindingGeneric,
    ToastButton, ToastContent, ToastContextMenuItem, ToastDuration, ToastGenericAppLogo,
    ToastGenericAttributionText, ToastGenericHeroImage, ToastHeader, ToastInput, ToastScenario,
    ToastSelectionBox, ToastTextBox, ToastVisual,
};

/// Render any notification payload on a single line
pub fn to_xml(payload: &impl Payload) -> Result<String> {
    payload.to_xml()
}

/// Render with explicit writer options
pub fn to_xml_with_config(payload: &impl Payload, config: &WriterConfig) -> Result<String> {
    payload.to_xml_with_config(config)
}

