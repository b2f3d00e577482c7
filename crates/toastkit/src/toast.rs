//! Toast payloads

pub mod actions;

pub use actions::{
    ToastActions, ToastActionsCustom, ToastButton, ToastContextMenuItem, ToastInput,
    ToastSelectionBox, ToastSelectionBoxItem, ToastTextBox, MAX_ACTIONS,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{debug, instrument};

use crate::adaptive::{AdaptiveChild, AdaptiveImageCrop};
use crate::element::{
    AudioElement, HeaderElement, ImageElement, ImagePlacement, TextElement, ToastBindingElement,
    ToastElement, ToastVisualElement,
};
use crate::error::{Error, Result};
use crate::payload::Payload;
use crate::validate::Validate;
use crate::xml::{Element, XmlNode};

/// How long the toast stays on screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, IntoStaticStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum ToastDuration {
    #[default]
    Short,
    Long,
}

impl ToastDuration {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// What activating the toast (or one of its buttons) launches
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, IntoStaticStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum ToastActivationType {
    #[default]
    Foreground,
    Background,
    Protocol,
}

impl ToastActivationType {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Scenario that changes how the toast behaves
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, IntoStaticStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum ToastScenario {
    #[default]
    Default,
    Alarm,
    Reminder,
    IncomingCall,
}

impl ToastScenario {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Root of a toast payload
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ToastContent {
    pub launch: Option<String>,
    pub duration: ToastDuration,
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339::option"))]
    pub display_timestamp: Option<OffsetDateTime>,
    pub activation_type: ToastActivationType,
    pub scenario: ToastScenario,
    pub visual: ToastVisual,
    pub audio: Option<ToastAudio>,
    pub actions: Option<ToastActions>,
    pub header: Option<ToastHeader>,
}

impl ToastContent {
    pub fn new(visual: ToastVisual) -> Self {
        Self {
            visual,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_launch(mut self, launch: impl Into<String>) -> Self {
        self.launch = Some(launch.into());
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: ToastDuration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_scenario(mut self, scenario: ToastScenario) -> Self {
        self.scenario = scenario;
        self
    }

    #[must_use]
    pub fn with_display_timestamp(mut self, timestamp: OffsetDateTime) -> Self {
        self.display_timestamp = Some(timestamp);
        self
    }

    #[must_use]
    pub fn with_audio(mut self, audio: ToastAudio) -> Self {
        self.audio = Some(audio);
        self
    }

    #[must_use]
    pub fn with_actions(mut self, actions: impl Into<ToastActions>) -> Self {
        self.actions = Some(actions.into());
        self
    }

    #[must_use]
    pub fn with_header(mut self, header: ToastHeader) -> Self {
        self.header = Some(header);
        self
    }
}

impl ToastContent {
    /// `displayTimestamp` attribute value. RFC 3339 has no room for offsets
    /// with seconds or years outside 0..=9999.
    fn formatted_timestamp(&self) -> Result<Option<String>> {
        self.display_timestamp
            .map(|timestamp| timestamp.format(&Rfc3339))
            .transpose()
            .map_err(|e| Error::validation(format!("display timestamp: {e}")))
    }
}

impl Validate for ToastContent {
    fn validate(&self) -> Result<()> {
        self.formatted_timestamp()?;
        self.visual.validate()?;
        self.actions.validate()
    }
}

impl Payload for ToastContent {
    #[instrument(skip_all, fields(scenario = self.scenario.as_str()))]
    fn build(&self) -> Result<Element> {
        let display_timestamp = self.formatted_timestamp()?;

        let toast = ToastElement {
            launch: self.launch.clone(),
            duration: self.duration,
            display_timestamp,
            activation_type: self.activation_type,
            scenario: self.scenario,
            visual: self.visual.build(),
            audio: self.audio.as_ref().map(AudioElement::from),
            actions: self.actions.as_ref().map(ToastActions::build),
            header: self.header.as_ref().map(HeaderElement::from),
        };
        debug!(
            children = toast.visual.binding.children.len(),
            has_actions = toast.actions.is_some(),
            "built toast"
        );
        Ok(toast.to_element())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ToastVisual {
    pub version: Option<u32>,
    pub lang: Option<String>,
    pub base_uri: Option<String>,
    pub add_image_query: Option<bool>,
    pub binding_generic: ToastBindingGeneric,
}

impl ToastVisual {
    pub fn new(binding_generic: ToastBindingGeneric) -> Self {
        Self {
            binding_generic,
            ..Self::default()
        }
    }

    fn build(&self) -> ToastVisualElement {
        ToastVisualElement {
            version: self.version,
            lang: self.lang.clone(),
            base_uri: self.base_uri.clone(),
            add_image_query: self.add_image_query,
            binding: self.binding_generic.build(),
        }
    }
}

impl Validate for ToastVisual {
    fn validate(&self) -> Result<()> {
        self.binding_generic.validate()
    }
}

/// Content of the `ToastGeneric` template
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ToastBindingGeneric {
    pub children: Vec<AdaptiveChild>,
    pub app_logo_override: Option<ToastGenericAppLogo>,
    pub hero_image: Option<ToastGenericHeroImage>,
    pub attribution: Option<ToastGenericAttributionText>,
    pub lang: Option<String>,
    pub base_uri: Option<String>,
    pub add_image_query: Option<bool>,
}

impl ToastBindingGeneric {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_child(mut self, child: impl Into<AdaptiveChild>) -> Self {
        self.children.push(child.into());
        self
    }

    #[must_use]
    pub fn with_app_logo_override(mut self, logo: ToastGenericAppLogo) -> Self {
        self.app_logo_override = Some(logo);
        self
    }

    #[must_use]
    pub fn with_hero_image(mut self, hero: ToastGenericHeroImage) -> Self {
        self.hero_image = Some(hero);
        self
    }

    #[must_use]
    pub fn with_attribution(mut self, attribution: ToastGenericAttributionText) -> Self {
        self.attribution = Some(attribution);
        self
    }

    fn build(&self) -> ToastBindingElement {
        let mut children: Vec<Element> = self.children.iter().map(AdaptiveChild::to_element).collect();
        if let Some(logo) = &self.app_logo_override {
            children.push(ImageElement::from(logo).to_element());
        }
        if let Some(hero) = &self.hero_image {
            children.push(ImageElement::from(hero).to_element());
        }
        if let Some(attribution) = &self.attribution {
            children.push(TextElement::from(attribution).to_element());
        }

        ToastBindingElement {
            lang: self.lang.clone(),
            base_uri: self.base_uri.clone(),
            add_image_query: self.add_image_query,
            children,
        }
    }
}

impl Validate for ToastBindingGeneric {
    fn validate(&self) -> Result<()> {
        if self.children.is_empty() {
            return Err(Error::validation("toast binding has no text, image or group"));
        }
        self.children.validate()
    }
}

/// Replaces the app logo in the toast's corner
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ToastGenericAppLogo {
    pub source: String,
    pub alternate_text: Option<String>,
    pub add_image_query: Option<bool>,
    pub hint_crop: AdaptiveImageCrop,
}

impl ToastGenericAppLogo {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_crop(mut self, crop: AdaptiveImageCrop) -> Self {
        self.hint_crop = crop;
        self
    }
}

impl From<&ToastGenericAppLogo> for ImageElement {
    fn from(logo: &ToastGenericAppLogo) -> Self {
        Self {
            alt: logo.alternate_text.clone(),
            add_image_query: logo.add_image_query,
            placement: ImagePlacement::AppLogoOverride,
            crop: logo.hint_crop,
            ..Self::new(logo.source.clone())
        }
    }
}

/// Banner image across the top of the toast
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ToastGenericHeroImage {
    pub source: String,
    pub alternate_text: Option<String>,
    pub add_image_query: Option<bool>,
}

impl ToastGenericHeroImage {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }
}

impl From<&ToastGenericHeroImage> for ImageElement {
    fn from(hero: &ToastGenericHeroImage) -> Self {
        Self {
            alt: hero.alternate_text.clone(),
            add_image_query: hero.add_image_query,
            placement: ImagePlacement::Hero,
            ..Self::new(hero.source.clone())
        }
    }
}

/// Small source line under the toast body
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ToastGenericAttributionText {
    pub text: String,
    pub lang: Option<String>,
}

impl ToastGenericAttributionText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: None,
        }
    }
}

impl From<&ToastGenericAttributionText> for TextElement {
    fn from(attribution: &ToastGenericAttributionText) -> Self {
        Self {
            lang: attribution.lang.clone(),
            placement: Some("attribution"),
            ..Self::new(attribution.text.clone())
        }
    }
}

/// Sound played when the toast appears
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ToastAudio {
    pub src: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "loop"))]
    pub looping: bool,
    pub silent: bool,
}

impl ToastAudio {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    #[must_use]
    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }
}

impl From<&ToastAudio> for AudioElement {
    fn from(audio: &ToastAudio) -> Self {
        Self {
            src: audio.src.clone(),
            looping: audio.looping,
            silent: audio.silent,
        }
    }
}

/// Groups toasts under a common header in the action center
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ToastHeader {
    pub id: String,
    pub title: String,
    pub arguments: String,
    pub activation_type: ToastActivationType,
}

impl ToastHeader {
    pub fn new(id: impl Into<String>, title: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            arguments: arguments.into(),
            activation_type: ToastActivationType::default(),
        }
    }
}

impl From<&ToastHeader> for HeaderElement {
    fn from(header: &ToastHeader) -> Self {
        Self {
            id: header.id.clone(),
            title: header.title.clone(),
            arguments: header.arguments.clone(),
            activation_type: header.activation_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adaptive::AdaptiveText;
    use time::macros::datetime;

    fn hello() -> ToastContent {
        ToastContent::new(ToastVisual::new(
            ToastBindingGeneric::new().with_child(AdaptiveText::new("Hello")),
        ))
    }

    #[test]
    fn test_unrepresentable_timestamp_fails_validation() {
        let toast = hello().with_display_timestamp(datetime!(2024-01-01 0:00 +01:00:30));
        assert!(toast.validate().is_err_and(|e| e.is_validation()));
        assert!(hello()
            .with_display_timestamp(datetime!(2024-01-01 0:00 +01:00))
            .validate()
            .is_ok());
    }

    #[test]
    fn test_minimal_toast() -> Result<()> {
        assert_eq!(
            hello().to_xml()?,
            r#"<toast><visual><binding template="ToastGeneric"><text>Hello</text></binding></visual></toast>"#
        );
        Ok(())
    }

    #[test]
    fn test_empty_binding_is_invalid() {
        let toast = ToastContent::new(ToastVisual::default());
        assert!(toast.to_xml().is_err_and(|e| e.is_validation()));
    }

    #[test]
    fn test_toast_attributes() -> Result<()> {
        let toast = hello()
            .with_launch("action=open&id=7")
            .with_duration(ToastDuration::Long)
            .with_scenario(ToastScenario::Reminder)
            .with_display_timestamp(datetime!(2017-04-15 19:45:00 UTC));
        let element = toast.to_element()?;
        let attributes: Vec<_> = element
            .attributes
            .iter()
            .filter(|attr| !attr.is_default())
            .map(|attr| (attr.name, attr.value.as_str()))
            .collect();
        assert_eq!(
            attributes,
            [
                ("launch", "action=open&id=7"),
                ("duration", "long"),
                ("displayTimestamp", "2017-04-15T19:45:00Z"),
                ("scenario", "reminder"),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_generic_extras_follow_children() -> Result<()> {
        let binding = ToastBindingGeneric::new()
            .with_attribution(ToastGenericAttributionText::new("via SMS"))
            .with_hero_image(ToastGenericHeroImage::new("hero.png"))
            .with_app_logo_override(
                ToastGenericAppLogo::new("logo.png").with_crop(AdaptiveImageCrop::Circle),
            )
            .with_child(AdaptiveText::new("Andrew"));
        let xml = ToastContent::new(ToastVisual::new(binding)).to_xml()?;
        assert_eq!(
            xml,
            concat!(
                r#"<toast><visual><binding template="ToastGeneric"><text>Andrew</text>"#,
                r#"<image src="logo.png" placement="appLogoOverride" hint-crop="circle"/>"#,
                r#"<image src="hero.png" placement="hero"/>"#,
                r#"<text placement="attribution">via SMS</text>"#,
                "</binding></visual></toast>"
            )
        );
        Ok(())
    }

    #[test]
    fn test_header_and_audio_order() -> Result<()> {
        let toast = hello()
            .with_header(ToastHeader::new("6289", "Camping!!", "action=openConversation&id=6289"))
            .with_audio(ToastAudio::new("ms-winsoundevent:Notification.IM").with_silent(true))
            .with_actions(ToastActions::SnoozeAndDismiss);
        let element = toast.to_element()?;
        let names: Vec<_> = element.child_elements().map(|child| child.name).collect();
        assert_eq!(names, ["visual", "audio", "actions", "header"]);
        Ok(())
    }
}
