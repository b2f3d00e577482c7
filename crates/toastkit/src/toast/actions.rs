//! Toast inputs, buttons and context menu items

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounded::BoundedVec;
use crate::element::{ActionElement, ActionsElement, InputElement, SelectionElement};
use crate::error::{Error, Result};
use crate::toast::ToastActivationType;
use crate::validate::Validate;

/// Most inputs, buttons or selection items a toast accepts
pub const MAX_ACTIONS: usize = 5;

/// System-provided snooze and dismiss buttons
pub const SNOOZE_AND_DISMISS: &str = "SnoozeAndDismiss";

/// Action area of a toast
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum ToastActions {
    Custom(ToastActionsCustom),
    SnoozeAndDismiss,
}

impl ToastActions {
    pub(crate) fn build(&self) -> ActionsElement {
        match self {
            Self::Custom(custom) => custom.build(),
            Self::SnoozeAndDismiss => ActionsElement {
                system_commands: Some(SNOOZE_AND_DISMISS),
                ..ActionsElement::default()
            },
        }
    }
}

impl Validate for ToastActions {
    fn validate(&self) -> Result<()> {
        match self {
            Self::Custom(custom) => custom.validate(),
            Self::SnoozeAndDismiss => Ok(()),
        }
    }
}

impl From<ToastActionsCustom> for ToastActions {
    fn from(custom: ToastActionsCustom) -> Self {
        Self::Custom(custom)
    }
}

/// App-defined inputs, buttons and context menu entries.
///
/// Buttons and context menu items share the same five slots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ToastActionsCustom {
    pub inputs: BoundedVec<ToastInput, MAX_ACTIONS>,
    pub buttons: BoundedVec<ToastButton, MAX_ACTIONS>,
    pub context_menu_items: BoundedVec<ToastContextMenuItem, MAX_ACTIONS>,
}

impl ToastActionsCustom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_input(&mut self, input: impl Into<ToastInput>) -> Result<()> {
        self.inputs
            .push(input.into())
            .map_err(|_| Error::capacity(MAX_ACTIONS, "toast inputs"))
    }

    pub fn add_button(&mut self, button: ToastButton) -> Result<()> {
        self.check_action_slot()?;
        self.buttons
            .push(button)
            .map_err(|_| Error::capacity(MAX_ACTIONS, "toast buttons"))
    }

    pub fn add_context_menu_item(&mut self, item: ToastContextMenuItem) -> Result<()> {
        self.check_action_slot()?;
        self.context_menu_items
            .push(item)
            .map_err(|_| Error::capacity(MAX_ACTIONS, "toast context menu"))
    }

    fn action_count(&self) -> usize {
        self.buttons.len() + self.context_menu_items.len()
    }

    fn check_action_slot(&self) -> Result<()> {
        if self.action_count() >= MAX_ACTIONS {
            return Err(Error::capacity(MAX_ACTIONS, "toast buttons and context menu items"));
        }
        Ok(())
    }

    fn build(&self) -> ActionsElement {
        let buttons = self.buttons.iter().map(ActionElement::from);
        let menu_items = self.context_menu_items.iter().map(ActionElement::from);
        ActionsElement {
            system_commands: None,
            inputs: self.inputs.iter().map(InputElement::from).collect(),
            actions: buttons.chain(menu_items).collect(),
        }
    }
}

impl Validate for ToastActionsCustom {
    fn validate(&self) -> Result<()> {
        if self.action_count() > MAX_ACTIONS {
            return Err(Error::capacity(MAX_ACTIONS, "toast buttons and context menu items"));
        }

        let mut ids: Vec<&str> = Vec::with_capacity(self.inputs.len());
        for input in &self.inputs {
            input.validate()?;
            if ids.contains(&input.id()) {
                return Err(Error::validation(format!("duplicate input id '{}'", input.id())));
            }
            ids.push(input.id());
        }

        for button in &self.buttons {
            if let Some(input_id) = button.input_id.as_deref() {
                if !ids.contains(&input_id) {
                    return Err(Error::validation(format!(
                        "button '{}' refers to unknown input '{input_id}'",
                        button.content
                    )));
                }
            }
        }
        Ok(())
    }
}

/// A toast input
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum ToastInput {
    TextBox(ToastTextBox),
    SelectionBox(ToastSelectionBox),
}

impl ToastInput {
    pub fn id(&self) -> &str {
        match self {
            Self::TextBox(text_box) => &text_box.id,
            Self::SelectionBox(selection_box) => &selection_box.id,
        }
    }
}

impl Validate for ToastInput {
    fn validate(&self) -> Result<()> {
        match self {
            Self::TextBox(_) => Ok(()),
            Self::SelectionBox(selection_box) => selection_box.validate(),
        }
    }
}

impl From<&ToastInput> for InputElement {
    fn from(input: &ToastInput) -> Self {
        match input {
            ToastInput::TextBox(text_box) => Self {
                id: text_box.id.clone(),
                input_type: "text",
                title: text_box.title.clone(),
                place_holder_content: text_box.place_holder_content.clone(),
                default_input: text_box.default_input.clone(),
                selections: Vec::new(),
            },
            ToastInput::SelectionBox(selection_box) => Self {
                id: selection_box.id.clone(),
                input_type: "selection",
                title: selection_box.title.clone(),
                place_holder_content: None,
                default_input: selection_box.default_selection_id.clone(),
                selections: selection_box
                    .items
                    .iter()
                    .map(|item| SelectionElement {
                        id: item.id.clone(),
                        content: item.content.clone(),
                    })
                    .collect(),
            },
        }
    }
}

impl From<ToastTextBox> for ToastInput {
    fn from(text_box: ToastTextBox) -> Self {
        Self::TextBox(text_box)
    }
}

impl From<ToastSelectionBox> for ToastInput {
    fn from(selection_box: ToastSelectionBox) -> Self {
        Self::SelectionBox(selection_box)
    }
}

/// Free-text input
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ToastTextBox {
    pub id: String,
    pub title: Option<String>,
    pub place_holder_content: Option<String>,
    pub default_input: Option<String>,
}

impl ToastTextBox {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_place_holder(mut self, text: impl Into<String>) -> Self {
        self.place_holder_content = Some(text.into());
        self
    }
}

/// Drop-down input
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ToastSelectionBox {
    pub id: String,
    pub title: Option<String>,
    /// Must match the id of one of `items`
    pub default_selection_id: Option<String>,
    pub items: BoundedVec<ToastSelectionBoxItem, MAX_ACTIONS>,
}

impl ToastSelectionBox {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn add_item(&mut self, id: impl Into<String>, content: impl Into<String>) -> Result<()> {
        self.items
            .push(ToastSelectionBoxItem {
                id: id.into(),
                content: content.into(),
            })
            .map_err(|_| Error::capacity(MAX_ACTIONS, "selection box"))
    }
}

impl Validate for ToastSelectionBox {
    fn validate(&self) -> Result<()> {
        match &self.default_selection_id {
            Some(default) if !self.items.iter().any(|item| &item.id == default) => {
                Err(Error::validation(format!(
                    "default selection '{default}' is not an item of '{}'",
                    self.id
                )))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ToastSelectionBoxItem {
    pub id: String,
    pub content: String,
}

/// A button at the bottom of the toast
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ToastButton {
    pub content: String,
    pub arguments: String,
    pub activation_type: ToastActivationType,
    pub image_uri: Option<String>,
    /// Places the button next to this input
    pub input_id: Option<String>,
}

impl ToastButton {
    pub fn new(content: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            arguments: arguments.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_activation_type(mut self, activation_type: ToastActivationType) -> Self {
        self.activation_type = activation_type;
        self
    }

    #[must_use]
    pub fn with_input_id(mut self, input_id: impl Into<String>) -> Self {
        self.input_id = Some(input_id.into());
        self
    }

    #[must_use]
    pub fn with_image_uri(mut self, uri: impl Into<String>) -> Self {
        self.image_uri = Some(uri.into());
        self
    }
}

impl From<&ToastButton> for ActionElement {
    fn from(button: &ToastButton) -> Self {
        Self {
            content: button.content.clone(),
            arguments: button.arguments.clone(),
            activation_type: button.activation_type,
            image_uri: button.image_uri.clone(),
            input_id: button.input_id.clone(),
            placement: None,
        }
    }
}

/// Extra entry in the toast's right-click menu
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ToastContextMenuItem {
    pub content: String,
    pub arguments: String,
    pub activation_type: ToastActivationType,
}

impl ToastContextMenuItem {
    pub fn new(content: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            arguments: arguments.into(),
            activation_type: ToastActivationType::default(),
        }
    }
}

impl From<&ToastContextMenuItem> for ActionElement {
    fn from(item: &ToastContextMenuItem) -> Self {
        Self {
            content: item.content.clone(),
            arguments: item.arguments.clone(),
            activation_type: item.activation_type,
            image_uri: None,
            input_id: None,
            placement: Some("contextMenu"),
        }
    }
}
