//! `<toast>` and everything under it

use super::flag;
use crate::toast::{ToastActivationType, ToastDuration, ToastScenario};
use crate::xml::{AttrSpec, Content, Element, XmlNode};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastElement {
    pub launch: Option<String>,
    pub duration: ToastDuration,
    pub display_timestamp: Option<String>,
    pub activation_type: ToastActivationType,
    pub scenario: ToastScenario,
    pub visual: ToastVisualElement,
    pub audio: Option<AudioElement>,
    pub actions: Option<ActionsElement>,
    pub header: Option<HeaderElement>,
}

impl XmlNode for ToastElement {
    const NAME: &'static str = "toast";
    const ATTRIBUTES: &'static [AttrSpec<Self>] = &[
        AttrSpec {
            name: "launch",
            default: None,
            get: |e| e.launch.clone(),
        },
        AttrSpec {
            name: "duration",
            default: Some("short"),
            get: |e| Some(e.duration.as_str().to_string()),
        },
        AttrSpec {
            name: "displayTimestamp",
            default: None,
            get: |e| e.display_timestamp.clone(),
        },
        AttrSpec {
            name: "activationType",
            default: Some("foreground"),
            get: |e| Some(e.activation_type.as_str().to_string()),
        },
        AttrSpec {
            name: "scenario",
            default: Some("default"),
            get: |e| Some(e.scenario.as_str().to_string()),
        },
    ];

    fn children(&self) -> Vec<Content> {
        let mut children = vec![Content::Element(self.visual.to_element())];
        if let Some(audio) = &self.audio {
            children.push(Content::Element(audio.to_element()));
        }
        if let Some(actions) = &self.actions {
            children.push(Content::Element(actions.to_element()));
        }
        if let Some(header) = &self.header {
            children.push(Content::Element(header.to_element()));
        }
        children
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastVisualElement {
    pub version: Option<u32>,
    pub lang: Option<String>,
    pub base_uri: Option<String>,
    pub add_image_query: Option<bool>,
    pub binding: ToastBindingElement,
}

impl XmlNode for ToastVisualElement {
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
            name: "addImageQuery",
            default: Some("false"),
            get: |e| flag(e.add_image_query),
        },
    ];

    fn children(&self) -> Vec<Content> {
        vec![Content::Element(self.binding.to_element())]
    }
}

/// The single `ToastGeneric` binding of a toast visual
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastBindingElement {
    pub lang: Option<String>,
    pub base_uri: Option<String>,
    pub add_image_query: Option<bool>,
    pub children: Vec<Element>,
}

impl ToastBindingElement {
    pub const TEMPLATE: &'static str = "ToastGeneric";
}

impl XmlNode for ToastBindingElement {
    const NAME: &'static str = "binding";
    const ATTRIBUTES: &'static [AttrSpec<Self>] = &[
        AttrSpec {
            name: "template",
            default: None,
            get: |_| Some(ToastBindingElement::TEMPLATE.to_string()),
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
            name: "addImageQuery",
            default: Some("false"),
            get: |e| flag(e.add_image_query),
        },
    ];

    fn children(&self) -> Vec<Content> {
        self.children.iter().cloned().map(Content::Element).collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AudioElement {
    pub src: Option<String>,
    pub looping: bool,
    pub silent: bool,
}

impl XmlNode for AudioElement {
    const NAME: &'static str = "audio";
    const ATTRIBUTES: &'static [AttrSpec<Self>] = &[
        AttrSpec {
            name: "src",
            default: None,
            get: |e| e.src.clone(),
        },
        AttrSpec {
            name: "loop",
            default: Some("false"),
            get: |e| Some(e.looping.to_string()),
        },
        AttrSpec {
            name: "silent",
            default: Some("false"),
            get: |e| Some(e.silent.to_string()),
        },
    ];
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionsElement {
    pub system_commands: Option<&'static str>,
    pub inputs: Vec<InputElement>,
    pub actions: Vec<ActionElement>,
}

impl XmlNode for ActionsElement {
    const NAME: &'static str = "actions";
    const ATTRIBUTES: &'static [AttrSpec<Self>] = &[AttrSpec {
        name: "hint-systemCommands",
        default: None,
        get: |e| e.system_commands.map(str::to_string),
    }];

    fn children(&self) -> Vec<Content> {
        let inputs = self.inputs.iter().map(XmlNode::to_element);
        let actions = self.actions.iter().map(XmlNode::to_element);
        inputs.chain(actions).map(Content::Element).collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputElement {
    pub id: String,
    pub input_type: &'static str,
    pub title: Option<String>,
    pub place_holder_content: Option<String>,
    pub default_input: Option<String>,
    pub selections: Vec<SelectionElement>,
}

impl XmlNode for InputElement {
    const NAME: &'static str = "input";
    const ATTRIBUTES: &'static [AttrSpec<Self>] = &[
        AttrSpec {
            name: "id",
            default: None,
            get: |e| Some(e.id.clone()),
        },
        AttrSpec {
            name: "type",
            default: None,
            get: |e| Some(e.input_type.to_string()),
        },
        AttrSpec {
            name: "title",
            default: None,
            get: |e| e.title.clone(),
        },
        AttrSpec {
            name: "placeHolderContent",
            default: None,
            get: |e| e.place_holder_content.clone(),
        },
        AttrSpec {
            name: "defaultInput",
            default: None,
            get: |e| e.default_input.clone(),
        },
    ];

    fn children(&self) -> Vec<Content> {
        self.selections
            .iter()
            .map(|selection| Content::Element(selection.to_element()))
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionElement {
    pub id: String,
    pub content: String,
}

impl XmlNode for SelectionElement {
    const NAME: &'static str = "selection";
    const ATTRIBUTES: &'static [AttrSpec<Self>] = &[
        AttrSpec {
            name: "id",
            default: None,
            get: |e| Some(e.id.clone()),
        },
        AttrSpec {
            name: "content",
            default: None,
            get: |e| Some(e.content.clone()),
        },
    ];
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionElement {
    pub content: String,
    pub arguments: String,
    pub activation_type: ToastActivationType,
    pub image_uri: Option<String>,
    pub input_id: Option<String>,
    pub placement: Option<&'static str>,
}

impl XmlNode for ActionElement {
    const NAME: &'static str = "action";
    const ATTRIBUTES: &'static [AttrSpec<Self>] = &[
        AttrSpec {
            name: "content",
            default: None,
            get: |e| Some(e.content.clone()),
        },
        AttrSpec {
            name: "arguments",
            default: None,
            get: |e| Some(e.arguments.clone()),
        },
        AttrSpec {
            name: "activationType",
            default: Some("foreground"),
            get: |e| Some(e.activation_type.as_str().to_string()),
        },
        AttrSpec {
            name: "imageUri",
            default: None,
            get: |e| e.image_uri.clone(),
        },
        AttrSpec {
            name: "hint-inputId",
            default: None,
            get: |e| e.input_id.clone(),
        },
        AttrSpec {
            name: "placement",
            default: None,
            get: |e| e.placement.map(str::to_string),
        },
    ];
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderElement {
    pub id: String,
    pub title: String,
    pub arguments: String,
    pub activation_type: ToastActivationType,
}

impl XmlNode for HeaderElement {
    const NAME: &'static str = "header";
    const ATTRIBUTES: &'static [AttrSpec<Self>] = &[
        AttrSpec {
            name: "id",
            default: None,
            get: |e| Some(e.id.clone()),
        },
        AttrSpec {
            name: "title",
            default: None,
            get: |e| Some(e.title.clone()),
        },
        AttrSpec {
            name: "arguments",
            default: None,
            get: |e| Some(e.arguments.clone()),
        },
        AttrSpec {
            name: "activationType",
            default: Some("foreground"),
            get: |e| Some(e.activation_type.as_str().to_string()),
        },
    ];
}
