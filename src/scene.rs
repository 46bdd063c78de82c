//! Declarative scene descriptions
//!
//! A scene is a TOML document describing an SVG [`Document`]. It is the
//! input format of the `tagtree` binary:
//!
//! ```toml
//! width = 640
//! height = 480
//!
//! [[children]]
//! comment = "background"
//!
//! [[children]]
//! tag = "rect"
//! props = { x = 0, y = 0, width = 640, height = 480, fill = "#ffffff" }
//!
//! [[children]]
//! layer = "Layer 1"
//! children = [
//!     { tag = "circle", props = { cx = 320, cy = 240, r = 40 } },
//!     { text = "center", props = { x = 320, y = 240 } },
//! ]
//! ```
//!
//! Each child names its kind with exactly one of `comment`, `raw`, `text`,
//! `layer` or `tag`. An entry with `children` is a group, and its tag
//! defaults to `g`. Unknown keys, and keys that do not apply to the kind
//! (`props` on a comment, `children` on a text), are decode errors.

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::svg::{Component, Document, Element, Group, Text};
use crate::tree::Value;

/// Errors that can occur when decoding a scene
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Failed to parse scene TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

type Props = IndexMap<String, Value>;

/// The root of a scene: document size, root properties and children
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    pub width: Value,
    pub height: Value,
    #[serde(default)]
    pub props: Props,
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

/// One entry in a scene's child list
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "SceneEntry")]
pub enum SceneNode {
    Comment {
        comment: Value,
    },
    Raw {
        raw: String,
    },
    Text {
        text: String,
        props: Props,
    },
    Layer {
        layer: Value,
        props: Props,
        children: Vec<SceneNode>,
    },
    Group {
        tag: String,
        props: Props,
        children: Vec<SceneNode>,
    },
    Element {
        tag: String,
        props: Props,
    },
}

/// The raw table behind a [`SceneNode`], before its kind is decided
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneEntry {
    comment: Option<Value>,
    raw: Option<String>,
    text: Option<String>,
    layer: Option<Value>,
    tag: Option<String>,
    props: Option<Props>,
    children: Option<Vec<SceneNode>>,
}

impl TryFrom<SceneEntry> for SceneNode {
    type Error = String;

    fn try_from(entry: SceneEntry) -> Result<Self, Self::Error> {
        let SceneEntry {
            comment,
            raw,
            text,
            layer,
            tag,
            props,
            children,
        } = entry;

        let kinds: Vec<&str> = [
            ("comment", comment.is_some()),
            ("raw", raw.is_some()),
            ("text", text.is_some()),
            ("layer", layer.is_some()),
            ("tag", tag.is_some()),
        ]
        .into_iter()
        .filter_map(|(key, present)| present.then_some(key))
        .collect();
        if kinds.len() > 1 {
            return Err(format!("scene entry has conflicting keys: {}", kinds.join(", ")));
        }

        let reject = |key: &str, present: bool| match (kinds.first(), present) {
            (Some(kind), true) => Err(format!("`{}` is not allowed on a `{}` entry", key, kind)),
            _ => Ok(()),
        };

        if let Some(comment) = comment {
            reject("props", props.is_some())?;
            reject("children", children.is_some())?;
            return Ok(SceneNode::Comment { comment });
        }
        if let Some(raw) = raw {
            reject("props", props.is_some())?;
            reject("children", children.is_some())?;
            return Ok(SceneNode::Raw { raw });
        }
        if let Some(text) = text {
            reject("children", children.is_some())?;
            let props = props.unwrap_or_default();
            return Ok(SceneNode::Text { text, props });
        }

        let props = props.unwrap_or_default();
        match (layer, tag, children) {
            (Some(layer), _, children) => Ok(SceneNode::Layer {
                layer,
                props,
                children: children.unwrap_or_default(),
            }),
            (None, tag, Some(children)) => Ok(SceneNode::Group {
                tag: tag.unwrap_or_else(|| "g".to_string()),
                props,
                children,
            }),
            (None, Some(tag), None) => Ok(SceneNode::Element { tag, props }),
            (None, None, None) => Err(
                "scene entry needs one of `comment`, `raw`, `text`, `layer`, `tag` or `children`"
                    .to_string(),
            ),
        }
    }
}

impl Scene {
    /// Decode a scene from TOML
    pub fn from_str(source: &str) -> Result<Self, SceneError> {
        let scene: Scene = toml::from_str(source)?;
        debug!(
            "loaded scene {}x{} with {} top-level children",
            scene.width,
            scene.height,
            scene.children.len()
        );
        Ok(scene)
    }

    /// Build the document this scene describes
    ///
    /// Nothing is validated here; names and values are checked when the
    /// document is exported.
    pub fn into_document(self) -> Document {
        let mut document = Document::new(self.width, self.height);
        document.set_props(self.props);
        for child in self.children {
            document.add(child.into_component());
        }
        document
    }
}

impl SceneNode {
    pub fn into_component(self) -> Component {
        match self {
            SceneNode::Comment { comment } => Component::Comment(comment),
            SceneNode::Raw { raw } => Component::Raw(raw),
            SceneNode::Text { text, props } => Text::new(text).with_props(props).into(),
            SceneNode::Layer {
                layer,
                props,
                children,
            } => collect_children(Group::layer(layer).with_props(props), children).into(),
            SceneNode::Group {
                tag,
                props,
                children,
            } => collect_children(Group::tagged(tag).with_props(props), children).into(),
            SceneNode::Element { tag, props } => Element::new(tag).with_props(props).into(),
        }
    }
}

fn collect_children(mut group: Group, children: Vec<SceneNode>) -> Group {
    for child in children {
        group.add(child.into_component());
    }
    group
}
