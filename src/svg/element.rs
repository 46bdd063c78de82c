//! SVG element wrappers: a tag name plus a property map

use indexmap::IndexMap;
use log::trace;

use super::Group;
use crate::error::MarkupError;
use crate::tree::{Comment, Entity, Node, RawText, Value};

/// An element described by its tag name and properties
///
/// Properties are stored as given and only validated when the element is
/// exported to a [`Node`].
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag_name: String,
    properties: IndexMap<String, Value>,
}

impl Element {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            properties: IndexMap::new(),
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn properties(&self) -> &IndexMap<String, Value> {
        &self.properties
    }

    pub fn prop(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Set one property; an existing name keeps its position
    pub fn set_prop(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Merge properties in order, later names overwriting earlier ones
    pub fn set_props<I, K, V>(&mut self, props: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (name, value) in props {
            self.set_prop(name, value);
        }
        self
    }

    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_prop(name, value);
        self
    }

    pub fn with_props<I, K, V>(mut self, props: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.set_props(props);
        self
    }

    /// Build the node for this element, validating tag and properties
    pub fn export(&self) -> Result<Node, MarkupError> {
        trace!("exporting <{}> with {} properties", self.tag_name, self.properties.len());
        let mut node = Node::new(self.tag_name.as_str())?;
        node.add_attrs(&self.properties)?;
        Ok(node)
    }
}

/// A `text` element carrying a literal payload
///
/// The payload is emitted verbatim as the element's only child.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    element: Element,
    content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            element: Element::new("text"),
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn set_prop(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.element.set_prop(name, value);
        self
    }

    pub fn set_props<I, K, V>(&mut self, props: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.element.set_props(props);
        self
    }

    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_prop(name, value);
        self
    }

    pub fn with_props<I, K, V>(mut self, props: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.set_props(props);
        self
    }

    pub fn export(&self) -> Result<Node, MarkupError> {
        let mut node = self.element.export()?;
        node.add_nodes(RawText::new(self.content.as_str()));
        Ok(node)
    }
}

/// Anything a [`Group`] can hold
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Element(Element),
    Text(Text),
    Group(Group),
    /// Comment content, validated on export
    Comment(Value),
    /// A pre-formatted fragment, emitted verbatim
    Raw(String),
}

impl Component {
    pub fn export(&self) -> Result<Entity, MarkupError> {
        let entity = match self {
            Component::Element(element) => Entity::Node(element.export()?),
            Component::Text(text) => Entity::Node(text.export()?),
            Component::Group(group) => Entity::Node(group.export()?),
            Component::Comment(content) => Entity::Comment(Comment::new(content)?),
            Component::Raw(content) => Entity::Raw(RawText::new(content.as_str())),
        };
        Ok(entity)
    }
}

impl From<Element> for Component {
    fn from(element: Element) -> Self {
        Component::Element(element)
    }
}

impl From<Text> for Component {
    fn from(text: Text) -> Self {
        Component::Text(text)
    }
}

impl From<Group> for Component {
    fn from(group: Group) -> Self {
        Component::Group(group)
    }
}
