//! Containers: groups of components and the root `svg` document

use log::debug;

use super::{Component, Element};
use crate::config::RenderConfig;
use crate::error::MarkupError;
use crate::tree::validate::{validate_value, SCALAR_KINDS};
use crate::tree::{Node, Value};

/// SVG namespace declarations carried by every document, in output order
pub const NAMESPACES: [(&str, &str); 3] = [
    ("xmlns", "http://www.w3.org/2000/svg"),
    ("xmlns:inkscape", "http://www.inkscape.org/namespaces/inkscape"),
    ("xmlns:xlink", "http://www.w3.org/1999/xlink"),
];

/// XML declaration emitted before standalone documents
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;

/// An element that owns an ordered list of child components
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    element: Element,
    components: Vec<Component>,
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl Group {
    /// A plain `g` group
    pub fn new() -> Self {
        Self::tagged("g")
    }

    /// A group with a custom tag name, such as `defs` or `pattern`
    pub fn tagged(tag_name: impl Into<String>) -> Self {
        Self {
            element: Element::new(tag_name),
            components: Vec::new(),
        }
    }

    /// An Inkscape layer: a `g` marked with `inkscape:groupmode="layer"`
    pub fn layer(id: impl Into<Value>) -> Self {
        Self::new()
            .with_prop("inkscape:groupmode", "layer")
            .with_prop("id", id)
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn components(&self) -> &[Component] {
        &self.components
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

    /// Append a component
    pub fn add(&mut self, component: impl Into<Component>) -> &mut Self {
        self.components.push(component.into());
        self
    }

    /// Owned form of [`Group::add`]
    pub fn with(mut self, component: impl Into<Component>) -> Self {
        self.add(component);
        self
    }

    pub fn export(&self) -> Result<Node, MarkupError> {
        let mut node = self.element.export()?;
        let children = self
            .components
            .iter()
            .map(Component::export)
            .collect::<Result<Vec<_>, _>>()?;
        node.add_nodes(children);
        Ok(node)
    }
}

/// The root `svg` element with namespace declarations and pixel size
///
/// Width and height are kept as given and checked on export, where they
/// must be strings or numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    width: Value,
    height: Value,
    group: Group,
}

impl Document {
    pub fn new(width: impl Into<Value>, height: impl Into<Value>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
            group: Group::tagged("svg"),
        }
    }

    pub fn width(&self) -> &Value {
        &self.width
    }

    pub fn height(&self) -> &Value {
        &self.height
    }

    pub fn components(&self) -> &[Component] {
        self.group.components()
    }

    pub fn set_prop(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.group.set_prop(name, value);
        self
    }

    pub fn set_props<I, K, V>(&mut self, props: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.group.set_props(props);
        self
    }

    pub fn add(&mut self, component: impl Into<Component>) -> &mut Self {
        self.group.add(component);
        self
    }

    pub fn with(mut self, component: impl Into<Component>) -> Self {
        self.add(component);
        self
    }

    /// Build the `svg` node: namespaces, size, then caller properties
    pub fn export(&self) -> Result<Node, MarkupError> {
        validate_value(&self.width, None, SCALAR_KINDS)?;
        validate_value(&self.height, None, SCALAR_KINDS)?;

        let mut node = Node::new("svg")?;
        node.add_attrs(NAMESPACES)?
            .add_attr("width", format!("{}px", self.width))?
            .add_attr("height", format!("{}px", self.height))?;

        let body = self.group.export()?;
        node.add_attrs(body.attributes())?;
        node.add_nodes(body.into_children());
        Ok(node)
    }

    /// Export and render the whole document
    pub fn render(&self, config: &RenderConfig) -> Result<String, MarkupError> {
        debug!(
            "rendering document with {} top-level components (indent {}, standalone {})",
            self.group.components().len(),
            config.indent,
            config.standalone
        );
        let body = self.export()?.render(config.spacer());
        if config.standalone {
            Ok(format!("{}\n{}", XML_DECLARATION, body))
        } else {
            Ok(body)
        }
    }
}
