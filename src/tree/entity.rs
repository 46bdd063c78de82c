//! Renderable tree entities: nodes, comments and raw text

use std::fmt;

use indexmap::IndexMap;

use super::validate::{validate_name, validate_value, Pattern, SCALAR_KINDS};
use super::{Spacer, Value};
use crate::error::MarkupError;

/// Anything that can render itself at an indentation level
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Node(Node),
    Comment(Comment),
    Raw(RawText),
}

impl Entity {
    pub fn render(&self, spacer: Spacer) -> String {
        match self {
            Entity::Node(node) => node.render(spacer),
            Entity::Comment(comment) => comment.render(spacer),
            Entity::Raw(raw) => raw.render(spacer),
        }
    }
}

impl From<Node> for Entity {
    fn from(node: Node) -> Self {
        Entity::Node(node)
    }
}

impl From<Comment> for Entity {
    fn from(comment: Comment) -> Self {
        Entity::Comment(comment)
    }
}

impl From<RawText> for Entity {
    fn from(raw: RawText) -> Self {
        Entity::Raw(raw)
    }
}

/// Pre-formatted content, rendered verbatim after the indent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawText {
    content: String,
}

impl RawText {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn render(&self, spacer: Spacer) -> String {
        format!("{}{}", spacer, self.content)
    }
}

/// A markup comment, `<!-- content -->`
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    content: Value,
}

impl Comment {
    /// Create a comment; textual content must be non-empty and free of `--`
    pub fn new(content: impl Into<Value>) -> Result<Self, MarkupError> {
        let content = content.into();
        validate_value(&content, Some(Pattern::CommentContent), SCALAR_KINDS)?;
        Ok(Self { content })
    }

    pub fn content(&self) -> &Value {
        &self.content
    }

    pub fn render(&self, spacer: Spacer) -> String {
        format!("{}<!-- {} -->", spacer, self.content)
    }
}

/// The children handed to [`Node::add_nodes`]
///
/// A single entity, an absent one, or a sequence of either, nested to any
/// depth. Sequences are flattened in order when they are appended.
#[derive(Debug, Clone, PartialEq)]
pub enum Children {
    None,
    One(Entity),
    Many(Vec<Children>),
}

impl Children {
    fn flatten_into(self, out: &mut Vec<Entity>) {
        match self {
            Children::None => {}
            Children::One(entity) => out.push(entity),
            Children::Many(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }
}

impl From<Entity> for Children {
    fn from(entity: Entity) -> Self {
        Children::One(entity)
    }
}

impl From<Node> for Children {
    fn from(node: Node) -> Self {
        Children::One(Entity::Node(node))
    }
}

impl From<Comment> for Children {
    fn from(comment: Comment) -> Self {
        Children::One(Entity::Comment(comment))
    }
}

impl From<RawText> for Children {
    fn from(raw: RawText) -> Self {
        Children::One(Entity::Raw(raw))
    }
}

impl<T: Into<Children>> From<Option<T>> for Children {
    fn from(child: Option<T>) -> Self {
        child.map_or(Children::None, Into::into)
    }
}

impl<T: Into<Children>> From<Vec<T>> for Children {
    fn from(items: Vec<T>) -> Self {
        Children::Many(items.into_iter().map(Into::into).collect())
    }
}

/// A named element with ordered attributes and child entities
///
/// Renders self-closing (`<name a="1" />`) when it has no children, and as
/// an open/close pair with children one level deeper otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    attributes: IndexMap<String, Value>,
    children: Vec<Entity>,
}

impl Node {
    /// Create an empty node; the name must match the name grammar
    pub fn new(name: impl Into<Value>) -> Result<Self, MarkupError> {
        let name = validate_name(&name.into())?;
        Ok(Self {
            name,
            attributes: IndexMap::new(),
            children: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &IndexMap<String, Value> {
        &self.attributes
    }

    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn children(&self) -> &[Entity] {
        &self.children
    }

    pub fn into_children(self) -> Vec<Entity> {
        self.children
    }

    /// Set a single attribute
    ///
    /// Setting an existing name replaces its value and keeps its position.
    pub fn add_attr(
        &mut self,
        name: impl Into<Value>,
        value: impl Into<Value>,
    ) -> Result<&mut Self, MarkupError> {
        let name = validate_name(&name.into())?;
        let value = value.into();
        validate_value(&value, Some(Pattern::AttrValue), SCALAR_KINDS)?;
        self.attributes.insert(name, value);
        Ok(self)
    }

    /// Merge attributes in order
    ///
    /// Entries are validated one at a time; on failure, entries before the
    /// offending one have already been applied.
    pub fn add_attrs<I, K, V>(&mut self, attrs: I) -> Result<&mut Self, MarkupError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        for (name, value) in attrs {
            self.add_attr(name, value)?;
        }
        Ok(self)
    }

    /// Owned form of [`Node::add_attrs`] for building nodes inline
    pub fn with_attrs<I, K, V>(mut self, attrs: I) -> Result<Self, MarkupError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        self.add_attrs(attrs)?;
        Ok(self)
    }

    /// Append children in order, flattening nested sequences
    pub fn add_nodes(&mut self, children: impl Into<Children>) -> &mut Self {
        children.into().flatten_into(&mut self.children);
        self
    }

    /// Owned form of [`Node::add_nodes`] for building nodes inline
    pub fn with_nodes(mut self, children: impl Into<Children>) -> Self {
        self.add_nodes(children);
        self
    }

    pub fn render(&self, spacer: Spacer) -> String {
        let attrs = if self.attributes.is_empty() {
            String::new()
        } else {
            let pairs = self
                .attributes
                .iter()
                .map(|(name, value)| format!(r#"{}="{}""#, name, value))
                .collect::<Vec<_>>()
                .join(" ");
            format!(" {}", pairs)
        };

        if self.children.is_empty() {
            return format!("{}<{}{} />", spacer, self.name, attrs);
        }

        let mut lines = Vec::with_capacity(self.children.len() + 2);
        lines.push(format!("{}<{}{}>", spacer, self.name, attrs));
        lines.extend(self.children.iter().map(|child| child.render(spacer + 1)));
        lines.push(format!("{}</{}>", spacer, self.name));
        lines.join("\n")
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Spacer::new(0, 1)))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Spacer::new(0, 1)))
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Spacer::new(0, 1)))
    }
}

impl fmt::Display for RawText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str) -> Node {
        Node::new(name).unwrap()
    }

    #[test]
    fn test_empty_node() {
        assert_eq!(node("some_name").to_string(), "<some_name />");
    }

    #[test]
    fn test_node_rejects_bad_names() {
        assert!(Node::new("").unwrap_err().is_value_error());
        assert!(Node::new("a:b:c").unwrap_err().is_value_error());
        assert!(Node::new("9lives").unwrap_err().is_value_error());
        assert!(Node::new(123).unwrap_err().is_type_error());
    }

    #[test]
    fn test_attribute_errors() {
        let mut element = node("element");
        assert!(element.add_attr("", "v").unwrap_err().is_value_error());
        assert!(element.add_attr("a", "<").unwrap_err().is_value_error());
        assert!(element.add_attr(123, "v").unwrap_err().is_type_error());
        assert!(element.add_attr("a", true).unwrap_err().is_type_error());
        assert!(element.attributes().is_empty());
    }

    #[test]
    fn test_numeric_attribute_values() {
        let element = node("circle")
            .with_attrs([("r", Value::from(5)), ("cx", Value::from(1.25))])
            .unwrap();
        assert_eq!(element.to_string(), r#"<circle r="5" cx="1.25" />"#);
    }

    #[test]
    fn test_duplicate_attribute_last_write_wins() {
        let mut element = node("rect");
        element
            .add_attrs([("x", "1"), ("y", "2")])
            .unwrap()
            .add_attrs([("x", "3")])
            .unwrap();
        assert_eq!(element.to_string(), r#"<rect x="3" y="2" />"#);
        assert_eq!(element.attr("x"), Some(&Value::from("3")));
    }

    #[test]
    fn test_add_attrs_fails_fast() {
        let mut element = node("rect");
        let err = element
            .add_attrs([("x", "1"), ("y", ">"), ("z", "3")])
            .unwrap_err();
        assert!(err.is_value_error());
        assert_eq!(element.attributes().len(), 1);
        assert_eq!(element.attr("z"), None);
    }

    #[test]
    fn test_add_nodes_flattens_and_skips_none() {
        let mut root = node("root");
        root.add_nodes(vec![
            Children::from(node("a")),
            Children::None,
            Children::from(vec![node("b"), node("c")]),
            Children::from(Some(node("d"))),
            Children::from(None::<Node>),
        ]);
        let names: Vec<_> = root
            .children()
            .iter()
            .map(|c| match c {
                Entity::Node(n) => n.name().to_string(),
                other => panic!("unexpected child {other:?}"),
            })
            .collect();
        assert_eq!(names, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_comment() {
        assert_eq!(Comment::new("comment").unwrap().to_string(), "<!-- comment -->");
        assert_eq!(Comment::new(123).unwrap().to_string(), "<!-- 123 -->");
        assert_eq!(Comment::new(0.5).unwrap().to_string(), "<!-- 0.5 -->");
        assert!(Comment::new("").unwrap_err().is_value_error());
        assert!(Comment::new("a--b").unwrap_err().is_value_error());
        assert!(Comment::new(false).unwrap_err().is_type_error());
    }

    #[test]
    fn test_comment_trailing_dash_is_accepted() {
        assert_eq!(Comment::new("x-").unwrap().to_string(), "<!-- x- -->");
    }

    #[test]
    fn test_raw_text_is_verbatim() {
        let raw = RawText::new(r#"<path d="M0 0" />"#);
        assert_eq!(raw.render(Spacer::new(2, 2)), r#"    <path d="M0 0" />"#);
    }

    #[test]
    fn test_render_is_idempotent() {
        let root = node("root").with_nodes(node("inner"));
        let spacer = Spacer::new(1, 4);
        assert_eq!(root.render(spacer), root.render(spacer));
    }

    #[test]
    fn test_render_with_wider_indent() {
        let root = node("root").with_nodes(node("nested").with_nodes(node("inner")));
        assert_eq!(
            root.render(Spacer::new(0, 2)),
            "<root>\n  <nested>\n    <inner />\n  </nested>\n</root>"
        );
    }
}
