//! tagtree - validated markup trees rendered to indented SVG
//!
//! The crate has two layers. [`tree`] holds the structural entities
//! ([`Node`], [`Comment`], [`RawText`]) that validate their names and
//! values on construction and render themselves at an indentation level.
//! [`svg`] holds SVG-flavoured wrappers ([`Element`], [`Text`], [`Group`],
//! [`Document`]) that describe markup as tag names, properties and child
//! lists and export to the structural layer on demand.
//!
//! # Example
//!
//! ```rust
//! use tagtree::{Document, Element, Group, RenderConfig};
//!
//! let doc = Document::new(100, 50).with(
//!     Group::layer("shapes").with(Element::new("rect").with_prop("width", 10)),
//! );
//!
//! let svg = doc.render(&RenderConfig::default()).unwrap();
//! assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
//! assert!(svg.contains("\n  <rect width=\"10\" />\n"));
//! ```

pub mod config;
pub mod error;
pub mod scene;
pub mod svg;
pub mod tree;

pub use config::{ConfigError, RenderConfig};
pub use error::MarkupError;
pub use scene::{Scene, SceneError, SceneNode};
pub use svg::{Component, Document, Element, Group, Text};
pub use tree::{Children, Comment, Entity, Node, RawText, Spacer, Value, ValueKind};

use thiserror::Error;

/// Errors that can occur during the scene render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error while decoding the scene description
    #[error("scene error: {0}")]
    Scene(#[from] SceneError),

    /// Error while validating the markup tree
    #[error("markup error: {0}")]
    Markup(#[from] MarkupError),
}

/// Render a TOML scene description to SVG
///
/// # Example
///
/// ```rust
/// use tagtree::{render_scene, RenderConfig};
///
/// let svg = render_scene(
///     r#"
///     width = 20
///     height = 10
///     [[children]]
///     tag = "circle"
///     props = { cx = 5, cy = 5, r = 5 }
///     "#,
///     &RenderConfig::default(),
/// )
/// .unwrap();
///
/// assert!(svg.contains(r#"<circle cx="5" cy="5" r="5" />"#));
/// ```
pub fn render_scene(source: &str, config: &RenderConfig) -> Result<String, RenderError> {
    let document = Scene::from_str(source)?.into_document();
    Ok(document.render(config)?)
}
