//! The wrapper layer: SVG-flavoured builders that export to tree nodes
//!
//! Callers describe markup as elements with a tag name and properties,
//! grouped into containers. Nothing is validated until a wrapper is
//! exported; export builds a fresh [`Node`](crate::tree::Node) every time.

pub mod element;
pub mod group;

pub use element::{Component, Element, Text};
pub use group::{Document, Group, NAMESPACES, XML_DECLARATION};
