//! The structural layer: validated nodes that render to indented markup

pub mod entity;
pub mod spacer;
pub mod validate;
pub mod value;

pub use entity::{Children, Comment, Entity, Node, RawText};
pub use spacer::Spacer;
pub use validate::{validate_value, Pattern};
pub use value::{Value, ValueKind};
