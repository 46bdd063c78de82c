//! Name and value validation
//!
//! Tag and attribute names follow a small grammar: one segment, or two
//! segments joined by a single colon (`xlink:href`). A segment starts with
//! an ASCII letter or underscore and continues with letters, digits,
//! hyphens and underscores. Names are lexed with logos and the token
//! sequence is checked against that shape.

use std::fmt;

use logos::Logos;

use super::{Value, ValueKind};
use crate::error::MarkupError;

/// The runtime types a name may take
pub const NAME_KINDS: &[ValueKind] = &[ValueKind::Str];

/// The runtime types an attribute value or comment may take
pub const SCALAR_KINDS: &[ValueKind] = &[ValueKind::Str, ValueKind::Int, ValueKind::Float];

/// The grammars a textual value can be checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Tag or attribute name: `segment(:segment)?`
    Name,
    /// Attribute value: anything without `"`, `<` or `>`
    AttrValue,
    /// Comment content: non-empty and never containing `--`
    CommentContent,
}

impl Pattern {
    /// Whether `text` matches this pattern in full
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Pattern::Name => is_valid_name(text),
            Pattern::AttrValue => !text.contains(['"', '<', '>']),
            Pattern::CommentContent => !text.is_empty() && !text.contains("--"),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pattern::Name => "tag or attribute name",
            Pattern::AttrValue => "attribute value",
            Pattern::CommentContent => "comment content",
        };
        f.write_str(name)
    }
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum NameToken {
    #[regex(r"[A-Za-z_][A-Za-z0-9_\-]*")]
    Segment,
    #[token(":")]
    Colon,
}

fn is_valid_name(text: &str) -> bool {
    let mut tokens = Vec::with_capacity(3);
    for token in NameToken::lexer(text) {
        match token {
            Ok(token) => tokens.push(token),
            Err(()) => return false,
        }
    }
    matches!(
        tokens.as_slice(),
        [NameToken::Segment] | [NameToken::Segment, NameToken::Colon, NameToken::Segment]
    )
}

/// Check a value's runtime type and, if it is textual, its grammar
///
/// An empty `allowed` list accepts any type. Non-textual values are never
/// matched against `pattern`.
pub fn validate_value(
    value: &Value,
    pattern: Option<Pattern>,
    allowed: &[ValueKind],
) -> Result<(), MarkupError> {
    if !allowed.is_empty() && !allowed.contains(&value.kind()) {
        return Err(MarkupError::Type {
            value: value.to_string(),
            found: value.kind(),
            allowed: allowed.to_vec(),
        });
    }

    if let (Some(pattern), Some(text)) = (pattern, value.as_str()) {
        if !pattern.matches(text) {
            return Err(MarkupError::Value {
                value: text.to_string(),
                pattern,
            });
        }
    }

    Ok(())
}

/// Validate a tag or attribute name and return it as a string
pub fn validate_name(name: &Value) -> Result<String, MarkupError> {
    validate_value(name, Some(Pattern::Name), NAME_KINDS)?;
    Ok(name.to_string())
}
