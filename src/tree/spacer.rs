//! Indentation levels for rendering

use std::fmt;
use std::ops::Add;

/// An indentation level that renders to a run of spaces
///
/// A spacer is immutable: adding to it yields a new spacer one or more
/// levels deeper with the same indent unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spacer {
    level: usize,
    indent: usize,
}

impl Spacer {
    /// Create a spacer at `level`, where each level is `indent` spaces wide
    pub fn new(level: usize, indent: usize) -> Self {
        Self { level, indent }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Number of spaces this spacer renders to
    pub fn width(&self) -> usize {
        self.level * self.indent
    }

    /// A spacer `delta` levels deeper
    pub fn deeper(self, delta: usize) -> Self {
        Self {
            level: self.level + delta,
            indent: self.indent,
        }
    }
}

impl Add<usize> for Spacer {
    type Output = Spacer;

    fn add(self, delta: usize) -> Spacer {
        self.deeper(delta)
    }
}

impl fmt::Display for Spacer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:width$}", "", width = self.width())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_produces_proper_space() {
        let cases = [(0, 1, 0), (0, 2, 0), (2, 2, 4), (1, 3, 3)];
        for (level, indent, expected) in cases {
            let spacer = Spacer::new(level, indent);
            assert_eq!(spacer.to_string(), " ".repeat(expected));
        }
    }

    #[test]
    fn test_increase_level() {
        let spacer = Spacer::new(0, 2);
        assert_eq!(spacer.to_string(), "");

        let spacer2 = spacer + 1;
        assert_eq!(spacer2.to_string(), " ".repeat(2));

        let spacer3 = spacer + 2;
        assert_eq!(spacer3.to_string(), " ".repeat(4));

        let spacer4 = spacer2 + 1;
        assert_eq!(spacer4.to_string(), " ".repeat(4));
    }

    #[test]
    fn test_add_does_not_mutate() {
        let spacer = Spacer::new(1, 2);
        let _ = spacer + 3;
        assert_eq!(spacer.level(), 1);
        assert_eq!(spacer.indent(), 2);
    }

    #[test]
    fn test_zero_indent_unit() {
        assert_eq!(Spacer::new(5, 0).to_string(), "");
    }
}
