//! Node path selectors
//!
//! A selector like `Alias/Identifier` names a node type (`Identifier`) and the
//! chain of ancestors it must be reached through (`Alias`), written
//! outermost-first. Selectors are parsed once into a [`NodeSelector`] so that
//! resolution never touches the original string again.

use std::fmt;

/// Separator between segments of a selector path
pub const PATH_SEPARATOR: char = '/';

/// Ancestor segment that matches any single node type
pub const WILDCARD: &str = "*";

/// Errors produced while parsing a selector string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// The selector was empty or only whitespace
    Empty,
    /// A segment between two separators was empty (e.g. `Alias//String`)
    EmptySegment(String),
    /// The final segment was a wildcard, which would match every node
    WildcardTarget(String),
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorError::Empty => write!(f, "empty selector"),
            SelectorError::EmptySegment(s) => write!(f, "empty segment in selector `{}`", s),
            SelectorError::WildcardTarget(s) => {
                write!(f, "selector `{}` must end in a concrete node type", s)
            }
        }
    }
}

impl std::error::Error for SelectorError {}

/// A parsed node path selector
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeSelector {
    /// The node type this selector applies to (the rightmost segment)
    node_type: String,
    /// Required ancestors, nearest first
    ancestors: Vec<String>,
}

impl NodeSelector {
    /// Create a selector from already separated parts.
    ///
    /// `ancestors` is nearest-first, the same order a node's ancestor chain
    /// is walked in.
    pub fn new(node_type: impl Into<String>, ancestors: Vec<String>) -> Self {
        Self {
            node_type: node_type.into(),
            ancestors,
        }
    }

    /// Parse a `/`-separated selector such as `Message/String`
    pub fn parse(selector: &str) -> Result<Self, SelectorError> {
        let selector = selector.trim();
        if selector.is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut segments: Vec<String> = Vec::new();
        for segment in selector.split(PATH_SEPARATOR) {
            let segment = segment.trim();
            if segment.is_empty() {
                return Err(SelectorError::EmptySegment(selector.to_string()));
            }
            segments.push(segment.to_string());
        }

        // split() on a non-empty string yields at least one segment
        let node_type = segments.pop().ok_or(SelectorError::Empty)?;
        if node_type == WILDCARD {
            return Err(SelectorError::WildcardTarget(selector.to_string()));
        }
        segments.reverse();

        Ok(Self {
            node_type,
            ancestors: segments,
        })
    }

    /// The node type this selector targets
    pub fn node_type(&self) -> &str {
        &self.node_type
    }

    /// Required ancestors, nearest first
    pub fn ancestors(&self) -> &[String] {
        &self.ancestors
    }

    /// Number of path segments, including the target node type
    pub fn len(&self) -> usize {
        self.ancestors.len() + 1
    }

    /// Always false: a selector has at least its target segment
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of segments that name a concrete type rather than `*`
    pub fn concrete_len(&self) -> usize {
        1 + self.ancestors.iter().filter(|a| *a != WILDCARD).count()
    }

    /// Check whether a node of `node_type` with the given ancestor chain
    /// (nearest first) is selected.
    ///
    /// A chain shorter than the required ancestors never matches.
    pub fn matches<S: AsRef<str>>(&self, node_type: &str, ancestor_chain: &[S]) -> bool {
        if self.node_type != node_type || ancestor_chain.len() < self.ancestors.len() {
            return false;
        }

        self.ancestors
            .iter()
            .zip(ancestor_chain)
            .all(|(required, actual)| required == WILDCARD || required == actual.as_ref())
    }
}

impl fmt::Display for NodeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ancestor in self.ancestors.iter().rev() {
            write!(f, "{}{}", ancestor, PATH_SEPARATOR)?;
        }
        f.write_str(&self.node_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_segment() {
        let sel = NodeSelector::parse("LineComment").unwrap();
        assert_eq!(sel.node_type(), "LineComment");
        assert!(sel.ancestors().is_empty());
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn test_parse_stores_ancestors_nearest_first() {
        let sel = NodeSelector::parse("Program/Alias/Identifier").unwrap();
        assert_eq!(sel.node_type(), "Identifier");
        assert_eq!(sel.ancestors(), &["Alias".to_string(), "Program".to_string()]);
        assert_eq!(sel.len(), 3);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(NodeSelector::parse(""), Err(SelectorError::Empty));
        assert_eq!(NodeSelector::parse("   "), Err(SelectorError::Empty));
        assert!(matches!(
            NodeSelector::parse("Alias//String"),
            Err(SelectorError::EmptySegment(_))
        ));
        assert!(matches!(
            NodeSelector::parse("/String"),
            Err(SelectorError::EmptySegment(_))
        ));
        assert!(matches!(
            NodeSelector::parse("Alias/*"),
            Err(SelectorError::WildcardTarget(_))
        ));
    }

    #[test]
    fn test_display_restores_selector_syntax() {
        let sel = NodeSelector::parse("Program/Alias/Identifier").unwrap();
        assert_eq!(sel.to_string(), "Program/Alias/Identifier");
    }

    #[test]
    fn test_matches_bare_selector_ignores_ancestry() {
        let sel = NodeSelector::parse("LineComment").unwrap();
        assert!(sel.matches::<&str>("LineComment", &[]));
        assert!(sel.matches("LineComment", &["Alias", "Program"]));
        assert!(!sel.matches::<&str>("Identifier", &[]));
    }

    #[test]
    fn test_matches_requires_nearest_ancestors_in_order() {
        let sel = NodeSelector::parse("Alias/Identifier").unwrap();
        assert!(sel.matches("Identifier", &["Alias", "Program"]));
        assert!(!sel.matches("Identifier", &["Message", "Program"]));
        // Alias is not the immediate parent
        assert!(!sel.matches("Identifier", &["Group", "Alias"]));
    }

    #[test]
    fn test_short_chain_does_not_match() {
        let sel = NodeSelector::parse("Program/Alias/Identifier").unwrap();
        assert!(!sel.matches("Identifier", &["Alias"]));
        assert!(!sel.matches::<&str>("Identifier", &[]));
    }

    #[test]
    fn test_wildcard_matches_any_single_ancestor() {
        let sel = NodeSelector::parse("Program/*/String").unwrap();
        assert_eq!(sel.concrete_len(), 2);
        assert!(sel.matches("String", &["Alias", "Program"]));
        assert!(sel.matches("String", &["Message", "Program"]));
        assert!(!sel.matches("String", &["Message"]));
    }
}
