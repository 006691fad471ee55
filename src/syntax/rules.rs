//! Tag rule table
//!
//! Maps node path selectors to highlight tags and resolves the tag for a node
//! from its type and ancestor chain. The most specific matching selector wins:
//! more segments first, then more concrete (non-`*`) segments, then the rule
//! inserted last.

use std::collections::HashMap;
use std::fmt;

use super::selector::{NodeSelector, SelectorError};
use super::tags::HighlightTag;

/// A single (selector, tag) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRule {
    pub selector: NodeSelector,
    pub tag: HighlightTag,
}

impl TagRule {
    pub fn new(selector: NodeSelector, tag: HighlightTag) -> Self {
        Self { selector, tag }
    }

    /// Parse a rule from a selector string
    pub fn parse(selector: &str, tag: HighlightTag) -> Result<Self, SelectorError> {
        Ok(Self::new(NodeSelector::parse(selector)?, tag))
    }

    /// Parse a rule key that may hold several whitespace-separated selectors,
    /// e.g. `"Alias/Identifier Message/Identifier"`. Each selector becomes
    /// its own rule with the same tag.
    pub fn parse_many(key: &str, tag: HighlightTag) -> Result<Vec<Self>, SelectorError> {
        let rules = key
            .split_whitespace()
            .map(|selector| Self::parse(selector, tag))
            .collect::<Result<Vec<_>, _>>()?;

        if rules.is_empty() {
            return Err(SelectorError::Empty);
        }
        Ok(rules)
    }
}

/// Reported when a later rule replaces an earlier one with the same selector.
///
/// Not fatal: the table keeps the later tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateSelectorWarning {
    pub selector: NodeSelector,
    pub previous: HighlightTag,
    pub replacement: HighlightTag,
}

impl fmt::Display for DuplicateSelectorWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "duplicate selector `{}`: {} replaced by {}",
            self.selector, self.previous, self.replacement
        )
    }
}

#[derive(Debug, Clone)]
struct Entry {
    selector: NodeSelector,
    tag: HighlightTag,
    /// Insertion sequence; a replaced selector takes the sequence of its
    /// replacement
    seq: usize,
}

impl Entry {
    fn specificity(&self) -> (usize, usize, usize) {
        (self.selector.len(), self.selector.concrete_len(), self.seq)
    }
}

/// Selector → tag mapping with longest-match resolution.
///
/// Immutable once built and safe to share between highlighting passes.
#[derive(Debug, Clone, Default)]
pub struct TagRuleTable {
    /// Entries grouped by target node type
    by_type: HashMap<String, Vec<Entry>>,
    /// Rules in the order they took effect
    order: Vec<NodeSelector>,
    warnings: Vec<DuplicateSelectorWarning>,
}

impl TagRuleTable {
    /// Build a table from rules in declaration order.
    ///
    /// A rule whose selector was already seen replaces the earlier one and
    /// records a [`DuplicateSelectorWarning`].
    pub fn build(rules: impl IntoIterator<Item = TagRule>) -> Self {
        let mut table = Self::default();

        for (seq, rule) in rules.into_iter().enumerate() {
            let entries = table
                .by_type
                .entry(rule.selector.node_type().to_string())
                .or_default();

            if let Some(existing) = entries.iter_mut().find(|e| e.selector == rule.selector) {
                let warning = DuplicateSelectorWarning {
                    selector: rule.selector.clone(),
                    previous: existing.tag,
                    replacement: rule.tag,
                };
                tracing::warn!("{}", warning);
                table.warnings.push(warning);

                existing.tag = rule.tag;
                existing.seq = seq;
                table.order.retain(|s| s != &rule.selector);
            } else {
                entries.push(Entry {
                    selector: rule.selector.clone(),
                    tag: rule.tag,
                    seq,
                });
            }
            table.order.push(rule.selector);
        }

        tracing::debug!(
            "Built tag rule table: {} rules over {} node types, {} duplicate(s)",
            table.order.len(),
            table.by_type.len(),
            table.warnings.len()
        );

        table
    }

    /// Resolve the tag for a node.
    ///
    /// `ancestor_chain` lists ancestor node types from the parent up to the
    /// root. Returns `None` when no selector applies.
    pub fn resolve<S: AsRef<str>>(
        &self,
        node_type: &str,
        ancestor_chain: &[S],
    ) -> Option<HighlightTag> {
        self.by_type
            .get(node_type)?
            .iter()
            .filter(|e| e.selector.matches(node_type, ancestor_chain))
            .max_by_key(|e| e.specificity())
            .map(|e| e.tag)
    }

    /// Look up the tag stored for an exact selector
    pub fn get(&self, selector: &NodeSelector) -> Option<HighlightTag> {
        self.by_type
            .get(selector.node_type())?
            .iter()
            .find(|e| &e.selector == selector)
            .map(|e| e.tag)
    }

    /// Rules in effect, in the order they were (last) inserted
    pub fn iter(&self) -> impl Iterator<Item = TagRule> + '_ {
        self.order.iter().filter_map(|selector| {
            self.get(selector)
                .map(|tag| TagRule::new(selector.clone(), tag))
        })
    }

    /// Number of distinct selectors
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Duplicate-selector warnings collected during [`TagRuleTable::build`]
    pub fn warnings(&self) -> &[DuplicateSelectorWarning] {
        &self.warnings
    }
}

impl FromIterator<TagRule> for TagRuleTable {
    fn from_iter<I: IntoIterator<Item = TagRule>>(iter: I) -> Self {
        Self::build(iter)
    }
}
